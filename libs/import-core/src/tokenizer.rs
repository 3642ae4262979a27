//! Splits one import line into `Key: Value` fields.
//!
//! Segments are separated by `|`. Each segment is split on its first `:`;
//! the key is trimmed and lower-cased, the value is trimmed. Keys outside the
//! format's vocabulary are dropped.

use crate::error::LineError;
use crate::fields::FieldValue;

/// How a segment without a `:` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPolicy {
    /// The line fails with an invalid-part error.
    Strict,
    /// The segment is skipped.
    Lenient,
}

/// The fixed key set of one import format.
pub trait Vocabulary: Copy + Eq {
    /// Map a lower-cased, trimmed key to a field.
    fn from_key(key: &str) -> Option<Self>;
}

/// Known fields of one line in the order they appeared.
#[derive(Debug, Clone)]
pub struct FieldMap<'a, K> {
    entries: Vec<(K, &'a str)>,
}

impl<'a, K: Vocabulary> FieldMap<'a, K> {
    /// Look up a field. When a key repeats, the last occurrence wins.
    pub fn get(&self, key: K) -> FieldValue<'a> {
        FieldValue::from_raw(
            self.entries
                .iter()
                .rev()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| *value),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tokenize a trimmed line into a field map.
pub fn tokenize<'a, K: Vocabulary>(
    line: &'a str,
    policy: SegmentPolicy,
    min_parts: usize,
) -> Result<FieldMap<'a, K>, LineError> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    if parts.len() < min_parts {
        return Err(LineError::TooFewParts {
            expected: min_parts,
        });
    }

    let mut entries = Vec::with_capacity(parts.len());
    for part in parts {
        let Some((key, value)) = part.split_once(':') else {
            match policy {
                SegmentPolicy::Strict => {
                    return Err(LineError::InvalidPart {
                        part: part.to_string(),
                    })
                }
                SegmentPolicy::Lenient => continue,
            }
        };

        if let Some(field) = K::from_key(&key.trim().to_lowercase()) {
            entries.push((field, value.trim()));
        }
    }

    Ok(FieldMap { entries })
}
