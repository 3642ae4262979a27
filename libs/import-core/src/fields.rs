//! Field presence and shared value helpers.

use crate::error::LineError;

/// Presence of a vocabulary field on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// Key not on the line.
    Absent,
    /// Key present with a blank value.
    Empty,
    Present(&'a str),
}

impl<'a> FieldValue<'a> {
    pub fn from_raw(raw: Option<&'a str>) -> Self {
        match raw.map(str::trim) {
            None => Self::Absent,
            Some("") => Self::Empty,
            Some(value) => Self::Present(value),
        }
    }

    /// The value if present and non-blank.
    pub fn present(self) -> Option<&'a str> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Empty => None,
        }
    }

    /// Owned copy of the value, `None` when absent or blank.
    pub fn to_text(self) -> Option<String> {
        self.present().map(str::to_string)
    }
}

/// Split a comma-separated list, dropping blank entries.
pub fn parse_list(value: FieldValue<'_>) -> Vec<String> {
    value
        .present()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an enum field. Absent and blank values yield `Ok(None)` so the
/// caller can apply its default.
pub fn parse_enum<T>(
    value: FieldValue<'_>,
    field: &'static str,
    allowed: &'static str,
    from_str: fn(&str) -> Option<T>,
) -> Result<Option<T>, LineError> {
    match value.present() {
        None => Ok(None),
        Some(raw) => from_str(&raw.to_lowercase())
            .map(Some)
            .ok_or_else(|| LineError::invalid_enum(field, raw, allowed)),
    }
}

/// Largest value [`parse_positive_int`] accepts; it fits a signed 32-bit column.
pub const MAX_POSITIVE_INT: u32 = i32::MAX as u32;

/// Integer coercion for numeric fields: the leading digits are used and
/// anything that does not yield a number in `1..=MAX_POSITIVE_INT` falls back
/// to `default`.
pub fn parse_positive_int(value: FieldValue<'_>, default: u32) -> u32 {
    let Some(raw) = value.present() else {
        return default;
    };
    let digits: &str = {
        let end = raw
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(raw.len(), |(idx, _)| idx);
        &raw[..end]
    };
    match digits.parse::<u32>() {
        Ok(n) if (1..=MAX_POSITIVE_INT).contains(&n) => n,
        _ => default,
    }
}
