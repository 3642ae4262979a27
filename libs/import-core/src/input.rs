//! Input decoding, size limits and line splitting.

use crate::error::{ImportError, Result};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Raw import content as handed over by the upload layer.
#[derive(Debug, Clone, Copy)]
pub enum ImportInput<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
}

impl<'a> ImportInput<'a> {
    /// Size of the content in bytes, before decoding.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Bytes(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode the content as UTF-8 text, dropping a leading byte-order mark.
    pub fn decode(self) -> Result<&'a str> {
        let text = match self {
            Self::Text(text) => text,
            Self::Bytes(bytes) => std::str::from_utf8(bytes)?,
        };
        Ok(text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text))
    }
}

impl<'a> From<&'a str> for ImportInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ImportInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a [u8]> for ImportInput<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for ImportInput<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Upper bounds on a single parse call. `None` disables a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLimits {
    pub max_bytes: Option<usize>,
    pub max_lines: Option<usize>,
}

impl ImportLimits {
    pub const DEFAULT_MAX_BYTES: usize = 5 * 1024 * 1024;
    pub const DEFAULT_MAX_LINES: usize = 10_000;

    pub fn unlimited() -> Self {
        Self {
            max_bytes: None,
            max_lines: None,
        }
    }
}

impl Default for ImportLimits {
    fn default() -> Self {
        Self {
            max_bytes: Some(Self::DEFAULT_MAX_BYTES),
            max_lines: Some(Self::DEFAULT_MAX_LINES),
        }
    }
}

/// Per-call parser options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub limits: ImportLimits,
    /// Reject choice questions whose correct option does not match exactly
    /// one option. Off by default.
    pub strict_answers: bool,
}

/// One non-blank line of import content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLine<'a> {
    /// 1-based position among the non-blank lines.
    pub number: usize,
    /// The line with surrounding whitespace removed.
    pub content: &'a str,
}

/// Split text into trimmed, non-blank lines numbered from 1.
pub fn split_lines(content: &str) -> Vec<ImportLine<'_>> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(idx, content)| ImportLine {
            number: idx + 1,
            content,
        })
        .collect()
}

/// Decode `input`, enforce `limits` and split into lines.
pub(crate) fn prepare<'a>(input: ImportInput<'a>, limits: &ImportLimits) -> Result<Vec<ImportLine<'a>>> {
    if let Some(limit) = limits.max_bytes {
        if input.len() > limit {
            return Err(ImportError::TooManyBytes {
                size: input.len(),
                limit,
            });
        }
    }

    let lines = split_lines(input.decode()?);

    if let Some(limit) = limits.max_lines {
        if lines.len() > limit {
            return Err(ImportError::TooManyLines {
                count: lines.len(),
                limit,
            });
        }
    }

    Ok(lines)
}
