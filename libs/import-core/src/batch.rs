//! Per-line error isolation and result aggregation.

use serde::{Deserialize, Serialize};

use crate::error::LineError;
use crate::input::ImportLine;

/// A line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// 1-based position among non-blank lines.
    pub line: usize,
    /// The trimmed line as uploaded.
    pub content: String,
    pub error: String,
}

/// Outcome of parsing one batch.
///
/// `total_lines == success_count + error_count` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult<T> {
    pub records: Vec<T>,
    pub errors: Vec<ParseError>,
    pub total_lines: usize,
    pub success_count: usize,
    pub error_count: usize,
    /// Source line of each entry in `records`.
    #[serde(skip)]
    pub record_lines: Vec<usize>,
}

impl<T> ParseResult<T> {
    /// True when no line produced a record.
    pub fn has_no_records(&self) -> bool {
        self.success_count == 0
    }

    /// Source line of the record at `index`.
    pub fn line_of(&self, index: usize) -> Option<usize> {
        self.record_lines.get(index).copied()
    }
}

/// Run `parse_line` over every line, collecting records and errors.
/// A failing line never stops the batch.
pub fn parse_lines<T>(
    lines: &[ImportLine<'_>],
    mut parse_line: impl FnMut(&str) -> Result<T, LineError>,
) -> ParseResult<T> {
    let mut records = Vec::new();
    let mut record_lines = Vec::new();
    let mut errors = Vec::new();

    for line in lines {
        match parse_line(line.content) {
            Ok(record) => {
                records.push(record);
                record_lines.push(line.number);
            }
            Err(err) => errors.push(ParseError {
                line: line.number,
                content: line.content.to_string(),
                error: err.to_string(),
            }),
        }
    }

    ParseResult {
        total_lines: lines.len(),
        success_count: records.len(),
        error_count: errors.len(),
        records,
        errors,
        record_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::split_lines;

    fn parse_even(line: &str) -> Result<u32, LineError> {
        let n: u32 = line.parse().map_err(|_| LineError::InvalidPart {
            part: line.to_string(),
        })?;
        if n % 2 == 0 {
            Ok(n)
        } else {
            Err(LineError::TooFewParts { expected: 2 })
        }
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let lines = split_lines("2\n3\n\nx\n4");
        let result = parse_lines(&lines, parse_even);
        assert_eq!(result.records, vec![2, 4]);
        assert_eq!(result.total_lines, 4);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.error_count, 2);
        assert_eq!(result.errors[0].line, 2);
        assert_eq!(result.errors[1].line, 3);
        assert_eq!(result.errors[1].content, "x");
        assert_eq!(result.errors[1].error, "Invalid part format: x");
    }

    #[test]
    fn tracks_record_lines() {
        let lines = split_lines("3\n2\n\n8");
        let result = parse_lines(&lines, parse_even);
        assert_eq!(result.records, vec![2, 8]);
        assert_eq!(result.line_of(0), Some(2));
        assert_eq!(result.line_of(1), Some(3));
        assert_eq!(result.line_of(2), None);
    }

    #[test]
    fn empty_batch() {
        let result = parse_lines(&[], parse_even);
        assert!(result.has_no_records());
        assert_eq!(result.total_lines, 0);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn counts_serialize_in_camel_case() {
        let result = parse_lines(&split_lines("2"), parse_even);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalLines"], 1);
        assert_eq!(json["successCount"], 1);
        assert_eq!(json["errorCount"], 0);
        assert!(json.get("recordLines").is_none());
    }
}
