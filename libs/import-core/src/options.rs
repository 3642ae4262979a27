//! Expands an options string into structured options and marks the correct
//! one(s).
//!
//! Splitting and matching depend on the question type:
//!
//! | type              | split                                   | correct when                      |
//! |-------------------|-----------------------------------------|-----------------------------------|
//! | `true_false`      | commas and whitespace runs              | whole text equals the answer      |
//! | `multiple_choice` | before every `X)` label (capital + `)`) | first character equals the answer |
//! | `essay`           | never carries options                   | -                                 |
//!
//! Comparisons are case-insensitive. An answer that matches no option, or
//! several, leaves the options as marked unless strict answers are requested.

use crate::error::LineError;
use crate::fields::FieldValue;
use crate::types::{ParsedOption, QuestionType};

/// Build the option list for a question.
///
/// Returns `Ok(None)` for essay questions whatever the line carried.
pub fn reconcile(
    question_type: QuestionType,
    options: FieldValue<'_>,
    correct_option: FieldValue<'_>,
    strict: bool,
) -> Result<Option<Vec<ParsedOption>>, LineError> {
    if !question_type.has_options() {
        return Ok(None);
    }

    let mut expanded = expand(question_type, options.present().unwrap_or_default());
    if expanded.is_empty() {
        return Err(LineError::MissingOptions(question_type));
    }

    if let Some(answer) = correct_option.present() {
        let matches = mark_correct(question_type, &mut expanded, answer);
        if strict && matches != 1 {
            return Err(LineError::AmbiguousAnswer {
                value: answer.to_string(),
                matches,
            });
        }
    }

    Ok(Some(expanded))
}

/// Split `raw` into options numbered from 1. `n/a` and blank yield nothing.
pub fn expand(question_type: QuestionType, raw: &str) -> Vec<ParsedOption> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("n/a") {
        return Vec::new();
    }

    let chunks = match question_type {
        QuestionType::TrueFalse => split_words(raw),
        QuestionType::MultipleChoice => split_labelled(raw),
        QuestionType::Essay => Vec::new(),
    };

    chunks
        .into_iter()
        .enumerate()
        .map(|(idx, text)| ParsedOption {
            option_text: text.to_string(),
            is_correct: false,
            explanation: None,
            video_explanation_url: None,
            option_order: idx as u32 + 1,
        })
        .collect()
}

/// Flag every option matching `answer`. Returns the number of matches.
pub fn mark_correct(question_type: QuestionType, options: &mut [ParsedOption], answer: &str) -> usize {
    let answer = answer.trim().to_lowercase();
    let mut matches = 0;
    for option in options.iter_mut() {
        option.is_correct = match question_type {
            QuestionType::TrueFalse => option.option_text.to_lowercase() == answer,
            QuestionType::MultipleChoice => option
                .option_text
                .chars()
                .next()
                .is_some_and(|first| first.to_lowercase().eq(answer.chars())),
            QuestionType::Essay => false,
        };
        if option.is_correct {
            matches += 1;
        }
    }
    matches
}

fn split_words(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Split before each capital letter that is directly followed by `)`.
fn split_labelled(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    // ASCII positions are always char boundaries.
    let mut bounds: Vec<usize> = (1..bytes.len())
        .filter(|&i| bytes[i].is_ascii_uppercase() && bytes.get(i + 1) == Some(&b')'))
        .collect();
    bounds.insert(0, 0);
    bounds.push(raw.len());

    bounds
        .windows(2)
        .map(|w| raw[w[0]..w[1]].trim())
        .filter(|chunk| !chunk.is_empty())
        .collect()
}
