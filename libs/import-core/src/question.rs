//! Question import format.
//!
//! ```text
//! Question Text: What is the capital of France? | Type: multiple_choice | Options: A) Paris B) London | Correct Option: A | Difficulty: easy | Tags: geography, Europe
//! ```

use crate::batch::{parse_lines, ParseResult};
use crate::error::{LineError, Result};
use crate::fields::{parse_enum, parse_list};
use crate::input::{prepare, ImportInput, ParseOptions};
use crate::options::reconcile;
use crate::tokenizer::{tokenize, SegmentPolicy, Vocabulary};
use crate::types::{DifficultyLevel, ParsedQuestion, QuestionType, RecordStatus};

/// Minimum number of `|`-separated parts on a question line.
pub const MIN_PARTS: usize = 3;

/// Tag given to questions imported without any.
pub const DEFAULT_TAG: &str = "imported";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuestionField {
    QuestionText,
    Type,
    Options,
    CorrectOption,
    Difficulty,
    Tags,
    Keywords,
    Hint,
    HelpGuidance,
}

impl Vocabulary for QuestionField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "question text" => Some(Self::QuestionText),
            "type" => Some(Self::Type),
            "options" => Some(Self::Options),
            "correct option" => Some(Self::CorrectOption),
            "difficulty" => Some(Self::Difficulty),
            "tags" => Some(Self::Tags),
            "keywords" => Some(Self::Keywords),
            "hint" => Some(Self::Hint),
            "help" | "help guidance" => Some(Self::HelpGuidance),
            _ => None,
        }
    }
}

/// Parse question import content with default options.
pub fn parse_questions_from_text<'a>(input: impl Into<ImportInput<'a>>) -> Result<ParseResult<ParsedQuestion>> {
    parse_questions_with(input, &ParseOptions::default())
}

/// Parse question import content.
///
/// Only undecodable or oversized input fails the call; every other problem
/// is reported per line in the result.
pub fn parse_questions_with<'a>(
    input: impl Into<ImportInput<'a>>,
    options: &ParseOptions,
) -> Result<ParseResult<ParsedQuestion>> {
    let lines = prepare(input.into(), &options.limits)?;
    Ok(parse_lines(&lines, |line| {
        parse_question_line(line, options.strict_answers)
    }))
}

/// Parse a single trimmed question line.
pub fn parse_question_line(line: &str, strict_answers: bool) -> std::result::Result<ParsedQuestion, LineError> {
    let fields = tokenize::<QuestionField>(line, SegmentPolicy::Strict, MIN_PARTS)?;

    let (Some(question_text), Some(raw_type)) = (
        fields.get(QuestionField::QuestionText).present(),
        fields.get(QuestionField::Type).present(),
    ) else {
        return Err(LineError::MissingFields(
            "question_text and question_type are required",
        ));
    };

    let question_type = QuestionType::from_str(&raw_type.to_lowercase())
        .ok_or_else(|| LineError::invalid_enum("question_type", raw_type, QuestionType::ALLOWED))?;

    let difficulty_level = parse_enum(
        fields.get(QuestionField::Difficulty),
        "difficulty_level",
        DifficultyLevel::ALLOWED,
        DifficultyLevel::from_str,
    )?
    .unwrap_or_default();

    let mut tags = parse_list(fields.get(QuestionField::Tags));
    if tags.is_empty() {
        tags.push(DEFAULT_TAG.to_string());
    }

    let options = reconcile(
        question_type,
        fields.get(QuestionField::Options),
        fields.get(QuestionField::CorrectOption),
        strict_answers,
    )?;

    Ok(ParsedQuestion {
        question_text: question_text.to_string(),
        question_type,
        difficulty_level,
        tags,
        keywords: parse_list(fields.get(QuestionField::Keywords)),
        hint: fields.get(QuestionField::Hint).to_text(),
        help_guidance: fields.get(QuestionField::HelpGuidance).to_text(),
        model_answer: None,
        points: 1,
        status: RecordStatus::Draft,
        options,
    })
}
