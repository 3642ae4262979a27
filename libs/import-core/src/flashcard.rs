//! Flashcard import format.
//!
//! ```text
//! Front Text: What is the capital of France? | Back Text: Paris | Difficulty: easy
//! ```
//!
//! Unlike questions there is no minimum part count, and segments without a
//! `:` are skipped rather than failing the line.

use crate::batch::{parse_lines, ParseResult};
use crate::error::{LineError, Result};
use crate::fields::{parse_enum, parse_positive_int};
use crate::input::{prepare, ImportInput, ParseOptions};
use crate::tokenizer::{tokenize, SegmentPolicy, Vocabulary};
use crate::types::{DifficultyLevel, ParsedFlashcard, RecordStatus};

pub const DEFAULT_CARD_ORDER: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlashcardField {
    FrontText,
    BackText,
    Difficulty,
    CardOrder,
    Status,
}

impl Vocabulary for FlashcardField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "front text" => Some(Self::FrontText),
            "back text" => Some(Self::BackText),
            "difficulty" => Some(Self::Difficulty),
            "card order" => Some(Self::CardOrder),
            "status" => Some(Self::Status),
            _ => None,
        }
    }
}

/// Parse flashcard import content with default options.
pub fn parse_flashcards_from_text<'a>(input: impl Into<ImportInput<'a>>) -> Result<ParseResult<ParsedFlashcard>> {
    parse_flashcards_with(input, &ParseOptions::default())
}

/// Parse flashcard import content. `strict_answers` has no effect here.
pub fn parse_flashcards_with<'a>(
    input: impl Into<ImportInput<'a>>,
    options: &ParseOptions,
) -> Result<ParseResult<ParsedFlashcard>> {
    let lines = prepare(input.into(), &options.limits)?;
    Ok(parse_lines(&lines, parse_flashcard_line))
}

/// Parse a single trimmed flashcard line.
pub fn parse_flashcard_line(line: &str) -> std::result::Result<ParsedFlashcard, LineError> {
    let fields = tokenize::<FlashcardField>(line, SegmentPolicy::Lenient, 0)?;

    let (Some(front_text), Some(back_text)) = (
        fields.get(FlashcardField::FrontText).present(),
        fields.get(FlashcardField::BackText).present(),
    ) else {
        return Err(LineError::MissingFields(
            "front_text and back_text are required",
        ));
    };

    let difficulty_level = parse_enum(
        fields.get(FlashcardField::Difficulty),
        "difficulty_level",
        DifficultyLevel::ALLOWED,
        DifficultyLevel::from_str,
    )?
    .unwrap_or_default();

    let status = parse_enum(
        fields.get(FlashcardField::Status),
        "status",
        RecordStatus::ALLOWED,
        RecordStatus::from_str,
    )?
    .unwrap_or_default();

    Ok(ParsedFlashcard {
        front_text: front_text.to_string(),
        back_text: back_text.to_string(),
        difficulty_level,
        card_order: parse_positive_int(fields.get(FlashcardField::CardOrder), DEFAULT_CARD_ORDER),
        status,
    })
}
