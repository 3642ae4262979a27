//! Bulk text import for questions and flashcards.
//!
//! Provides:
//! - Line splitting with size limits and UTF-8 decoding
//! - `Key: Value | ...` tokenizing with strict and lenient segment policies
//! - Field normalization, defaults and enum validation per format
//! - Option expansion and correct-answer marking for choice questions
//! - Per-line error isolation so a batch can partially succeed

pub mod batch;
pub mod error;
pub mod fields;
pub mod flashcard;
pub mod input;
pub mod options;
pub mod question;
pub mod template;
pub mod tokenizer;
pub mod types;

pub use batch::{ParseError, ParseResult};
pub use error::{ImportError, LineError, Result};
pub use flashcard::{parse_flashcards_from_text, parse_flashcards_with};
pub use input::{ImportInput, ImportLimits, ParseOptions};
pub use question::{parse_questions_from_text, parse_questions_with};
pub use template::{FLASHCARD_TEMPLATE, QUESTION_TEMPLATE};
pub use types::{
    DifficultyLevel, ParsedFlashcard, ParsedOption, ParsedQuestion, QuestionType, RecordStatus,
};
