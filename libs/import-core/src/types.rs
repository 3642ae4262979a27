//! Record types produced by the import parsers.

use serde::{Deserialize, Serialize};

/// Question type. Each variant owns its option-parsing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    Essay,
}

impl QuestionType {
    pub const ALLOWED: &'static str = "multiple_choice, true_false, essay";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::TrueFalse => "true_false",
            Self::Essay => "essay",
        }
    }

    /// Parse from a lower-cased import value.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "multiple_choice" => Some(Self::MultipleChoice),
            "true_false" => Some(Self::TrueFalse),
            "essay" => Some(Self::Essay),
            _ => None,
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple choice",
            Self::TrueFalse => "True/false",
            Self::Essay => "Essay",
        }
    }

    /// Whether questions of this type carry an option list.
    pub fn has_options(&self) -> bool {
        !matches!(self, Self::Essay)
    }
}

/// Difficulty shared by questions and flashcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl Default for DifficultyLevel {
    fn default() -> Self {
        Self::Medium
    }
}

impl DifficultyLevel {
    pub const ALLOWED: &'static str = "easy, medium, hard";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Publication status of an imported record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Active,
    Inactive,
    Draft,
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl RecordStatus {
    pub const ALLOWED: &'static str = "active, inactive, draft";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Draft => "draft",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "draft" => Some(Self::Draft),
            _ => None,
        }
    }
}

/// One answer option of a choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedOption {
    pub option_text: String,
    pub is_correct: bool,
    pub explanation: Option<String>,
    pub video_explanation_url: Option<String>,
    /// 1-based position within the question.
    pub option_order: u32,
}

/// Question parsed from one import line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub question_text: String,
    pub question_type: QuestionType,
    pub difficulty_level: DifficultyLevel,
    pub tags: Vec<String>,
    pub keywords: Vec<String>,
    pub hint: Option<String>,
    pub help_guidance: Option<String>,
    pub model_answer: Option<String>,
    pub points: u32,
    pub status: RecordStatus,
    /// Always `None` for essay questions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ParsedOption>>,
}

impl ParsedQuestion {
    /// Number of options flagged correct.
    pub fn correct_count(&self) -> usize {
        self.options
            .as_deref()
            .map_or(0, |opts| opts.iter().filter(|o| o.is_correct).count())
    }
}

/// Flashcard parsed from one import line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFlashcard {
    pub front_text: String,
    pub back_text: String,
    pub difficulty_level: DifficultyLevel,
    pub card_order: u32,
    pub status: RecordStatus,
}
