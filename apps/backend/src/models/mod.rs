//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from import-core
pub use import_core::{
    DifficultyLevel, ParseError, ParseResult, ParsedFlashcard, ParsedOption, ParsedQuestion,
    QuestionType, RecordStatus,
};

// === Database Entity Types ===

/// Admin identity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub token: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Kind of content an import call carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportKind {
    Questions,
    Flashcards,
}

impl ImportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::Flashcards => "flashcards",
        }
    }
}

/// Import audit record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ImportBatch {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub kind: String,
    pub content_hash: String,
    pub total_lines: i32,
    pub parse_errors: i32,
    pub stored_count: i32,
    pub store_failures: i32,
    pub created_at: DateTime<Utc>,
}

/// Values for a new import audit record
#[derive(Debug, Clone)]
pub struct NewImportBatch {
    pub admin_id: Uuid,
    pub kind: ImportKind,
    pub content_hash: String,
    pub total_lines: usize,
    pub parse_errors: usize,
    pub stored_count: usize,
    pub store_failures: usize,
}

// === Persistence Outcome ===

/// A record written to storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Position in the parsed record list
    pub index: usize,
    pub id: Uuid,
}

/// A record the store refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedRecord {
    pub index: usize,
    pub error: String,
}

/// Per-record result of a bulk write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkInsertOutcome {
    pub total_processed: usize,
    pub successful: Vec<StoredRecord>,
    pub failed: Vec<FailedRecord>,
    pub success_count: usize,
    pub failure_count: usize,
}

impl BulkInsertOutcome {
    pub fn record_success(&mut self, index: usize, id: Uuid) {
        self.total_processed += 1;
        self.success_count += 1;
        self.successful.push(StoredRecord { index, id });
    }

    pub fn record_failure(&mut self, index: usize, error: impl Into<String>) {
        self.total_processed += 1;
        self.failure_count += 1;
        self.failed.push(FailedRecord {
            index,
            error: error.into(),
        });
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminRegisterRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminRegisterResponse {
    pub admin_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminStatusResponse {
    pub admin_id: Uuid,
    pub name: Option<String>,
    pub last_seen_at: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ImportQuery {
    /// Overrides the configured strict-answer default
    pub strict: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImportBatchListResponse {
    pub batches: Vec<ImportBatch>,
}

/// Parse-stage counts and per-line errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseSummary {
    pub total_lines: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub errors: Vec<ParseError>,
}

/// A record that parsed but could not be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreError {
    /// Source line of the record, numbered like parse errors
    pub line: Option<usize>,
    pub error: String,
}

/// Storage-stage counts and failures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceSummary {
    pub total_processed: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub created_ids: Vec<Uuid>,
    pub errors: Vec<StoreError>,
}

/// Combined outcome of one upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub batch_id: Uuid,
    pub kind: ImportKind,
    pub message: String,
    pub parse: ParseSummary,
    pub persistence: PersistenceSummary,
}
