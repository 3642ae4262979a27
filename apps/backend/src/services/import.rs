//! Import service: parse an upload, store what parsed, and merge both
//! stages into one report.

use import_core::{ParseOptions, ParseResult};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::db::Database;
use crate::error::Result;
use crate::models::*;

/// Parse and store a question import.
pub async fn import_questions(
    db: &Database,
    admin_id: Uuid,
    content: &[u8],
    options: &ParseOptions,
) -> Result<ImportReport> {
    let parsed = import_core::parse_questions_with(content, options)?;
    let outcome = if parsed.has_no_records() {
        BulkInsertOutcome::default()
    } else {
        db.create_questions(&parsed.records, admin_id).await
    };
    finish(db, admin_id, ImportKind::Questions, content, &parsed, outcome).await
}

/// Parse and store a flashcard import.
pub async fn import_flashcards(
    db: &Database,
    admin_id: Uuid,
    content: &[u8],
    options: &ParseOptions,
) -> Result<ImportReport> {
    let parsed = import_core::parse_flashcards_with(content, options)?;
    let outcome = if parsed.has_no_records() {
        BulkInsertOutcome::default()
    } else {
        db.create_flashcards(&parsed.records, admin_id).await
    };
    finish(db, admin_id, ImportKind::Flashcards, content, &parsed, outcome).await
}

async fn finish<T>(
    db: &Database,
    admin_id: Uuid,
    kind: ImportKind,
    content: &[u8],
    parsed: &ParseResult<T>,
    outcome: BulkInsertOutcome,
) -> Result<ImportReport> {
    let batch_id = db
        .insert_import_batch(&NewImportBatch {
            admin_id,
            kind,
            content_hash: hash_content(content),
            total_lines: parsed.total_lines,
            parse_errors: parsed.error_count,
            stored_count: outcome.success_count,
            store_failures: outcome.failure_count,
        })
        .await?;

    tracing::info!(
        "Import {} ({}): {} lines, {} parse errors, {} stored, {} store failures",
        batch_id,
        kind.as_str(),
        parsed.total_lines,
        parsed.error_count,
        outcome.success_count,
        outcome.failure_count
    );

    Ok(build_report(batch_id, kind, parsed, outcome))
}

/// Merge parse and persistence outcomes. Store failures are mapped back to
/// the line their record came from.
pub fn build_report<T>(
    batch_id: Uuid,
    kind: ImportKind,
    parsed: &ParseResult<T>,
    outcome: BulkInsertOutcome,
) -> ImportReport {
    let message = if parsed.has_no_records() {
        "No valid records found".to_string()
    } else if parsed.error_count == 0 && outcome.failure_count == 0 {
        format!("Imported {} {}", outcome.success_count, kind.as_str())
    } else {
        format!(
            "Imported {} of {} {}",
            outcome.success_count,
            parsed.total_lines,
            kind.as_str()
        )
    };

    let persistence = PersistenceSummary {
        total_processed: outcome.total_processed,
        success_count: outcome.success_count,
        failure_count: outcome.failure_count,
        created_ids: outcome.successful.iter().map(|s| s.id).collect(),
        errors: outcome
            .failed
            .into_iter()
            .map(|f| StoreError {
                line: parsed.line_of(f.index),
                error: f.error,
            })
            .collect(),
    };

    ImportReport {
        batch_id,
        kind,
        message,
        parse: ParseSummary {
            total_lines: parsed.total_lines,
            success_count: parsed.success_count,
            error_count: parsed.error_count,
            errors: parsed.errors.clone(),
        },
        persistence,
    }
}

/// Calculate SHA256 hash of content.
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}
