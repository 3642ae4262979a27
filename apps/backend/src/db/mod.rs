//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Admin Repository ===

    /// Create a new admin with generated token
    pub async fn create_admin(&self, name: Option<&str>) -> Result<Admin> {
        let token = Uuid::new_v4().to_string();
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (token, name)
            VALUES ($1, $2)
            RETURNING id, token, name, created_at, last_seen_at
            "#,
        )
        .bind(&token)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Get admin by token
    pub async fn get_admin_by_token(&self, token: &str) -> Result<Option<Admin>> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            SELECT id, token, name, created_at, last_seen_at
            FROM admins
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    /// Update admin last_seen_at timestamp
    pub async fn update_last_seen(&self, admin_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE admins
            SET last_seen_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(admin_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Question Repository ===

    /// Insert one question and its options in a single transaction
    pub async fn insert_question(&self, question: &ParsedQuestion, created_by: Uuid) -> Result<Uuid> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question_text, question_type, difficulty_level, tags, keywords,
                                   hint, help_guidance, model_answer, points, status, created_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&question.question_text)
        .bind(question.question_type.as_str())
        .bind(question.difficulty_level.as_str())
        .bind(&question.tags)
        .bind(&question.keywords)
        .bind(&question.hint)
        .bind(&question.help_guidance)
        .bind(&question.model_answer)
        .bind(question.points as i32)
        .bind(question.status.as_str())
        .bind(created_by)
        .fetch_one(&mut *tx)
        .await?;

        for option in question.options.iter().flatten() {
            sqlx::query(
                r#"
                INSERT INTO question_options (question_id, option_text, is_correct, explanation,
                                              video_explanation_url, option_order)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(id)
            .bind(&option.option_text)
            .bind(option.is_correct)
            .bind(&option.explanation)
            .bind(&option.video_explanation_url)
            .bind(option.option_order as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(id)
    }

    /// Store parsed questions one by one; a failed record does not stop the rest
    pub async fn create_questions(&self, questions: &[ParsedQuestion], created_by: Uuid) -> BulkInsertOutcome {
        let mut outcome = BulkInsertOutcome::default();
        for (index, question) in questions.iter().enumerate() {
            match self.insert_question(question, created_by).await {
                Ok(id) => outcome.record_success(index, id),
                Err(e) => {
                    tracing::warn!("Failed to store question {}: {}", index, e);
                    outcome.record_failure(index, e.to_string());
                }
            }
        }
        outcome
    }

    /// Count live questions created by an admin
    pub async fn count_questions(&self, created_by: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM questions
            WHERE created_by = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // === Flashcard Repository ===

    /// Insert one flashcard
    pub async fn insert_flashcard(&self, card: &ParsedFlashcard, created_by: Uuid) -> Result<Uuid> {
        let card_order = to_i32(card.card_order)?;
        let id = sqlx::query_scalar(
            r#"
            INSERT INTO flashcards (front_text, back_text, difficulty_level, card_order, status, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&card.front_text)
        .bind(&card.back_text)
        .bind(card.difficulty_level.as_str())
        .bind(card_order)
        .bind(card.status.as_str())
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Store parsed flashcards one by one; a failed record does not stop the rest
    pub async fn create_flashcards(&self, cards: &[ParsedFlashcard], created_by: Uuid) -> BulkInsertOutcome {
        let mut outcome = BulkInsertOutcome::default();
        for (index, card) in cards.iter().enumerate() {
            match self.insert_flashcard(card, created_by).await {
                Ok(id) => outcome.record_success(index, id),
                Err(e) => {
                    tracing::warn!("Failed to store flashcard {}: {}", index, e);
                    outcome.record_failure(index, e.to_string());
                }
            }
        }
        outcome
    }

    /// Count live flashcards created by an admin
    pub async fn count_flashcards(&self, created_by: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM flashcards
            WHERE created_by = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(created_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    // === Import Batch Repository ===

    /// Record an import call
    pub async fn insert_import_batch(&self, batch: &NewImportBatch) -> Result<Uuid> {
        let total_lines = to_i32(batch.total_lines)?;
        let parse_errors = to_i32(batch.parse_errors)?;
        let stored_count = to_i32(batch.stored_count)?;
        let store_failures = to_i32(batch.store_failures)?;
        let id = sqlx::query_scalar(
            r#"
            INSERT INTO import_batches (admin_id, kind, content_hash, total_lines, parse_errors,
                                        stored_count, store_failures)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(batch.admin_id)
        .bind(batch.kind.as_str())
        .bind(&batch.content_hash)
        .bind(total_lines)
        .bind(parse_errors)
        .bind(stored_count)
        .bind(store_failures)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Most recent import batches for an admin
    pub async fn get_import_batches(&self, admin_id: Uuid, limit: i64) -> Result<Vec<ImportBatch>> {
        let batches = sqlx::query_as::<_, ImportBatch>(
            r#"
            SELECT id, admin_id, kind, content_hash, total_lines, parse_errors,
                   stored_count, store_failures, created_at
            FROM import_batches
            WHERE admin_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(admin_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(batches)
    }
}

/// Narrow a count or order to an INTEGER column, failing instead of wrapping.
fn to_i32<T>(value: T) -> std::result::Result<i32, sqlx::Error>
where
    T: TryInto<i32, Error = std::num::TryFromIntError>,
{
    value.try_into().map_err(|e| sqlx::Error::Encode(Box::new(e)))
}
