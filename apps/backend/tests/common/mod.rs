//! Common test utilities and fixtures for integration tests.
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use lms_backend::config::Config;
use lms_backend::db::Database;
use lms_backend::{router, AppState};

/// Test context containing database connection and router.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let config = Config::from_env().expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&config.database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let state = AppState {
            db: db.clone(),
            config: Arc::new(config),
        };

        Self {
            db,
            app: router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test admin and return its ID and token.
    pub async fn create_test_admin(&self, name: Option<&str>) -> (Uuid, String) {
        let admin = self
            .db
            .create_admin(name)
            .await
            .expect("Failed to create test admin");
        (admin.id, admin.token)
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Remove everything created by an admin.
    pub async fn cleanup_admin(&self, admin_id: Uuid) {
        // Delete in order due to foreign keys
        let _ = sqlx::query(
            "DELETE FROM question_options WHERE question_id IN (SELECT id FROM questions WHERE created_by = $1)",
        )
        .bind(admin_id)
        .execute(self.db.pool())
        .await;

        for table in ["questions", "flashcards"] {
            let _ = sqlx::query(&format!("DELETE FROM {} WHERE created_by = $1", table))
                .bind(admin_id)
                .execute(self.db.pool())
                .await;
        }

        let _ = sqlx::query("DELETE FROM import_batches WHERE admin_id = $1")
            .bind(admin_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(admin_id)
            .execute(self.db.pool())
            .await;
    }
}
