//! Bulk import endpoints

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use import_core::{FLASHCARD_TEMPLATE, QUESTION_TEMPLATE};

use crate::error::Result;
use crate::models::*;
use crate::routes::auth::AuthenticatedAdmin;
use crate::services::import;
use crate::AppState;

const RECENT_BATCHES: i64 = 50;

/// POST /api/questions/import
/// Request body is the raw import file
pub async fn questions(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAdmin>,
    Query(query): Query<ImportQuery>,
    body: Bytes,
) -> Result<Json<ImportReport>> {
    let options = state.config.parse_options(query.strict);
    let report = import::import_questions(&state.db, auth.admin_id, &body, &options).await?;
    Ok(Json(report))
}

/// POST /api/flashcards/import
/// Request body is the raw import file
pub async fn flashcards(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAdmin>,
    body: Bytes,
) -> Result<Json<ImportReport>> {
    let options = state.config.parse_options(None);
    let report = import::import_flashcards(&state.db, auth.admin_id, &body, &options).await?;
    Ok(Json(report))
}

/// GET /api/questions/import/template
pub async fn question_template() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], QUESTION_TEMPLATE)
}

/// GET /api/flashcards/import/template
pub async fn flashcard_template() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], FLASHCARD_TEMPLATE)
}

/// GET /api/imports
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAdmin>,
) -> Result<Json<ImportBatchListResponse>> {
    let batches = state
        .db
        .get_import_batches(auth.admin_id, RECENT_BATCHES)
        .await?;
    Ok(Json(ImportBatchListResponse { batches }))
}
