//! Admin registration and status endpoints

use axum::{extract::State, Extension, Json};

use crate::error::{ApiError, Result};
use crate::models::{AdminRegisterRequest, AdminRegisterResponse, AdminStatusResponse};
use crate::routes::auth::AuthenticatedAdmin;
use crate::AppState;

/// POST /api/admins/register
/// Creates a new admin and returns the token
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Option<AdminRegisterRequest>>,
) -> Result<Json<AdminRegisterResponse>> {
    let name = payload.and_then(|p| p.name);
    let admin = state.db.create_admin(name.as_deref()).await?;

    tracing::info!("Registered new admin: {}", admin.id);

    Ok(Json(AdminRegisterResponse {
        admin_id: admin.id,
        token: admin.token,
    }))
}

/// GET /api/admins/me
pub async fn me(
    Extension(auth): Extension<AuthenticatedAdmin>,
    State(state): State<AppState>,
) -> Result<Json<AdminStatusResponse>> {
    let admin = state
        .db
        .get_admin_by_token(&auth.token)
        .await?
        .ok_or_else(|| ApiError::NotFound("Admin not found".to_string()))?;

    Ok(Json(AdminStatusResponse {
        admin_id: admin.id,
        name: admin.name,
        last_seen_at: admin.last_seen_at,
    }))
}
