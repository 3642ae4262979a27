//! Authentication middleware

use axum::{
    body::Body,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::AppState;

/// Authenticated admin info stored in request extensions
#[derive(Clone, Debug)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub token: String,
}

/// Auth middleware - extracts admin token from Authorization header
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = bearer_token(auth_header)
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization format".to_string()))?
        .to_string();

    let admin = state
        .db
        .get_admin_by_token(&token)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid admin token".to_string()))?;

    state.db.update_last_seen(admin.id).await?;

    request.extensions_mut().insert(AuthenticatedAdmin {
        admin_id: admin.id,
        token,
    });

    Ok(next.run(request).await)
}

fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
