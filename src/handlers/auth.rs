use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::Identity;
use crate::error::ApiError;
use crate::store::DocumentStore;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /api/auth/login - exchange credentials for the user's bearer token.
///
/// Expected output:
/// ```json
/// { "token": "abc123", "user": { "id": 1, "role": "manager" } }
/// ```
///
/// Plaintext comparison against the stored user record; anything that does
/// not match exactly (including an absent field) is a 401.
pub async fn login(
    State(store): State<DocumentStore>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid JSON body"))?;

    let (email, password) = match (payload.email, payload.password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(ApiError::unauthorized("Invalid credentials")),
    };

    match store.find_user_by_credentials(&email, &password).await {
        Some(user) => Ok(Json(json!({
            "token": user.token,
            "user": { "id": user.id, "role": user.role },
        }))),
        None => Err(ApiError::unauthorized("Invalid credentials")),
    }
}

/// GET /api/auth/me - profile of the authenticated caller.
///
/// The gate has already rejected unauthenticated requests, so the missing
/// identity branch is normally unreachable.
pub async fn me(identity: Option<Extension<Identity>>) -> Result<Json<Value>, ApiError> {
    let Some(Extension(identity)) = identity else {
        return Err(ApiError::unauthorized("Unauthorized"));
    };

    Ok(Json(json!({
        "id": identity.id,
        "name": identity.name,
        "role": identity.role,
    })))
}
