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
pub struct ApproveLeaveRequest {
    #[serde(default, rename = "leaveId")]
    pub leave_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// POST /api/lms/leave/approve - overwrite a leave application's status.
///
/// Manager-only. The caller-supplied status is written verbatim; there is no
/// status enum and no audit trail. Lookups fail closed: an unknown id is a
/// 404 and causes no mutation.
pub async fn approve_leave(
    State(store): State<DocumentStore>,
    identity: Option<Extension<Identity>>,
    payload: Result<Json<ApproveLeaveRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    // Role gate first: a non-manager is denied before the body is looked at
    match identity {
        Some(Extension(identity)) if identity.is_manager() => {}
        _ => return Err(ApiError::forbidden("Access denied")),
    }

    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid JSON body"))?;

    let (leave_id, status) = match (payload.leave_id, payload.status) {
        (Some(leave_id), Some(status)) => (leave_id, status),
        _ => return Err(ApiError::bad_request("Missing required fields")),
    };

    if !store.update_leave_status(leave_id, &status).await? {
        return Err(ApiError::not_found("Leave request not found"));
    }

    Ok(Json(json!({
        "message": format!("Leave request {}", status),
        "status": status,
    })))
}
