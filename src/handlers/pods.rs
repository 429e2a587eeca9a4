use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::store::{DocumentStore, Pod, PodMember};

/// GET /api/pods/details - the stored details record, verbatim.
pub async fn details(State(store): State<DocumentStore>) -> Result<Json<Value>, ApiError> {
    match store.pod_details().await {
        Some(details) => Ok(Json(details)),
        None => Err(ApiError::not_found("No pod details found")),
    }
}

/// GET /api/pods/recommend - the recommendations collection.
///
/// Open to any authenticated user; unlike leave approval there is no role
/// restriction here.
pub async fn recommendations(
    State(store): State<DocumentStore>,
) -> Result<Json<Vec<Pod>>, ApiError> {
    match store.pod_recommendations().await {
        Some(pods) => Ok(Json(pods)),
        None => Err(ApiError::not_found("No pod recommendations found")),
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default, rename = "podId")]
    pub pod_id: Option<i64>,
    #[serde(default, rename = "recommendedUserId")]
    pub recommended_user_id: Option<i64>,
}

/// POST /api/pods/recommend - append a recommended member to an existing pod.
///
/// Both fields are required. The member's display name is synthesized from
/// the user id and the role is fixed. Recommending the same user twice
/// appends twice; de-duplication is a documented non-goal.
pub async fn recommend(
    State(store): State<DocumentStore>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(|_| ApiError::bad_request("Invalid JSON body"))?;

    let (pod_id, user_id) = match (payload.pod_id, payload.recommended_user_id) {
        (Some(pod_id), Some(user_id)) => (pod_id, user_id),
        _ => return Err(ApiError::bad_request("Missing required fields")),
    };

    let member = PodMember {
        id: user_id,
        name: format!("User {}", user_id),
        role: "Recommended Member".to_string(),
    };

    if !store.push_pod_member(pod_id, member).await? {
        return Err(ApiError::not_found("Pod not found"));
    }

    Ok(Json(json!({ "message": "Recommendation sent successfully" })))
}
