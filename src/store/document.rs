//! Serde model of the backing JSON document.
//!
//! Top-level namespaces mirror the document layout on disk: `auth.users`,
//! `lms.leaveApplications`, `pods.details`, `pods.recommendations`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub auth: AuthNamespace,
    #[serde(default)]
    pub lms: LmsNamespace,
    #[serde(default)]
    pub pods: PodsNamespace,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthNamespace {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Seeded at store initialization; read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    /// Opaque bearer string, unique per user.
    pub token: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LmsNamespace {
    #[serde(default, rename = "leaveApplications")]
    pub leave_applications: Vec<LeaveApplication>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub id: i64,
    pub status: String,
    /// Remaining domain fields (dates, leave type, reason) pass through the
    /// rewrite untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodsNamespace {
    /// Opaque record returned verbatim by the details endpoint. Absent and
    /// empty are distinct: an absent key is a 404 to callers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<Pod>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pod {
    #[serde(rename = "podId")]
    pub pod_id: i64,
    #[serde(default)]
    pub members: Vec<PodMember>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PodMember {
    pub id: i64,
    pub name: String,
    pub role: String,
}
