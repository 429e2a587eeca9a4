//! Single source of truth for all JSON-shaped state.
//!
//! The store owns the whole document for the process lifetime. Reads take a
//! snapshot of the requested value under the read lock; mutations run under
//! the write lock and persist the full document to disk before the lock is
//! released, so readers never observe a half-written document and concurrent
//! mutations of the same record serialize instead of losing updates.

mod document;

pub use document::{
    AuthNamespace, Document, LeaveApplication, LmsNamespace, Pod, PodMember, PodsNamespace, User,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read document {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse document {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to write document {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(serde_json::Error),
}

/// Shared handle to the document store. Cheap to clone; every clone observes
/// the same in-memory document and write-back path.
#[derive(Clone)]
pub struct DocumentStore {
    inner: Arc<RwLock<Document>>,
    path: Arc<PathBuf>,
}

impl DocumentStore {
    /// Reads and parses the document file. The store never invents an empty
    /// document: a missing or malformed file is an error at startup.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Read {
                path: path.display().to_string(),
                source,
            })?;

        let document: Document =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self {
            inner: Arc::new(RwLock::new(document)),
            path: Arc::new(path),
        })
    }

    /// Looks up the user owning `token`. Exact match; token presence is the
    /// sole proof of authentication.
    pub async fn find_user_by_token(&self, token: &str) -> Option<User> {
        let doc = self.inner.read().await;
        doc.auth.users.iter().find(|u| u.token == token).cloned()
    }

    /// Linear scan for exact equality on both fields. First match in seed
    /// order wins.
    pub async fn find_user_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        let doc = self.inner.read().await;
        doc.auth
            .users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }

    pub async fn pod_details(&self) -> Option<serde_json::Value> {
        let doc = self.inner.read().await;
        doc.pods.details.clone()
    }

    pub async fn pod_recommendations(&self) -> Option<Vec<Pod>> {
        let doc = self.inner.read().await;
        doc.pods.recommendations.clone()
    }

    /// Overwrites the status of the leave application with id `leave_id` and
    /// persists. Returns `false` without touching the document when the id is
    /// unknown.
    pub async fn update_leave_status(
        &self,
        leave_id: i64,
        status: &str,
    ) -> Result<bool, StoreError> {
        self.mutate(|doc| {
            match doc
                .lms
                .leave_applications
                .iter_mut()
                .find(|leave| leave.id == leave_id)
            {
                Some(leave) => {
                    leave.status = status.to_string();
                    true
                }
                None => false,
            }
        })
        .await
    }

    /// Appends `member` to the pod with id `pod_id` and persists. No implicit
    /// pod creation and no de-duplication: the same member can be appended
    /// twice. Returns `false` when the pod (or the whole recommendations
    /// collection) is absent.
    pub async fn push_pod_member(&self, pod_id: i64, member: PodMember) -> Result<bool, StoreError> {
        self.mutate(|doc| {
            let pods = match doc.pods.recommendations.as_mut() {
                Some(pods) => pods,
                None => return false,
            };
            match pods.iter_mut().find(|pod| pod.pod_id == pod_id) {
                Some(pod) => {
                    pod.members.push(member);
                    true
                }
                None => false,
            }
        })
        .await
    }

    /// Runs `apply` under the write lock and persists before releasing it.
    /// `apply` returning `false` means the target record was absent; the
    /// document is left as-is and not rewritten.
    async fn mutate<F>(&self, apply: F) -> Result<bool, StoreError>
    where
        F: FnOnce(&mut Document) -> bool,
    {
        let mut doc = self.inner.write().await;
        if !apply(&mut doc) {
            return Ok(false);
        }
        self.persist(&doc).await?;
        Ok(true)
    }

    /// Flushes the entire in-memory document to the backing file.
    async fn persist(&self, doc: &Document) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(doc).map_err(StoreError::Serialize)?;
        tokio::fs::write(self.path.as_ref(), raw)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.display().to_string(),
                source,
            })
    }
}
