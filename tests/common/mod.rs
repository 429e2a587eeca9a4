use std::path::PathBuf;

use anyhow::Result;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use teamhub_api::{app, store::DocumentStore};

/// In-process application over a temp copy of the seed document.
pub struct TestApp {
    pub router: Router,
    pub db_path: PathBuf,
    _dir: TempDir,
}

/// Seed document mirroring db.json: one manager, two employees, a pending
/// leave application and two pods.
pub fn seed_document() -> Value {
    json!({
        "auth": {
            "users": [
                { "id": 1, "name": "Alice Morgan", "email": "alice@teamhub.dev",
                  "password": "alice123", "role": "manager", "token": "abc123" },
                { "id": 2, "name": "Bob Jacobs", "email": "bob@teamhub.dev",
                  "password": "bob123", "role": "employee", "token": "def456" },
                { "id": 3, "name": "Carol Singh", "email": "carol@teamhub.dev",
                  "password": "carol123", "role": "employee", "token": "ghi789" }
            ]
        },
        "lms": {
            "leaveApplications": [
                { "id": 5, "employeeId": 2, "leaveType": "annual",
                  "startDate": "2025-03-10", "endDate": "2025-03-14", "status": "pending" },
                { "id": 6, "employeeId": 3, "leaveType": "sick",
                  "startDate": "2025-02-03", "endDate": "2025-02-04", "status": "approved" }
            ]
        },
        "pods": {
            "details": [
                { "podId": 101, "name": "Platform Pod", "focus": "Core services", "memberCount": 4 },
                { "podId": 102, "name": "Growth Pod", "focus": "Activation funnel", "memberCount": 3 }
            ],
            "recommendations": [
                { "podId": 101, "members": [ { "id": 2, "name": "Bob Jacobs", "role": "Engineer" } ] },
                { "podId": 102, "members": [] }
            ]
        }
    })
}

pub async fn spawn_app() -> Result<TestApp> {
    spawn_app_with(seed_document()).await
}

pub async fn spawn_app_with(document: Value) -> Result<TestApp> {
    let dir = tempfile::tempdir()?;
    let db_path = dir.path().join("db.json");
    std::fs::write(&db_path, serde_json::to_string_pretty(&document)?)?;

    let store = DocumentStore::load(&db_path).await?;
    Ok(TestApp {
        router: app(store),
        db_path,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<(StatusCode, Value)> {
        self.request("GET", path, token, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        token: Option<&str>,
        body: Value,
    ) -> Result<(StatusCode, Value)> {
        self.request("POST", path, token, Some(body)).await
    }

    pub async fn request(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };
        self.send(request).await
    }

    /// Drives a raw request through the router and decodes the JSON body.
    pub async fn send(&self, request: Request<Body>) -> Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };
        Ok((status, body))
    }

    /// Reparses the document file from disk, bypassing the in-memory store.
    pub fn document_on_disk(&self) -> Result<Value> {
        Ok(serde_json::from_str(&std::fs::read_to_string(
            &self.db_path,
        )?)?)
    }
}
