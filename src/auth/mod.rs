//! Bearer-token authorization gate.
//!
//! Every inbound request passes through [`authorize`] before any handler
//! runs. A matched token attaches a resolved [`Identity`] to the request as
//! an extension; handlers receive it explicitly instead of reaching into
//! ambient request state.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::error::ApiError;
use crate::store::{DocumentStore, User};

/// Identity resolved by the gate and handed to handlers as a request
/// extension.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub role: String,
}

impl Identity {
    /// Role gate for manager-only operations. Exact string match, no
    /// hierarchy.
    pub fn is_manager(&self) -> bool {
        self.role == "manager"
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
        }
    }
}

/// Second space-separated segment of the header value. The scheme itself is
/// not validated; a header with no space yields no token, which then simply
/// fails the user lookup.
fn bearer_token(header: &str) -> Option<&str> {
    header.split(' ').nth(1)
}

/// Request interceptor: resolve identity or short-circuit.
///
/// - Header present: token must match a stored user, else 401.
/// - No header: only the login path proceeds, everything else is 403.
pub async fn authorize(
    State(store): State<DocumentStore>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(value) = request.headers().get(AUTHORIZATION) {
        let token = value.to_str().ok().and_then(bearer_token);
        let user = match token {
            Some(token) => store.find_user_by_token(token).await,
            None => None,
        };

        return match user {
            Some(user) => {
                request.extensions_mut().insert(Identity::from(user));
                Ok(next.run(request).await)
            }
            None => Err(ApiError::unauthorized("Invalid token")),
        };
    }

    if request.uri().path().starts_with("/api/auth/login") {
        return Ok(next.run(request).await);
    }

    Err(ApiError::forbidden("Authorization required"))
}
