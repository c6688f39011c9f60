//! Identity API handlers
//!
//! Serves the session collaborator consumed by the shell: current user,
//! logout, and a cookie-issuing login. Sessions live in an in-memory store;
//! authentication internals (passwords, OAuth) are out of scope.

use std::sync::Arc;

use axum::{
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::SessionUser;
use crate::shared::logging::LogOperation;

#[derive(Clone)]
struct SessionRecord {
    user: SessionUser,
    issued_at: DateTime<Utc>,
}

/// In-memory token -> user session map, shared across handlers via Extension.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, SessionRecord>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh token for the given user.
    pub fn login(&self, user: SessionUser) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            SessionRecord {
                user,
                issued_at: Utc::now(),
            },
        );
        token
    }

    pub fn get(&self, token: &str) -> Option<SessionUser> {
        self.sessions.get(token).map(|record| record.user.clone())
    }

    /// Remove a session; true when a session was actually present.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.remove(token).is_some()
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    /// Seconds since the token was issued; None for unknown tokens.
    pub fn session_age_secs(&self, token: &str) -> Option<i64> {
        self.sessions
            .get(token)
            .map(|record| (Utc::now() - record.issued_at).num_seconds())
    }
}

/// Token from `Authorization: Bearer ...`, else from the `session` cookie.
fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(value.to_string());
    }

    headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .map(str::trim)
                .find_map(|pair| pair.strip_prefix("session="))
                .map(String::from)
        })
}

#[derive(Serialize)]
pub struct AuthErrorResponse {
    pub error: String,
}

/// GET /api/auth/me
/// Current authenticated user; 401 for unknown or missing tokens.
pub async fn me_handler(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
) -> Response {
    let token = extract_session_token(&headers);
    match token.as_deref().and_then(|token| store.get(token)) {
        Some(user) => {
            let age_secs = token
                .as_deref()
                .and_then(|token| store.session_age_secs(token))
                .unwrap_or(0);
            tracing::debug!(
                operation = LogOperation::AuthApi.as_str(),
                user_id = %user.id,
                session_age_secs = age_secs,
                "Resolved current user"
            );
            (StatusCode::OK, Json(user)).into_response()
        }
        None => (
            StatusCode::UNAUTHORIZED,
            Json(AuthErrorResponse {
                error: "No active session".to_string(),
            }),
        )
            .into_response(),
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// POST /api/auth/login
/// Issues a session token and sets the `session` cookie.
pub async fn login_handler(
    Extension(store): Extension<SessionStore>,
    Json(request): Json<LoginRequest>,
) -> impl IntoResponse {
    let user = SessionUser {
        id: Uuid::new_v4().to_string(),
        full_name: request.full_name,
        email: request.email,
    };
    let token = store.login(user.clone());

    tracing::info!(
        operation = LogOperation::AuthApi.as_str(),
        user_id = %user.id,
        "Session issued"
    );

    (
        StatusCode::OK,
        [(
            SET_COOKIE,
            format!("session={token}; Path=/; HttpOnly; SameSite=Lax"),
        )],
        Json(LoginResponse { token, user }),
    )
}

#[derive(Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// POST /api/auth/logout
/// Drops the session. Responds success whether or not a session existed,
/// so repeated fire-and-forget calls from the shell stay harmless.
pub async fn logout_handler(
    Extension(store): Extension<SessionStore>,
    headers: HeaderMap,
) -> Json<LogoutResponse> {
    let removed = extract_session_token(&headers)
        .map(|token| store.remove(&token))
        .unwrap_or(false);

    tracing::info!(
        operation = LogOperation::AuthApi.as_str(),
        session_removed = removed,
        "Logout processed"
    );

    Json(LogoutResponse { success: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn sample_user() -> SessionUser {
        SessionUser {
            id: "u-1".to_string(),
            full_name: Some("Thandi Nkosi".to_string()),
            email: Some("thandi@example.co.za".to_string()),
        }
    }

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_store_login_get_remove() {
        let store = SessionStore::new();
        let token = store.login(sample_user());
        assert_eq!(store.active_sessions(), 1);
        assert_eq!(store.get(&token).unwrap().id, "u-1");
        assert!(store.session_age_secs(&token).unwrap() >= 0);
        assert_eq!(store.session_age_secs("unknown-token"), None);
        assert!(store.remove(&token));
        assert!(!store.remove(&token));
        assert!(store.get(&token).is_none());
    }

    #[test]
    fn test_extract_token_from_bearer_and_cookie() {
        let headers = bearer_headers("tok-123");
        assert_eq!(extract_session_token(&headers).as_deref(), Some("tok-123"));

        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            HeaderValue::from_static("theme=dark; session=tok-456; lang=en"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("tok-456"));

        assert_eq!(extract_session_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_me_without_token_is_unauthorized() {
        let store = SessionStore::new();
        let response = me_handler(Extension(store), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_with_valid_token_returns_ok() {
        let store = SessionStore::new();
        let token = store.login(sample_user());
        let response = me_handler(Extension(store), bearer_headers(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_logout_drops_session_and_is_idempotent() {
        let store = SessionStore::new();
        let token = store.login(sample_user());

        let response =
            logout_handler(Extension(store.clone()), bearer_headers(&token)).await;
        assert!(response.0.success);
        assert!(store.get(&token).is_none());

        // Second logout with the same token still reports success
        let response = logout_handler(Extension(store), bearer_headers(&token)).await;
        assert!(response.0.success);
    }
}
