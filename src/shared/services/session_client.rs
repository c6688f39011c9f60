use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::models::SessionUser;
use crate::shared::errors::{AppError, Result};

/// Identity/session collaborator consumed by the shell.
///
/// Injected through Dioxus context instead of being reached as an ambient
/// singleton, so tests can substitute their own implementation. Futures are
/// `?Send` because the browser HTTP types are not `Send`.
#[async_trait(?Send)]
pub trait SessionClient {
    /// Current authenticated user, or `None` when the session is anonymous.
    async fn current_user(&self) -> Result<Option<SessionUser>>;

    /// Terminate the server-side session. Callers own any follow-up
    /// navigation; this performs no local state changes.
    async fn logout(&self) -> Result<()>;
}

/// How the client is shared through component context.
pub type SharedSessionClient = Rc<dyn SessionClient>;

/// Production client for the identity API.
pub struct HttpSessionClient {
    base_url: String,
}

impl HttpSessionClient {
    /// Same-origin client (the fullstack server hosts the identity API).
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl Default for HttpSessionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl SessionClient for HttpSessionClient {
    #[cfg(target_arch = "wasm32")]
    async fn current_user(&self) -> Result<Option<SessionUser>> {
        use reqwasm::http::Request;

        let response = Request::get(&self.url("/api/auth/me"))
            .send()
            .await
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        // 401 means anonymous, not an error
        if response.status() == 401 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(AppError::HttpError(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let user = response
            .json::<SessionUser>()
            .await
            .map_err(|e| AppError::HttpError(e.to_string()))?;
        Ok(Some(user))
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn current_user(&self) -> Result<Option<SessionUser>> {
        // Server-side render: the session is resolved after hydration
        tracing::debug!(base_url = %self.base_url, "current_user skipped during SSR");
        Ok(None)
    }

    #[cfg(target_arch = "wasm32")]
    async fn logout(&self) -> Result<()> {
        use reqwasm::http::Request;

        let response = Request::post(&self.url("/api/auth/logout"))
            .send()
            .await
            .map_err(|e| AppError::HttpError(e.to_string()))?;

        if !response.ok() {
            return Err(AppError::HttpError(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn logout(&self) -> Result<()> {
        tracing::warn!("Logout invoked during server-side render, ignoring");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct MockSessionClient {
        user: Option<SessionUser>,
        fail_fetch: bool,
        fetch_calls: Cell<usize>,
        logout_calls: Cell<usize>,
    }

    impl MockSessionClient {
        fn with_user(user: Option<SessionUser>) -> Self {
            Self {
                user,
                fail_fetch: false,
                fetch_calls: Cell::new(0),
                logout_calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                user: None,
                fail_fetch: true,
                fetch_calls: Cell::new(0),
                logout_calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl SessionClient for MockSessionClient {
        async fn current_user(&self) -> Result<Option<SessionUser>> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            if self.fail_fetch {
                return Err(AppError::AuthError("identity service down".to_string()));
            }
            Ok(self.user.clone())
        }

        async fn logout(&self) -> Result<()> {
            self.logout_calls.set(self.logout_calls.get() + 1);
            Ok(())
        }
    }

    fn sample_user() -> SessionUser {
        SessionUser {
            id: "u-1".to_string(),
            full_name: Some("Thandi Nkosi".to_string()),
            email: Some("thandi@example.co.za".to_string()),
        }
    }

    #[test]
    fn test_mock_returns_injected_user() {
        let client = MockSessionClient::with_user(Some(sample_user()));
        let user = block_on(client.current_user()).unwrap();
        assert_eq!(user.unwrap().id, "u-1");
        assert_eq!(client.fetch_calls.get(), 1);
    }

    #[test]
    fn test_fetch_failure_is_an_error_not_a_user() {
        let client = MockSessionClient::failing();
        assert!(block_on(client.current_user()).is_err());
    }

    #[test]
    fn test_logout_called_exactly_once_per_invocation() {
        let client = MockSessionClient::with_user(None);
        block_on(client.logout()).unwrap();
        assert_eq!(client.logout_calls.get(), 1);
        block_on(client.logout()).unwrap();
        assert_eq!(client.logout_calls.get(), 2);
        // logout never touches the fetch path
        assert_eq!(client.fetch_calls.get(), 0);
    }

    #[test]
    fn test_http_client_url_join() {
        let client = HttpSessionClient::with_base_url("http://localhost:3401".to_string());
        assert_eq!(client.url("/api/auth/me"), "http://localhost:3401/api/auth/me");
        assert_eq!(client.url("api/auth/me"), "http://localhost:3401/api/auth/me");
    }
}
