//! Structured logging module for the SafeZA shell
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured tracing fields so session and auth events can be
//! filtered by operation.

/// Operation tags attached to every structured log event
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SessionFetch,
    Logout,
    AuthApi,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SessionFetch => "session_fetch",
            LogOperation::Logout => "logout",
            LogOperation::AuthApi => "auth_api",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log the start of the identity fetch (once per shell mount)
pub fn log_session_fetch_start() {
    tracing::debug!(
        operation = LogOperation::SessionFetch.as_str(),
        "Loading current user"
    );
}

/// Log a settled identity fetch
pub fn log_session_fetch_settled(authenticated: bool) {
    tracing::info!(
        operation = LogOperation::SessionFetch.as_str(),
        authenticated = authenticated,
        "Identity fetch settled"
    );
}

/// Log an identity fetch failure (downgraded to anonymous, never surfaced)
pub fn log_session_fetch_error(error: &str) {
    tracing::error!(
        operation = LogOperation::SessionFetch.as_str(),
        error = error,
        "Error loading user"
    );
}

/// Log a discarded late settle (shell unmounted before the fetch resolved)
pub fn log_session_fetch_discarded() {
    tracing::debug!(
        operation = LogOperation::SessionFetch.as_str(),
        "Identity fetch settled after unmount, discarding result"
    );
}

/// Log a logout request leaving the shell
pub fn log_logout_requested() {
    tracing::info!(
        operation = LogOperation::Logout.as_str(),
        "Logout requested"
    );
}

/// Log a failed logout call (no retry, no UI change)
pub fn log_logout_error(error: &str) {
    tracing::error!(
        operation = LogOperation::Logout.as_str(),
        error = error,
        "Logout request failed"
    );
}

/// Log an emergency (SOS) navigation
pub fn log_sos_activated() {
    tracing::warn!(
        operation = LogOperation::Navigation.as_str(),
        "SOS shortcut activated"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::SessionFetch.as_str(), "session_fetch");
        assert_eq!(LogOperation::Logout.as_str(), "logout");
        assert_eq!(LogOperation::AuthApi.as_str(), "auth_api");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
    }
}
