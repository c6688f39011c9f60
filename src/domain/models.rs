use serde::{Deserialize, Serialize};

/// The authenticated identity returned by the session service.
///
/// Both name and email are optional: the identity provider may know a user
/// only by email, or (for freshly provisioned accounts) by neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// Name shown in the sidebar footer: full name, else email, else "User".
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.email.as_deref().filter(|e| !e.is_empty()))
            .unwrap_or("User")
    }

    /// Single character rendered inside the avatar badge.
    ///
    /// First character of the full name, falling back to the email, then to
    /// a neutral glyph when neither is available.
    pub fn avatar_initial(&self) -> char {
        self.full_name
            .as_deref()
            .and_then(|n| n.chars().next())
            .or_else(|| self.email.as_deref().and_then(|e| e.chars().next()))
            .unwrap_or('?')
    }
}

/// Shell-local session state.
///
/// Starts in `loading` with no user; `settle` is the single transition to
/// the ready phase. The shell never moves back to loading within one mount,
/// and a `None` user covers both "not logged in" and "fetch failed".
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Resolve the loading phase with whatever the identity fetch produced.
    pub fn settle(&mut self, user: Option<SessionUser>) {
        self.user = user;
        self.loading = false;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(full_name: Option<&str>, email: Option<&str>) -> SessionUser {
        SessionUser {
            id: "u-1".to_string(),
            full_name: full_name.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let u = user(Some("Thandi Nkosi"), Some("thandi@example.co.za"));
        assert_eq!(u.display_name(), "Thandi Nkosi");
    }

    #[test]
    fn test_display_name_falls_back_to_email_then_generic() {
        assert_eq!(
            user(None, Some("thandi@example.co.za")).display_name(),
            "thandi@example.co.za"
        );
        assert_eq!(user(Some(""), Some("")).display_name(), "User");
        assert_eq!(user(None, None).display_name(), "User");
    }

    #[test]
    fn test_avatar_initial_fallback_chain() {
        assert_eq!(user(Some("Thandi"), Some("x@y.za")).avatar_initial(), 'T');
        assert_eq!(user(None, Some("x@y.za")).avatar_initial(), 'x');
        assert_eq!(user(None, None).avatar_initial(), '?');
    }

    #[test]
    fn test_session_state_starts_loading() {
        let state = SessionState::new();
        assert!(state.loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_settle_with_user() {
        let mut state = SessionState::new();
        state.settle(Some(user(Some("Thandi"), None)));
        assert!(!state.loading);
        assert_eq!(state.user.as_ref().unwrap().display_name(), "Thandi");
    }

    #[test]
    fn test_settle_without_user_is_anonymous_not_error() {
        let mut state = SessionState::new();
        state.settle(None);
        assert!(!state.loading);
        assert!(state.user.is_none());
    }
}
