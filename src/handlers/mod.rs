/// Identity API handlers (login, current user, logout)
pub mod auth;

pub use auth::{login_handler, logout_handler, me_handler, SessionStore};
