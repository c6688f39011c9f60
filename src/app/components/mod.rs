pub mod button;
pub mod common;

pub use button::{Button, ButtonVariant};
pub use common::{FullScreenLoading, UserAvatar};
