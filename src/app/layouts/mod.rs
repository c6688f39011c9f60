pub mod nav;
pub mod shell;

pub use nav::{NavItem, NAV_ITEMS};
pub use shell::{NavigationShell, ShellLayout};
