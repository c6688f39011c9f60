//! Static navigation descriptors for the sidebar menu.

use crate::app::pages::Route;

/// One sidebar menu entry. Icons are decorative glyphs with no behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
    pub icon: &'static str,
}

/// Fixed-order main menu. Defined at build time, immutable at runtime.
pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem {
        title: "Dashboard",
        route: Route::Dashboard {},
        icon: "🏠",
    },
    NavItem {
        title: "Report Crime",
        route: Route::ReportCrime {},
        icon: "📝",
    },
    NavItem {
        title: "Crime Map",
        route: Route::CrimeMap {},
        icon: "🗺️",
    },
    NavItem {
        title: "Community",
        route: Route::Community {},
        icon: "💬",
    },
    NavItem {
        title: "My Reports",
        route: Route::MyReports {},
        icon: "📄",
    },
    NavItem {
        title: "Resources",
        route: Route::Resources {},
        icon: "🎓",
    },
    NavItem {
        title: "Emergency Contacts",
        route: Route::EmergencyContacts {},
        icon: "📞",
    },
];

/// Active-link policy: exact path equality only.
///
/// "/my-reports" is not active on "/my-reports/123". This is a deliberate,
/// visible behavior, not an oversight.
pub fn is_active_path(current: &str, target: &str) -> bool {
    current == target
}
