use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::layouts::shell::ShellLayout;
use crate::shared::services::{HttpSessionClient, SharedSessionClient};

/// Application routes. Every page sits inside the navigation shell layout.
///
/// The derived path rendering (`Route::to_string`) is the single source of
/// truth for link targets and active-link comparison.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(ShellLayout)]
    #[route("/")]
    Dashboard {},

    #[route("/report")]
    ReportCrime {},

    #[route("/map")]
    CrimeMap {},

    #[route("/community")]
    Community {},

    #[route("/my-reports")]
    MyReports {},

    #[route("/resources")]
    Resources {},

    #[route("/emergency-contacts")]
    EmergencyContacts {},

    #[route("/profile")]
    Profile {},

    #[route("/emergency")]
    Emergency {},
}

#[component]
pub fn App() -> Element {
    // The session client is injected here so the whole tree (and tests)
    // resolves it through context instead of a global.
    use_context_provider::<SharedSessionClient>(|| Rc::new(HttpSessionClient::new()));

    use_effect(|| {
        tracing::info!("SafeZA app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

// Page bodies are owned by other subsystems; the shell only needs real
// routable targets. Each stub renders a titled placeholder region.

#[component]
fn PagePlaceholder(title: &'static str, hint: &'static str) -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "{title}" }
            p { class: "c-page__hint", "{hint}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Dashboard",
            hint: "Community safety overview for your area."
        }
    }
}

#[component]
pub fn ReportCrime() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Report Crime",
            hint: "File a new incident report."
        }
    }
}

#[component]
pub fn CrimeMap() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Crime Map",
            hint: "Incidents reported near you."
        }
    }
}

#[component]
pub fn Community() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Community",
            hint: "Neighbourhood watch discussions."
        }
    }
}

#[component]
pub fn MyReports() -> Element {
    rsx! {
        PagePlaceholder {
            title: "My Reports",
            hint: "Reports you have filed and their status."
        }
    }
}

#[component]
pub fn Resources() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Resources",
            hint: "Safety guides and training material."
        }
    }
}

#[component]
pub fn EmergencyContacts() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Emergency Contacts",
            hint: "Numbers that matter when it counts."
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Profile",
            hint: "Your account settings."
        }
    }
}

#[component]
pub fn Emergency() -> Element {
    rsx! {
        section { class: "c-page c-page--emergency",
            h1 { class: "c-page__title", "Emergency" }
            p { class: "c-page__emergency-number", "10111" }
            p { class: "c-page__hint", "SAPS Emergency - call immediately if you are in danger." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_render_as_expected() {
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!(Route::ReportCrime {}.to_string(), "/report");
        assert_eq!(Route::CrimeMap {}.to_string(), "/map");
        assert_eq!(Route::Community {}.to_string(), "/community");
        assert_eq!(Route::MyReports {}.to_string(), "/my-reports");
        assert_eq!(Route::Resources {}.to_string(), "/resources");
        assert_eq!(Route::EmergencyContacts {}.to_string(), "/emergency-contacts");
        assert_eq!(Route::Profile {}.to_string(), "/profile");
        assert_eq!(Route::Emergency {}.to_string(), "/emergency");
    }
}
