use dioxus::document;
use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant, FullScreenLoading, UserAvatar};
use crate::app::layouts::nav::{is_active_path, NAV_ITEMS};
use crate::app::pages::Route;
use crate::domain::models::SessionUser;
use crate::shared::hooks::use_session;
use crate::shared::logging;
use crate::shared::services::SharedSessionClient;

/// Router layout wrapper: loads the bundled stylesheet and frames every
/// routed page in the navigation shell.
#[component]
pub fn ShellLayout() -> Element {
    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        NavigationShell {
            Outlet::<Route> {}
        }
    }
}

/// Persistent navigation frame around arbitrary page content.
///
/// Renders a full-screen spinner until the identity fetch settles, then a
/// two-region layout: sidebar (brand, menu, emergency callout, user footer)
/// and the content region with a mobile-only header. The session stays
/// anonymous when the fetch fails; no error is surfaced here.
#[component]
pub fn NavigationShell(children: Element) -> Element {
    let session = use_session();
    let mut sidebar_open = use_signal(|| false);
    let route = use_route::<Route>();

    if session.read().loading {
        return rsx! {
            FullScreenLoading {}
        };
    }

    let current_path = route.to_string();
    let user = session.read().user.clone();
    let sidebar_class = if sidebar_open() {
        "c-sidebar c-sidebar--open"
    } else {
        "c-sidebar"
    };

    rsx! {
        div { class: "c-shell",
            aside { class: "{sidebar_class}",
                header { class: "c-sidebar__header",
                    div { class: "c-sidebar__brand-badge", "🛡️" }
                    div { class: "c-sidebar__brand",
                        h2 { class: "c-sidebar__title", "SafeZA" }
                        p { class: "c-sidebar__tagline", "Community Safety Network" }
                    }
                }

                nav { class: "c-sidebar__nav",
                    p { class: "c-sidebar__group-label", "Main Menu" }
                    ul { class: "c-sidebar__menu",
                        for item in NAV_ITEMS.iter() {
                            li { key: "{item.title}", class: "c-sidebar__menu-item",
                                Link {
                                    to: item.route.clone(),
                                    class: if is_active_path(&current_path, &item.route.to_string()) {
                                        "c-sidebar__link c-sidebar__link--active"
                                    } else {
                                        "c-sidebar__link"
                                    },
                                    span { class: "c-sidebar__link-icon", "{item.icon}" }
                                    span { class: "c-sidebar__link-text", "{item.title}" }
                                }
                            }
                        }
                    }

                    // Static callout, intentionally non-interactive
                    div { class: "c-sidebar__emergency",
                        span { class: "c-sidebar__emergency-icon", "⚠️" }
                        div { class: "c-sidebar__emergency-text",
                            p { class: "c-sidebar__emergency-label", "Emergency Line" }
                            p { class: "c-sidebar__emergency-number", "10111" }
                            p { class: "c-sidebar__emergency-caption", "SAPS Emergency" }
                        }
                    }
                }

                SidebarFooter { user }
            }

            main { class: "c-shell__main",
                MobileHeader {
                    on_toggle_menu: move |_| {
                        let open = sidebar_open();
                        sidebar_open.set(!open);
                    }
                }
                div { class: "c-shell__content",
                    {children}
                }
            }
        }
    }
}

/// Sidebar footer: user identity block plus Settings and Logout actions.
/// Renders nothing for anonymous sessions.
#[component]
fn SidebarFooter(user: Option<SessionUser>) -> Element {
    let navigator = use_navigator();
    let client = use_context::<SharedSessionClient>();

    let Some(user) = user else {
        return rsx! {
            footer { class: "c-sidebar__footer" }
        };
    };

    let name = user.display_name().to_string();
    let initial = user.avatar_initial();
    let email = user.email.clone();

    // Fire-and-forget: no local state reset, no navigation, no confirmation.
    let on_logout = move |_| {
        logging::log_logout_requested();
        spawn(perform_logout(client.clone()));
    };

    rsx! {
        footer { class: "c-sidebar__footer",
            div { class: "c-sidebar__user",
                UserAvatar { initial }
                div { class: "c-sidebar__user-meta",
                    p { class: "c-sidebar__user-name", "{name}" }
                    if let Some(email) = email {
                        p { class: "c-sidebar__user-email", "{email}" }
                    }
                }
            }
            div { class: "c-sidebar__actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    class: "c-sidebar__settings".to_string(),
                    onclick: move |_| {
                        navigator.push(Route::Profile {});
                    },
                    "⚙️ Settings"
                }
                Button {
                    variant: ButtonVariant::Danger,
                    class: "c-sidebar__logout".to_string(),
                    onclick: on_logout,
                    "Logout"
                }
            }
        }
    }
}

/// One logout call per activation. Failures are logged and otherwise
/// dropped; the session collaborator owns any eventual state change.
async fn perform_logout(client: SharedSessionClient) {
    if let Err(e) = client.logout().await {
        logging::log_logout_error(&e.to_string());
    }
}

/// Narrow-viewport top bar: menu toggle, brand, and the SOS shortcut.
/// Hidden on wide viewports via CSS.
#[component]
fn MobileHeader(on_toggle_menu: EventHandler<MouseEvent>) -> Element {
    let navigator = use_navigator();

    rsx! {
        header { class: "c-mobile-header",
            div { class: "c-mobile-header__left",
                button {
                    class: "c-mobile-header__menu",
                    onclick: move |evt| on_toggle_menu.call(evt),
                    "☰"
                }
                div { class: "c-mobile-header__brand",
                    span { class: "c-mobile-header__icon", "🛡️" }
                    h1 { class: "c-mobile-header__title", "SafeZA" }
                }
            }
            Button {
                variant: ButtonVariant::Danger,
                class: "c-mobile-header__sos".to_string(),
                onclick: move |_| {
                    logging::log_sos_activated();
                    navigator.push(Route::Emergency {});
                },
                "⚠️ SOS"
            }
        }
    }
}
