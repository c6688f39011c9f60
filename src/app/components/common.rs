use dioxus::prelude::*;

// Full-screen loading state (BEM: c-loading)
// The only thing rendered while the identity fetch is pending.
#[component]
pub fn FullScreenLoading() -> Element {
    rsx! {
        div { class: "c-loading c-loading--fullscreen",
            div { class: "c-loading__spinner" }
        }
    }
}

// Avatar badge with a single fallback initial (BEM: c-avatar)
#[component]
pub fn UserAvatar(initial: char) -> Element {
    rsx! {
        div { class: "c-avatar",
            span { class: "c-avatar__initial", "{initial}" }
        }
    }
}
