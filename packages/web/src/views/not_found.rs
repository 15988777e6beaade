use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h1 { "Page not found" }
                p { class: "auth-subtitle", "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "btn-primary", "Back to home" }
            }
        }
    }
}
