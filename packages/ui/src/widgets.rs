//! Small presentational pieces shared by the views.

use api::BookingStatus;
use dioxus::prelude::*;

#[component]
pub fn StatusBadge(status: BookingStatus) -> Element {
    rsx! {
        span {
            class: "status-badge {status.badge_class()}",
            "{status}"
        }
    }
}

/// One counter on the admin dashboard.
#[component]
pub fn StatCard(icon: String, value: u64, label: String) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-icon", "{icon}" }
            div {
                class: "stat-info",
                h3 { "{value}" }
                p { "{label}" }
            }
        }
    }
}

/// Inline error or success line under a form.
#[component]
pub fn Notice(message: Option<String>, #[props(default)] success: bool) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    let class = if success { "success-message" } else { "error-message" };
    rsx! {
        div { class: "{class}", "{message}" }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "loading-container",
            div { class: "spinner" }
        }
    }
}
