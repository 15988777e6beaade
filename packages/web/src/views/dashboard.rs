//! Guest dashboard.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar, Spinner};

use super::{require_user, use_page_guard};
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let guard = use_page_guard(require_user);

    let session = auth.session();
    let Some(user) = session.user().cloned() else {
        return rsx! { Spinner {} };
    };

    rsx! {
        div {
            class: "dashboard-container",

            Navbar {
                title: "🏨 Hotel Dashboard",
                class: "dashboard-nav",
                span { class: "user-info", "Welcome, {user.display_name()}!" }
                Link { to: Route::NewBooking {}, class: "btn-primary", "New Booking" }
                LogoutButton {
                    on_logout: move |_| {
                        guard.leave();
                        nav.push(Route::Home {});
                    },
                }
            }

            div {
                class: "dashboard-content",
                div {
                    class: "dashboard-header",
                    h2 { "Your Dashboard" }
                    p { "Manage your bookings and account" }
                }

                div {
                    class: "dashboard-cards",
                    div {
                        class: "dashboard-card",
                        div { class: "card-icon", "📋" }
                        h3 { "My Bookings" }
                        p { "View and manage your reservations" }
                        Link { to: Route::NewBooking {}, class: "card-link", "View Bookings →" }
                    }
                    div {
                        class: "dashboard-card",
                        div { class: "card-icon", "➕" }
                        h3 { "New Booking" }
                        p { "Make a new reservation" }
                        Link { to: Route::NewBooking {}, class: "card-link", "Book Now →" }
                    }
                    div {
                        class: "dashboard-card",
                        div { class: "card-icon", "👤" }
                        h3 { "Profile" }
                        p { "Manage your account information" }
                        div {
                            class: "user-details",
                            p { strong { "Name: " } "{user.full_name()}" }
                            p { strong { "Email: " } "{user.email}" }
                            p { strong { "Username: " } "{user.username}" }
                        }
                    }
                }

                div {
                    class: "quick-actions",
                    h3 { "Quick Actions" }
                    div {
                        class: "actions-grid",
                        Link {
                            to: Route::NewBooking {},
                            class: "action-btn",
                            span { class: "action-icon", "🛏️" }
                            span { "Book a Room" }
                        }
                        Link {
                            to: Route::Home {},
                            class: "action-btn",
                            span { class: "action-icon", "🏠" }
                            span { "Back to Home" }
                        }
                    }
                }
            }
        }
    }
}
