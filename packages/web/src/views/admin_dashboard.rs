//! Admin dashboard: booking statistics and the full booking list.

use api::{Booking, BookingStatus};
use dioxus::prelude::*;
use ui::admin::{self, AdminBoard};
use ui::{use_auth, LogoutButton, Navbar, Notice, Spinner, StatCard, StatusBadge};

use super::{require_admin, use_page_guard};
use crate::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let guard = use_page_guard(require_admin);
    let mut board = use_signal(AdminBoard::default);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let loader_auth = auth.clone();
    let mut loader = use_resource(move || {
        let auth = loader_auth.clone();
        async move {
            // Only admins may load; the guard sends everybody else away
            if !auth.is_admin() {
                return;
            }
            loading.set(true);
            match admin::load_dashboard(auth.api()).await {
                Ok(loaded) => {
                    board.set(loaded);
                    error.set(None);
                }
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        }
    });

    let status_auth = auth.clone();
    let change_status = use_callback(move |(booking_id, status): (i64, BookingStatus)| {
        let auth = status_auth.clone();
        spawn(async move {
            match admin::update_booking_status(auth.api(), booking_id, status).await {
                Ok(bookings) => {
                    board.write().bookings = bookings;
                    error.set(None);
                }
                Err(message) => error.set(Some(message)),
            }
        });
    });

    let session = auth.session();
    let Some(user) = session.user().cloned() else {
        return rsx! { Spinner {} };
    };
    if !session.is_admin() || (loading() && board.read().stats.is_none()) {
        return rsx! { Spinner {} };
    }

    let current = board();
    let stats = current.stats.unwrap_or_default();

    rsx! {
        div {
            class: "admin-dashboard",

            Navbar {
                title: "🔧 Admin Dashboard",
                class: "admin-nav",
                span { class: "user-info", "Admin: {user.email}" }
                LogoutButton {
                    on_logout: move |_| {
                        guard.leave();
                        nav.push(Route::Home {});
                    },
                }
            }

            div {
                class: "admin-content",

                Notice { message: error() }

                div {
                    class: "stats-grid",
                    StatCard { icon: "📊", value: stats.total_bookings, label: "Total Bookings" }
                    StatCard { icon: "✅", value: stats.confirmed_bookings, label: "Confirmed" }
                    StatCard { icon: "⏳", value: stats.pending_bookings, label: "Pending" }
                    StatCard { icon: "👥", value: stats.active_guests, label: "Active Guests" }
                    StatCard { icon: "🛏️", value: stats.available_rooms, label: "Available Rooms" }
                    StatCard { icon: "🏨", value: stats.total_rooms, label: "Total Rooms" }
                }

                div {
                    class: "bookings-section",
                    div {
                        class: "section-header",
                        h2 { "All Bookings" }
                        button {
                            class: "btn-secondary",
                            disabled: loading(),
                            onclick: move |_| loader.restart(),
                            if loading() { "Refreshing..." } else { "🔄 Refresh" }
                        }
                    }

                    if current.bookings.is_empty() {
                        div { class: "no-data", "No bookings found" }
                    } else {
                        div {
                            class: "table-container",
                            table {
                                class: "bookings-table",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Guest Name" }
                                        th { "Email" }
                                        th { "Phone" }
                                        th { "Room Type" }
                                        th { "Guests" }
                                        th { "Check-in" }
                                        th { "Check-out" }
                                        th { "Duration" }
                                        th { "Status" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for booking in current.bookings {
                                        BookingRow {
                                            key: "{booking.id}",
                                            booking: booking.clone(),
                                            on_status: change_status,
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookingRow(booking: Booking, on_status: EventHandler<(i64, BookingStatus)>) -> Element {
    let id = booking.id;

    rsx! {
        tr {
            td { "#{id}" }
            td { "{booking.guest_name}" }
            td { "{booking.email}" }
            td { "{booking.phone}" }
            td { "{booking.room_type}" }
            td { "{booking.people}" }
            td { "{booking.check_in}" }
            td { "{booking.check_out}" }
            td { "{booking.duration} days" }
            td { StatusBadge { status: booking.status } }
            td {
                select {
                    class: "status-select",
                    value: booking.status.as_str(),
                    onchange: move |evt: FormEvent| match evt.value().parse::<BookingStatus>() {
                        Ok(status) => on_status.call((id, status)),
                        Err(_) => tracing::warn!(value = %evt.value(), "unknown booking status"),
                    },
                    for status in BookingStatus::ALL {
                        option {
                            key: "{status.as_str()}",
                            value: status.as_str(),
                            selected: status == booking.status,
                            "{status.label()}"
                        }
                    }
                }
            }
        }
    }
}
