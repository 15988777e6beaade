//! Landing page: hero, quick search, room catalog and amenities.

use api::RoomType;
use dioxus::prelude::*;
use ui::{use_auth, AmenityList, Navbar, RoomCatalog};

use super::landing_for;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let session = auth.session();
    let nav = use_navigator();

    let mut check_in = use_signal(String::new);
    let mut duration = use_signal(String::new);
    let mut people = use_signal(String::new);
    let mut room_type = use_signal(String::new);

    // The booking form does the real validation; this only gets people there.
    let handle_search = move |evt: FormEvent| {
        evt.prevent_default();
        nav.push(Route::NewBooking {});
    };

    let account_link = if session.is_authenticated() {
        rsx! {
            Link { to: landing_for(&session), class: "btn-primary", "Dashboard" }
        }
    } else {
        rsx! {
            Link { to: Route::Login {}, class: "btn-secondary", "Login" }
            Link { to: Route::Signup {}, class: "btn-primary", "Sign Up" }
        }
    };

    rsx! {
        div {
            class: "landing-page",

            Navbar {
                title: "🏨 Luxury Hotel",
                a { href: "#rooms", "Rooms" }
                a { href: "#amenities", "Amenities" }
                a { href: "#about", "About" }
                {account_link}
            }

            section {
                class: "hero",
                div {
                    class: "hero-content",
                    h1 { class: "hero-title", "Welcome to Luxury Hotel" }
                    p { class: "hero-subtitle", "Experience unparalleled comfort and exceptional service" }
                    div {
                        class: "hero-buttons",
                        Link { to: Route::Signup {}, class: "btn-primary btn-large", "Book Your Stay" }
                        a { href: "#rooms", class: "btn-secondary btn-large", "Explore Rooms" }
                    }
                }
            }

            section {
                class: "booking-search",
                form {
                    class: "search-form",
                    onsubmit: handle_search,

                    div {
                        class: "form-group",
                        label { "Check In" }
                        input {
                            r#type: "date",
                            required: true,
                            value: check_in(),
                            oninput: move |evt: FormEvent| check_in.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Duration (Days)" }
                        input {
                            r#type: "number",
                            min: "1",
                            placeholder: "Nights",
                            required: true,
                            value: duration(),
                            oninput: move |evt: FormEvent| duration.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Guests" }
                        input {
                            r#type: "number",
                            min: "1",
                            max: "10",
                            placeholder: "Guests",
                            required: true,
                            value: people(),
                            oninput: move |evt: FormEvent| people.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-group",
                        label { "Room Type" }
                        select {
                            required: true,
                            value: room_type(),
                            onchange: move |evt: FormEvent| room_type.set(evt.value()),
                            option { value: "", "Select room" }
                            for room in RoomType::ALL {
                                option { key: "{room.as_str()}", value: room.as_str(), "{room.label()}" }
                            }
                        }
                    }
                    button { r#type: "submit", class: "btn-primary", "Check Availability" }
                }
            }

            RoomCatalog {}
            AmenityList {}

            section {
                id: "about",
                class: "about-section",
                h2 { class: "section-title", "About Us" }
                p {
                    "For over two decades we have welcomed travellers from around the world. "
                    "Our staff is dedicated to making every stay memorable."
                }
            }

            footer {
                class: "footer",
                p { "© Luxury Hotel. All rights reserved." }
            }
        }
    }
}
