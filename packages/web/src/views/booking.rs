//! Booking form page.

use std::time::Duration;

use api::RoomType;
use dioxus::prelude::*;
use ui::booking_form::{self, BookingDraft, MAX_GUESTS};
use ui::{use_auth, Notice};

use super::{require_user, use_page_guard};
use crate::Route;

/// How long the confirmation stays up before going back to the dashboard.
const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[component]
pub fn NewBooking() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut draft = use_signal(|| BookingDraft::for_user(auth.user().as_ref()));
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_page_guard(require_user);

    // The startup check may finish after mount: prefill once the user is known
    let prefill_auth = auth.clone();
    use_effect(move || {
        let Some(user) = prefill_auth.user() else {
            return;
        };
        let mut form = draft.write();
        if form.email.is_empty() {
            form.first_name = user.firstname;
            form.last_name = user.lastname;
            form.email = user.email;
        }
    });

    let mut edit = move |apply: fn(&mut BookingDraft, String), value: String| {
        apply(&mut draft.write(), value);
        error.set(None);
        success.set(None);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        success.set(None);

        let request = match draft().validate(booking_form::today()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        let auth = auth.clone();
        spawn(async move {
            loading.set(true);
            let result = booking_form::submit_booking(auth.api(), &request).await;
            loading.set(false);
            match result {
                Ok(confirmation) => {
                    tracing::info!(booking_id = confirmation.booking_id, "booking created");
                    success.set(Some(confirmation.summary()));
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.push(Route::Dashboard {});
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let today = booking_form::today().to_string();
    let form = draft();

    rsx! {
        div {
            class: "booking-container",
            div {
                class: "booking-card",
                div {
                    class: "booking-header",
                    h1 { "📋 Book Your Stay" }
                    p { "Fill in the details to make your reservation" }
                }

                Notice { message: error() }
                Notice { message: success(), success: true }

                form {
                    class: "booking-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "first_name", "First Name *" }
                            input {
                                id: "first_name",
                                r#type: "text",
                                required: true,
                                placeholder: "First name",
                                value: form.first_name,
                                oninput: move |evt: FormEvent| edit(|d, v| d.first_name = v, evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "last_name", "Last Name *" }
                            input {
                                id: "last_name",
                                r#type: "text",
                                required: true,
                                placeholder: "Last name",
                                value: form.last_name,
                                oninput: move |evt: FormEvent| edit(|d, v| d.last_name = v, evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "email", "Email *" }
                            input {
                                id: "email",
                                r#type: "email",
                                required: true,
                                placeholder: "your.email@example.com",
                                value: form.email,
                                oninput: move |evt: FormEvent| edit(|d, v| d.email = v, evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "phone", "Phone *" }
                            input {
                                id: "phone",
                                r#type: "tel",
                                required: true,
                                placeholder: "+1 (555) 123-4567",
                                value: form.phone,
                                oninput: move |evt: FormEvent| edit(|d, v| d.phone = v, evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "check_in", "Check-in Date *" }
                            input {
                                id: "check_in",
                                r#type: "date",
                                required: true,
                                min: "{today}",
                                value: form.check_in,
                                oninput: move |evt: FormEvent| edit(|d, v| d.check_in = v, evt.value()),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "duration", "Duration (Days) *" }
                            input {
                                id: "duration",
                                r#type: "number",
                                required: true,
                                min: "1",
                                placeholder: "Number of nights",
                                value: form.duration,
                                oninput: move |evt: FormEvent| edit(|d, v| d.duration = v, evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "room_type", "Room Type *" }
                            select {
                                id: "room_type",
                                required: true,
                                value: form.room_type,
                                onchange: move |evt: FormEvent| edit(|d, v| d.room_type = v, evt.value()),
                                option { value: "", "Select room type" }
                                for room in RoomType::ALL {
                                    option { key: "{room.as_str()}", value: room.as_str(), "{room.label()}" }
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "people", "Number of Guests *" }
                            input {
                                id: "people",
                                r#type: "number",
                                required: true,
                                min: "1",
                                max: "{MAX_GUESTS}",
                                placeholder: "Number of guests",
                                value: form.people,
                                oninput: move |evt: FormEvent| edit(|d, v| d.people = v, evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "btn-secondary",
                            onclick: move |_| {
                                nav.push(Route::Dashboard {});
                            },
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "btn-primary",
                            disabled: loading(),
                            if loading() { "Booking..." } else { "Confirm Booking" }
                        }
                    }
                }
            }
        }
    }
}
