//! Admin login page. Admin accounts sign in by email on a separate endpoint.

use dioxus::prelude::*;
use ui::{use_auth, Notice};

use super::{landing_for, require_anonymous, use_page_guard};
use crate::Route;

#[component]
pub fn AdminLogin() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let guard = use_page_guard(require_anonymous);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let mut auth = auth.clone();
        let address = email().trim().to_string();
        let secret = password();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match auth.admin_login(&address, &secret).await {
                Ok(_) => {
                    guard.leave();
                    nav.push(landing_for(&auth.session()));
                }
                Err(failure) => {
                    loading.set(false);
                    error.set(Some(failure.message));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h1 { "🔧 Admin Login" }

                Notice { message: error() }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-footer",
                    Link { to: Route::Home {}, "← Back to home" }
                }
            }
        }
    }
}
