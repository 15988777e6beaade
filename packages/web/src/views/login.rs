//! Guest login page.

use dioxus::prelude::*;
use ui::{use_auth, Notice};

use super::{landing_for, require_anonymous, use_page_guard};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: go to the dashboard
    let guard = use_page_guard(require_anonymous);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let mut auth = auth.clone();
        let name = username().trim().to_string();
        let secret = password();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match auth.login(&name, &secret).await {
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
                h1 { "Welcome Back" }
                p { class: "auth-subtitle", "Sign in to manage your bookings" }

                Notice { message: error() }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    div {
                        class: "form-group",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            required: true,
                            placeholder: "Enter your username",
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            placeholder: "Enter your password",
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
                    "Don't have an account? "
                    Link { to: Route::Signup {}, "Sign up" }
                }
                p {
                    class: "auth-footer",
                    "Hotel staff? "
                    Link { to: Route::AdminLogin {}, "Admin login" }
                }
            }
        }
    }
}
