//! Registration page view.

use api::SignupRequest;
use dioxus::prelude::*;
use ui::signup_form::validate_signup;
use ui::{use_auth, Notice};

use super::{require_anonymous, use_page_guard};
use crate::Route;

#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut form = use_signal(SignupRequest::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let guard = use_page_guard(require_anonymous);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let mut auth = auth.clone();
        let request = form();
        spawn(async move {
            error.set(None);
            if let Err(message) = validate_signup(&request) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            match auth.signup(&request).await {
                Ok(_) => {
                    guard.leave();
                    nav.push(Route::Dashboard {});
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
                h1 { "Create Account" }
                p { class: "auth-subtitle", "Join us and book your next stay" }

                Notice { message: error() }

                form {
                    class: "auth-form",
                    onsubmit: handle_signup,

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "firstname", "First Name" }
                            input {
                                id: "firstname",
                                r#type: "text",
                                required: true,
                                value: form().firstname,
                                oninput: move |evt: FormEvent| form.write().firstname = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "lastname", "Last Name" }
                            input {
                                id: "lastname",
                                r#type: "text",
                                required: true,
                                value: form().lastname,
                                oninput: move |evt: FormEvent| form.write().lastname = evt.value(),
                            }
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            required: true,
                            value: form().username,
                            oninput: move |evt: FormEvent| form.write().username = evt.value(),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            value: form().email,
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "password", "Password" }
                            input {
                                id: "password",
                                r#type: "password",
                                required: true,
                                placeholder: "At least 6 characters",
                                value: form().password,
                                oninput: move |evt: FormEvent| form.write().password = evt.value(),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "confirmpassword", "Confirm Password" }
                            input {
                                id: "confirmpassword",
                                r#type: "password",
                                required: true,
                                value: form().confirmpassword,
                                oninput: move |evt: FormEvent| form.write().confirmpassword = evt.value(),
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Sign Up" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Login" }
                }
            }
        }
    }
}
