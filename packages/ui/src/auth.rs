//! Authentication context and hooks for the UI.

use api::{ApiConfig, HttpClient};
use dioxus::prelude::*;

use crate::session::{Session, SessionState, SessionStore};

/// The app-wide session store: the HTTP client plus a signal holding the
/// session, so any component that reads it re-renders on login and logout.
pub type AuthStore = SessionStore<HttpClient, Signal<Session>>;

impl SessionState for Signal<Session> {
    fn snapshot(&self) -> Session {
        self.read().clone()
    }

    fn update(&mut self, f: impl FnOnce(&mut Session)) {
        f(&mut self.write())
    }
}

/// Get the session store provided by [`AuthProvider`].
pub fn use_auth() -> AuthStore {
    use_context::<AuthStore>()
}

fn make_client() -> HttpClient {
    HttpClient::from_env().unwrap_or_else(|err| {
        tracing::error!("{err}; using {}", api::config::DEFAULT_API_URL);
        HttpClient::new(ApiConfig::default())
    })
}

/// Provider component that owns the session store.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(Session::default);
    let store = use_context_provider(|| SessionStore::new(make_client(), session));

    // Check the existing session once, on mount
    let _ = use_resource(move || {
        let mut store = store.clone();
        async move { store.initialize().await }
    });

    rsx! {
        {children}
    }
}

/// Button that logs out the current user, then hands control back to the
/// caller (usually to navigate away).
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "btn-secondary".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth();

    let onclick = move |_| {
        let mut auth = auth.clone();
        async move {
            auth.logout().await;
            on_logout.call(());
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
