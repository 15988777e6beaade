//! # Session store
//!
//! The single source of truth for "who is signed in". [`Session`] is the
//! snapshot (current user plus the startup loading flag) and [`SessionStore`]
//! owns the operations that move it: the startup check, login, admin login,
//! signup and logout.
//!
//! ## Lifecycle
//!
//! A session starts empty and loading. [`SessionStore::initialize`] runs the
//! one startup check against `/me` and always ends with loading cleared; there
//! is no way back to loading. After that the user changes only when the
//! backend confirms a login or a session check, and logout always clears it,
//! whatever the network says.
//!
//! ## Errors
//!
//! No [`ApiError`] ever leaves this module. Login and signup failures become
//! an [`AuthFailure`] carrying the backend's message, or a fixed fallback when
//! there is none. Session-check and logout failures are only logged.
//!
//! ## Where the state lives
//!
//! [`SessionStore`] is generic over [`SessionState`], the cell that holds the
//! snapshot. The app keeps it in a Dioxus signal (see [`crate::auth`]) so every
//! view re-renders when it changes; tests keep it in a plain [`Session`].

use api::models::MeResponse;
use api::{
    AdminLoginRequest, ApiError, AuthResponse, HotelApi, LoginRequest, SignupRequest, UserInfo,
};
use thiserror::Error;

pub const LOGIN_FAILED: &str = "Login failed";
pub const SIGNUP_FAILED: &str = "Signup failed";

/// Snapshot of the authentication state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: Option<UserInfo>,
    loading_initial: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            loading_initial: true,
        }
    }
}

impl Session {
    /// A session whose startup check has finished with the given user.
    pub fn settled(user: Option<UserInfo>) -> Self {
        Self {
            user,
            loading_initial: false,
        }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// True until the startup session check has finished.
    pub fn is_loading(&self) -> bool {
        self.loading_initial
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.role == api::Role::Admin)
    }

    pub fn is_guest(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.role == api::Role::Guest)
    }

    fn set_user(&mut self, user: Option<UserInfo>) {
        self.user = user;
    }

    fn finish_loading(&mut self) {
        self.loading_initial = false;
    }
}

/// A cell holding the current [`Session`].
pub trait SessionState {
    fn snapshot(&self) -> Session;
    fn update(&mut self, f: impl FnOnce(&mut Session));
}

impl SessionState for Session {
    fn snapshot(&self) -> Session {
        self.clone()
    }

    fn update(&mut self, f: impl FnOnce(&mut Session)) {
        f(self)
    }
}

/// Why a login or signup did not go through, ready to show to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthFailure {
    pub message: String,
}

impl AuthFailure {
    fn new(message: Option<&str>, fallback: &str) -> Self {
        Self {
            message: message.unwrap_or(fallback).to_string(),
        }
    }
}

pub type AuthResult = Result<AuthResponse, AuthFailure>;

/// Session operations against a [`HotelApi`].
///
/// Cloning is cheap when both the client and the state cell are handles
/// (as `HttpClient` and `Signal<Session>` are); clones share the session.
#[derive(Debug, Clone)]
pub struct SessionStore<A, S = Session> {
    api: A,
    state: S,
}

impl<A: HotelApi> SessionStore<A, Session> {
    /// A store with its own, not yet initialized session.
    pub fn detached(api: A) -> Self {
        Self::new(api, Session::default())
    }
}

impl<A: HotelApi, S: SessionState> SessionStore<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    /// The backend client, for views that fetch domain data directly.
    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn session(&self) -> Session {
        self.state.snapshot()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.snapshot().user
    }

    pub fn is_loading(&self) -> bool {
        self.state.snapshot().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.snapshot().is_authenticated()
    }

    pub fn is_admin(&self) -> bool {
        self.state.snapshot().is_admin()
    }

    pub fn is_guest(&self) -> bool {
        self.state.snapshot().is_guest()
    }

    /// Startup check. Called once when the app mounts.
    pub async fn initialize(&mut self) {
        self.check_session().await;
        self.state.update(Session::finish_loading);
    }

    /// Ask the backend who we are and adopt its answer. Any failure,
    /// including a `user: null` reply, means nobody is signed in.
    pub async fn check_session(&mut self) {
        let user = match self.api.me().await {
            Ok(MeResponse { user, .. }) => user,
            Err(err) => {
                tracing::debug!("no active session: {err}");
                None
            }
        };
        self.state.update(|s| s.set_user(user));
    }

    /// Guest login with username and password.
    pub async fn login(&mut self, username: &str, password: &str) -> AuthResult {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.api.login(&request).await;
        self.sign_in(response)
    }

    /// Admin login with email and password.
    pub async fn admin_login(&mut self, email: &str, password: &str) -> AuthResult {
        let request = AdminLoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self.api.admin_login(&request).await;
        self.sign_in(response)
    }

    fn sign_in(&mut self, response: Result<AuthResponse, ApiError>) -> AuthResult {
        match response {
            Ok(response) if response.is_success() => match response.user.clone() {
                Some(user) => {
                    tracing::info!(
                        username = %user.username,
                        role = user.role.as_str(),
                        "signed in"
                    );
                    self.state.update(|s| s.set_user(Some(user)));
                    Ok(response)
                }
                None => {
                    tracing::warn!("login reported success without a user record");
                    Err(AuthFailure::new(response.message.as_deref(), LOGIN_FAILED))
                }
            },
            Ok(response) => Err(AuthFailure::new(response.message.as_deref(), LOGIN_FAILED)),
            Err(err) => {
                tracing::warn!("login failed: {err}");
                Err(AuthFailure::new(err.server_message(), LOGIN_FAILED))
            }
        }
    }

    /// Register a guest account. Signup does not return a full user record,
    /// so a successful signup is followed by a session check.
    pub async fn signup(&mut self, request: &SignupRequest) -> AuthResult {
        match self.api.signup(request).await {
            Ok(response) if response.is_success() => {
                self.check_session().await;
                Ok(response)
            }
            Ok(response) => Err(AuthFailure::new(response.message.as_deref(), SIGNUP_FAILED)),
            Err(err) => {
                tracing::warn!("signup failed: {err}");
                Err(AuthFailure::new(err.server_message(), SIGNUP_FAILED))
            }
        }
    }

    /// Sign out. The local session is cleared even if the backend call fails.
    pub async fn logout(&mut self) {
        if let Err(err) = self.api.logout().await {
            tracing::error!("logout error: {err}");
        }
        self.state.update(|s| s.set_user(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{guest, StubApi};
    use api::Role;

    fn success(user: UserInfo) -> AuthResponse {
        AuthResponse {
            status: Some("success".into()),
            message: Some("Login successful".into()),
            user: Some(user),
        }
    }

    fn assert_derived_flags(session: &Session) {
        assert_eq!(session.is_authenticated(), session.user().is_some());
        assert_eq!(
            session.is_admin(),
            session.user().is_some_and(|u| u.role == Role::Admin)
        );
    }

    #[test]
    fn test_new_session_is_loading_and_empty() {
        let session = Session::default();
        assert!(session.is_loading());
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(!session.is_guest());
    }

    #[tokio::test]
    async fn test_initialize_with_user() {
        let api = StubApi::default();
        api.set_me(Ok(MeResponse {
            user: Some(guest("jdoe")),
            message: None,
        }));
        let mut store = SessionStore::detached(api);

        store.initialize().await;

        assert!(!store.is_loading());
        assert!(store.is_authenticated());
        assert!(store.is_guest());
        assert_eq!(store.user().unwrap().username, "jdoe");
    }

    #[tokio::test]
    async fn test_initialize_failure_finishes_loading() {
        let api = StubApi::default();
        api.set_me(Err(ApiError::Status {
            status: 401,
            message: Some("No token provided".into()),
        }));
        let mut store = SessionStore::detached(api);

        store.initialize().await;

        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
        assert_derived_flags(&store.session());
    }

    #[tokio::test]
    async fn test_initialize_without_user_is_unauthenticated() {
        let api = StubApi::default();
        api.set_me(Ok(MeResponse::default()));
        let mut store = SessionStore::detached(api.clone());

        store.initialize().await;

        assert!(!store.is_loading());
        assert!(store.user().is_none());
        assert_eq!(api.calls(), vec!["me"]);
    }

    #[tokio::test]
    async fn test_undecodable_me_signs_out() {
        let api = StubApi::default();
        api.set_login(Ok(success(guest("jdoe"))));
        let mut store = SessionStore::detached(api.clone());
        store.login("jdoe", "secret").await.unwrap();

        // A `/me` body whose user lacks required keys
        api.set_me(Err(ApiError::Decode("missing field `username`".into())));
        store.check_session().await;

        assert!(store.user().is_none());
        assert_derived_flags(&store.session());
    }

    #[tokio::test]
    async fn test_login_success_sets_user() {
        let api = StubApi::default();
        let user = guest("jdoe");
        api.set_login(Ok(success(user.clone())));
        let mut store = SessionStore::detached(api);

        let result = store.login("jdoe", "secret").await;

        assert!(result.is_ok());
        assert_eq!(store.user(), Some(user));
        assert_derived_flags(&store.session());
    }

    #[tokio::test]
    async fn test_login_rejected_keeps_session() {
        let api = StubApi::default();
        api.set_login(Ok(AuthResponse {
            status: Some("fail".into()),
            message: Some("bad credentials".into()),
            user: None,
        }));
        let mut store = SessionStore::detached(api);
        let before = store.session();

        let result = store.login("jdoe", "wrong").await;

        assert_eq!(
            result,
            Err(AuthFailure {
                message: "bad credentials".into()
            })
        );
        assert_eq!(store.session(), before);
    }

    #[tokio::test]
    async fn test_login_http_error_uses_server_message() {
        let api = StubApi::default();
        api.set_login(Err(ApiError::Status {
            status: 404,
            message: Some("Incorrect passwords".into()),
        }));
        let mut store = SessionStore::detached(api);

        let result = store.login("jdoe", "wrong").await;

        assert_eq!(result.unwrap_err().message, "Incorrect passwords");
        assert!(store.user().is_none());
    }

    #[tokio::test]
    async fn test_login_network_failure_falls_back() {
        let api = StubApi::default();
        api.set_login(Err(ApiError::Transport("connection refused".into())));
        let mut store = SessionStore::detached(api);

        let result = store.login("jdoe", "secret").await;

        assert_eq!(result.unwrap_err().message, LOGIN_FAILED);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_success_without_user_is_failure() {
        let api = StubApi::default();
        api.set_login(Ok(AuthResponse {
            status: Some("success".into()),
            message: None,
            user: None,
        }));
        let mut store = SessionStore::detached(api);

        let result = store.login("jdoe", "secret").await;

        assert_eq!(result.unwrap_err().message, LOGIN_FAILED);
        assert!(store.user().is_none());
    }

    #[tokio::test]
    async fn test_admin_login_grants_admin() {
        let api = StubApi::default();
        let mut admin = guest("boss");
        admin.role = Role::Admin;
        api.set_admin_login(Ok(success(admin)));
        let mut store = SessionStore::detached(api.clone());

        store.admin_login("boss@hotel.io", "secret").await.unwrap();

        assert!(store.is_admin());
        assert!(!store.is_guest());
        assert_eq!(api.calls(), vec!["admin_login"]);
    }

    #[tokio::test]
    async fn test_signup_success_rechecks_session() {
        let api = StubApi::default();
        api.set_signup(Ok(AuthResponse {
            status: Some("success".into()),
            message: Some("Signup successful".into()),
            user: None,
        }));
        api.set_me(Ok(MeResponse {
            user: Some(guest("newbie")),
            message: None,
        }));
        let mut store = SessionStore::detached(api.clone());

        let result = store.signup(&SignupRequest::default()).await;

        assert!(result.is_ok());
        assert_eq!(store.user().unwrap().username, "newbie");
        assert_eq!(api.calls(), vec!["signup", "me"]);
    }

    #[tokio::test]
    async fn test_signup_misspelled_status_is_failure() {
        let api = StubApi::default();
        api.set_signup(Ok(AuthResponse {
            status: Some("succes".into()),
            message: Some("Signup succesfull".into()),
            user: None,
        }));
        let mut store = SessionStore::detached(api.clone());

        let result = store.signup(&SignupRequest::default()).await;

        assert_eq!(result.unwrap_err().message, "Signup succesfull");
        assert_eq!(api.calls(), vec!["signup"]);
    }

    #[tokio::test]
    async fn test_signup_conflict_and_network_failure() {
        let api = StubApi::default();
        api.set_signup(Err(ApiError::Status {
            status: 409,
            message: Some("Email already exists".into()),
        }));
        let mut store = SessionStore::detached(api.clone());
        assert_eq!(
            store
                .signup(&SignupRequest::default())
                .await
                .unwrap_err()
                .message,
            "Email already exists"
        );

        api.set_signup(Err(ApiError::Transport("offline".into())));
        assert_eq!(
            store
                .signup(&SignupRequest::default())
                .await
                .unwrap_err()
                .message,
            SIGNUP_FAILED
        );
    }

    #[tokio::test]
    async fn test_logout_clears_even_on_failure() {
        let api = StubApi::default();
        api.set_login(Ok(success(guest("jdoe"))));
        api.set_logout(Err(ApiError::Transport("offline".into())));
        let mut store = SessionStore::detached(api);

        store.login("jdoe", "secret").await.unwrap();
        assert!(store.is_authenticated());

        store.logout().await;

        assert!(store.user().is_none());
        assert_derived_flags(&store.session());
    }

    #[tokio::test]
    async fn test_loading_never_returns() {
        let api = StubApi::default();
        api.set_me(Ok(MeResponse {
            user: Some(guest("jdoe")),
            message: None,
        }));
        let mut store = SessionStore::detached(api);

        store.initialize().await;
        store.logout().await;
        store.check_session().await;
        let _ = store.login("jdoe", "secret").await;

        assert!(!store.is_loading());
    }
}
