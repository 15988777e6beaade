use dioxus::prelude::*;
use ui::{use_auth, Session};

use crate::Route;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod admin_login;
pub use admin_login::AdminLogin;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod booking;
pub use booking::NewBooking;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;

mod not_found;
pub use not_found::NotFound;

/// Where a signed-in user belongs.
pub(crate) fn landing_for(session: &Session) -> Route {
    if session.is_admin() {
        Route::AdminDashboard {}
    } else {
        Route::Dashboard {}
    }
}

/// Pages for signed-in guests.
pub(crate) fn require_user(session: &Session) -> Option<Route> {
    (!session.is_authenticated()).then_some(Route::Login {})
}

/// Pages for admins only. Anonymous visitors go to the admin login, anybody
/// else back to the landing page.
pub(crate) fn require_admin(session: &Session) -> Option<Route> {
    if !session.is_authenticated() {
        Some(Route::AdminLogin {})
    } else if !session.is_admin() {
        Some(Route::Home {})
    } else {
        None
    }
}

/// Sign-in pages: somebody already signed in goes to their dashboard.
pub(crate) fn require_anonymous(session: &Session) -> Option<Route> {
    session.is_authenticated().then(|| landing_for(session))
}

/// Handle returned by [`use_page_guard`].
#[derive(Clone, Copy)]
pub(crate) struct PageGuard {
    leaving: Signal<bool>,
}

impl PageGuard {
    /// Stop redirecting: the page is navigating away on its own (after a
    /// login, signup or logout).
    pub fn leave(mut self) {
        self.leaving.set(true);
    }
}

/// Redirect away from the current page whenever the settled session fails
/// `redirect`. Nothing happens while the startup check is still running.
pub(crate) fn use_page_guard(redirect: fn(&Session) -> Option<Route>) -> PageGuard {
    let auth = use_auth();
    let nav = use_navigator();
    let leaving = use_signal(|| false);

    use_effect(move || {
        let leaving = leaving();
        if let Some(target) = redirect_target(&auth.session(), leaving, redirect) {
            tracing::debug!(?target, "redirecting");
            nav.replace(target);
        }
    });

    PageGuard { leaving }
}

/// The guard's decision: no redirect while the startup check runs or once
/// the page has started leaving on its own.
fn redirect_target(
    session: &Session,
    leaving: bool,
    redirect: fn(&Session) -> Option<Route>,
) -> Option<Route> {
    if leaving || session.is_loading() {
        return None;
    }
    redirect(session)
}
