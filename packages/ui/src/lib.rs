//! This crate contains the session store and all shared UI for the workspace.

pub mod admin;
pub mod booking_form;
pub mod session;
pub mod signup_form;

mod auth;
pub use auth::{use_auth, AuthProvider, AuthStore, LogoutButton};

pub use session::{AuthFailure, AuthResult, Session, SessionState, SessionStore};

mod catalog;
pub use catalog::{AmenityList, RoomCatalog, AMENITIES, ROOMS};

mod navbar;
pub use navbar::Navbar;

mod widgets;
pub use widgets::{Notice, Spinner, StatCard, StatusBadge};

mod timer;
pub use timer::sleep;

#[cfg(test)]
mod testing;
