//! # API crate: client for the hotel booking backend
//!
//! Everything the frontend knows about the REST service lives here. The
//! backend owns all business rules (check-out computation, role checks,
//! validation); this crate only describes its wire format and how to reach it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | The [`HotelApi`] trait and its HTTP implementation [`HttpClient`] |
//! | [`config`] | [`ApiConfig`]: backend base URL from `HOTEL_API_URL` |
//! | [`error`] | [`ApiError`]: transport, status, decode and config failures |
//! | [`models`] | Users, bookings, dashboard stats and auth request/response bodies |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{HotelApi, HttpClient};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
    AdminLoginRequest, AuthResponse, Booking, BookingConfirmation, BookingRequest, BookingStatus,
    DashboardStats, LoginRequest, MeResponse, Role, RoomType, SignupRequest, UserInfo,
};
