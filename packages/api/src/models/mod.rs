//! Wire models for the hotel backend.

mod auth;
mod booking;
mod stats;
mod user;

pub use auth::{
    AdminLoginRequest, AuthResponse, LoginRequest, MeResponse, MessageResponse, SignupRequest,
    SUCCESS_STATUS,
};
pub use booking::{
    Booking, BookingConfirmation, BookingRequest, BookingStatus, RoomType, StatusUpdate,
    StatusUpdateResponse,
};
pub use stats::DashboardStats;
pub use user::{Role, UserInfo};
