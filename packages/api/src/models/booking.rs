//! Booking models shared by the booking form and the admin dashboard.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::user::null_as_default;

/// Room categories the hotel sells. The backend stores whatever string it is
/// given, so unrecognised values in existing bookings decode to `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Executive,
    #[serde(other)]
    Other,
}

impl RoomType {
    pub const ALL: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::Executive,
    ];

    /// Wire value, also used as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Executive => "executive",
            RoomType::Other => "other",
        }
    }

    /// Label shown in the booking form's room selector.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard Room",
            RoomType::Deluxe => "Deluxe Room",
            RoomType::Suite => "Suite",
            RoomType::Executive => "Executive Suite",
            RoomType::Other => "Other",
        }
    }
}

impl fmt::Display for RoomType {
    /// Capitalized wire value, as listed in the admin bookings table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomType::ALL
            .into_iter()
            .find(|room| room.as_str() == s)
            .ok_or_else(|| format!("Unknown room type: {s}"))
    }
}

/// Lifecycle of a reservation. Only admins move bookings between states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }

    /// CSS modifier for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "status-pending",
            BookingStatus::Confirmed => "status-confirmed",
            BookingStatus::Cancelled => "status-cancelled",
            BookingStatus::Completed => "status-completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown booking status: {s}"))
    }
}

/// A reservation as listed by `GET /admin/bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,
    /// `first || ' ' || last` on the backend, so `null` when either half is.
    #[serde(deserialize_with = "null_as_default")]
    pub guest_name: String,
    pub email: String,
    pub phone: String,
    pub room_type: RoomType,
    pub people: u32,
    pub check_in: NaiveDate,
    /// Computed by the backend as `check_in + duration` days.
    pub check_out: NaiveDate,
    pub duration: u32,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /hotel_booking`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub room_type: RoomType,
    pub people: u32,
    pub check_in: NaiveDate,
    pub duration: u32,
}

/// Response of `POST /hotel_booking`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingConfirmation {
    pub booking_id: i64,
    /// Displayed exactly as the backend formats it.
    pub check_out: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl BookingConfirmation {
    /// Success line shown under the booking form.
    pub fn summary(&self) -> String {
        format!(
            "Booking created successfully! Booking ID: {}. Check-out date: {}",
            self.booking_id, self.check_out
        )
    }
}

/// Body of `PUT /admin/bookings/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdate {
    pub status: BookingStatus,
}

/// Response of `PUT /admin/bookings/{id}/status`. Unused by the dashboard,
/// which refetches the list instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StatusUpdateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub new_status: Option<BookingStatus>,
}
