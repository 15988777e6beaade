use serde::{Deserialize, Serialize};

use super::user::null_as_default;

/// Counters shown on the admin dashboard.
///
/// The backend computes the booking counts with `SUM(...)`, which is `null`
/// when there are no bookings at all, so every field reads `null` as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_bookings: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confirmed_bookings: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_bookings: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_guests: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_rooms: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_rooms: u64,
}
