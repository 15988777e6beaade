//! Admin dashboard data: loading and booking status changes.
//!
//! The dashboard never patches its own copy of a booking. After every status
//! change it re-reads the full list from the backend.

use api::{Booking, BookingStatus, DashboardStats, HotelApi};
use futures::future::try_join;

pub const LOAD_FAILED: &str = "Failed to load dashboard data";
pub const UPDATE_FAILED: &str = "Failed to update booking status";

/// Everything the admin dashboard shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminBoard {
    pub stats: Option<DashboardStats>,
    pub bookings: Vec<Booking>,
}

impl AdminBoard {
    pub fn booking(&self, id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }
}

/// Fetch stats and bookings concurrently. Both must succeed.
pub async fn load_dashboard<A: HotelApi>(api: &A) -> Result<AdminBoard, String> {
    let (stats, bookings) = try_join(api.dashboard_stats(), api.list_bookings())
        .await
        .map_err(|err| {
            tracing::warn!("error fetching dashboard data: {err}");
            LOAD_FAILED.to_string()
        })?;
    Ok(AdminBoard {
        stats: Some(stats),
        bookings,
    })
}

/// Change a booking's status, then return the refetched booking list.
pub async fn update_booking_status<A: HotelApi>(
    api: &A,
    booking_id: i64,
    status: BookingStatus,
) -> Result<Vec<Booking>, String> {
    let refreshed = async {
        api.update_booking_status(booking_id, status).await?;
        api.list_bookings().await
    };
    refreshed.await.map_err(|err| {
        tracing::warn!(booking_id, %status, "error updating status: {err}");
        UPDATE_FAILED.to_string()
    })
}
