//! Booking form state and submission.
//!
//! The form keeps raw input strings, exactly as typed, and only turns them into
//! a [`BookingRequest`] on submit. Check-out is never computed here: the
//! backend returns it and the view shows that value verbatim.

use api::{BookingConfirmation, BookingRequest, HotelApi, RoomType, UserInfo};
use chrono::NaiveDate;

pub const BOOKING_FAILED: &str = "Failed to create booking. Please try again.";
pub const MAX_GUESTS: u32 = 10;

/// Raw contents of the booking form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub room_type: String,
    pub people: String,
    pub check_in: String,
    pub duration: String,
}

impl BookingDraft {
    /// Empty form with the guest's name and email filled in.
    pub fn for_user(user: Option<&UserInfo>) -> Self {
        match user {
            Some(user) => Self {
                first_name: user.firstname.clone(),
                last_name: user.lastname.clone(),
                email: user.email.clone(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    /// Check the form and build the request body.
    pub fn validate(&self, today: NaiveDate) -> Result<BookingRequest, String> {
        let fields = [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.room_type,
            &self.people,
            &self.check_in,
            &self.duration,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err("All fields are required".to_string());
        }

        let room_type: RoomType = self
            .room_type
            .parse()
            .map_err(|_| "Please select a room type".to_string())?;

        let people = match self.people.trim().parse::<u32>() {
            Ok(n) if (1..=MAX_GUESTS).contains(&n) => n,
            _ => return Err(format!("Number of guests must be between 1 and {MAX_GUESTS}")),
        };

        let duration = match self.duration.trim().parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Err("Duration must be at least 1 day".to_string()),
        };

        let check_in = NaiveDate::parse_from_str(self.check_in.trim(), "%Y-%m-%d")
            .map_err(|_| "Invalid check-in date".to_string())?;
        if check_in < today {
            return Err("Check-in date cannot be in the past".to_string());
        }

        Ok(BookingRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            room_type,
            people,
            check_in,
            duration,
        })
    }
}

/// Send a booking. The error is the backend's message, or a generic one.
pub async fn submit_booking<A: HotelApi>(
    api: &A,
    request: &BookingRequest,
) -> Result<BookingConfirmation, String> {
    api.create_booking(request).await.map_err(|err| {
        tracing::warn!("booking failed: {err}");
        err.server_message().unwrap_or(BOOKING_FAILED).to_string()
    })
}

/// Today's date in the browser's (or host's) local time zone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
