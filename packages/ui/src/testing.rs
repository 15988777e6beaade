//! In-memory [`HotelApi`] for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use api::models::{MeResponse, StatusUpdateResponse};
use api::{
    AdminLoginRequest, ApiError, AuthResponse, Booking, BookingConfirmation, BookingRequest,
    BookingStatus, DashboardStats, HotelApi, LoginRequest, Role, RoomType, SignupRequest,
    UserInfo,
};
use chrono::NaiveDate;

pub(crate) fn guest(username: &str) -> UserInfo {
    UserInfo {
        id: None,
        username: username.to_string(),
        firstname: "Jane".to_string(),
        lastname: "Doe".to_string(),
        email: format!("{username}@hotel.test"),
        role: Role::Guest,
    }
}

pub(crate) fn booking(id: i64, status: BookingStatus) -> Booking {
    Booking {
        id,
        guest_name: "Jane Doe".to_string(),
        email: "jane@hotel.test".to_string(),
        phone: "555-0100".to_string(),
        room_type: RoomType::Standard,
        people: 2,
        check_in: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(),
        duration: 3,
        status,
        created_at: None,
    }
}

struct StubState {
    me: Result<MeResponse, ApiError>,
    login: Result<AuthResponse, ApiError>,
    admin_login: Result<AuthResponse, ApiError>,
    signup: Result<AuthResponse, ApiError>,
    logout: Result<(), ApiError>,
    booking: Result<BookingConfirmation, ApiError>,
    stats: Result<DashboardStats, ApiError>,
    bookings: Result<Vec<Booking>, ApiError>,
    update_error: Option<ApiError>,
    last_booking: Option<BookingRequest>,
    calls: Vec<&'static str>,
}

impl Default for StubState {
    fn default() -> Self {
        let offline = || ApiError::Transport("stub not configured".into());
        Self {
            me: Err(offline()),
            login: Err(offline()),
            admin_login: Err(offline()),
            signup: Err(offline()),
            logout: Ok(()),
            booking: Err(offline()),
            stats: Ok(DashboardStats::default()),
            bookings: Ok(Vec::new()),
            update_error: None,
            last_booking: None,
            calls: Vec::new(),
        }
    }
}

/// Canned responses per endpoint. Status updates are applied to the canned
/// booking list, so a refetch sees them the way it would on the real backend.
#[derive(Clone, Default)]
pub(crate) struct StubApi {
    state: Rc<RefCell<StubState>>,
}

impl StubApi {
    pub fn set_me(&self, res: Result<MeResponse, ApiError>) {
        self.state.borrow_mut().me = res;
    }

    pub fn set_login(&self, res: Result<AuthResponse, ApiError>) {
        self.state.borrow_mut().login = res;
    }

    pub fn set_admin_login(&self, res: Result<AuthResponse, ApiError>) {
        self.state.borrow_mut().admin_login = res;
    }

    pub fn set_signup(&self, res: Result<AuthResponse, ApiError>) {
        self.state.borrow_mut().signup = res;
    }

    pub fn set_logout(&self, res: Result<(), ApiError>) {
        self.state.borrow_mut().logout = res;
    }

    pub fn set_booking(&self, res: Result<BookingConfirmation, ApiError>) {
        self.state.borrow_mut().booking = res;
    }

    pub fn set_stats(&self, res: Result<DashboardStats, ApiError>) {
        self.state.borrow_mut().stats = res;
    }

    pub fn set_bookings(&self, res: Result<Vec<Booking>, ApiError>) {
        self.state.borrow_mut().bookings = res;
    }

    pub fn fail_updates(&self, err: ApiError) {
        self.state.borrow_mut().update_error = Some(err);
    }

    pub fn last_booking(&self) -> Option<BookingRequest> {
        self.state.borrow().last_booking.clone()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    fn record(&self, call: &'static str) {
        self.state.borrow_mut().calls.push(call);
    }
}

impl HotelApi for StubApi {
    async fn me(&self) -> Result<MeResponse, ApiError> {
        self.record("me");
        self.state.borrow().me.clone()
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record("login");
        self.state.borrow().login.clone()
    }

    async fn admin_login(&self, _request: &AdminLoginRequest) -> Result<AuthResponse, ApiError> {
        self.record("admin_login");
        self.state.borrow().admin_login.clone()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.record("signup");
        self.state.borrow().signup.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.state.borrow().logout.clone()
    }

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        self.record("create_booking");
        let mut state = self.state.borrow_mut();
        state.last_booking = Some(request.clone());
        state.booking.clone()
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.record("dashboard_stats");
        self.state.borrow().stats.clone()
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.record("list_bookings");
        self.state.borrow().bookings.clone()
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<StatusUpdateResponse, ApiError> {
        self.record("update_booking_status");
        let mut state = self.state.borrow_mut();
        if let Some(err) = state.update_error.clone() {
            return Err(err);
        }
        let Ok(bookings) = state.bookings.as_mut() else {
            return Err(ApiError::Status {
                status: 500,
                message: Some("Failed to update booking status".into()),
            });
        };
        let Some(booking) = bookings.iter_mut().find(|b| b.id == booking_id) else {
            return Err(ApiError::Status {
                status: 404,
                message: Some("Booking not found".into()),
            });
        };
        booking.status = status;
        Ok(StatusUpdateResponse {
            message: Some("Booking status updated successfully".into()),
            booking_id: Some(booking_id),
            new_status: Some(status),
        })
    }
}
