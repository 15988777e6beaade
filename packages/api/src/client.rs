//! # Hotel backend client
//!
//! [`HotelApi`] is the seam between the application and the external REST
//! service: one method per endpoint, each returning the decoded body or an
//! [`ApiError`]. Views and the session store are generic over it, so tests
//! drive them with an in-memory stub while the app uses [`HttpClient`].
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`me`](HotelApi::me) | `GET /me` |
//! | [`login`](HotelApi::login) | `POST /login` |
//! | [`admin_login`](HotelApi::admin_login) | `POST /adminlogin` |
//! | [`signup`](HotelApi::signup) | `POST /signup` |
//! | [`logout`](HotelApi::logout) | `POST /logout` |
//! | [`create_booking`](HotelApi::create_booking) | `POST /hotel_booking` |
//! | [`dashboard_stats`](HotelApi::dashboard_stats) | `GET /admin/dashboard/stats` |
//! | [`list_bookings`](HotelApi::list_bookings) | `GET /admin/bookings` |
//! | [`update_booking_status`](HotelApi::update_booking_status) | `PUT /admin/bookings/{id}/status` |
//!
//! The backend authenticates with HTTP-only cookies, so [`HttpClient`] never
//! attaches a token itself. In the browser every request is sent with
//! `credentials: include`; on native targets the client keeps a cookie jar.

use std::future::Future;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    AdminLoginRequest, AuthResponse, Booking, BookingConfirmation, BookingRequest, BookingStatus,
    DashboardStats, LoginRequest, MeResponse, MessageResponse, SignupRequest, StatusUpdate,
    StatusUpdateResponse,
};
use crate::{ApiConfig, ApiError};

/// Async interface to the hotel backend.
pub trait HotelApi {
    fn me(&self) -> impl Future<Output = Result<MeResponse, ApiError>>;
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn admin_login(
        &self,
        request: &AdminLoginRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn signup(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
    fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<BookingConfirmation, ApiError>>;
    fn dashboard_stats(&self) -> impl Future<Output = Result<DashboardStats, ApiError>>;
    fn list_bookings(&self) -> impl Future<Output = Result<Vec<Booking>, ApiError>>;
    fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> impl Future<Output = Result<StatusUpdateResponse, ApiError>>;
}

/// [`HotelApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap_or_else(|err| {
                tracing::error!("cookie-enabled HTTP client unavailable: {err}");
                reqwest::Client::new()
            });
        #[cfg(target_arch = "wasm32")]
        let http = reqwest::Client::new();

        Self { config, http }
    }

    /// Client for the backend named by `HOTEL_API_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        Ok(Self::new(ApiConfig::from_env()?))
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.http.get(self.config.endpoint(path))).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.http.post(self.config.endpoint(path)).json(body))
            .await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = with_credentials(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<MessageResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            tracing::debug!(%status, ?message, "backend rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

impl HotelApi for HttpClient {
    async fn me(&self) -> Result<MeResponse, ApiError> {
        self.get("/me").await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/login", request).await
    }

    async fn admin_login(&self, request: &AdminLoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/adminlogin", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post("/signup", request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let _: MessageResponse = self
            .send(self.http.post(self.config.endpoint("/logout")))
            .await?;
        Ok(())
    }

    async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        self.post("/hotel_booking", request).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/admin/dashboard/stats").await
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get("/admin/bookings").await
    }

    async fn update_booking_status(
        &self,
        booking_id: i64,
        status: BookingStatus,
    ) -> Result<StatusUpdateResponse, ApiError> {
        let url = self
            .config
            .endpoint(&format!("/admin/bookings/{booking_id}/status"));
        self.send(self.http.put(url).json(&StatusUpdate { status }))
            .await
    }
}
