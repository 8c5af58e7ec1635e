use async_trait::async_trait;
use contracts::domain::a001_vendor::VendorId;
use contracts::domain::a002_custom_booking::{
    parse_assignments, parse_bookings, BookingAssignment, BookingId, CustomBooking, CustomBookingForm,
};
use contracts::system::auth::MasterAdminId;
use gloo_net::http::Request;

use crate::shared::api_utils::{send, send_request, ApiConfig, ApiError};

#[async_trait(?Send)]
pub trait BookingApi {
    /// Full booking records
    async fn fetch_bookings(&self, admin: &MasterAdminId) -> Result<Vec<CustomBooking>, ApiError>;

    /// Vendor assignment per booking, read separately from the records
    async fn fetch_assignments(&self, admin: &MasterAdminId) -> Result<Vec<BookingAssignment>, ApiError>;

    async fn create_booking(&self, admin: &MasterAdminId, form: &CustomBookingForm) -> Result<(), ApiError>;

    async fn update_booking(
        &self,
        admin: &MasterAdminId,
        id: BookingId,
        form: &CustomBookingForm,
    ) -> Result<(), ApiError>;

    async fn delete_booking(&self, admin: &MasterAdminId, id: BookingId) -> Result<(), ApiError>;

    async fn assign_vendor(
        &self,
        admin: &MasterAdminId,
        booking: BookingId,
        vendor: VendorId,
    ) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    config: ApiConfig,
}

impl HttpBookingApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn bookings_url(&self, admin: &MasterAdminId) -> String {
        self.config
            .url(&format!("/api/bookings/masteradmins/{}/custom-bookings", admin))
    }
}

#[async_trait(?Send)]
impl BookingApi for HttpBookingApi {
    async fn fetch_bookings(&self, admin: &MasterAdminId) -> Result<Vec<CustomBooking>, ApiError> {
        let url = self
            .config
            .url(&format!("/api/masteradmins/{}/custom-bookings", admin));
        let body = send(Request::get(&url), "Failed to fetch full bookings").await?;
        parse_bookings(&body).map_err(ApiError::payload)
    }

    async fn fetch_assignments(&self, admin: &MasterAdminId) -> Result<Vec<BookingAssignment>, ApiError> {
        let body = send(Request::get(&self.bookings_url(admin)), "Failed to fetch vendor assignments").await?;
        parse_assignments(&body).map_err(ApiError::payload)
    }

    async fn create_booking(&self, admin: &MasterAdminId, form: &CustomBookingForm) -> Result<(), ApiError> {
        let body = form.to_json().map_err(ApiError::Invalid)?;
        let request = Request::post(&self.bookings_url(admin)).json(&body)?;
        send_request(request, "Failed to add booking").await?;
        Ok(())
    }

    async fn update_booking(
        &self,
        admin: &MasterAdminId,
        id: BookingId,
        form: &CustomBookingForm,
    ) -> Result<(), ApiError> {
        let body = form.to_json().map_err(ApiError::Invalid)?;
        let url = format!("{}/{}", self.bookings_url(admin), id);
        let request = Request::put(&url).json(&body)?;
        send_request(request, "Failed to update booking").await?;
        Ok(())
    }

    async fn delete_booking(&self, admin: &MasterAdminId, id: BookingId) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.bookings_url(admin), id);
        send(Request::delete(&url), "Failed to delete booking").await?;
        Ok(())
    }

    async fn assign_vendor(
        &self,
        admin: &MasterAdminId,
        booking: BookingId,
        vendor: VendorId,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}/assign-vendor/{}", self.bookings_url(admin), booking, vendor);
        send(Request::post(&url), "Failed to assign vendor").await?;
        Ok(())
    }
}
