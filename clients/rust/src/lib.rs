mod admin;
mod base;
mod booking;
mod call_request;
mod status;

use admin::AdminClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use booking::BookingClient;
pub use booking::CreateBookingInput;
use call_request::CallRequestClient;
use status::StatusClient;
use std::sync::Arc;
pub use tiffin_api_structs::dtos::*;
pub use tiffin_domain::{EmailStatus, NaiveDate, ID};

// Domain
pub use tiffin_api_structs::dtos::BookingDTO as Booking;
pub use tiffin_api_structs::dtos::CallRequestDTO as CallRequest;
pub use tiffin_api_structs::dtos::EmailLogDTO as EmailLog;

/// Tiffin Server SDK
///
/// The SDK contains methods for interacting with the Tiffin server API.
#[derive(Clone)]
pub struct TiffinSDK {
    pub admin: AdminClient,
    pub booking: BookingClient,
    pub call_request: CallRequestClient,
    pub status: StatusClient,
}

impl TiffinSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let admin = AdminClient::new(base.clone());
        let booking = BookingClient::new(base.clone());
        let call_request = CallRequestClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            admin,
            booking,
            call_request,
            status,
        }
    }
}
