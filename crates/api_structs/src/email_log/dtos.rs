use serde::{Deserialize, Serialize};
use tiffin_domain::{Booking, EmailLog, EmailStatus, ID};

/// An `EmailLog` together with the customer it was sent to, when the
/// booking still exists
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailLogDTO {
    pub id: ID,
    pub booking_id: Option<ID>,
    pub days_left: i64,
    pub status: EmailStatus,
    pub sent_at: i64,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl EmailLogDTO {
    pub fn new(log: EmailLog, booking: Option<&Booking>) -> Self {
        Self {
            id: log.id,
            booking_id: log.booking_id,
            days_left: log.days_left,
            status: log.status,
            sent_at: log.sent_at,
            name: booking.map(|b| b.name.clone()),
            email: booking.and_then(|b| b.email.clone()),
        }
    }
}
