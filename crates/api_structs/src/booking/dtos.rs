use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tiffin_domain::{Booking, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDTO {
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub meal_type: String,
    pub plan_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
    pub email_sent_7d: bool,
    pub email_sent_3d: bool,
    pub email_sent_1d: bool,
    pub created: i64,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            id: booking.id,
            end_date: booking.end_date(),
            name: booking.name,
            phone: booking.phone,
            email: booking.email,
            address: booking.address,
            meal_type: booking.meal_type,
            plan_type: booking.plan_type,
            start_date: booking.start_date,
            notes: booking.notes,
            email_sent_7d: booking.reminders.sent_7d,
            email_sent_3d: booking.reminders.sent_3d,
            email_sent_1d: booking.reminders.sent_1d,
            created: booking.created,
        }
    }
}
