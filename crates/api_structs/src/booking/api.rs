use crate::dtos::BookingDTO;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tiffin_domain::{Booking, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking: BookingDTO,
}

impl BookingResponse {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking: BookingDTO::new(booking),
        }
    }
}

pub mod create_booking {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub phone: String,
        pub email: Option<String>,
        #[serde(default)]
        pub address: String,
        #[serde(default)]
        pub meal_type: String,
        #[serde(default)]
        pub plan_type: String,
        pub start_date: NaiveDate,
        pub notes: Option<String>,
    }

    pub type APIResponse = BookingResponse;
}

pub mod get_bookings {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub bookings: Vec<BookingDTO>,
    }

    impl APIResponse {
        pub fn new(bookings: Vec<Booking>) -> Self {
            Self {
                bookings: bookings.into_iter().map(BookingDTO::new).collect(),
            }
        }
    }
}

pub mod delete_booking {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}
