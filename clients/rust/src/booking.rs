use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use tiffin_api_structs::*;
use tiffin_domain::{NaiveDate, ID};

#[derive(Clone)]
pub struct BookingClient {
    base: Arc<BaseClient>,
}

pub struct CreateBookingInput {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub meal_type: String,
    pub plan_type: String,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
}

impl BookingClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateBookingInput,
    ) -> APIResponse<create_booking::APIResponse> {
        let body = create_booking::RequestBody {
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            meal_type: input.meal_type,
            plan_type: input.plan_type,
            start_date: input.start_date,
            notes: input.notes,
        };
        self.base
            .post(body, "bookings".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_bookings::APIResponse> {
        self.base.get("bookings".into(), StatusCode::OK).await
    }

    pub async fn delete(&self, booking_id: ID) -> APIResponse<delete_booking::APIResponse> {
        self.base
            .delete(format!("bookings/{}", booking_id), StatusCode::OK)
            .await
    }
}
