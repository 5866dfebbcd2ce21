use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::delete_booking::*;
use tiffin_domain::{Booking, ID};
use tiffin_infra::TiffinContext;

pub async fn delete_booking_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<TiffinContext>,
) -> Result<HttpResponse, TiffinError> {
    let usecase = DeleteBookingUseCase {
        booking_id: path_params.booking_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Ok().json(APIResponse::new(booking)))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
struct DeleteBookingUseCase {
    booking_id: ID,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for TiffinError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(booking_id) => Self::NotFound(format!(
                "The booking with id: {}, was not found.",
                booking_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteBookingUseCase {
    type Response = Booking;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteBooking";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.bookings.find(&self.booking_id).await.is_none() {
            return Err(UseCaseError::NotFound(self.booking_id));
        }

        // The audit trail outlives the booking
        ctx.repos
            .email_logs
            .unlink_booking(&self.booking_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        ctx.repos
            .bookings
            .delete(&self.booking_id)
            .await
            .ok_or(UseCaseError::NotFound(self.booking_id))
    }
}
