use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::get_bookings::*;
use tiffin_domain::Booking;
use tiffin_infra::TiffinContext;

pub async fn get_bookings_controller(
    ctx: web::Data<TiffinContext>,
) -> Result<HttpResponse, TiffinError> {
    execute(GetBookingsUseCase, &ctx)
        .await
        .map(|bookings| HttpResponse::Ok().json(APIResponse::new(bookings)))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
struct GetBookingsUseCase;

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for TiffinError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingsUseCase {
    type Response = Vec<Booking>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetBookings";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .bookings
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
