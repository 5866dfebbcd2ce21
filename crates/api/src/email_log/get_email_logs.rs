use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use tiffin_api_structs::{dtos::EmailLogDTO, get_email_logs::*};
use tiffin_infra::TiffinContext;

const RECENT_LOGS_LIMIT: i64 = 50;

pub async fn get_email_logs_controller(
    ctx: web::Data<TiffinContext>,
) -> Result<HttpResponse, TiffinError> {
    execute(GetEmailLogsUseCase, &ctx)
        .await
        .map(|email_logs| HttpResponse::Ok().json(APIResponse { email_logs }))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
struct GetEmailLogsUseCase;

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
impl UseCase for GetEmailLogsUseCase {
    type Response = Vec<EmailLogDTO>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEmailLogs";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        let logs = ctx
            .repos
            .email_logs
            .find_recent(RECENT_LOGS_LIMIT)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut booking_ids = logs
            .iter()
            .filter_map(|log| log.booking_id)
            .collect::<Vec<_>>();
        booking_ids.sort();
        booking_ids.dedup();

        let bookings = ctx
            .repos
            .bookings
            .find_many(&booking_ids)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .into_iter()
            .map(|booking| (booking.id, booking))
            .collect::<HashMap<_, _>>();

        Ok(logs
            .into_iter()
            .map(|log| {
                let booking = log.booking_id.and_then(|id| bookings.get(&id));
                EmailLogDTO::new(log, booking)
            })
            .collect())
    }
}
