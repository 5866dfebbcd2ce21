use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::get_stats::*;
use tiffin_domain::{
    date::{date_at, start_of_day_millis},
    EmailStatus,
};
use tiffin_infra::TiffinContext;

pub async fn get_stats_controller(
    ctx: web::Data<TiffinContext>,
) -> Result<HttpResponse, TiffinError> {
    execute(GetStatsUseCase, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(stats))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
struct GetStatsUseCase;

#[derive(Debug)]
enum UseCaseError {
    InvalidTimestamp(i64),
    StorageError,
}

impl From<UseCaseError> for TiffinError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidTimestamp(_) | UseCaseError::StorageError => {
                Self::InternalError
            }
        }
    }
}

impl From<anyhow::Error> for UseCaseError {
    fn from(_: anyhow::Error) -> Self {
        UseCaseError::StorageError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetStatsUseCase {
    type Response = APIResponse;

    type Error = UseCaseError;

    const NAME: &'static str = "GetStats";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        let tz = &ctx.config.timezone;
        let now = ctx.sys.get_timestamp_millis();
        let today = date_at(now, tz).ok_or(UseCaseError::InvalidTimestamp(now))?;
        let start_of_today = start_of_day_millis(today, tz);

        Ok(APIResponse {
            total_bookings: ctx.repos.bookings.count().await?,
            total_call_requests: ctx.repos.call_requests.count().await?,
            today_bookings: ctx
                .repos
                .bookings
                .count_created_since(start_of_today)
                .await?,
            today_call_requests: ctx
                .repos
                .call_requests
                .count_created_since(start_of_today)
                .await?,
            emails_sent: ctx
                .repos
                .email_logs
                .count_by_status(EmailStatus::Sent)
                .await?,
        })
    }
}
