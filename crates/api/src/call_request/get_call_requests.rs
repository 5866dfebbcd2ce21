use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::get_call_requests::*;
use tiffin_domain::CallRequest;
use tiffin_infra::TiffinContext;

pub async fn get_call_requests_controller(
    ctx: web::Data<TiffinContext>,
) -> Result<HttpResponse, TiffinError> {
    execute(GetCallRequestsUseCase, &ctx)
        .await
        .map(|call_requests| HttpResponse::Ok().json(APIResponse::new(call_requests)))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
struct GetCallRequestsUseCase;

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
impl UseCase for GetCallRequestsUseCase {
    type Response = Vec<CallRequest>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCallRequests";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .call_requests
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
