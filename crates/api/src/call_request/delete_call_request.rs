use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::delete_call_request::*;
use tiffin_domain::{CallRequest, ID};
use tiffin_infra::TiffinContext;

pub async fn delete_call_request_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<TiffinContext>,
) -> Result<HttpResponse, TiffinError> {
    let usecase = DeleteCallRequestUseCase {
        call_request_id: path_params.call_request_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|call_request| HttpResponse::Ok().json(APIResponse::new(call_request)))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
struct DeleteCallRequestUseCase {
    call_request_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for TiffinError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => Self::NotFound(format!(
                "The call request with id: {}, was not found.",
                id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteCallRequestUseCase {
    type Response = CallRequest;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCallRequest";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .call_requests
            .delete(&self.call_request_id)
            .await
            .ok_or(UseCaseError::NotFound(self.call_request_id))
    }
}
