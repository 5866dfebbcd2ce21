use crate::{
    error::TiffinError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use tiffin_api_structs::create_call_request::*;
use tiffin_domain::{CallRequest, NewCallRequest};
use tiffin_infra::TiffinContext;

pub async fn create_call_request_controller(
    ctx: web::Data<TiffinContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, TiffinError> {
    let body = body.0;
    let usecase = CreateCallRequestUseCase {
        name: body.name,
        phone: body.phone,
    };

    execute(usecase, &ctx)
        .await
        .map(|call_request| HttpResponse::Created().json(APIResponse::new(call_request)))
        .map_err(TiffinError::from)
}

#[derive(Debug)]
struct CreateCallRequestUseCase {
    name: String,
    phone: String,
}

#[derive(Debug, PartialEq)]
enum UseCaseError {
    MissingNameOrPhone,
    StorageError,
}

impl From<UseCaseError> for TiffinError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::MissingNameOrPhone => {
                Self::BadClientData("Please provide your name and phone number".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCallRequestUseCase {
    type Response = CallRequest;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCallRequest";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        let name = self.name.trim();
        let phone = self.phone.trim();
        if name.is_empty() || phone.is_empty() {
            return Err(UseCaseError::MissingNameOrPhone);
        }

        let call_request = NewCallRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            created: ctx.sys.get_timestamp_millis(),
        };
        ctx.repos
            .call_requests
            .insert(&call_request)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
