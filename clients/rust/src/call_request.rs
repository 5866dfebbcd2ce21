use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use tiffin_api_structs::*;
use tiffin_domain::ID;

#[derive(Clone)]
pub struct CallRequestClient {
    base: Arc<BaseClient>,
}

impl CallRequestClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        name: String,
        phone: String,
    ) -> APIResponse<create_call_request::APIResponse> {
        let body = create_call_request::RequestBody { name, phone };
        self.base
            .post(body, "call-requests".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_call_requests::APIResponse> {
        self.base.get("call-requests".into(), StatusCode::OK).await
    }

    pub async fn delete(
        &self,
        call_request_id: ID,
    ) -> APIResponse<delete_call_request::APIResponse> {
        self.base
            .delete(format!("call-requests/{}", call_request_id), StatusCode::OK)
            .await
    }
}
