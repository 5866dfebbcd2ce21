use crate::dtos::CallRequestDTO;
use serde::{Deserialize, Serialize};
use tiffin_domain::{CallRequest, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequestResponse {
    pub call_request: CallRequestDTO,
}

impl CallRequestResponse {
    pub fn new(call_request: CallRequest) -> Self {
        Self {
            call_request: CallRequestDTO::new(call_request),
        }
    }
}

pub mod create_call_request {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub name: String,
        #[serde(default)]
        pub phone: String,
    }

    pub type APIResponse = CallRequestResponse;
}

pub mod get_call_requests {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub call_requests: Vec<CallRequestDTO>,
    }

    impl APIResponse {
        pub fn new(call_requests: Vec<CallRequest>) -> Self {
            Self {
                call_requests: call_requests
                    .into_iter()
                    .map(CallRequestDTO::new)
                    .collect(),
            }
        }
    }
}

pub mod delete_call_request {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub call_request_id: ID,
    }

    pub type APIResponse = CallRequestResponse;
}
