use serde::{Deserialize, Serialize};
use tiffin_domain::{CallRequest, ID};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallRequestDTO {
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub created: i64,
}

impl CallRequestDTO {
    pub fn new(call_request: CallRequest) -> Self {
        Self {
            id: call_request.id,
            name: call_request.name,
            phone: call_request.phone,
            created: call_request.created,
        }
    }
}
