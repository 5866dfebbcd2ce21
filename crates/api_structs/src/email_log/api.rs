use crate::dtos::EmailLogDTO;
use serde::{Deserialize, Serialize};

pub mod get_email_logs {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub email_logs: Vec<EmailLogDTO>,
    }
}
