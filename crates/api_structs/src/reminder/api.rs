use serde::{Deserialize, Serialize};
use tiffin_domain::{DeliveryResult, ID};

pub mod send_reminder_now {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        /// Days left to render the reminder with. Kept as text, values that
        /// are not a non zero number fall back to the default.
        pub days: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub message_id: Option<String>,
    }

    impl APIResponse {
        pub fn new(result: DeliveryResult) -> Self {
            Self {
                success: result.success,
                message_id: result.message_id,
            }
        }
    }
}
