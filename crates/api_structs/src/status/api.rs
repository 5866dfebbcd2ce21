use serde::{Deserialize, Serialize};

pub mod get_service_health {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
    }

    impl APIResponse {
        pub fn up() -> Self {
            Self {
                message: "Tiffin service is up and cooking!".into(),
            }
        }
    }
}
