use serde::{Deserialize, Serialize};

pub mod get_stats {
    use super::*;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub total_bookings: i64,
        pub total_call_requests: i64,
        pub today_bookings: i64,
        pub today_call_requests: i64,
        pub emails_sent: i64,
    }
}
