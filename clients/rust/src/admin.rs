use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use std::sync::Arc;
use tiffin_api_structs::*;
use tiffin_domain::ID;

/// Operational endpoints for the people running the kitchen
#[derive(Clone)]
pub struct AdminClient {
    base: Arc<BaseClient>,
}

impl AdminClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_email_logs(&self) -> APIResponse<get_email_logs::APIResponse> {
        self.base.get("email-logs".into(), StatusCode::OK).await
    }

    pub async fn get_stats(&self) -> APIResponse<get_stats::APIResponse> {
        self.base.get("stats".into(), StatusCode::OK).await
    }

    /// Sends a renewal reminder for the booking right away. Without `days`
    /// the reminder says three days are left.
    pub async fn send_reminder_now(
        &self,
        booking_id: ID,
        days: Option<i64>,
    ) -> APIResponse<send_reminder_now::APIResponse> {
        let path = match days {
            Some(days) => format!("bookings/{}/reminder?days={}", booking_id, days),
            None => format!("bookings/{}/reminder", booking_id),
        };
        self.base.post_empty(path, StatusCode::OK).await
    }
}
