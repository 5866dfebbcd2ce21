use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailStatus {
    Sent,
    Failed,
}

impl EmailStatus {
    pub fn from_delivery(success: bool) -> Self {
        if success {
            Self::Sent
        } else {
            Self::Failed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

impl Display for EmailStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Invalid email status: {0}")]
pub struct InvalidEmailStatusError(String);

impl FromStr for EmailStatus {
    type Err = InvalidEmailStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sent" => Ok(Self::Sent),
            "failed" => Ok(Self::Failed),
            _ => Err(InvalidEmailStatusError(s.to_string())),
        }
    }
}

/// Audit record of one attempt to deliver a renewal reminder
#[derive(Debug, Clone, PartialEq)]
pub struct EmailLog {
    pub id: ID,
    /// `None` once the `Booking` has been deleted
    pub booking_id: Option<ID>,
    pub days_left: i64,
    pub status: EmailStatus,
    pub sent_at: i64,
}

impl Entity for EmailLog {
    fn id(&self) -> ID {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmailLog {
    pub booking_id: ID,
    pub days_left: i64,
    pub status: EmailStatus,
    pub sent_at: i64,
}

impl NewEmailLog {
    pub fn into_email_log(self, id: ID) -> EmailLog {
        EmailLog {
            id,
            booking_id: Some(self.booking_id),
            days_left: self.days_left,
            status: self.status,
            sent_at: self.sent_at,
        }
    }
}
