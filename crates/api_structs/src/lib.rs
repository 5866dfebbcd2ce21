mod booking;
mod call_request;
mod email_log;
mod reminder;
mod stats;
mod status;

pub mod dtos {
    pub use crate::booking::dtos::*;
    pub use crate::call_request::dtos::*;
    pub use crate::email_log::dtos::*;
}

pub use crate::booking::api::*;
pub use crate::call_request::api::*;
pub use crate::email_log::api::*;
pub use crate::reminder::api::*;
pub use crate::stats::api::*;
pub use crate::status::api::*;
