mod booking;
mod call_request;
pub mod date;
mod email_log;
pub mod notification;
pub mod plan;
pub mod reminder;
mod shared;

pub use booking::{Booking, NewBooking, ReminderFlags};
pub use call_request::{CallRequest, NewCallRequest};
pub use chrono::NaiveDate;
pub use chrono_tz::Tz;
pub use email_log::{EmailLog, EmailStatus, NewEmailLog};
pub use notification::{Branding, DeliveryResult, MailMessage};
pub use plan::Plan;
pub use reminder::{ReminderThreshold, Urgency};
pub use shared::entity::{Entity, InvalidIDError, ID};
