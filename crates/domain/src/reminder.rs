use crate::booking::Booking;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fixed number of days before the end of a subscription at which
/// the customer is reminded to renew. Every threshold owns one of the
/// one-shot flags on `Booking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderThreshold {
    SevenDays,
    ThreeDays,
    OneDay,
}

impl ReminderThreshold {
    pub const ALL: [ReminderThreshold; 3] = [
        ReminderThreshold::SevenDays,
        ReminderThreshold::ThreeDays,
        ReminderThreshold::OneDay,
    ];

    /// Only an exact match fires. A day that was missed is not caught up later.
    pub fn from_days_left(days_left: i64) -> Option<Self> {
        match days_left {
            7 => Some(Self::SevenDays),
            3 => Some(Self::ThreeDays),
            1 => Some(Self::OneDay),
            _ => None,
        }
    }

    pub fn days(&self) -> i64 {
        match self {
            Self::SevenDays => 7,
            Self::ThreeDays => 3,
            Self::OneDay => 1,
        }
    }

    /// Name of the storage column holding the flag for this threshold
    pub fn flag_column(&self) -> &'static str {
        match self {
            Self::SevenDays => "email_sent_7d",
            Self::ThreeDays => "email_sent_3d",
            Self::OneDay => "email_sent_1d",
        }
    }
}

/// Whole calendar days from `today` until `end`. Negative once the
/// subscription has ended.
pub fn days_left(today: NaiveDate, end: NaiveDate) -> i64 {
    (end - today).num_days()
}

/// Decides whether `booking` is due for a renewal reminder on `today`
/// and which threshold it would consume.
pub fn evaluate(today: NaiveDate, booking: &Booking) -> Option<ReminderThreshold> {
    let days_left = days_left(today, booking.checked_end_date()?);
    match ReminderThreshold::from_days_left(days_left) {
        Some(threshold) if !booking.reminders.is_sent(threshold) => Some(threshold),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Urgent,
}

pub fn urgency(days_left: i64) -> Urgency {
    if days_left <= 3 {
        Urgency::Urgent
    } else {
        Urgency::Normal
    }
}
