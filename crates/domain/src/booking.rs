use crate::{
    plan,
    reminder::ReminderThreshold,
    shared::entity::{Entity, ID},
};
use chrono::NaiveDate;

/// A customers tiffin subscription
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: ID,
    pub name: String,
    pub phone: String,
    /// Bookings without an email never receive any notifications
    pub email: Option<String>,
    pub address: String,
    pub meal_type: String,
    /// Plan identifier, see `Plan`. Unknown identifiers are kept as is.
    pub plan_type: String,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
    pub reminders: ReminderFlags,
    pub created: i64,
}

impl Booking {
    pub fn end_date(&self) -> NaiveDate {
        plan::end_date(self.start_date, &self.plan_type)
    }

    /// `None` when the subscription would end past the last representable date
    pub fn checked_end_date(&self) -> Option<NaiveDate> {
        plan::checked_end_date(self.start_date, &self.plan_type)
    }

    pub fn has_email(&self) -> bool {
        matches!(&self.email, Some(email) if !email.is_empty())
    }
}

impl Entity for Booking {
    fn id(&self) -> ID {
        self.id
    }
}

/// One-shot markers for the renewal reminders of a `Booking`.
/// A flag is never reset once it has been set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReminderFlags {
    pub sent_7d: bool,
    pub sent_3d: bool,
    pub sent_1d: bool,
}

impl ReminderFlags {
    pub fn is_sent(&self, threshold: ReminderThreshold) -> bool {
        match threshold {
            ReminderThreshold::SevenDays => self.sent_7d,
            ReminderThreshold::ThreeDays => self.sent_3d,
            ReminderThreshold::OneDay => self.sent_1d,
        }
    }

    pub fn mark_sent(&mut self, threshold: ReminderThreshold) {
        match threshold {
            ReminderThreshold::SevenDays => self.sent_7d = true,
            ReminderThreshold::ThreeDays => self.sent_3d = true,
            ReminderThreshold::OneDay => self.sent_1d = true,
        }
    }
}

/// A `Booking` that has not been stored yet and therefore has no `ID`
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: String,
    pub meal_type: String,
    pub plan_type: String,
    pub start_date: NaiveDate,
    pub notes: Option<String>,
    pub created: i64,
}

impl NewBooking {
    /// Blank emails and notes are stored as missing
    pub fn normalized(mut self) -> Self {
        self.email = non_blank(self.email);
        self.notes = non_blank(self.notes);
        self
    }

    pub fn into_booking(self, id: ID) -> Booking {
        Booking {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            address: self.address,
            meal_type: self.meal_type,
            plan_type: self.plan_type,
            start_date: self.start_date,
            notes: self.notes,
            reminders: Default::default(),
            created: self.created,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
