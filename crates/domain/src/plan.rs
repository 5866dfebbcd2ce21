use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Subscription length used when a booking carries a plan identifier
/// that is not one of the known `Plan`s
pub const DEFAULT_PLAN_DAYS: i64 = 30;

/// A named subscription tier. The identifiers are the exact strings that
/// customers pick when booking and that are stored on the `Booking`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Plan {
    #[serde(rename = "1 Week")]
    OneWeek,
    #[serde(rename = "2 Weeks")]
    TwoWeeks,
    #[serde(rename = "1 Month")]
    OneMonth,
    #[serde(rename = "3 Months")]
    ThreeMonths,
    #[serde(rename = "6 Months")]
    SixMonths,
}

impl Plan {
    pub const ALL: [Plan; 5] = [
        Plan::OneWeek,
        Plan::TwoWeeks,
        Plan::OneMonth,
        Plan::ThreeMonths,
        Plan::SixMonths,
    ];

    pub fn days(&self) -> i64 {
        match self {
            Self::OneWeek => 7,
            Self::TwoWeeks => 14,
            Self::OneMonth => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneWeek => "1 Week",
            Self::TwoWeeks => "2 Weeks",
            Self::OneMonth => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
        }
    }
}

impl Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
#[error("Unknown plan: {0}")]
pub struct UnknownPlanError(String);

impl FromStr for Plan {
    type Err = UnknownPlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|plan| plan.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownPlanError(s.to_string()))
    }
}

/// Number of days a subscription with the given plan identifier lasts.
/// Unknown identifiers get `DEFAULT_PLAN_DAYS`.
pub fn days_for_plan(plan_id: &str) -> i64 {
    plan_id
        .parse::<Plan>()
        .map(|plan| plan.days())
        .unwrap_or(DEFAULT_PLAN_DAYS)
}

/// The calendar date on which a subscription started at `start_date` ends,
/// or `None` when that date is not representable
pub fn checked_end_date(start_date: NaiveDate, plan_id: &str) -> Option<NaiveDate> {
    start_date.checked_add_signed(Duration::days(days_for_plan(plan_id)))
}

/// The calendar date on which a subscription started at `start_date` ends.
/// Saturates at `NaiveDate::MAX`, such a subscription is never close to ending.
pub fn end_date(start_date: NaiveDate, plan_id: &str) -> NaiveDate {
    checked_end_date(start_date, plan_id).unwrap_or(NaiveDate::MAX)
}
