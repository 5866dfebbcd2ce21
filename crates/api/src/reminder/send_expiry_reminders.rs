use crate::shared::usecase::UseCase;
use tiffin_domain::{
    date::date_at,
    notification::renewal_reminder,
    reminder::evaluate,
    Booking, EmailStatus, NewEmailLog, ReminderThreshold,
};
use tiffin_infra::TiffinContext;
use tracing::{error, info, warn};

/// Outcome of a single sweep over every booking with an email
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepReport {
    /// Bookings that were checked for a due reminder
    pub evaluated: usize,
    /// Reminders the mail transport accepted
    pub sent: usize,
    /// Reminders the mail transport rejected
    pub failed: usize,
    /// Flag writes and log appends that could not be stored
    pub errors: usize,
}

/// Sends the renewal reminders that are due today.
///
/// Every reminder threshold fires at most once per booking. The flag for a
/// due threshold is set even when the delivery fails, so a failed reminder
/// is recorded in the email log and never retried.
#[derive(Debug)]
pub struct SendExpiryRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseError {
    InvalidTimestamp(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendExpiryRemindersUseCase {
    type Response = SweepReport;

    type Error = UseCaseError;

    const NAME: &'static str = "SendExpiryReminders";

    async fn execute(&mut self, ctx: &TiffinContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let today = date_at(now, &ctx.config.timezone).ok_or_else(|| {
            error!("Clock returned an out of range timestamp: {}", now);
            UseCaseError::InvalidTimestamp(now)
        })?;

        let bookings = ctx.repos.bookings.find_emailable().await.map_err(|e| {
            error!("Unable to fetch bookings for the expiry check: {:?}", e);
            UseCaseError::StorageError
        })?;

        let mut report = SweepReport::default();
        for booking in &bookings {
            report.evaluated += 1;
            if let Some(threshold) = evaluate(today, booking) {
                remind(booking, threshold, now, ctx, &mut report).await;
            }
        }

        info!(
            "Expiry check for {} done. Evaluated: {}, sent: {}, failed: {}, storage errors: {}",
            today, report.evaluated, report.sent, report.failed, report.errors
        );
        Ok(report)
    }
}

async fn remind(
    booking: &Booking,
    threshold: ReminderThreshold,
    now: i64,
    ctx: &TiffinContext,
    report: &mut SweepReport,
) {
    let days_left = threshold.days();
    let message = match renewal_reminder(booking, days_left, &ctx.config.branding) {
        Some(message) => message,
        None => {
            warn!("Booking: {} is due a reminder but has no email", booking.id);
            return;
        }
    };

    let delivery = ctx.mailer.send(&message).await;
    if delivery.success {
        report.sent += 1;
        info!(
            "{} day reminder sent to booking: {} ({})",
            days_left, booking.id, message.to
        );
    } else {
        report.failed += 1;
        warn!(
            "{} day reminder to booking: {} failed: {:?}",
            days_left, booking.id, delivery.error
        );
    }

    // Consumed regardless of the delivery outcome
    if let Err(e) = ctx
        .repos
        .bookings
        .set_reminder_flag(&booking.id, threshold)
        .await
    {
        report.errors += 1;
        error!(
            "Unable to set {} for booking: {}. Error: {:?}",
            threshold.flag_column(),
            booking.id,
            e
        );
    }

    let log = NewEmailLog {
        booking_id: booking.id,
        days_left,
        status: EmailStatus::from_delivery(delivery.success),
        sent_at: now,
    };
    if let Err(e) = ctx.repos.email_logs.insert(&log).await {
        report.errors += 1;
        error!("Unable to store email log: {:?}. Error: {:?}", log, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{
        test_utils::{
            insert_booking, insert_booking_starting, setup_context, FailingBookingRepo,
            FailingEmailLogRepo,
        },
        usecase::execute,
    };
    use std::sync::Arc;
    use tiffin_domain::{NaiveDate, ReminderFlags, Tz};

    // 2025-01-01T08:00:00Z
    const JAN_1: i64 = 1735718400000;
    // 2025-01-05T08:00:00Z
    const JAN_5: i64 = 1736064000000;
    // 2025-01-07T20:00:00Z
    const JAN_7_EVENING: i64 = 1736280000000;

    fn utc_context(now: i64) -> (TiffinContext, std::sync::Arc<tiffin_infra::InMemoryMailSender>) {
        let (mut ctx, mailer) = setup_context(now);
        ctx.config.timezone = Tz::UTC;
        (ctx, mailer)
    }

    #[actix_web::main]
    #[test]
    async fn sends_seven_day_reminder_and_sets_flag() {
        let (ctx, mailer) = utc_context(JAN_1);
        let booking = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(
            report,
            SweepReport {
                evaluated: 1,
                sent: 1,
                failed: 0,
                errors: 0
            }
        );

        let messages = mailer.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].to, "a@example.com");
        assert!(messages[0].subject.ends_with("Ends in 7 Days"));

        let booking = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert_eq!(
            booking.reminders,
            ReminderFlags {
                sent_7d: true,
                sent_3d: false,
                sent_1d: false
            }
        );

        let logs = ctx.repos.email_logs.find_recent(50).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].booking_id, Some(booking.id));
        assert_eq!(logs[0].days_left, 7);
        assert_eq!(logs[0].status, EmailStatus::Sent);
        assert_eq!(logs[0].sent_at, JAN_1);
    }

    #[actix_web::main]
    #[test]
    async fn sends_urgent_three_day_reminder() {
        let (ctx, mailer) = utc_context(JAN_5);
        let booking = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();

        let messages = mailer.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].subject.starts_with("Urgent: "));
        let booking = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert!(booking.reminders.sent_3d);
        assert!(!booking.reminders.sent_7d);
    }

    #[actix_web::main]
    #[test]
    async fn second_sweep_on_same_day_sends_nothing() {
        let (ctx, mailer) = utc_context(JAN_1);
        insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;
        insert_booking(&ctx, "2 Weeks", "2024-12-25", Some("b@example.com")).await;

        let first = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(first.sent, 2);
        let second = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(second.evaluated, 2);
        assert_eq!(second.sent, 0);
        assert_eq!(second.failed, 0);

        assert_eq!(mailer.messages().len(), 2);
        assert_eq!(ctx.repos.email_logs.find_recent(50).await.unwrap().len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn failed_delivery_still_consumes_the_reminder() {
        let (ctx, mailer) = utc_context(JAN_1);
        mailer.set_failing(true);
        let booking = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.sent, 0);
        assert_eq!(report.failed, 1);

        let stored = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert!(stored.reminders.sent_7d);
        let logs = ctx.repos.email_logs.find_recent(50).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].status, EmailStatus::Failed);

        mailer.set_failing(false);
        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.sent + report.failed, 0);
        assert_eq!(mailer.messages().len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn skips_bookings_without_email_or_due_reminder() {
        let (ctx, mailer) = utc_context(JAN_1);
        insert_booking(&ctx, "1 Week", "2025-01-01", None).await;
        insert_booking(&ctx, "1 Week", "2025-01-01", Some("  ")).await;
        insert_booking(&ctx, "1 Month", "2025-01-01", Some("c@example.com")).await;
        insert_booking(&ctx, "1 Week", "2024-12-20", Some("d@example.com")).await;

        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.evaluated, 2);
        assert_eq!(report.sent, 0);
        assert!(mailer.messages().is_empty());
        assert!(ctx.repos.email_logs.find_recent(50).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn unknown_plan_expires_like_one_month() {
        // 2025-01-24 is seven days before 2025-01-31
        let (ctx, _) = utc_context(JAN_1 + 23 * 24 * 60 * 60 * 1000);
        let bogus = insert_booking(&ctx, "bogus", "2025-01-01", Some("a@example.com")).await;
        let month = insert_booking(&ctx, "1 Month", "2025-01-01", Some("b@example.com")).await;

        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.sent, 2);
        for id in [bogus.id, month.id].iter() {
            let booking = ctx.repos.bookings.find(id).await.unwrap();
            assert!(booking.reminders.sent_7d);
        }
    }

    #[actix_web::main]
    #[test]
    async fn flags_never_reset_over_the_whole_subscription() {
        let (mut ctx, mailer) = utc_context(0);
        let booking = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        let mut previous = ReminderFlags::default();
        for day in 0..14 {
            ctx.sys = std::sync::Arc::new(tiffin_infra::StaticTimeSys(
                JAN_1 + day * 24 * 60 * 60 * 1000,
            ));
            execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
            let flags = ctx.repos.bookings.find(&booking.id).await.unwrap().reminders;
            for threshold in ReminderThreshold::ALL.iter() {
                if previous.is_sent(*threshold) {
                    assert!(flags.is_sent(*threshold));
                }
            }
            previous = flags;
        }

        assert_eq!(
            previous,
            ReminderFlags {
                sent_7d: true,
                sent_3d: true,
                sent_1d: true
            }
        );
        let subjects = mailer
            .messages()
            .into_iter()
            .map(|m| m.subject)
            .collect::<Vec<_>>();
        assert_eq!(subjects.len(), 3);
        assert!(subjects[0].ends_with("7 Days"));
        assert!(subjects[2].ends_with("1 Day"));
    }

    #[actix_web::main]
    #[test]
    async fn today_follows_the_configured_timezone() {
        let (mut ctx, mailer) = utc_context(JAN_7_EVENING);
        insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        // Already 2025-01-08 in Kolkata, the subscription ends today
        ctx.config.timezone = chrono_tz::Asia::Kolkata;
        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.sent, 0);

        // Still 2025-01-07 in UTC, one day left
        ctx.config.timezone = Tz::UTC;
        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.sent, 1);
        assert!(mailer.messages()[0].subject.contains("1 Day"));
    }

    #[actix_web::main]
    #[test]
    async fn fetch_failure_aborts_the_sweep() {
        let (mut ctx, mailer) = utc_context(JAN_1);
        let booking = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;
        ctx.repos.bookings = Arc::new(FailingBookingRepo {
            inner: ctx.repos.bookings.clone(),
            fail_fetch: true,
            fail_flag_for: None,
        });

        let res = execute(SendExpiryRemindersUseCase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::StorageError)));
        assert!(mailer.messages().is_empty());
        let stored = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert_eq!(stored.reminders, ReminderFlags::default());
        assert!(ctx.repos.email_logs.find_recent(50).await.unwrap().is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn flag_write_failure_is_counted_and_sweep_continues() {
        let (mut ctx, mailer) = utc_context(JAN_1);
        let broken = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;
        let healthy = insert_booking(&ctx, "1 Week", "2025-01-01", Some("b@example.com")).await;
        ctx.repos.bookings = Arc::new(FailingBookingRepo {
            inner: ctx.repos.bookings.clone(),
            fail_fetch: false,
            fail_flag_for: Some(broken.id),
        });

        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(
            report,
            SweepReport {
                evaluated: 2,
                sent: 2,
                failed: 0,
                errors: 1
            }
        );
        assert_eq!(mailer.messages().len(), 2);

        let broken = ctx.repos.bookings.find(&broken.id).await.unwrap();
        assert!(!broken.reminders.sent_7d);
        let healthy = ctx.repos.bookings.find(&healthy.id).await.unwrap();
        assert!(healthy.reminders.sent_7d);

        // The log is appended even though the flag write failed
        let logs = ctx.repos.email_logs.find_recent(50).await.unwrap();
        assert_eq!(logs.len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn log_append_failure_is_counted_and_flag_still_set() {
        let (mut ctx, mailer) = utc_context(JAN_1);
        let broken = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;
        let healthy = insert_booking(&ctx, "1 Week", "2025-01-01", Some("b@example.com")).await;
        ctx.repos.email_logs = Arc::new(FailingEmailLogRepo {
            inner: ctx.repos.email_logs.clone(),
            fail_for: broken.id,
        });

        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.sent, 2);
        assert_eq!(report.errors, 1);
        assert_eq!(mailer.messages().len(), 2);

        for id in [broken.id, healthy.id].iter() {
            let booking = ctx.repos.bookings.find(id).await.unwrap();
            assert!(booking.reminders.sent_7d);
        }
        let logs = ctx.repos.email_logs.find_recent(50).await.unwrap();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].booking_id, Some(healthy.id));
    }

    #[actix_web::main]
    #[test]
    async fn booking_ending_past_the_calendar_does_not_stop_the_sweep() {
        let (ctx, mailer) = utc_context(JAN_1);
        let far_future = NaiveDate::MAX - chrono::Duration::days(10);
        let stuck = insert_booking_starting(&ctx, "1 Month", far_future, Some("z@example.com")).await;
        let due = insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        let report = execute(SendExpiryRemindersUseCase, &ctx).await.unwrap();
        assert_eq!(report.evaluated, 2);
        assert_eq!(report.sent, 1);
        assert_eq!(report.errors, 0);

        let messages = mailer.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].to, "a@example.com");
        assert!(ctx.repos.bookings.find(&due.id).await.unwrap().reminders.sent_7d);
        let stuck = ctx.repos.bookings.find(&stuck.id).await.unwrap();
        assert_eq!(stuck.reminders, ReminderFlags::default());
    }

    #[actix_web::main]
    #[test]
    async fn out_of_range_clock_aborts_the_sweep() {
        let (ctx, mailer) = utc_context(i64::MAX);
        insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        let res = execute(SendExpiryRemindersUseCase, &ctx).await;
        assert!(matches!(res, Err(UseCaseError::InvalidTimestamp(ts)) if ts == i64::MAX));
        assert!(mailer.messages().is_empty());
    }
}
