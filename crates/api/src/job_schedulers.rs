use crate::{
    reminder::send_expiry_reminders::{SendExpiryRemindersUseCase, SweepReport, UseCaseError},
    shared::usecase::execute,
};
use actix_web::rt::time::sleep;
use chrono::TimeZone;
use chrono_tz::Tz;
use std::{sync::Arc, time::Duration};
use tiffin_domain::{
    date::{date_at, start_of_day_millis},
    NaiveDate,
};
use tiffin_infra::TiffinContext;
use tokio::sync::Mutex;
use tracing::info;

const STARTUP_DELAY: Duration = Duration::from_secs(3);

const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Time until the next `hour`:00 in `tz`, strictly after `now_ts`.
/// A full day when `now_ts` has no calendar date.
pub fn get_start_delay(now_ts: i64, hour: u32, tz: &Tz) -> Duration {
    let today = match date_at(now_ts, tz) {
        Some(today) => today,
        None => return DAY,
    };
    let mut next_run = run_at(today, hour, tz);
    if next_run <= now_ts {
        next_run = match today.succ_opt() {
            Some(tomorrow) => run_at(tomorrow, hour, tz),
            None => return DAY,
        };
    }
    Duration::from_millis((next_run - now_ts).max(0) as u64)
}

fn run_at(date: NaiveDate, hour: u32, tz: &Tz) -> i64 {
    match date
        .and_hms_opt(hour, 0, 0)
        .and_then(|local| tz.from_local_datetime(&local).earliest())
    {
        Some(datetime) => datetime.timestamp_millis(),
        // The hour does not exist on this day in `tz`
        None => start_of_day_millis(date, tz) + i64::from(hour) * 60 * 60 * 1000,
    }
}

/// Runs the expiry sweep once shortly after startup and then every day at the
/// configured hour. Sweeps never overlap, a trigger that arrives while a sweep
/// is running waits for it to finish.
#[derive(Clone)]
pub struct ExpirySweepScheduler {
    ctx: TiffinContext,
    lock: Arc<Mutex<()>>,
}

impl ExpirySweepScheduler {
    pub fn new(ctx: TiffinContext) -> Self {
        Self {
            ctx,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn run_now(&self) -> Result<SweepReport, UseCaseError> {
        let _guard = self.lock.lock().await;
        execute(SendExpiryRemindersUseCase, &self.ctx).await
    }

    pub fn start(&self) {
        let startup = self.clone();
        actix_web::rt::spawn(async move {
            sleep(STARTUP_DELAY).await;
            let _ = startup.run_now().await;
        });

        let daily = self.clone();
        actix_web::rt::spawn(async move {
            loop {
                let config = &daily.ctx.config;
                let delay = get_start_delay(
                    daily.ctx.sys.get_timestamp_millis(),
                    config.expiry_check_hour,
                    &config.timezone,
                );
                info!("Next expiry check in {} minutes", delay.as_secs() / 60);
                sleep(delay).await;

                let scheduler = daily.clone();
                actix_web::rt::spawn(async move {
                    let _ = scheduler.run_now().await;
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::{insert_booking, setup_context};

    // 2025-01-05T00:00:00Z
    const MIDNIGHT: i64 = 1736035200000;
    const HOUR: i64 = 60 * 60 * 1000;

    fn hours(h: i64) -> Duration {
        Duration::from_millis((h * HOUR) as u64)
    }

    #[test]
    fn start_delay_works() {
        let utc = Tz::UTC;
        assert_eq!(get_start_delay(MIDNIGHT, 8, &utc), hours(8));
        assert_eq!(get_start_delay(MIDNIGHT + 8 * HOUR, 8, &utc), hours(24));
        assert_eq!(get_start_delay(MIDNIGHT + 9 * HOUR, 8, &utc), hours(23));
        assert_eq!(get_start_delay(MIDNIGHT + 8 * HOUR - 1, 8, &utc), Duration::from_millis(1));
        assert_eq!(get_start_delay(MIDNIGHT, 0, &utc), hours(24));
        assert_eq!(get_start_delay(i64::MAX, 8, &utc), hours(24));
    }

    #[test]
    fn start_delay_uses_local_hour() {
        // 05:30 in Kolkata, 08:00 local is 02:30 UTC
        let kolkata = chrono_tz::Asia::Kolkata;
        assert_eq!(
            get_start_delay(MIDNIGHT, 8, &kolkata),
            Duration::from_millis((2 * HOUR + HOUR / 2) as u64)
        );
    }

    #[actix_web::main]
    #[test]
    async fn concurrent_runs_are_serialized() {
        // 2025-01-01T08:00:00Z
        let (mut ctx, mailer) = setup_context(1735718400000);
        ctx.config.timezone = Tz::UTC;
        insert_booking(&ctx, "1 Week", "2025-01-01", Some("a@example.com")).await;

        let scheduler = ExpirySweepScheduler::new(ctx);
        let (first, second) = futures::join!(scheduler.run_now(), scheduler.run_now());
        let (first, second) = (first.unwrap(), second.unwrap());
        assert_eq!(first.sent + second.sent, 1);
        assert_eq!(mailer.messages().len(), 1);
    }
}
