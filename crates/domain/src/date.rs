use chrono::prelude::*;
use chrono::Duration;
use chrono_tz::Tz;

/// The calendar date in `tz` at the given timestamp in millis, `None` when
/// the timestamp is out of range
pub fn date_at(timestamp_millis: i64, tz: &Tz) -> Option<NaiveDate> {
    Utc.timestamp_millis_opt(timestamp_millis)
        .single()
        .map(|dt| dt.with_timezone(tz).date_naive())
}

/// Timestamp in millis of the first instant of `date` in `tz`
pub fn start_of_day_millis(date: NaiveDate, tz: &Tz) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        // Midnight skipped by a DST transition, the day starts one hour later
        .or_else(|| {
            tz.from_local_datetime(&(midnight + Duration::hours(1)))
                .earliest()
        })
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight).timestamp_millis())
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_finds_the_local_date() {
        // 2025-01-04T20:00:00Z
        let ts = 1736020800000;
        assert_eq!(
            date_at(ts, &chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 1, 4)
        );
        // Already past midnight in India
        assert_eq!(
            date_at(ts, &chrono_tz::Asia::Kolkata),
            NaiveDate::from_ymd_opt(2025, 1, 5)
        );
    }

    #[test]
    fn it_has_no_date_for_out_of_range_timestamps() {
        assert_eq!(date_at(i64::MAX, &chrono_tz::UTC), None);
        assert_eq!(date_at(i64::MIN, &chrono_tz::Asia::Kolkata), None);
    }

    #[test]
    fn it_finds_start_of_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(start_of_day_millis(date, &chrono_tz::UTC), 1736035200000);
        assert_eq!(
            start_of_day_millis(date, &chrono_tz::Asia::Kolkata),
            1736035200000 - 1000 * 60 * (5 * 60 + 30)
        );
    }

    #[test]
    fn it_formats_iso_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(format_date(&date), "2025-03-07");
    }
}
