//! Daily schedule.

use std::time::Duration;

use jiff::{SignedDuration, Timestamp, civil::Date, tz::TimeZone};

use crate::sync::{SyncTime, errors::ScheduleError};

/// Returns the next occurrence of `time` (UTC) at or after `now`.
///
/// When today's occurrence is already in the past the same time tomorrow is
/// returned.
///
/// # Errors
///
/// Returns an error if the result falls outside the supported date range.
pub fn next_run(now: Timestamp, time: SyncTime) -> Result<Timestamp, ScheduleError> {
    let today = now.to_zoned(TimeZone::UTC).date();
    let candidate = at_utc(today, time)?;

    if candidate < now {
        return at_utc(today.tomorrow()?, time);
    }

    Ok(candidate)
}

/// Next run after a previous target.
///
/// Never returns `last` again, even when the wall clock reads at or before it
/// once the wait is over.
pub(crate) fn run_after(
    now: Timestamp,
    last: Option<Timestamp>,
    time: SyncTime,
) -> Result<Timestamp, ScheduleError> {
    let earliest = match last {
        Some(last) => now.max(last.checked_add(SignedDuration::from_secs(1))?),
        None => now,
    };

    next_run(earliest, time)
}

/// How long to sleep from `now` until `next`. Zero when `next` has passed.
pub(crate) fn wait_until(now: Timestamp, next: Timestamp) -> Duration {
    Duration::try_from(next.duration_since(now)).unwrap_or_default()
}

fn at_utc(date: Date, time: SyncTime) -> Result<Timestamp, ScheduleError> {
    Ok(date
        .at(time.hour(), time.minute(), 0, 0)
        .to_zoned(TimeZone::UTC)?
        .timestamp())
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn two_am() -> Result<SyncTime, &'static str> {
        SyncTime::new(2, 0).ok_or("valid time")
    }

    #[test]
    fn later_today() -> TestResult {
        let now: Timestamp = "2024-03-10T01:15:00Z".parse()?;

        let next = next_run(now, two_am()?)?;

        assert_eq!(next, "2024-03-10T02:00:00Z".parse::<Timestamp>()?);

        Ok(())
    }

    #[test]
    fn already_passed_rolls_over_to_tomorrow() -> TestResult {
        let now: Timestamp = "2024-03-10T02:00:01Z".parse()?;

        let next = next_run(now, two_am()?)?;

        assert_eq!(next, "2024-03-11T02:00:00Z".parse::<Timestamp>()?);

        Ok(())
    }

    #[test]
    fn exact_instant_is_not_skipped() -> TestResult {
        let now: Timestamp = "2024-03-10T02:00:00Z".parse()?;

        assert_eq!(next_run(now, two_am()?)?, now);

        Ok(())
    }

    #[test]
    fn rolls_over_month_and_year_ends() -> TestResult {
        let now: Timestamp = "2024-12-31T23:30:00Z".parse()?;
        let time = SyncTime::new(23, 0).ok_or("valid time")?;

        assert_eq!(
            next_run(now, time)?,
            "2025-01-01T23:00:00Z".parse::<Timestamp>()?
        );

        Ok(())
    }

    #[test]
    fn first_run_may_be_now() -> TestResult {
        let now: Timestamp = "2024-03-10T02:00:00Z".parse()?;

        assert_eq!(run_after(now, None, two_am()?)?, now);

        Ok(())
    }

    #[test]
    fn previous_target_is_never_repeated() -> TestResult {
        let last: Timestamp = "2024-03-10T02:00:00Z".parse()?;
        let tomorrow: Timestamp = "2024-03-11T02:00:00Z".parse()?;

        let stepped_back: Timestamp = "2024-03-10T01:59:58Z".parse()?;

        let on_time = run_after(last, Some(last), two_am()?)?;
        let clock_stepped_back = run_after(stepped_back, Some(last), two_am()?)?;

        assert_eq!(on_time, tomorrow);
        assert_eq!(clock_stepped_back, tomorrow);

        Ok(())
    }

    #[test]
    fn wait_is_never_negative() -> TestResult {
        let earlier: Timestamp = "2024-03-10T01:00:00Z".parse()?;
        let later: Timestamp = "2024-03-10T02:30:00Z".parse()?;

        assert_eq!(wait_until(earlier, later), Duration::from_secs(90 * 60));
        assert_eq!(wait_until(later, earlier), Duration::ZERO);

        Ok(())
    }
}
