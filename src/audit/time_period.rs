use std::cmp;
use time::{Date, Duration, Month, OffsetDateTime, Time, util};

/// Convenience time window for audit log queries.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TimePeriod {
    /// Since the start of the current UTC calendar day.
    Today,
    /// The last seven days.
    Week,
    /// Since the same day of the previous calendar month, with the day clamped
    /// to the length of that month.
    Month,
}

impl TimePeriod {
    /// Returns the start bound of the period relative to the specified moment.
    pub fn start_from(&self, now: OffsetDateTime) -> OffsetDateTime {
        match self {
            TimePeriod::Today => now.replace_time(Time::MIDNIGHT),
            TimePeriod::Week => now - Duration::days(7),
            TimePeriod::Month => {
                let date = now.date();
                let (year, month) = match date.month() {
                    Month::January => (date.year() - 1, Month::December),
                    month => (date.year(), month.previous()),
                };
                let day = cmp::min(date.day(), util::days_in_month(month, year));
                match Date::from_calendar_date(year, month, day) {
                    Ok(date) => now.replace_date(date),
                    Err(_) => now - Duration::days(30),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::audit::TimePeriod;
    use time::macros::datetime;

    #[test]
    fn today_starts_at_midnight() {
        assert_eq!(
            TimePeriod::Today.start_from(datetime!(2024-03-15 13:45:30 UTC)),
            datetime!(2024-03-15 00:00:00 UTC)
        );
    }

    #[test]
    fn week_goes_back_seven_days() {
        assert_eq!(
            TimePeriod::Week.start_from(datetime!(2024-03-15 13:45:30 UTC)),
            datetime!(2024-03-08 13:45:30 UTC)
        );
    }

    #[test]
    fn month_goes_back_one_calendar_month() {
        assert_eq!(
            TimePeriod::Month.start_from(datetime!(2024-03-15 13:45:30 UTC)),
            datetime!(2024-02-15 13:45:30 UTC)
        );
    }

    #[test]
    fn month_wraps_over_january() {
        assert_eq!(
            TimePeriod::Month.start_from(datetime!(2024-01-15 13:45:30 UTC)),
            datetime!(2023-12-15 13:45:30 UTC)
        );
    }

    #[test]
    fn month_clamps_day_to_shorter_month() {
        assert_eq!(
            TimePeriod::Month.start_from(datetime!(2024-03-31 13:45:30 UTC)),
            datetime!(2024-02-29 13:45:30 UTC)
        );
        assert_eq!(
            TimePeriod::Month.start_from(datetime!(2023-03-31 13:45:30 UTC)),
            datetime!(2023-02-28 13:45:30 UTC)
        );
    }
}
