//! Service-period arithmetic.
//!
//! This module provides the calendar-interval function used by the
//! tenure-based settlement rules. An interval is expressed as whole years,
//! a months remainder, and a days remainder, where a month is counted only
//! once the same day-of-month is reached in the later month (clamped to the
//! month's length, so one month after January 31 is the last day of
//! February).

use chrono::{Datelike, Months, NaiveDate};

/// A calendar interval between two dates.
///
/// Produced by [`ServicePeriod::between`]. The `months` field is the
/// remainder after whole years (always below 12); `days` is the remainder
/// after whole months.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::ServicePeriod;
/// use chrono::NaiveDate;
///
/// let admission = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
/// let termination = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
///
/// let period = ServicePeriod::between(admission, termination);
/// assert_eq!(period.years, 3);
/// assert_eq!(period.months, 0);
/// assert_eq!(period.days, 0);
/// assert_eq!(period.total_months(), 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServicePeriod {
    /// Whole years elapsed.
    pub years: u32,
    /// Whole months elapsed beyond the whole years (0..12).
    pub months: u32,
    /// Days elapsed beyond the whole months.
    pub days: u32,
}

impl ServicePeriod {
    /// Computes the calendar interval from `start` to `end`.
    ///
    /// The month count is the largest `n` such that `start` plus `n`
    /// calendar months (day-of-month clamped) does not pass `end`; a year
    /// is twelve such months. If `end` precedes `start` the zero period is
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use settlement_engine::calculation::ServicePeriod;
    /// use chrono::NaiveDate;
    ///
    /// // One day short of nine months.
    /// let period = ServicePeriod::between(
    ///     NaiveDate::from_ymd_opt(2022, 6, 10).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 3, 9).unwrap(),
    /// );
    /// assert_eq!(period.months, 8);
    /// ```
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            return Self::default();
        }

        // start <= end, so the raw month difference is never negative.
        let mut months =
            (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
        let mut anchor = add_months(start, months as u32);
        if anchor > end {
            months -= 1;
            anchor = add_months(start, months as u32);
        }

        let days = (end - anchor).num_days() as u32;

        Self {
            years: (months / 12) as u32,
            months: (months % 12) as u32,
            days,
        }
    }

    /// Returns the total number of whole months in the period.
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

/// Adds `months` calendar months to a date, clamping the day-of-month to
/// the target month's length.
fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
