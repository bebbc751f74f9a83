//! Date window shared by all generators.

use chrono::{Duration, NaiveDate};

/// Error type for date range construction.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CalendarError {
    /// The range must span at least one day
    #[error("History must span at least one day")]
    EmptyHistory,

    /// Subtracting the history from the reference date left the calendar
    #[error("Reference date {reference} minus {days} days is out of range")]
    OutOfRange { reference: NaiveDate, days: u32 },
}

/// Inclusive daily date range `start..=end`.
///
/// Every generated date lies in this range; `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build the range that ends at `reference` and reaches `history_days` back.
    pub fn ending_at(reference: NaiveDate, history_days: u32) -> Result<Self, CalendarError> {
        if history_days == 0 {
            return Err(CalendarError::EmptyHistory);
        }
        let start = reference
            .checked_sub_signed(Duration::days(i64::from(history_days)))
            .ok_or(CalendarError::OutOfRange {
                reference,
                days: history_days,
            })?;
        Ok(Self {
            start,
            end: reference,
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of whole days between `start` and `end`.
    pub fn span_days(&self) -> u32 {
        (self.end - self.start).num_days() as u32
    }

    /// Number of dates in the range (both ends included); never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.span_days() as usize + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// All dates in ascending order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take(self.len()).collect()
    }

    /// The last `count` dates in ascending order, or every date when the
    /// range is shorter than `count`.
    pub fn trailing(&self, count: usize) -> Vec<NaiveDate> {
        let dates = self.dates();
        let skip = dates.len().saturating_sub(count);
        dates.into_iter().skip(skip).collect()
    }

    /// Date `offset` days after `start`.
    pub fn day(&self, offset: u32) -> NaiveDate {
        self.start + Duration::days(i64::from(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_default_window_has_181_dates() {
        let range = DateRange::ending_at(reference(), 180).unwrap();

        assert_eq!(range.span_days(), 180);
        assert_eq!(range.len(), 181);
        assert_eq!(range.start(), NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(range.end(), reference());

        let dates = range.dates();
        assert_eq!(dates.len(), 181);
        assert_eq!(dates.first(), Some(&range.start()));
        assert_eq!(dates.last(), Some(&range.end()));
        assert!(dates.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
    }

    #[test]
    fn test_trailing_window() {
        let range = DateRange::ending_at(reference(), 180).unwrap();
        let last = range.trailing(30);

        assert_eq!(last.len(), 30);
        assert_eq!(last.last(), Some(&reference()));
        assert_eq!(last[0], NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_trailing_longer_than_range() {
        let range = DateRange::ending_at(reference(), 5).unwrap();
        assert_eq!(range.trailing(30), range.dates());
    }

    #[test]
    fn test_empty_history_rejected() {
        assert_eq!(
            DateRange::ending_at(reference(), 0),
            Err(CalendarError::EmptyHistory)
        );
    }

    #[test]
    fn test_contains_and_day() {
        let range = DateRange::ending_at(reference(), 10).unwrap();
        assert!(range.contains(range.day(0)));
        assert!(range.contains(range.day(10)));
        assert!(!range.contains(range.day(11)));
        assert_eq!(range.day(10), reference());
    }
}
