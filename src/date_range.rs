//! Date window filtering for event search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{WhatsOnError, WhatsOnResult};
use crate::schedule::Schedule;

const ISO_DATE: &str = "%Y-%m-%d";

/// A closed date window, as selected in the search UI's range picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// Parse a pair of YYYY-MM-DD strings into a range.
    pub fn parse(start: &str, end: &str) -> WhatsOnResult<Self> {
        Ok(DateRange {
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }

    /// Whether an event's date span intersects this window.
    ///
    /// A missing event end is a single-day span. Both intervals are
    /// closed, so touching boundaries count as overlap. The weekday
    /// filter is deliberately not consulted: the question is whether the
    /// event's span crosses the window, not whether one of its active
    /// days does.
    pub fn overlaps(&self, event_start: NaiveDate, event_end: Option<NaiveDate>) -> bool {
        let event_end = event_end.unwrap_or(event_start);
        event_start <= self.end && event_end >= self.start
    }

    /// Overlap test against a schedule's date span.
    pub fn overlaps_schedule(&self, schedule: &Schedule) -> bool {
        self.overlaps(schedule.start_date, schedule.end_date)
    }
}

fn parse_date(s: &str) -> WhatsOnResult<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE).map_err(|_| WhatsOnError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(DateRange::parse("2025-06-01", "2025-06-10").is_ok());
        assert!(DateRange::parse("june 1st", "2025-06-10").is_err());
    }

    #[test]
    fn test_touching_boundary_counts_as_overlap() {
        let filter = DateRange::new(date(2025, 6, 5), date(2025, 6, 10));
        assert!(filter.overlaps(date(2025, 6, 1), Some(date(2025, 6, 5))));
    }

    #[test]
    fn test_disjoint_spans_do_not_overlap() {
        let filter = DateRange::new(date(2025, 6, 6), date(2025, 6, 10));
        assert!(!filter.overlaps(date(2025, 6, 1), Some(date(2025, 6, 5))));
    }

    #[test]
    fn test_missing_end_is_a_single_day_span() {
        let filter = DateRange::new(date(2025, 6, 1), date(2025, 6, 10));
        assert!(filter.overlaps(date(2025, 6, 10), None));
        assert!(!filter.overlaps(date(2025, 6, 11), None));
    }

    #[test]
    fn test_window_inside_event_span_overlaps() {
        let filter = DateRange::new(date(2025, 6, 10), date(2025, 6, 12));
        assert!(filter.overlaps(date(2025, 6, 1), Some(date(2025, 6, 30))));
    }
}
