//! Expansion of a schedule into concrete calendar occurrences.

use chrono::{Datelike, NaiveDate};
use log::warn;

use crate::locale::{Locale, format_day_label};
use crate::schedule::{Schedule, ScheduleMode};

/// Hard cap on days walked while expanding or resolving a schedule.
///
/// Ranges are caller-supplied; a reversed or decades-long range
/// truncates here instead of producing unbounded output or looping for
/// unbounded time. Reaching the cap is not an error.
pub const MAX_EXPANSION_DAYS: usize = 366;

/// One concrete day an event happens on.
///
/// Computed fresh on every call; nothing is cached or mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// The underlying calendar date, for grouping and sorting.
    pub date: NaiveDate,
    /// Day label like "26 Dec (Fri)", in the requested locale.
    pub label: String,
    /// Time-of-day label shared by every occurrence of the schedule.
    pub time: String,
}

/// Expand a schedule into its occurrences, earliest first.
///
/// An absent schedule yields nothing. Single mode, or a range without a
/// distinct end date, yields exactly one occurrence on the start date
/// regardless of the weekday filter. Otherwise every
/// day from start to end inclusive is walked, keeping the days the
/// weekday filter admits, capped at [`MAX_EXPANSION_DAYS`] days. A range
/// whose end precedes its start yields nothing; the walk never runs
/// backward.
pub fn schedule_occurrences(schedule: Option<&Schedule>, locale: Locale) -> Vec<Occurrence> {
    let Some(schedule) = schedule else {
        return Vec::new();
    };
    let time = schedule.time_label();

    let end = match schedule.end_date {
        Some(end) if schedule.mode == ScheduleMode::Range && end != schedule.start_date => end,
        _ => {
            return vec![Occurrence {
                date: schedule.start_date,
                label: format_day_label(schedule.start_date, locale),
                time,
            }];
        }
    };

    let filter = schedule.weekday_filter();
    let mut out = Vec::new();
    let mut cursor = schedule.start_date;
    let mut steps = 0;
    while cursor <= end && steps < MAX_EXPANSION_DAYS {
        if filter.matches(cursor.weekday()) {
            out.push(Occurrence {
                date: cursor,
                label: format_day_label(cursor, locale),
                time: time.clone(),
            });
        }
        steps += 1;
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    if steps == MAX_EXPANSION_DAYS && cursor <= end {
        warn!("occurrence expansion truncated at {MAX_EXPANSION_DAYS} days, range ran to {end}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn range_schedule(start: NaiveDate, end: Option<NaiveDate>) -> Schedule {
        Schedule {
            mode: ScheduleMode::Range,
            start_date: start,
            end_date: end,
            start_time: None,
            end_time: None,
            weekdays: None,
        }
    }

    #[test]
    fn test_absent_schedule_yields_nothing() {
        assert!(schedule_occurrences(None, Locale::En).is_empty());
    }

    #[test]
    fn test_single_mode_yields_exactly_start_date() {
        let schedule = Schedule {
            mode: ScheduleMode::Single,
            ..range_schedule(date(2025, 6, 1), None)
        };
        let out = schedule_occurrences(Some(&schedule), Locale::En);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, date(2025, 6, 1));
        assert_eq!(out[0].label, "1 Jun (Sun)");
        assert_eq!(out[0].time, "");
    }

    #[test]
    fn test_range_without_end_degenerates_to_single_day() {
        let schedule = range_schedule(date(2025, 6, 1), None);
        let out = schedule_occurrences(Some(&schedule), Locale::En);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, date(2025, 6, 1));
    }

    #[test]
    fn test_reversed_range_yields_nothing() {
        let schedule = range_schedule(date(2025, 6, 10), Some(date(2025, 6, 1)));
        assert!(schedule_occurrences(Some(&schedule), Locale::En).is_empty());
    }

    #[test]
    fn test_unfiltered_weekend_range() {
        // 2025-12-26 is a Friday.
        let schedule = range_schedule(date(2025, 12, 26), Some(date(2025, 12, 27)));
        let out = schedule_occurrences(Some(&schedule), Locale::En);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date, date(2025, 12, 26));
        assert_eq!(out[0].label, "26 Dec (Fri)");
        assert_eq!(out[1].date, date(2025, 12, 27));
        assert_eq!(out[1].label, "27 Dec (Sat)");
    }

    #[test]
    fn test_weekday_filter_keeps_matching_days_only() {
        let mut schedule = range_schedule(date(2025, 12, 26), Some(date(2025, 12, 27)));
        schedule.weekdays = Some(vec![Weekday::Fri]);

        let out = schedule_occurrences(Some(&schedule), Locale::En);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].date, date(2025, 12, 26));
    }

    #[test]
    fn test_filter_matching_no_day_in_range_yields_nothing() {
        // Friday and Saturday only; the filter wants Mondays.
        let mut schedule = range_schedule(date(2025, 12, 26), Some(date(2025, 12, 27)));
        schedule.weekdays = Some(vec![Weekday::Mon]);
        assert!(schedule_occurrences(Some(&schedule), Locale::En).is_empty());
    }

    #[test]
    fn test_multi_year_range_truncates_at_cap() {
        let schedule = range_schedule(date(2025, 1, 1), Some(date(2035, 1, 1)));
        let out = schedule_occurrences(Some(&schedule), Locale::En);
        assert_eq!(out.len(), MAX_EXPANSION_DAYS);
        assert_eq!(out[0].date, date(2025, 1, 1));
        // 366 days counted from Jan 1 2025 end on Jan 1 2026.
        assert_eq!(out.last().unwrap().date, date(2026, 1, 1));
    }

    #[test]
    fn test_occurrences_share_one_time_label() {
        let mut schedule = range_schedule(date(2025, 12, 26), Some(date(2025, 12, 27)));
        schedule.start_time = chrono::NaiveTime::from_hms_opt(18, 0, 0);
        schedule.end_time = chrono::NaiveTime::from_hms_opt(20, 0, 0);

        let out = schedule_occurrences(Some(&schedule), Locale::En);
        assert!(out.iter().all(|o| o.time == "18:00 – 20:00"));
    }

    #[test]
    fn test_expansion_is_pure() {
        let schedule = range_schedule(date(2025, 12, 26), Some(date(2025, 12, 27)));
        let first = schedule_occurrences(Some(&schedule), Locale::Es);
        let second = schedule_occurrences(Some(&schedule), Locale::Es);
        assert_eq!(first, second);
    }
}
