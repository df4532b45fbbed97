//! Resolution of the soonest upcoming occurrence, for summary views.

use chrono::{Datelike, Local, NaiveDate};

use crate::occurrence::MAX_EXPANSION_DAYS;
use crate::schedule::Schedule;

/// The soonest day a schedule is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextOccurrence {
    pub date: NaiveDate,
    /// Whether that day is the reference "today".
    pub is_today: bool,
}

/// Find the next occurrence at or after today (local civil date).
pub fn next_occurrence(schedule: Option<&Schedule>) -> Option<NextOccurrence> {
    next_occurrence_on(schedule, Local::now().date_naive())
}

/// Find the next occurrence at or after `today`.
///
/// The cursor starts at the later of `today` and the schedule's start
/// date, then walks forward under the schedule's weekday filter until it
/// passes the effective end date, capped at [`MAX_EXPANSION_DAYS`] days.
/// First match wins. When nothing matches (the schedule lies entirely
/// in the past, or the filter admits no day in range), the start date is
/// returned with `is_today: false`, so a schedule with a start date
/// always resolves.
pub fn next_occurrence_on(
    schedule: Option<&Schedule>,
    today: NaiveDate,
) -> Option<NextOccurrence> {
    let schedule = schedule?;
    let end = schedule.effective_end_date();
    let filter = schedule.weekday_filter();

    let mut cursor = schedule.start_date.max(today);
    let mut steps = 0;
    while cursor <= end && steps < MAX_EXPANSION_DAYS {
        if filter.matches(cursor.weekday()) {
            return Some(NextOccurrence {
                date: cursor,
                is_today: cursor == today,
            });
        }
        steps += 1;
        match cursor.succ_opt() {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Some(NextOccurrence {
        date: schedule.start_date,
        is_today: false,
    })
}
