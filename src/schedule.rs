//! The schedule value object: when an event happens.
//!
//! Schedules come from CMS content or form state and are read-only to
//! this crate. Everything downstream (occurrence expansion, the next
//! occurrence, overlap filtering, calendar export) consumes this type.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::WhatsOnResult;

/// How an event's dates are described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleMode {
    /// One concrete day.
    Single,
    /// A bounded date range, optionally filtered to selected weekdays.
    Range,
}

/// Weekday identifiers as the CMS and the event form store them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }
}

/// A set of weekdays stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub fn new() -> Self {
        WeekdaySet(0)
    }

    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << day as u8;
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & (1 << day as u8) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

/// Which days of a range are active.
///
/// An absent or empty weekday list on a schedule means every day in the
/// range is included, so "all days" is a distinct state rather than an
/// empty-set convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayFilter {
    /// Every day in the range.
    Any,
    /// Only days whose weekday is in the set.
    Only(WeekdaySet),
}

impl WeekdayFilter {
    pub fn matches(self, day: chrono::Weekday) -> bool {
        match self {
            WeekdayFilter::Any => true,
            WeekdayFilter::Only(set) => set.contains(day.into()),
        }
    }
}

/// When an event happens: a single day, or a weekday-filtered date range.
///
/// `end_date` only has meaning in range mode; a range without one
/// degenerates to the start day. An absent `start_time` marks the event
/// as all-day. `start_time < end_time` is a display convention enforced
/// upstream, never assumed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub mode: ScheduleMode,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wall_clock")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "wall_clock")]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<Vec<Weekday>>,
}

impl Schedule {
    /// Parse a schedule from its CMS JSON representation.
    pub fn from_json(json: &str) -> WhatsOnResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The last day of the schedule; `start_date` when no end is set.
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// Whether the event has no time-of-day component.
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }

    /// The active-days filter used by occurrence expansion.
    pub fn weekday_filter(&self) -> WeekdayFilter {
        match &self.weekdays {
            Some(days) if !days.is_empty() => WeekdayFilter::Only(days.iter().copied().collect()),
            _ => WeekdayFilter::Any,
        }
    }

    /// Display label for the schedule's time of day, shared by every
    /// occurrence: "18:00 – 20:00", "18:00", or "" for all-day.
    pub fn time_label(&self) -> String {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => {
                format!("{} – {}", start.format("%H:%M"), end.format("%H:%M"))
            }
            (Some(start), None) => start.format("%H:%M").to_string(),
            _ => String::new(),
        }
    }
}

/// Serde adapter for optional "HH:mm" wall-clock times (the CMS format;
/// chrono's default representation carries seconds).
mod wall_clock {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match time {
            Some(t) => serializer.serialize_str(&t.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveTime::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}
