//! Calendar export: deep links and the ICS download artifact.
//!
//! Three producers (Google Calendar URL, Outlook Calendar URL, ICS
//! document) share one data-extraction step over the event and the page
//! URL at export time. All wall-clock times are Europe/Madrid local.

mod ics;
mod links;

pub use ics::{ICS_MIME_TYPE, IcsFile, generate_ics, generate_ics_at, ics_file, ics_filename};
pub use links::{google_calendar_url, outlook_calendar_url};

use chrono::{NaiveDate, NaiveTime};

use crate::error::{WhatsOnError, WhatsOnResult};
use crate::event::Event;

/// IANA identifier of the timezone event wall-clock times are stated in.
pub(crate) fn event_timezone() -> &'static str {
    chrono_tz::Europe::Madrid.name()
}

/// The flattened view of an event the calendar producers consume.
///
/// Assembled at the moment of export and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEventData {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub url: Option<String>,
}

impl CalendarEventData {
    /// Extract export data from an event and the current page URL.
    ///
    /// Export is only offered in the UI when a schedule exists, so an
    /// event without one is a caller bug: this fails instead of
    /// degrading.
    pub fn from_event(event: &Event, current_url: &str) -> WhatsOnResult<Self> {
        let schedule = event
            .schedule
            .as_ref()
            .ok_or(WhatsOnError::MissingSchedule)?;

        Ok(CalendarEventData {
            title: event.display_title().to_string(),
            description: event.summary.clone().unwrap_or_default(),
            start_date: schedule.start_date,
            end_date: schedule.effective_end_date(),
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            location: event.location(),
            url: (!current_url.is_empty()).then(|| current_url.to_string()),
        })
    }

    /// All-day when the schedule carried no start time.
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WhatsOnError;

    #[test]
    fn test_extraction_requires_a_schedule() {
        let event = Event::from_json(r#"{"_id": "ev-1", "title": "No dates yet"}"#).unwrap();
        let result = CalendarEventData::from_event(&event, "https://example.com/e/1");
        assert!(matches!(result, Err(WhatsOnError::MissingSchedule)));
    }

    #[test]
    fn test_extraction_flattens_schedule_and_place() {
        let event = Event::from_json(
            r#"{
                "_id": "ev-1",
                "title": "Concert",
                "summary": "An evening of music",
                "place": {"name": "Auditori", "address": "Av. del Mar 10"},
                "schedule": {
                    "mode": "range",
                    "startDate": "2025-06-01",
                    "endDate": "2025-06-05",
                    "startTime": "18:00"
                }
            }"#,
        )
        .unwrap();

        let data = CalendarEventData::from_event(&event, "https://example.com/e/1").unwrap();
        assert_eq!(data.title, "Concert");
        assert_eq!(data.end_date, chrono::NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        assert_eq!(data.location, Some("Auditori, Av. del Mar 10".to_string()));
        assert_eq!(data.url, Some("https://example.com/e/1".to_string()));
        assert!(!data.is_all_day());
        assert_eq!(data.end_time, None);
    }

    #[test]
    fn test_blank_page_url_is_dropped() {
        let event = Event::from_json(
            r#"{"_id": "ev-1", "schedule": {"mode": "single", "startDate": "2025-06-01"}}"#,
        )
        .unwrap();
        let data = CalendarEventData::from_event(&event, "").unwrap();
        assert_eq!(data.url, None);
        assert!(data.is_all_day());
    }
}
