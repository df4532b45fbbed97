//! Google and Outlook "add to calendar" deep links.
//!
//! Both links carry the event's Europe/Madrid wall-clock times verbatim;
//! the Google link names the timezone through its `ctz` parameter.

use url::Url;

use crate::error::WhatsOnResult;
use crate::event::Event;

use super::CalendarEventData;

const GOOGLE_CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_COMPOSE_BASE: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

/// Build a Google Calendar event-template link.
pub fn google_calendar_url(event: &Event, current_url: &str) -> WhatsOnResult<String> {
    let data = CalendarEventData::from_event(event, current_url)?;

    let mut url = Url::parse(GOOGLE_CALENDAR_BASE)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("action", "TEMPLATE");
        query.append_pair("text", &data.title);
        query.append_pair("dates", &google_dates(&data));
        query.append_pair("ctz", super::event_timezone());
        if !data.description.is_empty() {
            query.append_pair("details", &data.description);
        }
        if let Some(location) = &data.location {
            query.append_pair("location", location);
        }
    }
    Ok(url.into())
}

/// Build an Outlook Calendar compose link.
pub fn outlook_calendar_url(event: &Event, current_url: &str) -> WhatsOnResult<String> {
    let data = CalendarEventData::from_event(event, current_url)?;
    let (startdt, enddt) = outlook_dates(&data);

    let mut url = Url::parse(OUTLOOK_COMPOSE_BASE)?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("subject", &data.title);
        query.append_pair("startdt", &startdt);
        query.append_pair("enddt", &enddt);
        if !data.description.is_empty() {
            query.append_pair("body", &data.description);
        }
        if let Some(location) = &data.location {
            query.append_pair("location", location);
        }
    }
    Ok(url.into())
}

/// `dates=START/END`: bare `YYYYMMDD` for all-day events, local
/// `YYYYMMDDTHHmmss` without a `Z` suffix otherwise. A missing end time
/// falls back to the start time.
fn google_dates(data: &CalendarEventData) -> String {
    match data.start_time {
        None => format!(
            "{}/{}",
            data.start_date.format("%Y%m%d"),
            data.end_date.format("%Y%m%d")
        ),
        Some(start) => {
            let end = data.end_time.unwrap_or(start);
            format!(
                "{}T{}00/{}T{}00",
                data.start_date.format("%Y%m%d"),
                start.format("%H%M"),
                data.end_date.format("%Y%m%d"),
                end.format("%H%M")
            )
        }
    }
}

/// `startdt`/`enddt`: a bare date for all-day events,
/// `YYYY-MM-DDTHH:mm:ss` otherwise.
fn outlook_dates(data: &CalendarEventData) -> (String, String) {
    match data.start_time {
        None => (
            data.start_date.format("%Y-%m-%d").to_string(),
            data.end_date.format("%Y-%m-%d").to_string(),
        ),
        Some(start) => {
            let end = data.end_time.unwrap_or(start);
            (
                format!("{}T{}:00", data.start_date.format("%Y-%m-%d"), start.format("%H:%M")),
                format!("{}T{}:00", data.end_date.format("%Y-%m-%d"), end.format("%H:%M")),
            )
        }
    }
}
