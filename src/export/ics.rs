//! RFC 5545 document generation for calendar downloads.
//!
//! The output is consumed byte-for-byte by calendar clients, so the
//! writer controls escaping, line folding, and the timezone block
//! directly instead of going through a builder.

use chrono::{DateTime, Utc};
use slug::slugify;

use crate::error::WhatsOnResult;
use crate::event::Event;

use super::CalendarEventData;

/// MIME type for the ICS download.
pub const ICS_MIME_TYPE: &str = "text/calendar;charset=utf-8";

const PRODID: &str = "-//Whats On//Event Calendar//EN";

/// Host suffix keeping exported UIDs stable across re-exports of the
/// same event.
const UID_HOST: &str = "gocastellon.com";

/// Physical-line budget from RFC 5545 §3.1: 75 octets on the first
/// line, 74 on each space-prefixed continuation.
const FOLD_FIRST: usize = 75;
const FOLD_CONT: usize = 74;

/// A generated ICS document plus its download filename.
///
/// The embedding UI turns this into a file download with
/// [`ICS_MIME_TYPE`]; the crate itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcsFile {
    pub filename: String,
    pub content: String,
}

/// Build the downloadable ICS artifact for an event.
pub fn ics_file(event: &Event, current_url: &str) -> WhatsOnResult<IcsFile> {
    Ok(IcsFile {
        filename: ics_filename(event),
        content: generate_ics(event, current_url)?,
    })
}

/// Download filename: the event's slug, a slugified title, or "event".
pub fn ics_filename(event: &Event) -> String {
    let stem = event
        .slug
        .clone()
        .filter(|slug| !slug.is_empty())
        .or_else(|| {
            event
                .title
                .as_deref()
                .map(slugify)
                .filter(|slug| !slug.is_empty())
        })
        .unwrap_or_else(|| "event".to_string());
    format!("{stem}.ics")
}

/// Generate ICS content for an event, stamped with the current time.
pub fn generate_ics(event: &Event, current_url: &str) -> WhatsOnResult<String> {
    generate_ics_at(event, current_url, Utc::now())
}

/// Generate ICS content with an explicit DTSTAMP instant.
///
/// DTSTAMP records export time, not event time, so [`generate_ics`]
/// stamps fresh on every call; this entry pins it for deterministic
/// output.
pub fn generate_ics_at(
    event: &Event,
    current_url: &str,
    dtstamp: DateTime<Utc>,
) -> WhatsOnResult<String> {
    let data = CalendarEventData::from_event(event, current_url)?;

    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".into(),
        "VERSION:2.0".into(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".into(),
        "METHOD:PUBLISH".into(),
    ];

    // Wall-clock VEVENT times only make sense against the timezone's
    // transition rules, so the VTIMEZONE precedes the VEVENT. All-day
    // events carry no times and skip the block.
    if !data.is_all_day() {
        push_vtimezone(&mut lines);
    }

    lines.push("BEGIN:VEVENT".into());
    lines.push(format!("UID:{}@{UID_HOST}", event.id));
    lines.push(format!("DTSTAMP:{}", dtstamp.format("%Y%m%dT%H%M%SZ")));

    match data.start_time {
        None => {
            // Date-only DTEND is exclusive (RFC 5545 §3.8.2.2): one day
            // past the last day of the event.
            let dtend = data.end_date.succ_opt().unwrap_or(data.end_date);
            lines.push(format!(
                "DTSTART;VALUE=DATE:{}",
                data.start_date.format("%Y%m%d")
            ));
            lines.push(format!("DTEND;VALUE=DATE:{}", dtend.format("%Y%m%d")));
        }
        Some(start_time) => {
            let tzid = super::event_timezone();
            let end_time = data.end_time.unwrap_or(start_time);
            lines.push(format!(
                "DTSTART;TZID={tzid}:{}T{}00",
                data.start_date.format("%Y%m%d"),
                start_time.format("%H%M")
            ));
            lines.push(format!(
                "DTEND;TZID={tzid}:{}T{}00",
                data.end_date.format("%Y%m%d"),
                end_time.format("%H%M")
            ));
        }
    }

    lines.push(format!("SUMMARY:{}", escape_text(&data.title)));
    if !data.description.is_empty() {
        lines.push(format!("DESCRIPTION:{}", escape_text(&data.description)));
    }
    if let Some(location) = &data.location {
        lines.push(format!("LOCATION:{}", escape_text(location)));
    }
    if let Some(url) = &data.url {
        lines.push(format!("URL:{url}"));
    }
    lines.push("END:VEVENT".into());
    lines.push("END:VCALENDAR".into());

    let mut out = String::new();
    for line in &lines {
        fold_line(&mut out, line);
    }
    Ok(out)
}

/// Europe/Madrid VTIMEZONE with its two transition rules: CEST starts
/// the last Sunday of March, CET the last Sunday of October.
fn push_vtimezone(lines: &mut Vec<String>) {
    let tzid = super::event_timezone();
    lines.push("BEGIN:VTIMEZONE".into());
    lines.push(format!("TZID:{tzid}"));
    lines.push("BEGIN:DAYLIGHT".into());
    lines.push("TZOFFSETFROM:+0100".into());
    lines.push("TZOFFSETTO:+0200".into());
    lines.push("TZNAME:CEST".into());
    lines.push("DTSTART:19700329T020000".into());
    lines.push("RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU".into());
    lines.push("END:DAYLIGHT".into());
    lines.push("BEGIN:STANDARD".into());
    lines.push("TZOFFSETFROM:+0200".into());
    lines.push("TZOFFSETTO:+0100".into());
    lines.push("TZNAME:CET".into());
    lines.push("DTSTART:19701025T030000".into());
    lines.push("RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU".into());
    lines.push("END:STANDARD".into());
    lines.push("END:VTIMEZONE".into());
}

/// Escape text per RFC 5545 §3.3.11: backslash first, then semicolon,
/// comma, and newline, so earlier replacements are not re-escaped.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Write one content line folded to the 75-octet budget,
/// CRLF-terminated. Splits happen on character boundaries so multi-byte
/// UTF-8 sequences stay intact; each continuation starts with a single
/// space.
fn fold_line(out: &mut String, line: &str) {
    let mut budget = FOLD_FIRST;
    let mut written = 0;
    for ch in line.chars() {
        let len = ch.len_utf8();
        if written + len > budget {
            out.push_str("\r\n ");
            budget = FOLD_CONT;
            written = 0;
        }
        out.push(ch);
        written += len;
    }
    out.push_str("\r\n");
}
