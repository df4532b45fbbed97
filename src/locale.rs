//! Locale-aware date formatting for schedule display.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

const ISO_DATE: &str = "%Y-%m-%d";

/// Display locales the site ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    #[default]
    En,
}

impl Locale {
    fn chrono(self) -> chrono::format::Locale {
        match self {
            Locale::Es => chrono::format::Locale::es_ES,
            Locale::En => chrono::format::Locale::en_US,
        }
    }
}

/// Format a day as "26 Dec (Fri)" / "26 dic (vie)".
pub fn format_day_label(date: NaiveDate, locale: Locale) -> String {
    date.format_localized("%-d %b (%a)", locale.chrono()).to_string()
}

/// Format a schedule's date span like "Apr 5 – Apr 7". Accepts
/// YYYY-MM-DD strings; equal or missing end dates collapse to the start.
///
/// This sits on a render path: unparseable input comes back raw instead
/// of failing.
pub fn format_date_range(start: &str, end: Option<&str>, locale: Locale) -> String {
    let raw = || match end {
        Some(end) if end != start => format!("{start} – {end}"),
        _ => start.to_string(),
    };

    let Ok(start_date) = NaiveDate::parse_from_str(start, ISO_DATE) else {
        debug!("unparseable start date {start:?}, rendering raw");
        return raw();
    };
    let end_date = match end {
        None => None,
        Some(end) => match NaiveDate::parse_from_str(end, ISO_DATE) {
            Ok(date) => Some(date),
            Err(_) => {
                debug!("unparseable end date {end:?}, rendering raw");
                return raw();
            }
        },
    };

    let start_label = start_date
        .format_localized("%b %-d", locale.chrono())
        .to_string();
    match end_date {
        Some(end_date) if end_date != start_date => {
            let end_label = end_date
                .format_localized("%b %-d", locale.chrono())
                .to_string();
            format!("{start_label} – {end_label}")
        }
        _ => start_label,
    }
}
