//! Core schedule engine for the What's On events platform.
//!
//! This crate holds the one algorithmically dense part of the platform:
//! turning a compact schedule description (a single day, or a date range
//! recurring on selected weekdays) into concrete occurrences for
//! display, the next upcoming date for summaries, search-window overlap
//! answers, and exported calendar artifacts (Google/Outlook deep links
//! and RFC 5545 ICS downloads).
//!
//! Everything is a synchronous pure function over immutable inputs; the
//! embedding UI owns all I/O (opening links, triggering downloads).

pub mod date_range;
pub mod error;
pub mod event;
pub mod export;
pub mod locale;
pub mod next_occurrence;
pub mod occurrence;
pub mod schedule;
pub mod share;

pub use date_range::DateRange;
pub use error::{WhatsOnError, WhatsOnResult};
pub use event::{Event, Place};
pub use export::{
    CalendarEventData, ICS_MIME_TYPE, IcsFile, generate_ics, generate_ics_at, google_calendar_url,
    ics_file, ics_filename, outlook_calendar_url,
};
pub use locale::{Locale, format_date_range, format_day_label};
pub use next_occurrence::{NextOccurrence, next_occurrence, next_occurrence_on};
pub use occurrence::{MAX_EXPANSION_DAYS, Occurrence, schedule_occurrences};
pub use schedule::{Schedule, ScheduleMode, Weekday, WeekdayFilter, WeekdaySet};
pub use share::{facebook_share_url, telegram_share_url, whatsapp_share_url};
