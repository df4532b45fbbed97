//! The event summary consumed by calendar export and share links.
//!
//! This is the slice of the CMS event document the engine needs: the
//! identity and display fields, the optional place, and the schedule.
//! The full document (images, categories, organizer, pricing) stays in
//! the presentation layer.

use serde::{Deserialize, Serialize};

use crate::error::WhatsOnResult;
use crate::schedule::Schedule;

/// A place an event happens at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Place {
    /// Postal address; `full` appends zip code and city when present.
    pub fn address_line(&self, full: bool) -> String {
        let address = self.address.as_deref().unwrap_or_default();
        if !full {
            return address.to_string();
        }
        [
            Some(address),
            self.zip_code.as_deref(),
            self.city.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// "Name, address" join used as the calendar location.
    pub fn location(&self) -> String {
        [Some(self.name.as_str()), self.address.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The event summary the export path consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// CMS document id; also the stable part of the exported UID.
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
}

impl Event {
    /// Parse an event summary from its CMS JSON representation.
    pub fn from_json(json: &str) -> WhatsOnResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Display title with the upstream fallback.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Event")
    }

    /// Location string for calendar export, when a place is set.
    pub fn location(&self) -> Option<String> {
        self.place
            .as_ref()
            .map(Place::location)
            .filter(|location| !location.is_empty())
    }
}
