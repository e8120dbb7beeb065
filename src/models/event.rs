//! Event model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fixed category enumeration.
///
/// The `"All"` value accepted by the listing filter is a sentinel meaning
/// "no filter" and is deliberately not part of this enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "event_category")]
pub enum EventCategory {
    Technology,
    Business,
    Art,
    Music,
    Sports,
    Education,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 7] = [
        EventCategory::Technology,
        EventCategory::Business,
        EventCategory::Art,
        EventCategory::Music,
        EventCategory::Sports,
        EventCategory::Education,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Technology => "Technology",
            EventCategory::Business => "Business",
            EventCategory::Art => "Art",
            EventCategory::Music => "Music",
            EventCategory::Sports => "Sports",
            EventCategory::Education => "Education",
            EventCategory::Other => "Other",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// An event with its seat counters and attendee membership.
///
/// `attendees` is aggregated from the `event_attendees` table, which also
/// backs the user-side `registeredEvents` view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub organizer: String,
    pub location: String,
    pub description: String,
    #[serde(rename = "date")]
    pub event_date: DateTime<Utc>,
    pub total_seats: i32,
    pub available_seats: i32,
    pub category: EventCategory,
    pub tags: Vec<String>,
    pub attendees: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an event.
///
/// `category` stays a plain string here so out-of-enum values surface as a
/// Validation error rather than a body-deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub organizer: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub total_seats: i32,
    pub category: String,
    pub tags: Option<Vec<String>>,
}

/// Raw listing filter as received on the query string.
/// All criteria are optional and combine conjunctively.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Normalized store query produced from an [`EventFilter`].
#[derive(Debug, Clone)]
pub struct EventSearch {
    pub search: Option<String>,
    pub location: Option<String>,
    pub category: Option<EventCategory>,
    pub day_start: Option<DateTime<Utc>>,
    pub day_end: Option<DateTime<Utc>>,
    pub limit: i64,
    pub offset: i64,
}

/// One page of listing results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    pub events: Vec<Event>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total: i64,
}

/// A user's registered events partitioned by the request time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyEvents {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
    pub all: Vec<Event>,
}
