//! Event listing and creation service
//!
//! The query-builder half of the core: turns raw listing filters into a
//! normalized store query and enforces the create-payload validation rules.

use std::str::FromStr;

use chrono::NaiveTime;

use crate::config::PaginationConfig;
use crate::database::EventRepository;
use crate::models::event::{
    CreateEventRequest, Event, EventCategory, EventFilter, EventPage, EventSearch,
};
use crate::utils::errors::{EventHubError, Result};

/// Sentinel filter value meaning "no category filter"
const CATEGORY_ALL: &str = "All";

#[derive(Debug, Clone)]
pub struct EventService {
    events: EventRepository,
    pagination: PaginationConfig,
}

impl EventService {
    pub fn new(events: EventRepository, pagination: PaginationConfig) -> Self {
        Self { events, pagination }
    }

    /// Filtered, paginated event listing.
    ///
    /// All supplied criteria combine conjunctively; a page beyond the last
    /// one yields an empty event list, not an error.
    pub async fn list(&self, filter: EventFilter) -> Result<EventPage> {
        let started = std::time::Instant::now();
        let (search, page) = build_search(&filter, &self.pagination)?;

        let events = self.events.search(&search).await?;
        let total = self.events.count(&search).await?;

        crate::utils::logging::log_event_query(total, page, started.elapsed().as_millis() as u64);

        Ok(EventPage {
            events,
            current_page: page,
            total_pages: total_pages(total, search.limit),
            total,
        })
    }

    /// Single event by id
    pub async fn get(&self, event_id: i64) -> Result<Event> {
        self.events
            .find_by_id(event_id)
            .await?
            .ok_or(EventHubError::EventNotFound { event_id })
    }

    /// Create a new event with `available_seats` initialized to `total_seats`
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let category = validate_create(&request)?;

        let request = CreateEventRequest {
            name: request.name.trim().to_string(),
            organizer: request.organizer.trim().to_string(),
            location: request.location.trim().to_string(),
            description: request.description.trim().to_string(),
            ..request
        };

        self.events.create(request, category).await
    }
}

/// Normalize a raw filter into a store query plus the effective page number
pub fn build_search(
    filter: &EventFilter,
    pagination: &PaginationConfig,
) -> Result<(EventSearch, i64)> {
    let page = filter.page.unwrap_or(1).max(1);
    let limit = filter
        .limit
        .unwrap_or(pagination.default_limit)
        .clamp(1, pagination.max_limit);

    let category = match filter.category.as_deref().map(str::trim) {
        None | Some("") | Some(CATEGORY_ALL) => None,
        Some(value) => Some(
            EventCategory::from_str(value).map_err(EventHubError::Validation)?,
        ),
    };

    // Calendar-day window in the server reference timezone (UTC).
    let day_start = filter.date.map(|d| d.and_time(NaiveTime::MIN).and_utc());
    let day_end = day_start.map(|start| start + chrono::Duration::days(1));

    let search = EventSearch {
        search: non_empty(filter.search.as_deref()).map(|s| escape_like(&s)),
        location: non_empty(filter.location.as_deref()).map(|s| escape_like(&s)),
        category,
        day_start,
        day_end,
        limit,
        // Saturate on absurd page numbers; a page past the end is an empty
        // result, never an error.
        offset: (page - 1).saturating_mul(limit),
    };

    Ok((search, page))
}

/// Validate a create payload and resolve its category
pub fn validate_create(request: &CreateEventRequest) -> Result<EventCategory> {
    if request.name.trim().chars().count() < 3 {
        return Err(EventHubError::Validation(
            "Event name must be at least 3 characters".to_string(),
        ));
    }

    if request.organizer.trim().is_empty() {
        return Err(EventHubError::Validation(
            "Organizer name is required".to_string(),
        ));
    }

    if request.location.trim().is_empty() {
        return Err(EventHubError::Validation(
            "Location is required".to_string(),
        ));
    }

    if request.description.trim().chars().count() < 10 {
        return Err(EventHubError::Validation(
            "Description must be at least 10 characters".to_string(),
        ));
    }

    if request.total_seats < 1 {
        return Err(EventHubError::Validation(
            "Total seats must be at least 1".to_string(),
        ));
    }

    EventCategory::from_str(&request.category).map_err(EventHubError::Validation)
}

/// ceil(total / limit); zero matches yield zero pages
pub fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

/// Escape LIKE metacharacters so user input matches as a literal substring
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn pagination() -> PaginationConfig {
        PaginationConfig {
            default_limit: 12,
            max_limit: 100,
        }
    }

    fn create_request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Rust Meetup".to_string(),
            organizer: "Community".to_string(),
            location: "Berlin".to_string(),
            date: Utc::now(),
            description: "Monthly Rust meetup with talks".to_string(),
            total_seats: 50,
            category: "Technology".to_string(),
            tags: None,
        }
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(25, 12), 3);
        assert_eq!(total_pages(24, 12), 2);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(0, 12), 0);
    }

    #[test]
    fn test_defaults_applied_when_no_filters_supplied() {
        let (search, page) = build_search(&EventFilter::default(), &pagination()).unwrap();

        assert_eq!(page, 1);
        assert_eq!(search.limit, 12);
        assert_eq!(search.offset, 0);
        assert!(search.search.is_none());
        assert!(search.category.is_none());
        assert!(search.day_start.is_none());
    }

    #[test]
    fn test_offset_follows_page_and_limit() {
        let filter = EventFilter {
            page: Some(3),
            limit: Some(10),
            ..Default::default()
        };

        let (search, page) = build_search(&filter, &pagination()).unwrap();
        assert_eq!(page, 3);
        assert_eq!(search.offset, 20);
    }

    #[test]
    fn test_limit_is_clamped() {
        let filter = EventFilter {
            limit: Some(10_000),
            ..Default::default()
        };
        let (search, _) = build_search(&filter, &pagination()).unwrap();
        assert_eq!(search.limit, 100);

        let filter = EventFilter {
            limit: Some(0),
            page: Some(-4),
            ..Default::default()
        };
        let (search, page) = build_search(&filter, &pagination()).unwrap();
        assert_eq!(search.limit, 1);
        assert_eq!(page, 1);
    }

    #[test]
    fn test_huge_page_number_saturates_instead_of_overflowing() {
        let filter = EventFilter {
            page: Some(i64::MAX),
            limit: Some(12),
            ..Default::default()
        };

        let (search, page) = build_search(&filter, &pagination()).unwrap();
        assert_eq!(page, i64::MAX);
        assert_eq!(search.offset, i64::MAX);
    }

    #[test]
    fn test_search_input_matches_like_metacharacters_literally() {
        let filter = EventFilter {
            search: Some("100%".to_string()),
            location: Some("under_score".to_string()),
            ..Default::default()
        };

        let (search, _) = build_search(&filter, &pagination()).unwrap();
        assert_eq!(search.search.as_deref(), Some("100\\%"));
        assert_eq!(search.location.as_deref(), Some("under\\_score"));

        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_all_sentinel_and_blank_category_mean_no_filter() {
        for value in ["All", "", "  "] {
            let filter = EventFilter {
                category: Some(value.to_string()),
                ..Default::default()
            };
            let (search, _) = build_search(&filter, &pagination()).unwrap();
            assert!(search.category.is_none(), "value {value:?} should not filter");
        }
    }

    #[test]
    fn test_unknown_category_is_a_validation_error() {
        let filter = EventFilter {
            category: Some("Cooking".to_string()),
            ..Default::default()
        };
        let err = build_search(&filter, &pagination()).unwrap_err();
        assert!(matches!(err, EventHubError::Validation(_)));
    }

    #[test]
    fn test_date_filter_spans_one_calendar_day() {
        let filter = EventFilter {
            date: NaiveDate::from_ymd_opt(2026, 4, 15),
            ..Default::default()
        };

        let (search, _) = build_search(&filter, &pagination()).unwrap();
        let start = search.day_start.unwrap();
        let end = search.day_end.unwrap();

        assert_eq!(start, Utc.with_ymd_and_hms(2026, 4, 15, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 4, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_valid_create_payload_resolves_category() {
        let category = validate_create(&create_request()).unwrap();
        assert_eq!(category, EventCategory::Technology);
    }

    #[test]
    fn test_create_payload_rules() {
        let mut request = create_request();
        request.name = "ab".to_string();
        assert!(validate_create(&request).is_err());

        let mut request = create_request();
        request.organizer = "   ".to_string();
        assert!(validate_create(&request).is_err());

        let mut request = create_request();
        request.description = "too short".to_string();
        assert!(validate_create(&request).is_err());

        let mut request = create_request();
        request.total_seats = 0;
        assert!(validate_create(&request).is_err());

        let mut request = create_request();
        request.category = "All".to_string();
        assert!(validate_create(&request).is_err(), "sentinel is not storable");
    }
}
