//! Event repository implementation

use sqlx::PgPool;

use crate::models::event::{CreateEventRequest, Event, EventCategory, EventSearch};
use crate::utils::errors::EventHubError;

// Shared projection: one row per event with attendee ids aggregated from the
// membership table, in registration order.
pub(crate) const EVENT_SELECT: &str = r#"
    SELECT e.id, e.name, e.organizer, e.location, e.description, e.event_date,
           e.total_seats, e.available_seats, e.category, e.tags,
           COALESCE(array_agg(a.user_id ORDER BY a.registered_at, a.user_id)
                    FILTER (WHERE a.user_id IS NOT NULL), '{}') AS attendees,
           e.created_at, e.updated_at
    FROM events e
    LEFT JOIN event_attendees a ON a.event_id = e.id
"#;

// Conjunctive filter block shared by search and count; unsupplied criteria
// bind as NULL and match everything.
const EVENT_FILTER: &str = r#"
    WHERE ($1::text IS NULL
           OR e.name ILIKE '%' || $1 || '%'
           OR e.organizer ILIKE '%' || $1 || '%'
           OR e.description ILIKE '%' || $1 || '%')
      AND ($2::text IS NULL OR e.location ILIKE '%' || $2 || '%')
      AND ($3::event_category IS NULL OR e.category = $3)
      AND ($4::timestamptz IS NULL OR (e.event_date >= $4 AND e.event_date < $5))
"#;

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event with all seats available
    pub async fn create(
        &self,
        request: CreateEventRequest,
        category: EventCategory,
    ) -> Result<Event, EventHubError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, organizer, location, description, event_date,
                                total_seats, available_seats, category, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $6, $7, $8)
            RETURNING id, name, organizer, location, description, event_date,
                      total_seats, available_seats, category, tags,
                      ARRAY[]::bigint[] AS attendees, created_at, updated_at
            "#,
        )
        .bind(request.name)
        .bind(request.organizer)
        .bind(request.location)
        .bind(request.description)
        .bind(request.date)
        .bind(request.total_seats)
        .bind(category)
        .bind(request.tags.unwrap_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID, including its attendee ids
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, EventHubError> {
        let sql = format!("{EVENT_SELECT} WHERE e.id = $1 GROUP BY e.id");
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Filtered, ordered page of events.
    /// Ordering is ascending by date with id as a stable tiebreak.
    pub async fn search(&self, query: &EventSearch) -> Result<Vec<Event>, EventHubError> {
        let sql = format!(
            r#"{EVENT_SELECT} {EVENT_FILTER}
            GROUP BY e.id
            ORDER BY e.event_date ASC, e.id ASC
            LIMIT $6 OFFSET $7
            "#
        );

        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(query.search.as_deref())
            .bind(query.location.as_deref())
            .bind(query.category)
            .bind(query.day_start)
            .bind(query.day_end)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(events)
    }

    /// Count events matching the same filter as [`EventRepository::search`]
    pub async fn count(&self, query: &EventSearch) -> Result<i64, EventHubError> {
        let sql = format!("SELECT COUNT(*) FROM events e {EVENT_FILTER}");

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(query.search.as_deref())
            .bind(query.location.as_deref())
            .bind(query.category)
            .bind(query.day_start)
            .bind(query.day_end)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Events a user is registered for, ascending by date
    pub async fn find_registered_for_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Event>, EventHubError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT e.id, e.name, e.organizer, e.location, e.description, e.event_date,
                   e.total_seats, e.available_seats, e.category, e.tags,
                   COALESCE(array_agg(a.user_id ORDER BY a.registered_at, a.user_id)
                            FILTER (WHERE a.user_id IS NOT NULL), '{}') AS attendees,
                   e.created_at, e.updated_at
            FROM events e
            JOIN event_attendees me ON me.event_id = e.id AND me.user_id = $1
            LEFT JOIN event_attendees a ON a.event_id = e.id
            GROUP BY e.id
            ORDER BY e.event_date ASC, e.id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Check if user is registered for event
    pub async fn is_registered(&self, event_id: i64, user_id: i64) -> Result<bool, EventHubError> {
        let registered: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM event_attendees WHERE event_id = $1 AND user_id = $2)",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(registered)
    }

    /// Get attendee count for event
    pub async fn attendee_count(&self, event_id: i64) -> Result<i64, EventHubError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM event_attendees WHERE event_id = $1")
                .bind(event_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
