//! Registration engine
//!
//! Enforces the seat/attendee invariant under register and cancel. Both
//! operations run inside a single Postgres transaction so the seat counter
//! and the membership row can never diverge: an early error return drops the
//! transaction and rolls everything back.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::database::repositories::event::EVENT_SELECT;
use crate::database::{EventRepository, UserRepository};
use crate::models::event::{Event, MyEvents};
use crate::utils::errors::{EventHubError, Result};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct RegistrationService {
    pool: PgPool,
    events: EventRepository,
    users: UserRepository,
}

impl RegistrationService {
    pub fn new(pool: PgPool, events: EventRepository, users: UserRepository) -> Self {
        Self {
            pool,
            events,
            users,
        }
    }

    /// Register a user for an event.
    ///
    /// Precondition order: event exists, user exists, not already
    /// registered, seats available. The seat decrement is a single
    /// conditional UPDATE, so two racing registrations on the last seat
    /// cannot both succeed; the loser observes zero affected rows and gets
    /// `SoldOut`.
    pub async fn register(&self, event_id: i64, user_id: i64) -> Result<Event> {
        let mut tx = self.pool.begin().await?;

        // Lock the event row for the duration of the check-and-mutate
        // sequence so the precondition ordering stays deterministic.
        let locked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM events WHERE id = $1 FOR UPDATE")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Err(EventHubError::EventNotFound { event_id });
        }

        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;
        if !user_exists {
            return Err(EventHubError::UserNotFound { user_id });
        }

        let already_registered: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM event_attendees WHERE event_id = $1 AND user_id = $2)",
        )
        .bind(event_id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;
        if already_registered {
            return Err(EventHubError::AlreadyRegistered { event_id });
        }

        // Atomic conditional decrement: the seat check and the decrement are
        // one statement, never a separate read-then-write.
        let decremented = sqlx::query(
            r#"
            UPDATE events
            SET available_seats = available_seats - 1, updated_at = now()
            WHERE id = $1 AND available_seats > 0
            "#,
        )
        .bind(event_id)
        .execute(&mut *tx)
        .await?;
        if decremented.rows_affected() == 0 {
            return Err(EventHubError::SoldOut { event_id });
        }

        // One membership row backs both Event.attendees and
        // User.registeredEvents; the primary key rejects duplicates.
        sqlx::query("INSERT INTO event_attendees (event_id, user_id) VALUES ($1, $2)")
            .bind(event_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let event = fetch_event(&mut tx, event_id).await?;
        tx.commit().await?;

        logging::log_registration_action(event_id, user_id, "register");
        Ok(event)
    }

    /// Cancel a user's registration for an event.
    ///
    /// The increment is capped at `total_seats`; with the invariant held it
    /// never reaches the cap.
    pub async fn cancel(&self, event_id: i64, user_id: i64) -> Result<Event> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM events WHERE id = $1 FOR UPDATE")
                .bind(event_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Err(EventHubError::EventNotFound { event_id });
        }

        let removed =
            sqlx::query("DELETE FROM event_attendees WHERE event_id = $1 AND user_id = $2")
                .bind(event_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
        if removed.rows_affected() == 0 {
            return Err(EventHubError::NotRegistered { event_id });
        }

        sqlx::query(
            r#"
            UPDATE events
            SET available_seats = LEAST(available_seats + 1, total_seats), updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(event_id)
        .execute(&mut *tx)
        .await?;

        let event = fetch_event(&mut tx, event_id).await?;
        tx.commit().await?;

        logging::log_registration_action(event_id, user_id, "cancel");
        Ok(event)
    }

    /// A user's registered events, partitioned into upcoming and past
    pub async fn list_my_events(&self, user_id: i64) -> Result<MyEvents> {
        if !self.users.exists(user_id).await? {
            return Err(EventHubError::UserNotFound { user_id });
        }

        let events = self.events.find_registered_for_user(user_id).await?;
        Ok(partition_by_date(events, Utc::now()))
    }
}

async fn fetch_event(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    event_id: i64,
) -> Result<Event> {
    let sql = format!("{EVENT_SELECT} WHERE e.id = $1 GROUP BY e.id");
    let event = sqlx::query_as::<_, Event>(&sql)
        .bind(event_id)
        .fetch_one(&mut **tx)
        .await?;

    Ok(event)
}

/// Split events into upcoming (date >= now) and past (date < now),
/// preserving the ascending-by-date input order in every list.
pub fn partition_by_date(events: Vec<Event>, now: DateTime<Utc>) -> MyEvents {
    let (upcoming, past): (Vec<Event>, Vec<Event>) =
        events.iter().cloned().partition(|e| e.event_date >= now);

    MyEvents {
        upcoming,
        past,
        all: events,
    }
}
