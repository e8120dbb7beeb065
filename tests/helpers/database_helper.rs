//! Test database helper utilities
//!
//! The DB-backed suites run against the database named by `TEST_DATABASE_URL`
//! and skip (with a notice) when it is not set. Each test starts from a clean
//! slate via [`TestDatabase::cleanup`] and the suites are serialized.

use sqlx::PgPool;
use std::sync::Once;

static INIT: Once = Once::new();

/// Test database helper that manages PostgreSQL test database setup
pub struct TestDatabase {
    pub pool: PgPool,
    pub database_url: String,
}

impl TestDatabase {
    /// Connect to the test database, run migrations, and wipe all data.
    ///
    /// Returns `None` when `TEST_DATABASE_URL` is not set so callers can
    /// skip; panics on actual connection or migration failures.
    pub async fn try_new() -> Option<Self> {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt::try_init();
        });

        let database_url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("skipping: TEST_DATABASE_URL not set");
                return None;
            }
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let db = Self { pool, database_url };
        db.cleanup().await.expect("Failed to clean test database");

        Some(db)
    }

    /// Clean all test data from the database
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        // Delete in reverse order of dependencies
        sqlx::query("DELETE FROM event_attendees")
            .execute(&self.pool)
            .await?;
        sqlx::query("DELETE FROM events").execute(&self.pool).await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(())
    }
}
