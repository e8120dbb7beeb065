//! Test data helpers for creating test objects

use std::str::FromStr;

use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use eventhub::config::Settings;
use eventhub::database::{EventRepository, UserRepository};
use eventhub::handlers::AppState;
use eventhub::middleware::{AuthKeys, Claims};
use eventhub::models::{CreateEventRequest, CreateUserRequest, Event, EventCategory, User};
use eventhub::services::ServiceFactory;

use super::database_helper::TestDatabase;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Build a valid create-event payload
pub fn event_request(
    name: &str,
    category: &str,
    date: DateTime<Utc>,
    total_seats: i32,
) -> CreateEventRequest {
    CreateEventRequest {
        name: name.to_string(),
        organizer: "Test Organizer".to_string(),
        location: "Test City".to_string(),
        date,
        description: format!("Integration test event: {name}"),
        total_seats,
        category: category.to_string(),
        tags: Some(vec!["test".to_string()]),
    }
}

/// Insert a user the way the external auth service would
pub async fn seed_user(db: &TestDatabase, name: &str) -> User {
    UserRepository::new(db.pool.clone())
        .create(CreateUserRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        })
        .await
        .expect("Failed to seed user")
}

/// Insert an event with all seats available
pub async fn seed_event(
    db: &TestDatabase,
    name: &str,
    category: &str,
    date: DateTime<Utc>,
    total_seats: i32,
) -> Event {
    let request = event_request(name, category, date, total_seats);
    let category = EventCategory::from_str(category).expect("Invalid test category");

    EventRepository::new(db.pool.clone())
        .create(request, category)
        .await
        .expect("Failed to seed event")
}

/// Settings suitable for tests
pub fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.auth.jwt_secret = TEST_JWT_SECRET.to_string();
    settings
}

/// Service factory over the test pool
pub fn build_services(db: &TestDatabase) -> ServiceFactory {
    ServiceFactory::new(db.pool.clone(), &test_settings())
}

/// Full application state over the test pool
pub fn build_app_state(db: &TestDatabase) -> AppState {
    AppState::new(
        build_services(db),
        AuthKeys::new(TEST_JWT_SECRET),
        db.pool.clone(),
    )
}

/// Bearer token for a user id, signed with the test secret
pub fn auth_token(user_id: i64) -> String {
    let claims = Claims {
        sub: user_id,
        exp: (Utc::now() + chrono::Duration::hours(1)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .expect("Failed to sign test token")
}
