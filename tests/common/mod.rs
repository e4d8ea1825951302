#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use link_shortener::domain::entities::NewLink;
use link_shortener::infrastructure::persistence::MemoryStore;
use link_shortener::routes::app_router;
use link_shortener::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:8000";

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), BASE_URL);
    (state, store)
}

/// Full application router over a fresh store.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    let server = TestServer::new(app).unwrap();
    (server, store)
}

pub fn create_test_link(store: &MemoryStore, code: &str, url: &str) {
    let now = Utc::now();
    store
        .insert(NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
            created_at: now,
            expires_at: now + Duration::minutes(30),
        })
        .unwrap();
}

pub fn create_expired_link(store: &MemoryStore, code: &str, url: &str) {
    let now = Utc::now();
    store
        .insert(NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
            created_at: now - Duration::hours(1),
            expires_at: now - Duration::minutes(30),
        })
        .unwrap();
}
