#![allow(dead_code)]

use axum_test::TestServer;
use edge_shortener::domain::click_event::ClickEvent;
use edge_shortener::domain::entities::Link;
use edge_shortener::infrastructure::store::MemoryStore;
use edge_shortener::routes::router;
use edge_shortener::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const HOST: &str = "sho.rt";

pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickEvent>, Arc<MemoryStore>) {
    create_test_state_with_queue(100)
}

pub fn create_test_state_with_queue(
    capacity: usize,
) -> (AppState, mpsc::Receiver<ClickEvent>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let (tx, rx) = mpsc::channel(capacity);

    let state = AppState::new(store.clone(), tx, 1000, false);

    (state, rx, store)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

pub async fn create_test_link(state: &AppState, url: &str) -> Link {
    state.link_service.create_short_link(url).await.unwrap()
}
