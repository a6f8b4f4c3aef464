mod common;

use chrono::Utc;
use edge_shortener::domain::entities::Click;
use edge_shortener::infrastructure::persistence::keys::link_key;

#[tokio::test]
async fn test_dashboard_lists_links_newest_first() {
    let (state, _rx, _store) = common::create_test_state();
    let first = common::create_test_link(&state, "https://first.example").await;
    let second = common::create_test_link(&state, "https://second.example").await;

    state
        .click_service
        .append(&first.code, Click::at(Utc::now()))
        .await
        .unwrap();

    let server = common::create_test_server(state);
    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    let html = response.text();

    let first_pos = html.find("https://first.example").unwrap();
    let second_pos = html.find("https://second.example").unwrap();
    assert!(second_pos < first_pos);
    assert!(html.contains(&format!("/stats/{}", second.code)));
    assert!(html.contains("Total Links"));
}

#[tokio::test]
async fn test_dashboard_skips_missing_record() {
    let (state, _rx, store) = common::create_test_state();
    let kept = common::create_test_link(&state, "https://kept.example").await;
    let gone = common::create_test_link(&state, "https://gone.example").await;

    store.remove(&link_key(&gone.code));

    let dashboard = state.stats_service.get_dashboard(100).await.unwrap();
    assert_eq!(dashboard.entries.len(), 1);
    assert_eq!(dashboard.entries[0].link.code, kept.code);

    let server = common::create_test_server(state);
    let html = server.get("/dashboard").await.text();
    assert!(html.contains("https://kept.example"));
    assert!(!html.contains("https://gone.example"));
}

#[tokio::test]
async fn test_dashboard_empty() {
    let (state, _rx, _store) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    assert!(response.text().contains("No URLs yet"));
}
