// End to end tests against the full router: every request goes through the
// same routes, layers and in-memory store the binary serves.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::shell::http::router;
use crate::shell::state::AppState;

struct TestApp {
    event_store: Arc<InMemoryEventStore>,
    router: Router,
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn create(&self, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::post("/events")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn list(&self) -> Value {
        let (status, json) = self
            .send(Request::get("/events").body(Body::empty()).unwrap())
            .await;
        assert_eq!(status, StatusCode::OK);
        json
    }

    async fn archive(&self, id: u64) -> (StatusCode, Value) {
        self.send(
            Request::put(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    async fn delete(&self, id: u64) -> (StatusCode, Value) {
        self.send(
            Request::delete(format!("/events/{id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }
}

#[fixture]
fn app() -> TestApp {
    let event_store = Arc::new(InMemoryEventStore::new());
    TestApp {
        router: router(AppState::new(event_store.clone())),
        event_store,
    }
}

#[rstest]
#[tokio::test]
async fn it_should_round_trip_a_created_event(app: TestApp) {
    let (status, created) = app
        .create(json!({
            "title": " Anniversary dinner ",
            "date": "2025-02-14",
            "time": "20:00",
            "notes": "book a table"
        }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["title"], "Anniversary dinner");
    assert_eq!(created["date"], "2025-02-14");
    assert_eq!(created["time"], "20:00");
    assert_eq!(created["notes"], "book a table");
    assert_eq!(created["category"], "Personal");
    assert_eq!(app.list().await, json!([created]));
}

#[rstest]
#[tokio::test]
async fn it_should_list_the_earliest_event_first(app: TestApp) {
    app.create(json!({"title": "Later", "date": "2025-01-02", "time": "09:00"}))
        .await;
    app.create(json!({"title": "Sooner", "date": "2025-01-01", "time": "10:00"}))
        .await;

    let listed = app.list().await;
    assert_eq!(listed[0]["date"], "2025-01-01");
    assert_eq!(listed[1]["date"], "2025-01-02");
}

#[rstest]
#[tokio::test]
async fn it_should_reject_invalid_input_without_storing_anything(app: TestApp) {
    for body in [
        json!({"title": "", "date": "2025-01-01", "time": "10:00"}),
        json!({"date": "2025-01-01", "time": "10:00"}),
        json!({"title": "Gym", "date": "2025-01-01", "time": "25:00"}),
        json!({"title": "Gym", "date": "2025-01-01", "time": "9:5"}),
        json!({"title": "Gym", "date": "not a date", "time": "10:00"}),
        json!(["Client meeting", "2025-01-01", "10:00"]),
    ] {
        let (status, json) = app.create(body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].is_string());
    }

    assert!(app.event_store.is_empty().await);
    assert_eq!(app.list().await, json!([]));
}

#[rstest]
#[tokio::test]
async fn it_should_walk_an_event_through_archive_and_delete(app: TestApp) {
    let (_, created) = app
        .create(json!({"title": "Client call", "date": "2025-03-03", "time": "9:30"}))
        .await;
    let id = created["id"].as_u64().unwrap();

    let (status, json) = app.archive(id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["event"]["archived"], true);

    let (status, json) = app.archive(id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["event"]["archived"], true);
    assert_eq!(json["event"]["category"], "Work");

    let (status, _) = app.delete(id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(app.list().await, json!([]));

    assert_eq!(app.archive(id).await.0, StatusCode::NOT_FOUND);
    assert_eq!(app.delete(id).await.0, StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn it_should_leave_the_store_unchanged_when_archiving_an_unknown_id(app: TestApp) {
    app.create(json!({"title": "Gym", "date": "2025-01-01", "time": "07:00"}))
        .await;
    let before = app.list().await;

    let (status, json) = app.archive(42).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"error": "Event not found."}));
    assert_eq!(app.list().await, before);
}

#[rstest]
#[tokio::test]
async fn it_should_never_reuse_a_deleted_id(app: TestApp) {
    app.create(json!({"title": "One", "date": "2025-01-01", "time": "07:00"}))
        .await;
    let (_, second) = app
        .create(json!({"title": "Two", "date": "2025-01-01", "time": "08:00"}))
        .await;
    app.delete(second["id"].as_u64().unwrap()).await;

    let (_, third) = app
        .create(json!({"title": "Three", "date": "2025-01-01", "time": "09:00"}))
        .await;

    assert_eq!(third["id"], 3);
}
