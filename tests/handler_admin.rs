mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::MultipartForm;
use chrono::Datelike;
use course_directory::routes::api_router;
use course_directory::state::AppState;
use serde_json::{Value, json};

use common::FakeStore;

fn setup() -> (TestServer, AppState, Arc<FakeStore>) {
    let store = Arc::new(FakeStore::default());
    let state = common::create_test_state(store.clone());
    let server = TestServer::new(api_router(state.clone())).unwrap();
    (server, state, store)
}

fn bearer(state: &AppState) -> String {
    format!("Bearer {}", common::admin_token(state))
}

#[tokio::test]
async fn test_admin_routes_require_bearer() {
    let (server, _state, store) = setup();

    for path in [
        "/v1/admin/editcourse",
        "/v1/admin/edituniversity",
        "/v1/admin/editcontent",
        "/v1/admin/editarticle",
    ] {
        let response = server.post(path).form(&[("id", "1")]).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.header("www-authenticate"), "Bearer");
    }

    assert!(store.inserted_courses.lock().unwrap().is_empty());
    assert!(store.inserted_universities.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_rejects_foreign_token() {
    let (server, _state, store) = setup();

    let response = server
        .post("/v1/admin/editcourse")
        .add_header("Authorization", "Bearer not.a.jwt")
        .form(&[("id", "1")])
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(store.inserted_courses.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_course_from_urlencoded_form() {
    let (server, state, store) = setup();

    let response = server
        .post("/v1/admin/editcourse")
        .add_header("Authorization", bearer(&state))
        .form(&[
            ("id", "42"),
            ("universityId", "3"),
            ("courseTypes", "2"),
            ("nameEn", "Computational Mechanics"),
            ("subjects", "Engineering"),
            ("isElearning", "false"),
            ("isFromDaad", "t"),
        ])
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"response": {"ok": true}}));

    let inserted = store.inserted_courses.lock().unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].id, 42);
    assert_eq!(inserted[0].university_id, 3);
    assert_eq!(inserted[0].course_type, 2);
    assert_eq!(inserted[0].subject, "Engineering");
    assert!(inserted[0].is_from_daad);
    assert!(!inserted[0].is_complete_online_possible);
}

#[tokio::test]
async fn test_edit_university_from_multipart_form() {
    let (server, state, store) = setup();

    let form = MultipartForm::new()
        .add_text("id", "7")
        .add_text("nameEn", "Technical University of Munich")
        .add_text("city", "Munich")
        .add_text("isTu9", "1")
        .add_text("qsRanking", "37");

    let response = server
        .post("/v1/admin/edituniversity")
        .add_header("Authorization", bearer(&state))
        .multipart(form)
        .await;

    response.assert_status_ok();

    let inserted = store.inserted_universities.lock().unwrap();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].id, 7);
    assert_eq!(inserted[0].city, "Munich");
    assert!(inserted[0].is_tu9);
    assert_eq!(inserted[0].qs_ranking, 37);
}

#[tokio::test]
async fn test_edit_content_parses_published_date() {
    let (server, state, store) = setup();

    let response = server
        .post("/v1/admin/editcontent")
        .add_header("Authorization", bearer(&state))
        .form(&[
            ("id", "100"),
            ("title", "My TUM admission"),
            ("publishedAt", "2021-07-15"),
            ("source", "Medium"),
            ("authorBsSchoolShort", "NTHU"),
            ("courseType", "2"),
        ])
        .await;

    response.assert_status_ok();

    let inserted = store.inserted_contents.lock().unwrap();
    assert_eq!(inserted[0].id, 100);
    assert_eq!(inserted[0].published_at, common::date(2021, 7, 15));
    assert_eq!(inserted[0].author_bs_school_short, "NTHU");
    assert_eq!(inserted[0].author_goethe, "");
}

#[tokio::test]
async fn test_edit_content_without_date_uses_year_one() {
    let (server, state, store) = setup();

    server
        .post("/v1/admin/editcontent")
        .add_header("Authorization", bearer(&state))
        .form(&[("id", "101"), ("title", "Undated")])
        .await
        .assert_status_ok();

    let inserted = store.inserted_contents.lock().unwrap();
    assert_eq!(inserted[0].published_at.year(), 1);
}

#[tokio::test]
async fn test_edit_content_malformed_date_is_rejected() {
    let (server, state, store) = setup();

    let response = server
        .post("/v1/admin/editcontent")
        .add_header("Authorization", bearer(&state))
        .form(&[("id", "102"), ("publishedAt", "15.07.2021")])
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["details"]["field"],
        "publishedAt"
    );
    assert!(store.inserted_contents.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_edit_article_links_content_to_course() {
    let (server, state, store) = setup();

    server
        .post("/v1/admin/editarticle")
        .add_header("Authorization", bearer(&state))
        .form(&[
            ("id", "100"),
            ("courseId", "42"),
            ("result", "admitted"),
            ("isDecision", "TRUE"),
        ])
        .await
        .assert_status_ok();

    let inserted = store.inserted_associations.lock().unwrap();
    assert_eq!(inserted[0].article_id, 100);
    assert_eq!(inserted[0].course_id, 42);
    assert_eq!(inserted[0].result, "admitted");
    assert!(inserted[0].is_decision);
}

#[tokio::test]
async fn test_edit_with_malformed_number_is_rejected() {
    let (server, state, store) = setup();

    let response = server
        .post("/v1/admin/editarticle")
        .add_header("Authorization", bearer(&state))
        .form(&[("id", "abc"), ("courseId", "42")])
        .await;

    response.assert_status_bad_request();
    assert!(store.inserted_associations.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_store_rejection_is_internal_error() {
    let store = Arc::new(FakeStore {
        failing: true,
        ..Default::default()
    });
    let state = common::create_test_state(store);
    let server = TestServer::new(api_router(state.clone())).unwrap();

    let response = server
        .post("/v1/admin/editcourse")
        .add_header("Authorization", bearer(&state))
        .form(&[("id", "1")])
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json::<Value>()["error"]["message"], "Database error");
}
