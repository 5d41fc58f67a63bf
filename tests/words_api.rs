mod common;

use axum::http::StatusCode;
use common::{delete, get, post, test_app};
use serde_json::json;

#[tokio::test]
async fn create_and_read_word() {
    let app = test_app().await;
    let payload = json!({
        "term": "apple",
        "meaning": "a fruit",
        "example": "An apple a day keeps the doctor away.",
        "part_of_speech": "noun",
    });

    let (status, created) = post(&app, "/words", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["id"].is_i64());
    assert!(created["created_at"].is_string());
    for field in ["term", "meaning", "example", "part_of_speech"] {
        assert_eq!(created[field], payload[field], "{} echoed back", field);
    }

    let (status, words) = get(&app, "/words").await;
    assert_eq!(status, StatusCode::OK);
    let words = words.as_array().expect("list is a JSON array");
    assert_eq!(words.len(), 1);
    assert_eq!(words[0], created);

    let (status, fetched) = get(&app, &format!("/words/{}", created["id"])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_word_then_missing() {
    let app = test_app().await;
    let payload = json!({ "term": "test", "meaning": "to try", "example": null, "part_of_speech": null });
    let (_, created) = post(&app, "/words", payload).await;
    let uri = format!("/words/{}", created["id"]);

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "deleted": true }));

    let (status, body) = get(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Word not found" }));

    let (status, body) = delete(&app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Word not found" }));
}

#[tokio::test]
async fn reading_missing_word_has_no_side_effect() {
    let app = test_app().await;
    let (_, created) = post(&app, "/words", json!({ "term": "keep", "meaning": "to hold" })).await;

    let (status, body) = get(&app, "/words/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Word not found");

    let (_, words) = get(&app, "/words").await;
    assert_eq!(words, json!([created]));
}

#[tokio::test]
async fn deleting_unknown_id_is_404() {
    let app = test_app().await;
    let (status, body) = delete(&app, "/words/12345").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Word not found" }));
}

#[tokio::test]
async fn omitted_optional_fields_are_null() {
    let app = test_app().await;
    let (status, created) = post(&app, "/words", json!({ "term": "run", "meaning": "to move fast" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(created["example"].is_null());
    assert!(created["part_of_speech"].is_null());
    assert_eq!(created["term"], "run");
}

#[tokio::test]
async fn pagination_with_skip_and_limit() {
    let app = test_app().await;
    let terms = ["alpha", "beta", "gamma", "delta", "epsilon"];
    for term in terms {
        let (status, _) = post(&app, "/words", json!({ "term": term, "meaning": "letter" })).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, all) = get(&app, "/words").await;
    assert_eq!(all.as_array().unwrap().len(), terms.len());

    let (status, page) = get(&app, "/words?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    let page: Vec<&str> = page.as_array().unwrap().iter().map(|w| w["term"].as_str().unwrap()).collect();
    assert_eq!(page, ["alpha", "beta"]);

    let (_, page) = get(&app, "/words?skip=2").await;
    let page: Vec<&str> = page.as_array().unwrap().iter().map(|w| w["term"].as_str().unwrap()).collect();
    assert_eq!(page, ["gamma", "delta", "epsilon"]);

    let (_, page) = get(&app, "/words?skip=1&limit=2").await;
    let page: Vec<&str> = page.as_array().unwrap().iter().map(|w| w["term"].as_str().unwrap()).collect();
    assert_eq!(page, ["beta", "gamma"]);

    let (_, page) = get(&app, "/words?skip=10").await;
    assert_eq!(page, json!([]));
}

#[tokio::test]
async fn malformed_requests_are_rejected() {
    let app = test_app().await;

    let (status, _) = post(&app, "/words", json!({ "term": "no meaning" })).await;
    assert!(status.is_client_error(), "missing meaning gave {}", status);

    let (status, _) = post(&app, "/words", json!({ "term": 7, "meaning": "number" })).await;
    assert!(status.is_client_error(), "numeric term gave {}", status);

    let (status, _) = get(&app, "/words/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/words?skip=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, words) = get(&app, "/words").await;
    assert_eq!(words, json!([]));
}
