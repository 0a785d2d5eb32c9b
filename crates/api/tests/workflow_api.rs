//! Integration tests for the `/api/v1/workflow` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Status lookup table
// ---------------------------------------------------------------------------

#[tokio::test]
async fn statuses_are_listed_in_lifecycle_order() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/workflow/statuses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 8);

    let statuses: Vec<&str> = data.iter().map(|s| s["status"].as_str().unwrap()).collect();
    assert_eq!(
        statuses,
        vec![
            "pre-alert",
            "created",
            "docs-pending",
            "verification-pending",
            "approval-pending",
            "customs-submitted",
            "cleared",
            "delivered",
        ]
    );

    let indices: Vec<u64> = data
        .iter()
        .map(|s| s["step_index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![0, 1, 1, 2, 5, 6, 7, 8]);

    assert_eq!(data[2]["label"], "Documents Pending");
    assert_eq!(data[2]["badge_class"], "status-pending");
    assert_eq!(data[5]["card_variant"], "purple");
}

#[tokio::test]
async fn timeline_lists_eleven_steps() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/workflow/timeline").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 11);
    assert_eq!(data[0]["name"], "Pre-Alert");
    assert_eq!(data[3]["name"], "Entry");
    assert_eq!(data[10]["name"], "Closed");
    assert_eq!(data[10]["index"], 10);
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[tokio::test]
async fn verification_pending_progress() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/workflow/statuses/verification-pending/progress").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["recognized"], true);
    assert_eq!(data["label"], "Verification Pending");
    assert_eq!(data["step_index"], 2);
    assert_eq!(data["summary"]["completed_steps"], 2);
    assert_eq!(data["summary"]["total_steps"], 11);

    let states: Vec<&str> = data["timeline"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["state"].as_str().unwrap())
        .collect();
    assert_eq!(&states[..2], &["completed", "completed"]);
    assert_eq!(states[2], "current");
    assert!(states[3..].iter().all(|s| *s == "pending"));
}

#[tokio::test]
async fn unknown_status_degrades_to_step_zero() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/workflow/statuses/on-hold/progress").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["status"], "on-hold");
    assert_eq!(data["recognized"], false);
    assert!(data["label"].is_null());
    assert_eq!(data["step_index"], 0);
    assert_eq!(data["timeline"][0]["state"], "current");
    assert_eq!(data["timeline"][1]["state"], "pending");
}

#[tokio::test]
async fn created_and_docs_pending_share_progress() {
    let created = body_json(
        get(
            common::build_test_app(),
            "/api/v1/workflow/statuses/created/progress",
        )
        .await,
    )
    .await;
    let docs = body_json(
        get(
            common::build_test_app(),
            "/api/v1/workflow/statuses/docs-pending/progress",
        )
        .await,
    )
    .await;

    assert_eq!(created["data"]["step_index"], 1);
    assert_eq!(created["data"]["timeline"], docs["data"]["timeline"]);
    assert_ne!(created["data"]["label"], docs["data"]["label"]);
}
