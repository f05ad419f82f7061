//! Integration tests for the accesslens API router, driven through
//! `tower::ServiceExt::oneshot` against the in-memory store.

use accesslens_api::{access_router, ApiState};
use accesslens_core::{AccessRecord, AccessType, Provider, RiskLevel, UserAccessProfile};
use accesslens_risk::RiskPolicy;
use accesslens_store_client::InMemoryAccessStore;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

fn record(provider: Provider, service: &str, resource: &str, access: AccessType) -> AccessRecord {
    AccessRecord {
        id: Uuid::new_v4(),
        provider,
        service: service.to_string(),
        resource_name: resource.to_string(),
        resource_type: None,
        access_type: access,
        is_privileged: false,
        mfa_required: true,
        account_id: None,
        region: None,
        description: None,
        last_used: None,
        risk_level: RiskLevel::Low,
    }
}

fn profile(email: &str, records: Vec<AccessRecord>) -> UserAccessProfile {
    UserAccessProfile {
        user_email: email.into(),
        user_name: email.split('@').next().unwrap_or(email).into(),
        is_service_account: false,
        department: None,
        records,
    }
}

/// Router over a seeded in-memory store.
fn app() -> Router {
    let store = InMemoryAccessStore::with_users(vec![
        profile(
            "alice@example.com",
            vec![
                record(Provider::Aws, "S3", "bucket-a", AccessType::Read),
                record(Provider::Gcp, "IAM", "role-x", AccessType::Admin),
                record(Provider::Aws, "IAM", "policy-y", AccessType::Admin),
            ],
        ),
        profile(
            "bob@example.com",
            vec![record(Provider::Aws, "S3", "bucket-b", AccessType::Read)],
        ),
    ]);
    access_router(ApiState::new(Arc::new(store), RiskPolicy::default()))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn count_nodes(graph: &serde_json::Value, kind: &str) -> usize {
    graph["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["type"] == kind)
        .count()
}

#[tokio::test]
async fn search_builds_layered_graph() {
    let (status, body) = get_json(app(), "/access/search/alice@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["user_email"], "alice@example.com");

    let graph = &body["graph"];
    assert_eq!(count_nodes(graph, "identity"), 1);
    assert_eq!(count_nodes(graph, "provider"), 2);
    assert_eq!(count_nodes(graph, "service"), 3);
    assert_eq!(count_nodes(graph, "resource"), 3);
}

#[tokio::test]
async fn search_applies_provider_filter() {
    let (status, body) =
        get_json(app(), "/access/search/alice@example.com?provider=aws").await;
    assert_eq!(status, StatusCode::OK);

    let graph = &body["graph"];
    assert_eq!(count_nodes(graph, "provider"), 1);
    assert_eq!(count_nodes(graph, "service"), 2);
    assert_eq!(count_nodes(graph, "resource"), 2);
}

#[tokio::test]
async fn search_all_filters_match_unfiltered_build() {
    // Same router both times: resource node ids derive from the
    // seeded record ids.
    let app = app();
    let (_, unfiltered) = get_json(app.clone(), "/access/search/alice@example.com").await;
    let (_, noop) = get_json(
        app,
        "/access/search/alice@example.com?provider=all&access_type=all",
    )
    .await;
    assert_eq!(unfiltered["graph"], noop["graph"]);
}

#[tokio::test]
async fn search_unknown_user_is_empty_not_error() {
    let (status, body) = get_json(app(), "/access/search/ghost@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["user"].is_null());
    assert_eq!(body["graph"]["nodes"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn paginated_listing_sorts_by_risk_desc() {
    let (status, body) = get_json(app(), "/users/paginated").await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    // alice carries cross-provider admin; bob is a reader.
    assert_eq!(users[0]["user_email"], "alice@example.com");
    assert_eq!(body["pagination"]["total_users"], 2);
}

#[tokio::test]
async fn paginated_listing_searches_email_substring() {
    let (status, body) = get_json(app(), "/users/paginated?search=bob").await;
    assert_eq!(status, StatusCode::OK);
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["user_email"], "bob@example.com");
}

#[tokio::test]
async fn paginated_listing_normalizes_bad_params() {
    let (status, body) =
        get_json(app(), "/users/paginated?page=0&page_size=9999&sort_by=nope").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["page_size"], 100);
}

#[tokio::test]
async fn risk_analysis_reports_cross_provider_admin() {
    let (status, body) = get_json(app(), "/risk-analysis/alice@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["admin_access_count"], 2);
    assert_eq!(body["cross_provider_admin"], true);
    assert!(body["risk_score"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn risk_analysis_unknown_user_is_typed_404() {
    let (status, body) = get_json(app(), "/risk-analysis/ghost@example.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn overview_distribution_sums_to_cohort() {
    let (status, body) = get_json(app(), "/analytics/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_users"], 2);
    assert_eq!(body["total_resources"], 4);
    let distribution = body["risk_distribution"].as_object().unwrap();
    let total: u64 = distribution.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total, 2);
    assert_eq!(body["cross_provider_admin_count"], 1);
}

#[tokio::test]
async fn provider_dashboard_rejects_unknown_provider() {
    let (status, body) = get_json(app(), "/analytics/dashboard/heroku").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_query");
}

#[tokio::test]
async fn provider_dashboard_returns_aggregates() {
    let (status, body) = get_json(app(), "/analytics/dashboard/aws").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "aws");
    assert_eq!(body["total_users"], 2);
    assert_eq!(body["service_breakdown"]["S3"], 2);
}

#[tokio::test]
async fn provider_statistics_counts_users_once_per_provider() {
    let (status, body) = get_json(app(), "/providers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_users"], 2);
    assert_eq!(body["providers"]["aws"]["users"], 2);
    assert_eq!(body["providers"]["aws"]["resources"], 3);
    assert_eq!(body["providers"]["gcp"]["users"], 1);
}

#[tokio::test]
async fn import_writes_and_reports_count() {
    let app = app();
    let payload = serde_json::json!({
        "users": [{
            "user_email": "dave@example.com",
            "user_name": "Dave",
            "records": []
        }]
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/import")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let receipt: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(receipt["imported_users"], 1);

    let (status, body) = get_json(app, "/access/search/dave@example.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["user_email"], "dave@example.com");
}

#[tokio::test]
async fn empty_import_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/import")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"users": []}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
