// ABOUTME: Integration tests for the HTTP routes using in-process axum requests
// ABOUTME: Covers the assess happy path, validation failures, and health/info endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use pulseplan::config::environment::{CorsConfig, ServerConfig};
use pulseplan::routes;

fn test_router() -> Router {
    let config = ServerConfig {
        http_port: 0,
        environment: "test".into(),
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    };
    routes::router(&config)
}

fn assess_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/assess")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_profile_json() -> String {
    serde_json::json!({
        "name": "Alex",
        "age": 30,
        "gender": "male",
        "height": 175.0,
        "weight": 70.0,
        "activity_level": "sedentary",
        "goal": "lose_weight",
        "dietary_preference": "none",
        "medical_conditions": []
    })
    .to_string()
}

#[tokio::test]
async fn test_assess_happy_path() {
    let response = test_router()
        .oneshot(assess_request(&valid_profile_json()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let plan = body_json(response).await;

    assert_eq!(plan["assessment"]["bmi"], 22.86);
    assert_eq!(plan["assessment"]["bmi_category"], "Normal weight");
    assert_eq!(plan["assessment"]["bmr"], 1648.75);
    assert_eq!(plan["assessment"]["daily_calories"], 1478.5);
    assert_eq!(plan["workout_plan"].as_array().unwrap().len(), 7);
    assert_eq!(plan["meal_suggestions"].as_array().unwrap().len(), 4);
    assert_eq!(plan["lifestyle_tips"].as_array().unwrap().len(), 10);
    assert_eq!(plan["user_info"]["name"], "Alex");
    assert!(plan["weekly_goals"]["weight"].is_string());
    assert!(plan["weekly_goals"].get("fitness").is_none());
}

#[tokio::test]
async fn test_assess_rejects_out_of_range_age() {
    let body = serde_json::json!({
        "name": "Alex",
        "age": 150,
        "gender": "male",
        "height": 175.0,
        "weight": 70.0,
        "activity_level": "sedentary",
        "goal": "maintain"
    })
    .to_string();

    let response = test_router().oneshot(assess_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "VALUE_OUT_OF_RANGE");
    assert!(error["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Age"));
}

#[tokio::test]
async fn test_assess_rejects_blank_name() {
    let body = serde_json::json!({
        "name": "  ",
        "age": 25,
        "gender": "female",
        "height": 160.0,
        "weight": 55.0,
        "activity_level": "very_active",
        "goal": "improve_fitness"
    })
    .to_string();

    let response = test_router().oneshot(assess_request(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["error"]["code"], "MISSING_REQUIRED_FIELD");
}

#[tokio::test]
async fn test_assess_rejects_unknown_enum_value() {
    let body = serde_json::json!({
        "name": "Alex",
        "age": 30,
        "gender": "male",
        "height": 175.0,
        "weight": 70.0,
        "activity_level": "couch_potato",
        "goal": "maintain"
    })
    .to_string();

    let response = test_router().oneshot(assess_request(&body)).await.unwrap();

    // Serde rejection surfaces through axum's Json extractor
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_assess_is_deterministic_over_http() {
    let first = test_router()
        .oneshot(assess_request(&valid_profile_json()))
        .await
        .unwrap();
    let second = test_router()
        .oneshot(assess_request(&valid_profile_json()))
        .await
        .unwrap();

    assert_eq!(body_json(first).await, body_json(second).await);
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert_eq!(payload["status"], "healthy");
    assert!(payload["timestamp"].is_string());
}

#[tokio::test]
async fn test_info_endpoint() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload = body_json(response).await;
    assert!(payload["message"]
        .as_str()
        .unwrap()
        .contains("Health Assessment"));
    assert!(payload["endpoints"]["/assess"].is_string());
}

#[tokio::test]
async fn test_cors_preflight_allowed() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/assess")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
