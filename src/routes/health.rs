// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness endpoints for monitoring infrastructure and load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Health check routes for service monitoring
//!
//! The timestamp here is the only time-dependent output the server
//! produces; assessment responses are fully deterministic.

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn health_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "status": "healthy",
                "timestamp": chrono::Utc::now().to_rfc3339()
            }))
        }

        Router::new().route("/health", get(health_handler))
    }
}
