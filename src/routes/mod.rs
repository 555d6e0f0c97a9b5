// ABOUTME: HTTP route definitions for the PulsePlan assessment API
// ABOUTME: Composes assessment, info, and health routers into one application router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! HTTP routes
//!
//! The route layer is a thin adapter: it validates the submitted profile,
//! invokes the engine, and serializes the plan. All domain behavior lives
//! in [`crate::engine`].

/// Assessment and API-info endpoints
pub mod assess;

/// Health check endpoints for monitoring
pub mod health;

use axum::Router;

use crate::config::ServerConfig;
use crate::middleware::setup_cors;

/// Build the complete application router with middleware applied
#[must_use]
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .merge(assess::AssessRoutes::routes())
        .merge(health::HealthRoutes::routes())
        .layer(setup_cors(config))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
