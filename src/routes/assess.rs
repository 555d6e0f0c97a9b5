// ABOUTME: Assessment route handlers for profile submission and API discovery
// ABOUTME: Validates incoming profiles, runs the engine, and serializes the plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Assessment routes

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::engine;
use crate::errors::AppError;
use crate::models::{Plan, Profile};

/// API info payload served at the root
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: ApiEndpoints,
}

#[derive(Debug, Serialize)]
pub struct ApiEndpoints {
    #[serde(rename = "/assess")]
    pub assess: &'static str,
    #[serde(rename = "/health")]
    pub health: &'static str,
}

/// Assessment routes implementation
pub struct AssessRoutes;

impl AssessRoutes {
    /// Create the assessment routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new()
            .route("/", get(Self::handle_info))
            .route("/assess", post(Self::handle_assess))
    }

    async fn handle_info() -> Json<ApiInfo> {
        Json(ApiInfo {
            message: "PulsePlan Health Assessment API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints: ApiEndpoints {
                assess: "POST - Submit health information for assessment",
                health: "GET - Service health check",
            },
        })
    }

    /// Handle profile assessment
    ///
    /// Serde already rejects unrecognized enum values and malformed bodies;
    /// `validate()` covers the numeric range constraints. The engine runs
    /// only on validated input and any engine failure maps to a 500 with an
    /// opaque diagnostic.
    async fn handle_assess(Json(profile): Json<Profile>) -> Result<Response, AppError> {
        profile.validate().map_err(|e| {
            warn!(error = %e, "Rejected invalid profile");
            e
        })?;

        let plan: Plan = engine::evaluate(&profile).map_err(|e| {
            AppError::internal(format!("Error processing health assessment: {e}"))
        })?;

        info!(
            goal = ?profile.goal,
            bmi = plan.assessment.bmi,
            "Assessment completed"
        );

        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
