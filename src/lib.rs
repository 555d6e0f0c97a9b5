// ABOUTME: Main library entry point for the PulsePlan health assessment API
// ABOUTME: Exposes the assessment engine, HTTP routes, and server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

#![deny(unsafe_code)]

//! # PulsePlan
//!
//! A stateless, rule-based health assessment service. A caller submits a
//! biometric and lifestyle profile and receives a deterministic personalized
//! plan: calorie targets, macronutrient split, a weekly workout schedule,
//! meal suggestions, lifestyle tips, and weekly goals.
//!
//! ## Architecture
//!
//! - **Engine**: pure calculators (BMI, Mifflin-St Jeor BMR, TDEE, macros)
//!   feeding rule selectors (risks, recommendations, workouts, meals) and a
//!   plan assembler. No I/O, no shared state, identical input yields
//!   identical output.
//! - **Routes**: a thin axum adapter that validates the incoming profile,
//!   invokes the engine, and serializes the plan.
//! - **Config/Logging**: environment-driven server configuration and
//!   structured `tracing` output.
//!
//! ## Example
//!
//! ```rust
//! use pulseplan::engine;
//! use pulseplan::models::{ActivityLevel, Gender, Goal, Profile};
//!
//! let profile = Profile {
//!     name: "Alex".into(),
//!     age: 30,
//!     gender: Gender::Male,
//!     height: 175.0,
//!     weight: 70.0,
//!     activity_level: ActivityLevel::ModeratelyActive,
//!     goal: Goal::ImproveFitness,
//!     dietary_preference: None,
//!     medical_conditions: None,
//! };
//! profile.validate().unwrap();
//! let plan = engine::evaluate(&profile).unwrap();
//! assert_eq!(plan.workout_plan.len(), 7);
//! ```

/// Environment-driven server configuration
pub mod config;

/// The assessment engine: calculators, rule selectors, and plan assembler
pub mod engine;

/// Unified error handling with `HTTP` response mapping
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// `HTTP` middleware (CORS)
pub mod middleware;

/// Core data models: profile, assessment, and plan value types
pub mod models;

/// `HTTP` routes for the assessment API
pub mod routes;
