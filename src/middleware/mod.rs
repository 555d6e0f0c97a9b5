// ABOUTME: HTTP middleware for the PulsePlan server
// ABOUTME: Currently CORS configuration for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

/// CORS layer configuration
pub mod cors;

pub use cors::setup_cors;
