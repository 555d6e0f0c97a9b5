// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-derived configuration and runtime options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 PulsePlan

//! Configuration module for the PulsePlan server
//!
//! All configuration comes from environment variables (with `.env` support);
//! there is no configuration file format.

/// Environment and server configuration
pub mod environment;

pub use environment::ServerConfig;
