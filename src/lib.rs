//! Video Scoring - web client
//!
//! Submit a creative brief, have the backend generate and score a video,
//! and review the results.
//!
//! This library provides:
//! - The Dioxus web client: route table, session-wide shared state, screens
//! - HTTP helpers for the scoring API
//! - A native host that serves the compiled client (`server` feature)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between the WASM client and native tests)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
