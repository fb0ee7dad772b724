//! Checkstudio - checkmark tile studio
//!
//! Command-line and HTTP front end for the `check-tiles` renderer.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
