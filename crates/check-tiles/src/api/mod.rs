//! Public API for the check-tiles crate.
//!
//! This module provides the high-level API: [`CheckRenderer`] builder and
//! [`RenderError`] unified error type.

mod builder;
mod error;

pub use builder::CheckRenderer;
pub use error::RenderError;
