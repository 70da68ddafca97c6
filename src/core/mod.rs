//! Shared core types used across the compositor.
//!
//! This module is intentionally host-agnostic and does not depend on any
//! particular UI or surface implementation.

pub mod errors;

pub use errors::CoreError;
