//! Common utilities for the Sprig tree builder.
//!
//! This crate provides shared infrastructure used by all Sprig components:
//! - **Warning System** - colored terminal output for degraded selector input

pub mod warning;
