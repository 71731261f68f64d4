//! Common utilities for the Wallaby renderer.
//!
//! This crate provides shared infrastructure used by all renderer components:
//! - **Warning System** - colored terminal output for malformed or unsupported input

pub mod warning;
