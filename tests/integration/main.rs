//! Integration tests for the full pipeline
//!
//! Tests for event processing end to end, file round trips, and run
//! configuration.

mod config;
mod pipeline;
