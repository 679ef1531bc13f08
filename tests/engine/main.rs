//! Integration tests for Layer 2: Engine
//!
//! Tests for candidate matching, lepton identity, jet and tau attribution,
//! and filter extraction.

mod attribution;
mod filters;
mod matching;
