//! End-to-end test framework for Golang Hub
//!
//! Utilities for running the actual CLI binary and checking its output.

pub mod assertions;

pub use assertions::*;
pub use common::*;
