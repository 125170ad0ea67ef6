//! Shared test utilities
//!
//! Fixtures that pin the clock so tests over users and reports are
//! deterministic.

#[cfg(any(test, debug_assertions))]
pub mod fixtures;
