//! Mock platform implementation for testing.
//!
//! This module provides `MockPlatform` and pre-built scenarios for testing
//! the sampler and panels without touching the real host.

mod platform;
mod scenarios;

pub use platform::MockPlatform;
