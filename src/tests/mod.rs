//! Test modules for gosh.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Completion source loading against real directories
//! - Shared fixtures and proptest strategies


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{option_strategy, TestFixture};
