//! Integration tests for command dispatch.
//!
//! - Priority between item overrides, registry handlers and the fallback
//! - Registration and synonym merging
//! - Fault isolation and batches

mod dispatch_tests;
