//! Integration tests for the waymark_parser crate.
//!
//! - Term resolution through the synonym table
//! - Stopword removal and command parsing

mod parsing_tests;
mod resolution_tests;
