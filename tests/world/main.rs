//! Integration tests for the world graph.
//!
//! - Two-phase construction with forward references and cycles
//! - Movement and failed moves
//! - Item containment across rooms and inventories

mod containment_tests;
mod movement_tests;
