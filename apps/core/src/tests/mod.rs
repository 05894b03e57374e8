//! Test Module
//!
//! Comprehensive test suite for the MathBrain core.
//!
//! ## Test Categories
//! - `reasoner_tests`: parsing, classification, and per-solver behavior
//! - `engine_tests`: full pipeline contract and session-log properties

pub mod reasoner_tests;
