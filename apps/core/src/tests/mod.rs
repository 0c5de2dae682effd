//! Test Module
//!
//! Scenario suites that exercise the engine end to end.
//!
//! ## Test Categories
//! - `engine_tests`: scenarios, signal interplay, cache and determinism laws
//! - `config_tests`: environment-driven configuration

pub mod config_tests;
