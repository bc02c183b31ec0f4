//! Integration tests for portal-access-rs
//!
//! These tests drive the claims loader against a stubbed backend and
//! verify resolver behavior over loaded claims.

pub mod loader_tests;
pub mod resolution_tests;
