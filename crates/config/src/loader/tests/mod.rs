//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `temp_env`
//!   so variables never leak between tests.

mod env_tests;
