//! Test fixture utilities for integration tests.

pub mod harness;
