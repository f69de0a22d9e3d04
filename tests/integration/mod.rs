//! Integration tests

mod gating_tests;
mod lifecycle_tests;
