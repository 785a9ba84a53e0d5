//! Shared helpers for integration tests.
#![allow(dead_code)]

use backend::{AppState, RuntimeEnv, SecurityConfig};

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

/// Application state for route-level tests: fixed secret, development
/// cookie policy.
pub fn test_state() -> AppState {
    AppState::new(SecurityConfig::new(TEST_SECRET), RuntimeEnv::Development)
}

#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
