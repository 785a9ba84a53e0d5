use crate::config::env::RuntimeEnv;

use super::security_config::SecurityConfig;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Security configuration including the session signing key
    pub security: SecurityConfig,
    /// Deployment environment, drives cookie transport policy
    pub env: RuntimeEnv,
}

impl AppState {
    /// Create a new AppState with the given security config and environment
    pub fn new(security: SecurityConfig, env: RuntimeEnv) -> Self {
        Self { security, env }
    }

    /// Create a test AppState with a fixed security config, development policy
    pub fn for_tests() -> Self {
        Self::new(SecurityConfig::default(), RuntimeEnv::Development)
    }

    /// Create a test AppState with the given security config
    pub fn for_tests_with_security(security: SecurityConfig) -> Self {
        Self::new(security, RuntimeEnv::Development)
    }
}
