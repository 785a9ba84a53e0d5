//! Deployment environment detection.
//!
//! The environment is resolved once at startup and injected explicitly
//! wherever policy depends on it (the session cookie's `Secure` flag),
//! rather than read ad hoc from process globals at each call site.

/// Runtime deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Development,
    Production,
}

impl RuntimeEnv {
    /// Resolve the environment from `APP_ENV`.
    ///
    /// Anything other than `production` (case-insensitive) is treated as
    /// development, so local plaintext-HTTP setups work out of the box.
    pub fn from_env() -> Self {
        match std::env::var("APP_ENV") {
            Ok(v) if v.eq_ignore_ascii_case("production") => RuntimeEnv::Production,
            _ => RuntimeEnv::Development,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, RuntimeEnv::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_is_production() {
        assert!(RuntimeEnv::Production.is_production());
        assert!(!RuntimeEnv::Development.is_production());
    }

    #[test]
    #[serial_test::serial]
    fn from_env_defaults_to_development() {
        std::env::remove_var("APP_ENV");
        assert_eq!(RuntimeEnv::from_env(), RuntimeEnv::Development);

        std::env::set_var("APP_ENV", "production");
        assert_eq!(RuntimeEnv::from_env(), RuntimeEnv::Production);

        std::env::set_var("APP_ENV", "staging");
        assert_eq!(RuntimeEnv::from_env(), RuntimeEnv::Development);

        std::env::remove_var("APP_ENV");
    }
}
