use jsonwebtoken::Algorithm;

/// Configuration for session token signing and verification.
///
/// Loaded once at process start; rotating the secret invalidates every
/// outstanding session.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Symmetric secret used to sign and verify session tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (fixed to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given signing secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
