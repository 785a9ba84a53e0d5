//! Stateless session tokens.
//!
//! A session is a self-contained HS256 JWT carrying the user's identity and
//! an absolute expiry. Possession of a validly-signed, unexpired token is
//! the whole proof of identity; there is no server-side session table.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::logging::security;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Sessions live for 7 days from the moment of issue.
pub const SESSION_TTL: Duration = Duration::days(7);

/// Claims embedded in a session token.
///
/// Decoding is deliberately permissive: identity fields missing from an
/// otherwise validly-signed token default to empty rather than failing the
/// decode, and `expiresAt` is optional. Expiry enforcement rides on the
/// standard `exp` claim, which is always required.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    /// Opaque user identifier. Not validated here; shape is the caller's concern.
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    /// Absolute expiry instant, mirrored by `exp`
    #[serde(rename = "expiresAt", default, with = "time::serde::rfc3339::option")]
    pub expires_at: Option<OffsetDateTime>,
    /// Issued-at (seconds since epoch)
    #[serde(default)]
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// A freshly minted session: the compact token plus what went into it.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: OffsetDateTime,
    pub claims: SessionClaims,
}

/// Mint an HS256 session token expiring `SESSION_TTL` after `now`.
///
/// Two calls with the same identity at different instants produce different
/// tokens (`iat`/`exp` differ). Signing failure is the one auth error that
/// propagates hard: login must not appear to succeed without a usable token.
pub fn mint_session_token(
    user_id: &str,
    email: &str,
    now: OffsetDateTime,
    security: &SecurityConfig,
) -> Result<IssuedSession, AppError> {
    let expires_at = now + SESSION_TTL;

    let claims = SessionClaims {
        user_id: user_id.to_string(),
        email: email.to_string(),
        expires_at: Some(expires_at),
        iat: now.unix_timestamp(),
        exp: expires_at.unix_timestamp(),
    };

    let token = encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

    Ok(IssuedSession {
        token,
        expires_at,
        claims,
    })
}

/// Verify a session token and return its claims, or `None`.
///
/// Every failure mode — malformed envelope, bad signature, wrong algorithm,
/// expired, empty string — collapses to `None` so callers cannot tell (and
/// cannot leak) why a credential was rejected. The reason is recorded on the
/// diagnostic log channel only.
pub fn verify_session_token(token: &str, security: &SecurityConfig) -> Option<SessionClaims> {
    // Pin the algorithm and check exp with zero leeway: a token one second
    // past its expiry is already invalid.
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = true;
    validation.leeway = 0;

    match decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    ) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            let reason = match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => "expired",
                jsonwebtoken::errors::ErrorKind::InvalidSignature => "invalid_signature",
                jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => "wrong_algorithm",
                _ => "malformed",
            };
            security::session_rejected(reason);
            None
        }
    }
}
