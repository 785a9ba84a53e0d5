//! Session cookie policy.
//!
//! The token's transport between browser and server. Policy is fixed and not
//! caller-configurable: `HttpOnly` keeps the token out of script reach,
//! `SameSite=Lax` blocks cross-site request forgery while allowing top-level
//! navigation, and `Secure` is relaxed outside production so plaintext-HTTP
//! development still works.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use time::OffsetDateTime;

use crate::config::env::RuntimeEnv;

/// Fixed cookie name carrying the session token.
pub const SESSION_COOKIE: &str = "auth-token";

/// Build the session cookie for a freshly minted token.
///
/// The cookie's `Expires` is the same absolute instant as the token's own
/// expiry, so browser-side and signature-side expiry agree.
pub fn session_cookie(token: String, expires_at: OffsetDateTime, env: RuntimeEnv) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(env.is_production())
        .expires(expires_at)
        .finish()
}

/// Build the cookie that deletes the session (logout path).
pub fn removal_cookie(env: RuntimeEnv) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), OffsetDateTime::UNIX_EPOCH, env);
    cookie.make_removal();
    cookie
}

/// Read the raw session token from the request, if any.
///
/// An empty-valued cookie is "no credential", not a malformed token: both
/// it and a missing cookie yield `None` without touching verification.
pub fn session_token_from_request(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::{Cookie, Expiration, SameSite};
    use actix_web::test::TestRequest;
    use time::{Duration, OffsetDateTime};

    use super::{removal_cookie, session_cookie, session_token_from_request, SESSION_COOKIE};
    use crate::config::env::RuntimeEnv;

    #[test]
    fn cookie_policy_is_fixed() {
        let expires_at = OffsetDateTime::now_utc() + Duration::days(7);
        let cookie = session_cookie("tok".to_string(), expires_at, RuntimeEnv::Development);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.expires(), Some(Expiration::DateTime(expires_at)));
    }

    #[test]
    fn secure_flag_follows_environment() {
        let expires_at = OffsetDateTime::now_utc() + Duration::days(7);

        let dev = session_cookie("tok".to_string(), expires_at, RuntimeEnv::Development);
        assert_eq!(dev.secure(), Some(false));

        let prod = session_cookie("tok".to_string(), expires_at, RuntimeEnv::Production);
        assert_eq!(prod.secure(), Some(true));
    }

    #[test]
    fn removal_cookie_expires_the_session() {
        let cookie = removal_cookie(RuntimeEnv::Development);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        match cookie.expires() {
            Some(Expiration::DateTime(dt)) => assert!(dt < OffsetDateTime::now_utc()),
            other => panic!("removal cookie should expire in the past, got {other:?}"),
        }
    }

    #[test]
    fn absent_and_empty_cookies_read_as_no_credential() {
        let no_cookie = TestRequest::default().to_http_request();
        assert_eq!(session_token_from_request(&no_cookie), None);

        let empty = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, ""))
            .to_http_request();
        assert_eq!(session_token_from_request(&empty), None);

        let present = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "raw-token"))
            .to_http_request();
        assert_eq!(session_token_from_request(&present), Some("raw-token".to_string()));
    }
}
