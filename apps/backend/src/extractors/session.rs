//! Per-request session extraction.
//!
//! `get_session` is the one identity-check surface the rest of the
//! application uses: retrieve the cookie, verify the token, or yield `None`.
//! A missing cookie and a rejected token are observably identical.

use std::convert::Infallible;
use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use time::OffsetDateTime;

use crate::auth::cookie::session_token_from_request;
use crate::auth::session::{verify_session_token, SessionClaims};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Resolve the current session from the request's cookie, if any.
///
/// Never fails. An absent or empty cookie short-circuits before any
/// verification work; any verification failure collapses to `None`.
pub fn get_session(req: &HttpRequest) -> Option<SessionClaims> {
    let token = session_token_from_request(req)?;

    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::warn!("AppState not available; treating request as unauthenticated");
        return None;
    };

    verify_session_token(&token, &state.security)
}

/// Infallible session extractor for routes that render either way.
///
/// Carries `Some(claims)` when a valid session rode in on the cookie and
/// `None` otherwise; extraction itself never rejects a request.
#[derive(Debug, Clone)]
pub struct MaybeSession(pub Option<SessionClaims>);

impl FromRequest for MaybeSession {
    type Error = Infallible;
    type Future = Ready<Result<Self, Infallible>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(MaybeSession(get_session(req))))
    }
}

/// Session extractor for protected routes: 401 when unauthenticated.
///
/// The error is the single collapsed `Unauthorized`; expired and tampered
/// tokens are not distinguished from a missing cookie.
#[derive(Debug, Clone)]
pub struct CurrentSession {
    pub user_id: String,
    pub email: String,
    pub expires_at: Option<OffsetDateTime>,
}

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Ready<Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match get_session(req) {
            Some(claims) => Ok(CurrentSession {
                user_id: claims.user_id,
                email: claims.email,
                expires_at: claims.expires_at,
            }),
            None => Err(AppError::unauthorized()),
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;
    use actix_web::web;
    use time::OffsetDateTime;

    use super::get_session;
    use crate::auth::cookie::SESSION_COOKIE;
    use crate::auth::session::mint_session_token;
    use crate::state::app_state::AppState;

    #[test]
    fn no_cookie_short_circuits_to_none() {
        // No AppState registered either: if retrieval didn't short-circuit
        // before verification, this would log a missing-state warning.
        let req = TestRequest::default().to_http_request();
        assert!(get_session(&req).is_none());
    }

    #[test]
    fn valid_cookie_resolves_to_claims() {
        let state = AppState::for_tests();
        let issued = mint_session_token(
            "user123",
            "test@example.com",
            OffsetDateTime::now_utc(),
            &state.security,
        )
        .unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(state))
            .cookie(Cookie::new(SESSION_COOKIE, issued.token))
            .to_http_request();

        let claims = get_session(&req).unwrap();
        assert_eq!(claims.user_id, "user123");
        assert_eq!(claims.email, "test@example.com");
    }

    #[test]
    fn garbage_cookie_resolves_to_none() {
        let state = AppState::for_tests();
        let req = TestRequest::default()
            .app_data(web::Data::new(state))
            .cookie(Cookie::new(SESSION_COOKIE, "not-a-token"))
            .to_http_request();

        assert!(get_session(&req).is_none());
    }
}
