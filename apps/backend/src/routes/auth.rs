use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::auth::cookie::{removal_cookie, session_cookie};
use crate::auth::session::mint_session_token;
use crate::error::AppError;
use crate::extractors::session::MaybeSession;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Login call site. Credential verification happens upstream (identity
/// provider); this endpoint turns an already-verified identity into a
/// session cookie.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub email: String,
}

/// Issue a session for a verified identity and set the session cookie.
/// Responds with the session claims the cookie now carries.
async fn login(
    req: web::Json<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    // The codec accepts any strings; non-emptiness is this caller's job.
    if req.user_id.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_USER_ID",
            "User id cannot be empty".to_string(),
        ));
    }

    if req.email.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_EMAIL",
            "Email cannot be empty".to_string(),
        ));
    }

    let issued = mint_session_token(
        &req.user_id,
        &req.email,
        OffsetDateTime::now_utc(),
        &app_state.security,
    )?;

    security::session_issued(&req.user_id, &req.email);

    let cookie = session_cookie(issued.token, issued.expires_at, app_state.env);

    Ok(HttpResponse::Ok().cookie(cookie).json(issued.claims))
}

/// Clear the session cookie. Stateless tokens cannot be revoked server-side,
/// so logout is purely a cookie deletion.
async fn logout(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    security::session_cleared();

    Ok(HttpResponse::NoContent()
        .cookie(removal_cookie(app_state.env))
        .finish())
}

/// Report the current session, or JSON `null` when unauthenticated.
/// Missing cookie and rejected token are indistinguishable here.
async fn session(session: MaybeSession) -> Result<HttpResponse, AppError> {
    match session.0 {
        Some(claims) => Ok(HttpResponse::Ok().json(claims)),
        None => Ok(HttpResponse::Ok().json(serde_json::Value::Null)),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/auth/login").route(web::post().to(login)))
        .service(web::resource("/api/auth/logout").route(web::post().to(logout)))
        .service(web::resource("/api/auth/session").route(web::get().to(session)));
}
