//! Security event logging.
//!
//! The private diagnostic channel for auth outcomes. Callers of the session
//! API only ever see "no session"; the concrete rejection reason lives here
//! and nowhere else.

use tracing::{info, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a rejected session token with its (internal-only) reason.
pub fn session_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SESSION_REJECTED",
        %trace_id,
        reason,
        "Session token rejected"
    );
}

/// Log a successful login (session issued).
pub fn session_issued(user_id: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_SESSION_ISSUED",
        %trace_id,
        user_id,
        email = %Redacted(email),
        "Session issued"
    );
}

/// Log an explicit logout (session cookie cleared).
pub fn session_cleared() {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_SESSION_CLEARED",
        %trace_id,
        "Session cleared"
    );
}
