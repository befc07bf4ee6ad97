use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a failed login on either boundary.
///
/// `principal` is the email or phone the caller presented; it is redacted.
pub fn login_failed(boundary: &'static str, reason: &'static str, principal: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        boundary,
        principal = %Redacted(principal),
        reason,
        "Authentication failure"
    );
}

/// Log a rejected session on either boundary.
pub fn session_rejected(boundary: &'static str, reason: &'static str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_SESSION_REJECTED",
        %trace_id,
        boundary,
        reason,
        "Session rejected"
    );
}
