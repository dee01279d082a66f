//! Outbound message delivery
//!
//! Confirmation codes are delivered out-of-band. There is no SMTP
//! integration; messages are written to the log, which is sufficient for
//! development and for deployments that scrape logs into a relay.

/// Send a confirmation code to a user's email address
pub fn send_confirmation_code(from: &str, to: &str, username: &str, code: &str) {
    tracing::info!(
        from = %from,
        to = %to,
        username = %username,
        "Confirmation code issued: {}",
        code
    );
}
