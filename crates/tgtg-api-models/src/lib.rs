#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP contracts for the TGTG monitor sign-up endpoints.
//!
//! The front-end posts plain HTML form fields and every endpoint answers with
//! the same `{ "success": bool, "message": string }` JSON body. Keeping the
//! paths, field names and body shape here gives the UI a single source of
//! truth for the wire format.
use serde::{Deserialize, Serialize};

/// Endpoint that starts the TGTG e-mail verification flow for a new user.
pub const START_AUTH_PATH: &str = "/start_auth";
/// Endpoint that removes the signed-in user and purges their data.
pub const DEREGISTER_PATH: &str = "/deregister";
/// Endpoint that disables monitoring for an e-mail address.
pub const UNSUBSCRIBE_PATH: &str = "/unsubscribe";

/// Form field carrying the TGTG account e-mail on the sign-up form.
pub const TGTG_EMAIL_FIELD: &str = "tgtg_email";
/// Form field carrying the e-mail on the removal forms.
pub const EMAIL_FIELD: &str = "email";

/// JSON body returned by every form endpoint.
///
/// A `success: false` body is a normal, server-validated outcome (bad e-mail,
/// already registered, ...) and is not a transport failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmissionResponse {
    /// Whether the server accepted the submission.
    pub success: bool,
    /// Human-readable outcome shown verbatim in the feedback line.
    pub message: String,
}

impl SubmissionResponse {
    /// Accepted submission with the given message.
    #[must_use]
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_body() -> Result<(), serde_json::Error> {
        let body = r#"{"success": true, "message": "Please check your TooGoodToGo email"}"#;
        let parsed: SubmissionResponse = serde_json::from_str(body)?;
        assert_eq!(
            parsed,
            SubmissionResponse::accepted("Please check your TooGoodToGo email")
        );
        Ok(())
    }

    #[test]
    fn tolerates_unknown_fields() -> Result<(), serde_json::Error> {
        let body = r#"{"success": false, "message": "Error removing account.", "code": 7}"#;
        let parsed: SubmissionResponse = serde_json::from_str(body)?;
        assert!(!parsed.success);
        assert_eq!(parsed.message, "Error removing account.");
        Ok(())
    }

    #[test]
    fn rejects_body_without_message() {
        let body = r#"{"success": true}"#;
        assert!(serde_json::from_str::<SubmissionResponse>(body).is_err());
    }

    #[test]
    fn paths_are_absolute() {
        for path in [START_AUTH_PATH, DEREGISTER_PATH, UNSUBSCRIBE_PATH] {
            assert!(path.starts_with('/'));
        }
    }
}
