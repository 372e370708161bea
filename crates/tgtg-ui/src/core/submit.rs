//! Parameterized form submitter shared by the sign-up and removal forms.
//!
//! # Design
//! - One state machine per form: `Idle -> Submitting -> Idle`, guarded by a busy flag.
//! - Presence checks and confirmation run before any request is built.
//! - Every terminal path goes through [`Submitter::finish`], which restores the control.
//! - Transport is a trait so the request/response cycle stays DOM-free and testable.

use crate::core::feedback::{AUTO_HIDE_DELAY, FeedbackLine};
use std::future::Future;
use std::time::Duration;
use tgtg_api_models::{
    DEREGISTER_PATH, EMAIL_FIELD, START_AUTH_PATH, SubmissionResponse, TGTG_EMAIL_FIELD,
    UNSUBSCRIBE_PATH,
};
use thiserror::Error;

/// Generic message shown for transport and decoding failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
/// Message shown when the required e-mail field is empty.
pub const MISSING_EMAIL_MESSAGE: &str = "Please enter your email address";
/// Confirmation prompt gating account removal.
pub const DELETION_PROMPT: &str =
    "⚠️  CONFIRM DELETION: Remove monitoring and purge all data? [y/N]";

/// Body encoding used for a form request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// `multipart/form-data`; the browser supplies the boundary header.
    Multipart,
    /// `application/x-www-form-urlencoded` key/value pairs.
    UrlEncoded,
}

impl Encoding {
    /// Explicit `Content-Type` header, when one must be set by the caller.
    #[must_use]
    pub const fn content_type(self) -> Option<&'static str> {
        match self {
            Self::Multipart => None,
            Self::UrlEncoded => Some("application/x-www-form-urlencoded"),
        }
    }
}

/// Static description of one form instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitterConfig {
    /// Path posted to, relative to the page origin.
    pub endpoint: &'static str,
    /// Request body encoding.
    pub encoding: Encoding,
    /// Field that must be non-blank before a request is issued.
    pub required_field: Option<&'static str>,
    /// Prompt that must be accepted before a request is issued.
    pub confirmation: Option<&'static str>,
    /// Submit control label while idle.
    pub idle_label: &'static str,
    /// Submit control label while a request is in flight.
    pub busy_label: &'static str,
    /// Info line shown while the request is in flight.
    pub pending_notice: Option<&'static str>,
    /// Removal delay for success lines.
    pub auto_hide: Option<Duration>,
}

/// Sign-up form starting the TGTG verification flow.
pub const SIGNUP: SubmitterConfig = SubmitterConfig {
    endpoint: START_AUTH_PATH,
    encoding: Encoding::Multipart,
    required_field: Some(TGTG_EMAIL_FIELD),
    confirmation: None,
    idle_label: "EXECUTE REGISTRATION",
    busy_label: "AUTHENTICATING...",
    pending_notice: None,
    auto_hide: None,
};

/// Account removal form for a signed-in user.
pub const DEREGISTER: SubmitterConfig = SubmitterConfig {
    endpoint: DEREGISTER_PATH,
    encoding: Encoding::Multipart,
    required_field: None,
    confirmation: Some(DELETION_PROMPT),
    idle_label: "EXECUTE REMOVAL",
    busy_label: "PURGING DATA...",
    pending_notice: None,
    auto_hide: None,
};

/// Public unsubscribe form keyed by e-mail.
pub const UNSUBSCRIBE: SubmitterConfig = SubmitterConfig {
    endpoint: UNSUBSCRIBE_PATH,
    encoding: Encoding::UrlEncoded,
    required_field: Some(EMAIL_FIELD),
    confirmation: None,
    idle_label: "EXECUTE REMOVAL",
    busy_label: "REMOVING...",
    pending_notice: Some("Processing removal request..."),
    auto_hide: Some(AUTO_HIDE_DELAY),
};

/// Ordered form field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Empty field set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a field.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// First value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn trimmed(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(name, value)| (name.clone(), value.trim().to_string()))
                .collect(),
        )
    }

    /// `application/x-www-form-urlencoded` rendering of the fields.
    #[must_use]
    pub fn to_urlencoded(&self) -> String {
        self.iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A request accepted by [`Submitter::begin`], ready for a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundRequest {
    /// Path posted to.
    pub endpoint: &'static str,
    /// Body encoding.
    pub encoding: Encoding,
    /// Trimmed field values.
    pub fields: FormFields,
}

impl OutboundRequest {
    /// Absolute URL against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.endpoint)
    }
}

/// Errors surfaced while submitting a form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// A required field was blank; no request was issued.
    #[error("required form field is empty")]
    MissingField {
        /// Name of the blank field.
        field: &'static str,
    },
    /// The confirmation prompt was declined; no request was issued.
    #[error("submission declined at confirmation")]
    Declined,
    /// A request for this form is already in flight.
    #[error("submission already in flight")]
    Busy {
        /// Endpoint of the in-flight request.
        endpoint: &'static str,
    },
    /// The request could not be sent or the response could not be read.
    #[error("form request failed")]
    Transport {
        /// Endpoint being posted to.
        endpoint: &'static str,
        /// Transport-provided detail.
        detail: String,
    },
    /// The response body was not the expected JSON document.
    #[error("form response was not valid json")]
    Decode {
        /// Endpoint being posted to.
        endpoint: &'static str,
        /// Decoder-provided detail.
        detail: String,
    },
}

impl SubmitError {
    /// Feedback line for this error; silent outcomes return `None`.
    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackLine> {
        match self {
            Self::MissingField { .. } => Some(FeedbackLine::error(MISSING_EMAIL_MESSAGE)),
            Self::Declined | Self::Busy { .. } => None,
            Self::Transport { .. } | Self::Decode { .. } => {
                Some(FeedbackLine::error(NETWORK_ERROR_MESSAGE))
            }
        }
    }
}

/// Lifecycle of a single form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Ready to accept a submission.
    Idle,
    /// A request is in flight.
    Submitting,
}

/// Rendering state of the submit control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Label shown on the control.
    pub label: &'static str,
}

/// Result of a finished submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    /// Line to render under the form.
    pub feedback: FeedbackLine,
    /// Whether the form inputs should be reset.
    pub clear_form: bool,
}

/// Per-form submission state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submitter {
    config: SubmitterConfig,
    phase: SubmitPhase,
}

impl Submitter {
    /// Idle submitter for `config`.
    #[must_use]
    pub const fn new(config: SubmitterConfig) -> Self {
        Self {
            config,
            phase: SubmitPhase::Idle,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Submit control state for the current phase.
    #[must_use]
    pub const fn control(&self) -> ControlState {
        match self.phase {
            SubmitPhase::Idle => ControlState {
                disabled: false,
                label: self.config.idle_label,
            },
            SubmitPhase::Submitting => ControlState {
                disabled: true,
                label: self.config.busy_label,
            },
        }
    }

    /// Info line to show while the request is in flight.
    #[must_use]
    pub fn pending_feedback(&self) -> Option<FeedbackLine> {
        match self.phase {
            SubmitPhase::Submitting => self.config.pending_notice.map(FeedbackLine::info),
            SubmitPhase::Idle => None,
        }
    }

    /// Validate, confirm, and move to [`SubmitPhase::Submitting`].
    ///
    /// `confirm` is only called when the form requires confirmation.
    ///
    /// # Errors
    /// - [`SubmitError::Busy`] while a request is already in flight.
    /// - [`SubmitError::MissingField`] when the required field is blank.
    /// - [`SubmitError::Declined`] when the prompt is refused.
    pub fn begin(
        &mut self,
        fields: &FormFields,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<OutboundRequest, SubmitError> {
        if self.phase == SubmitPhase::Submitting {
            return Err(SubmitError::Busy {
                endpoint: self.config.endpoint,
            });
        }
        if let Some(field) = self.config.required_field {
            let blank = fields
                .get(field)
                .is_none_or(|value| value.trim().is_empty());
            if blank {
                return Err(SubmitError::MissingField { field });
            }
        }
        if let Some(prompt) = self.config.confirmation {
            if !confirm(prompt) {
                return Err(SubmitError::Declined);
            }
        }
        self.phase = SubmitPhase::Submitting;
        Ok(OutboundRequest {
            endpoint: self.config.endpoint,
            encoding: self.config.encoding,
            fields: fields.trimmed(),
        })
    }

    /// Return to [`SubmitPhase::Idle`] and describe the outcome.
    pub fn finish(&mut self, outcome: Result<SubmissionResponse, SubmitError>) -> Completion {
        self.phase = SubmitPhase::Idle;
        match outcome {
            Ok(response) if response.success => {
                let mut feedback = FeedbackLine::success(response.message);
                if let Some(delay) = self.config.auto_hide {
                    feedback = feedback.hiding_after(delay);
                }
                Completion {
                    feedback,
                    clear_form: true,
                }
            }
            Ok(response) => Completion {
                feedback: FeedbackLine::error(response.message),
                clear_form: false,
            },
            Err(err) => Completion {
                feedback: err
                    .feedback()
                    .unwrap_or_else(|| FeedbackLine::error(NETWORK_ERROR_MESSAGE)),
                clear_form: false,
            },
        }
    }
}

/// Sends an [`OutboundRequest`] and yields the raw response body.
pub trait FormTransport {
    /// Post the request.
    ///
    /// # Errors
    /// Returns [`SubmitError::Transport`] when the request cannot be completed.
    fn post(&self, request: &OutboundRequest) -> impl Future<Output = Result<String, SubmitError>>;
}

/// Parse an endpoint's JSON body.
///
/// # Errors
/// Returns [`SubmitError::Decode`] when the body is not a `{success, message}` document.
pub fn decode_response(
    endpoint: &'static str,
    body: &str,
) -> Result<SubmissionResponse, SubmitError> {
    serde_json::from_str(body).map_err(|err| SubmitError::Decode {
        endpoint,
        detail: err.to_string(),
    })
}

/// Post `request` through `transport` and decode the reply.
///
/// # Errors
/// Propagates transport failures and returns [`SubmitError::Decode`] for malformed bodies.
pub async fn dispatch<T: FormTransport>(
    transport: &T,
    request: &OutboundRequest,
) -> Result<SubmissionResponse, SubmitError> {
    let body = transport.post(request).await?;
    decode_response(request.endpoint, &body)
}
