//! Transport context shared by every form on the page.
//!
//! # Design
//! - Create exactly one transport per app boot.
//! - Forms only hold an `Rc` to it; each form keeps its own submitter state.

use crate::services::api::GlooTransport;
use std::rc::Rc;

/// Shared transport context for form components.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton transport instance.
    pub(crate) transport: Rc<GlooTransport>,
}

impl ApiCtx {
    /// Create a new context with the configured base URL.
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: Rc::new(GlooTransport::new(base_url)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}
