//! Removal panels.
//!
//! # Design
//! - The public unsubscribe form is keyed by e-mail and needs no session.
//! - Account deregistration runs against the signed-in session and is confirmation gated.
pub(crate) mod view;
