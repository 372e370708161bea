//! Sign-up panel starting TGTG e-mail verification.
pub(crate) mod view;
