//! Reusable Yew components.
pub(crate) mod feedback;
pub(crate) mod submit_form;
pub(crate) mod theme_toggle;
