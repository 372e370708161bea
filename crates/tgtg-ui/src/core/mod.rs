//! Core, DOM-free primitives and helpers for the Web UI.
pub mod feedback;
pub mod store;
pub mod submit;
pub mod theme;
