//! Page panels, one feature slice per form family.
pub(crate) mod removal;
pub(crate) mod signup;
