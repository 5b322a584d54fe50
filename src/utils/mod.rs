//! Small shared helpers

pub mod filters;
