//! The merge request dependencies bounded context.
pub mod domain;
