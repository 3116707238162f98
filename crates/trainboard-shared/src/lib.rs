//! # trainboard-shared
//!
//! Identifier newtypes, constants and the validation error shared by the
//! store and the client command layer.

pub mod constants;
pub mod error;
pub mod types;

pub use error::ValidationError;
pub use types::*;
