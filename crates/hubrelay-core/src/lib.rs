//! Core utilities shared by the Hubrelay library and binary.

pub mod core;

pub use core::error::{RelayError, RelayResult};
pub use core::error_help::{format_error_with_help, ErrorHelp};
