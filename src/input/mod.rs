//! Input definitions
pub mod source;
