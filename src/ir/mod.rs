//! Intermediate representations built from the inputs
pub mod table;
