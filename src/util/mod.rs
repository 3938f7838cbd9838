//! Various utility functions.
pub mod bits;
pub mod tiny;
