//! Utility modules for common functionality
//!
//! Logging, progress reporting and the text side of coordinates (parsing
//! user input and formatting status lines).

pub mod logger;
pub(crate) mod progress;
pub mod format_utils;
pub mod coordinate_utils;

#[cfg(test)]
mod tests;
