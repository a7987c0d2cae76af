//! Shared kernel for the recap workspace
//!
//! Holds the pieces every feature crate needs without pulling in any of
//! the heavier dependencies those crates use themselves.

mod error;

pub use error::HttpError;
