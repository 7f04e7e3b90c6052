//! Error types for the chrono cookbook library

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed diagnostic shown when the date/time backend is missing.
///
/// Every example renders this same message when no capability is supplied,
/// regardless of what the example itself computes.
pub const CAPABILITY_HELP: &str =
    "date and time support is not initialized; upgrade your runtime or rebuild with chrono's clock feature enabled";

/// Main error type for the chrono cookbook library
#[derive(Error, Debug)]
pub enum Error {
    /// The date/time capability was not available when an example ran
    #[error("{}", CAPABILITY_HELP)]
    CapabilityUnavailable,

    /// An example's computation failed while producing its output
    #[error("{0}")]
    Computation(String),

    /// No example group matched a lookup query
    #[error("no example group matches: {0}")]
    UnknownGroup(String),
}
