use thiserror::Error;

pub type HnResult<T> = Result<T, HnError>;

/// Errors shared by every hydronet crate.
#[derive(Error, Debug)]
pub enum HnError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    /// A finite value outside the accepted range, e.g. a negative flow.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("No component named {what}")]
    NotFound { what: String },

    /// Network edges disagree with each other.
    #[error("Broken network invariant: {what}")]
    Invariant { what: String },
}
