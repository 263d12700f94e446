//! hn-core: stable foundation for hydronet.
//!
//! Contains:
//! - flow (the `NO_FLOW` sentinel shared by engine and observers)
//! - numeric (Real + tolerances + float helpers)
//! - ids (`CompId`, the handle every edge is stored as)
//! - error (shared error types)

pub mod error;
pub mod flow;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HnError, HnResult};
pub use flow::{NO_FLOW, is_no_flow};
pub use ids::CompId;
pub use numeric::*;
