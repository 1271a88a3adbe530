//! Shared diagnostics type used by every phase of the Cantte pipeline.

pub mod error;

pub use error::CantteError;
