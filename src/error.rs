//! Structured error kinds for the sponge core (FIPS 202 §-equivalent design, spec §7).

use thiserror::Error;

/// Failure modes surfaced by this crate.
///
/// None of these are retried internally; they propagate to the caller at the
/// point they're detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sponge/permutation parameter is out of its valid range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// An unrecognized `input_format` tag was requested.
    #[error("unsupported input format: {0}")]
    InvalidInputFormat(String),

    /// Input data doesn't parse under its declared format.
    #[error("malformed input ({format}): {reason}")]
    MalformedInput {
        format: &'static str,
        reason: String,
    },

    /// `update`/`finalize` called on an instance that already produced output.
    #[error("update/finalize called after finalize")]
    UseAfterFinalize,

    /// A bug in this crate, not a user error: an internal invariant was violated.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),

    /// Writing to the intermediate-value trace sink failed. The digest
    /// computation itself is unaffected; this only means the trace is
    /// incomplete.
    #[error("failed to write intermediate-value trace: {0}")]
    TraceWrite(String),
}

pub type Result<T> = std::result::Result<T, Error>;
