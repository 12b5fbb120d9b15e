//! Operation errors of the timestamp codec.

use thiserror::Error;

use crate::id::ParseError;

/// The error type for timestamp codec operations.
///
/// Each stage of a composed operation maps to a distinct variant, so a caller
/// of [`uuid7_restamp`](crate::uuid7_restamp) can tell the failing stage
/// apart by matching on the variant rather than inspecting message text.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation requiring a version 7 input was given an identifier of
    /// another version. The payload carries the version nibble found.
    #[error("checking uuid version: expected version 7, got version {0}")]
    InvalidVersion(u8),

    /// Textual input did not parse as a canonical UUID representation.
    #[error("parsing input string uuid")]
    MalformedInput(#[source] ParseError),

    /// The secure random source could not produce output. Never downgraded
    /// to a weaker source; retrying is up to the caller.
    #[error("reading from entropy source")]
    EntropySource(#[source] rand::Error),
}
