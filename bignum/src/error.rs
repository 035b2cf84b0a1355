//! Error kinds surfaced by the bignum core.
//!
//! The core's contract is deliberately narrow: every fallible public
//! operation fails with one of these four kinds and nothing else.

use thiserror::Error;

/// Error produced by a public `bignum` operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BignumError {
    /// A decimal literal exceeded a configured buffer.
    ///
    /// Modeled for API completeness per spec.md §3; no code path in this
    /// crate currently constructs it. The 100 KiB literal bound named in
    /// spec.md §6.2 is enforced by the calculator frontend's own
    /// `TokenizeError::LiteralTooLong` before a literal ever reaches the
    /// core, so this variant is reserved for a future caller that configures
    /// the core's own buffer directly, the same unreachable-but-modeled
    /// status as [`BignumError::AllocationFailure`].
    #[error("decimal literal exceeds buffer capacity")]
    Overflow,
    /// The input string was not `[-]?[0-9]+`: a non-digit character, an
    /// empty magnitude, or a bare sign.
    #[error("invalid numeral: {0}")]
    InvalidNumeral(String),
    /// The divisor's magnitude was empty.
    #[error("division by zero")]
    DivisionByZero,
    /// The allocator could not satisfy a request.
    ///
    /// Modeled for API completeness; Rust's global allocator aborts the
    /// process on exhaustion rather than returning control here, so no
    /// code path in this crate currently constructs this variant.
    #[error("allocation failure")]
    AllocationFailure,
}
