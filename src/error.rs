//! Error types for lanepack decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a compressed stream.
///
/// Encoding is infallible; these arise only when a byte stream is shorter
/// than the layout implied by the caller's `value_count`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LanepackError {
    /// The stream is shorter than the header region implied by the value count.
    #[error("truncated header region: need {needed} bytes, stream has {available}")]
    TruncatedHeader {
        /// Size in bytes of the header region the value count implies.
        needed: usize,
        /// Actual length of the stream.
        available: usize,
    },

    /// A block's payloads would read past the end of the stream.
    #[error("truncated payload in block {block}: need {needed} bytes, stream has {available}")]
    TruncatedPayload {
        /// Index of the block whose payloads are incomplete.
        block: usize,
        /// Stream length required to read this block's payloads.
        needed: usize,
        /// Actual length of the stream.
        available: usize,
    },
}
