//! # lanepack
//!
//! Lossless compression for dense arrays of `f32` values.
//!
//! Values are treated bit-exactly as unsigned 32-bit integers — no
//! floating-point arithmetic is performed, so NaN payloads, signed zeros,
//! infinities and subnormals all survive the round trip. The codec
//! processes eight values per block: each lane's residual is trimmed of its
//! leading and trailing zero bytes, and a 32-bit header word per block
//! records the trim codes the decoder needs to reassemble every lane.
//!
//! ## Schemes
//!
//! Two independent schemes share the block format but produce incompatible
//! streams:
//!
//! | Scheme | Predictors | Best for |
//! |--------|------------|----------|
//! | full   | delta + 256-entry hash table | data with recurring deltas |
//! | quick  | delta only | fastest path, smooth data |
//!
//! The full scheme keeps a transition table mapping a hash of each delta to
//! the delta that last followed it; when history repeats, the xor with the
//! predicted delta cancels the residual down to a single byte per lane.
//!
//! ## Quick start
//!
//! ```rust
//! let values = vec![1.5f32, 2.25, 2.25, -8.0];
//!
//! let encoded = lanepack::encode_full(&values);
//! assert!(encoded.len() <= lanepack::upper_bound(values.len()));
//!
//! // The stream does not store the value count; pass it back verbatim.
//! let decoded = lanepack::decode_full(&encoded, values.len()).unwrap();
//! assert_eq!(values, decoded);
//! ```
//!
//! ## Sizing
//!
//! [`upper_bound`] gives the worst-case stream size: half a header byte
//! plus at most four payload bytes per value. Typical streams are much
//! smaller whenever neighbouring blocks resemble each other; worst-case
//! (bit-uniform) data stays within the bound rather than expanding.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod error;
mod header;
mod lanes;

pub use codec::{decode_full, decode_quick, encode_full, encode_quick, upper_bound};
pub use error::LanepackError;

/// Convenience type alias for Results with LanepackError.
pub type Result<T> = std::result::Result<T, LanepackError>;
