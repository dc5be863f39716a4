//! Block encoders and decoders for the full and quick schemes.
//!
//! Values are consumed eight at a time. Per block the encoder derives one
//! 32-bit residual per lane, trims its leading and trailing zero bytes, and
//! writes the surviving 1..=4 bytes to the payload region; a 32-bit header
//! word records the sixteen two-bit trim codes that let the decoder locate
//! and bound every lane.
//!
//! ## Stream layout for `n` values
//!
//! ```text
//! offset 0 ............ 4*ceil(n/8) ............. k
//! ┌───────────────────┬─────────────────────────────┐
//! │ headers (4 bytes  │ payloads (1..=4 bytes per   │
//! │ per block, LE u32)│ lane, little-endian)        │
//! └───────────────────┴─────────────────────────────┘
//! ```
//!
//! Headers are prefix-contiguous and payloads suffix-contiguous; the two
//! cursors advance independently. The stream does not record the value
//! count: callers must hand the identical count to the decoder.
//!
//! ## Residuals
//!
//! Both schemes start from the lane-wise delta `d = v - prior`, where
//! `prior` is the previous block's vector (all zeros before the first
//! block) and the subtraction wraps on the raw bit patterns. The quick
//! scheme emits `d` directly. The full scheme additionally xors `d` with a
//! prediction gathered from a 256-entry table keyed by a byte-level hash of
//! the previous residuals; on transition-heavy data the xor cancels most of
//! the residual. The two schemes therefore produce incompatible streams.

use crate::error::LanepackError;
use crate::header::{self, HEADER_BYTES};
use crate::lanes::{lane_width, trim, LANES};

/// Number of entries in the full scheme's prediction table.
const LOOKUP_SIZE: usize = 256;

/// Hash of a delta residual into the prediction table.
///
/// Mixes the exponent-carrying high byte into the low-middle byte so that
/// float deltas with equal magnitude land in the same slot.
#[inline]
fn hash_index(d: u32) -> usize {
    (((d >> 8) ^ (d >> 24)) & (LOOKUP_SIZE as u32 - 1)) as usize
}

/// Worst-case compressed size in bytes for `value_count` values.
///
/// Each block of eight values contributes 4 header bytes (half a byte per
/// value) plus at most 4 payload bytes per value.
///
/// # Example
/// ```
/// assert_eq!(lanepack::upper_bound(0), 0);
/// assert_eq!(lanepack::upper_bound(8), 36);
/// assert_eq!(lanepack::upper_bound(10_000), 45_000);
/// ```
pub const fn upper_bound(value_count: usize) -> usize {
    value_count.div_ceil(2) + value_count * 4
}

/// Compress `values` with the full scheme (delta + hash prediction).
///
/// Infallible: an empty slice produces an empty stream. The output length
/// is the only record of where the stream ends; the value count is not
/// stored and must be supplied verbatim to [`decode_full`].
///
/// # Example
/// ```
/// let values = vec![1.0f32, 2.0, 4.0, 8.0];
/// let encoded = lanepack::encode_full(&values);
/// let decoded = lanepack::decode_full(&encoded, values.len()).unwrap();
/// assert_eq!(values, decoded);
/// ```
pub fn encode_full(values: &[f32]) -> Vec<u8> {
    encode_blocks::<true>(values)
}

/// Compress `values` with the quick scheme (delta prediction only).
///
/// Faster than [`encode_full`] but blind to recurring delta patterns. The
/// output is decodable only by [`decode_quick`].
///
/// # Example
/// ```
/// let values = vec![1.0f32, 2.0, 4.0, 8.0];
/// let encoded = lanepack::encode_quick(&values);
/// let decoded = lanepack::decode_quick(&encoded, values.len()).unwrap();
/// assert_eq!(values, decoded);
/// ```
pub fn encode_quick(values: &[f32]) -> Vec<u8> {
    encode_blocks::<false>(values)
}

/// Decompress a [`encode_full`] stream holding `value_count` values.
///
/// Returns an error if `bytes` is shorter than the layout implied by
/// `value_count`. A stream produced by [`encode_full`] with the same count
/// always decodes to the original values bit-exactly, NaN payloads and
/// signed zeros included.
pub fn decode_full(bytes: &[u8], value_count: usize) -> Result<Vec<f32>, LanepackError> {
    decode_blocks::<true>(bytes, value_count)
}

/// Decompress a [`encode_quick`] stream holding `value_count` values.
///
/// Returns an error if `bytes` is shorter than the layout implied by
/// `value_count`. Not interchangeable with [`decode_full`]: each scheme
/// decodes only its own encoder's output.
pub fn decode_quick(bytes: &[u8], value_count: usize) -> Result<Vec<f32>, LanepackError> {
    decode_blocks::<false>(bytes, value_count)
}

fn encode_blocks<const HASHED: bool>(values: &[f32]) -> Vec<u8> {
    if values.is_empty() {
        return Vec::new();
    }

    let blocks = values.len().div_ceil(LANES);
    let header_len = blocks * HEADER_BYTES;
    // Worst case: every lane of every block emits four payload bytes.
    let mut out = vec![0u8; header_len + blocks * LANES * 4];
    let mut cursor = header_len;

    let mut lookup = [0u32; LOOKUP_SIZE];
    let mut prior = [0u32; LANES];
    let mut xprior = [0u32; LANES];
    let mut indices = [0usize; LANES];

    for (block, chunk) in values.chunks(LANES).enumerate() {
        // A partial final chunk is zero-padded; the decoder discards the
        // pad lanes.
        let mut v = [0u32; LANES];
        for (slot, value) in v.iter_mut().zip(chunk) {
            *slot = value.to_bits();
        }

        let mut residual = [0u32; LANES];
        for ((r, &cur), &prev) in residual.iter_mut().zip(&v).zip(&prior) {
            *r = cur.wrapping_sub(prev);
        }
        prior = v;

        if HASHED {
            // Scatter the fresh delta residuals at the indices scheduled by
            // the previous block, then schedule this block's indices and
            // fetch the predictions for the next block. The gather may hit
            // entries scattered in this same block; the decoder repeats the
            // identical order.
            for (&idx, &r) in indices.iter().zip(&residual) {
                lookup[idx] = r;
            }
            for (idx, &r) in indices.iter_mut().zip(&residual) {
                *idx = hash_index(r);
            }
            for (r, &x) in residual.iter_mut().zip(&xprior) {
                *r ^= x;
            }
            for (x, &idx) in xprior.iter_mut().zip(&indices) {
                *x = lookup[idx];
            }
        }

        let mut lz = [0u32; LANES];
        let mut tz = [0u32; LANES];
        for lane in 0..LANES {
            let trimmed = trim(residual[lane]);
            let width = trimmed.width();
            out[cursor..cursor + width].copy_from_slice(&trimmed.payload.to_le_bytes()[..width]);
            cursor += width;
            lz[lane] = trimmed.lz;
            tz[lane] = trimmed.tz;
        }

        let slot = block * HEADER_BYTES;
        out[slot..slot + HEADER_BYTES].copy_from_slice(&header::pack(&lz, &tz).to_le_bytes());
    }

    out.truncate(cursor);
    out
}

fn decode_blocks<const HASHED: bool>(
    bytes: &[u8],
    value_count: usize,
) -> Result<Vec<f32>, LanepackError> {
    if value_count == 0 {
        return Ok(Vec::new());
    }

    let blocks = value_count.div_ceil(LANES);
    let header_len = blocks * HEADER_BYTES;
    if bytes.len() < header_len {
        return Err(LanepackError::TruncatedHeader {
            needed: header_len,
            available: bytes.len(),
        });
    }
    let mut cursor = header_len;

    let mut lookup = [0u32; LOOKUP_SIZE];
    let mut prior = [0u32; LANES];
    let mut xprior = [0u32; LANES];
    let mut indices = [0usize; LANES];

    let mut out = Vec::with_capacity(value_count);
    let mut remaining = value_count;

    for block in 0..blocks {
        let slot = block * HEADER_BYTES;
        let word = u32::from_le_bytes(bytes[slot..slot + HEADER_BYTES].try_into().unwrap());
        let (lz, tz) = header::unpack(word);

        let mut lane_val = [0u32; LANES];
        for lane in 0..LANES {
            let width = lane_width(lz[lane]);
            if cursor + width > bytes.len() {
                return Err(LanepackError::TruncatedPayload {
                    block,
                    needed: cursor + width,
                    available: bytes.len(),
                });
            }
            // Narrow load: zero-extend the lane's payload bytes, then
            // restore the trimmed trailing zero bytes.
            let mut raw = [0u8; 4];
            raw[..width].copy_from_slice(&bytes[cursor..cursor + width]);
            lane_val[lane] = u32::from_le_bytes(raw) << (8 * tz[lane]);
            cursor += width;
        }

        if HASHED {
            // Undo the xor prediction first; everything after runs in the
            // encoder's order so the table and index state stay in step.
            for (v, &x) in lane_val.iter_mut().zip(&xprior) {
                *v ^= x;
            }
            for (&idx, &d) in indices.iter().zip(&lane_val) {
                lookup[idx] = d;
            }
            for (idx, &d) in indices.iter_mut().zip(&lane_val) {
                *idx = hash_index(d);
            }
            for (x, &idx) in xprior.iter_mut().zip(&indices) {
                *x = lookup[idx];
            }
        }

        for (v, &prev) in lane_val.iter_mut().zip(&prior) {
            *v = v.wrapping_add(prev);
        }
        prior = lane_val;

        let live = remaining.min(LANES);
        for &bits in lane_val.iter().take(live) {
            out.push(f32::from_bits(bits));
        }
        remaining -= live;
    }

    Ok(out)
}
