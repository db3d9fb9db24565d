use std::io::Read;

use crate::error::DecodeError;

/// Leading bytes of every zstd frame (RFC 8878 §3.1.1), as they appear on
/// the wire.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// `true` when `data` begins with a zstd frame header.
///
/// No NBT document can start this way: `0x28` is not a valid kind id.
#[must_use]
pub fn is_zstd(data: &[u8]) -> bool {
    data.starts_with(&ZSTD_MAGIC)
}

/// Decompress a zstd frame, refusing output larger than `max_size`.
///
/// Reads at most `max_size + 1` bytes from the decoder so that a
/// compression bomb is detected without ever buffering its full output.
///
/// # Errors
///
/// - [`DecodeError::DecompressFailed`] if zstd rejects the data.
/// - [`DecodeError::DecompressionBomb`] if the output exceeds `max_size`.
pub fn decompress(data: &[u8], max_size: usize) -> Result<Vec<u8>, DecodeError> {
    let decoder =
        zstd::stream::read::Decoder::new(data).map_err(|e| DecodeError::DecompressFailed(e.to_string()))?;

    let limit = u64::try_from(max_size).unwrap_or(u64::MAX).saturating_add(1);
    let mut out = Vec::new();
    decoder
        .take(limit)
        .read_to_end(&mut out)
        .map_err(|e| DecodeError::DecompressFailed(e.to_string()))?;

    if out.len() > max_size {
        return Err(DecodeError::DecompressionBomb { limit: max_size });
    }
    Ok(out)
}
