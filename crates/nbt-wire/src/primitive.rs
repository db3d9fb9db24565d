use crate::error::WireError;
use crate::source::ByteSource;

/// Upper bound on a single allocation made on behalf of a length prefix.
///
/// Length prefixes come from untrusted input, so long payloads are read in
/// chunks of this size and memory only grows as bytes actually arrive.
pub const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Read a fixed-size byte array.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_array<const N: usize, S: ByteSource + ?Sized>(
    src: &mut S,
) -> Result<[u8; N], WireError> {
    let mut buf = [0u8; N];
    src.read_exact_into(&mut buf)?;
    Ok(buf)
}

/// Assemble an unsigned big-endian integer of `width` bytes.
///
/// | Bytes              | width | Result   |
/// |--------------------|-------|----------|
/// | `[0x7F]`           | 1     | `0x7F`   |
/// | `[0x80, 0x00]`     | 2     | `0x8000` |
/// | `[0x00, 0x00, 0x01, 0x00]` | 4 | `256` |
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
///
/// # Panics
///
/// Panics if `width` is not 1, 2, 4 or 8.
pub fn read_uint<S: ByteSource + ?Sized>(src: &mut S, width: usize) -> Result<u64, WireError> {
    assert!(
        matches!(width, 1 | 2 | 4 | 8),
        "read_uint width must be 1, 2, 4 or 8, got {width}"
    );

    let mut buf = [0u8; 8];
    let bytes = &mut buf[..width];
    src.read_exact_into(bytes)?;
    Ok(bytes.iter().fold(0u64, |n, &b| (n << 8) | u64::from(b)))
}

/// Interpret the low `width` bytes of `raw` as a two's-complement integer.
///
/// When the sign bit (bit `width * 8 - 1`) is set, the result is
/// `-(!raw + 1)` within the width; otherwise `raw` is returned as-is. The
/// complement is taken as `|value| - 1` so that the minimum value of every
/// width (including `i64::MIN`) is produced without overflow.
///
/// # Panics
///
/// Panics if `width` is not 1, 2, 4 or 8.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn decode_twos_complement(width: usize, raw: u64) -> i64 {
    assert!(
        matches!(width, 1 | 2 | 4 | 8),
        "decode_twos_complement width must be 1, 2, 4 or 8, got {width}"
    );

    let bits = width * 8;
    let mask = if bits == 64 { u64::MAX } else { (1u64 << bits) - 1 };
    let raw = raw & mask;
    let sign_bit = 1u64 << (bits - 1);

    if raw & sign_bit == 0 {
        raw as i64
    } else {
        // Below the sign bit, so it fits in i64 for every width.
        let magnitude_minus_one = !raw & mask;
        -(magnitude_minus_one as i64) - 1
    }
}

/// Read a big-endian two's-complement `i8`.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_i8<S: ByteSource + ?Sized>(src: &mut S) -> Result<i8, WireError> {
    let value = decode_twos_complement(1, read_uint(src, 1)?);
    Ok(i8::try_from(value).expect("1-byte two's complement fits i8"))
}

/// Read a big-endian two's-complement `i16`.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_i16<S: ByteSource + ?Sized>(src: &mut S) -> Result<i16, WireError> {
    let value = decode_twos_complement(2, read_uint(src, 2)?);
    Ok(i16::try_from(value).expect("2-byte two's complement fits i16"))
}

/// Read a big-endian two's-complement `i32`.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_i32<S: ByteSource + ?Sized>(src: &mut S) -> Result<i32, WireError> {
    let value = decode_twos_complement(4, read_uint(src, 4)?);
    Ok(i32::try_from(value).expect("4-byte two's complement fits i32"))
}

/// Read a big-endian two's-complement `i64`.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_i64<S: ByteSource + ?Sized>(src: &mut S) -> Result<i64, WireError> {
    Ok(decode_twos_complement(8, read_uint(src, 8)?))
}

/// Read a big-endian `u16` (byte-string length prefix).
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_u16<S: ByteSource + ?Sized>(src: &mut S) -> Result<u16, WireError> {
    Ok(u16::from_be_bytes(read_array(src)?))
}

/// Read a big-endian `u32`.
///
/// Array lengths and list counts are declared as `i32` on the wire but are
/// read through this function, so a negative prefix reads as a very large
/// count and the payload read fails once the input is exhausted.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_u32<S: ByteSource + ?Sized>(src: &mut S) -> Result<u32, WireError> {
    Ok(u32::from_be_bytes(read_array(src)?))
}

/// Read an IEEE-754 binary32 from four bytes in the host's native layout.
///
/// Unlike the integer readers, float payloads are not byte-swapped: the
/// four bytes are reinterpreted exactly as they sit in memory, so a file
/// written on a little-endian host reads back on a little-endian host.
/// The host is assumed to use IEEE-754.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_f32<S: ByteSource + ?Sized>(src: &mut S) -> Result<f32, WireError> {
    Ok(f32::from_ne_bytes(read_array(src)?))
}

/// Read an IEEE-754 binary64 from eight bytes in the host's native layout.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_f64<S: ByteSource + ?Sized>(src: &mut S) -> Result<f64, WireError> {
    Ok(f64::from_ne_bytes(read_array(src)?))
}

/// Read exactly `len` raw bytes.
///
/// `len` is untrusted: sources that know their remaining size fail before
/// allocating, and the rest are read in [`READ_CHUNK_SIZE`] pieces.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if fewer than `len` bytes remain.
/// - [`WireError::Io`] on transport failure.
pub fn read_bytes<S: ByteSource + ?Sized>(src: &mut S, len: usize) -> Result<Vec<u8>, WireError> {
    if let Some(available) = src.remaining_hint()
        && len > available
    {
        return Err(WireError::UnexpectedEof {
            offset: src.position(),
            needed: len,
        });
    }

    let mut out = Vec::with_capacity(len.min(READ_CHUNK_SIZE));
    let mut left = len;
    while left > 0 {
        let step = left.min(READ_CHUNK_SIZE);
        let start = out.len();
        out.resize(start + step, 0);
        src.read_exact_into(&mut out[start..])?;
        left -= step;
    }
    Ok(out)
}

/// Read a length-prefixed byte string: `u16` big-endian length, then the
/// bytes verbatim. Used for tag names and String payloads alike; the bytes
/// are not validated as text.
///
/// # Errors
///
/// Propagates the source's [`WireError`] unchanged.
pub fn read_byte_string<S: ByteSource + ?Sized>(src: &mut S) -> Result<Vec<u8>, WireError> {
    let len = read_u16(src)?;
    read_bytes(src, usize::from(len))
}

/// Read `len` big-endian `i32` values.
///
/// # Errors
///
/// - [`WireError::UnexpectedEof`] if fewer than `len * 4` bytes remain.
/// - [`WireError::Io`] on transport failure.
pub fn read_i32_array<S: ByteSource + ?Sized>(
    src: &mut S,
    len: usize,
) -> Result<Vec<i32>, WireError> {
    if let Some(available) = src.remaining_hint() {
        let needed = len.saturating_mul(4);
        if needed > available {
            return Err(WireError::UnexpectedEof {
                offset: src.position(),
                needed,
            });
        }
    }

    let mut out = Vec::with_capacity(len.min(READ_CHUNK_SIZE / 4));
    for _ in 0..len {
        out.push(read_i32(src)?);
    }
    Ok(out)
}
