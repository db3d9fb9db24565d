use nbt_types::{ByteString, TagKind, TagValue};
use nbt_wire::ByteSource;
use nbt_wire::primitive::{
    read_array, read_byte_string, read_bytes, read_f32, read_f64, read_i8, read_i16, read_i32,
    read_i32_array, read_i64, read_u32,
};

use crate::error::DecodeError;

/// Read one kind byte and map it to a [`TagKind`].
///
/// # Errors
///
/// - [`DecodeError::UnknownTagKind`] for ids above `0x0B`, carrying the
///   offset of the offending byte.
/// - [`DecodeError::PrematureEndOfInput`] / [`DecodeError::Transport`] from
///   the source.
pub fn read_kind<S: ByteSource + ?Sized>(src: &mut S) -> Result<TagKind, DecodeError> {
    let offset = src.position();
    let [id] = read_array::<1, S>(src)?;
    TagKind::from_wire_id(id).ok_or(DecodeError::UnknownTagKind { id, offset })
}

/// Read a tag name (length-prefixed raw bytes).
///
/// # Errors
///
/// Source failures only.
pub fn read_name<S: ByteSource + ?Sized>(src: &mut S) -> Result<ByteString, DecodeError> {
    Ok(ByteString::new(read_byte_string(src)?))
}

/// Read a 32-bit length or count prefix as an unsigned size.
///
/// # Errors
///
/// Source failures only.
pub fn read_length<S: ByteSource + ?Sized>(src: &mut S) -> Result<usize, DecodeError> {
    let raw = read_u32(src)?;
    Ok(usize::try_from(raw).unwrap_or(usize::MAX))
}

/// Decode the payload of a non-container kind.
///
/// This is a pure dispatch from kind to primitive reader; no nesting is
/// possible below these kinds, so no engine state is involved.
///
/// | Kind      | Wire payload                 |
/// |-----------|------------------------------|
/// | Byte      | `i8`                         |
/// | Short     | `i16` big-endian             |
/// | Int       | `i32` big-endian             |
/// | Long      | `i64` big-endian             |
/// | Float     | binary32, host byte order    |
/// | Double    | binary64, host byte order    |
/// | ByteArray | `u32` length + raw bytes     |
/// | String    | `u16` length + raw bytes     |
/// | IntArray  | `u32` length + `i32` values  |
///
/// # Errors
///
/// Source failures only.
///
/// # Panics
///
/// Panics when called with [`TagKind::End`], [`TagKind::List`] or
/// [`TagKind::Compound`]. Those are structural kinds that the engine
/// handles itself; reaching this function with one is an engine bug, not
/// bad input.
pub fn read_simple_payload<S: ByteSource + ?Sized>(
    src: &mut S,
    kind: TagKind,
) -> Result<TagValue, DecodeError> {
    let value = match kind {
        TagKind::Byte => TagValue::Byte(read_i8(src)?),
        TagKind::Short => TagValue::Short(read_i16(src)?),
        TagKind::Int => TagValue::Int(read_i32(src)?),
        TagKind::Long => TagValue::Long(read_i64(src)?),
        TagKind::Float => TagValue::Float(read_f32(src)?),
        TagKind::Double => TagValue::Double(read_f64(src)?),
        TagKind::ByteArray => {
            let len = read_length(src)?;
            TagValue::ByteArray(read_bytes(src, len)?)
        }
        TagKind::String => TagValue::String(read_name(src)?),
        TagKind::IntArray => {
            let len = read_length(src)?;
            TagValue::IntArray(read_i32_array(src, len)?)
        }
        TagKind::End | TagKind::List | TagKind::Compound => {
            panic!("read_simple_payload called with structural kind {kind}")
        }
    };
    Ok(value)
}
