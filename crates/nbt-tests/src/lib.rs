//! Fixture builders for the NBT integration tests and benchmarks.
//!
//! [`NbtBytes`] writes raw wire bytes one field at a time. It knows the
//! field encodings (big-endian integers, length-prefixed strings) but not
//! the grammar, so tests can just as easily produce malformed input as
//! well-formed documents.

#![allow(clippy::pedantic)]

use nbt_types::TagKind;

/// Chained builder for raw NBT bytes.
///
/// ```rust
/// use nbt_tests::NbtBytes;
/// use nbt_types::TagKind;
///
/// let bytes = NbtBytes::new()
///     .tag(TagKind::Compound, "")
///     .tag(TagKind::Int, "x")
///     .i32(42)
///     .end()
///     .build();
/// assert_eq!(bytes, nbt_tests::hex_fixture("0a0000 03 0001 78 0000002a 00"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NbtBytes {
    buf: Vec<u8>,
}

impl NbtBytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    pub fn kind(mut self, kind: TagKind) -> Self {
        self.buf.push(kind.wire_id());
        self
    }

    /// Length-prefixed byte string; used for names and String payloads.
    pub fn string(mut self, s: &str) -> Self {
        let len = u16::try_from(s.len()).expect("fixture string longer than u16::MAX");
        self.buf.extend_from_slice(&len.to_be_bytes());
        self.buf.extend_from_slice(s.as_bytes());
        self
    }

    /// Kind byte followed by a name: the header of a compound entry or root.
    pub fn tag(self, kind: TagKind, name: &str) -> Self {
        self.kind(kind).string(name)
    }

    /// Compound terminator.
    pub fn end(self) -> Self {
        self.kind(TagKind::End)
    }

    /// List payload header: element kind and count.
    pub fn list_header(self, element_kind: TagKind, count: u32) -> Self {
        self.kind(element_kind).u32(count)
    }

    pub fn i8(mut self, v: i8) -> Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn i16(mut self, v: i16) -> Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn i32(mut self, v: i32) -> Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn i64(mut self, v: i64) -> Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.buf.extend_from_slice(&v.to_be_bytes());
        self
    }

    /// Floats are written in host byte order, as the decoder reads them.
    pub fn f32(mut self, v: f32) -> Self {
        self.buf.extend_from_slice(&v.to_ne_bytes());
        self
    }

    pub fn f64(mut self, v: f64) -> Self {
        self.buf.extend_from_slice(&v.to_ne_bytes());
        self
    }

    /// u32 length followed by the bytes.
    pub fn byte_array(self, bytes: &[u8]) -> Self {
        let len = u32::try_from(bytes.len()).expect("fixture array too long");
        self.u32(len).raw(bytes)
    }

    /// u32 length followed by big-endian i32 values.
    pub fn int_array(self, ints: &[i32]) -> Self {
        let len = u32::try_from(ints.len()).expect("fixture array too long");
        ints.iter().fold(self.u32(len), |b, v| b.i32(*v))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn build(self) -> Vec<u8> {
        self.buf
    }
}

/// Decode a hex literal, ignoring whitespace.
pub fn hex_fixture(text: &str) -> Vec<u8> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(digits).unwrap_or_else(|e| panic!("bad hex fixture {text:?}: {e}"))
}

/// A document touching every tag kind.
///
/// ```text
/// Level {
///   bytes: [B; 1, 2, -1]      double: 0.25       empty: [] of End
///   entities: [{hp: 20s, id: "zombie"}, {id: "cow"}]
///   flag: 1b     float: 0.5f     int: i32::MAX     ints: [I; 1, -1]
///   long: i64::MIN     name: "Bananrama"     nested: {inner: {}}
///   short: i16::MIN    shorts: [1s, 2s, 3s]
/// }
/// ```
///
/// Entries are written out of name order on purpose.
pub fn sample_document() -> Vec<u8> {
    NbtBytes::new()
        .tag(TagKind::Compound, "Level")
        .tag(TagKind::Long, "long")
        .i64(i64::MIN)
        .tag(TagKind::Short, "short")
        .i16(i16::MIN)
        .tag(TagKind::Int, "int")
        .i32(i32::MAX)
        .tag(TagKind::Byte, "flag")
        .i8(1)
        .tag(TagKind::Float, "float")
        .f32(0.5)
        .tag(TagKind::Double, "double")
        .f64(0.25)
        .tag(TagKind::String, "name")
        .string("Bananrama")
        .tag(TagKind::ByteArray, "bytes")
        .byte_array(&[0x01, 0x02, 0xFF])
        .tag(TagKind::IntArray, "ints")
        .int_array(&[1, -1])
        .tag(TagKind::List, "shorts")
        .list_header(TagKind::Short, 3)
        .i16(1)
        .i16(2)
        .i16(3)
        .tag(TagKind::List, "entities")
        .list_header(TagKind::Compound, 2)
        .tag(TagKind::String, "id")
        .string("zombie")
        .tag(TagKind::Short, "hp")
        .i16(20)
        .end()
        .tag(TagKind::String, "id")
        .string("cow")
        .end()
        .tag(TagKind::List, "empty")
        .list_header(TagKind::End, 0)
        .tag(TagKind::Compound, "nested")
        .tag(TagKind::Compound, "inner")
        .end()
        .end()
        .end()
        .build()
}

/// Root compound holding a chain of `levels` single-element lists of
/// compounds, each list named `l`. The innermost compound is empty.
///
/// The decoded tree has depth `2 * levels` below the root.
pub fn nested_document(levels: usize) -> Vec<u8> {
    let mut bytes = NbtBytes::new().tag(TagKind::Compound, "");
    for _ in 0..levels {
        bytes = bytes.tag(TagKind::List, "l").list_header(TagKind::Compound, 1);
    }
    for _ in 0..=levels {
        bytes = bytes.end();
    }
    bytes.build()
}

/// A root list of `count` ints: the flat, wide shape.
pub fn int_list_document(count: u32) -> Vec<u8> {
    let mut bytes = NbtBytes::new()
        .tag(TagKind::List, "ints")
        .list_header(TagKind::Int, count);
    for i in 0..count {
        bytes = bytes.i32(i32::try_from(i).unwrap_or(i32::MAX));
    }
    bytes.build()
}
