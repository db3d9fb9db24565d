//! One-byte tag kind identifiers as they appear on the wire.
//!
//! The `nbt-types` crate maps these onto the typed `TagKind` enum; the
//! constants live here so byte-level code can name them without depending on
//! the tag model.
//!
//! ```text
//! ┌──────┬────────────┬──────────────────────────────────────┐
//! │ Wire │ Kind       │ Payload                              │
//! ├──────┼────────────┼──────────────────────────────────────┤
//! │ 0x00 │ End        │ none (compound terminator)           │
//! │ 0x01 │ Byte       │ i8                                   │
//! │ 0x02 │ Short      │ i16                                  │
//! │ 0x03 │ Int        │ i32                                  │
//! │ 0x04 │ Long       │ i64                                  │
//! │ 0x05 │ Float      │ binary32                             │
//! │ 0x06 │ Double     │ binary64                             │
//! │ 0x07 │ ByteArray  │ i32 length + bytes                   │
//! │ 0x08 │ String     │ u16 length + bytes                   │
//! │ 0x09 │ List       │ element kind + i32 count + payloads  │
//! │ 0x0A │ Compound   │ named entries until End              │
//! │ 0x0B │ IntArray   │ i32 length + i32 values              │
//! └──────┴────────────┴──────────────────────────────────────┘
//! ```

pub const END: u8 = 0x00;
pub const BYTE: u8 = 0x01;
pub const SHORT: u8 = 0x02;
pub const INT: u8 = 0x03;
pub const LONG: u8 = 0x04;
pub const FLOAT: u8 = 0x05;
pub const DOUBLE: u8 = 0x06;
pub const BYTE_ARRAY: u8 = 0x07;
pub const STRING: u8 = 0x08;
pub const LIST: u8 = 0x09;
pub const COMPOUND: u8 = 0x0A;
pub const INT_ARRAY: u8 = 0x0B;

/// Highest kind id this format defines.
pub const MAX_KIND: u8 = INT_ARRAY;
