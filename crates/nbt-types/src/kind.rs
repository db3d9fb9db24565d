use std::fmt;

use nbt_wire::kind_id;

/// Tag kind discriminants.
///
/// Each variant maps to the one-byte wire id from `nbt_wire::kind_id`.
/// Unlike an open enumeration, the set is closed: an id outside `0..=11`
/// is not a kind at all and [`from_wire_id`](Self::from_wire_id) returns
/// `None`, which the decoder reports as an unknown-kind error.
///
/// ```text
/// ┌──────┬────────────┬────────────────┬───────────┐
/// │ Wire │ Variant    │ Display name   │ Container │
/// ├──────┼────────────┼────────────────┼───────────┤
/// │ 0x00 │ End        │ TAG_End        │           │
/// │ 0x01 │ Byte       │ TAG_Byte       │           │
/// │ 0x02 │ Short      │ TAG_Short      │           │
/// │ 0x03 │ Int        │ TAG_Int        │           │
/// │ 0x04 │ Long       │ TAG_Long       │           │
/// │ 0x05 │ Float      │ TAG_Float      │           │
/// │ 0x06 │ Double     │ TAG_Double     │           │
/// │ 0x07 │ ByteArray  │ TAG_Byte_Array │           │
/// │ 0x08 │ String     │ TAG_String     │           │
/// │ 0x09 │ List       │ TAG_List       │ yes       │
/// │ 0x0A │ Compound   │ TAG_Compound   │ yes       │
/// │ 0x0B │ IntArray   │ TAG_Int_Array  │           │
/// └──────┴────────────┴────────────────┴───────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    /// Compound terminator. Never a value in a decoded tree; only appears
    /// as the declared element kind of an empty list.
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
}

impl TagKind {
    /// Every kind, in wire-id order.
    pub const ALL: [TagKind; 12] = [
        Self::End,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::ByteArray,
        Self::String,
        Self::List,
        Self::Compound,
        Self::IntArray,
    ];

    /// Return the single-byte wire id for this kind.
    #[must_use]
    pub fn wire_id(self) -> u8 {
        match self {
            Self::End => kind_id::END,
            Self::Byte => kind_id::BYTE,
            Self::Short => kind_id::SHORT,
            Self::Int => kind_id::INT,
            Self::Long => kind_id::LONG,
            Self::Float => kind_id::FLOAT,
            Self::Double => kind_id::DOUBLE,
            Self::ByteArray => kind_id::BYTE_ARRAY,
            Self::String => kind_id::STRING,
            Self::List => kind_id::LIST,
            Self::Compound => kind_id::COMPOUND,
            Self::IntArray => kind_id::INT_ARRAY,
        }
    }

    /// Parse a wire byte into a [`TagKind`].
    ///
    /// Returns `None` for ids above `0x0B`.
    #[must_use]
    pub fn from_wire_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Conventional display name, e.g. `TAG_Compound`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::End => "TAG_End",
            Self::Byte => "TAG_Byte",
            Self::Short => "TAG_Short",
            Self::Int => "TAG_Int",
            Self::Long => "TAG_Long",
            Self::Float => "TAG_Float",
            Self::Double => "TAG_Double",
            Self::ByteArray => "TAG_Byte_Array",
            Self::String => "TAG_String",
            Self::List => "TAG_List",
            Self::Compound => "TAG_Compound",
            Self::IntArray => "TAG_Int_Array",
        }
    }

    /// `true` for the two kinds that nest other tags.
    #[must_use]
    pub fn is_container(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
