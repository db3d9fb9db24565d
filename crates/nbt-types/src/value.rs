use std::fmt;

use crate::byte_string::ByteString;
use crate::compound::Compound;
use crate::deep;
use crate::kind::TagKind;
use crate::list::TagList;
use crate::walk::{Visit, Walk};

/// A decoded tag value.
///
/// Closed union over the eleven value kinds. [`TagKind::End`] has no
/// variant: it only exists on the wire.
///
/// Equality, cloning, debug formatting and dropping all work without
/// native recursion, so they are safe on any tree the decoder produces.
/// Floats compare with IEEE semantics: a tree holding NaN is not equal to
/// itself.
pub enum TagValue {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<u8>),
    String(ByteString),
    List(TagList),
    Compound(Compound),
    IntArray(Vec<i32>),
}

impl TagValue {
    /// The kind discriminant of this value.
    #[must_use]
    pub fn kind(&self) -> TagKind {
        match self {
            Self::Byte(_) => TagKind::Byte,
            Self::Short(_) => TagKind::Short,
            Self::Int(_) => TagKind::Int,
            Self::Long(_) => TagKind::Long,
            Self::Float(_) => TagKind::Float,
            Self::Double(_) => TagKind::Double,
            Self::ByteArray(_) => TagKind::ByteArray,
            Self::String(_) => TagKind::String,
            Self::List(_) => TagKind::List,
            Self::Compound(_) => TagKind::Compound,
            Self::IntArray(_) => TagKind::IntArray,
        }
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::List(_) | Self::Compound(_))
    }

    #[must_use]
    pub fn as_byte(&self) -> Option<i8> {
        match self {
            Self::Byte(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_short(&self) -> Option<i16> {
        match self {
            Self::Short(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_byte_array(&self) -> Option<&[u8]> {
        match self {
            Self::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_string(&self) -> Option<&ByteString> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&TagList> {
        match self {
            Self::List(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Self::Compound(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Self::IntArray(v) => Some(v),
            _ => None,
        }
    }

    /// Deepest nesting level below this value; a leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        Walk::new(self, None)
            .filter_map(|visit| match visit {
                Visit::Enter { depth, .. } => Some(depth),
                Visit::Exit { .. } => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl PartialEq for TagValue {
    fn eq(&self, other: &Self) -> bool {
        deep::pairs_equal(vec![(self, other)])
    }
}

impl Clone for TagValue {
    fn clone(&self) -> Self {
        deep::clone_value(self)
    }
}

impl fmt::Debug for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        deep::fmt_value(self, f)
    }
}

impl From<i8> for TagValue {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for TagValue {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i32> for TagValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for TagValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for TagValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for TagValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<ByteString> for TagValue {
    fn from(v: ByteString) -> Self {
        Self::String(v)
    }
}

impl From<TagList> for TagValue {
    fn from(v: TagList) -> Self {
        Self::List(v)
    }
}

impl From<Compound> for TagValue {
    fn from(v: Compound) -> Self {
        Self::Compound(v)
    }
}

/// The single result of decoding one stream: the root's name and value.
#[derive(Clone, Debug, PartialEq)]
pub struct RootTag {
    pub name: ByteString,
    pub value: TagValue,
}

impl RootTag {
    #[must_use]
    pub fn new(name: impl Into<ByteString>, value: TagValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Walk the tree in pre-order, starting with the root itself.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.value, Some(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let cases = [
            (TagValue::Byte(0), TagKind::Byte),
            (TagValue::Short(0), TagKind::Short),
            (TagValue::Int(0), TagKind::Int),
            (TagValue::Long(0), TagKind::Long),
            (TagValue::Float(0.0), TagKind::Float),
            (TagValue::Double(0.0), TagKind::Double),
            (TagValue::ByteArray(vec![]), TagKind::ByteArray),
            (TagValue::String(ByteString::default()), TagKind::String),
            (TagValue::List(TagList::new(TagKind::End)), TagKind::List),
            (TagValue::Compound(Compound::new()), TagKind::Compound),
            (TagValue::IntArray(vec![]), TagKind::IntArray),
        ];
        for (value, kind) in cases {
            assert_eq!(value.kind(), kind);
            assert_eq!(value.is_container(), kind.is_container());
        }
    }

    #[test]
    fn accessors_only_match_their_kind() {
        let v = TagValue::Int(5);
        assert_eq!(v.as_int(), Some(5));
        assert_eq!(v.as_long(), None);
        assert!(v.as_compound().is_none());
    }

    #[test]
    fn depth_counts_nesting() {
        assert_eq!(TagValue::Int(1).depth(), 0);

        let mut inner = Compound::new();
        inner.insert("n", TagValue::Byte(1));
        let mut list = TagList::new(TagKind::Compound);
        list.push(TagValue::Compound(inner)).unwrap();
        let mut outer = Compound::new();
        outer.insert("l", TagValue::List(list));

        // outer → list → inner → byte
        assert_eq!(TagValue::Compound(outer).depth(), 3);
    }

    #[test]
    fn root_from_str_name() {
        let root = RootTag::new("", TagValue::Byte(1));
        assert!(root.name.is_empty());
        assert_eq!(root.value, TagValue::Byte(1));
    }
}
