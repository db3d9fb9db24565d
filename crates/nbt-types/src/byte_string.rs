use std::borrow::{Borrow, Cow};
use std::fmt;

/// Raw byte sequence used for tag names and String payloads.
///
/// The format calls these strings, but the bytes are kept verbatim and
/// never validated as text. Equality, ordering and hashing are byte-wise;
/// [`to_string_lossy`](Self::to_string_lossy) exists for presentation only.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode as UTF-8, replacing invalid sequences with `U+FFFD`.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.0.escape_ascii())
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

// Hash of `ByteString` equals hash of the inner slice, so compounds can be
// queried with `&[u8]` and `&str` keys.
impl Borrow<[u8]> for ByteString {
    fn borrow(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<String> for ByteString {
    fn from(s: String) -> Self {
        Self(s.into_bytes())
    }
}

impl PartialEq<[u8]> for ByteString {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn equality_is_bytewise() {
        let a = ByteString::from("abc");
        let b = ByteString::from(vec![b'a', b'b', b'c']);
        assert_eq!(a, b);
        assert_eq!(a, "abc");
        assert!(a == *b"abc".as_slice());
    }

    #[test]
    fn invalid_utf8_is_preserved() {
        let s = ByteString::from(vec![0xFF, b'x']);
        assert_eq!(s.as_bytes(), &[0xFF, b'x']);
        assert_eq!(s.to_string_lossy(), "\u{FFFD}x");
    }

    #[test]
    fn debug_escapes_non_ascii() {
        let s = ByteString::from(vec![b'h', b'i', 0x00, 0xC3]);
        assert_eq!(format!("{s:?}"), "b\"hi\\x00\\xc3\"");
    }

    #[test]
    fn lookup_by_slice_matches_owned_key() {
        let mut map = HashMap::new();
        map.insert(ByteString::from("key"), 1);
        assert_eq!(map.get(b"key".as_slice()), Some(&1));
    }
}
