use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::mem;

use rustc_hash::FxBuildHasher;

use crate::byte_string::ByteString;
use crate::deep;
use crate::teardown;
use crate::value::TagValue;

/// Named-field container: unique [`ByteString`] names mapped to values.
///
/// Iteration order is unspecified. Inserting a name that is already present
/// replaces the earlier value, which is also how the decoder treats a
/// document that repeats a name inside one compound.
#[derive(Default)]
pub struct Compound {
    entries: HashMap<ByteString, TagValue, FxBuildHasher>,
}

impl Compound {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Insert `value` under `name`, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<ByteString>, value: TagValue) -> Option<TagValue> {
        self.entries.insert(name.into(), value)
    }

    #[must_use]
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&TagValue> {
        self.entries.get(name.as_ref())
    }

    pub fn get_mut(&mut self, name: impl AsRef<[u8]>) -> Option<&mut TagValue> {
        self.entries.get_mut(name.as_ref())
    }

    pub fn remove(&mut self, name: impl AsRef<[u8]>) -> Option<TagValue> {
        self.entries.remove(name.as_ref())
    }

    #[must_use]
    pub fn contains_key(&self, name: impl AsRef<[u8]>) -> bool {
        self.entries.contains_key(name.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, ByteString, TagValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, ByteString, TagValue> {
        self.entries.keys()
    }

    /// Entries ordered byte-wise by name, for deterministic output.
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<(&ByteString, &TagValue)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub(crate) fn drain_values(&mut self) -> impl Iterator<Item = TagValue> + '_ {
        self.entries.drain().map(|(_, value)| value)
    }
}

impl PartialEq for Compound {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = Vec::new();
        deep::compound_pairs(self, other, &mut pending) && deep::pairs_equal(pending)
    }
}

impl Clone for Compound {
    fn clone(&self) -> Self {
        deep::clone_compound(self)
    }
}

/// Members print in byte-wise name order.
impl fmt::Debug for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        deep::fmt_compound(self, f)
    }
}

impl Drop for Compound {
    fn drop(&mut self) {
        if self.entries.values().any(TagValue::is_container) {
            let children: Vec<TagValue> = mem::take(&mut self.entries).into_values().collect();
            teardown::dismantle(children);
        }
    }
}

impl<K: Into<ByteString>> FromIterator<(K, TagValue)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, TagValue)>>(iter: I) -> Self {
        let mut compound = Self::new();
        for (name, value) in iter {
            compound.insert(name, value);
        }
        compound
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a ByteString, &'a TagValue);
    type IntoIter = hash_map::Iter<'a, ByteString, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
