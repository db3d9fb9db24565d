use std::collections::BTreeMap;

use nbt_types::{RootTag, TagValue, Visit};
use serde::Serialize;

/// Shape summary of a decoded tree.
///
/// `kinds` is keyed by display name (`TAG_Int`, ...) and lists only kinds
/// that occur. Depth counts from 0 at the root; a compound holding one
/// integer has `max_depth` 1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub total_tags: usize,
    pub max_depth: usize,
    pub kinds: BTreeMap<&'static str, usize>,
    pub byte_array_bytes: usize,
    pub int_array_ints: usize,
    pub string_bytes: usize,
}

impl TreeStats {
    /// Walk `root` once and tally its tags.
    #[must_use]
    pub fn collect(root: &RootTag) -> Self {
        let mut stats = Self::default();
        for visit in root.walk() {
            let Visit::Enter { value, depth, .. } = visit else {
                continue;
            };
            stats.total_tags += 1;
            stats.max_depth = stats.max_depth.max(depth);
            *stats.kinds.entry(value.kind().name()).or_default() += 1;
            match value {
                TagValue::ByteArray(bytes) => stats.byte_array_bytes += bytes.len(),
                TagValue::IntArray(ints) => stats.int_array_ints += ints.len(),
                TagValue::String(s) => stats.string_bytes += s.len(),
                _ => {}
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use nbt_types::{Compound, TagKind, TagList};

    use super::*;

    #[test]
    fn counts_every_tag() {
        let mut list = TagList::new(TagKind::Int);
        list.push(TagValue::Int(1)).unwrap();
        list.push(TagValue::Int(2)).unwrap();
        let mut c = Compound::new();
        c.insert("l", TagValue::List(list));
        c.insert("s", TagValue::String("abc".into()));
        c.insert("b", TagValue::ByteArray(vec![0; 10]));
        c.insert("i", TagValue::IntArray(vec![0; 3]));

        let stats = TreeStats::collect(&RootTag::new("", TagValue::Compound(c)));
        assert_eq!(stats.total_tags, 7);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.kinds["TAG_Int"], 2);
        assert_eq!(stats.kinds["TAG_Compound"], 1);
        assert!(!stats.kinds.contains_key("TAG_Long"));
        assert_eq!(stats.byte_array_bytes, 10);
        assert_eq!(stats.int_array_ints, 3);
        assert_eq!(stats.string_bytes, 3);
    }

    #[test]
    fn simple_root() {
        let stats = TreeStats::collect(&RootTag::new("x", TagValue::Double(1.0)));
        assert_eq!(stats.total_tags, 1);
        assert_eq!(stats.max_depth, 0);
        assert_eq!(stats.kinds.len(), 1);
    }
}
