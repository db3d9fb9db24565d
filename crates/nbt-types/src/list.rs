use std::fmt;
use std::mem;
use std::slice;

use crate::deep;
use crate::error::TypeError;
use crate::kind::TagKind;
use crate::teardown;
use crate::value::TagValue;

/// Ordered, homogeneous sequence of tag values.
///
/// Every element has the declared [`element_kind`](Self::element_kind).
/// [`push`](Self::push) enforces this, so a list cannot be built with mixed
/// kinds. An empty list may declare any kind, including
/// [`TagKind::End`], which is how writers usually encode "empty, kind
/// unknown".
pub struct TagList {
    element_kind: TagKind,
    values: Vec<TagValue>,
}

impl TagList {
    #[must_use]
    pub fn new(element_kind: TagKind) -> Self {
        Self::with_capacity(element_kind, 0)
    }

    #[must_use]
    pub fn with_capacity(element_kind: TagKind, capacity: usize) -> Self {
        Self {
            element_kind,
            values: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn element_kind(&self) -> TagKind {
        self.element_kind
    }

    /// Append a value of the declared element kind.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::ListKindMismatch`] if `value` has a different
    /// kind; the list is left unchanged.
    pub fn push(&mut self, value: TagValue) -> Result<(), TypeError> {
        let found = value.kind();
        if found != self.element_kind {
            return Err(TypeError::ListKindMismatch {
                expected: self.element_kind,
                found,
            });
        }
        self.values.push(value);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TagValue> {
        self.values.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TagValue] {
        &self.values
    }

    pub fn iter(&self) -> slice::Iter<'_, TagValue> {
        self.values.iter()
    }

    /// Take the elements out of the list.
    #[must_use]
    pub fn into_values(mut self) -> Vec<TagValue> {
        mem::take(&mut self.values)
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<TagValue> {
        &mut self.values
    }
}

impl PartialEq for TagList {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = Vec::new();
        deep::list_pairs(self, other, &mut pending) && deep::pairs_equal(pending)
    }
}

impl Clone for TagList {
    fn clone(&self) -> Self {
        deep::clone_list(self)
    }
}

impl fmt::Debug for TagList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        deep::fmt_list(self, f)
    }
}

impl Drop for TagList {
    fn drop(&mut self) {
        if self.values.iter().any(TagValue::is_container) {
            teardown::dismantle(mem::take(&mut self.values));
        }
    }
}

impl<'a> IntoIterator for &'a TagList {
    type Item = &'a TagValue;
    type IntoIter = slice::Iter<'a, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_accepts_matching_kind() {
        let mut list = TagList::new(TagKind::Int);
        list.push(TagValue::Int(1)).unwrap();
        list.push(TagValue::Int(2)).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), Some(&TagValue::Int(2)));
    }

    #[test]
    fn push_rejects_other_kinds() {
        let mut list = TagList::new(TagKind::Int);
        let err = list.push(TagValue::Short(1)).unwrap_err();
        assert_eq!(
            err,
            TypeError::ListKindMismatch {
                expected: TagKind::Int,
                found: TagKind::Short
            }
        );
        assert!(list.is_empty());
    }

    #[test]
    fn end_list_accepts_nothing() {
        let mut list = TagList::new(TagKind::End);
        assert!(list.push(TagValue::Byte(0)).is_err());
        assert_eq!(list.element_kind(), TagKind::End);
    }

    #[test]
    fn into_values_hands_back_elements() {
        let mut list = TagList::new(TagKind::Byte);
        list.push(TagValue::Byte(7)).unwrap();
        assert_eq!(list.into_values(), vec![TagValue::Byte(7)]);
    }

    #[test]
    fn deep_list_chain_drops_without_recursion() {
        let mut value = TagValue::List(TagList::new(TagKind::End));
        for _ in 0..200_000 {
            let mut outer = TagList::with_capacity(TagKind::List, 1);
            outer.push(value).unwrap();
            value = TagValue::List(outer);
        }
        drop(value);
    }
}
