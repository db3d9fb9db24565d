//! Iterative destruction of nested containers.
//!
//! A derived drop would recurse once per nesting level, so a tree that was
//! decoded without touching the native stack could still overflow it when
//! freed. Containers instead move their children onto a heap stack and
//! empty each one before it is dropped.

use crate::value::TagValue;

/// Drop every value in `pending` without native recursion.
pub(crate) fn dismantle(mut pending: Vec<TagValue>) {
    while let Some(mut value) = pending.pop() {
        match &mut value {
            TagValue::List(list) => pending.append(list.values_mut()),
            TagValue::Compound(compound) => pending.extend(compound.drain_values()),
            _ => {}
        }
        // `value` is now childless and drops in constant stack depth.
    }
}
