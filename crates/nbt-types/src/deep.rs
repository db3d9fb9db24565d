//! Equality, cloning and debug formatting for trees of any depth.
//!
//! Derived impls would recurse once per nesting level, so a tree the
//! decoder built on the heap could still overflow the native stack when
//! compared, copied or printed. Each operation here keeps its pending work
//! in a `Vec`, like [`teardown`](crate::teardown) and [`Walk`](crate::Walk).

use std::collections::hash_map;
use std::fmt;
use std::slice;

use crate::byte_string::ByteString;
use crate::compound::Compound;
use crate::list::TagList;
use crate::value::TagValue;

// ── Equality ──────────────────────────────────────────────────────────────────

type Pairs<'a> = Vec<(&'a TagValue, &'a TagValue)>;

/// Compare every queued pair, queueing container children as they are met.
pub(crate) fn pairs_equal(mut pending: Pairs<'_>) -> bool {
    while let Some((a, b)) = pending.pop() {
        if !shallow_eq(a, b, &mut pending) {
            return false;
        }
    }
    true
}

/// Queue the element pairs of two lists. `false` if their shapes differ.
pub(crate) fn list_pairs<'a>(a: &'a TagList, b: &'a TagList, pending: &mut Pairs<'a>) -> bool {
    if a.element_kind() != b.element_kind() || a.len() != b.len() {
        return false;
    }
    pending.extend(a.iter().zip(b.iter()));
    true
}

/// Queue same-named member pairs of two compounds. `false` if the name sets
/// differ.
pub(crate) fn compound_pairs<'a>(
    a: &'a Compound,
    b: &'a Compound,
    pending: &mut Pairs<'a>,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (name, value) in a {
        match b.get(name) {
            Some(other) => pending.push((value, other)),
            None => return false,
        }
    }
    true
}

fn shallow_eq<'a>(a: &'a TagValue, b: &'a TagValue, pending: &mut Pairs<'a>) -> bool {
    match (a, b) {
        (TagValue::Byte(x), TagValue::Byte(y)) => x == y,
        (TagValue::Short(x), TagValue::Short(y)) => x == y,
        (TagValue::Int(x), TagValue::Int(y)) => x == y,
        (TagValue::Long(x), TagValue::Long(y)) => x == y,
        (TagValue::Float(x), TagValue::Float(y)) => x == y,
        (TagValue::Double(x), TagValue::Double(y)) => x == y,
        (TagValue::ByteArray(x), TagValue::ByteArray(y)) => x == y,
        (TagValue::String(x), TagValue::String(y)) => x == y,
        (TagValue::IntArray(x), TagValue::IntArray(y)) => x == y,
        (TagValue::List(x), TagValue::List(y)) => list_pairs(x, y, pending),
        (TagValue::Compound(x), TagValue::Compound(y)) => compound_pairs(x, y, pending),
        _ => false,
    }
}

// ── Cloning ───────────────────────────────────────────────────────────────────

/// A container copy in progress: the source children not yet copied and
/// the output they are copied into.
enum Building<'a> {
    List {
        source: slice::Iter<'a, TagValue>,
        out: TagList,
    },
    Compound {
        source: hash_map::Iter<'a, ByteString, TagValue>,
        out: Compound,
    },
}

enum Start<'a> {
    Leaf(TagValue),
    Open(Building<'a>),
}

impl<'a> Start<'a> {
    fn of(value: &'a TagValue) -> Self {
        match value {
            TagValue::Byte(v) => Self::Leaf(TagValue::Byte(*v)),
            TagValue::Short(v) => Self::Leaf(TagValue::Short(*v)),
            TagValue::Int(v) => Self::Leaf(TagValue::Int(*v)),
            TagValue::Long(v) => Self::Leaf(TagValue::Long(*v)),
            TagValue::Float(v) => Self::Leaf(TagValue::Float(*v)),
            TagValue::Double(v) => Self::Leaf(TagValue::Double(*v)),
            TagValue::ByteArray(v) => Self::Leaf(TagValue::ByteArray(v.clone())),
            TagValue::String(v) => Self::Leaf(TagValue::String(v.clone())),
            TagValue::IntArray(v) => Self::Leaf(TagValue::IntArray(v.clone())),
            TagValue::List(list) => Self::Open(Building::list(list)),
            TagValue::Compound(compound) => Self::Open(Building::compound(compound)),
        }
    }
}

impl<'a> Building<'a> {
    fn list(list: &'a TagList) -> Self {
        Self::List {
            source: list.iter(),
            out: TagList::with_capacity(list.element_kind(), list.len()),
        }
    }

    fn compound(compound: &'a Compound) -> Self {
        Self::Compound {
            source: compound.iter(),
            out: Compound::with_capacity(compound.len()),
        }
    }

    fn next_child(&mut self) -> Option<(Option<&'a ByteString>, &'a TagValue)> {
        match self {
            Self::List { source, .. } => source.next().map(|child| (None, child)),
            Self::Compound { source, .. } => source.next().map(|(name, child)| (Some(name), child)),
        }
    }

    fn accept(&mut self, name: Option<&ByteString>, value: TagValue) {
        match self {
            // Copied from a homogeneous list, so the kind already matches.
            Self::List { out, .. } => out.values_mut().push(value),
            Self::Compound { out, .. } => {
                let name = name.expect("compound member copied without its name");
                out.insert(name.clone(), value);
            }
        }
    }

    fn finish(self) -> TagValue {
        match self {
            Self::List { out, .. } => TagValue::List(out),
            Self::Compound { out, .. } => TagValue::Compound(out),
        }
    }
}

/// Copy a container and everything below it.
///
/// The stack holds one entry per container whose copy is still open,
/// paired with the name it will be stored under in its parent.
fn build(root: Building<'_>) -> TagValue {
    let mut stack = vec![(None, root)];
    while let Some((_, top)) = stack.last_mut() {
        if let Some((name, child)) = top.next_child() {
            match Start::of(child) {
                Start::Leaf(copy) => top.accept(name, copy),
                Start::Open(building) => stack.push((name, building)),
            }
        } else if let Some((name, done)) = stack.pop() {
            let value = done.finish();
            match stack.last_mut() {
                Some((_, parent)) => parent.accept(name, value),
                None => return value,
            }
        }
    }
    unreachable!("the outermost copy is returned when its entry is popped")
}

pub(crate) fn clone_value(value: &TagValue) -> TagValue {
    match Start::of(value) {
        Start::Leaf(copy) => copy,
        Start::Open(building) => build(building),
    }
}

pub(crate) fn clone_list(list: &TagList) -> TagList {
    let TagValue::List(copy) = build(Building::list(list)) else {
        unreachable!("a list copy finishes as a list");
    };
    copy
}

pub(crate) fn clone_compound(compound: &Compound) -> Compound {
    let TagValue::Compound(copy) = build(Building::compound(compound)) else {
        unreachable!("a compound copy finishes as a compound");
    };
    copy
}

// ── Debug formatting ──────────────────────────────────────────────────────────

enum Piece<'a> {
    Value(&'a TagValue),
    Member(&'a ByteString, &'a TagValue),
    Text(&'static str),
}

/// Queue `pieces` so they pop in order, separated by commas.
fn push_separated<'a, I>(stack: &mut Vec<Piece<'a>>, pieces: I)
where
    I: DoubleEndedIterator<Item = Piece<'a>>,
{
    for (i, piece) in pieces.rev().enumerate() {
        if i > 0 {
            stack.push(Piece::Text(", "));
        }
        stack.push(piece);
    }
}

fn open_list<'a>(
    f: &mut fmt::Formatter<'_>,
    list: &'a TagList,
    close: &'static str,
    stack: &mut Vec<Piece<'a>>,
) -> fmt::Result {
    write!(f, "{:?}: [", list.element_kind())?;
    stack.push(Piece::Text(close));
    push_separated(stack, list.iter().map(Piece::Value));
    Ok(())
}

// Members print in byte-wise name order so two equal compounds format alike.
fn open_compound<'a>(
    f: &mut fmt::Formatter<'_>,
    compound: &'a Compound,
    close: &'static str,
    stack: &mut Vec<Piece<'a>>,
) -> fmt::Result {
    f.write_str("{")?;
    stack.push(Piece::Text(close));
    push_separated(
        stack,
        compound
            .sorted_entries()
            .into_iter()
            .map(|(name, value)| Piece::Member(name, value)),
    );
    Ok(())
}

fn drain(f: &mut fmt::Formatter<'_>, mut stack: Vec<Piece<'_>>) -> fmt::Result {
    while let Some(piece) = stack.pop() {
        let value = match piece {
            Piece::Text(text) => {
                f.write_str(text)?;
                continue;
            }
            Piece::Member(name, value) => {
                write!(f, "{name:?}: ")?;
                value
            }
            Piece::Value(value) => value,
        };
        match value {
            TagValue::Byte(v) => write!(f, "Byte({v:?})")?,
            TagValue::Short(v) => write!(f, "Short({v:?})")?,
            TagValue::Int(v) => write!(f, "Int({v:?})")?,
            TagValue::Long(v) => write!(f, "Long({v:?})")?,
            TagValue::Float(v) => write!(f, "Float({v:?})")?,
            TagValue::Double(v) => write!(f, "Double({v:?})")?,
            TagValue::ByteArray(v) => write!(f, "ByteArray({v:?})")?,
            TagValue::String(v) => write!(f, "String({v:?})")?,
            TagValue::IntArray(v) => write!(f, "IntArray({v:?})")?,
            TagValue::List(list) => {
                f.write_str("List(")?;
                open_list(f, list, "])", &mut stack)?;
            }
            TagValue::Compound(compound) => {
                f.write_str("Compound(")?;
                open_compound(f, compound, "})", &mut stack)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn fmt_value(value: &TagValue, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    drain(f, vec![Piece::Value(value)])
}

pub(crate) fn fmt_list(list: &TagList, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut stack = Vec::new();
    f.write_str("TagList(")?;
    open_list(f, list, "])", &mut stack)?;
    drain(f, stack)
}

pub(crate) fn fmt_compound(compound: &Compound, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut stack = Vec::new();
    f.write_str("Compound(")?;
    open_compound(f, compound, "})", &mut stack)?;
    drain(f, stack)
}

#[cfg(test)]
mod tests {
    use crate::kind::TagKind;

    use super::*;

    fn chain(levels: usize) -> TagValue {
        let mut value = TagValue::Compound(Compound::new());
        for _ in 0..levels {
            let mut list = TagList::with_capacity(TagKind::Compound, 1);
            list.push(value).unwrap();
            let mut outer = Compound::with_capacity(1);
            outer.insert("next", TagValue::List(list));
            value = TagValue::Compound(outer);
        }
        value
    }

    fn sample() -> TagValue {
        let mut ints = TagList::new(TagKind::Int);
        ints.push(TagValue::Int(1)).unwrap();
        ints.push(TagValue::Int(-2)).unwrap();
        let mut c = Compound::new();
        c.insert("z", TagValue::String(ByteString::from("hi")));
        c.insert("a", TagValue::List(ints));
        c.insert("f", TagValue::Float(0.5));
        TagValue::Compound(c)
    }

    #[test]
    fn equality_sees_nested_differences() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a, b);

        let TagValue::Compound(c) = &mut b else { unreachable!() };
        c.insert("f", TagValue::Float(0.25));
        assert_ne!(a, b);
    }

    #[test]
    fn equality_checks_list_kind_and_names() {
        assert_ne!(
            TagValue::List(TagList::new(TagKind::End)),
            TagValue::List(TagList::new(TagKind::Int))
        );
        let x: Compound = [("x", TagValue::Byte(1))].into_iter().collect();
        let y: Compound = [("y", TagValue::Byte(1))].into_iter().collect();
        assert_ne!(x, y);
        assert_ne!(TagValue::Int(1), TagValue::Long(1));
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let nan = TagValue::Double(f64::NAN);
        assert_ne!(nan, nan.clone());
    }

    #[test]
    fn clone_is_equal_and_independent() {
        let original = sample();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        let TagValue::Compound(c) = &mut copy else { unreachable!() };
        c.remove("z");
        assert_eq!(original.as_compound().unwrap().len(), 3);
    }

    #[test]
    fn debug_is_sorted_and_single_line() {
        assert_eq!(
            format!("{:?}", sample()),
            "Compound({b\"a\": List(Int: [Int(1), Int(-2)]), b\"f\": Float(0.5), b\"z\": String(b\"hi\")})"
        );
        assert_eq!(
            format!("{:?}", TagList::new(TagKind::End)),
            "TagList(End: [])"
        );
    }

    #[test]
    fn deep_chain_compares_clones_and_formats() {
        let a = chain(100_000);
        let b = a.clone();
        assert!(a == b);
        assert_eq!(b.depth(), 200_000);

        let text = format!("{a:?}");
        assert!(text.starts_with("Compound({b\"next\": List(Compound: [Compound("));
        assert!(text.ends_with("])})"));
    }
}
