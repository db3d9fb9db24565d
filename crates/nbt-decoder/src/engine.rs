use nbt_types::{ByteString, Compound, RootTag, TagKind, TagList, TagValue};
use nbt_wire::ByteSource;
use nbt_wire::primitive::read_u32;

use crate::error::DecodeError;
use crate::payload::{read_kind, read_name, read_simple_payload};

/// Upper bound on up-front reservation for inline list reads. The wire
/// count is untrusted; the list grows past this as elements actually
/// arrive.
const MAX_LIST_RESERVE: usize = 1024;

/// One unfinished container on the work stack.
///
/// ```text
///   stack[0]      Root       ← receives the finished top-level value
///   stack[1]      Compound   ← depth 1
///   stack[2]      List       ← depth 2
///   ...
///   stack[len-1]  innermost container being filled
/// ```
///
/// A finished value is always delivered to the frame directly below it,
/// so a nested container never has to remember where it came from.
enum Frame {
    Root(Option<TagValue>),
    Compound {
        entries: Compound,
        /// Name of the container child currently being decoded.
        pending_name: Option<ByteString>,
    },
    List {
        list: TagList,
        remaining: u32,
    },
}

/// Outcome of advancing the top frame by one unit of input.
enum Step {
    /// The top frame consumed input and stays open.
    Continue,
    /// A container child starts here; push a frame for it.
    Open(TagKind),
    /// The top frame is finished; pop it and deliver its value.
    Complete,
}

/// Explicit-stack decoding engine.
///
/// Nesting depth costs heap memory, never native stack: the drive loop is
/// a single `while` over [`Frame`]s, so arbitrarily deep input decodes (or
/// fails cleanly) without recursion.
struct Engine {
    stack: Vec<Frame>,
    max_depth: Option<usize>,
}

impl Engine {
    fn new(max_depth: Option<usize>) -> Self {
        Self {
            stack: vec![Frame::Root(None)],
            max_depth,
        }
    }

    /// Decode the payload of a container `kind` and return its value.
    fn run<S: ByteSource + ?Sized>(
        mut self,
        src: &mut S,
        kind: TagKind,
    ) -> Result<TagValue, DecodeError> {
        self.open(src, kind)?;

        while let Some(top) = self.stack.last_mut() {
            let step = match top {
                Frame::Root(slot) => {
                    return Ok(slot
                        .take()
                        .expect("root frame reached without a delivered value"));
                }
                Frame::Compound {
                    entries,
                    pending_name,
                } => advance_compound(src, entries, pending_name)?,
                Frame::List { list, remaining } => advance_list(list, remaining),
            };

            match step {
                Step::Continue => {}
                Step::Open(child) => self.open(src, child)?,
                Step::Complete => {
                    let finished = self.pop_value();
                    self.deliver(finished)?;
                }
            }
        }

        unreachable!("root frame is never popped")
    }

    /// Push a frame for a container whose kind byte (and name, if any) has
    /// already been read.
    fn open<S: ByteSource + ?Sized>(
        &mut self,
        src: &mut S,
        kind: TagKind,
    ) -> Result<(), DecodeError> {
        // stack[0] is the root slot, so the new container's depth equals
        // the current stack length.
        match self.max_depth {
            Some(limit) if self.stack.len() > limit => {
                return Err(DecodeError::DepthLimitExceeded { limit });
            }
            _ => {}
        }

        match kind {
            TagKind::Compound => {
                self.stack.push(Frame::Compound {
                    entries: Compound::new(),
                    pending_name: None,
                });
            }
            TagKind::List => {
                let element_kind = read_kind(src)?;
                let count = read_u32(src)?;
                if element_kind == TagKind::End && count > 0 {
                    return Err(DecodeError::InvalidListElementKind { count });
                }

                if element_kind.is_container() {
                    self.stack.push(Frame::List {
                        list: TagList::new(element_kind),
                        remaining: count,
                    });
                } else {
                    let list = read_simple_list(src, element_kind, count)?;
                    self.deliver(TagValue::List(list))?;
                }
            }
            other => unreachable!("open called with non-container kind {other}"),
        }
        Ok(())
    }

    fn pop_value(&mut self) -> TagValue {
        match self.stack.pop() {
            Some(Frame::Compound { entries, .. }) => TagValue::Compound(entries),
            Some(Frame::List { list, .. }) => TagValue::List(list),
            Some(Frame::Root(_)) | None => unreachable!("root frame popped as a container"),
        }
    }

    /// Hand a finished value to the frame on top of the stack.
    fn deliver(&mut self, value: TagValue) -> Result<(), DecodeError> {
        match self.stack.last_mut() {
            Some(Frame::Root(slot)) => *slot = Some(value),
            Some(Frame::Compound {
                entries,
                pending_name,
            }) => {
                let name = pending_name
                    .take()
                    .expect("compound child finished without a pending name");
                entries.insert(name, value);
            }
            Some(Frame::List { list, .. }) => list.push(value)?,
            None => unreachable!("value delivered to an empty stack"),
        }
        Ok(())
    }
}

/// Read one named entry of a compound, or its End terminator.
fn advance_compound<S: ByteSource + ?Sized>(
    src: &mut S,
    entries: &mut Compound,
    pending_name: &mut Option<ByteString>,
) -> Result<Step, DecodeError> {
    let kind = read_kind(src)?;
    if kind == TagKind::End {
        return Ok(Step::Complete);
    }

    let name = read_name(src)?;
    if kind.is_container() {
        *pending_name = Some(name);
        Ok(Step::Open(kind))
    } else {
        entries.insert(name, read_simple_payload(src, kind)?);
        Ok(Step::Continue)
    }
}

/// Account for one element of a container-element list.
fn advance_list(list: &TagList, remaining: &mut u32) -> Step {
    if *remaining == 0 {
        return Step::Complete;
    }
    *remaining -= 1;
    Step::Open(list.element_kind())
}

/// Read every element of a list whose elements cannot nest.
fn read_simple_list<S: ByteSource + ?Sized>(
    src: &mut S,
    element_kind: TagKind,
    count: u32,
) -> Result<TagList, DecodeError> {
    let count = usize::try_from(count).unwrap_or(usize::MAX);
    let mut list = TagList::with_capacity(element_kind, count.min(MAX_LIST_RESERVE));
    for _ in 0..count {
        list.push(read_simple_payload(src, element_kind)?)?;
    }
    Ok(list)
}

/// Decode a complete named root tag from `src`, with an optional cap on
/// container nesting.
///
/// Reads exactly the bytes of one root tag; anything after it is left in
/// the source.
pub(crate) fn read_root<S: ByteSource + ?Sized>(
    src: &mut S,
    max_depth: Option<usize>,
) -> Result<RootTag, DecodeError> {
    let kind = read_kind(src)?;
    if kind == TagKind::End {
        return Err(DecodeError::EmptyRoot);
    }

    let name = read_name(src)?;
    let value = if kind.is_container() {
        Engine::new(max_depth).run(src, kind)?
    } else {
        read_simple_payload(src, kind)?
    };
    Ok(RootTag { name, value })
}

/// Decode one NBT document from a byte source.
///
/// The root may be any kind except End. Nesting depth is unlimited; use
/// [`NbtDecoder`](crate::NbtDecoder) with
/// [`DecoderConfig::max_depth`](crate::DecoderConfig::max_depth) to cap it.
///
/// # Errors
///
/// - [`DecodeError::EmptyRoot`] if the first kind byte is End.
/// - [`DecodeError::UnknownTagKind`] for a kind byte above `0x0B`.
/// - [`DecodeError::InvalidListElementKind`] for a non-empty list of End.
/// - [`DecodeError::PrematureEndOfInput`] if the source runs dry.
/// - [`DecodeError::Transport`] if the source fails.
///
/// # Example
///
/// ```rust
/// use nbt_decoder::read_nbt;
/// use nbt_wire::SliceSource;
///
/// let bytes = [0x0A, 0x00, 0x00, 0x03, 0x00, 0x01, b'x', 0, 0, 0, 42, 0x00];
/// let root = read_nbt(&mut SliceSource::new(&bytes)).unwrap();
/// let compound = root.value.as_compound().unwrap();
/// assert_eq!(compound.get("x").and_then(|v| v.as_int()), Some(42));
/// ```
pub fn read_nbt<S: ByteSource + ?Sized>(src: &mut S) -> Result<RootTag, DecodeError> {
    read_root(src, None)
}

#[cfg(test)]
mod tests {
    use nbt_wire::{ReadSource, SliceSource};

    use super::*;

    fn decode(bytes: &[u8]) -> Result<RootTag, DecodeError> {
        read_nbt(&mut SliceSource::new(bytes))
    }

    /// Root compound holding a chain of `levels` single-element lists of
    /// compounds.
    fn nested_bytes(levels: usize) -> Vec<u8> {
        let mut bytes = vec![0x0A, 0x00, 0x00];
        for _ in 0..levels {
            bytes.extend_from_slice(&[0x09, 0x00, 0x01, b'l', 0x0A, 0x00, 0x00, 0x00, 0x01]);
        }
        bytes.extend(std::iter::repeat_n(0x00, levels + 1));
        bytes
    }

    #[test]
    fn named_int_in_compound() {
        let root = decode(&[
            0x0A, 0x00, 0x00, 0x03, 0x00, 0x01, b'x', 0x00, 0x00, 0x00, 0x2A, 0x00,
        ])
        .unwrap();
        assert!(root.name.is_empty());
        let compound = root.value.as_compound().unwrap();
        assert_eq!(compound.len(), 1);
        assert_eq!(compound.get("x"), Some(&TagValue::Int(42)));
    }

    #[test]
    fn empty_compound() {
        let root = decode(&[0x0A, 0x00, 0x04, b'r', b'o', b'o', b't', 0x00]).unwrap();
        assert_eq!(root.name, "root");
        assert!(root.value.as_compound().unwrap().is_empty());
    }

    #[test]
    fn simple_root() {
        let root = decode(&[0x02, 0x00, 0x01, b's', 0xFF, 0xFE]).unwrap();
        assert_eq!(root.name, "s");
        assert_eq!(root.value, TagValue::Short(-2));
    }

    #[test]
    fn end_root_is_empty() {
        let mut src = SliceSource::new(&[0x00, 0xAA]);
        assert!(matches!(read_nbt(&mut src), Err(DecodeError::EmptyRoot)));
        assert_eq!(src.position(), 1, "only the kind byte is consumed");
    }

    #[test]
    fn list_of_end_with_zero_count_is_empty() {
        let root = decode(&[0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]).unwrap();
        let list = root.value.as_list().unwrap();
        assert_eq!(list.element_kind(), TagKind::End);
        assert!(list.is_empty());
    }

    #[test]
    fn list_of_end_with_nonzero_count_fails() {
        let err = decode(&[0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidListElementKind { count: 3 }
        ));
    }

    #[test]
    fn list_of_shorts() {
        let root = decode(&[
            0x09, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03, 0x00, 0x01, 0x80, 0x00, 0x7F, 0xFF,
        ])
        .unwrap();
        let list = root.value.as_list().unwrap();
        assert_eq!(list.element_kind(), TagKind::Short);
        assert_eq!(
            list.as_slice(),
            [
                TagValue::Short(1),
                TagValue::Short(-32768),
                TagValue::Short(32767)
            ]
        );
    }

    #[test]
    fn list_of_compounds() {
        let root = decode(&[
            0x09, 0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, 0x02, // list header
            0x01, 0x00, 0x01, b'a', 0x05, 0x00, // { a: 5b }
            0x00, // {}
        ])
        .unwrap();
        let list = root.value.as_list().unwrap();
        assert_eq!(list.len(), 2);
        let first = list.get(0).and_then(TagValue::as_compound).unwrap();
        assert_eq!(first.get("a"), Some(&TagValue::Byte(5)));
        assert!(list.get(1).and_then(TagValue::as_compound).unwrap().is_empty());
    }

    #[test]
    fn list_of_lists() {
        let root = decode(&[
            0x09, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x02, // outer: 2 lists
            0x01, 0x00, 0x00, 0x00, 0x01, 0x07, // [7b]
            0x00, 0x00, 0x00, 0x00, 0x00, // empty list of End
        ])
        .unwrap();
        let outer = root.value.as_list().unwrap();
        assert_eq!(outer.element_kind(), TagKind::List);
        let inner = outer.get(0).and_then(TagValue::as_list).unwrap();
        assert_eq!(inner.as_slice(), [TagValue::Byte(7)]);
        let empty = outer.get(1).and_then(TagValue::as_list).unwrap();
        assert_eq!(empty.element_kind(), TagKind::End);
        assert!(empty.is_empty());
    }

    #[test]
    fn nested_compound_entries_keep_their_names() {
        let root = decode(&[
            0x0A, 0x00, 0x00, // root {
            0x0A, 0x00, 0x01, b'a', // a: {
            0x0A, 0x00, 0x01, b'b', // b: {
            0x00, // }
            0x08, 0x00, 0x01, b's', 0x00, 0x02, b'h', b'i', // s: "hi"
            0x00, // }
            0x01, 0x00, 0x01, b'c', 0x01, // c: 1b
            0x00, // }
        ])
        .unwrap();
        let top = root.value.as_compound().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top.get("c"), Some(&TagValue::Byte(1)));
        let a = top.get("a").and_then(TagValue::as_compound).unwrap();
        assert!(a.get("b").and_then(TagValue::as_compound).unwrap().is_empty());
        assert_eq!(
            a.get("s").and_then(TagValue::as_string).map(|s| s.as_bytes()),
            Some(b"hi".as_slice())
        );
    }

    #[test]
    fn duplicate_keys_keep_last() {
        let root = decode(&[
            0x0A, 0x00, 0x00, //
            0x01, 0x00, 0x01, b'k', 0x01, //
            0x01, 0x00, 0x01, b'k', 0x02, //
            0x00,
        ])
        .unwrap();
        let compound = root.value.as_compound().unwrap();
        assert_eq!(compound.len(), 1);
        assert_eq!(compound.get("k"), Some(&TagValue::Byte(2)));
    }

    #[test]
    fn unknown_kind_inside_compound() {
        let err = decode(&[0x0A, 0x00, 0x00, 0x0C]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownTagKind { id: 0x0C, offset: 3 }
        ));
    }

    #[test]
    fn unknown_list_element_kind() {
        let err = decode(&[0x09, 0x00, 0x00, 0x0D, 0x00, 0x00, 0x00, 0x01]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnknownTagKind { id: 0x0D, offset: 3 }
        ));
    }

    #[test]
    fn missing_compound_terminator() {
        let err = decode(&[0x0A, 0x00, 0x00, 0x01, 0x00, 0x01, b'b', 0x05]).unwrap_err();
        assert!(matches!(err, DecodeError::PrematureEndOfInput { .. }));
    }

    #[test]
    fn huge_list_count_fails_on_input() {
        let err = decode(&[0x09, 0x00, 0x00, 0x03, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 1]).unwrap_err();
        assert!(matches!(err, DecodeError::PrematureEndOfInput { .. }));

        let err = decode(&[0x09, 0x00, 0x00, 0x0A, 0x7F, 0xFF, 0xFF, 0xFF, 0x00]).unwrap_err();
        assert!(matches!(err, DecodeError::PrematureEndOfInput { .. }));
    }

    #[test]
    fn trailing_bytes_are_left_in_source() {
        let mut src = SliceSource::new(&[0x01, 0x00, 0x00, 0x09, 0xAB, 0xCD]);
        let root = read_nbt(&mut src).unwrap();
        assert_eq!(root.value, TagValue::Byte(9));
        assert_eq!(src.remaining(), [0xAB, 0xCD]);
    }

    #[test]
    fn decodes_from_a_reader() {
        let bytes: &[u8] = &[0x08, 0x00, 0x00, 0x00, 0x03, b'a', b'b', b'c'];
        let mut src = ReadSource::new(bytes);
        let root = read_nbt(&mut src).unwrap();
        assert_eq!(root.value.as_string().unwrap(), &"abc");
    }

    #[test]
    fn deep_nesting_uses_heap_stack() {
        let levels = 50_000;
        let root = decode(&nested_bytes(levels)).unwrap();
        assert_eq!(root.value.depth(), 2 * levels);
    }

    #[test]
    fn depth_limit_counts_root_container() {
        // Root compound (1) -> list (2) -> compound (3).
        let bytes = nested_bytes(1);
        assert!(read_root(&mut SliceSource::new(&bytes), Some(3)).is_ok());
        let err = read_root(&mut SliceSource::new(&bytes), Some(2)).unwrap_err();
        assert!(matches!(err, DecodeError::DepthLimitExceeded { limit: 2 }));
    }

    #[test]
    fn depth_limit_ignores_simple_roots() {
        let root = read_root(&mut SliceSource::new(&[0x01, 0x00, 0x00, 0x05]), Some(0)).unwrap();
        assert_eq!(root.value, TagValue::Byte(5));
    }

    #[test]
    fn depth_limit_applies_to_simple_lists() {
        // A list of bytes inside the root compound sits at depth 2.
        let bytes = [
            0x0A, 0x00, 0x00, 0x09, 0x00, 0x01, b'l', 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        assert!(read_root(&mut SliceSource::new(&bytes), Some(2)).is_ok());
        assert!(matches!(
            read_root(&mut SliceSource::new(&bytes), Some(1)),
            Err(DecodeError::DepthLimitExceeded { limit: 1 })
        ));
    }
}
