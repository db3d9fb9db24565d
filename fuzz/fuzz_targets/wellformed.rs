#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use nbt_decoder::read_nbt;
use nbt_render::TreeStats;
use nbt_tests::NbtBytes;
use nbt_types::TagKind;
use nbt_wire::SliceSource;

#[derive(Debug, Arbitrary)]
enum Node {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
    Str(String),
    Ints(Vec<i32>),
    Compound(Vec<(String, Node)>),
    IntList(Vec<i32>),
    CompoundList(Vec<Vec<(String, Node)>>),
}

fn kind_of(node: &Node) -> TagKind {
    match node {
        Node::Byte(_) => TagKind::Byte,
        Node::Short(_) => TagKind::Short,
        Node::Int(_) => TagKind::Int,
        Node::Long(_) => TagKind::Long,
        Node::Float(_) => TagKind::Float,
        Node::Double(_) => TagKind::Double,
        Node::Bytes(_) => TagKind::ByteArray,
        Node::Str(_) => TagKind::String,
        Node::Ints(_) => TagKind::IntArray,
        Node::Compound(_) => TagKind::Compound,
        Node::IntList(_) | Node::CompoundList(_) => TagKind::List,
    }
}

fn clip(s: &str) -> &str {
    let mut end = s.len().min(usize::from(u16::MAX));
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Write `node`'s payload and return the number of tags it contributes.
fn write_payload(out: NbtBytes, node: &Node) -> (NbtBytes, usize) {
    match node {
        Node::Byte(v) => (out.i8(*v), 1),
        Node::Short(v) => (out.i16(*v), 1),
        Node::Int(v) => (out.i32(*v), 1),
        Node::Long(v) => (out.i64(*v), 1),
        Node::Float(v) => (out.f32(*v), 1),
        Node::Double(v) => (out.f64(*v), 1),
        Node::Bytes(v) => (out.byte_array(v), 1),
        Node::Str(s) => (out.string(clip(s)), 1),
        Node::Ints(v) => (out.int_array(v), 1),
        Node::Compound(entries) => write_compound(out, entries),
        Node::IntList(v) => {
            let out = v
                .iter()
                .fold(out.list_header(TagKind::Int, v.len() as u32), |b, i| b.i32(*i));
            (out, 1 + v.len())
        }
        Node::CompoundList(items) => {
            let mut out = out.list_header(TagKind::Compound, items.len() as u32);
            let mut tags = 1;
            for entries in items {
                let (next, n) = write_compound(out, entries);
                out = next;
                tags += n;
            }
            (out, tags)
        }
    }
}

fn write_compound(mut out: NbtBytes, entries: &[(String, Node)]) -> (NbtBytes, usize) {
    let mut tags = 1;
    let mut seen = std::collections::HashSet::new();
    for (name, child) in entries {
        let name = clip(name);
        // Duplicate names collapse on decode; keep counts exact by skipping them.
        if !seen.insert(name) {
            continue;
        }
        let (next, n) = write_payload(out.tag(kind_of(child), name), child);
        out = next;
        tags += n;
    }
    (out.end(), tags)
}

// Fuzz target: generated well-formed documents always decode.
//
// Builds a document from an arbitrary tree, decodes it, and checks that
// the decoded tree has exactly as many tags as were written.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(node) = Node::arbitrary(&mut u) else {
        return;
    };

    let header = NbtBytes::new().tag(kind_of(&node), "root");
    let (bytes, tags) = write_payload(header, &node);
    let bytes = bytes.build();

    let root = read_nbt(&mut SliceSource::new(&bytes))
        .unwrap_or_else(|e| panic!("well-formed document rejected: {e}"));
    assert_eq!(TreeStats::collect(&root).total_tags, tags);
});
