//! Integration test: decode → render
//!
//! Feeds raw wire bytes through the decoder and renders the resulting tree
//! in both output modes, checking the properties a reader of the dump
//! relies on: member order, indentation, quoting and lossy text.

use nbt_decoder::read_nbt;
use nbt_render::{DefaultRenderer, NbtRenderer, OutputMode, RenderConfig, TreeStats};
use nbt_types::RootTag;
use nbt_wire::SliceSource;

/// `{ "z": 1b, "a b": "ok", "bad": <ff fe> }` named "doc".
const DOC: &[u8] = &[
    0x0A, 0x00, 0x03, b'd', b'o', b'c', // root compound "doc"
    0x01, 0x00, 0x01, b'z', 0x01, // z: 1b
    0x08, 0x00, 0x03, b'a', b' ', b'b', 0x00, 0x02, b'o', b'k', // "a b": "ok"
    0x08, 0x00, 0x03, b'b', b'a', b'd', 0x00, 0x02, 0xFF, 0xFE, // bad: invalid UTF-8
    0x00,
];

fn decoded() -> RootTag {
    read_nbt(&mut SliceSource::new(DOC)).expect("fixture decodes")
}

#[test]
fn pretty_pipeline_sorts_and_indents() {
    let config = RenderConfig {
        mode: OutputMode::Pretty,
        indent: 2,
    };
    let out = DefaultRenderer.render(&decoded(), &config);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        [
            "TAG_Compound(\"doc\"): 3 entries",
            "{",
            "  TAG_String(\"a b\"): ok",
            "  TAG_String(\"bad\"): \u{FFFD}\u{FFFD}",
            "  TAG_Byte(\"z\"): 1",
            "}",
        ]
    );
}

#[test]
fn snbt_pipeline_quotes_where_needed() {
    let config = RenderConfig {
        mode: OutputMode::Snbt,
        ..RenderConfig::default()
    };
    let out = DefaultRenderer.render(&decoded(), &config);
    assert_eq!(out, "{\"a b\":\"ok\",bad:\"\u{FFFD}\u{FFFD}\",z:1b}");
}

#[test]
fn stats_pipeline() {
    let stats = TreeStats::collect(&decoded());
    assert_eq!(stats.total_tags, 4);
    assert_eq!(stats.max_depth, 1);
    assert_eq!(stats.string_bytes, 4);
}
