#![no_main]

use libfuzzer_sys::fuzz_target;
use nbt_decoder::{DecoderConfig, NbtDecoder};
use nbt_render::{SnbtRenderer, TreeStats};

// Fuzz target: full decoder entry point on arbitrary bytes.
//
// Catches bugs in:
// - Kind dispatch and unknown kind ids
// - List headers (End element kind, huge counts)
// - Length prefixes larger than the input
// - zstd detection and bounded decompression
// - The explicit-stack drive loop at any depth
//
// Decoded trees are also walked and rendered; neither may panic.
fuzz_target!(|data: &[u8]| {
    let decoder = NbtDecoder::new(DecoderConfig {
        max_decompressed_size: 1 << 20,
        ..DecoderConfig::default()
    });
    if let Ok(root) = decoder.decode(data) {
        let stats = TreeStats::collect(&root);
        assert!(stats.total_tags >= 1);
        let _ = SnbtRenderer::render_all(&root);
    }
});
