#![no_main]

use libfuzzer_sys::fuzz_target;
use nbt_decoder::{DecoderConfig, NbtDecoder};
use nbt_render::SnbtRenderer;
use nbt_wire::{ReadSource, SliceSource};

// Fuzz target: slice and reader sources must agree.
//
// The same bytes are decoded through `SliceSource` (which fails fast on
// oversized lengths) and `ReadSource` (which reads in chunks). Both must
// succeed with the same tree or both must fail. Trees are compared through
// their SNBT rendering, which orders keys and treats NaN payloads alike.
fuzz_target!(|data: &[u8]| {
    let decoder = NbtDecoder::new(DecoderConfig {
        max_depth: Some(64),
        ..DecoderConfig::default()
    });

    let from_slice = decoder.decode_source(&mut SliceSource::new(data));
    let from_reader = decoder.decode_source(&mut ReadSource::new(data));

    match (from_slice, from_reader) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a.name, b.name);
            assert_eq!(SnbtRenderer::render_all(&a), SnbtRenderer::render_all(&b));
        }
        (Err(_), Err(_)) => {}
        (a, b) => panic!("sources disagree: slice={:?} reader={:?}", a.is_ok(), b.is_ok()),
    }
});
