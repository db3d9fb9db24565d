/// Default ceiling for zstd-decompressed payloads: 256 MiB.
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 256 * 1024 * 1024;

/// Default ceiling for input buffered by the async entry point: 256 MiB.
pub const DEFAULT_MAX_INPUT_SIZE: usize = 256 * 1024 * 1024;

/// Configuration for [`NbtDecoder`](crate::NbtDecoder).
///
/// ```text
/// ┌───────────────────────┬──────────────────────────────────────────────┐
/// │ Field                 │ Purpose                                      │
/// ├───────────────────────┼──────────────────────────────────────────────┤
/// │ max_depth             │ Optional cap on container nesting            │
/// │ reject_trailing_data  │ Fail when bytes follow the root tag          │
/// │ max_decompressed_size │ zstd output ceiling (decompression bombs)    │
/// │ max_input_size        │ Async buffering ceiling                      │
/// └───────────────────────┴──────────────────────────────────────────────┘
/// ```
///
/// The defaults impose no depth limit: the engine keeps its work stack on
/// the heap, so depth is bounded by memory and input size alone. Callers
/// that want a tighter bound on untrusted input can set one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum number of nested containers below the root. The root
    /// container itself is depth 1. `None` means unlimited.
    pub max_depth: Option<usize>,

    /// When `true`, bytes left over after the root tag produce
    /// `DecodeError::TrailingData`. Only applies to in-memory input.
    pub reject_trailing_data: bool,

    /// Upper bound on the size of a zstd-decompressed payload.
    pub max_decompressed_size: usize,

    /// Upper bound on the bytes `decode_async` will buffer.
    pub max_input_size: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            reject_trailing_data: false,
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}
