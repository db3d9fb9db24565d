use nbt_types::TypeError;
use nbt_wire::WireError;

/// Errors that can occur while decoding an NBT stream.
///
/// Every variant is terminal: the decode call that raised it is abandoned,
/// its partial tree is dropped, and nothing is retried. The first four
/// variants are the engine's own input errors; the rest come from the
/// optional layers around it (depth limit, trailing-data check, zstd
/// input, async buffering).
///
/// ```text
///   DecodeError
///   ├── PrematureEndOfInput     ← source ran out mid-read
///   ├── Transport(io::Error)    ← source failed for another reason
///   ├── UnknownTagKind          ← kind byte outside 0..=11
///   ├── InvalidListElementKind  ← List of End with nonzero count
///   ├── EmptyRoot               ← root kind byte is End
///   ├── DepthLimitExceeded      ← nesting deeper than DecoderConfig::max_depth
///   ├── TrailingData            ← bytes left after the root (opt-in check)
///   ├── DecompressFailed        ← zstd frame could not be decoded
///   ├── DecompressionBomb       ← zstd output over the configured limit
///   ├── InputTooLarge           ← async input over the configured limit
///   └── Type(TypeError)         ← list homogeneity violated
/// ```
///
/// Bugs in the engine itself (for instance asking the simple-payload
/// reader for a container kind) are not represented here; they panic.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The byte source could not supply `needed` bytes at `offset`.
    #[error("premature end of input at offset {offset} (needed {needed} bytes)")]
    PrematureEndOfInput { offset: usize, needed: usize },

    /// The underlying reader failed for a reason other than running out of
    /// data.
    #[error("transport error: {0}")]
    Transport(#[source] std::io::Error),

    /// A kind id outside `0..=11` was read where a kind id was expected.
    ///
    /// `offset` is the position of the offending byte.
    #[error("unknown tag kind {id:#04X} at offset {offset}")]
    UnknownTagKind { id: u8, offset: usize },

    /// A list declared element kind End but a nonzero length.
    ///
    /// `count` is the raw 32-bit count from the wire.
    #[error("list of TAG_End declares {count} elements")]
    InvalidListElementKind { count: u32 },

    /// The root kind byte is End, so the stream holds no document.
    #[error("root tag kind is TAG_End; stream holds no document")]
    EmptyRoot,

    /// A container is nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Bytes remain after the root tag and the decoder was configured to
    /// reject them.
    #[error("unexpected data after root tag ({extra_bytes} bytes)")]
    TrailingData { extra_bytes: usize },

    /// The payload carried a zstd frame header but could not be
    /// decompressed.
    #[error("zstd decompression failed: {0}")]
    DecompressFailed(String),

    /// Decompressed data exceeds the configured safety limit.
    #[error("decompressed size exceeds limit {limit}")]
    DecompressionBomb { limit: usize },

    /// The async reader produced more bytes than the configured limit.
    #[error("input exceeds limit of {limit} bytes")]
    InputTooLarge { limit: usize },

    /// A value did not fit the list it was appended to.
    #[error(transparent)]
    Type(#[from] TypeError),
}

impl From<WireError> for DecodeError {
    fn from(err: WireError) -> Self {
        match err {
            WireError::UnexpectedEof { offset, needed } => {
                Self::PrematureEndOfInput { offset, needed }
            }
            WireError::Io(e) => Self::Transport(e),
        }
    }
}
