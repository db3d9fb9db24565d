/// Errors raised by a [`ByteSource`](crate::source::ByteSource) or by the
/// primitive readers built on top of it.
///
/// Only two things can go wrong at this layer: the source runs out of bytes
/// before a read is satisfied, or the underlying transport fails for some
/// other reason. Everything about tag structure is judged one level up, in
/// `nbt-decoder`.
///
/// ```text
///   WireError
///   ├── UnexpectedEof { offset, needed }  ← source exhausted mid-read
///   └── Io(std::io::Error)               ← transport failure
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before `needed` bytes could be read at `offset`.
    ///
    /// `offset` is the byte position (from the start of the source) where
    /// the failed read began.
    #[error("unexpected end of input at offset {offset} (needed {needed} bytes)")]
    UnexpectedEof { offset: usize, needed: usize },

    /// The underlying reader failed for a reason other than end of input.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
