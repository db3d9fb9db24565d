use nbt_types::RootTag;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::decoder::NbtDecoder;
use crate::error::DecodeError;

impl NbtDecoder {
    /// Decode a document read from an async source.
    ///
    /// The reader is drained to its end (at most `max_input_size` bytes)
    /// into memory, then decoded with [`decode`](Self::decode), so zstd
    /// input and the trailing-data check behave exactly as for a slice.
    /// The tree engine itself stays synchronous.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InputTooLarge`] if the reader yields more than
    ///   `max_input_size` bytes.
    /// - [`DecodeError::Transport`] if the reader fails.
    /// - Any error from [`decode`](Self::decode).
    ///
    /// # Example
    ///
    /// ```rust
    /// use nbt_decoder::NbtDecoder;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let bytes: &[u8] = &[0x01, 0x00, 0x01, b'b', 0x7F];
    /// let root = NbtDecoder::default().decode_async(bytes).await.unwrap();
    /// assert_eq!(root.value.as_byte(), Some(127));
    /// # }
    /// ```
    pub async fn decode_async<R: AsyncRead + Unpin>(
        &self,
        reader: R,
    ) -> Result<RootTag, DecodeError> {
        let limit = self.config().max_input_size;
        let mut buf = Vec::new();
        reader
            .take(u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1))
            .read_to_end(&mut buf)
            .await
            .map_err(DecodeError::Transport)?;

        if buf.len() > limit {
            return Err(DecodeError::InputTooLarge { limit });
        }
        self.decode(&buf)
    }
}

/// Decode a document from an async source with the default configuration.
///
/// # Errors
///
/// See [`NbtDecoder::decode_async`].
pub async fn decode_async<R: AsyncRead + Unpin>(reader: R) -> Result<RootTag, DecodeError> {
    NbtDecoder::default().decode_async(reader).await
}
