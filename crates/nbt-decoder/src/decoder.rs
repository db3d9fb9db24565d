use std::borrow::Cow;
use std::io::Read;

use nbt_types::RootTag;
use nbt_wire::{ByteSource, ReadSource, SliceSource};

use crate::config::DecoderConfig;
use crate::decompression;
use crate::engine::read_root;
use crate::error::DecodeError;

/// Configured NBT decoder.
///
/// Wraps the explicit-stack engine with the options from
/// [`DecoderConfig`]. For in-memory input, decoding proceeds in three
/// steps:
///
///   1. **Decompression**: if the buffer starts with the zstd magic
///      (`28 B5 2F FD`), decompress it first, bounded by
///      `max_decompressed_size`.
///   2. **Tree**: decode one named root tag, honoring `max_depth`.
///   3. **Termination**: if `reject_trailing_data` is set, any bytes left
///      after the root are an error.
///
/// [`decode_reader`](Self::decode_reader) and
/// [`decode_source`](Self::decode_source) skip steps 1 and 3; they read
/// exactly one root tag and leave the rest of the stream untouched.
///
/// # Example
///
/// ```rust
/// use nbt_decoder::{DecoderConfig, NbtDecoder};
///
/// let bytes = [0x0A, 0x00, 0x00, 0x03, 0x00, 0x01, b'x', 0, 0, 0, 42, 0x00];
/// let decoder = NbtDecoder::new(DecoderConfig {
///     reject_trailing_data: true,
///     ..DecoderConfig::default()
/// });
/// let root = decoder.decode(&bytes).unwrap();
/// assert_eq!(root.value.as_compound().unwrap().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct NbtDecoder {
    config: DecoderConfig,
}

impl NbtDecoder {
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a complete in-memory payload, plain or zstd-compressed.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`] from the engine, plus
    /// [`DecodeError::DecompressFailed`] / [`DecodeError::DecompressionBomb`]
    /// for compressed input and [`DecodeError::TrailingData`] when the
    /// trailing-data check is enabled.
    pub fn decode(&self, payload: &[u8]) -> Result<RootTag, DecodeError> {
        let data: Cow<'_, [u8]> = if decompression::is_zstd(payload) {
            Cow::Owned(decompression::decompress(
                payload,
                self.config.max_decompressed_size,
            )?)
        } else {
            Cow::Borrowed(payload)
        };

        let mut src = SliceSource::new(&data);
        let root = read_root(&mut src, self.config.max_depth)?;

        let extra_bytes = src.remaining().len();
        if self.config.reject_trailing_data && extra_bytes > 0 {
            return Err(DecodeError::TrailingData { extra_bytes });
        }
        Ok(root)
    }

    /// Decode one root tag from a blocking reader.
    ///
    /// The reader is consumed only up to the end of the root tag. Input is
    /// never decompressed here; wrap the reader yourself if it is
    /// compressed.
    ///
    /// # Errors
    ///
    /// Any engine [`DecodeError`]. I/O failures other than end of input
    /// surface as [`DecodeError::Transport`].
    pub fn decode_reader<R: Read>(&self, reader: R) -> Result<RootTag, DecodeError> {
        self.decode_source(&mut ReadSource::new(reader))
    }

    /// Decode one root tag from any [`ByteSource`].
    ///
    /// # Errors
    ///
    /// Any engine [`DecodeError`].
    pub fn decode_source<S: ByteSource + ?Sized>(&self, src: &mut S) -> Result<RootTag, DecodeError> {
        read_root(src, self.config.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use nbt_types::TagValue;

    use super::*;

    const X_IS_42: [u8; 12] = [
        0x0A, 0x00, 0x00, 0x03, 0x00, 0x01, b'x', 0x00, 0x00, 0x00, 0x2A, 0x00,
    ];

    fn x_value(root: &RootTag) -> Option<&TagValue> {
        root.value.as_compound().and_then(|c| c.get("x"))
    }

    #[test]
    fn default_decoder_ignores_trailing_data() {
        let mut bytes = X_IS_42.to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        let root = NbtDecoder::default().decode(&bytes).unwrap();
        assert_eq!(x_value(&root), Some(&TagValue::Int(42)));
    }

    #[test]
    fn strict_decoder_rejects_trailing_data() {
        let mut bytes = X_IS_42.to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        let decoder = NbtDecoder::new(DecoderConfig {
            reject_trailing_data: true,
            ..DecoderConfig::default()
        });
        assert!(matches!(
            decoder.decode(&bytes),
            Err(DecodeError::TrailingData { extra_bytes: 3 })
        ));
        assert!(decoder.decode(&X_IS_42).is_ok());
    }

    #[test]
    fn decodes_zstd_payload() {
        let compressed = zstd::encode_all(&X_IS_42[..], 3).unwrap();
        let root = NbtDecoder::default().decode(&compressed).unwrap();
        assert_eq!(x_value(&root), Some(&TagValue::Int(42)));
    }

    #[test]
    fn zstd_output_is_bounded() {
        let compressed = zstd::encode_all(&X_IS_42[..], 3).unwrap();
        let decoder = NbtDecoder::new(DecoderConfig {
            max_decompressed_size: 8,
            ..DecoderConfig::default()
        });
        assert!(matches!(
            decoder.decode(&compressed),
            Err(DecodeError::DecompressionBomb { limit: 8 })
        ));
    }

    #[test]
    fn depth_limit_is_applied() {
        let decoder = NbtDecoder::new(DecoderConfig {
            max_depth: Some(0),
            ..DecoderConfig::default()
        });
        assert!(matches!(
            decoder.decode(&X_IS_42),
            Err(DecodeError::DepthLimitExceeded { limit: 0 })
        ));
    }

    #[test]
    fn reader_stops_after_root() {
        let mut bytes = X_IS_42.to_vec();
        bytes.push(0xEE);
        let mut cursor = io::Cursor::new(bytes);
        let root = NbtDecoder::default().decode_reader(&mut cursor).unwrap();
        assert_eq!(x_value(&root), Some(&TagValue::Int(42)));
        assert_eq!(cursor.position(), 12);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn reader_failure_is_transport() {
        let err = NbtDecoder::default().decode_reader(FailingReader).unwrap_err();
        match err {
            DecodeError::Transport(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}
