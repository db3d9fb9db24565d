use std::io::{ErrorKind, Read};

use crate::error::WireError;

/// A byte cursor that either yields exactly the requested number of bytes
/// or fails.
///
/// This is the only capability the decoder needs from its input. Short
/// reads are never surfaced: an implementation must fill the whole buffer
/// or return an error, and after an error the source is considered spent.
/// Callers that need timeouts or cancellation should build them into the
/// source itself and discard the decode call whose read was aborted.
///
/// ```text
///   ┌──────────────┐  read_exact_into(buf)  ┌──────────────┐
///   │ primitive    │ ─────────────────────▶ │ ByteSource   │
///   │ readers      │ ◀───────────────────── │ (slice/Read) │
///   └──────────────┘   Ok(()) | WireError   └──────────────┘
/// ```
pub trait ByteSource {
    /// Fill `buf` completely from the source.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the source holds fewer than
    ///   `buf.len()` bytes.
    /// - [`WireError::Io`] if the underlying transport fails.
    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<(), WireError>;

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;

    /// Number of bytes still available, when the source knows it.
    ///
    /// In-memory sources return `Some`, which lets length-prefixed reads
    /// fail before allocating for a length the input cannot satisfy.
    fn remaining_hint(&self) -> Option<usize> {
        None
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        (**self).read_exact_into(buf)
    }

    fn position(&self) -> usize {
        (**self).position()
    }

    fn remaining_hint(&self) -> Option<usize> {
        (**self).remaining_hint()
    }
}

/// Bounded cursor over an in-memory byte slice.
#[derive(Clone, Debug)]
pub struct SliceSource<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    /// Create a cursor at position 0.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Return the remaining unread bytes.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }
}

impl ByteSource for SliceSource<'_> {
    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        let needed = buf.len();
        let available = self.buf.len() - self.pos;
        if needed > available {
            return Err(WireError::UnexpectedEof {
                offset: self.pos,
                needed,
            });
        }

        buf.copy_from_slice(&self.buf[self.pos..self.pos + needed]);
        self.pos += needed;
        Ok(())
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn remaining_hint(&self) -> Option<usize> {
        Some(self.buf.len() - self.pos)
    }
}

/// Adapter turning any [`std::io::Read`] into a [`ByteSource`].
///
/// `ErrorKind::UnexpectedEof` from the reader becomes
/// [`WireError::UnexpectedEof`]; every other I/O failure is passed through
/// as [`WireError::Io`].
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    pos: usize,
}

impl<R: Read> ReadSource<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader, pos: 0 }
    }

    /// Give back the wrapped reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn read_exact_into(&mut self, buf: &mut [u8]) -> Result<(), WireError> {
        match self.reader.read_exact(buf) {
            Ok(()) => {
                self.pos += buf.len();
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(WireError::UnexpectedEof {
                offset: self.pos,
                needed: buf.len(),
            }),
            Err(e) => Err(WireError::Io(e)),
        }
    }

    fn position(&self) -> usize {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    /// Reader that always fails with a non-EOF error.
    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "connection reset"))
        }
    }

    #[test]
    fn slice_source_reads_in_order() {
        let mut src = SliceSource::new(&[1, 2, 3, 4]);
        let mut a = [0u8; 1];
        let mut b = [0u8; 3];
        src.read_exact_into(&mut a).unwrap();
        src.read_exact_into(&mut b).unwrap();
        assert_eq!(a, [1]);
        assert_eq!(b, [2, 3, 4]);
        assert_eq!(src.position(), 4);
        assert_eq!(src.remaining_hint(), Some(0));
    }

    #[test]
    fn slice_source_short_read_fails_without_consuming() {
        let mut src = SliceSource::new(&[1, 2]);
        let mut buf = [0u8; 3];
        let err = src.read_exact_into(&mut buf).unwrap_err();
        assert!(matches!(
            err,
            WireError::UnexpectedEof {
                offset: 0,
                needed: 3
            }
        ));
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn zero_length_read_always_succeeds() {
        let mut src = SliceSource::new(&[]);
        src.read_exact_into(&mut []).unwrap();
        assert_eq!(src.position(), 0);
    }

    #[test]
    fn read_source_maps_eof() {
        let mut src = ReadSource::new(io::Cursor::new(vec![9u8]));
        let mut one = [0u8; 1];
        src.read_exact_into(&mut one).unwrap();
        assert_eq!(src.position(), 1);

        let err = src.read_exact_into(&mut one).unwrap_err();
        assert!(matches!(
            err,
            WireError::UnexpectedEof {
                offset: 1,
                needed: 1
            }
        ));
    }

    #[test]
    fn read_source_passes_through_transport_errors() {
        let mut src = ReadSource::new(BrokenPipe);
        let mut buf = [0u8; 2];
        let err = src.read_exact_into(&mut buf).unwrap_err();
        match err {
            WireError::Io(e) => assert_eq!(e.kind(), ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    fn read_one<S: ByteSource>(mut src: S) -> (u8, usize, Option<usize>) {
        let mut buf = [0u8; 1];
        src.read_exact_into(&mut buf).unwrap();
        (buf[0], src.position(), src.remaining_hint())
    }

    #[test]
    fn mut_ref_forwards() {
        let mut inner = SliceSource::new(&[7, 8]);
        assert_eq!(read_one(&mut inner), (7, 1, Some(1)));
        assert_eq!(inner.position(), 1);
    }
}
