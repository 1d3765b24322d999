// SPDX-License-Identifier: MIT
//! Container reader for restoring original content from bigzip files

use std::io::{ErrorKind, Read, Write};

use crate::error::Result;
use crate::format::{ContainerHeader, FillMode};
use crate::writer::CHUNK_SIZE;

/// Reader for bigzip containers
///
/// The header is parsed and validated on `open`; nothing past the original
/// content is ever read.
pub struct ContainerReader<R> {
    header: ContainerHeader,
    inner: R,
}

impl<R: Read> ContainerReader<R> {
    /// Read and validate the header from `inner`
    pub fn open(mut inner: R) -> Result<Self> {
        let header = ContainerHeader::read_from(&mut inner)?;
        Ok(Self { header, inner })
    }

    /// Get the container header
    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    /// Fill mode recorded in the header
    pub fn mode(&self) -> FillMode {
        self.header.mode
    }

    /// Original size declared by the header
    pub fn original_size(&self) -> u64 {
        self.header.original_size
    }

    /// Stream the original content to `out` in bounded chunks
    ///
    /// Stops after the declared original size. If the input ends first the
    /// bytes read so far are kept and no error is raised, so a truncated
    /// container restores to a short result. Returns the number of bytes
    /// written.
    pub fn copy_original_to<W: Write>(mut self, out: &mut W) -> Result<u64> {
        let mut to_copy = self.header.original_size;
        let mut buf = vec![0u8; to_copy.min(CHUNK_SIZE as u64) as usize];
        let mut copied = 0u64;

        while to_copy > 0 {
            let want = to_copy.min(buf.len() as u64) as usize;
            let n = match self.inner.read(&mut buf[..want]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            out.write_all(&buf[..n])?;
            to_copy -= n as u64;
            copied += n as u64;
        }

        Ok(copied)
    }
}

/// Restore the original content of an in-memory container
pub fn restore(container: &[u8]) -> Result<(Vec<u8>, FillMode)> {
    let reader = ContainerReader::open(container)?;
    let mode = reader.mode();

    let mut original = Vec::new();
    reader.copy_original_to(&mut original)?;

    Ok((original, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BigzipError;
    use crate::format::HEADER_SIZE;
    use crate::writer::ContainerWriter;

    /// Reader that fails once the header has been consumed
    struct FailAfter {
        data: Vec<u8>,
        pos: usize,
        limit: usize,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.limit {
                return Err(std::io::Error::other("device error"));
            }
            let end = (self.pos + buf.len()).min(self.limit).min(self.data.len());
            let n = end - self.pos;
            buf[..n].copy_from_slice(&self.data[self.pos..end]);
            self.pos = end;
            Ok(n)
        }
    }

    /// Reader that records how many bytes were pulled from it
    struct Counting<'a> {
        data: &'a [u8],
        consumed: usize,
    }

    impl Read for Counting<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = buf.len().min(self.data.len() - self.consumed);
            buf[..n].copy_from_slice(&self.data[self.consumed..self.consumed + n]);
            self.consumed += n;
            Ok(n)
        }
    }

    #[test]
    fn test_restore_discards_fill() {
        let original = b"This is the original content.";
        let mut container = ContainerWriter::new(FillMode::Repeat)
            .finalize(original)
            .unwrap();
        container.extend_from_slice(b"padding");

        let (restored, mode) = restore(&container).unwrap();
        assert_eq!(restored, original);
        assert_eq!(mode, FillMode::Repeat);
    }

    #[test]
    fn test_restore_reports_mode() {
        for &mode in FillMode::all() {
            let container = ContainerWriter::new(mode)
                .with_target_size(200)
                .finalize(b"abc")
                .unwrap();
            let (restored, restored_mode) = restore(&container).unwrap();
            assert_eq!(restored, b"abc");
            assert_eq!(restored_mode, mode);
        }
    }

    #[test]
    fn test_restore_rejects_bad_magic() {
        let mut container = ContainerWriter::new(FillMode::Zero)
            .finalize(b"abc")
            .unwrap();
        container[0..8].copy_from_slice(b"NOTBIGZP");

        let err = restore(&container).unwrap_err();
        assert!(matches!(err, BigzipError::InvalidFormat(_)));
    }

    #[test]
    fn test_restore_truncated_container() {
        let original: Vec<u8> = (0..1000u32).map(|i| i as u8).collect();
        let container = ContainerWriter::new(FillMode::Zero)
            .finalize(&original)
            .unwrap();

        let cut = HEADER_SIZE + 400;
        let (restored, _) = restore(&container[..cut]).unwrap();
        assert_eq!(restored, &original[..400]);
    }

    #[test]
    fn test_copy_stops_at_original_size() {
        let container = ContainerWriter::new(FillMode::Zero)
            .with_target_size(CHUNK_SIZE as u64 * 4)
            .finalize(b"hello")
            .unwrap();

        let mut source = Counting {
            data: &container,
            consumed: 0,
        };
        let reader = ContainerReader::open(&mut source).unwrap();
        assert_eq!(reader.original_size(), 5);

        let mut out = Vec::new();
        let copied = reader.copy_original_to(&mut out).unwrap();
        assert_eq!(copied, 5);
        assert_eq!(out, b"hello");
        assert_eq!(source.consumed, HEADER_SIZE + 5);
    }

    #[test]
    fn test_empty_original() {
        let container = ContainerWriter::new(FillMode::Repeat)
            .with_target_size(100)
            .finalize(b"")
            .unwrap();
        let (restored, _) = restore(&container).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_read_failure_propagates() {
        let container = ContainerWriter::new(FillMode::Zero)
            .with_target_size(500)
            .finalize(&[7u8; 300])
            .unwrap();
        let source = FailAfter {
            data: container,
            pos: 0,
            limit: HEADER_SIZE + 10,
        };

        let reader = ContainerReader::open(source).unwrap();
        let err = reader.copy_original_to(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, BigzipError::Io(_)));
    }
}
