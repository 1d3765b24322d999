// SPDX-License-Identifier: MIT
//! Bigzip container format specification
//!
//! Defines the fixed 24-byte header that precedes the original content.

use std::io::{ErrorKind, Read, Write};

use crate::error::{BigzipError, Result};

/// Bigzip format magic bytes
pub const BIGZIP_MAGIC: &[u8; 8] = b"BIGZIP11";

/// Header size in bytes
pub const HEADER_SIZE: usize = 24;

/// Size of the reserved tail of the header
const RESERVED_SIZE: usize = 7;

/// Fill strategy used for the padding after the original content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FillMode {
    /// Original content cycled from the start
    #[default]
    Repeat = 0,

    /// Zero bytes
    Zero = 1,

    /// Bytes from a cryptographically secure generator
    Random = 2,
}

impl FillMode {
    /// Get all modes in on-disk order
    pub fn all() -> &'static [FillMode] {
        &[FillMode::Repeat, FillMode::Zero, FillMode::Random]
    }

    /// On-disk mode byte
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Name used on the command line and in reports
    pub fn name(&self) -> &'static str {
        match self {
            FillMode::Repeat => "repeat",
            FillMode::Zero => "zero",
            FillMode::Random => "random",
        }
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FillMode {
    type Err = BigzipError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "repeat" => Ok(FillMode::Repeat),
            "zero" => Ok(FillMode::Zero),
            "random" => Ok(FillMode::Random),
            _ => Err(BigzipError::InvalidConfig(format!("unknown mode '{}'", s))),
        }
    }
}

impl TryFrom<u8> for FillMode {
    type Error = BigzipError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(FillMode::Repeat),
            1 => Ok(FillMode::Zero),
            2 => Ok(FillMode::Random),
            other => Err(BigzipError::InvalidFormat(format!(
                "invalid mode byte {}",
                other
            ))),
        }
    }
}

/// Bigzip file header (24 bytes)
///
/// ```text
/// offset 0   magic "BIGZIP11"
/// offset 8   original size, u64 little-endian
/// offset 16  fill mode
/// offset 17  reserved, zero on write, ignored on read
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Length of the original content that follows the header
    pub original_size: u64,

    /// Fill strategy used after the original content
    pub mode: FillMode,
}

impl ContainerHeader {
    pub fn new(original_size: u64, mode: FillMode) -> Self {
        Self {
            original_size,
            mode,
        }
    }

    /// Parse a header from raw bytes
    ///
    /// The declared original size is not checked against anything; a value
    /// larger than the container only shows up later as a short restore.
    pub fn from_bytes(bytes: &[u8; HEADER_SIZE]) -> Result<Self> {
        if &bytes[0..8] != BIGZIP_MAGIC {
            return Err(BigzipError::InvalidFormat("not a bigzip file".to_string()));
        }

        let mut size = [0u8; 8];
        size.copy_from_slice(&bytes[8..16]);
        let original_size = u64::from_le_bytes(size);
        let mode = FillMode::try_from(bytes[16])?;

        Ok(Self {
            original_size,
            mode,
        })
    }

    /// Convert to bytes for writing
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];

        bytes[0..8].copy_from_slice(BIGZIP_MAGIC);
        bytes[8..16].copy_from_slice(&self.original_size.to_le_bytes());
        bytes[16] = self.mode.as_byte();
        // 17..24 reserved
        debug_assert_eq!(bytes[17..].len(), RESERVED_SIZE);

        bytes
    }

    /// Read header from a reader
    ///
    /// An input that ends before a full header is not a container.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut header = [0u8; HEADER_SIZE];
        match reader.read_exact(&mut header) {
            Ok(()) => Self::from_bytes(&header),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(BigzipError::InvalidFormat(
                format!("input is shorter than the {}-byte header", HEADER_SIZE),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Write header to a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }
}
