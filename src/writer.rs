// SPDX-License-Identifier: MIT
//! Container writer for inflating content into bigzip files

use std::borrow::Cow;
use std::io::Write;

use rand::RngCore;

use crate::error::{BigzipError, Result};
use crate::format::{ContainerHeader, FillMode, HEADER_SIZE};

/// Buffer size for streaming fill bytes
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Size of the container actually produced for a requested total
///
/// A container can never be smaller than header + original content, so
/// smaller requests are raised to that minimum.
#[inline]
pub fn effective_total_size(original_len: u64, desired_total: u64) -> u64 {
    desired_total.max((HEADER_SIZE as u64).saturating_add(original_len))
}

/// Builder for inflating content into a container
#[derive(Debug, Clone, Copy)]
pub struct ContainerWriter {
    mode: FillMode,
    target_size: u64,
}

impl ContainerWriter {
    /// Create a writer that produces the smallest possible container
    pub fn new(mode: FillMode) -> Self {
        Self {
            mode,
            target_size: 0,
        }
    }

    /// Set the requested total size of the container
    pub fn with_target_size(mut self, target_size: u64) -> Self {
        self.target_size = target_size;
        self
    }

    pub fn mode(&self) -> FillMode {
        self.mode
    }

    pub fn target_size(&self) -> u64 {
        self.target_size
    }

    /// Write header, original content and fill to `out` in a single pass
    ///
    /// Returns the effective total size written.
    pub fn write_to<W: Write>(&self, original: &[u8], out: &mut W) -> Result<u64> {
        let original_len = original.len() as u64;
        let total = effective_total_size(original_len, self.target_size);
        let remaining = total - HEADER_SIZE as u64 - original_len;

        ContainerHeader::new(original_len, self.mode).write_to(out)?;
        out.write_all(original)?;

        match self.mode {
            FillMode::Repeat => write_repeat(out, original, remaining)?,
            FillMode::Zero => write_zeros(out, remaining)?,
            FillMode::Random => write_random(out, remaining, &mut rand::rng())?,
        }

        Ok(total)
    }

    /// Build the whole container in memory
    pub fn finalize(&self, original: &[u8]) -> Result<Vec<u8>> {
        let total = effective_total_size(original.len() as u64, self.target_size);
        let capacity = usize::try_from(total).map_err(|_| {
            BigzipError::InvalidConfig(format!("target size {} does not fit in memory", total))
        })?;

        let mut buffer = Vec::with_capacity(capacity);
        self.write_to(original, &mut buffer)?;

        debug_assert_eq!(buffer.len() as u64, total);
        Ok(buffer)
    }
}

/// Write `remaining` bytes of `unit` repeated from its start
///
/// An empty unit is replaced by a single zero byte.
pub fn write_repeat<W: Write>(out: &mut W, unit: &[u8], remaining: u64) -> Result<()> {
    if remaining == 0 {
        return Ok(());
    }

    let unit: &[u8] = if unit.is_empty() { &[0] } else { unit };

    // Whole copies only, so every tile restarts the cycle at the unit start
    let tile: Cow<'_, [u8]> = if unit.len() >= CHUNK_SIZE {
        Cow::Borrowed(unit)
    } else {
        Cow::Owned(unit.repeat(CHUNK_SIZE / unit.len()))
    };

    let mut remaining = remaining;
    while remaining > 0 {
        let n = remaining.min(tile.len() as u64) as usize;
        out.write_all(&tile[..n])?;
        remaining -= n as u64;
    }

    Ok(())
}

/// Write `remaining` zero bytes
pub fn write_zeros<W: Write>(out: &mut W, remaining: u64) -> Result<()> {
    if remaining == 0 {
        return Ok(());
    }

    let buf = vec![0u8; remaining.min(CHUNK_SIZE as u64) as usize];

    let mut remaining = remaining;
    while remaining > 0 {
        let n = remaining.min(buf.len() as u64) as usize;
        out.write_all(&buf[..n])?;
        remaining -= n as u64;
    }

    Ok(())
}

/// Write `remaining` bytes drawn from `rng`
pub fn write_random<W: Write, R: RngCore + ?Sized>(
    out: &mut W,
    remaining: u64,
    rng: &mut R,
) -> Result<()> {
    if remaining == 0 {
        return Ok(());
    }

    let mut buf = vec![0u8; remaining.min(CHUNK_SIZE as u64) as usize];

    let mut remaining = remaining;
    while remaining > 0 {
        let n = remaining.min(buf.len() as u64) as usize;
        rng.fill_bytes(&mut buf[..n]);
        out.write_all(&buf[..n])?;
        remaining -= n as u64;
    }

    Ok(())
}
