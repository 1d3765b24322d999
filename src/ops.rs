// SPDX-License-Identifier: MIT
//! File-level inflate and restore operations
//!
//! These wire the codec to the filesystem: read the input, pick an output
//! path, stream the container, and clean up a partial output on failure.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{BigzipError, Result};
use crate::format::FillMode;
use crate::paths::{default_compress_output, default_restore_output, unique_path};
use crate::reader::ContainerReader;
use crate::writer::{ContainerWriter, CHUNK_SIZE};

/// Outcome of an inflate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressReport {
    pub output: PathBuf,
    /// Effective container size after clamping
    pub total_size: u64,
    pub mode: FillMode,
}

/// Outcome of a restore run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreReport {
    pub output: PathBuf,
    pub mode: FillMode,
    pub restored_size: u64,
    /// Original size recorded in the header
    pub declared_size: u64,
}

impl RestoreReport {
    /// True when the container ended before the declared original size
    pub fn is_truncated(&self) -> bool {
        self.restored_size < self.declared_size
    }
}

fn resolve_output(explicit: Option<&Path>, default: PathBuf, force: bool) -> PathBuf {
    let path = explicit.map(Path::to_path_buf).unwrap_or(default);
    if force {
        path
    } else {
        unique_path(&path)
    }
}

/// Refuse to truncate the input by writing over it
fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    if !output.exists() {
        return Ok(());
    }
    if fs::canonicalize(input)? == fs::canonicalize(output)? {
        return Err(BigzipError::InvalidConfig(format!(
            "output {:?} is the same file as the input",
            output
        )));
    }
    Ok(())
}

/// Create `path`, run `write` against a buffered handle and flush it
///
/// A failed write removes whatever was created.
fn write_output<T, F>(path: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T>,
{
    let file = File::create(path)?;
    let mut out = BufWriter::with_capacity(CHUNK_SIZE, file);

    let result = match write(&mut out) {
        Ok(value) => out.flush().map(|_| value).map_err(BigzipError::from),
        Err(e) => Err(e),
    };

    if let Err(e) = &result {
        // Close the handle before removing the file
        drop(out);
        warn!("Failed to write {:?}, removing partial output: {}", path, e);
        let _ = fs::remove_file(path);
    }

    result
}

/// Inflate `config.input` into a bigzip container
pub fn compress_file(config: &Config) -> Result<CompressReport> {
    let mode = config.validate()?;

    let original = fs::read(&config.input)?;
    let desired = config.desired_total_size(original.len() as u64);

    let output = resolve_output(
        config.output.as_deref(),
        default_compress_output(&config.input),
        config.force,
    );
    ensure_distinct(&config.input, &output)?;

    debug!(
        "Inflating {:?} ({} bytes) to {:?}: requested {} bytes, mode {}",
        config.input,
        original.len(),
        output,
        desired,
        mode
    );

    let writer = ContainerWriter::new(mode).with_target_size(desired);
    let total_size = write_output(&output, |out| writer.write_to(&original, out))?;

    info!("Wrote container {:?}: {} bytes", output, total_size);

    Ok(CompressReport {
        output,
        total_size,
        mode,
    })
}

/// Restore the original content of the container at `config.input`
///
/// The header is validated before the output is created, so an invalid
/// container leaves nothing behind.
pub fn restore_file(config: &Config) -> Result<RestoreReport> {
    config.validate()?;

    let input = File::open(&config.input)?;
    let reader = ContainerReader::open(input)?;
    let mode = reader.mode();
    let declared_size = reader.original_size();

    let output = resolve_output(
        config.output.as_deref(),
        default_restore_output(&config.input),
        config.force,
    );
    ensure_distinct(&config.input, &output)?;

    debug!(
        "Restoring {:?} to {:?}: {} bytes, mode {}",
        config.input, output, declared_size, mode
    );

    let restored_size = write_output(&output, |out| reader.copy_original_to(out))?;

    if restored_size < declared_size {
        warn!(
            "Container {:?} is truncated: restored {} of {} bytes",
            config.input, restored_size, declared_size
        );
    } else {
        info!("Restored {:?}: {} bytes", output, restored_size);
    }

    Ok(RestoreReport {
        output,
        mode,
        restored_size,
        declared_size,
    })
}
