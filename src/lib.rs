// SPDX-License-Identifier: MIT
//! # Bigzip
//!
//! Inflates a file to a target size by wrapping its bytes in a small fixed
//! header followed by padding, and restores the original bytes exactly.
//!
//! This is not compression: a container is only ever larger than its input.
//!
//! ## Format Specification
//!
//! ```text
//! Bigzip container
//! ================
//!
//! Header (24 bytes, little-endian):
//! - Magic: "BIGZIP11" (8 bytes)
//! - Original Size: u64 (8 bytes)
//! - Mode: 0 = repeat, 1 = zero, 2 = random (1 byte)
//! - Reserved: zero (7 bytes)
//!
//! Body:
//! - Original content (Original Size bytes)
//! - Fill bytes up to the requested total size
//! ```
//!
//! A requested size below header + original content is raised to that
//! minimum. Restoring reads the header, copies `Original Size` bytes and
//! never touches the fill. A container that ends early restores to the bytes
//! that are present.
//!
//! ## Usage
//!
//! ```rust
//! use bigzip::{restore, ContainerWriter, FillMode};
//!
//! let container = ContainerWriter::new(FillMode::Repeat)
//!     .with_target_size(64)
//!     .finalize(b"hello")
//!     .unwrap();
//! assert_eq!(container.len(), 64);
//!
//! let (original, mode) = restore(&container).unwrap();
//! assert_eq!(original, b"hello");
//! assert_eq!(mode, FillMode::Repeat);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod ops;
pub mod paths;
pub mod reader;
pub mod writer;

// Re-export main types
pub use config::Config;
pub use error::{BigzipError, Result};
pub use format::{ContainerHeader, FillMode, BIGZIP_MAGIC, HEADER_SIZE};
pub use ops::{compress_file, restore_file, CompressReport, RestoreReport};
pub use reader::{restore, ContainerReader};
pub use writer::{effective_total_size, ContainerWriter};
