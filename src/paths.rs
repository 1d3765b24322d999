// SPDX-License-Identifier: MIT
//! Output path selection for inflate and restore runs

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// File extension of inflated containers
pub const BIGZIP_EXTENSION: &str = "bigzip";

/// Suffix appended to restored files whose name doesn't end in `.bigzip`
pub const RESTORED_EXTENSION: &str = "orig";

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

fn is_bigzip(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(BIGZIP_EXTENSION))
}

/// Default container path: `<input>.bigzip` next to the input
pub fn default_compress_output(input: &Path) -> PathBuf {
    append_extension(input, BIGZIP_EXTENSION)
}

/// Default restore path: the input without `.bigzip`, else `<input>.orig`
pub fn default_restore_output(input: &Path) -> PathBuf {
    if is_bigzip(input) && input.file_stem().is_some() {
        input.with_extension("")
    } else {
        append_extension(input, RESTORED_EXTENSION)
    }
}

/// Split a file name into the part before the counter and the part after it
///
/// `report.txt` -> (`report`, `.txt`), `report.txt.bigzip` ->
/// (`report`, `.txt.bigzip`).
fn split_name(path: &Path) -> (OsString, OsString) {
    let (base, mut suffix) = if is_bigzip(path) {
        (path.with_extension(""), OsString::from(".bigzip"))
    } else {
        (path.to_path_buf(), OsString::new())
    };

    let stem = base.file_stem().map(OsStr::to_os_string).unwrap_or_default();
    if let Some(ext) = base.extension() {
        let mut with_ext = OsString::from(".");
        with_ext.push(ext);
        with_ext.push(&suffix);
        suffix = with_ext;
    }

    (stem, suffix)
}

/// First free sibling of `path`, or `path` itself when it doesn't exist
///
/// Candidates are `name_1.ext`, `name_2.ext`, ... with the counter placed
/// before the original extension of `.bigzip` files.
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let (stem, suffix) = split_name(path);

    let mut counter: u64 = 1;
    loop {
        let mut name = stem.clone();
        name.push(format!("_{}", counter));
        name.push(&suffix);

        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
