use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::consts::BED_FILE_EXTENSION;

///
/// Check whether a path names a transformable `.bed` file. The extension
/// match requires a non-empty stem, so a bare `.bed` entry is treated as
/// any other file and copied through untouched.
///
pub fn is_bed_file(path: &Path) -> bool {
    path.extension() == Some(OsStr::new(BED_FILE_EXTENSION))
}

///
/// Copy a directory tree into `dst`, creating it if needed. Files are
/// copied byte-for-byte; nested directories recurse.
///
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .with_context(|| format!("There was an error creating the directory: {:?}", dst))?;

    let entries = fs::read_dir(src)
        .with_context(|| format!("There was an error reading the directory: {:?}", src))?;

    for entry in entries {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("There was an error copying: {:?}", entry.path()))?;
        }
    }

    Ok(())
}
