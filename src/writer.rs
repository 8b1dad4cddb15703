use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::{Error, Result};

/// Creates or truncates `path` and writes `lines` to it in order. Missing parent directories are
/// created. A failure midway leaves a truncated file behind.
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(write_error)?);
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}
