use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("{} could not be read: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read a whole file as text. A missing file is `NotFound`, anything else is `Read`.
pub fn read_text(path: &Path) -> Result<String, SourceError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(SourceError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(SourceError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
