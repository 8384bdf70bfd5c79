//! Target file access: the single read and single write of a patch run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Failure while reading or writing the target. Every variant is fatal to
/// the run; nothing is caught or retried.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Target path does not exist or is not a regular file.
    #[error("target {} not found or not a regular file", .path.display())]
    NotFound { path: PathBuf },

    /// OS-level failure while accessing the target.
    #[error("{} {}", .op, .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    /// Target bytes are not valid UTF-8.
    #[error("target {} is not valid UTF-8", .path.display())]
    Decode {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },
}

/// Seam over target file access so orchestration can run against fakes
/// (scripted reads, recorded or failing writes) in tests.
pub trait TargetStore {
    fn read(&self, path: &Path) -> Result<String, PatchError>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), PatchError>;
}

/// Target store backed by the real filesystem.
pub struct FsTarget;

impl TargetStore for FsTarget {
    /// Load the whole target into memory as one UTF-8 string.
    ///
    /// The corrupted sequence ends in a raw line terminator, so the file
    /// must be scanned as one buffer, never line by line.
    fn read(&self, path: &Path) -> Result<String, PatchError> {
        let metadata = fs::metadata(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PatchError::NotFound {
                path: path.to_path_buf(),
            },
            _ => PatchError::Io {
                op: "stat",
                path: path.to_path_buf(),
                source,
            },
        })?;
        if !metadata.is_file() {
            return Err(PatchError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = fs::read(path).map_err(|source| PatchError::Io {
            op: "read",
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "target read");

        String::from_utf8(bytes).map_err(|source| PatchError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Replace the target's contents with a single truncating write.
    ///
    /// Not a temp-file/rename: an unwritable target must fail here, with
    /// the original bytes still in place. A rename would swap the file out
    /// regardless of its permission bits.
    fn write(&self, path: &Path, contents: &str) -> Result<(), PatchError> {
        fs::write(path, contents).map_err(|source| PatchError::Io {
            op: "write",
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "target written");
        Ok(())
    }
}
