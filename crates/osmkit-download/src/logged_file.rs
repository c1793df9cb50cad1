//! File handles that log their acquisition and release.
//!
//! Every output the downloader writes goes through [`LoggedFile`], so the log
//! shows each path touched and the mode it was opened with. The handle is
//! closed (and the close logged) on every exit path through `Drop`.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{DownloadError, DownloadResult};

/// How a [`LoggedFile`] was opened. Rendered in the log as `r`, `w` or `wb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    WriteText,
    WriteBinary,
}

impl OpenMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "r",
            Self::WriteText => "w",
            Self::WriteBinary => "wb",
        }
    }
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file handle scoped to a logged open/close pair.
#[derive(Debug)]
pub struct LoggedFile {
    file: File,
    path: PathBuf,
    mode: OpenMode,
}

impl LoggedFile {
    /// Open an existing file for reading.
    pub fn open(path: impl AsRef<Path>) -> DownloadResult<Self> {
        let path = path.as_ref();
        log_open(OpenMode::Read, path);
        let file = File::open(path).map_err(|e| DownloadError::io(path, e))?;
        Ok(Self::new(file, path, OpenMode::Read))
    }

    /// Create (or truncate) a file for writing.
    ///
    /// `mode` must be one of the write modes; it only affects logging.
    pub fn create(path: impl AsRef<Path>, mode: OpenMode) -> DownloadResult<Self> {
        debug_assert!(mode != OpenMode::Read, "create() called with read mode");
        let path = path.as_ref();
        log_open(mode, path);
        let file = File::create(path).map_err(|e| DownloadError::io(path, e))?;
        Ok(Self::new(file, path, mode))
    }

    fn new(file: File, path: &Path, mode: OpenMode) -> Self {
        Self {
            file,
            path: path.to_path_buf(),
            mode,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Read the rest of the file as UTF-8 text, mapping failures to a
    /// path-tagged error.
    pub fn read_text(&mut self) -> DownloadResult<String> {
        let mut text = String::new();
        Read::read_to_string(self, &mut text).map_err(|e| DownloadError::io(&self.path, e))?;
        Ok(text)
    }

    /// Write all of `data`, mapping failures to a path-tagged error.
    pub fn write_bytes(&mut self, data: &[u8]) -> DownloadResult<()> {
        self.file
            .write_all(data)
            .and_then(|()| self.file.flush())
            .map_err(|e| DownloadError::io(&self.path, e))
    }
}

fn log_open(mode: OpenMode, path: &Path) {
    tracing::info!("({mode}):\t{}", path.display());
}

impl Read for LoggedFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for LoggedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for LoggedFile {
    fn drop(&mut self) {
        tracing::debug!(mode = %self.mode, path = %self.path.display(), "Closed file");
    }
}
