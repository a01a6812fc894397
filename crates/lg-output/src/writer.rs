//! The `ScenarioWriter` trait and its backends.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use lg_parking::ParkingLayout;

use crate::document::Document;
use crate::{OutputError, OutputResult};

/// Trait implemented by every artifact sink.
///
/// Backends only store named byte blobs; the provided methods render
/// documents and the space inventory before handing them over.
pub trait ScenarioWriter {
    /// Store `bytes` under the artifact file name `name`.
    fn write_artifact(&mut self, name: &str, bytes: &[u8]) -> OutputResult<()>;

    /// Flush and close the backend.
    ///
    /// Idempotent — safe to call more than once.  Writes after `finish`
    /// fail with [`OutputError::Finished`].
    fn finish(&mut self) -> OutputResult<()>;

    fn write_document(&mut self, name: &str, doc: &Document) -> OutputResult<()> {
        let bytes = doc
            .to_bytes()
            .map_err(|source| OutputError::Io { path: PathBuf::from(name), source })?;
        self.write_artifact(name, &bytes)
    }

    fn write_spaces(&mut self, name: &str, layout: &ParkingLayout) -> OutputResult<()> {
        self.write_artifact(name, &crate::csv::spaces_csv(layout)?)
    }
}

// ── DirWriter ─────────────────────────────────────────────────────────────────

/// Writes each artifact as a file in one directory.
#[derive(Debug)]
pub struct DirWriter {
    dir:      PathBuf,
    written:  Vec<PathBuf>,
    finished: bool,
}

impl DirWriter {
    /// Create `dir` (and parents) if needed.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir).map_err(|source| OutputError::Io { path: dir.to_path_buf(), source })?;
        Ok(Self { dir: dir.to_path_buf(), written: Vec::new(), finished: false })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path an artifact named `name` is (or would be) written to.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ScenarioWriter for DirWriter {
    fn write_artifact(&mut self, name: &str, bytes: &[u8]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished(name.to_owned()));
        }
        let path = self.path(name);
        fs::write(&path, bytes).map_err(|source| OutputError::Io { path: path.clone(), source })?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        self.written.push(path);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}

// ── MemoryWriter ──────────────────────────────────────────────────────────────

/// Keeps artifacts in memory, keyed by file name.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    files:    BTreeMap<String, Vec<u8>>,
    finished: bool,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// The artifact as UTF-8 text, if present and valid.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|b| std::str::from_utf8(b).ok())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.files.keys().map(String::as_str)
    }

    pub fn into_files(self) -> BTreeMap<String, Vec<u8>> {
        self.files
    }
}

impl ScenarioWriter for MemoryWriter {
    fn write_artifact(&mut self, name: &str, bytes: &[u8]) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished(name.to_owned()));
        }
        self.files.insert(name.to_owned(), bytes.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
