//! Loading GIFT files into a corpus.
//!
//! The core never touches the filesystem directly; reads go through a
//! [`SourceReader`] so tests and embedders can supply text from anywhere.

use std::path::{Path, PathBuf};

use crate::error::{GiftError, Result};

/// Returns the full text of a source file.
pub trait SourceReader {
    fn read(&self, path: &Path) -> std::io::Result<String>;
}

/// Reads UTF-8 files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl SourceReader for FsReader {
    fn read(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// One file of a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub path: PathBuf,
    pub text: String,
}

impl CorpusEntry {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// An ordered set of GIFT files processed together.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    pub fn new(entries: Vec<CorpusEntry>) -> Self {
        Self { entries }
    }

    /// Read every path, in order.
    ///
    /// The paths were named explicitly, so the first read failure aborts the
    /// load with [`GiftError::Io`].
    pub fn load<P, R>(paths: &[P], reader: &R) -> Result<Self>
    where
        P: AsRef<Path>,
        R: SourceReader + ?Sized,
    {
        let entries = paths
            .iter()
            .map(|p| read_entry(p.as_ref(), reader))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Recursively load every file with the given extension under `dir`.
    ///
    /// Files are sorted by path so the corpus order does not depend on the
    /// platform's directory listing order. A file that cannot be read is
    /// logged and left out; the remaining files still load.
    pub fn load_directory<R>(dir: &Path, extension: &str, reader: &R) -> Result<Self>
    where
        R: SourceReader + ?Sized,
    {
        if !dir.is_dir() {
            return Err(GiftError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut paths = Vec::new();
        collect_files(dir, extension, &mut paths)?;
        paths.sort();

        tracing::debug!(dir = %dir.display(), files = paths.len(), "collected corpus files");

        let mut entries = Vec::with_capacity(paths.len());
        for path in &paths {
            match read_entry(path, reader) {
                Ok(entry) => entries.push(entry),
                Err(err) => tracing::warn!(error = %err, "skipping unreadable gift file"),
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorpusEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CorpusEntry;
    type IntoIter = std::slice::Iter<'a, CorpusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<CorpusEntry> for Corpus {
    fn from_iter<I: IntoIterator<Item = CorpusEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn read_entry<R: SourceReader + ?Sized>(path: &Path, reader: &R) -> Result<CorpusEntry> {
    let text = reader.read(path).map_err(|source| GiftError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded gift file");
    Ok(CorpusEntry::new(path, text))
}

fn collect_files(dir: &Path, extension: &str, out: &mut Vec<PathBuf>) -> Result<()> {
    let io_err = |source| GiftError::Io {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            collect_files(&path, extension, out)?;
        } else if path.extension().is_some_and(|ext| ext == extension) {
            out.push(path);
        }
    }
    Ok(())
}
