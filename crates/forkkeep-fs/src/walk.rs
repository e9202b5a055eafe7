//! Eligible source-file discovery
//!
//! Walks a directory tree and yields the files a [`FileFilter`]
//! accepts. Unlike a best-effort scan, every traversal error is surfaced:
//! a directory that cannot be listed means some files would silently be
//! left unconverted.

use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// Decides whether a discovered file takes part in a rewrite.
pub trait FileFilter {
    fn is_eligible(&self, path: &Path) -> bool;
}

impl<F> FileFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn is_eligible(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Accepts files whose extension is one of a fixed set.
///
/// Matching is case-sensitive and ignores the leading dot, so
/// `ExtensionFilter::new(["java"])` accepts `Foo.java` but not `Foo.JAVA`
/// or `Foo.java.orig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| {
                    let e: String = e.into();
                    e.trim_start_matches('.').to_string()
                })
                .collect(),
        }
    }
}

impl FileFilter for ExtensionFilter {
    fn is_eligible(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// Collect every eligible regular file beneath `root`.
///
/// Symbolic links to regular files are included; links to directories are
/// not descended into. Results are ordered by file name within each
/// directory so repeated runs report files in the same order.
pub fn eligible_files(root: &NormalizedPath, filter: &dyn FileFilter) -> Result<Vec<NormalizedPath>> {
    let native_root = root.to_native();
    if !native_root.is_dir() {
        return Err(Error::io(
            &native_root,
            std::io::Error::new(std::io::ErrorKind::NotFound, "directory does not exist"),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&native_root)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| native_root.clone());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            Error::io(path, source)
        })?;

        // Links to files are rewritten through; links to directories are not entered
        let file_type = entry.file_type();
        let is_file =
            file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if is_file && filter.is_eligible(entry.path()) {
            files.push(NormalizedPath::new(entry.path()));
        }
    }

    tracing::debug!(root = %root, count = files.len(), "Discovered eligible files");
    Ok(files)
}
