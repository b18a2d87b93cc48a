//! Shared test utilities.
//!
//! [`TreeFixture`] materialises a directory tree inside a temporary directory
//! from a list of relative paths. Paths ending in `/` become directories,
//! everything else becomes a small file; missing parents are created.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory tree rooted at `<tempdir>/<name>`.
///
/// The tree is removed when the fixture is dropped.
pub struct TreeFixture {
    _temp: TempDir,
    root: PathBuf,
}

impl TreeFixture {
    /// Creates an empty root directory called `name`.
    pub fn empty(name: &str) -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let root = temp.path().join(name);
        fs::create_dir(&root)?;
        Ok(Self { _temp: temp, root })
    }

    /// Creates a root called `name` and populates it with `entries`.
    ///
    /// ```
    /// use test_support::TreeFixture;
    ///
    /// let tree = TreeFixture::new("a", &["x", "b/", "b/z"]).unwrap();
    /// assert!(tree.path("b").is_dir());
    /// assert!(tree.path("b/z").is_file());
    /// ```
    pub fn new(name: &str, entries: &[&str]) -> io::Result<Self> {
        let fixture = Self::empty(name)?;
        for entry in entries {
            fixture.add(entry)?;
        }
        Ok(fixture)
    }

    /// Adds a single entry below the root.
    pub fn add(&self, entry: &str) -> io::Result<PathBuf> {
        let path = self.path(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path)?;
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, entry.as_bytes())?;
        }
        Ok(path)
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the absolute path of `relative` below the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        }
    }

    /// Strips the root prefix, rendering `/` separated relative paths.
    ///
    /// The root itself renders as an empty string.
    pub fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}
