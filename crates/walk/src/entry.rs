use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Result of a traversal step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkEntry {
    pub(crate) path: PathBuf,
    pub(crate) depth: usize,
    pub(crate) is_dir: bool,
    pub(crate) is_root: bool,
}

impl WalkEntry {
    pub(crate) fn new(path: PathBuf, depth: usize, is_dir: bool) -> Self {
        Self {
            path,
            depth,
            is_dir,
            is_root: false,
        }
    }

    pub(crate) fn root(path: PathBuf) -> Self {
        Self {
            path,
            depth: 0,
            is_dir: true,
            is_root: true,
        }
    }

    /// Returns the path in the form produced by the directory enumerator.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the entry, returning its path.
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }

    /// Returns the file name associated with the entry, if any.
    ///
    /// The root entry yields `None`; every other entry returns the final
    /// component of its path.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_walk::WalkBuilder;
    /// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
    /// let temp = tempfile::tempdir()?;
    /// let root = temp.path().join("root");
    /// std::fs::create_dir(&root)?;
    /// std::fs::write(root.join("file.txt"), b"data")?;
    ///
    /// let mut walker = WalkBuilder::new(&root).build()?;
    /// let entry = walker.next().unwrap()?;
    /// assert!(entry.is_root());
    /// assert!(entry.file_name().is_none());
    ///
    /// let entry = walker.next().unwrap()?;
    /// assert_eq!(entry.file_name(), Some(std::ffi::OsStr::new("file.txt")));
    /// # Ok(())
    /// # }
    /// # demo().unwrap();
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        if self.is_root {
            None
        } else {
            self.path.file_name()
        }
    }

    /// Reports the depth of the entry relative to the root (root depth is `0`).
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Reports whether the enumerator classified the entry as a directory.
    #[must_use]
    pub const fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Indicates whether this entry corresponds to the traversal root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }
}
