//! Directory enumeration capability consumed by the traversal core.
//!
//! The traversal strategies never touch the filesystem directly. They ask a
//! [`DirectoryOpener`] for one [`DirectoryEnumerator`] per directory level and
//! step through its entries. [`crate::FsOpener`] implements the capability on
//! top of `std::fs`; tests and virtual filesystems provide their own.

use crate::error::WalkError;
use std::path::Path;

/// Cursor over the direct children of a single directory.
///
/// A freshly opened enumerator is positioned *before* its first entry. Each
/// successful [`advance`](Self::advance) moves it onto the next entry; once it
/// returns `Ok(false)` the enumerator is exhausted and must not report a
/// current entry any more.
pub trait DirectoryEnumerator {
    /// Path of the directory being enumerated.
    fn directory(&self) -> &Path;

    /// Path of the entry the cursor currently rests on.
    fn current_path(&self) -> Option<&Path>;

    /// Whether the current entry should be treated as a directory.
    fn current_is_dir(&self) -> bool;

    /// Moves to the next entry, returning `Ok(false)` once exhausted.
    fn advance(&mut self) -> Result<bool, WalkError>;

    /// Whether the cursor currently rests on an entry.
    fn has_current(&self) -> bool {
        self.current_path().is_some()
    }
}

/// Opens [`DirectoryEnumerator`]s for directory paths.
pub trait DirectoryOpener {
    /// Opens `path` for enumeration.
    ///
    /// Failures must be reported rather than producing an empty enumerator,
    /// so an inaccessible directory is never mistaken for an empty one.
    fn open_directory(&self, path: &Path) -> Result<Box<dyn DirectoryEnumerator>, WalkError>;

    /// Validates the traversal root before it is opened.
    ///
    /// Implementations report [`WalkError::path_not_found`] for a missing root
    /// and [`WalkError::not_a_directory`] for a root that is not a directory.
    fn check_root(&self, path: &Path) -> Result<(), WalkError> {
        let _ = path;
        Ok(())
    }
}
