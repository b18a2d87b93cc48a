use crate::entry::WalkEntry;
use crate::enumerator::{DirectoryEnumerator, DirectoryOpener};
use crate::error::WalkError;
use logging::debug_log;
use std::fmt;
use std::path::Path;

/// One active directory level: an enumerator plus the depth of its entries.
pub struct Level {
    enumerator: Box<dyn DirectoryEnumerator>,
    entry_depth: usize,
}

impl Level {
    /// Directory this level enumerates.
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.enumerator.directory()
    }

    /// Depth of the entries produced by this level (children of the root are `1`).
    #[must_use]
    pub const fn entry_depth(&self) -> usize {
        self.entry_depth
    }

    /// Borrows the level's enumerator.
    #[must_use]
    pub fn enumerator(&self) -> &dyn DirectoryEnumerator {
        self.enumerator.as_ref()
    }

    /// Moves the level's enumerator to its next entry.
    pub fn advance(&mut self) -> Result<bool, WalkError> {
        self.enumerator.advance()
    }

    /// Snapshot of the entry the enumerator currently rests on.
    #[must_use]
    pub fn current_entry(&self) -> Option<WalkEntry> {
        self.enumerator.current_path().map(|path| {
            WalkEntry::new(
                path.to_path_buf(),
                self.entry_depth,
                self.enumerator.current_is_dir(),
            )
        })
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Level")
            .field("directory", &self.directory())
            .field("entry_depth", &self.entry_depth)
            .field("current", &self.enumerator.current_path())
            .finish()
    }
}

/// Stack of active directory levels, bottom = traversal root.
///
/// The stack owns the [`DirectoryOpener`] so strategies can open new levels
/// without holding a filesystem handle of their own.
pub struct TraversalStack {
    opener: Box<dyn DirectoryOpener>,
    levels: Vec<Level>,
}

impl TraversalStack {
    pub(crate) fn new(opener: Box<dyn DirectoryOpener>) -> Self {
        Self {
            opener,
            levels: Vec::new(),
        }
    }

    /// Number of active levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Reports whether no level is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Opens `path` through the stack's opener without pushing it.
    pub fn open(&self, path: &Path) -> Result<Box<dyn DirectoryEnumerator>, WalkError> {
        self.opener.open_directory(path).inspect_err(|error| {
            debug_log!(Io, 1, "{error}");
        })
    }

    /// Pushes a level whose entries sit at `entry_depth`.
    pub fn push(&mut self, enumerator: Box<dyn DirectoryEnumerator>, entry_depth: usize) {
        debug_log!(
            Enter,
            2,
            "entering {:?} (entries at depth {})",
            enumerator.directory(),
            entry_depth
        );
        self.levels.push(Level {
            enumerator,
            entry_depth,
        });
    }

    /// Removes and returns the top level.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty. Strategies never pop past the bottom
    /// level, so reaching this is a traversal bug.
    pub fn pop(&mut self) -> Level {
        let Some(level) = self.levels.pop() else {
            panic!("attempted to pop an empty traversal stack");
        };
        debug_log!(Enter, 3, "leaving {:?}", level.directory());
        level
    }

    /// Borrows the top level.
    #[must_use]
    pub fn top(&self) -> Option<&Level> {
        self.levels.last()
    }

    /// Mutably borrows the top level.
    pub fn top_mut(&mut self) -> Option<&mut Level> {
        self.levels.last_mut()
    }

    /// Drops every level, releasing the enumerators.
    pub(crate) fn clear(&mut self) {
        self.levels.clear();
    }
}

impl fmt::Debug for TraversalStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalStack")
            .field("levels", &self.levels)
            .finish_non_exhaustive()
    }
}
