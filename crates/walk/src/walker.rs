use crate::builder::WalkOptions;
use crate::entry::WalkEntry;
use crate::enumerator::DirectoryOpener;
use crate::error::WalkError;
use crate::handle::WalkHandle;
use crate::stack::TraversalStack;
use crate::strategy::{Strategy, TraverseStrategy};
use logging::debug_log;
use std::fmt;
use std::path::{Path, PathBuf};

/// Depth-bounded recursive iterator over a directory tree.
///
/// The iterator is positioned on the root right after construction:
/// [`current`](Self::current) returns the root path and
/// [`depth`](Self::depth) is `0`. Each [`advance`](Self::advance) moves to the
/// next path in the configured [`Strategy`] order. Once the tree is exhausted
/// the iterator latches as finished and further advances return the last path
/// unchanged.
///
/// The [`Iterator`] implementation offers the same walk as
/// `Result<WalkEntry, WalkError>` items: the root first, then one item per
/// advance.
pub struct RecursiveIterator {
    root: PathBuf,
    max_depth: usize,
    strategy: Box<dyn TraverseStrategy>,
    stack: TraversalStack,
    current: WalkEntry,
    finished: bool,
    yielded_current: bool,
}

impl RecursiveIterator {
    /// Walks `root` depth-first without a depth limit using `std::fs`.
    ///
    /// Equivalent to `WalkBuilder::new(root).build()`.
    pub fn open<P: Into<PathBuf>>(root: P) -> Result<Self, WalkError> {
        crate::WalkBuilder::new(root).build()
    }

    /// Walks `root` depth-first, never yielding entries deeper than
    /// `max_depth` (`0` means unlimited).
    pub fn with_max_depth<P: Into<PathBuf>>(root: P, max_depth: usize) -> Result<Self, WalkError> {
        crate::WalkBuilder::new(root).max_depth(max_depth).build()
    }

    pub(crate) fn new(
        root: PathBuf,
        opener: Box<dyn DirectoryOpener>,
        options: &WalkOptions,
    ) -> Result<Self, WalkError> {
        debug_log!(
            Walk,
            1,
            "walking {:?} ({}, max depth {})",
            root,
            options.strategy,
            options.max_depth
        );

        opener.check_root(&root).inspect_err(|error| {
            debug_log!(Io, 1, "{error}");
        })?;
        let mut stack = TraversalStack::new(opener);
        let enumerator = stack.open(&root)?;
        stack.push(enumerator, 1);

        Ok(Self {
            current: WalkEntry::root(root.clone()),
            root,
            max_depth: options.max_depth,
            strategy: options.strategy.traverser(options.max_depth),
            stack,
            finished: false,
            yielded_current: false,
        })
    }

    /// Returns the last yielded path (the root right after construction).
    #[must_use]
    pub fn current(&self) -> &Path {
        self.current.path()
    }

    /// Returns the last yielded entry.
    #[must_use]
    pub fn current_entry(&self) -> &WalkEntry {
        &self.current
    }

    /// Moves to the next path and returns it.
    ///
    /// Once the traversal is finished this is a no-op returning the last path.
    /// A failure to enumerate a directory is returned to the caller and ends
    /// the traversal: the iterator latches as finished and keeps the last
    /// successfully yielded path.
    pub fn advance(&mut self) -> Result<&Path, WalkError> {
        if self.finished {
            return Ok(self.current.path());
        }

        match self.strategy.next(&mut self.stack) {
            Ok(Some(entry)) => {
                debug_log!(Walk, 3, "visiting {:?} at depth {}", entry.path(), entry.depth());
                self.current = entry;
            }
            Ok(None) => self.finish(),
            Err(error) => {
                self.finish();
                return Err(error);
            }
        }

        self.yielded_current = true;
        Ok(self.current.path())
    }

    fn finish(&mut self) {
        debug_log!(Walk, 2, "finished walking {:?}", self.root);
        self.finished = true;
        self.stack.clear();
    }

    /// Depth of [`current`](Self::current): `0` for the root, one more per
    /// directory descended.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.current.depth()
    }

    /// Configured depth bound; `0` means unlimited.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Reports whether the traversal is exhausted.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Ordering used by this iterator.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy.kind()
    }

    /// Root the traversal started from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of directory enumerators currently held open.
    #[must_use]
    pub fn open_levels(&self) -> usize {
        self.stack.depth()
    }

    /// Wraps the iterator in a shared handle with a single owner.
    #[must_use]
    pub fn into_handle(self) -> WalkHandle {
        WalkHandle::new(self)
    }
}

impl Iterator for RecursiveIterator {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.yielded_current {
            self.yielded_current = true;
            return Some(Ok(self.current.clone()));
        }
        if self.finished {
            return None;
        }

        match self.advance().map(|_| ()) {
            Ok(()) if self.finished => None,
            Ok(()) => Some(Ok(self.current.clone())),
            Err(error) => Some(Err(error)),
        }
    }
}

impl fmt::Debug for RecursiveIterator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecursiveIterator")
            .field("root", &self.root)
            .field("strategy", &self.strategy.kind())
            .field("max_depth", &self.max_depth)
            .field("current", &self.current)
            .field("finished", &self.finished)
            .field("stack", &self.stack)
            .finish()
    }
}
