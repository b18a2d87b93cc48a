use crate::enumerator::DirectoryOpener;
use crate::error::WalkError;
use crate::fs::FsOpener;
use crate::handle::WalkHandle;
use crate::strategy::Strategy;
use crate::walker::RecursiveIterator;
use std::path::PathBuf;

/// Traversal options as plain data.
///
/// With the `serde` feature the options can be loaded from configuration
/// files; missing fields fall back to [`WalkOptions::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkOptions {
    /// Deepest level to yield; directories at this depth are not descended.
    /// `0` means unlimited.
    pub max_depth: usize,
    /// Traversal ordering.
    pub strategy: Strategy,
    /// Sort entries of each directory by name (std backend only).
    pub sort_entries: bool,
    /// Treat symlinks to directories as directories (std backend only).
    pub follow_symlinks: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            max_depth: 0,
            strategy: Strategy::ChildrenFirst,
            sort_entries: true,
            follow_symlinks: false,
        }
    }
}

/// Configures a traversal rooted at a specific path.
#[derive(Clone, Debug)]
pub struct WalkBuilder {
    root: PathBuf,
    options: WalkOptions,
}

impl WalkBuilder {
    /// Creates a new builder that will traverse the provided root path.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_options(root, WalkOptions::default())
    }

    /// Creates a builder from previously loaded options.
    #[must_use]
    pub fn with_options<P: Into<PathBuf>>(root: P, options: WalkOptions) -> Self {
        Self {
            root: root.into(),
            options,
        }
    }

    /// Limits how deep the traversal goes; `0` (the default) is unlimited.
    ///
    /// Entries at depth `max_depth` are still yielded, but directories at that
    /// depth are never opened.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// Selects the traversal ordering.
    #[must_use]
    pub const fn strategy(mut self, strategy: Strategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    /// Controls whether the std backend sorts each directory's entries.
    ///
    /// Sorting is enabled by default so traversal order is deterministic.
    #[must_use]
    pub const fn sort_entries(mut self, sort: bool) -> Self {
        self.options.sort_entries = sort;
        self
    }

    /// Configures whether directory symlinks should be traversed.
    ///
    /// The walker always yields the symlink entry itself. When enabled and the
    /// symlink points to a directory, the walker also descends into it. Cycles
    /// are not detected; combine with [`max_depth`](Self::max_depth) when the
    /// tree may contain them.
    #[must_use]
    pub const fn follow_symlinks(mut self, follow: bool) -> Self {
        self.options.follow_symlinks = follow;
        self
    }

    /// Returns the options configured so far.
    #[must_use]
    pub const fn options(&self) -> &WalkOptions {
        &self.options
    }

    /// Builds a [`RecursiveIterator`] over the local filesystem.
    pub fn build(self) -> Result<RecursiveIterator, WalkError> {
        let opener = FsOpener::new(self.options.sort_entries, self.options.follow_symlinks);
        self.build_with(opener)
    }

    /// Builds a [`RecursiveIterator`] that enumerates through `opener`.
    ///
    /// `sort_entries` and `follow_symlinks` are properties of the std
    /// backend and are ignored here.
    pub fn build_with<O>(self, opener: O) -> Result<RecursiveIterator, WalkError>
    where
        O: DirectoryOpener + 'static,
    {
        RecursiveIterator::new(self.root, Box::new(opener), &self.options)
    }

    /// Builds a shared [`WalkHandle`] over the local filesystem.
    pub fn build_handle(self) -> Result<WalkHandle, WalkError> {
        self.build().map(WalkHandle::new)
    }
}
