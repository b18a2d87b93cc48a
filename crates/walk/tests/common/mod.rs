//! In-memory directory backend for integration tests.
//!
//! Entries keep insertion order so tests can check that sibling order is
//! whatever the enumerator produces. Every enumerator bumps a shared live
//! counter while it exists, which lets tests observe when levels are released.

#![allow(dead_code)]

use recursive_walk::{DirectoryEnumerator, DirectoryOpener, WalkError};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct MemoryTree {
    directories: BTreeMap<PathBuf, Vec<(PathBuf, bool)>>,
    unreadable: BTreeSet<PathBuf>,
    failing_after: BTreeMap<PathBuf, usize>,
    live: Rc<Cell<usize>>,
    opened: Rc<RefCell<Vec<PathBuf>>>,
}

impl MemoryTree {
    /// Builds a tree from `/`-separated paths below `root`; a trailing `/`
    /// marks a directory. Parents are created implicitly.
    pub fn new(root: &str, paths: &[&str]) -> Self {
        let mut tree = Self::default();
        tree.directories.insert(PathBuf::from(root), Vec::new());
        for path in paths {
            let is_dir = path.ends_with('/');
            let trimmed = path.trim_end_matches('/');
            let mut parent = PathBuf::from(root);
            let components: Vec<&str> = trimmed.split('/').collect();
            for (index, component) in components.iter().enumerate() {
                let child = parent.join(component);
                let last = index + 1 == components.len();
                let child_is_dir = !last || is_dir;
                tree.insert(&parent, &child, child_is_dir);
                parent = child;
            }
        }
        tree
    }

    fn insert(&mut self, parent: &Path, child: &Path, is_dir: bool) {
        let siblings = self.directories.entry(parent.to_path_buf()).or_default();
        if !siblings.iter().any(|(path, _)| path == child) {
            siblings.push((child.to_path_buf(), is_dir));
        }
        if is_dir {
            self.directories.entry(child.to_path_buf()).or_default();
        }
    }

    /// Makes opening `path` fail.
    pub fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    /// Makes enumerating `path` fail after yielding `count` entries.
    pub fn failing_after(mut self, path: &str, count: usize) -> Self {
        self.failing_after.insert(PathBuf::from(path), count);
        self
    }

    /// Enumerators currently alive.
    pub fn live(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.live)
    }

    /// Directories opened so far, in order.
    pub fn opened(&self) -> Rc<RefCell<Vec<PathBuf>>> {
        Rc::clone(&self.opened)
    }
}

impl DirectoryOpener for MemoryTree {
    fn open_directory(&self, path: &Path) -> Result<Box<dyn DirectoryEnumerator>, WalkError> {
        if self.unreadable.contains(path) {
            return Err(WalkError::read_dir(
                path.to_path_buf(),
                io::Error::new(io::ErrorKind::PermissionDenied, "unreadable"),
            ));
        }
        let Some(entries) = self.directories.get(path) else {
            return Err(WalkError::read_dir(
                path.to_path_buf(),
                io::Error::from(io::ErrorKind::NotFound),
            ));
        };

        self.opened.borrow_mut().push(path.to_path_buf());
        self.live.set(self.live.get() + 1);
        Ok(Box::new(MemoryEnumerator {
            directory: path.to_path_buf(),
            entries: entries.clone(),
            index: None,
            fail_after: self.failing_after.get(path).copied(),
            live: Rc::clone(&self.live),
        }))
    }

    fn check_root(&self, root: &Path) -> Result<(), WalkError> {
        if self.directories.contains_key(root) {
            Ok(())
        } else {
            Err(WalkError::path_not_found(
                root.to_path_buf(),
                io::Error::from(io::ErrorKind::NotFound),
            ))
        }
    }
}

struct MemoryEnumerator {
    directory: PathBuf,
    entries: Vec<(PathBuf, bool)>,
    index: Option<usize>,
    fail_after: Option<usize>,
    live: Rc<Cell<usize>>,
}

impl MemoryEnumerator {
    fn current(&self) -> Option<&(PathBuf, bool)> {
        self.index.and_then(|index| self.entries.get(index))
    }
}

impl DirectoryEnumerator for MemoryEnumerator {
    fn directory(&self) -> &Path {
        &self.directory
    }

    fn current_path(&self) -> Option<&Path> {
        self.current().map(|(path, _)| path.as_path())
    }

    fn current_is_dir(&self) -> bool {
        self.current().is_some_and(|(_, is_dir)| *is_dir)
    }

    fn advance(&mut self) -> Result<bool, WalkError> {
        let next = self.index.map_or(0, |index| index + 1);
        if self.fail_after == Some(next) {
            return Err(WalkError::read_dir_entry(
                self.directory.clone(),
                io::Error::other("injected failure"),
            ));
        }
        self.index = Some(next.min(self.entries.len()));
        Ok(next < self.entries.len())
    }
}

impl Drop for MemoryEnumerator {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

/// Collects every path the walker yields, root included.
pub fn collect_paths<I>(walker: I) -> Vec<String>
where
    I: Iterator<Item = Result<recursive_walk::WalkEntry, WalkError>>,
{
    walker
        .map(|entry| {
            entry
                .expect("walk entry")
                .path()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}
