#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `recursive_walk` provides a depth-bounded recursive directory iterator. The
//! walk yields one path per step, starting with the root, and can visit the
//! tree depth-first ([`Strategy::ChildrenFirst`]) or breadth-first
//! ([`Strategy::SiblingsFirst`]). A maximum depth stops descent: entries at
//! that depth are yielded but never opened.
//!
//! # Design
//!
//! - [`WalkBuilder`] configures the walk (depth bound, ordering, std backend
//!   options) and builds a [`RecursiveIterator`].
//! - [`RecursiveIterator`] owns a [`TraversalStack`] of per-directory
//!   enumerators and a [`TraverseStrategy`] that decides how the stack is
//!   pushed, popped and advanced. It exposes a cursor API
//!   ([`current`](RecursiveIterator::current),
//!   [`advance`](RecursiveIterator::advance),
//!   [`depth`](RecursiveIterator::depth)) and implements [`Iterator`].
//! - Directories are read through the [`DirectoryOpener`] /
//!   [`DirectoryEnumerator`] capability. [`FsOpener`] implements it with
//!   `std::fs`; any other backend can be plugged in with
//!   [`WalkBuilder::build_with`].
//! - [`WalkHandle`] shares one walk between several owners. Duplicates share
//!   the cursor, and the walk is dropped with the last owner.
//!
//! # Invariants
//!
//! - Without a depth bound every reachable path is yielded exactly once, the
//!   root first.
//! - No yielded entry is deeper than the configured bound.
//! - Once finished, the iterator stays finished and keeps its last path.
//!
//! # Errors
//!
//! Construction fails with [`WalkErrorKind::PathNotFound`] or
//! [`WalkErrorKind::NotADirectory`] when the root is unusable. A directory
//! that cannot be enumerated during the walk surfaces as a [`WalkError`] from
//! [`RecursiveIterator::advance`] and ends the traversal; it is never treated
//! as empty.
//!
//! # Examples
//!
//! ```
//! use recursive_walk::{Strategy, WalkBuilder};
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("a");
//! fs::create_dir_all(root.join("b"))?;
//! fs::write(root.join("b/z"), b"z")?;
//! fs::write(root.join("x"), b"x")?;
//!
//! let mut walker = WalkBuilder::new(&root)
//!     .strategy(Strategy::SiblingsFirst)
//!     .build()?;
//! assert_eq!(walker.current(), root);
//!
//! let mut seen = Vec::new();
//! while !walker.is_finished() {
//!     let path = walker.advance()?.to_path_buf();
//!     if !walker.is_finished() {
//!         seen.push(path.strip_prefix(&root)?.to_path_buf());
//!     }
//! }
//! assert_eq!(seen, ["b", "x", "b/z"].map(std::path::PathBuf::from));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod builder;
mod entry;
mod enumerator;
mod error;
mod fs;
mod handle;
mod stack;
mod strategy;
mod walker;

pub use builder::{WalkBuilder, WalkOptions};
pub use entry::WalkEntry;
pub use enumerator::{DirectoryEnumerator, DirectoryOpener};
pub use error::{WalkError, WalkErrorKind};
pub use fs::{FsEnumerator, FsOpener};
pub use handle::WalkHandle;
pub use stack::{Level, TraversalStack};
pub use strategy::{ChildrenFirst, ParseStrategyError, SiblingsFirst, Strategy, TraverseStrategy};
pub use walker::RecursiveIterator;
