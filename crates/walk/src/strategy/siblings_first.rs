use super::{Strategy, TraverseStrategy, may_descend};
use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::stack::TraversalStack;
use logging::debug_log;
use std::collections::VecDeque;
use std::path::PathBuf;

/// Breadth-first ordering.
///
/// Only one level is open at a time. Directories met while enumerating it are
/// queued, and the queue is shared across the whole tree, so every entry at
/// depth `n` is yielded before any entry at depth `n + 1`.
#[derive(Clone, Debug)]
pub struct SiblingsFirst {
    max_depth: usize,
    deferred: VecDeque<(PathBuf, usize)>,
}

impl SiblingsFirst {
    /// Creates the strategy; `max_depth == 0` means unlimited.
    #[must_use]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            deferred: VecDeque::new(),
        }
    }

    /// Number of directories waiting to be expanded.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.deferred.len()
    }

    fn defer(&mut self, entry: &WalkEntry) {
        if !entry.is_dir() {
            return;
        }
        if may_descend(self.max_depth, entry.depth()) {
            debug_log!(Queue, 3, "deferring {:?}", entry.path());
            self.deferred
                .push_back((entry.path().to_path_buf(), entry.depth()));
        } else {
            debug_log!(
                Depth,
                2,
                "not descending into {:?}: depth {} reached limit {}",
                entry.path(),
                entry.depth(),
                self.max_depth
            );
        }
    }
}

impl TraverseStrategy for SiblingsFirst {
    fn next(&mut self, stack: &mut TraversalStack) -> Result<Option<WalkEntry>, WalkError> {
        loop {
            if let Some(level) = stack.top_mut() {
                if level.advance()? {
                    if let Some(entry) = level.current_entry() {
                        self.defer(&entry);
                        return Ok(Some(entry));
                    }
                }
                stack.pop();
            }

            let Some((directory, depth)) = self.deferred.pop_front() else {
                return Ok(None);
            };
            debug_log!(
                Queue,
                3,
                "expanding {:?} ({} still deferred)",
                directory,
                self.deferred.len()
            );
            let enumerator = stack.open(&directory)?;
            stack.push(enumerator, depth + 1);
        }
    }

    fn kind(&self) -> Strategy {
        Strategy::SiblingsFirst
    }
}
