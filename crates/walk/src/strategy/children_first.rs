use super::{Strategy, TraverseStrategy, may_descend};
use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::stack::TraversalStack;
use logging::debug_log;

/// Depth-first ordering.
///
/// A directory is yielded first; the following step opens it and yields its
/// first child before any of the directory's remaining siblings. The stack
/// holds one level per directory on the path from the root to the current
/// entry, so its depth equals the depth of the entry being yielded.
#[derive(Clone, Debug)]
pub struct ChildrenFirst {
    max_depth: usize,
}

impl ChildrenFirst {
    /// Creates the strategy; `max_depth == 0` means unlimited.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Pushes a level for the top entry when it is a directory within bounds.
    fn descend(&self, stack: &mut TraversalStack) -> Result<(), WalkError> {
        let Some(entry) = stack.top().and_then(|level| level.current_entry()) else {
            return Ok(());
        };
        if !entry.is_dir() {
            return Ok(());
        }
        if !may_descend(self.max_depth, entry.depth()) {
            debug_log!(
                Depth,
                2,
                "not descending into {:?}: depth {} reached limit {}",
                entry.path(),
                entry.depth(),
                self.max_depth
            );
            return Ok(());
        }

        let enumerator = stack.open(entry.path())?;
        stack.push(enumerator, entry.depth() + 1);
        Ok(())
    }
}

impl TraverseStrategy for ChildrenFirst {
    fn next(&mut self, stack: &mut TraversalStack) -> Result<Option<WalkEntry>, WalkError> {
        self.descend(stack)?;

        loop {
            let Some(level) = stack.top_mut() else {
                return Ok(None);
            };
            if level.advance()? {
                if let Some(entry) = level.current_entry() {
                    return Ok(Some(entry));
                }
            }
            if stack.depth() == 1 {
                // Bottom level exhausted; leave it for the owner to release.
                return Ok(None);
            }
            stack.pop();
        }
    }

    fn kind(&self) -> Strategy {
        Strategy::ChildrenFirst
    }
}
