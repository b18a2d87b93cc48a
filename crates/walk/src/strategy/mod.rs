//! Traversal orderings.
//!
//! A [`TraverseStrategy`] turns the [`TraversalStack`] into a flat sequence of
//! entries. Both provided strategies honour the same depth bound: an entry at
//! depth `max_depth` is yielded but never descended into.

mod children_first;
mod siblings_first;

pub use children_first::ChildrenFirst;
pub use siblings_first::SiblingsFirst;

use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::stack::TraversalStack;
use std::fmt;
use std::str::FromStr;

/// Policy that produces the next entry from the traversal stack.
pub trait TraverseStrategy {
    /// Produces the next entry, mutating `stack` as needed.
    ///
    /// Returns `Ok(None)` once the traversal is exhausted.
    fn next(&mut self, stack: &mut TraversalStack) -> Result<Option<WalkEntry>, WalkError>;

    /// Ordering implemented by this strategy.
    fn kind(&self) -> Strategy;
}

/// Selects the traversal ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Depth-first: descend into a directory as soon as it is yielded.
    #[default]
    ChildrenFirst,
    /// Breadth-first: yield every entry of a level before any deeper entry.
    SiblingsFirst,
}

impl Strategy {
    /// Builds the traverser implementing this ordering.
    #[must_use]
    pub fn traverser(self, max_depth: usize) -> Box<dyn TraverseStrategy> {
        match self {
            Self::ChildrenFirst => Box::new(ChildrenFirst::new(max_depth)),
            Self::SiblingsFirst => Box::new(SiblingsFirst::new(max_depth)),
        }
    }

    /// Canonical name used by [`FromStr`] and [`fmt::Display`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChildrenFirst => "children-first",
            Self::SiblingsFirst => "siblings-first",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Strategy`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError {
    input: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown traversal strategy '{}' (expected children-first or siblings-first)",
            self.input
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "children-first" | "depth-first" | "dfs" => Ok(Self::ChildrenFirst),
            "siblings-first" | "breadth-first" | "bfs" => Ok(Self::SiblingsFirst),
            _ => Err(ParseStrategyError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Reports whether entries at `depth` may be descended into.
pub(crate) const fn may_descend(max_depth: usize, depth: usize) -> bool {
    max_depth == 0 || depth < max_depth
}
