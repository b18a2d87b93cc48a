use crate::entry::WalkEntry;
use crate::error::WalkError;
use crate::walker::RecursiveIterator;
use logging::debug_log;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Shared-ownership handle to a [`RecursiveIterator`].
///
/// [`duplicate`](Self::duplicate) adds an owner and [`release`](Self::release)
/// removes one; the iterator, together with every directory enumerator it
/// holds, is dropped when the last owner is released. Duplicates do not copy
/// the traversal: all handles share one cursor, so advancing through any of
/// them moves every other handle too.
///
/// The handle is single-threaded (`!Send`). Callers that need to share a walk
/// across threads must serialise access themselves.
///
/// # Panics
///
/// Methods borrow the iterator for the duration of the call. Calling back
/// into a handle of the same walk from inside [`with`](Self::with) panics.
///
/// # Examples
///
/// ```
/// use recursive_walk::WalkBuilder;
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// std::fs::write(temp.path().join("a.txt"), b"a")?;
///
/// let first = WalkBuilder::new(temp.path()).build_handle()?;
/// let second = first.duplicate();
/// assert_eq!(first.ref_count(), 2);
///
/// second.advance()?;
/// assert!(first.current().ends_with("a.txt"));
///
/// assert_eq!(second.release(), 1);
/// assert_eq!(first.release(), 0);
/// # Ok(())
/// # }
/// # demo().unwrap();
/// ```
#[derive(Debug)]
pub struct WalkHandle {
    inner: Rc<RefCell<RecursiveIterator>>,
}

impl WalkHandle {
    /// Wraps `iterator` with a single owner.
    #[must_use]
    pub fn new(iterator: RecursiveIterator) -> Self {
        Self {
            inner: Rc::new(RefCell::new(iterator)),
        }
    }

    /// Adds an owner sharing the same traversal cursor.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        let handle = Self {
            inner: Rc::clone(&self.inner),
        };
        debug_log!(Own, 2, "duplicated walk handle ({} owners)", self.ref_count());
        handle
    }

    /// Removes this owner and returns how many remain.
    ///
    /// When the count reaches `0` the iterator and its open directories are
    /// dropped.
    pub fn release(self) -> usize {
        let remaining = Rc::strong_count(&self.inner) - 1;
        if remaining == 0 {
            debug_log!(
                Own,
                2,
                "released last walk handle for {:?}",
                self.inner.borrow().root()
            );
        } else {
            debug_log!(Own, 2, "released walk handle ({remaining} owners left)");
        }
        drop(self);
        remaining
    }

    /// Number of handles sharing the walk.
    #[must_use]
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Reports whether both handles share the same walk.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns the last yielded path.
    #[must_use]
    pub fn current(&self) -> PathBuf {
        self.inner.borrow().current().to_path_buf()
    }

    /// Returns the last yielded entry.
    #[must_use]
    pub fn current_entry(&self) -> WalkEntry {
        self.inner.borrow().current_entry().clone()
    }

    /// Advances the shared cursor; see [`RecursiveIterator::advance`].
    pub fn advance(&self) -> Result<PathBuf, WalkError> {
        self.inner
            .borrow_mut()
            .advance()
            .map(std::path::Path::to_path_buf)
    }

    /// Depth of the current path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.borrow().depth()
    }

    /// Configured depth bound; `0` means unlimited.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.inner.borrow().max_depth()
    }

    /// Reports whether the shared traversal is exhausted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.borrow().is_finished()
    }

    /// Runs `f` with exclusive access to the shared iterator.
    pub fn with<R>(&self, f: impl FnOnce(&mut RecursiveIterator) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

impl Clone for WalkHandle {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl Iterator for WalkHandle {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.borrow_mut().next()
    }
}

impl From<RecursiveIterator> for WalkHandle {
    fn from(iterator: RecursiveIterator) -> Self {
        Self::new(iterator)
    }
}
