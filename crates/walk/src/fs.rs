use crate::enumerator::{DirectoryEnumerator, DirectoryOpener};
use crate::error::WalkError;
use logging::debug_log;
use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::vec;

/// [`DirectoryOpener`] backed by `std::fs`.
///
/// With `sort_entries` enabled (the default) each directory is read eagerly
/// and its entries are yielded in byte-wise name order, so traversal order
/// does not depend on the underlying filesystem. Without sorting the
/// enumerator streams entries straight from [`fs::read_dir`].
///
/// Symlinks are reported as leaves unless `follow_symlinks` is enabled, in
/// which case a symlink whose target is a directory is reported as a
/// directory. No cycle detection is performed; bound such walks with a
/// maximum depth.
#[derive(Clone, Copy, Debug)]
pub struct FsOpener {
    sort_entries: bool,
    follow_symlinks: bool,
}

impl FsOpener {
    /// Creates an opener with explicit sorting and symlink behaviour.
    #[must_use]
    pub const fn new(sort_entries: bool, follow_symlinks: bool) -> Self {
        Self {
            sort_entries,
            follow_symlinks,
        }
    }

    /// Reports whether entries are sorted by name.
    #[must_use]
    pub const fn sorts_entries(&self) -> bool {
        self.sort_entries
    }

    /// Reports whether directory symlinks are treated as directories.
    #[must_use]
    pub const fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }
}

impl Default for FsOpener {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl DirectoryOpener for FsOpener {
    fn open_directory(&self, path: &Path) -> Result<Box<dyn DirectoryEnumerator>, WalkError> {
        let enumerator = FsEnumerator::open(path, self.sort_entries, self.follow_symlinks)?;
        Ok(Box::new(enumerator))
    }

    fn check_root(&self, path: &Path) -> Result<(), WalkError> {
        // The root itself is always resolved through symlinks.
        let metadata = fs::metadata(path).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                WalkError::path_not_found(path.to_path_buf(), error)
            } else {
                WalkError::metadata(path.to_path_buf(), error)
            }
        })?;

        if metadata.is_dir() {
            Ok(())
        } else {
            Err(WalkError::not_a_directory(path.to_path_buf()))
        }
    }
}

/// Enumerator over one directory on the local filesystem.
#[derive(Debug)]
pub struct FsEnumerator {
    directory: PathBuf,
    entries: Entries,
    current: Option<Current>,
    follow_symlinks: bool,
}

#[derive(Debug)]
enum Entries {
    Sorted(vec::IntoIter<(OsString, fs::FileType)>),
    Streaming(fs::ReadDir),
    Exhausted,
}

#[derive(Debug)]
struct Current {
    path: PathBuf,
    is_dir: bool,
}

impl FsEnumerator {
    /// Opens `directory` for enumeration.
    pub fn open(
        directory: &Path,
        sort_entries: bool,
        follow_symlinks: bool,
    ) -> Result<Self, WalkError> {
        let read_dir = fs::read_dir(directory)
            .map_err(|error| WalkError::read_dir(directory.to_path_buf(), error))?;

        let entries = if sort_entries {
            let mut names = Vec::new();
            for entry in read_dir {
                let entry = entry
                    .map_err(|error| WalkError::read_dir_entry(directory.to_path_buf(), error))?;
                let file_type = entry
                    .file_type()
                    .map_err(|error| WalkError::metadata(entry.path(), error))?;
                names.push((entry.file_name(), file_type));
            }
            names.sort_by(|(left, _), (right, _)| compare_file_names(left, right));
            debug_log!(Enter, 3, "found {} entries in {:?}", names.len(), directory);
            Entries::Sorted(names.into_iter())
        } else {
            Entries::Streaming(read_dir)
        };

        Ok(Self {
            directory: directory.to_path_buf(),
            entries,
            current: None,
            follow_symlinks,
        })
    }

    fn next_raw(&mut self) -> Result<Option<(PathBuf, fs::FileType)>, WalkError> {
        match &mut self.entries {
            Entries::Sorted(names) => {
                Ok(names.next().map(|(name, file_type)| (self.directory.join(name), file_type)))
            }
            Entries::Streaming(read_dir) => match read_dir.next() {
                None => Ok(None),
                Some(Err(error)) => Err(WalkError::read_dir_entry(self.directory.clone(), error)),
                Some(Ok(entry)) => {
                    let path = entry.path();
                    let file_type = entry
                        .file_type()
                        .map_err(|error| WalkError::metadata(path.clone(), error))?;
                    Ok(Some((path, file_type)))
                }
            },
            Entries::Exhausted => Ok(None),
        }
    }

    fn classify(&self, path: &Path, file_type: fs::FileType) -> Result<bool, WalkError> {
        if file_type.is_dir() {
            return Ok(true);
        }
        if !(file_type.is_symlink() && self.follow_symlinks) {
            return Ok(false);
        }

        match fs::metadata(path) {
            Ok(target) => Ok(target.is_dir()),
            // A dangling link is still a valid leaf entry.
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(error) => Err(WalkError::metadata(path.to_path_buf(), error)),
        }
    }
}

impl DirectoryEnumerator for FsEnumerator {
    fn directory(&self) -> &Path {
        &self.directory
    }

    fn current_path(&self) -> Option<&Path> {
        self.current.as_ref().map(|current| current.path.as_path())
    }

    fn current_is_dir(&self) -> bool {
        self.current.as_ref().is_some_and(|current| current.is_dir)
    }

    fn advance(&mut self) -> Result<bool, WalkError> {
        self.current = None;
        let Some((path, file_type)) = self.next_raw()? else {
            self.entries = Entries::Exhausted;
            return Ok(false);
        };

        let is_dir = self.classify(&path, file_type)?;
        self.current = Some(Current { path, is_dir });
        Ok(true)
    }
}

/// Compares file names using platform-appropriate byte ordering.
fn compare_file_names(left: &OsStr, right: &OsStr) -> Ordering {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        left.as_bytes().cmp(right.as_bytes())
    }

    #[cfg(windows)]
    {
        use std::os::windows::ffi::OsStrExt;
        left.encode_wide().cmp(right.encode_wide())
    }

    #[cfg(not(any(unix, windows)))]
    {
        left.to_string_lossy().cmp(&right.to_string_lossy())
    }
}
