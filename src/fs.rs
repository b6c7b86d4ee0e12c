use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// The filesystem operations icon discovery needs.
///
/// [generate](crate::generate) never touches the disk directly; everything goes through an
/// `IconFs`. Use [StdFs] for the real filesystem and [MemoryFs] to describe a layout in memory.
pub trait IconFs {
    fn is_dir(&self, path: &Path) -> bool;

    /// The names of the entries directly inside `path`, in no particular order.
    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

impl<T: IconFs + ?Sized> IconFs for &T {
    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).list_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Default, Copy, Clone)]
pub struct StdFs;

impl IconFs for StdFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        path.read_dir()?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// An in-memory directory tree.
///
/// Adding a file implicitly creates all of its parent directories.
///
/// # Example
///
/// ```
/// use heroclass::{IconFs, MemoryFs};
/// use std::path::Path;
///
/// let fs = MemoryFs::new().with_file("/icons/24/outline/home.svg", "<svg/>");
///
/// assert!(fs.is_dir(Path::new("/icons/24")));
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryFs {
    dirs: BTreeSet<PathBuf>,
    // `None` marks a file that is listed but cannot be read
    files: BTreeMap<PathBuf, Option<String>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_dir(path.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.add_file(path.into(), Some(contents.into()));
        self
    }

    /// Add a file that shows up in directory listings, but fails to be read.
    pub fn with_unreadable_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_file(path.into(), None);
        self
    }

    fn add_dir(&mut self, path: PathBuf) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn add_file(&mut self, path: PathBuf, contents: Option<String>) {
        if let Some(parent) = path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.files.insert(path, contents);
    }
}

impl IconFs for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        if !self.is_dir(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no directory at {}", path.display()),
            ));
        }

        let children = self
            .dirs
            .iter()
            .chain(self.files.keys())
            .filter(|child| child.parent() == Some(path))
            .filter_map(|child| child.file_name())
            .map(|name| name.to_os_string())
            .collect();

        Ok(children)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.files.get(path) {
            Some(Some(contents)) => Ok(contents.clone()),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no file at {}", path.display()),
            )),
        }
    }
}
