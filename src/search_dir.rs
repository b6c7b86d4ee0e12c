use crate::GenerateError;
use crate::fs::IconFs;
use crate::icon::{IconEntry, Variant};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// The vendored layout, a git dependency checked out next to the project.
pub const VENDORED_ROOT: &str = "deps/heroicons/optimized";
/// The layout left behind by installing the `heroicons` npm package in the assets folder.
pub const NODE_MODULES_ROOT: &str = "assets/node_modules/heroicons";

/// Icons are looked for in an ordered list of candidate directories.
///
/// By default, that is `deps/heroicons/optimized` followed by `assets/node_modules/heroicons`,
/// both relative to the current working directory. The first candidate that exists is used,
/// the others are never looked at.
///
/// A candidate only counts if it is a directory: a plain file at that path is skipped like a
/// missing one, so the next candidate gets its turn.
///
/// To add candidates to the list, use [SourceRoots::append].
///
/// To construct a new `SourceRoots` from a list, use the `From` implementation or construct it by hand.
///
/// # Example
///
/// ```
/// use heroclass::SourceRoots;
///
/// let roots = SourceRoots::for_project("/srv/app").append(["/usr/share/heroicons"]);
///
/// assert_eq!(roots.dirs.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SourceRoots {
    pub dirs: Vec<PathBuf>,
}

impl SourceRoots {
    pub fn default() -> Self {
        <Self as Default>::default()
    }

    /// The standard candidates, relative to `project_dir`.
    pub fn for_project(project_dir: impl AsRef<Path>) -> Self {
        let project_dir = project_dir.as_ref();

        [VENDORED_ROOT, NODE_MODULES_ROOT]
            .map(|candidate| project_dir.join(candidate))
            .into()
    }

    /// Add a list of lower priority candidates to this `SourceRoots`.
    pub fn append<I, P>(mut self, directories: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.dirs.extend(directories.into_iter().map(Into::into));
        self
    }

    /// Picks the first candidate that is an existing directory.
    pub fn locate<F>(&self, fs: &F) -> Option<IconSourceRoot>
    where
        F: IconFs + ?Sized,
    {
        let dir = self.dirs.iter().find(|dir| fs.is_dir(dir))?;

        #[cfg(feature = "log")]
        log::debug!("using icon source root {dir:?}");

        Some(IconSourceRoot { dir: dir.clone() })
    }
}

/// Anything that turns into an iterator of things that can become paths, can be turned into a `SourceRoots`.
impl<I, P> From<I> for SourceRoots
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    fn from(value: I) -> Self {
        let dirs = value.into_iter().map(Into::into).collect();

        SourceRoots { dirs }
    }
}

impl Default for SourceRoots {
    fn default() -> Self {
        let project_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        SourceRoots::for_project(project_dir)
    }
}

/// The directory icons are read from during one run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IconSourceRoot {
    pub dir: PathBuf,
}

impl IconSourceRoot {
    /// The directory variant directories live in.
    ///
    /// Packaged releases keep the icons one level down, in `optimized/`. When that folder exists
    /// it is used for every variant, and the root itself is never looked at.
    pub fn variant_base<F>(&self, fs: &F) -> PathBuf
    where
        F: IconFs + ?Sized,
    {
        let optimized = self.dir.join("optimized");

        if fs.is_dir(&optimized) {
            optimized
        } else {
            self.dir.clone()
        }
    }

    /// Finds the directory holding `variant`'s icons, under [IconSourceRoot::variant_base].
    pub fn resolve_variant_dir<F>(&self, variant: Variant, fs: &F) -> Option<PathBuf>
    where
        F: IconFs + ?Sized,
    {
        let dir = self.variant_base(fs).join(variant.sub_dir());

        fs.is_dir(&dir).then_some(dir)
    }

    /// Lists every icon of every variant, keyed by utility name.
    ///
    /// Variants are scanned in [Variant::ALL] order, each directory in file name order.
    /// A name seen twice keeps its first position but takes the later entry.
    pub fn icons<F>(&self, fs: &F) -> Result<IndexMap<String, IconEntry>, GenerateError>
    where
        F: IconFs + ?Sized,
    {
        let mut icons = IndexMap::new();

        for variant in Variant::ALL {
            let Some(dir) = self.resolve_variant_dir(variant, fs) else {
                #[cfg(feature = "log")]
                log::debug!("no {variant:?} icons under {:?}, skipping", self.dir);

                continue;
            };

            let mut file_names = fs
                .list_dir(&dir)
                .map_err(|source| GenerateError::ListDirectory {
                    path: dir.clone(),
                    source,
                })?;
            file_names.sort();

            for file_name in file_names {
                let Some(entry) = IconEntry::from_path(&dir.join(file_name), variant) else {
                    continue;
                };

                if let Some(_previous) = icons.insert(entry.name.clone(), entry) {
                    #[cfg(feature = "log")]
                    log::debug!("icon {:?} replaced by a later file", _previous.path);
                }
            }
        }

        Ok(icons)
    }
}
