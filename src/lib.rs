//! Build-time CSS utility classes for [heroicons](https://heroicons.com).
//!
//! `heroclass` scans a heroicons checkout and turns every icon into a class that draws the icon
//! as a CSS mask, coloured with the current text colour:
//!
//! ```css
//! .hero-home {
//!   --hero-home: url('data:image/svg+xml;utf8,%3Csvg...');
//!   -webkit-mask: var(--hero-home);
//!   mask: var(--hero-home);
//!   ...
//!   width: 1.5rem;
//!   height: 1.5rem;
//! }
//! ```
//!
//! # Quick start
//!
//! ```no_run
//! let css = heroclass::stylesheet_for_project(".").unwrap();
//!
//! std::fs::write("priv/static/assets/heroicons.css", css).unwrap();
//! ```
//!
//! # How it works
//!
//! 1.  *Finding the icons*:
//!
//!     A short, ordered list of candidate directories ([SourceRoots]) is probed and the first
//!     one that exists becomes the [IconSourceRoot]. If none exist, nothing is generated, which
//!     is a perfectly fine outcome for builds that leave the icons out on purpose.
//!
//! 2.  *Listing variants*:
//!
//!     Every [Variant] has its own directory, either under an `optimized/` folder or directly
//!     under the root. Each `.svg` file in it becomes an [IconEntry], named after the file plus
//!     the variant's suffix (`home`, `home-solid`, `home-mini`, `home-micro`).
//!
//! 3.  *Generating rules*:
//!
//!     Each icon is read, inlined as a data URI and wrapped in a [DeclarationBlock], sized by
//!     looking up a spacing value through [ThemeLookup].
//!
//! [generate] runs all three steps against any [IconFs], so tests and host build tools can
//! supply their own filesystem and theme.

mod fs;
mod icon;
mod rule;
mod search_dir;
pub mod theme;

pub use fs::*;
pub use icon::*;
pub use rule::*;
pub use search_dir::*;
pub use theme::{Theme, ThemeLookup};

use indexmap::IndexMap;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to list icon directory {path:?}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read icon {path:?}")]
    ReadIcon {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The outcome of one [generate] run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Generation {
    /// None of the candidate directories exist.
    NoSourceRoot,
    /// A root was found, but none of its variant directories hold any `.svg` files.
    NoIcons { root: IconSourceRoot },
    Generated {
        root: IconSourceRoot,
        /// The icons the rules were generated from, keyed by utility name (`home-mini`).
        icons: IndexMap<String, IconEntry>,
        rules: RuleSet,
    },
}

impl Generation {
    pub fn rules(&self) -> Option<&RuleSet> {
        match self {
            Generation::Generated { rules, .. } => Some(rules),
            _ => None,
        }
    }

    /// The generated rules, empty if nothing was generated.
    pub fn into_rules(self) -> RuleSet {
        match self {
            Generation::Generated { rules, .. } => rules,
            _ => RuleSet::default(),
        }
    }

    pub fn values(&self) -> Option<&IndexMap<String, IconEntry>> {
        match self {
            Generation::Generated { icons, .. } => Some(icons),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.rules().map_or(0, RuleSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_css(&self) -> String {
        self.rules().map(RuleSet::to_css).unwrap_or_default()
    }
}

/// Generates one utility rule per icon found through `roots`.
///
/// Missing directories are never an error: they show up as [Generation::NoSourceRoot],
/// [Generation::NoIcons], or simply as a variant without rules. Failing to read an icon that was
/// listed, however, aborts the run.
pub fn generate<T, F>(roots: &SourceRoots, theme: &T, fs: &F) -> Result<Generation, GenerateError>
where
    T: ThemeLookup + ?Sized,
    F: IconFs + ?Sized,
{
    let Some(root) = roots.locate(fs) else {
        #[cfg(feature = "log")]
        log::debug!("no icon source root among {:?}", roots.dirs);

        return Ok(Generation::NoSourceRoot);
    };

    let icons = root.icons(fs)?;
    if icons.is_empty() {
        return Ok(Generation::NoIcons { root });
    }

    let mut rules = RuleSet::default();
    for entry in icons.values() {
        let svg = fs
            .read_to_string(&entry.path)
            .map_err(|source| GenerateError::ReadIcon {
                path: entry.path.clone(),
                source,
            })?;

        let block = DeclarationBlock::for_icon(entry, &svg, theme);
        rules.rules.insert(entry.class_name(), block);
    }

    #[cfg(feature = "log")]
    log::debug!("generated {} icon classes from {:?}", rules.len(), root.dir);

    Ok(Generation::Generated { root, icons, rules })
}

/// Renders the stylesheet for the project at `project_dir`, with the default candidates and
/// spacing scale, reading from disk.
///
/// Returns an empty string if no icons are installed.
pub fn stylesheet_for_project(project_dir: impl AsRef<Path>) -> Result<String, GenerateError> {
    let roots = SourceRoots::for_project(project_dir);
    let generation = generate(&roots, &Theme::default(), &StdFs)?;

    Ok(generation.to_css())
}
