use std::path::{Path, PathBuf};

/// One of the four presentation styles heroicons ships.
///
/// Each variant lives in its own `<size>/<style>` directory and contributes a suffix to the
/// names of the utilities generated from it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variant {
    /// 24px outline, no suffix.
    Outline,
    /// 24px solid, `-solid`.
    Solid,
    /// 20px solid, `-mini`.
    Mini,
    /// 16px solid, `-micro`.
    Micro,
}

impl Variant {
    /// All variants, in the order they are scanned.
    pub const ALL: [Variant; 4] = [
        Variant::Outline,
        Variant::Solid,
        Variant::Mini,
        Variant::Micro,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Outline => "",
            Variant::Solid => "-solid",
            Variant::Mini => "-mini",
            Variant::Micro => "-micro",
        }
    }

    /// The variant's directory, relative to the icon source root (or its `optimized/` folder).
    pub fn sub_dir(self) -> PathBuf {
        let (size, style) = match self {
            Variant::Outline => ("24", "outline"),
            Variant::Solid => ("24", "solid"),
            Variant::Mini => ("20", "solid"),
            Variant::Micro => ("16", "solid"),
        };

        Path::new(size).join(style)
    }
}

/// The theme spacing value an icon's width and height are set to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SizeToken {
    Spacing4,
    Spacing5,
    Spacing6,
}

impl SizeToken {
    /// Picks the size for an already-suffixed utility name.
    ///
    /// This is a plain suffix test, so an outline icon whose own name ends in `-mini` is sized
    /// like a mini icon.
    pub fn for_utility_name(name: &str) -> Self {
        if name.ends_with(Variant::Mini.suffix()) {
            SizeToken::Spacing5
        } else if name.ends_with(Variant::Micro.suffix()) {
            SizeToken::Spacing4
        } else {
            SizeToken::Spacing6
        }
    }

    pub fn theme_key(self) -> &'static str {
        match self {
            SizeToken::Spacing4 => "spacing.4",
            SizeToken::Spacing5 => "spacing.5",
            SizeToken::Spacing6 => "spacing.6",
        }
    }
}

/// A single icon file found in a variant directory.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IconEntry {
    /// Utility name: the file stem followed by the variant suffix, e.g. `home-mini`.
    pub name: String,
    pub path: PathBuf,
    pub variant: Variant,
    pub size: SizeToken,
}

impl IconEntry {
    /// Returns `None` unless `path` names an `.svg` file.
    pub fn from_path(path: &Path, variant: Variant) -> Option<IconEntry> {
        // heroicons always uses lowercase extensions; anything else isn't one of ours
        if path.extension()? != "svg" {
            return None;
        }

        // names that aren't utf-8 still produce a (lossy) utility name
        let stem = path.file_stem()?.to_string_lossy();
        let name = format!("{stem}{}", variant.suffix());
        let size = SizeToken::for_utility_name(&name);

        Some(IconEntry {
            name,
            path: path.to_owned(),
            variant,
            size,
        })
    }

    /// The generated class name, `hero-<name>`.
    pub fn class_name(&self) -> String {
        format!("hero-{}", self.name)
    }

    /// The custom property holding this icon's data URI, `--hero-<name>`.
    pub fn custom_property(&self) -> String {
        format!("--hero-{}", self.name)
    }
}

#[cfg(test)]
mod test {
    use crate::icon::{IconEntry, SizeToken, Variant};
    use std::path::Path;

    #[test]
    fn test_entry_names_and_sizes() {
        let path = Path::new("/icons/20/solid/home.svg");
        let entry = IconEntry::from_path(path, Variant::Mini).unwrap();

        assert_eq!(entry.name, "home-mini");
        assert_eq!(entry.class_name(), "hero-home-mini");
        assert_eq!(entry.custom_property(), "--hero-home-mini");
        assert_eq!(entry.size, SizeToken::Spacing5);

        let entry = IconEntry::from_path(Path::new("home.svg"), Variant::Solid).unwrap();
        assert_eq!(entry.name, "home-solid");
        assert_eq!(entry.size, SizeToken::Spacing6);
    }

    #[test]
    fn test_non_svg_ignored() {
        assert!(IconEntry::from_path(Path::new("/icons/README.md"), Variant::Outline).is_none());
        assert!(IconEntry::from_path(Path::new("/icons/home.SVG"), Variant::Outline).is_none());
        assert!(IconEntry::from_path(Path::new("/icons/home"), Variant::Outline).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_kept() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/icons/caf\xe9.svg"));
        let entry = IconEntry::from_path(path, Variant::Outline).unwrap();

        assert_eq!(entry.name, "caf\u{FFFD}");
    }

    #[test]
    fn test_size_follows_suffixed_name() {
        assert_eq!(SizeToken::for_utility_name("bolt-micro"), SizeToken::Spacing4);
        assert_eq!(SizeToken::for_utility_name("bolt"), SizeToken::Spacing6);

        // the test runs on the full name, so an outline icon named like a mini one is sized as one
        let entry = IconEntry::from_path(Path::new("odd-mini.svg"), Variant::Outline).unwrap();
        assert_eq!(entry.size, SizeToken::Spacing5);
    }

    #[test]
    fn test_variant_dirs() {
        let dirs = Variant::ALL.map(Variant::sub_dir);

        assert_eq!(dirs[0], Path::new("24/outline"));
        assert_eq!(dirs[1], Path::new("24/solid"));
        assert_eq!(dirs[2], Path::new("20/solid"));
        assert_eq!(dirs[3], Path::new("16/solid"));
    }
}
