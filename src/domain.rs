use std::path::{Path, PathBuf};

/// Source directory, relative to the project root.
pub const DEFAULT_SOURCE: &str = "backend/assets";
/// Destination directory, relative to the project root.
pub const DEFAULT_DEST: &str = "dist/assets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl AssetPaths {
    /// Resolves `source` and `dest` against `root`. Absolute values win over the root.
    pub fn resolve(root: &Path, source: &Path, dest: &Path) -> Self {
        AssetPaths {
            source: root.join(source),
            dest: root.join(dest),
        }
    }

    /// The fixed layout: `<root>/backend/assets` into `<root>/dist/assets`.
    pub fn from_root(root: &Path) -> Self {
        Self::resolve(root, Path::new(DEFAULT_SOURCE), Path::new(DEFAULT_DEST))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub files: usize,
    pub bytes: u64,
    pub written: Vec<PathBuf>,
}

impl CopyReport {
    pub fn record(&mut self, dest: PathBuf, bytes: u64) {
        self.files += 1;
        self.bytes += bytes;
        self.written.push(dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_uses_fixed_layout() {
        let paths = AssetPaths::from_root(Path::new("/project"));
        assert_eq!(paths.source, PathBuf::from("/project/backend/assets"));
        assert_eq!(paths.dest, PathBuf::from("/project/dist/assets"));
    }

    #[test]
    fn absolute_override_replaces_root() {
        let paths = AssetPaths::resolve(
            Path::new("/project"),
            Path::new("/elsewhere/assets"),
            Path::new("out"),
        );
        assert_eq!(paths.source, PathBuf::from("/elsewhere/assets"));
        assert_eq!(paths.dest, PathBuf::from("/project/out"));
    }
}
