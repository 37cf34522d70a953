use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Cannot read asset source {}: {source}", path.display())]
    SourceUnreadable { path: PathBuf, source: io::Error },

    #[error("Cannot create destination {}: {source}", path.display())]
    CreateDest { path: PathBuf, source: io::Error },

    #[error("{} is a directory; pass --recursive to copy nested assets", path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to copy {} -> {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
