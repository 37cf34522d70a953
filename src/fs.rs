use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use walkdir::WalkDir;
use crate::domain::CopyReport;
use crate::error::AssetError;

/// Lists the direct entries of `source`, sorted by file name.
///
/// Nothing on disk is touched, so a missing source leaves the destination alone.
pub fn list_entries(source: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let unreadable = |e| AssetError::SourceUnreadable {
        path: source.to_path_buf(),
        source: e,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(source).map_err(unreadable)? {
        entries.push(entry.map_err(unreadable)?.path());
    }
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

pub fn prepare_dest_dir(dest: &Path) -> Result<(), AssetError> {
    // Existing contents are kept, only missing directories are created
    if !dest.is_dir() {
        info!("Creating asset directory: {}", dest.display());
    }
    create_dir(dest)
}

fn create_dir(path: &Path) -> Result<(), AssetError> {
    fs::create_dir_all(path).map_err(|e| AssetError::CreateDest {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Copies one flat file, overwriting `output_path`. Returns the number of bytes written.
pub fn process_asset(path: &Path, output_path: &Path) -> Result<u64, AssetError> {
    if path.is_dir() {
        return Err(AssetError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = output_path.parent() {
        create_dir(parent)?;
    }
    debug!("Copying asset: {} -> {}", path.display(), output_path.display());
    fs::copy(path, output_path).map_err(|e| AssetError::Copy {
        from: path.to_path_buf(),
        to: output_path.to_path_buf(),
        source: e,
    })
}

/// Mirrors the tree under `src_dir` into `dest_dir`. Symlinked directories are followed.
pub fn copy_tree(src_dir: &Path, dest_dir: &Path, report: &mut CopyReport) -> Result<(), AssetError> {
    for entry in WalkDir::new(src_dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        // Preserve relative structure under dest_dir
        let relative_path = path.strip_prefix(src_dir).map_err(|_e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{} escaped {}", path.display(), src_dir.display()),
            )
        })?;
        let output_path = dest_dir.join(relative_path);

        if entry.file_type().is_dir() {
            create_dir(&output_path)?;
            continue;
        }
        let bytes = process_asset(path, &output_path)?;
        report.record(output_path, bytes);
    }
    Ok(())
}
