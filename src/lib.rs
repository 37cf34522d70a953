use std::path::PathBuf;
use std::sync::Once;
use clap::Parser;
use log::{debug, info};
use crate::domain::CopyReport;
use crate::fs::{copy_tree, list_entries, prepare_dest_dir, process_asset};

pub mod domain;
pub mod error;
pub mod fs;

pub use domain::AssetPaths;
pub use error::AssetError;

/// Line printed to stdout once every asset has been copied.
pub const CONFIRMATION: &str = "Copied widget files to dist/assets";

static INIT: Once = Once::new();

#[derive(Parser, Debug)]
#[command(author, version, about = "Copy static assets into the distribution folder", long_about = None)]
pub struct Args {
    /// Project directory the asset paths are resolved against
    ///
    /// Defaults to the crate directory recorded at build time, so an installed binary
    /// needs `--root` when run from another checkout.
    #[arg(short, long, default_value = env!("CARGO_MANIFEST_DIR"))]
    pub root: PathBuf,

    /// Asset source directory
    #[arg(short, long, default_value = domain::DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Asset destination directory
    #[arg(short, long, default_value = domain::DEFAULT_DEST)]
    pub dest: PathBuf,

    /// Mirror nested directories instead of failing on them
    #[arg(long)]
    pub recursive: bool,
}

impl Args {
    pub fn paths(&self) -> AssetPaths {
        AssetPaths::resolve(&self.root, &self.source, &self.dest)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CopyOptions {
    pub recursive: bool,
}

/// Logs go to stderr so stdout only ever carries the confirmation line.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_secs()
            .format_target(false)
            .init();
    });
}

/// Copies every direct entry of `paths.source` into `paths.dest`, stopping at the first failure.
pub fn copy_assets(paths: &AssetPaths, options: CopyOptions) -> Result<CopyReport, AssetError> {
    info!("Copying assets from {}", paths.source.display());

    let entries = list_entries(&paths.source)?;
    prepare_dest_dir(&paths.dest)?;

    let mut report = CopyReport::default();
    for path in entries {
        let Some(name) = path.file_name() else {
            continue;
        };
        let output_path = paths.dest.join(name);

        if options.recursive && path.is_dir() {
            debug!("Mirroring directory: {}", path.display());
            copy_tree(&path, &output_path, &mut report)?;
        } else {
            let bytes = process_asset(&path, &output_path)?;
            report.record(output_path, bytes);
        }
    }

    info!(
        "Copied {} file(s), {} bytes into {}",
        report.files,
        report.bytes,
        paths.dest.display()
    );
    Ok(report)
}

/// Runs the post-build step for parsed arguments.
pub fn run(args: &Args) -> Result<CopyReport, AssetError> {
    copy_assets(
        &args.paths(),
        CopyOptions {
            recursive: args.recursive,
        },
    )
}
