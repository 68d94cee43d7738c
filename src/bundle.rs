//! Stages one PNG per iconset slot, compiles the staged directory into a
//! single `.icns` with the external icon compiler, relocates the result and
//! removes the staging directory.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::icon;
use crate::iconset;
use crate::logger;

pub struct BundleOptions {
    /// Transient `.iconset` directory the PNGs are staged into.
    pub staging_dir: PathBuf,
    /// Where the compiler writes the container file.
    pub output_path: PathBuf,
    /// Final home for the container file; `None` leaves it at `output_path`.
    pub resources_dir: Option<PathBuf>,
    /// Icon compiler executable, `iconutil` outside of tests.
    pub compiler: OsString,
}

impl BundleOptions {
    /// Defaults for a run from the Inkwell source tree. The resources
    /// directory is probed once here, not inside the builder.
    pub fn discover() -> Self {
        let resources = Path::new("resources");
        BundleOptions {
            staging_dir: PathBuf::from("Inkwell.iconset"),
            output_path: PathBuf::from("Inkwell.icns"),
            resources_dir: resources.is_dir().then(|| resources.to_path_buf()),
            compiler: OsString::from("iconutil"),
        }
    }
}

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("could not create staging directory {path}: {source}")]
    Staging { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Stage {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("could not run {compiler}: {source}")]
    Spawn { compiler: String, source: io::Error },
    #[error("{compiler} exited with {status}: {stderr}")]
    Compile {
        compiler: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("could not move {from} to {to}: {source}")]
    Relocate {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
    #[error("could not remove staging directory {path}: {source}")]
    Cleanup { path: PathBuf, source: io::Error },
}

impl BundleError {
    /// The failure class where the external compiler is missing or rejected
    /// the iconset. The staging directory is left intact for diagnosis.
    pub fn is_compiler_failure(&self) -> bool {
        matches!(
            self,
            BundleError::Spawn { .. } | BundleError::Compile { .. }
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum IconPlacement {
    MovedTo(PathBuf),
    LeftInPlace(PathBuf),
}

#[derive(Debug)]
pub struct BuildReport {
    pub staged: usize,
    pub placement: IconPlacement,
}

/// Run the whole pipeline. On a compiler failure the staged PNGs are kept;
/// on success the staging directory is removed.
pub fn build(opts: &BundleOptions) -> Result<BuildReport, BundleError> {
    fs::create_dir_all(&opts.staging_dir).map_err(|source| BundleError::Staging {
        path: opts.staging_dir.clone(),
        source,
    })?;

    println!("Creating Inkwell app icon...");
    let mut staged = 0usize;
    for slot in iconset::slots() {
        let px = slot.pixel_size();
        let path = opts.staging_dir.join(slot.file_name());
        icon::render(px)
            .save(&path)
            .map_err(|source| BundleError::Stage {
                path: path.clone(),
                source,
            })?;
        logger::log_line(&format!("staged {}", path.display()));
        println!("  ✓ Created {} ({px}x{px})", slot.file_name());
        staged += 1;
    }

    println!("\nConverting to .icns format...");
    compile(opts)?;
    println!("  ✓ Created {}", opts.output_path.display());

    let placement = place_output(opts)?;
    match &placement {
        IconPlacement::MovedTo(dest) => println!("  ✓ Moved to {}", dest.display()),
        IconPlacement::LeftInPlace(path) => println!(
            "  • No resources directory, leaving {} in place",
            path.display()
        ),
    }

    fs::remove_dir_all(&opts.staging_dir).map_err(|source| BundleError::Cleanup {
        path: opts.staging_dir.clone(),
        source,
    })?;
    println!("  ✓ Cleaned up temporary files");

    Ok(BuildReport { staged, placement })
}

fn compile(opts: &BundleOptions) -> Result<(), BundleError> {
    let compiler = opts.compiler.to_string_lossy().into_owned();
    let args = [
        "-c".to_string(),
        "icns".to_string(),
        opts.staging_dir.display().to_string(),
        "-o".to_string(),
        opts.output_path.display().to_string(),
    ];
    logger::log_command(&compiler, &args);

    let output = Command::new(&opts.compiler)
        .arg("-c")
        .arg("icns")
        .arg(&opts.staging_dir)
        .arg("-o")
        .arg(&opts.output_path)
        .output()
        .map_err(|source| BundleError::Spawn {
            compiler: compiler.clone(),
            source,
        })?;
    logger::log_status(&compiler, output.status);

    if !output.status.success() {
        return Err(BundleError::Compile {
            compiler,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}

fn place_output(opts: &BundleOptions) -> Result<IconPlacement, BundleError> {
    let Some(dir) = &opts.resources_dir else {
        return Ok(IconPlacement::LeftInPlace(opts.output_path.clone()));
    };
    let file_name = opts
        .output_path
        .file_name()
        .unwrap_or(opts.output_path.as_os_str());
    let dest = dir.join(file_name);
    fs::rename(&opts.output_path, &dest).map_err(|source| BundleError::Relocate {
        from: opts.output_path.clone(),
        to: dest.clone(),
        source,
    })?;
    logger::log_line(&format!(
        "moved {} -> {}",
        opts.output_path.display(),
        dest.display()
    ));
    Ok(IconPlacement::MovedTo(dest))
}
