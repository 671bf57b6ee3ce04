//! Static asset passthrough.
//!
//! Fixed directories are copied verbatim into the output tree: the
//! top-level `assets/` directory and each section's `images/` directory.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::builder::BuildError;
use crate::collections::Section;

/// Copy a directory tree verbatim. Returns the number of files copied.
/// A missing source is not an error; the feature is simply skipped.
pub fn copy_dir(src: &Path, dst: &Path) -> Result<usize, BuildError> {
    if !src.exists() {
        return Ok(0);
    }

    let mut copied = 0;

    for entry in WalkDir::new(src).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let relative = path.strip_prefix(src).unwrap_or(path);
        let target = dst.join(relative);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::copy(path, &target).map_err(|e| {
            BuildError::WriteError(format!("{} -> {}: {}", path.display(), target.display(), e))
        })?;
        copied += 1;
    }

    Ok(copied)
}

/// Copy all passthrough directories for a site rooted at `site_dir` into
/// `output_dir`.
pub fn passthrough(site_dir: &Path, content_dir: &Path, output_dir: &Path) -> Result<usize, BuildError> {
    let mut copied = copy_dir(&site_dir.join("assets"), &output_dir.join("assets"))?;

    for section in Section::ALL {
        let images = content_dir.join(section.dir_name()).join("images");
        copied += copy_dir(
            &images,
            &output_dir.join(section.dir_name()).join("images"),
        )?;
    }

    if copied == 0 {
        tracing::warn!("No passthrough assets found under {}", site_dir.display());
    }

    Ok(copied)
}
