//! Disk-image discovery and relocation
//!
//! macdeployqt writes its dmg next to the bundle or into the working
//! directory depending on version, so the search covers the current
//! directory, the build directory and the build directory's parent. Matches
//! are deduplicated by absolute path (order preserved) and moved into the
//! output directory; an individual move failure downgrades to a warning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui;

/// Find `<base_name>*.dmg` files in the candidate locations.
pub fn find_disk_images(base_name: &str, build_dir: &Path) -> Result<Vec<PathBuf>> {
    let cwd = std::env::current_dir()?;
    let locations = candidate_locations(&cwd, build_dir);
    Ok(collect(base_name, &locations, &cwd))
}

fn candidate_locations(cwd: &Path, build_dir: &Path) -> Vec<PathBuf> {
    let mut locations = vec![cwd.to_path_buf(), build_dir.to_path_buf()];
    if let Some(parent) = build_dir.parent() {
        if !parent.as_os_str().is_empty() {
            locations.push(parent.to_path_buf());
        }
    }
    locations.push(cwd.to_path_buf());
    locations
}

fn collect(base_name: &str, locations: &[PathBuf], cwd: &Path) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = Vec::new();
    for location in locations {
        for path in scan_dir(location, base_name) {
            let abs = if path.is_absolute() {
                path
            } else {
                cwd.join(path)
            };
            if !found.contains(&abs) {
                found.push(abs);
            }
        }
    }
    found
}

fn scan_dir(dir: &Path, base_name: &str) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut matches: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| is_disk_image(name, base_name))
        })
        .collect();
    matches.sort();
    matches
}

fn is_disk_image(file_name: &str, base_name: &str) -> bool {
    file_name.starts_with(base_name) && file_name.ends_with(".dmg")
}

/// Move each image into `out_dir` (created if absent). Failures warn and
/// continue; the remaining images are still moved.
pub fn relocate(images: &[PathBuf], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    for src in images {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dest = out_dir.join(name);
        println!("Moving {} -> {}", src.display(), dest.display());
        if let Err(e) = move_file(src, &dest) {
            ui::warn(&format!(
                "could not move {} to {}: {}",
                src.display(),
                out_dir.display(),
                e
            ));
        }
    }

    Ok(())
}

/// Rename, falling back to copy+remove for cross-device moves.
fn move_file(src: &Path, dest: &Path) -> std::io::Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => Ok(()),
        Err(_) => {
            fs::copy(src, dest)?;
            fs::remove_file(src)
        }
    }
}
