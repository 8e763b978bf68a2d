//! macOS .app bundle discovery and layout
//!
//! A bundle is a directory named `<Name>.app` with a `Contents/` directory
//! holding the Info.plist and a `Resources/` subdirectory. qtship never
//! creates bundles; it locates one produced by the build and derives the
//! paths the bundling pipeline writes to.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{QtshipError, Result};

/// A located, layout-checked application bundle.
#[derive(Debug)]
pub struct AppBundle {
    root: PathBuf,
    base_name: String,
}

impl AppBundle {
    /// Resolve the target bundle: an explicitly supplied path, or the first
    /// `*.app` directory found under `build_dir`.
    ///
    /// An explicit path that is not a directory is an error distinct from the
    /// search finding nothing; both are distinct from a directory that lacks
    /// the `Contents/` layout.
    pub fn locate(explicit: Option<&Path>, build_dir: &Path) -> Result<Self> {
        let root = match explicit {
            Some(path) => {
                if !path.is_dir() {
                    return Err(QtshipError::AppBundleMissing {
                        path: path.display().to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let found =
                    Self::discover(build_dir).ok_or_else(|| QtshipError::AppBundleNotFound {
                        path: build_dir.display().to_string(),
                    })?;
                println!("Auto-detected app bundle: {}", found.display());
                found
            }
        };

        if !root.join("Contents").is_dir() {
            return Err(QtshipError::AppBundleLayoutInvalid {
                path: root.display().to_string(),
            });
        }

        let base_name = base_name_of(&root);
        Ok(Self { root, base_name })
    }

    /// First `*.app` directory under `build_dir`, walking top-down.
    fn discover(build_dir: &Path) -> Option<PathBuf> {
        WalkDir::new(build_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .find(|entry| {
                entry.file_type().is_dir()
                    && entry.path().extension().is_some_and(|ext| ext == "app")
            })
            .map(walkdir::DirEntry::into_path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Bundle directory name without the `.app` suffix.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn contents_dir(&self) -> PathBuf {
        self.root.join("Contents")
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.contents_dir().join("Resources")
    }

    /// Destination of the edited Info.plist.
    pub fn manifest_path(&self) -> PathBuf {
        self.contents_dir().join("Info.plist")
    }
}

fn base_name_of(root: &Path) -> String {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(".app").unwrap_or(&name).to_string()
}
