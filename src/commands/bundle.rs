//! Bundle command implementation
//!
//! Post-processes a built .app in strict sequence: locate the bundle, edit
//! and install Info.plist, install the icon, run macdeployqt, relocate any
//! produced disk images. Steps before a failure leave their side effects in
//! place; only the icon auto-discovery and individual disk-image moves are
//! non-fatal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app_bundle::AppBundle;
use crate::artifacts;
use crate::cli::BundleArgs;
use crate::commands::helpers;
use crate::deploy;
use crate::error::{QtshipError, Result};
use crate::manifest::{Manifest, PLACEHOLDER_ICON_BASE};
use crate::ui;

/// Directories searched for an .icns when no --icon was given.
const ICON_SEARCH_DIRS: &[&str] = &[".", "resources", "Resources", "assets", "assets/icons"];

/// Run the bundling pipeline
pub fn run(args: BundleArgs) -> Result<()> {
    let app = AppBundle::locate(args.app_bundle.as_deref(), &args.build_dir)?;

    let mut manifest = Manifest::load(&args.info_plist)?;
    if let Some(version) = &args.build_version {
        println!("Setting CFBundleVersion = {}", version);
        manifest.set_build_version(version);
    }
    if let Some(version) = &args.short_version {
        println!("Setting CFBundleShortVersionString = {}", version);
        manifest.set_short_version(version);
    }

    let icon_base = resolve_icon_base(&manifest, args.icon.as_deref())?;

    let manifest_dest = app.manifest_path();
    manifest.write(&manifest_dest)?;
    println!("Wrote modified Info.plist -> {}", manifest_dest.display());

    install_icon(&app, &icon_base, args.icon.as_deref())?;

    let qt_prefix = helpers::resolve_qt_prefix(args.qt_prefix);
    let tool = deploy::resolve(args.macdeployqt, &qt_prefix, &args.qt_version_subdir)?;
    deploy::deploy(&tool, app.root(), &args.extra)?;

    if !args.no_dmg {
        relocate_disk_images(&app, &args.build_dir, &args.out_dir)?;
    }

    println!("Bundle step finished.");
    Ok(())
}

/// Icon base name: the manifest's CFBundleIconFile wins, then the stem of a
/// supplied icon path, then the placeholder (with a warning).
///
/// The manifest itself is never rewritten with the derived name; a template
/// without the field keeps an identical field set.
fn resolve_icon_base(manifest: &Manifest, icon: Option<&Path>) -> Result<String> {
    let mut base = manifest.icon_file().map(str::to_owned);

    if let Some(icon) = icon {
        if !icon.is_file() {
            return Err(QtshipError::IconNotFound {
                path: icon.display().to_string(),
            });
        }
        if base.is_none() {
            base = icon
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
    }

    match base {
        Some(base) => Ok(base),
        None => {
            ui::warn(&format!(
                "no CFBundleIconFile specified; defaulting to {}",
                PLACEHOLDER_ICON_BASE
            ));
            Ok(PLACEHOLDER_ICON_BASE.to_string())
        }
    }
}

/// Copy the icon into Contents/Resources as `<base>.icns`.
///
/// With no --icon, the first .icns found in the conventional directories is
/// used; finding none is a warning, not an error.
fn install_icon(app: &AppBundle, icon_base: &str, icon: Option<&Path>) -> Result<()> {
    let resources_dir = app.resources_dir();
    fs::create_dir_all(&resources_dir)?;

    let dest_name = format!("{}.icns", icon_base);
    let dest = resources_dir.join(&dest_name);

    let source = match icon {
        Some(path) => Some(path.to_path_buf()),
        None => find_icon_candidate(),
    };

    match source {
        Some(source) => {
            fs::copy(&source, &dest).map_err(|e| QtshipError::IconCopyFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            })?;
            println!("Copied icon {} -> {}", source.display(), dest.display());
        }
        None => {
            ui::warn(&format!(
                "no icon provided and none found in common locations; skipping icon copy. \
                 Expected {} in Contents/Resources",
                dest_name
            ));
        }
    }

    Ok(())
}

fn find_icon_candidate() -> Option<PathBuf> {
    for dir in ICON_SEARCH_DIRS {
        let dir = Path::new(dir);
        if !dir.is_dir() {
            continue;
        }
        let Ok(entries) = fs::read_dir(dir) else {
            continue;
        };
        let mut candidates: Vec<PathBuf> = entries
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == "icns")
            })
            .collect();
        candidates.sort();
        if let Some(found) = candidates.into_iter().next() {
            return Some(found);
        }
    }
    None
}

fn relocate_disk_images(app: &AppBundle, build_dir: &Path, out_dir: &Path) -> Result<()> {
    let found = artifacts::find_disk_images(app.base_name(), build_dir)?;
    artifacts::relocate(&found, out_dir)?;

    if found.is_empty() {
        println!(
            "macdeployqt completed. No dmg file was found; check the macdeployqt output \
             to see where it was written."
        );
    } else {
        println!("Created dmg(s):");
        for dmg in &found {
            println!("  {}", dmg.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE_WITH_ICON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIconFile</key>
    <string>DrawingBoard</string>
</dict>
</plist>
"#;

    const TEMPLATE_WITHOUT_ICON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>DrawingBoard</string>
</dict>
</plist>
"#;

    fn load_manifest(content: &str) -> (TempDir, Manifest) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Info.plist");
        fs::write(&path, content).unwrap();
        let manifest = Manifest::load(&path).unwrap();
        (temp, manifest)
    }

    #[test]
    fn test_icon_base_from_manifest_wins() {
        let (temp, manifest) = load_manifest(TEMPLATE_WITH_ICON);
        let icon = temp.path().join("Custom.icns");
        fs::write(&icon, "icns").unwrap();

        let base = resolve_icon_base(&manifest, Some(&icon)).unwrap();
        assert_eq!(base, "DrawingBoard");
    }

    #[test]
    fn test_icon_base_from_icon_stem() {
        let (temp, manifest) = load_manifest(TEMPLATE_WITHOUT_ICON);
        let icon = temp.path().join("Custom.icns");
        fs::write(&icon, "icns").unwrap();

        let base = resolve_icon_base(&manifest, Some(&icon)).unwrap();
        assert_eq!(base, "Custom");
    }

    #[test]
    fn test_icon_base_placeholder() {
        let (_temp, manifest) = load_manifest(TEMPLATE_WITHOUT_ICON);
        let base = resolve_icon_base(&manifest, None).unwrap();
        assert_eq!(base, PLACEHOLDER_ICON_BASE);
    }

    #[test]
    fn test_icon_base_missing_icon_file() {
        let (temp, manifest) = load_manifest(TEMPLATE_WITH_ICON);
        let err =
            resolve_icon_base(&manifest, Some(&temp.path().join("missing.icns"))).unwrap_err();
        assert!(matches!(err, QtshipError::IconNotFound { .. }));
        assert_eq!(err.exit_code(), 7);
    }
}
