//! macdeployqt resolution and invocation
//!
//! Qt installs ship the tool as `<prefix>/<version>/<platform>/bin/macdeployqt6`.
//! An explicit `--macdeployqt` path wins over the derived location; either way
//! the resolved path must be an existing executable file before it is run.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{QtshipError, Result};
use crate::process;

/// Resolve the macdeployqt executable path.
pub fn resolve(
    explicit: Option<PathBuf>,
    qt_prefix: &Path,
    qt_version_subdir: &str,
) -> Result<PathBuf> {
    let path = explicit.unwrap_or_else(|| {
        qt_prefix
            .join(qt_version_subdir)
            .join("bin")
            .join("macdeployqt6")
    });

    if !is_executable(&path) {
        return Err(QtshipError::DeployToolMissing {
            path: path.display().to_string(),
        });
    }

    Ok(path)
}

/// Run macdeployqt against the bundle, forwarding `extra` arguments.
/// With no extra arguments, `-dmg` is passed so a disk image gets produced.
pub fn deploy(tool: &Path, app_bundle: &Path, extra: &[String]) -> Result<()> {
    let mut cmd = Command::new(tool);
    cmd.arg(app_bundle);
    if extra.is_empty() {
        cmd.arg("-dmg");
    } else {
        cmd.args(extra);
    }

    println!("Running macdeployqt (bundling Qt into the app)...");
    process::run(&mut cmd, "macdeployqt")
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.is_file()
        && std::fs::metadata(path)
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_resolve_explicit_missing() {
        let temp = TempDir::new().unwrap();
        let err = resolve(
            Some(temp.path().join("macdeployqt6")),
            temp.path(),
            "6.5.3/macos",
        )
        .unwrap_err();
        assert!(matches!(err, QtshipError::DeployToolMissing { .. }));
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn test_resolve_derived_path() {
        let temp = TempDir::new().unwrap();
        let bin_dir = temp.path().join("6.5.3/macos/bin");
        fs::create_dir_all(&bin_dir).unwrap();
        let tool = bin_dir.join("macdeployqt6");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        make_executable(&tool);

        let resolved = resolve(None, temp.path(), "6.5.3/macos").unwrap();
        assert_eq!(resolved, tool);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_rejects_non_executable() {
        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("macdeployqt6");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o644)).unwrap();

        let err = resolve(Some(tool), temp.path(), "6.5.3/macos").unwrap_err();
        assert!(matches!(err, QtshipError::DeployToolMissing { .. }));
    }

    #[test]
    fn test_resolve_rejects_directory() {
        let temp = TempDir::new().unwrap();
        let err = resolve(Some(temp.path().to_path_buf()), temp.path(), "6.5.3/macos")
            .unwrap_err();
        assert!(matches!(err, QtshipError::DeployToolMissing { .. }));
    }
}
