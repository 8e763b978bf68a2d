//! Command helper utilities

use std::path::PathBuf;

/// Resolve the Qt install prefix.
///
/// Clap already applied the `QT_INSTALL_PREFIX` environment fallback; when
/// neither the flag nor the environment supplied one, default to `~/Qt`,
/// the location the Qt online installer uses.
pub fn resolve_qt_prefix(qt_prefix: Option<PathBuf>) -> PathBuf {
    qt_prefix.unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Qt")
    })
}
