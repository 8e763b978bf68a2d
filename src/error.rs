//! Error types and handling for qtship
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Every failure condition carries its own process exit code so that callers
//! (CI pipelines, release scripts) can distinguish them; see [`QtshipError::exit_code`].
//! A tool spawned by qtship that exits non-zero has its exit code forwarded
//! unchanged.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for qtship operations
#[derive(Error, Diagnostic, Debug)]
pub enum QtshipError {
    // App bundle errors
    #[error("no .app bundle found under {path}")]
    #[diagnostic(
        code(qtship::bundle::not_found),
        help("Build the application first, or pass --app-bundle explicitly")
    )]
    AppBundleNotFound { path: String },

    #[error("app bundle does not exist: {path}")]
    #[diagnostic(code(qtship::bundle::missing))]
    AppBundleMissing { path: String },

    #[error("{path} does not look like a valid .app (missing Contents/)")]
    #[diagnostic(code(qtship::bundle::invalid_layout))]
    AppBundleLayoutInvalid { path: String },

    // Manifest errors
    #[error("Info.plist template not found: {path}")]
    #[diagnostic(code(qtship::manifest::template_missing))]
    ManifestTemplateMissing { path: String },

    #[error("failed to parse Info.plist template {path}: {reason}")]
    #[diagnostic(code(qtship::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("failed to write Info.plist to {path}: {reason}")]
    #[diagnostic(code(qtship::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    // Icon errors
    #[error("icon file not found: {path}")]
    #[diagnostic(code(qtship::icon::not_found))]
    IconNotFound { path: String },

    #[error("failed to copy icon to {path}: {reason}")]
    #[diagnostic(code(qtship::icon::copy_failed))]
    IconCopyFailed { path: String, reason: String },

    // Deploy tool errors
    #[error("macdeployqt not found or not executable at {path}")]
    #[diagnostic(
        code(qtship::deploy::tool_missing),
        help("Pass --macdeployqt, or adjust --qt-prefix / --qt-version-subdir")
    )]
    DeployToolMissing { path: String },

    // Child process errors
    #[error("{tool} failed with exit code {code}")]
    #[diagnostic(code(qtship::process::failed))]
    ToolFailed { tool: String, code: i32 },

    #[error("failed to spawn {tool}: {reason}")]
    #[diagnostic(code(qtship::process::spawn_failed))]
    SpawnFailed { tool: String, reason: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(qtship::fs::io_error))]
    IoError { message: String },
}

impl QtshipError {
    /// Process exit code for this error.
    ///
    /// Input-validation failures use a stable small integer each; a failed
    /// external tool forwards its own exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            QtshipError::AppBundleNotFound { .. } => 2,
            QtshipError::AppBundleMissing { .. } => 3,
            QtshipError::AppBundleLayoutInvalid { .. } => 4,
            QtshipError::ManifestTemplateMissing { .. } => 5,
            QtshipError::ManifestParseFailed { .. } => 6,
            QtshipError::IconNotFound { .. } => 7,
            QtshipError::ManifestWriteFailed { .. } => 8,
            QtshipError::IconCopyFailed { .. } => 9,
            QtshipError::DeployToolMissing { .. } => 10,
            QtshipError::ToolFailed { code, .. } => *code,
            QtshipError::SpawnFailed { .. } | QtshipError::IoError { .. } => 1,
        }
    }
}

impl From<std::io::Error> for QtshipError {
    fn from(err: std::io::Error) -> Self {
        QtshipError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, QtshipError>;
