//! Info.plist template loading and editing
//!
//! The template is read into a [`plist::Dictionary`] and written back out as
//! XML, so keys the pipeline never touches survive the round trip verbatim.
//! Only three keys are ever consulted or set: the two version fields and the
//! icon file name.

use std::path::Path;

use plist::{Dictionary, Value};

use crate::error::{QtshipError, Result};

const KEY_BUILD_VERSION: &str = "CFBundleVersion";
const KEY_SHORT_VERSION: &str = "CFBundleShortVersionString";
const KEY_ICON_FILE: &str = "CFBundleIconFile";

/// Icon base name used when neither the template nor the command line names one.
pub const PLACEHOLDER_ICON_BASE: &str = "AppIcon";

/// An Info.plist document held in memory between load and write.
#[derive(Debug)]
pub struct Manifest {
    doc: Dictionary,
}

impl Manifest {
    /// Load a plist template. The root element must be a dictionary.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(QtshipError::ManifestTemplateMissing {
                path: path.display().to_string(),
            });
        }

        let value = Value::from_file(path).map_err(|e| QtshipError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let doc = value
            .into_dictionary()
            .ok_or_else(|| QtshipError::ManifestParseFailed {
                path: path.display().to_string(),
                reason: "root element is not a dictionary".to_string(),
            })?;

        Ok(Self { doc })
    }

    /// Set CFBundleVersion (stored as a plist string).
    pub fn set_build_version(&mut self, version: &str) {
        self.doc
            .insert(KEY_BUILD_VERSION.to_string(), Value::String(version.to_string()));
    }

    /// Set CFBundleShortVersionString (stored as a plist string).
    pub fn set_short_version(&mut self, version: &str) {
        self.doc
            .insert(KEY_SHORT_VERSION.to_string(), Value::String(version.to_string()));
    }

    /// Non-empty CFBundleIconFile value, if the template carries one.
    pub fn icon_file(&self) -> Option<&str> {
        self.doc
            .get(KEY_ICON_FILE)
            .and_then(Value::as_string)
            .filter(|name| !name.is_empty())
    }

    /// Serialize the document as XML, overwriting `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        Value::Dictionary(self.doc.clone())
            .to_file_xml(path)
            .map_err(|e| QtshipError::ManifestWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
    }
}
