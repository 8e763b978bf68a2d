//! Common test utilities for qtship integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Plist template without a CFBundleIconFile entry
pub const PLIST_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>DrawingBoard</string>
    <key>CFBundleIdentifier</key>
    <string>com.example.drawingboard</string>
    <key>CFBundleExecutable</key>
    <string>DrawingBoard</string>
    <key>CFBundleShortVersionString</key>
    <string>1.0</string>
    <key>CFBundleVersion</key>
    <string>1</string>
</dict>
</plist>
"#;

/// Plist template with CFBundleIconFile set to "DrawingBoard"
pub const PLIST_TEMPLATE_WITH_ICON: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleName</key>
    <string>DrawingBoard</string>
    <key>CFBundleIconFile</key>
    <string>DrawingBoard</string>
    <key>CFBundleShortVersionString</key>
    <string>1.0</string>
    <key>CFBundleVersion</key>
    <string>1</string>
</dict>
</plist>
"#;

/// A temporary project directory the qtship binary is run inside
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Command for the real qtship binary, running inside the project
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn qtship(&self) -> Command {
        let mut cmd = Command::cargo_bin("qtship").expect("qtship binary");
        cmd.current_dir(&self.path);
        cmd
    }

    /// Write a text file in the project
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a binary file in the project
    pub fn write_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a fake .app bundle under build/
    pub fn create_app_bundle(&self, name: &str) -> PathBuf {
        let app = self.path.join("build").join(format!("{}.app", name));
        fs::create_dir_all(app.join("Contents/MacOS")).expect("Failed to create app bundle");
        app
    }

    /// Create a stub executable that records its argv and exits with `exit_code`.
    ///
    /// The argv log lands at `<name>.log` in the project root, one line per
    /// invocation.
    pub fn stub_tool(&self, name: &str, exit_code: i32) -> PathBuf {
        let bin_dir = self.path.join("stubs");
        fs::create_dir_all(&bin_dir).expect("Failed to create stubs directory");

        let log = self.path.join(format!("{}.log", name));
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\nexit {}\n",
            log.display(),
            exit_code
        );

        let path = bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write stub");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark stub executable");
        }
        path
    }

    /// Directory holding the stub executables (for PATH overrides)
    pub fn stub_dir(&self) -> PathBuf {
        self.path.join("stubs")
    }

    /// Recorded argv lines of a stub tool, or empty if it never ran
    pub fn tool_log(&self, name: &str) -> String {
        fs::read_to_string(self.path.join(format!("{}.log", name))).unwrap_or_default()
    }
}
