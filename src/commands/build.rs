//! Build command implementation
//!
//! Two external steps in sequence: a cmake configure with the Qt toolchain
//! wiring, then a parallel build. A failing step terminates the command with
//! the child's exit code; the build step never runs after a failed configure.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use crate::cli::BuildArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::process;
use crate::ui;

/// Run the configure-and-build pipeline
pub fn run(args: BuildArgs) -> Result<()> {
    let qt_prefix = helpers::resolve_qt_prefix(args.qt_prefix);
    let qt_cmake_dir = args
        .qt_cmake_dir
        .unwrap_or_else(|| derive_qt_cmake_dir(&qt_prefix, &args.qt_version_subdir));

    fs::create_dir_all(&args.build_dir)?;

    ui::section("Configuring");
    let mut configure = Command::new(&args.cmake);
    configure
        .arg("-S")
        .arg(".")
        .arg("-B")
        .arg(&args.build_dir)
        .arg("-G")
        .arg(&args.generator)
        .arg(format!("-DCMAKE_TOOLCHAIN_FILE={}", args.toolchain.display()))
        .arg(format!("-DQT_INSTALL_PREFIX={}", qt_prefix.display()))
        .arg(format!("-DQt6_DIR={}", qt_cmake_dir.display()))
        .arg(format!("-DCMAKE_BUILD_TYPE={}", args.build_type))
        .args(&args.extra);
    process::run(&mut configure, "cmake configure")?;

    ui::section("Building");
    // Makefile generators get a direct `make -C`; anything else goes through
    // the generic cmake build driver.
    let use_make = args.generator.to_lowercase().contains("make")
        || args.build_dir.join("Makefile").exists();
    let mut build = if use_make {
        let mut cmd = Command::new("make");
        cmd.arg("-C")
            .arg(&args.build_dir)
            .arg(format!("-j{}", args.jobs));
        cmd
    } else {
        let mut cmd = Command::new(&args.cmake);
        cmd.arg("--build")
            .arg(&args.build_dir)
            .arg("--")
            .arg(format!("-j{}", args.jobs));
        cmd
    };
    process::run(&mut build, "build")?;

    println!("Build finished successfully.");
    Ok(())
}

fn derive_qt_cmake_dir(qt_prefix: &std::path::Path, qt_version_subdir: &str) -> PathBuf {
    qt_prefix
        .join(qt_version_subdir)
        .join("lib")
        .join("cmake")
        .join("Qt6")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_derive_qt_cmake_dir() {
        let derived = derive_qt_cmake_dir(Path::new("/opt/Qt"), "6.5.3/macos");
        assert_eq!(derived, PathBuf::from("/opt/Qt/6.5.3/macos/lib/cmake/Qt6"));
    }
}
