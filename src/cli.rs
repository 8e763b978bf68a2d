//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// qtship - build and bundle helper for Qt desktop applications
#[derive(Parser, Debug)]
#[command(
    name = "qtship",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Configure, build and bundle Qt desktop applications on macOS",
    long_about = "qtship drives the release pipeline of a Qt desktop application: \
                  a cmake configure-and-build step, and a macOS bundling step that \
                  edits Info.plist, installs the app icon and runs macdeployqt.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  qtship build --build-type Release -j 8\n    \
                  qtship build --qt-prefix ~/Qt -- -DENABLE_ASAN=ON\n    \
                  qtship bundle --short-version 1.2 --build-version 42\n    \
                  qtship bundle --icon assets/DrawingBoard.icns -- -dmg -verbose=2"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure and build with cmake
    Build(BuildArgs),

    /// Post-process and bundle the built .app
    Bundle(BundleArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Default debug build:\n    qtship build\n\n\
                  Release build with 8 jobs:\n    qtship build --build-type Release -j 8\n\n\
                  Custom Qt location:\n    qtship build --qt-prefix /opt/Qt --qt-version-subdir 6.6.1/macos\n\n\
                  Forward extra cmake options:\n    qtship build -- -DENABLE_TESTS=OFF")]
pub struct BuildArgs {
    /// Build directory
    #[arg(long, default_value = "build")]
    pub build_dir: PathBuf,

    /// Qt install prefix (defaults to ~/Qt)
    #[arg(long, env = "QT_INSTALL_PREFIX")]
    pub qt_prefix: Option<PathBuf>,

    /// Qt6 CMake dir, passed as -DQt6_DIR (derived from the prefix if omitted)
    #[arg(long, env = "Qt6_DIR")]
    pub qt_cmake_dir: Option<PathBuf>,

    /// Qt version subdir under the prefix (e.g. "6.5.3/macos")
    #[arg(long, default_value = "6.5.3/macos")]
    pub qt_version_subdir: String,

    /// CMake generator
    #[arg(long, default_value = "Unix Makefiles")]
    pub generator: String,

    /// CMAKE_BUILD_TYPE (Debug/Release)
    #[arg(long = "build-type", default_value = "Debug")]
    pub build_type: String,

    /// Parallel build jobs
    #[arg(long, short = 'j', default_value_t = default_jobs())]
    pub jobs: usize,

    /// cmake executable
    #[arg(long, default_value = "cmake")]
    pub cmake: PathBuf,

    /// Path to the cmake toolchain file
    #[arg(long, default_value = "cmake/qt_toolchain.cmake")]
    pub toolchain: PathBuf,

    /// Extra arguments forwarded to the cmake configure step (after --)
    #[arg(last = true, value_name = "EXTRA")]
    pub extra: Vec<String>,
}

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Bundle the first .app found under build/:\n    qtship bundle\n\n\
                  Stamp versions into Info.plist:\n    qtship bundle --short-version 1.2 --build-version 42\n\n\
                  Explicit bundle and icon:\n    qtship bundle --app-bundle build/DrawingBoard.app --icon assets/DrawingBoard.icns\n\n\
                  Forward macdeployqt options:\n    qtship bundle -- -dmg -verbose=2\n\n\
                  Skip the dmg relocation step:\n    qtship bundle --no-dmg")]
pub struct BundleArgs {
    /// Build directory searched for the .app
    #[arg(long, default_value = "build")]
    pub build_dir: PathBuf,

    /// Path to the .app bundle (skips searching the build directory)
    #[arg(long)]
    pub app_bundle: Option<PathBuf>,

    /// Info.plist template to edit and install into the bundle
    #[arg(long = "info", default_value = "Info.plist")]
    pub info_plist: PathBuf,

    /// Value for CFBundleShortVersionString
    #[arg(long)]
    pub short_version: Option<String>,

    /// Value for CFBundleVersion
    #[arg(long)]
    pub build_version: Option<String>,

    /// Path to the .icns icon to copy into Contents/Resources
    #[arg(long)]
    pub icon: Option<PathBuf>,

    /// Qt install prefix (defaults to ~/Qt)
    #[arg(long, env = "QT_INSTALL_PREFIX")]
    pub qt_prefix: Option<PathBuf>,

    /// Qt version subdir used to locate macdeployqt (e.g. "6.5.3/macos")
    #[arg(long, default_value = "6.5.3/macos")]
    pub qt_version_subdir: String,

    /// Full path to macdeployqt (overrides --qt-prefix / --qt-version-subdir)
    #[arg(long)]
    pub macdeployqt: Option<PathBuf>,

    /// Directory the produced disk images are moved into
    #[arg(long, default_value = "dist")]
    pub out_dir: PathBuf,

    /// Skip searching for and relocating disk images after macdeployqt
    #[arg(long)]
    pub no_dmg: bool,

    /// Extra arguments forwarded to macdeployqt (after --; defaults to -dmg)
    #[arg(last = true, value_name = "EXTRA")]
    pub extra: Vec<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    qtship completions --shell bash > ~/.bash_completion.d/qtship\n\n\
                  Generate zsh completions:\n    qtship completions --shell zsh > ~/.zfunc/_qtship\n\n\
                  Generate fish completions:\n    qtship completions --shell fish > ~/.config/fish/completions/qtship.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}
