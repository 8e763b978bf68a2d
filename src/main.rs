//! qtship - build and bundle helper for Qt desktop applications
//!
//! Two pipeline steps behind one CLI: `build` configures and compiles the
//! project with cmake, `bundle` post-processes the resulting macOS .app
//! (Info.plist, icon, macdeployqt, disk-image relocation). All heavy lifting
//! is delegated to the external tools; qtship sequences them and fails fast
//! with a distinct exit code per failure condition.

use clap::Parser;

mod app_bundle;
mod artifacts;
mod cli;
mod commands;
mod deploy;
mod error;
mod manifest;
mod process;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Bundle(args) => commands::bundle::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
