//! emproject-patch CLI
//!
//! Entry point for the `emproject-patch` command-line tool.

use clap::Parser;
use emproject_patch::pipeline::{self, PatchOptions};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "emproject-patch")]
#[command(
    about = "Fix per-folder include paths in a generated SEGGER Embedded Studio project",
    version
)]
struct Cli {
    /// Path to the generator's JSON configuration file
    config: PathBuf,

    /// Directory containing the generated .emProject file
    out_dir: PathBuf,

    /// Parse and patch without writing the file back
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let cli = Cli::parse();
    let options = PatchOptions {
        config_path: cli.config,
        out_dir: cli.out_dir,
        dry_run: cli.dry_run,
    };

    match pipeline::run(&options) {
        Ok(outcome) => {
            if options.dry_run {
                println!("Valid: {}", outcome.emproject_path.display());
                println!("  Folders patched: {}", outcome.report.folders_patched);
                println!("  Folders redirected: {}", outcome.report.folders_redirected);
            } else {
                println!("Patched: {}", outcome.emproject_path.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
