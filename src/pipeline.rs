//! Pipeline orchestration for emproject-patch.
//!
//! Ties the plumbing together: load the generator config, locate the
//! generated `.emProject` file, parse it, run the include-path patch,
//! and write the result back. The write is atomic (temp file plus
//! rename) so a failed run never leaves a half-written project behind.

use std::fs;
use std::io;
use std::path::PathBuf;

use emproject_tree::{parse_document, write_document, TreeError};

use crate::config::{ConfigError, GeneratorConfig};
use crate::patch::{IncludePatcher, PatchError, PatchReport};

/// Pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("project file error: {0}")]
    Tree(#[from] TreeError),

    #[error("patch error: {0}")]
    Patch(#[from] PatchError),
}

impl PipelineError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PipelineError::Config(_) => 1,
            PipelineError::Io(_) => 1,
            PipelineError::Tree(_) => 30,
            PipelineError::Patch(_) => 10,
        }
    }
}

/// Options controlling a patch run.
#[derive(Debug, Clone)]
pub struct PatchOptions {
    /// Path to the generator's JSON configuration file.
    pub config_path: PathBuf,

    /// Directory containing the generated `.emProject` file.
    pub out_dir: PathBuf,

    /// Parse and patch without writing the file back.
    pub dry_run: bool,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct PatchOutcome {
    /// The project file that was patched (or validated under dry-run).
    pub emproject_path: PathBuf,

    /// Counters from the patch itself.
    pub report: PatchReport,
}

/// Run the full patch pipeline.
pub fn run(options: &PatchOptions) -> Result<PatchOutcome, PipelineError> {
    let config = GeneratorConfig::from_file(&options.config_path)?;
    let emproject_path = config.emproject_path(&options.out_dir);

    let contents = fs::read_to_string(&emproject_path)?;
    let mut root = parse_document(&contents)?;

    let report = IncludePatcher::new().apply(&mut root)?;

    if !options.dry_run {
        let output = write_document(&root)?;
        let temp_path = emproject_path.with_extension("tmp");
        fs::write(&temp_path, &output)?;
        fs::rename(&temp_path, &emproject_path)?;
    }

    Ok(PatchOutcome {
        emproject_path,
        report,
    })
}
