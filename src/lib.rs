//! emproject-patch - Include-path fixup for generated Embedded Studio projects
//!
//! This crate post-processes SEGGER Embedded Studio project files emitted
//! by an embedded mesh SDK's project generator. FreeRTOS and the mesh
//! stack ship colliding header and source file names, so the project-wide
//! include path is split into per-folder include paths (ordered so each
//! folder's own tree wins) and FreeRTOS folders are redirected to a
//! separate intermediate object directory.

pub mod config;
pub mod paths;
pub mod patch;
pub mod pipeline;

pub use config::GeneratorConfig;
pub use patch::{IncludePatcher, PatchError, PatchReport, PathMatcher};
pub use pipeline::{run, PatchOptions, PatchOutcome, PipelineError};
