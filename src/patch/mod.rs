//! Include-path redistribution for generated Embedded Studio projects.
//!
//! FreeRTOS's `source/include` and the mesh stack's `core/include` both
//! ship headers with colliding names, and the two source trees also share
//! C file names. The generator can only express a project-wide include
//! path, so this module rewrites the generated descriptor:
//!
//! - removes both include fragments from the project-wide Common
//!   configuration,
//! - gives every folder its own copy of both fragments, ordered so that
//!   the tree the folder's files belong to wins the header search,
//! - redirects folders holding FreeRTOS files to a `conflict`
//!   subdirectory of the shared intermediate build directory so their
//!   object files cannot clobber same-named mesh objects.

mod matcher;
mod report;

pub use matcher::{
    PathMatcher, FREERTOS_ROOT_PATTERN, FREERTOS_SOURCE_INCLUDE_PATTERN,
    MESH_CORE_INCLUDE_PATTERN,
};
pub use report::PatchReport;

use emproject_tree::Element;

use crate::paths::unix_join;

const INCLUDES_ATTR: &str = "c_user_include_directories";
const OBJ_DIR_ATTR: &str = "build_intermediate_directory";

/// Errors from patching a descriptor tree.
///
/// All of these mean the input does not have the supported baseline
/// shape; there is no recovery and nothing has been mutated when one is
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("project descriptor is missing {path}")]
    MissingNode { path: &'static str },

    #[error("{node} is missing required attribute {attr}")]
    MissingAttribute {
        node: &'static str,
        attr: &'static str,
    },

    #[error("include pattern not found in common configuration: {pattern}")]
    IncludeNotFound { pattern: &'static str },
}

/// The core transform: strips the two known include fragments from the
/// Common configuration and redistributes them across folder
/// configurations.
pub struct IncludePatcher {
    matcher: PathMatcher,
}

impl IncludePatcher {
    pub fn new() -> Self {
        Self {
            matcher: PathMatcher::new(),
        }
    }

    /// Patch the descriptor tree in place.
    ///
    /// Every required anchor (Common configuration, Debug configuration,
    /// their attributes, both include fragments) is resolved before the
    /// first mutation, so a failed call leaves the tree untouched.
    pub fn apply(&self, root: &mut Element) -> Result<PatchReport, PatchError> {
        let common_includes = common_configuration(root)?
            .attr(INCLUDES_ATTR)
            .ok_or(PatchError::MissingAttribute {
                node: "project/configuration[Name=\"Common\"]",
                attr: INCLUDES_ATTR,
            })?
            .to_string();

        // The Debug value is assumed shared by all build configurations.
        let obj_directory_base = debug_configuration(root)?
            .attr(OBJ_DIR_ATTR)
            .ok_or(PatchError::MissingAttribute {
                node: "configuration[Name=\"Debug\"]",
                attr: OBJ_DIR_ATTR,
            })?
            .to_string();

        let freertos_fragment = self
            .matcher
            .freertos_source_include(&common_includes)
            .ok_or(PatchError::IncludeNotFound {
                pattern: FREERTOS_SOURCE_INCLUDE_PATTERN,
            })?
            .to_string();
        let mesh_fragment = self
            .matcher
            .mesh_core_include(&common_includes)
            .ok_or(PatchError::IncludeNotFound {
                pattern: MESH_CORE_INCLUDE_PATTERN,
            })?
            .to_string();

        let cleaned = self.matcher.strip_known_includes(&common_includes);
        let conflict_dir = unix_join(&obj_directory_base, "conflict");

        // Extraction is complete; mutation starts here.
        let project = root
            .find_child_mut("project")
            .ok_or(PatchError::MissingNode { path: "project" })?;
        project
            .find_child_where_mut("configuration", "Name", "Common")
            .ok_or(PatchError::MissingNode {
                path: "project/configuration[Name=\"Common\"]",
            })?
            .set_attr(INCLUDES_ATTR, cleaned.as_str());

        let mut report = PatchReport {
            common_include_len: cleaned.len(),
            ..PatchReport::default()
        };

        for folder in project.children_named_mut("folder") {
            let is_freertos = folder
                .children_named("file")
                .filter_map(|file| file.attr("file_name"))
                .any(|name| self.matcher.is_freertos_file(name));

            let cfg = folder.find_or_create_child_where("configuration", "Name", "Common");
            let existing = match cfg.attr(INCLUDES_ATTR) {
                None => {
                    cfg.set_attr(INCLUDES_ATTR, "");
                    String::new()
                }
                // A pre-existing value of exactly ";" gets no extra
                // separator; any other non-empty value gains one.
                Some(value) if !value.is_empty() && value != ";" => format!("{};", value),
                Some(value) => value.to_string(),
            };

            if is_freertos {
                cfg.set_attr(
                    INCLUDES_ATTR,
                    format!("{}{}{}", existing, freertos_fragment, mesh_fragment),
                );
                cfg.set_attr(OBJ_DIR_ATTR, conflict_dir.as_str());
                report.folders_redirected += 1;
            } else {
                cfg.set_attr(
                    INCLUDES_ATTR,
                    format!("{}{}{}", existing, mesh_fragment, freertos_fragment),
                );
            }
            report.folders_patched += 1;
        }

        Ok(report)
    }
}

impl Default for IncludePatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn common_configuration(root: &Element) -> Result<&Element, PatchError> {
    root.find_child("project")
        .ok_or(PatchError::MissingNode { path: "project" })?
        .find_child_where("configuration", "Name", "Common")
        .ok_or(PatchError::MissingNode {
            path: "project/configuration[Name=\"Common\"]",
        })
}

fn debug_configuration(root: &Element) -> Result<&Element, PatchError> {
    root.find_child_where("configuration", "Name", "Debug")
        .ok_or(PatchError::MissingNode {
            path: "configuration[Name=\"Debug\"]",
        })
}
