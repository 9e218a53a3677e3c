//! Path patterns for the two colliding include trees.
//!
//! The generated project refers to the FreeRTOS tree through a build
//! variable (`$(StudioDir)` or similar) and to the mesh stack through a
//! run of `../` segments; both forms are fixed by the generator, so the
//! matcher is a closed set of three literal-shaped patterns rather than
//! anything configurable.

use regex_lite::Regex;

/// FreeRTOS include fragment inside an include-path string, trailing
/// semicolon included.
pub const FREERTOS_SOURCE_INCLUDE_PATTERN: &str = r"\$\([^)]*\)/external/freertos/source/include;";

/// Root of the FreeRTOS source tree, used to classify file paths.
pub const FREERTOS_ROOT_PATTERN: &str = r"\$\([^)]*\)/external/freertos";

/// Mesh stack core include fragment, trailing semicolon included.
pub const MESH_CORE_INCLUDE_PATTERN: &str = r"(\.\./)+mesh/core/include;";

/// Compiled patterns for include-fragment extraction and FreeRTOS file
/// membership tests. Read-only; compile once and reuse.
pub struct PathMatcher {
    freertos_source_include: Regex,
    freertos_root: Regex,
    mesh_core_include: Regex,
}

impl PathMatcher {
    pub fn new() -> Self {
        // Fixed literals, compilation cannot fail.
        Self {
            freertos_source_include: Regex::new(FREERTOS_SOURCE_INCLUDE_PATTERN).unwrap(),
            freertos_root: Regex::new(&format!("^{}", FREERTOS_ROOT_PATTERN)).unwrap(),
            mesh_core_include: Regex::new(MESH_CORE_INCLUDE_PATTERN).unwrap(),
        }
    }

    /// Leftmost FreeRTOS source-include fragment in `includes`, if any.
    pub fn freertos_source_include<'a>(&self, includes: &'a str) -> Option<&'a str> {
        self.freertos_source_include
            .find(includes)
            .map(|m| m.as_str())
    }

    /// Leftmost mesh core-include fragment in `includes`, if any.
    pub fn mesh_core_include<'a>(&self, includes: &'a str) -> Option<&'a str> {
        self.mesh_core_include.find(includes).map(|m| m.as_str())
    }

    /// Whether `file_name` points into the FreeRTOS source tree. The
    /// match is anchored at the start of the path.
    pub fn is_freertos_file(&self, file_name: &str) -> bool {
        self.freertos_root.is_match(file_name)
    }

    /// Remove every occurrence of both include fragments, leaving all
    /// other fragments and their order untouched.
    pub fn strip_known_includes(&self, includes: &str) -> String {
        let cleaned = self.freertos_source_include.replace_all(includes, "");
        self.mesh_core_include.replace_all(&cleaned, "").into_owned()
    }
}

impl Default for PathMatcher {
    fn default() -> Self {
        Self::new()
    }
}
