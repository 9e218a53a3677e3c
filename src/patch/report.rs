//! Patch run counters.

use serde::Serialize;

/// Counters describing what one patch run changed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatchReport {
    /// Folders whose Common configuration received the include fragments.
    pub folders_patched: usize,

    /// Folders redirected to the conflict intermediate directory.
    pub folders_redirected: usize,

    /// Length of the cleaned project-wide include string.
    pub common_include_len: usize,
}
