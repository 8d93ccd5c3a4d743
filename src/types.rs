use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File tally for one recognized language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub name: String,
    pub files: usize,
}

/// Presence of build-system marker files at the scan root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildMarkers {
    pub cmake: bool,
    pub package_json: bool,
    pub pyproject: bool,
    pub requirements: bool,
    pub makefile: bool,
}

impl BuildMarkers {
    pub fn any(&self) -> bool {
        self.cmake || self.package_json || self.pyproject || self.requirements || self.makefile
    }
}

/// The complete result of one repository scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Canonicalized path of the scanned root.
    pub root_path: PathBuf,
    /// Number of files counted; never exceeds the configured file cap.
    pub file_count: usize,
    /// Number of directories visited under the root.
    pub dir_count: usize,
    /// Per-language tallies, ordered by descending count. Ties keep the
    /// order in which the languages were first seen.
    pub languages: Vec<LanguageCount>,
    /// Recognized folder names among the root's direct children, sorted.
    pub key_folders: Vec<String>,
    /// Marker files found at the root.
    pub markers: BuildMarkers,
    /// The first files encountered during the walk (up to 30), as
    /// root-relative paths.
    pub top_files: Vec<PathBuf>,
}

impl ScanResult {
    /// Display name of the scanned root.
    pub fn root_name(&self) -> String {
        self.root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.root_path.display().to_string())
    }
}
