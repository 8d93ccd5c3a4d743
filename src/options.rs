use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub include_hidden: bool,
    pub max_files: usize,
    pub max_depth: usize,
    pub respect_gitignore: bool,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_hidden: false,
            max_files: 5000,
            max_depth: 6,
            respect_gitignore: true,
        }
    }
}
#[derive(Debug, Default)]
pub struct ScanOptionsBuilder {
    options: ScanOptions,
}
impl ScanOptionsBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn max_files(mut self, limit: usize) -> Self {
        self.options.max_files = limit;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn build(self) -> ScanOptions {
        self.options
    }
}
