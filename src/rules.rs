//! Fixed tables driving the scan: built-in ignore lists, the
//! extension-to-language map, and the recognized key folder names.
//!
//! The tables are plain data held by a [`ScanRules`] value so tests can swap
//! them out; [`ScanRules::default`] loads the built-ins.

use std::collections::{HashMap, HashSet};

const IGNORED_DIRS: &[&str] = &[
    ".git",
    ".idea",
    ".vscode",
    "__pycache__",
    "node_modules",
    "dist",
    "build",
    ".pytest_cache",
    ".mypy_cache",
    ".venv",
    "venv",
    ".DS_Store",
];

const IGNORED_FILES: &[&str] = &[".DS_Store"];

const KEY_FOLDERS: &[&str] = &["src", "include", "tests", "test", "docs", "examples", "scripts"];

const LANGUAGES: &[(&str, &str)] = &[
    ("py", "Python"),
    ("js", "JavaScript"),
    ("ts", "TypeScript"),
    ("java", "Java"),
    ("cpp", "C++"),
    ("cc", "C++"),
    ("c", "C"),
    ("hpp", "C++"),
    ("h", "C/C++ Header"),
    ("cs", "C#"),
    ("go", "Go"),
    ("rs", "Rust"),
    ("kt", "Kotlin"),
    ("swift", "Swift"),
    ("rb", "Ruby"),
    ("php", "PHP"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sql", "SQL"),
    ("yml", "YAML"),
    ("yaml", "YAML"),
    ("json", "JSON"),
    ("md", "Markdown"),
    ("sh", "Shell"),
    ("bat", "Batch"),
    ("ps1", "PowerShell"),
];

#[derive(Debug, Clone)]
pub struct ScanRules {
    pub ignored_dirs: HashSet<String>,
    pub ignored_files: HashSet<String>,
    pub languages: HashMap<String, String>,
    pub key_folders: Vec<String>,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            ignored_dirs: IGNORED_DIRS.iter().map(|s| (*s).to_string()).collect(),
            ignored_files: IGNORED_FILES.iter().map(|s| (*s).to_string()).collect(),
            languages: LANGUAGES
                .iter()
                .map(|(ext, lang)| ((*ext).to_string(), (*lang).to_string()))
                .collect(),
            key_folders: KEY_FOLDERS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl ScanRules {
    /// Looks up the language for a file extension, case-insensitively.
    pub fn language_for(&self, extension: &str) -> Option<&str> {
        self.languages
            .get(&extension.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_key_folder(&self, name: &str) -> bool {
        self.key_folders.iter().any(|k| k == name)
    }
}
