use crate::types::ScanResult;
use serde::{Deserialize, Serialize};

/// File count at which the scan is large enough to warn about truncation.
const LARGE_REPO_FILES: usize = 5000;

const CMAKE_RUN: &[&str] = &[
    "```bash",
    "cmake -S . -B build",
    "cmake --build build -j",
    "./build/<your_binary>",
    "```",
];
const MAKE_RUN: &[&str] = &["```bash", "make", "```"];
const NPM_RUN: &[&str] = &[
    "```bash",
    "npm install",
    "npm run dev  # or npm start / npm test",
    "```",
];
const PYPROJECT_RUN: &[&str] = &[
    "```bash",
    "python -m venv .venv",
    "source .venv/bin/activate  # Windows: .venv\\Scripts\\activate",
    "pip install -e .",
    "```",
];
const REQUIREMENTS_RUN: &[&str] = &[
    "```bash",
    "python -m venv .venv",
    "source .venv/bin/activate  # Windows: .venv\\Scripts\\activate",
    "pip install -r requirements.txt",
    "```",
];
const NO_MARKER_RUN: &[&str] = &[
    "- Add a `How to Run` section describing build/install commands.",
    "- If this is a library, include a minimal usage example.",
];

/// Derived build/run guidance for a scanned repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    pub tech_stack: Vec<String>,
    pub how_to_run: Vec<String>,
    pub notes: Vec<String>,
}

/// Derives suggestions from a scan result. Pure: no I/O, the input is left
/// untouched.
pub fn infer_suggestions(scan: &ScanResult) -> Suggestions {
    let mut tech_stack = Vec::new();
    let mut how_to_run = Vec::new();
    let mut notes = Vec::new();

    for language in &scan.languages {
        tech_stack.push(format!("{} ({} files)", language.name, language.files));
    }

    let markers = &scan.markers;
    if markers.cmake {
        tech_stack.push("CMake".to_string());
        push_block(&mut how_to_run, CMAKE_RUN);
    }
    if markers.makefile {
        tech_stack.push("Make".to_string());
        push_block(&mut how_to_run, MAKE_RUN);
    }
    if markers.package_json {
        tech_stack.push("Node.js / npm".to_string());
        push_block(&mut how_to_run, NPM_RUN);
    }
    if markers.pyproject || markers.requirements {
        tech_stack.push("Python".to_string());
        // pyproject.toml takes precedence when both are present.
        if markers.pyproject {
            push_block(&mut how_to_run, PYPROJECT_RUN);
        } else {
            push_block(&mut how_to_run, REQUIREMENTS_RUN);
        }
    }

    if how_to_run.is_empty() {
        push_block(&mut how_to_run, NO_MARKER_RUN);
    }

    if scan.file_count >= LARGE_REPO_FILES {
        notes.push(
            "Large repo detected: consider raising `--max-files` or `--depth` for a deeper scan."
                .to_string(),
        );
    }

    Suggestions {
        tech_stack,
        how_to_run,
        notes,
    }
}

fn push_block(lines: &mut Vec<String>, block: &[&str]) {
    lines.extend(block.iter().map(|line| (*line).to_string()));
}
