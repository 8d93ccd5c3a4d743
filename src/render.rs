//! Markdown rendering for scan results.
//!
//! Turns a [`ScanResult`] and its [`Suggestions`] into a README.md draft,
//! including an optional lightweight directory tree block.

use crate::error::DraftmeError;
use crate::suggest::Suggestions;
use crate::types::ScanResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names never shown in the rendered tree.
const TREE_SKIP: &[&str] = &[".git", "node_modules", "build", "dist", ".venv", "venv"];

/// Cap on total entries in the rendered tree.
const MAX_TREE_ENTRIES: usize = 200;

/// Options for README rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub show_tree: bool,
    pub tree_depth: usize,
    pub include_hidden: bool,
    /// GitHub repository as `OWNER/REPO`, used for badge URLs.
    pub github_repo: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_tree: true,
            tree_depth: 3,
            include_hidden: false,
            github_repo: None,
        }
    }
}

/// Renders a README.md draft.
pub fn render_markdown(
    scan: &ScanResult,
    suggestions: &Suggestions,
    options: &RenderOptions,
) -> String {
    let name = scan.root_name();

    let languages = if scan.languages.is_empty() {
        "- (no recognized source files found)".to_string()
    } else {
        scan.languages
            .iter()
            .map(|l| format!("- {}: {} file(s)", l.name, l.files))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let key_folders = if scan.key_folders.is_empty() {
        "(none detected)".to_string()
    } else {
        scan.key_folders.join(", ")
    };

    let tech_stack = if suggestions.tech_stack.is_empty() {
        "- (unknown)".to_string()
    } else {
        suggestions
            .tech_stack
            .iter()
            .map(|t| format!("- {t}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let how_to_run = suggestions.how_to_run.join("\n");

    let notes = if suggestions.notes.is_empty() {
        "- (none)".to_string()
    } else {
        suggestions
            .notes
            .iter()
            .map(|n| format!("- {n}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let badges = render_badges(options.github_repo.as_deref());

    let tree_block = if options.show_tree {
        let tree = render_tree(
            &scan.root_path,
            options.tree_depth,
            options.include_hidden,
            MAX_TREE_ENTRIES,
        );
        format!("\n## Project Structure\n\n```text\n{tree}\n```\n")
    } else {
        String::new()
    };

    format!(
        "# {name}\n\n{badges}\n---\n\n\
        > Replace this block with a short introduction: what the project does\n\
        > and who it is for. Keep it concise; people appreciate brevity.\n\n\
        ## Repo Stats\n\n\
        - **Files scanned:** {files}\n\
        - **Directories scanned:** {dirs}\n\
        - **Key folders:** {key_folders}\n\n\
        ## Tech Stack\n\n{tech_stack}\n\n\
        ## Language Breakdown\n\n{languages}\n{tree_block}\n\
        ## How to Run\n\n{how_to_run}\n\n\
        ## Notes\n\n{notes}\n",
        files = human_int(scan.file_count),
        dirs = human_int(scan.dir_count),
    )
}

/// Writes rendered markdown to `path`.
pub fn write_markdown(path: impl AsRef<Path>, content: &str) -> Result<(), DraftmeError> {
    fs::write(&path, content).map_err(|e| DraftmeError::io(path.as_ref(), e))?;
    Ok(())
}

/// Renders a connector-drawn directory tree, similar to the `tree` command.
///
/// Hidden entries are skipped unless `include_hidden` is set, a few noisy
/// directory names are always skipped, and rendering stops after
/// `max_entries` lines.
pub fn render_tree(root: &Path, depth: usize, include_hidden: bool, max_entries: usize) -> String {
    let name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    let mut lines = vec![format!("{name}/")];
    let mut budget = max_entries;
    walk_tree(root, "", 1, depth, include_hidden, &mut budget, &mut lines);
    lines.join("\n")
}

fn walk_tree(
    dir: &Path,
    prefix: &str,
    level: usize,
    max_level: usize,
    include_hidden: bool,
    budget: &mut usize,
    lines: &mut Vec<String>,
) {
    if level > max_level || *budget == 0 {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut items: Vec<(bool, String, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            let is_dir = entry.file_type().ok()?.is_dir();
            Some((is_dir, name, entry.path()))
        })
        .filter(|(_, name, _)| {
            (include_hidden || !name.starts_with('.')) && !TREE_SKIP.contains(&name.as_str())
        })
        .collect();
    // Directories first, then case-insensitive by name.
    items.sort_by(|a, b| (!a.0, a.1.to_lowercase()).cmp(&(!b.0, b.1.to_lowercase())));

    let last = items.len().saturating_sub(1);
    for (i, (is_dir, name, path)) in items.into_iter().enumerate() {
        if *budget == 0 {
            return;
        }
        let connector = if i == last { "└── " } else { "├── " };
        let suffix = if is_dir { "/" } else { "" };
        lines.push(format!("{prefix}{connector}{name}{suffix}"));
        *budget -= 1;
        if is_dir {
            let extension = if i == last { "    " } else { "│   " };
            walk_tree(
                &path,
                &format!("{prefix}{extension}"),
                level + 1,
                max_level,
                include_hidden,
                budget,
                lines,
            );
        }
    }
}

fn render_badges(github_repo: Option<&str>) -> String {
    let repo = github_repo.unwrap_or("username/repo");
    format!(
        "![Repo Size](https://img.shields.io/github/repo-size/{repo}?style=for-the-badge&color=blue)\n\
        ![Languages](https://img.shields.io/github/languages/count/{repo}?style=for-the-badge&color=orange)\n\
        ![Forks](https://img.shields.io/github/forks/{repo}?style=for-the-badge&color=brightgreen)\n\
        ![Issues](https://img.shields.io/github/issues/{repo}?style=for-the-badge&color=red)\n"
    )
}

fn human_int(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
