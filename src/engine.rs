use crate::error::DraftmeError;
use crate::gitignore::IgnoreRules;
use crate::options::ScanOptions;
use crate::rules::ScanRules;
use crate::types::{BuildMarkers, LanguageCount, ScanResult};
use ignore::WalkBuilder;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
#[cfg(feature = "logging")]
use tracing;

/// Number of files sampled into [`ScanResult::top_files`].
pub const TOP_FILES_LIMIT: usize = 30;

/// Scans a directory tree with the built-in tables.
pub fn scan(options: ScanOptions) -> Result<ScanResult, DraftmeError> {
    scan_with_rules(options, ScanRules::default())
}

/// Scans a directory tree with caller-supplied tables.
///
/// Fails only when `options.root` is missing or not a directory. Hitting the
/// file cap is a normal outcome: the walk stops early and the partial counts
/// are returned as-is (`file_count == max_files` signals truncation).
pub fn scan_with_rules(
    options: ScanOptions,
    rules: ScanRules,
) -> Result<ScanResult, DraftmeError> {
    let root = fs::canonicalize(&options.root)
        .map_err(|_| DraftmeError::InvalidRoot(options.root.clone()))?;
    if !root.is_dir() {
        return Err(DraftmeError::InvalidRoot(options.root.clone()));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("scanning {}", root.display());

    let max_files = options.max_files.max(1);
    let max_depth = options.max_depth.max(1);
    let ignore_rules = options.respect_gitignore.then(|| IgnoreRules::load(&root));
    let rules = Arc::new(rules);

    let mut file_count = 0usize;
    let mut dir_count = 0usize;
    let mut top_files: Vec<PathBuf> = Vec::new();
    let mut tallies: Vec<(String, usize)> = Vec::new();
    let mut key_folders = BTreeSet::new();

    for entry in build_walker(&root, max_depth, &options, &rules, ignore_rules.as_ref()) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_err) => {
                #[cfg(feature = "logging")]
                tracing::debug!("skipping unreadable entry: {_err}");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        if let Some(ignore_rules) = &ignore_rules {
            if ignore_rules.is_ignored(relative, file_type.is_dir()) {
                continue;
            }
        }
        if file_type.is_dir() {
            dir_count += 1;
            if entry.depth() == 1 {
                if let Some(name) = entry.file_name().to_str() {
                    if rules.is_key_folder(name) {
                        key_folders.insert(name.to_string());
                    }
                }
            }
        } else if file_type.is_file() {
            file_count += 1;
            if top_files.len() < TOP_FILES_LIMIT {
                top_files.push(relative.to_path_buf());
            }
            if let Some(language) = relative
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(|ext| rules.language_for(ext))
            {
                bump(&mut tallies, language);
            }
            if file_count >= max_files {
                #[cfg(feature = "logging")]
                tracing::debug!("file cap of {max_files} reached, stopping walk");
                break;
            }
        }
    }

    // Stable sort: equal counts keep first-seen order.
    tallies.sort_by(|a, b| b.1.cmp(&a.1));

    Ok(ScanResult {
        markers: detect_markers(&root),
        root_path: root,
        file_count,
        dir_count,
        languages: tallies
            .into_iter()
            .map(|(name, files)| LanguageCount { name, files })
            .collect(),
        key_folders: key_folders.into_iter().collect(),
        top_files,
    })
}

fn build_walker(
    root: &Path,
    max_depth: usize,
    options: &ScanOptions,
    rules: &Arc<ScanRules>,
    ignore_rules: Option<&IgnoreRules>,
) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(!options.include_hidden)
        .max_depth(Some(max_depth))
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    let filter_root = root.to_path_buf();
    let filter_rules = Arc::clone(rules);
    // Pruning an ignored directory is only safe when no negation pattern
    // could re-include something beneath it.
    let prune = ignore_rules.filter(|r| !r.has_negations()).cloned();
    builder.filter_entry(move |entry| {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
        if let Some(name) = entry.file_name().to_str() {
            let denied = if is_dir {
                filter_rules.ignored_dirs.contains(name)
            } else {
                filter_rules.ignored_files.contains(name)
            };
            if denied {
                return false;
            }
        }
        if is_dir {
            if let (Some(rules), Ok(relative)) = (&prune, entry.path().strip_prefix(&filter_root))
            {
                if rules.is_ignored(relative, true) {
                    return false;
                }
            }
        }
        true
    });
    builder.build()
}

fn bump(tallies: &mut Vec<(String, usize)>, language: &str) {
    match tallies.iter_mut().find(|(name, _)| name == language) {
        Some((_, count)) => *count += 1,
        None => tallies.push((language.to_string(), 1)),
    }
}

fn detect_markers(root: &Path) -> BuildMarkers {
    BuildMarkers {
        cmake: root.join("CMakeLists.txt").exists(),
        package_json: root.join("package.json").exists(),
        pyproject: root.join("pyproject.toml").exists(),
        requirements: root.join("requirements.txt").exists(),
        makefile: root.join("Makefile").exists(),
    }
}
