//! Gitignore-style ignore rules.
//!
//! Rules are loaded from `<root>/.gitignore` and `<root>/.git/info/exclude`
//! (both optional) and evaluated against root-relative paths with
//! last-match-wins semantics, including `!` negations, `**` globs, and
//! directory-only patterns (trailing `/`). This is a pragmatic subset of
//! git's own ignore resolution: no nested ignore files, no global excludes.

use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
struct Pattern {
    negated: bool,
    dir_only: bool,
    // Matches the named path itself.
    matcher: GlobMatcher,
    // Matches everything strictly below the named path.
    descendants: GlobMatcher,
}

impl Pattern {
    fn compile(line: &str) -> Option<Self> {
        let mut glob = line;
        let negated = glob.starts_with('!');
        if negated {
            glob = &glob[1..];
        }
        let dir_only = glob.ends_with('/');
        if dir_only {
            glob = &glob[..glob.len() - 1];
        }
        // A slash anywhere else anchors the pattern to the root.
        let anchored = glob.contains('/');
        let glob = glob.strip_prefix('/').unwrap_or(glob);
        if glob.is_empty() {
            return None;
        }
        let glob = if anchored {
            glob.to_string()
        } else {
            format!("**/{glob}")
        };
        let matcher = compile_glob(&glob)?;
        let descendants = compile_glob(&format!("{glob}/**"))?;
        Some(Self {
            negated,
            dir_only,
            matcher,
            descendants,
        })
    }

    fn hits(&self, relative: &Path, is_dir: bool) -> bool {
        if (is_dir || !self.dir_only) && self.matcher.is_match(relative) {
            return true;
        }
        self.descendants.is_match(relative)
    }
}

fn compile_glob(glob: &str) -> Option<GlobMatcher> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .ok()
        .map(|g| g.compile_matcher())
}

/// An ordered set of compiled ignore patterns for one scan root.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRules {
    patterns: Vec<Pattern>,
    negations: bool,
}

impl IgnoreRules {
    /// Loads ignore rules for `root` from `.gitignore` and
    /// `.git/info/exclude`, in that order. Missing files contribute nothing.
    /// The `.git` directory itself is always ignored.
    pub fn load(root: &Path) -> Self {
        let mut lines = Vec::new();
        read_lines(&root.join(".gitignore"), &mut lines);
        read_lines(&root.join(".git").join("info").join("exclude"), &mut lines);
        lines.push(".git/".to_string());
        Self::from_lines(lines.iter().map(String::as_str))
    }

    /// Compiles a pattern set from raw ignore-file lines. Blank lines,
    /// comments, and malformed globs are dropped.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let mut patterns = Vec::new();
        for line in lines {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(pattern) = Pattern::compile(line) {
                patterns.push(pattern);
            }
        }
        let negations = patterns.iter().any(|p| p.negated);
        Self {
            patterns,
            negations,
        }
    }

    /// Evaluates every pattern in order against a root-relative path; the
    /// last matching pattern decides the verdict.
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        let mut ignored = false;
        for pattern in &self.patterns {
            if pattern.hits(relative, is_dir) {
                ignored = !pattern.negated;
            }
        }
        ignored
    }

    /// True when the set contains `!` patterns. A matched directory may only
    /// be pruned outright when this is false, otherwise a later negation
    /// could never re-include one of its descendants.
    pub fn has_negations(&self) -> bool {
        self.negations
    }
}

fn read_lines(path: &Path, out: &mut Vec<String>) {
    let Ok(text) = fs::read_to_string(path) else {
        return;
    };
    out.extend(text.lines().map(|l| l.to_string()));
}
