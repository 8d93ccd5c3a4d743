use draftme::{
    DraftmeError, LanguageCount, RenderOptions, ScanOptions, ScanOptionsBuilder, ScanRules,
    TOP_FILES_LIMIT, infer_suggestions, render_markdown, scan, scan_with_rules,
};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn language_files(result: &draftme::ScanResult, name: &str) -> Option<usize> {
    result
        .languages
        .iter()
        .find(|l| l.name == name)
        .map(|l| l.files)
}

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.py"), "print('hi')").unwrap();
    fs::write(dir.path().join("src/b.js"), "console.log('hi')").unwrap();
    fs::write(dir.path().join(".gitignore"), "target/\n").unwrap();
    fs::create_dir(dir.path().join("target")).unwrap();
    fs::write(dir.path().join("target/out.txt"), "artifact").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();

    assert_eq!(result.file_count, 2);
    assert_eq!(result.dir_count, 1);
    assert_eq!(language_files(&result, "Python"), Some(1));
    assert_eq!(language_files(&result, "JavaScript"), Some(1));
    assert_eq!(result.key_folders, vec!["src".to_string()]);
    assert!(!result.top_files.iter().any(|p| p.ends_with("out.txt")));
}

#[test]
fn gitignored_dir_pattern_excludes_contents() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.py"), "").unwrap();
    // "build" is also on the built-in denylist; either rule must exclude it.
    fs::write(dir.path().join(".gitignore"), "build/\n").unwrap();
    fs::create_dir(dir.path().join("build")).unwrap();
    fs::write(dir.path().join("build/out.txt"), "").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.file_count, 1);
    assert_eq!(result.languages.len(), 1);
    assert_eq!(result.key_folders, vec!["src".to_string()]);
}

#[test]
fn negation_reincludes_file_under_ignored_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "out/\n!out/keep.txt\n").unwrap();
    fs::create_dir(dir.path().join("out")).unwrap();
    fs::write(dir.path().join("out/keep.txt"), "").unwrap();
    fs::write(dir.path().join("out/drop.txt"), "").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.file_count, 1);
    assert!(result.top_files.iter().any(|p| p.ends_with("keep.txt")));
    // The matched directory itself stays uncounted.
    assert_eq!(result.dir_count, 0);
}

#[test]
fn no_gitignore_mode_only_applies_builtin_ignores() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.txt\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let ignored = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(ignored.file_count, 0);

    let unfiltered = scan(
        ScanOptionsBuilder::new(dir.path())
            .respect_gitignore(false)
            .build(),
    )
    .unwrap();
    assert_eq!(unfiltered.file_count, 1);
}

#[test]
fn max_files_caps_and_terminates_cleanly() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "").unwrap();
    fs::write(dir.path().join("b.py"), "").unwrap();
    fs::write(dir.path().join("c.py"), "").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).max_files(2).build()).unwrap();
    assert_eq!(result.file_count, 2);
    // The file that hits the cap is still classified.
    assert_eq!(language_files(&result, "Python"), Some(2));
    assert_eq!(result.top_files.len(), 2);
}

#[test]
fn max_files_clamped_to_one() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.py"), "").unwrap();
    fs::write(dir.path().join("b.py"), "").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).max_files(0).build()).unwrap();
    assert_eq!(result.file_count, 1);
}

#[test]
fn max_depth_prunes_subtrees() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("a/b")).unwrap();
    fs::write(dir.path().join("top.py"), "").unwrap();
    fs::write(dir.path().join("a/mid.py"), "").unwrap();
    fs::write(dir.path().join("a/b/deep.py"), "").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).max_depth(1).build()).unwrap();
    assert_eq!(result.file_count, 1);
    assert_eq!(result.dir_count, 1);

    let result = scan(ScanOptionsBuilder::new(dir.path()).max_depth(2).build()).unwrap();
    assert_eq!(result.file_count, 2);
    assert_eq!(result.dir_count, 2);
}

#[test]
fn hidden_entries_excluded_by_default() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join(".secret")).unwrap();
    fs::write(dir.path().join(".secret/inner.py"), "").unwrap();
    fs::create_dir_all(dir.path().join("visible/.cache")).unwrap();
    fs::write(dir.path().join("visible/.cache/deep.py"), "").unwrap();
    fs::write(dir.path().join("visible/ok.py"), "").unwrap();
    fs::write(dir.path().join(".env"), "").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.file_count, 1);
    assert_eq!(result.dir_count, 1);

    let result = scan(
        ScanOptionsBuilder::new(dir.path())
            .include_hidden(true)
            .build(),
    )
    .unwrap();
    // .env, .secret/inner.py, visible/.cache/deep.py, visible/ok.py
    assert_eq!(result.file_count, 4);
    assert_eq!(result.dir_count, 3);
}

#[test]
fn builtin_denylist_applies_without_gitignore() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/pkg.js"), "").unwrap();
    fs::write(dir.path().join("app.js"), "").unwrap();
    fs::write(dir.path().join(".DS_Store"), "").unwrap();

    let result = scan(
        ScanOptionsBuilder::new(dir.path())
            .include_hidden(true)
            .respect_gitignore(false)
            .build(),
    )
    .unwrap();
    assert_eq!(result.file_count, 1);
    assert_eq!(result.dir_count, 0);
    assert_eq!(language_files(&result, "JavaScript"), Some(1));
}

#[test]
fn top_files_sample_is_bounded_and_ordered() {
    let dir = tempdir().unwrap();
    for i in 0..35 {
        fs::write(dir.path().join(format!("f{i:02}.txt")), "").unwrap();
    }

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(result.file_count, 35);
    assert_eq!(result.top_files.len(), TOP_FILES_LIMIT);
    // Lexicographic sibling order makes the sample deterministic.
    assert_eq!(result.top_files[0], Path::new("f00.txt"));
    assert_eq!(result.top_files[29], Path::new("f29.txt"));
}

#[test]
fn repeated_scans_are_identical() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/a.rs"), "").unwrap();
    fs::write(dir.path().join("src/b.rs"), "").unwrap();
    fs::write(dir.path().join("readme.md"), "").unwrap();
    fs::write(dir.path().join("Makefile"), "all:\n").unwrap();

    let options = ScanOptionsBuilder::new(dir.path()).build();
    let first = scan(options.clone()).unwrap();
    let second = scan(options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn language_order_descending_with_first_seen_ties() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "").unwrap();
    fs::write(dir.path().join("b.py"), "").unwrap();
    fs::write(dir.path().join("c.py"), "").unwrap();
    fs::write(dir.path().join("d.rs"), "").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(
        result.languages,
        vec![
            LanguageCount {
                name: "Python".to_string(),
                files: 2
            },
            LanguageCount {
                name: "Markdown".to_string(),
                files: 1
            },
            LanguageCount {
                name: "Rust".to_string(),
                files: 1
            },
        ]
    );
}

#[test]
fn marker_files_detected_at_root_only() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("CMakeLists.txt"), "").unwrap();
    fs::write(dir.path().join("Makefile"), "").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/package.json"), "{}").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    assert!(result.markers.cmake);
    assert!(result.markers.makefile);
    assert!(!result.markers.package_json);
    assert!(!result.markers.pyproject);
    assert!(result.markers.any());
}

#[test]
fn invalid_root_is_rejected() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = scan(ScanOptionsBuilder::new(&missing).build()).unwrap_err();
    assert!(matches!(err, DraftmeError::InvalidRoot(_)));

    let file = dir.path().join("plain.txt");
    fs::write(&file, "").unwrap();
    let err = scan(ScanOptionsBuilder::new(&file).build()).unwrap_err();
    assert!(matches!(err, DraftmeError::InvalidRoot(_)));
}

#[test]
fn custom_rules_are_injected() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("lib")).unwrap();
    fs::write(dir.path().join("lib/x.foo"), "").unwrap();
    fs::write(dir.path().join("y.py"), "").unwrap();

    let rules = ScanRules {
        ignored_dirs: HashSet::new(),
        ignored_files: HashSet::new(),
        languages: HashMap::from([("foo".to_string(), "Foo".to_string())]),
        key_folders: vec!["lib".to_string()],
    };
    let result = scan_with_rules(ScanOptionsBuilder::new(dir.path()).build(), rules).unwrap();
    assert_eq!(result.file_count, 2);
    assert_eq!(language_files(&result, "Foo"), Some(1));
    assert_eq!(language_files(&result, "Python"), None);
    assert_eq!(result.key_folders, vec!["lib".to_string()]);
}

#[test]
fn scan_result_roundtrips_through_json() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let parsed: draftme::ScanResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, parsed);
}

#[test]
fn scan_to_readme_draft() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.py"), "").unwrap();
    fs::write(dir.path().join("pyproject.toml"), "[project]\n").unwrap();

    let result = scan(ScanOptionsBuilder::new(dir.path()).build()).unwrap();
    let suggestions = infer_suggestions(&result);
    let markdown = render_markdown(&result, &suggestions, &RenderOptions::default());
    assert!(markdown.contains("## Project Structure"));
    assert!(markdown.contains("## How to Run"));
    assert!(markdown.contains("pip install -e ."));
    assert!(markdown.contains("- Python (1 files)"));
}

#[test]
fn default_options_match_documented_values() {
    let options = ScanOptions::default();
    assert_eq!(options.max_files, 5000);
    assert_eq!(options.max_depth, 6);
    assert!(options.respect_gitignore);
    assert!(!options.include_hidden);
}
