//! # draftme
//!
//! `draftme` scans a local repository and produces a structured summary —
//! file and language counts, detected build-system marker files, recognized
//! key folders, and a bounded sample of representative files — then derives
//! build/run suggestions and renders a README.md draft from the results.
//!
//! The scan is bounded (`max_files`, `max_depth`), deterministic (siblings
//! are walked in lexicographic order), and ignore-aware: hidden entries,
//! a built-in denylist, and the root's `.gitignore`/`.git/info/exclude`
//! rules all filter the walk. Hitting the file cap ends the walk early with
//! a partial (but valid) result rather than an error.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use draftme::{infer_suggestions, scan, ScanOptionsBuilder};
//!
//! let options = ScanOptionsBuilder::new(".")
//!     .respect_gitignore(true)
//!     .max_files(5000)
//!     .max_depth(6)
//!     .build();
//!
//! let result = scan(options).expect("failed to scan repository");
//! let suggestions = infer_suggestions(&result);
//!
//! println!("{} files, {} dirs", result.file_count, result.dir_count);
//! for entry in &suggestions.tech_stack {
//!     println!("- {entry}");
//! }
//! ```

mod engine;
mod error;
mod gitignore;
mod options;
mod render;
mod rules;
mod suggest;
mod types;

pub use engine::{TOP_FILES_LIMIT, scan, scan_with_rules};
pub use error::DraftmeError;
pub use gitignore::IgnoreRules;
pub use options::{ScanOptions, ScanOptionsBuilder};
pub use render::{RenderOptions, render_markdown, render_tree, write_markdown};
pub use rules::ScanRules;
pub use suggest::{Suggestions, infer_suggestions};
pub use types::{BuildMarkers, LanguageCount, ScanResult};
