//! Command-line interface for draftme.
//!
//! Scans a repository, infers build/run suggestions, and writes a README.md
//! draft (or dumps the raw scan as JSON).

use clap::{Parser, ValueEnum};
use draftme::{
    RenderOptions, ScanOptionsBuilder, infer_suggestions, render_markdown, scan, write_markdown,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

/// draftme — draft a README.md from a repository scan
#[derive(Parser)]
#[command(name = "draftme", version, about, long_about = None)]
struct Cli {
    /// Path to the repository (default current dir)
    #[arg(default_value = ".")]
    repo: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "README.generated.md")]
    output: PathBuf,

    /// Write to REPO/README.md (asks before overwriting)
    #[arg(long)]
    write: bool,

    /// Include hidden files and folders
    #[arg(long)]
    include_hidden: bool,

    /// Max files to scan
    #[arg(long, default_value_t = 5000)]
    max_files: usize,

    /// Max folder depth to scan
    #[arg(long, default_value_t = 6)]
    depth: usize,

    /// Disable the project structure tree
    #[arg(long)]
    no_tree: bool,

    /// Do not respect .gitignore rules (built-in ignores still apply)
    #[arg(long)]
    no_gitignore: bool,

    /// GitHub repository as OWNER/REPO, used for badges
    #[arg(long, value_name = "OWNER/REPO")]
    github: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let options = ScanOptionsBuilder::new(&cli.repo)
        .include_hidden(cli.include_hidden)
        .max_files(cli.max_files)
        .max_depth(cli.depth)
        .respect_gitignore(!cli.no_gitignore)
        .build();

    let result = match scan(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    };
    let suggestions = infer_suggestions(&result);

    if cli.format == Format::Json {
        let report = serde_json::json!({
            "scan": result,
            "suggestions": suggestions,
        });
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("JSON serialization error: {e}");
                exit(1);
            }
        }
        return;
    }

    let render_options = RenderOptions {
        show_tree: !cli.no_tree,
        tree_depth: cli.depth.min(3),
        include_hidden: cli.include_hidden,
        github_repo: cli.github,
    };
    let markdown = render_markdown(&result, &suggestions, &render_options);

    let out_path = if cli.write {
        let path = result.root_path.join("README.md");
        if path.exists() && !confirm_overwrite(&path) {
            println!("Cancelled.");
            exit(1);
        }
        path
    } else {
        cli.output
    };

    if let Err(e) = write_markdown(&out_path, &markdown) {
        eprintln!("Error: {e}");
        exit(1);
    }
    println!("Wrote: {}", out_path.display());
}

fn confirm_overwrite(path: &Path) -> bool {
    print!("Overwrite {}? (y/N): ", path.display());
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    line.trim().eq_ignore_ascii_case("y")
}
