use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use mdtocsync::{io::rewrite, refresh_lines};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Insert or refresh a Markdown table of contents")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Markdown files to refresh
    files: Vec<PathBuf>,
}

fn refresh_path(path: &Path) -> anyhow::Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    Ok(refresh_lines(&lines).join("\n"))
}

/// Entry point for the command-line tool that inserts or refreshes Markdown
/// tables of contents.
///
/// Parses command-line arguments to determine whether to rewrite files in
/// place, print refreshed output to standard output, or read from standard
/// input. Files are processed in parallel; printed output keeps the argument
/// order.
///
/// # Returns
///
/// Returns `Ok(())` if all operations complete successfully; otherwise,
/// returns an error if argument validation or file processing fails.
///
/// # Examples
///
/// ```sh
/// # Refresh the TOC in a file and print to stdout
/// mdtocsync README.md
///
/// # Refresh the TOC in place
/// mdtocsync --in-place README.md
///
/// # Refresh a document from standard input
/// cat README.md | mdtocsync
/// ```
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        let lines: Vec<String> = input.lines().map(str::to_string).collect();
        println!("{}", refresh_lines(&lines).join("\n"));
        return Ok(());
    }

    if cli.in_place {
        cli.files.par_iter().try_for_each(|path| {
            rewrite(path).with_context(|| format!("failed to rewrite {}", path.display()))
        })?;
        return Ok(());
    }

    let outputs: Vec<anyhow::Result<String>> =
        cli.files.par_iter().map(|path| refresh_path(path)).collect();
    for output in outputs {
        println!("{}", output?);
    }
    Ok(())
}
