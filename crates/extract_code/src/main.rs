// crates/extract_code/src/main.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

use fence_marker::{HEADERS_ROOT, MODULES_ROOT};
use scan_fenced_blocks::{scan_fenced_blocks, FencedBlock};
use transform_module_line::transform_module_line;

fn main() -> Result<()> {
    let matches = Command::new("extract_code")
        .version("0.1.0")
        .about("Extracts fenced C++ blocks from Markdown files into paired headers/ and modules/ sources")
        .arg(
            Arg::new("files")
                .help("Markdown file(s) to scan")
                .action(ArgAction::Append)
                .required(true),
        )
        .get_matches();

    let files: Vec<String> = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .map(|s| s.to_string())
        .collect();

    // Fail fast: an unreadable input aborts the run before later arguments
    // are touched, so a half-processed batch is never mistaken for a full one.
    for file in &files {
        process_file(file)?;
    }
    Ok(())
}

/// Scans one Markdown file and writes the output pair for every block with a
/// recognized filename comment.
fn process_file(path: &str) -> Result<()> {
    println!("- {}:", path);
    let content =
        fs::read_to_string(path).with_context(|| format!("Error opening file: {}", path))?;

    for block in scan_fenced_blocks(&content) {
        let Some(name) = block.filename.as_deref() else {
            eprintln!(
                "{}:{}: skipping block: first line is not a filename comment",
                path, block.line
            );
            continue;
        };
        eprintln!(
            "Filename: {}{}",
            name,
            if block.bare_fence { " (no type)" } else { "" }
        );
        write_block_pair(name, &block)?;
    }
    Ok(())
}

/// Writes the verbatim headers copy and the transformed modules copy of one
/// block. Both files are truncated if they already exist.
fn write_block_pair(name: &str, block: &FencedBlock) -> Result<()> {
    let header_path = Path::new(HEADERS_ROOT).join(name);
    let module_path = Path::new(MODULES_ROOT).join(name);

    let mut header = BufWriter::new(
        File::create(&header_path)
            .with_context(|| format!("Error creating output file: {}", header_path.display()))?,
    );
    let mut module = BufWriter::new(
        File::create(&module_path)
            .with_context(|| format!("Error creating output file: {}", module_path.display()))?,
    );

    for line in &block.lines {
        writeln!(header, "{}", line)
            .with_context(|| format!("Error writing output file: {}", header_path.display()))?;
        if let Some(out) = transform_module_line(line) {
            writeln!(module, "{}", out)
                .with_context(|| format!("Error writing output file: {}", module_path.display()))?;
        }
    }

    header
        .flush()
        .with_context(|| format!("Error writing output file: {}", header_path.display()))?;
    module
        .flush()
        .with_context(|| format!("Error writing output file: {}", module_path.display()))?;
    Ok(())
}
