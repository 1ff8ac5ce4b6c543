use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use markdown_quill_engine::{io as engine_io, render_document};

fn main() {
    if let Err(err) = run() {
        eprintln!("markdown-quill: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "-o" | "--output" => {
                let path = args.next().context("--output expects a file path")?;
                output = Some(PathBuf::from(path));
            }
            _ => {
                if input.is_none() {
                    input = Some(PathBuf::from(arg));
                } else {
                    print_usage();
                    anyhow::bail!("unexpected argument: {arg}");
                }
            }
        }
    }

    let source = match input {
        Some(path) => engine_io::read_document(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let html = render_document(&source);

    match output {
        Some(path) => fs::write(&path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write stdout")?,
    }

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: markdown-quill-cli [-o output.html] [input.md]");
    eprintln!("Reads markup from input.md (or stdin) and writes HTML fragments.");
}
