use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use yamlnav::document::parser::{load_document, parse_document};
use yamlnav::document::render::render_document;
use yamlnav::navigator::{Matches, Navigator};

/// yamlnav - read, update, and delete YAML nodes addressed by a dotted path
#[derive(Parser)]
#[command(name = "yamlnav")]
#[command(version)]
#[command(about = "Read, update, and delete YAML nodes addressed by a dotted path", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the node(s) a path resolves to
    Read {
        /// YAML file to read
        file: String,
        /// Dotted path, e.g. `a.b.2` or `servers.*.host`
        path: String,
    },
    /// Overwrite the node(s) a path resolves to and print the document
    Write {
        /// YAML file to read
        file: String,
        /// Dotted path; missing structure along it is created
        path: String,
        /// New value, parsed as YAML
        value: String,
    },
    /// Delete the node(s) a path resolves to and print the document
    Delete {
        /// YAML file to read
        file: String,
        /// Dotted path naming the entries to remove
        path: String,
    },
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let navigator = Navigator::new();

    match cli.command {
        Command::Read { file, path } => {
            let doc = load_document(&file)?;
            match navigator.get(&doc, &split_path(&path))? {
                Matches::None => println!("null"),
                Matches::One(node) => println!("{}", render_document(node)?),
                Matches::Many(nodes) => {
                    for node in nodes {
                        println!("{}", render_document(node)?);
                    }
                }
            }
        }
        Command::Write { file, path, value } => {
            let mut doc = load_document(&file)?;
            let replacement = parse_document(&value)
                .with_context(|| format!("invalid replacement value '{value}'"))?;
            navigator.update(&mut doc, &split_path(&path), replacement.as_value())?;
            println!("{}", render_document(&doc)?);
        }
        Command::Delete { file, path } => {
            let mut doc = load_document(&file)?;
            navigator.delete(&mut doc, &split_path(&path))?;
            println!("{}", render_document(&doc)?);
        }
    }

    Ok(())
}
