//! buildergen CLI
//!
//! Reads a C# source file, extracts its property declarations, and emits a
//! fluent builder class for the selected class name.
//!
//! # Usage
//!
//! ```bash
//! # Print the generated builder to stdout
//! cargo run --bin buildergen -- Person.cs --class Person
//!
//! # Append the generated builder at end-of-file (the editor-host behavior)
//! cargo run --bin buildergen -- Person.cs --class Person --in-place
//!
//! # Inspect the extracted property list as JSON
//! cargo run --bin buildergen -- Person.cs --class Person --dump-properties
//! ```

use std::fs;
use std::path::PathBuf;

use buildergen::{extract_properties, generate_builder};
use clap::Parser;

#[derive(Parser)]
#[command(name = "buildergen")]
#[command(about = "Generate a fluent builder class from a C# source file", long_about = None)]
struct Cli {
    /// C# source file to read
    source: PathBuf,

    /// Name of the class the builder constructs
    #[arg(short, long)]
    class: String,

    /// Append the generated class at end-of-file instead of printing it
    #[arg(long)]
    in_place: bool,

    /// Print the extracted property list as JSON and skip generation
    #[arg(long)]
    dump_properties: bool,
}

fn main() -> buildergen::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let source = fs::read_to_string(&cli.source)?;

    if cli.dump_properties {
        let properties = extract_properties(&source);
        println!("{}", serde_json::to_string_pretty(&properties)?);
        return Ok(());
    }

    let generated = generate_builder(&source, &cli.class);

    if cli.in_place {
        let mut updated = source;
        updated.push_str(&generated);
        fs::write(&cli.source, updated)?;
    } else {
        print!("{}", generated);
    }

    Ok(())
}
