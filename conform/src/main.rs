//! Conform CLI - normalize strings and JSON records from the command line
//!
//! ```bash
//! conform chain "trim,name" "  jean--LUC  "     # apply directives to values
//! cat names.txt | conform chain "trim,title"    # ... or to stdin lines
//! conform json --schema form.json input.json    # normalize JSON records
//! conform directives                            # list built-in directives
//! conform example-schema                        # print an example schema
//! ```
//!
//! Set `RUST_LOG=debug` to see unknown directives being skipped.

use clap::{Parser, Subcommand};
use conform::{directives_description, example_schema, Registry, Schema};
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "conform")]
#[command(about = "Normalize strings with annotation directives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a directive list to values (stdin lines when none are given)
    Chain {
        /// Comma-separated directives, e.g. "trim,lower"
        directives: String,

        /// Values to transform
        values: Vec<String>,
    },

    /// Normalize a JSON document (object or array of objects) with a schema
    Json {
        /// Annotation schema file
        #[arg(short, long)]
        schema: PathBuf,

        /// Input JSON file (default: stdin)
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show built-in directives
    Directives,

    /// Show an example annotation schema
    ExampleSchema,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chain { directives, values } => cmd_chain(&directives, values),
        Commands::Json {
            schema,
            input,
            output,
        } => cmd_json(&schema, input.as_deref(), output.as_deref()),
        Commands::Directives => cmd_directives(),
        Commands::ExampleSchema => cmd_example_schema(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_chain(directives: &str, values: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::global();

    if !values.is_empty() {
        for value in values {
            println!("{}", registry.transform_chain(&value, directives));
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        println!("{}", registry.transform_chain(&line?, directives));
    }
    Ok(())
}

fn cmd_json(
    schema_path: &Path,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = Schema::from_file(schema_path)?;
    log::info!(
        "Loaded schema {} ({} fields)",
        schema_path.display(),
        schema.field_paths().len()
    );

    let content = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let mut document: Value = serde_json::from_str(&content)?;

    schema.apply(&mut document, Registry::global())?;

    let json = serde_json::to_string_pretty(&document)?;
    write_output(&json, output)?;
    Ok(())
}

fn cmd_directives() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", directives_description());
    Ok(())
}

fn cmd_example_schema() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", example_schema().to_json()?);
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
