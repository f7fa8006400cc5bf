//! Command-line tool for inspecting Arete config and credential files.
//!
//! Usage: arete-config <COMMAND>
//!
//! Commands:
//!   show <FILE> [PATH]      Print a parsed file, or the value at a dotted key path
//!   credentials <NAME>      Show which credential keys resolve for an integration
//!   config <NAME>           Print an integration's configuration
//!   slug <TEXT>             Print the filename slug for a title
//!   date <TEXT>             Normalize a date to YYYY-MM-DD
//!
//! Set RUST_LOG=debug to see where files were looked for.

use clap::{Parser, Subcommand};
use libarete::{
    load_credentials, load_integration_config, parse, parse_date, slugify, ConfigValue,
    Section, DEFAULT_SLUG_LENGTH,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod render;

#[derive(Parser, Debug)]
#[command(name = "arete-config", version, about = "Inspect Arete config and credential files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a file with the fallback parser and print it.
    Show {
        file: PathBuf,
        /// Dotted key path, e.g. `defaults.days`.
        path: Option<String>,
    },
    /// Show which credential keys resolve for an integration (values masked).
    Credentials { name: String },
    /// Print an integration's configuration.
    Config { name: String },
    /// Print the filename slug for a title.
    Slug {
        text: String,
        #[arg(long, default_value_t = DEFAULT_SLUG_LENGTH)]
        max_length: usize,
    },
    /// Normalize a date to YYYY-MM-DD.
    Date { text: String },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if let Err(message) = run(cli.command) {
        eprintln!("Error: {}", message);
        process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Show { file, path } => {
            let doc = parse(&file)
                .ok_or_else(|| format!("Cannot read {}", file.display()))?;
            match path {
                None => print!("{}", render::tree(&doc)),
                Some(path) => {
                    let value = doc
                        .lookup(&path)
                        .ok_or_else(|| format!("No value at {}", path))?;
                    print_value(value);
                }
            }
        }
        Command::Credentials { name } => {
            let creds = load_credentials(&name)
                .ok_or_else(|| format!("No credentials found for {}", name))?;
            print!("{}", render::masked(&creds));
        }
        Command::Config { name } => {
            let config = load_integration_config(&name);
            let section: &Section = config.as_section();
            if section.is_empty() {
                tracing::info!(integration = %name, "configuration is empty");
            }
            print!("{}", render::tree(section));
        }
        Command::Slug { text, max_length } => println!("{}", slugify(&text, max_length)),
        Command::Date { text } => {
            let date = parse_date(&text).ok_or_else(|| format!("Unrecognized date: {}", text))?;
            println!("{}", date);
        }
    }
    Ok(())
}

fn print_value(value: &ConfigValue) {
    match value {
        ConfigValue::Scalar(s) => println!("{}", s),
        ConfigValue::Section(section) => print!("{}", render::tree(section)),
    }
}
