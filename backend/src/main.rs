//! RoomSync seed CLI - Turn the listing sheet into database import files
//!
//! ```bash
//! roomsync-seed generate                       # Default paths under database/
//! roomsync-seed generate --seed 42             # Reproducible random fields
//! roomsync-seed parse listings.csv             # Debug: dump parsed rows as JSON
//! ```
//!
//! Every `generate` flag can also come from the environment (or a `.env` file).

use clap::{Parser, Subcommand};
use roomsync_seed::config::{DEFAULT_INPUT, DEFAULT_OWNERS_OUTPUT, DEFAULT_PROPERTIES_OUTPUT};
use roomsync_seed::logs::{log_error, log_info, log_success, LOGGER};
use roomsync_seed::transform::fields::DEFAULT_CITY;
use roomsync_seed::{generate, parse_csv_file_auto, SeedOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "roomsync-seed")]
#[command(about = "Generate owners and properties import files from the listing sheet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the properties and owners CSV files
    Generate {
        /// Listing sheet to read
        #[arg(short, long, env = "ROOMSYNC_INPUT", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Properties output file
        #[arg(short, long, env = "ROOMSYNC_PROPERTIES", default_value = DEFAULT_PROPERTIES_OUTPUT)]
        properties: PathBuf,

        /// Owners output file
        #[arg(short, long, env = "ROOMSYNC_OWNERS", default_value = DEFAULT_OWNERS_OUTPUT)]
        owners: PathBuf,

        /// Seed for names, phones, images and flags (random if not set)
        #[arg(short, long, env = "ROOMSYNC_SEED")]
        seed: Option<u64>,

        /// City for listings without a location
        #[arg(long, env = "ROOMSYNC_FALLBACK_CITY", default_value = DEFAULT_CITY)]
        fallback_city: String,

        /// Only print warnings and errors
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse a listing sheet and output its rows as JSON
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            properties,
            owners,
            seed,
            fallback_city,
            quiet,
        } => {
            LOGGER.set_quiet(quiet);
            let options = SeedOptions {
                input,
                properties_output: properties,
                owners_output: owners,
                seed,
                fallback_city,
            };
            cmd_generate(&options)
        }

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),
    };

    if let Err(e) = result {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

fn cmd_generate(options: &SeedOptions) -> Result<(), Box<dyn std::error::Error>> {
    generate(options)?;
    log_success("✨ Done!");
    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing CSV: {}", input.display());

    let result = parse_csv_file_auto(input)?;
    eprintln!("   Encoding: {}", result.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(result.delimiter));
    eprintln!("   Columns: {}", result.headers.join(", "));
    eprintln!("✅ Parsed {} rows", result.rows.len());

    let json = serde_json::to_string_pretty(&result.rows)?;
    write_output(&json, output)
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log_info(format!("💾 Output written to: {}", p.display()));
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
