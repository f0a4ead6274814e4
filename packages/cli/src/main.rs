mod schema;
mod settings;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use typesketch_codegen::{InterfaceDeclarationGenerator, JsonSampleGenerator};

/// Typesketch - sample JSON and TypeScript interfaces from record models
#[derive(Parser, Debug)]
#[command(name = "typesketch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a sample JSON document for a record
    Json(JsonArgs),

    /// Generate TypeScript interface declarations for a record
    Ts(GenerateArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Schema file describing records and enums
    schema: PathBuf,

    /// Qualified name of the root record
    #[arg(short, long)]
    root: String,

    /// Settings file (JSON); built-in defaults apply when omitted
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct JsonArgs {
    #[command(flatten)]
    common: GenerateArgs,

    /// RNG seed for reproducible sample values
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Json(args) => generate_json(args),
        Command::Ts(args) => generate_ts(args),
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn generate_json(args: JsonArgs) -> Result<()> {
    let graph = schema::load_graph(&args.common.schema)?;
    let settings = settings::load(args.common.settings.as_deref())?;

    let generator = JsonSampleGenerator::new(&graph, &settings.mappings, &settings);
    let output = match args.seed {
        Some(seed) => generator.generate_seeded(&args.common.root, seed),
        None => generator.generate(&args.common.root),
    };

    deliver(&args.common.out, &output)
}

fn generate_ts(args: GenerateArgs) -> Result<()> {
    let graph = schema::load_graph(&args.schema)?;
    let settings = settings::load(args.settings.as_deref())?;

    let generator = InterfaceDeclarationGenerator::new(&graph, &settings.mappings, &settings);
    let output = generator.generate(&args.root);

    deliver(&args.out, &output)
}

fn deliver(out: &Option<PathBuf>, output: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, output)?;
            eprintln!("{} {}", "Wrote".green().bold(), path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}
