//! Accentor CLI — compile and maintain stress-annotated Russian
//! pronunciation dictionaries.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use accentor_core::dict::{disambiguate, parser::load_variant_map, sanitize, serialize};
use accentor_core::morph::analyzer::Morphology;
use accentor_core::morph::pymorphy::{pymorphy_available, PymorphyBridge};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "accentor",
    about = "Stress dictionary compiler with homograph disambiguation",
    version,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Show verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a raw accent wordlist into a stress dictionary
    Build(BuildArgs),
    /// Sort and deduplicate the simple-wordform list of a dictionary file
    Sanitize(SanitizeArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Source wordlist (lemma#form1,form2,... lines)
    input: PathBuf,

    /// Output dictionary (JSON)
    output: PathBuf,

    /// Python interpreter hosting the morphology bridge
    #[arg(long, default_value = "python3")]
    python: String,
}

#[derive(Parser, Debug)]
struct SanitizeArgs {
    /// Dictionary file to rewrite in place
    file: PathBuf,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Build(args) => run_build(args),
        Command::Sanitize(args) => run_sanitize(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Build runner ────────────────────────────────────────────────

fn run_build(args: BuildArgs) -> Result<()> {
    if !args.input.exists() {
        bail!("File not found: {}", args.input.display());
    }
    if !pymorphy_available(&args.python) {
        bail!(
            "Morphology bridge unavailable: `{}` cannot import pymorphy2 and russian_tagsets. \
             Install them with: pip install pymorphy2 russian-tagsets",
            args.python
        );
    }

    let variant_map = load_variant_map(&args.input)?;
    println!(
        "`{}`: dictionary has been loaded from this file.",
        args.input.display()
    );

    let morph = PymorphyBridge::with_python(&args.python);
    log::debug!("morphology backend: {}", morph.name());
    let resolved = disambiguate(&variant_map, &morph);
    let homonym_count = resolved.homonyms.len();

    let dictionary = serialize::build_dictionary(resolved);
    serialize::write_dictionary(&dictionary, &args.output)?;

    println!(
        "`{}`: dictionary has been saved into this file.",
        args.output.display()
    );
    println!("Number of homonyms: {}.", homonym_count);
    Ok(())
}

// ─── Sanitize runner ─────────────────────────────────────────────

fn run_sanitize(args: SanitizeArgs) -> Result<()> {
    sanitize::sanitize_file(&args.file)?;
    println!("Sanitized {}", args.file.display());
    Ok(())
}
