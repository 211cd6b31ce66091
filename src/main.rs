//! chord-transposer - print a chord progression in all twelve keys

use anyhow::{bail, Context, Result};
use chord_transposer::{
    render, Chord, ChordQuality, ChordTransposerConfig, NoteSpelling, OutputFormat, PitchClass,
    Preset, PresetCatalog, TranspositionTable,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chord-transposer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (default: $CHORD_TRANSPOSER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the transposition table for a list of chords or a preset
    Table {
        /// Chords as ROOT or ROOT:QUALITY, e.g. `D:m7 G:7 C:maj7`
        chords: Vec<Chord>,

        /// Load chords from a preset instead
        #[arg(short, long, conflicts_with = "chords")]
        preset: Option<String>,

        /// Output format (text, html, yaml)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List available presets
    Presets {
        /// Only show presets in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List accepted root spellings and the twelve key names
    Keys,

    /// List accepted chord qualities
    Qualities,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ChordTransposerConfig::resolve(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Table {
            chords,
            preset,
            format,
        } => {
            let chords = match preset {
                Some(id) => {
                    let catalog = load_catalog(&config)?;
                    catalog.get(&id)?.chords.clone()
                }
                None => chords,
            };
            if chords.is_empty() {
                bail!("Please enter at least one chord (or use --preset)");
            }

            let table = TranspositionTable::build(&chords)?;
            let output = render(&table, format.unwrap_or(config.format))?;
            print!("{}", output);
        }
        Commands::Presets { category } => {
            let catalog = load_catalog(&config)?;
            let presets: Vec<&Preset> = match category.as_deref() {
                Some(c) => catalog.by_category(c).collect(),
                None => catalog.presets().iter().collect(),
            };
            if presets.is_empty() {
                if let Some(category) = category.as_deref() {
                    bail!(
                        "No presets in category '{}' (available: {})",
                        category,
                        catalog.categories().join(", ")
                    );
                }
            }
            for preset in presets {
                println!("{:<12} {:<10} {}", preset.id, preset.category, preset.summary());
            }
        }
        Commands::Keys => {
            let spellings: Vec<&str> = NoteSpelling::ALL.iter().map(|s| s.as_str()).collect();
            println!("Roots: {}", spellings.join(" "));
            for pc in PitchClass::all() {
                println!("{:>2}  {}", pc.index(), pc.canonical_name());
            }
        }
        Commands::Qualities => {
            for quality in ChordQuality::ALL {
                println!("{}", quality.label());
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &ChordTransposerConfig) -> Result<PresetCatalog> {
    let mut catalog = PresetCatalog::builtin().context("Built-in presets are invalid")?;
    if let Some(path) = &config.presets_file {
        let user = PresetCatalog::load_file(path)
            .with_context(|| format!("Failed to load presets from {}", path.display()))?;
        log::info!("Merging {} preset(s) from {}", user.len(), path.display());
        catalog.merge(user);
    }
    Ok(catalog)
}
