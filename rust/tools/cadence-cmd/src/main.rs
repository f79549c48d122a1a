use std::{io, path::PathBuf};

use anyhow::Result;
use cadence_catalog::CatalogConfig;
use cadence_text_index::{Collation, InvertedIndexConfig, create_collation};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod commands;

use commands::{SongArgs, SortKey};

#[derive(Parser)]
#[command(name = "cadence-cmd")]
#[command(about = "Browse, search and edit a song catalog file")]
#[command(version)]
struct Cli {
    /// Song catalog file
    #[arg(short, long, global = true, default_value = "songs.txt")]
    file: PathBuf,

    /// Buckets in the keyword index word map
    #[arg(long, global = true, default_value_t = 101)]
    buckets: usize,

    /// Tokenizer used to split song text (whitespace, unicode-word)
    #[arg(long, global = true, default_value = "whitespace")]
    tokenizer: String,

    /// Index common English words instead of dropping them
    #[arg(long, global = true)]
    keep_stop_words: bool,

    /// Title collation (case-insensitive, case-preserving, ordinal)
    #[arg(long, global = true, default_value = "case-insensitive", value_parser = parse_collation)]
    collation: Collation,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every song
    List {
        /// Sort order
        #[arg(long, value_enum, default_value_t = SortKey::Title)]
        by: SortKey,
    },

    /// Show the song with the given title
    Find { title: String },

    /// List songs whose title, album, lyrics or year contain a keyword
    Search { keyword: String },

    /// Show play statistics
    Stats,

    /// Add a song and write the catalog back
    Add {
        #[command(flatten)]
        song: SongArgs,

        /// Write the catalog here instead of back to --file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove a song and write the catalog back
    Remove {
        title: String,

        /// Write the catalog here instead of back to --file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace a song and write the catalog back
    Modify {
        /// Title of the song to replace
        title: String,

        #[command(flatten)]
        song: SongArgs,

        /// Write the catalog here instead of back to --file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            index: InvertedIndexConfig {
                bucket_count: self.buckets,
                tokenizer: self.tokenizer.clone(),
                stop_words: !self.keep_stop_words,
                ..Default::default()
            },
            title_collation: self.collation,
        }
    }
}

fn parse_collation(name: &str) -> std::result::Result<Collation, String> {
    create_collation(name).map_err(|e| e.to_string())
}

fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = match verbose {
        0 => "warn,cadence_cmd=info",
        1 => "info,cadence_catalog=debug,cadence_text_index=debug,cadence_cmd=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = cli.catalog_config();
    let file = cli.file.as_path();
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::List { by } => commands::list::run(file, config, by, &mut out),
        Commands::Find { title } => commands::find::run(file, config, &title, &mut out),
        Commands::Search { keyword } => commands::search::run(file, config, &keyword, &mut out),
        Commands::Stats => commands::stats::run(file, config, &mut out),
        Commands::Add { song, output } => {
            commands::edit::add(file, config, song, output.as_deref(), &mut out)
        }
        Commands::Remove { title, output } => {
            commands::edit::remove(file, config, &title, output.as_deref(), &mut out)
        }
        Commands::Modify {
            title,
            song,
            output,
        } => commands::edit::modify(file, config, &title, song, output.as_deref(), &mut out),
    }
}
