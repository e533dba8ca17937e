use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use strands::{
    generate, GameData, NeighborOrder, PuzzleConfig, Selection, SpangramPlacement, Variant,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(version, about = "Generate a strands-style word puzzle")]
struct Opts {
    /// JSON configuration file. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of grid rows
    #[arg(long)]
    rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    columns: Option<usize>,

    /// Comma-separated regular words
    #[arg(long, value_delimiter = ',')]
    words: Option<Vec<String>>,

    /// The word that has to span the grid
    #[arg(long)]
    spangram: Option<String>,

    /// Theme label for the output
    #[arg(long)]
    theme: Option<String>,

    /// Placement rules: strict or golden
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Number of randomized attempts
    #[arg(long)]
    attempts: Option<usize>,

    /// Seed for reproducible output (pair with --selection lowest-attempt)
    #[arg(long)]
    seed: Option<u64>,

    /// Neighbor order: shuffled, per-attempt or compass
    #[arg(long, value_enum)]
    neighbor_order: Option<NeighborOrder>,

    /// Spangram position in the word order: midpoint, shuffled or random
    #[arg(long, value_enum)]
    placement: Option<SpangramPlacement>,

    /// Winner selection: first-completed or lowest-attempt
    #[arg(long, value_enum)]
    selection: Option<Selection>,

    /// Output type
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log every failed attempt
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Default, Clone, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
    Script,
}

impl Opts {
    fn puzzle_config(&self) -> Result<PuzzleConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => PuzzleConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.num_rows = rows;
        }
        if let Some(columns) = self.columns {
            config.num_columns = columns;
        }
        if let Some(words) = &self.words {
            config.words = words.clone();
        }
        if let Some(spangram) = &self.spangram {
            config.spangram = spangram.clone();
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(attempts) = self.attempts {
            config.attempts = attempts;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(order) = self.neighbor_order {
            config.neighbor_order = order;
        }
        if self.placement.is_some() {
            config.spangram_placement = self.placement;
        }
        if let Some(selection) = self.selection {
            config.selection = selection;
        }

        config.normalize_words();
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let config = opts.puzzle_config()?;
    let solution = generate(&config)?;

    let game_data = GameData::from_solution(&config, &solution);
    match opts.format {
        OutputFormat::Text => print!("{}", solution),
        OutputFormat::Json => println!("{}", game_data.to_json()?),
        OutputFormat::Script => println!("{}", game_data.to_script()?),
    }

    Ok(())
}
