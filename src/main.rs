use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swatchbook::assets::AssetLoader;
use swatchbook::models::{Draw, HslRanges, HueRange, LevelRange, PaletteConfig, Query};
use swatchbook::services::{PaletteIndex, Selected, Selection};
use swatchbook::ERROR_SWATCH;

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(about = "Swatchbook - pick colors from a palette by luminance, hue, saturation and lightness")]
struct Cli {
    /// Palette file (YAML, or JSON by extension). Defaults to the embedded palette
    #[arg(long, global = true, env = "PALETTE_FILE")]
    palette: Option<PathBuf>,

    /// Suppress diagnostics for queries that cannot be satisfied
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Reject invalid palettes and fail when a query is not fully satisfied
    #[arg(long, global = true)]
    strict: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DrawArgs {
    /// Number of swatches to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Swatch id to leave out (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,
}

impl DrawArgs {
    fn draw(&self) -> Draw {
        Draw::new(self.count).excluding(self.exclude.iter().cloned())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List every swatch with its derived attributes
    List,
    /// Look up a swatch by id
    Id {
        /// Swatch id
        id: String,
    },
    /// Draw swatches from the whole palette
    Random {
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Draw swatches by relative luminance (0..1)
    Luminance {
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long, default_value_t = 1.0)]
        max: f64,
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Draw swatches by hue window (degrees)
    Hue {
        /// Start of the window on the hue wheel (0 = red, 120 = green, 240 = blue)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        theta: f64,
        /// Window size in degrees
        #[arg(long, default_value_t = 45.0)]
        range: f64,
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Draw swatches by saturation (0..1)
    Saturation {
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long, default_value_t = 1.0)]
        max: f64,
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Draw swatches by lightness (0..1)
    Lightness {
        #[arg(long, default_value_t = 0.0)]
        min: f64,
        #[arg(long, default_value_t = 1.0)]
        max: f64,
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Draw swatches by combined hue, saturation and lightness ranges
    Hsl {
        /// Hue window as THETA,RANGE
        #[arg(long, value_parser = parse_pair, default_value = "0,180", allow_negative_numbers = true)]
        hue: (f64, f64),
        /// Saturation as MIN,MAX
        #[arg(long, value_parser = parse_pair, default_value = "0,1")]
        saturation: (f64, f64),
        /// Lightness as MIN,MAX
        #[arg(long, value_parser = parse_pair, default_value = "0,1")]
        lightness: (f64, f64),
        #[command(flatten)]
        draw: DrawArgs,
    },
    /// Write the embedded default palette to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected two comma-separated numbers, got {s:?}"))?;
    let a = a.trim().parse::<f64>().map_err(|e| format!("{a:?}: {e}"))?;
    let b = b.trim().parse::<f64>().map_err(|e| format!("{b:?}: {e}"))?;
    Ok((a, b))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let loader = AssetLoader::new(cli.palette.clone());

    if let Commands::Init { force } = cli.command {
        return run_init_command(&loader, force);
    }

    let index = load_index(&loader, cli.strict, cli.quiet)?;

    match &cli.command {
        Commands::List => {
            let entries: Vec<Selected> = index.swatches().iter().map(Selected::Swatch).collect();
            print_selection(&Selection::Many(entries), cli.json)
        }
        Commands::Id { id } => {
            let selected = index.by_id(id);
            print_selection(&Selection::One(selected), cli.json)?;
            if cli.strict && selected.is_invalid() {
                anyhow::bail!("No swatch with id {id:?}");
            }
            Ok(())
        }
        command => {
            let (query, draw_args) = query_for(command)
                .context("Subcommand does not describe a query")?;
            let mut rng = draw_args.rng();
            let selection = index.query(&mut rng, &query, &draw_args.draw());
            print_selection(&selection, cli.json)?;
            if cli.strict {
                selection.into_result()?;
            }
            Ok(())
        }
    }
}

fn query_for(command: &Commands) -> Option<(Query, &DrawArgs)> {
    let pair = match command {
        Commands::Random { draw } => (Query::Random, draw),
        Commands::Luminance { min, max, draw } => {
            (Query::Luminance(LevelRange::new(*min, *max)), draw)
        }
        Commands::Hue { theta, range, draw } => (Query::Hue(HueRange::new(*theta, *range)), draw),
        Commands::Saturation { min, max, draw } => {
            (Query::Saturation(LevelRange::new(*min, *max)), draw)
        }
        Commands::Lightness { min, max, draw } => {
            (Query::Lightness(LevelRange::new(*min, *max)), draw)
        }
        Commands::Hsl {
            hue,
            saturation,
            lightness,
            draw,
        } => (
            Query::Hsl(HslRanges {
                hue: HueRange::new(hue.0, hue.1),
                saturation: LevelRange::new(saturation.0, saturation.1),
                lightness: LevelRange::new(lightness.0, lightness.1),
            }),
            draw,
        ),
        Commands::List | Commands::Id { .. } | Commands::Init { .. } => return None,
    };
    Some(pair)
}

/// Load the palette (file or embedded) and build the index
fn load_index(loader: &AssetLoader, strict: bool, quiet: bool) -> anyhow::Result<PaletteIndex> {
    let mut config = PaletteConfig::load_from_assets(loader).context("Failed to load palette")?;
    if quiet {
        config.log = false;
    }

    if strict {
        config.try_into_index().context("Invalid palette")
    } else {
        Ok(config.into_index())
    }
}

/// Extract the embedded palette to the filesystem
fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    let report = loader.init(force).context("Failed to write palette")?;

    for path in &report.written {
        println!("  wrote   {}", path);
    }
    for path in &report.skipped {
        println!("  skipped {} (exists, use --force to overwrite)", path);
    }

    Ok(())
}

fn print_selection(selection: &Selection, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(selection)?);
        return Ok(());
    }

    for entry in selection.iter() {
        match entry.swatch() {
            Some(swatch) => {
                let hsla = swatch.hsla();
                println!(
                    "{:<16} {:<10} h={:>5.1} s={:>5.1} l={:>5.1} lum={:.4}",
                    swatch.id(),
                    swatch.hex(),
                    hsla.h,
                    hsla.s,
                    hsla.l,
                    swatch.luminance()
                );
            }
            None => println!(
                "{:<16} {:<10} ({})",
                ERROR_SWATCH.id, ERROR_SWATCH.hex, ERROR_SWATCH.title
            ),
        }
    }

    Ok(())
}
