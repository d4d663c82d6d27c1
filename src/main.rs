use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{info, warn, Level};

use film_styler::{
    config::Config,
    pipeline::{BatchPlan, BatchRunner, StylePipeline},
    styles::GrainSynthesizer,
};

#[derive(Parser)]
#[command(
    name = "film-styler",
    version,
    about = "Give your photos an analog film look",
    long_about = "Film-Styler applies film-stock color grades, film grain and instant-print borders to a photo. Styles are named `frame` or `frame_color`, e.g. `polaroid_cinematic_kodak`."
)]
struct Cli {
    /// Source photo (JPEG or PNG)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory receiving one file per generated style
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Frame used by --effects and --all-effects
    #[arg(short, long, default_value = "polaroid")]
    frame: String,

    /// Color styles to combine with the frame
    #[arg(short, long, num_args = 1..)]
    effects: Vec<String>,

    /// Combine the frame with every color style
    #[arg(long)]
    all_effects: bool,

    /// Generate every frame and color combination
    #[arg(short, long)]
    all: bool,

    /// Generate N random frame and color combinations
    #[arg(short, long, value_name = "N")]
    random: Option<usize>,

    /// Render a single compound style (requires --output)
    #[arg(short, long, requires = "output")]
    style: Option<String>,

    /// Output file for --style
    #[arg(long)]
    output: Option<PathBuf>,

    /// List the available frame and color styles
    #[arg(short, long)]
    list: bool,

    /// Seed the grain for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Number of parallel rendering threads
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Film-Styler v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    if let Some(seed) = cli.seed {
        config.grain.seed = Some(seed);
    }
    if let Some(jobs) = cli.jobs {
        config.batch.jobs = jobs;
    }
    config.validate()?;

    let pipeline = StylePipeline::new(&config);
    let styles = pipeline.registry().supported_styles();

    if cli.list {
        println!("Frames:");
        for frame in &styles.frames {
            println!("  {}", frame);
        }
        println!("Color styles:");
        for effect in &styles.effects {
            println!("  {}", effect);
        }
        return Ok(());
    }

    let input = cli.input.clone().unwrap_or_else(|| config.batch.input.clone());
    info!("Input: {:?}", input);

    // Single render
    if let Some(style) = &cli.style {
        let Some(output) = &cli.output else {
            bail!("--style requires --output");
        };

        let mut grain = GrainSynthesizer::from_config(&config.grain, 0);
        pipeline
            .apply_file(&input, style, output, &mut grain)
            .map_err(|e| anyhow::anyhow!(e.user_message(&styles)))?;

        info!("Styling complete! Output saved to: {:?}", output);
        return Ok(());
    }

    // Batch render
    let registry = pipeline.registry();
    let plan = if cli.all {
        BatchPlan::all_combinations(registry)
    } else if let Some(count) = cli.random {
        BatchPlan::random(registry, count, &mut rand::thread_rng())
    } else if cli.all_effects {
        BatchPlan::all_effects(registry, &cli.frame)?
    } else {
        BatchPlan::for_frame(registry, &cli.frame, &cli.effects)?
    };

    let output_dir = cli.output_dir.clone().unwrap_or_else(|| config.batch.output_dir.clone());
    info!("Output directory: {:?}", output_dir);

    let runner = BatchRunner::new(&pipeline, &config);
    let report = runner
        .run_file(&input, &plan, &output_dir, &config.batch.extension)
        .map_err(|e| anyhow::anyhow!(e.user_message(&styles)))?;

    if !report.is_success() {
        for failure in &report.failed {
            warn!("{}: {}", failure.job.style, failure.message);
        }
        bail!("{} of {} styles failed", report.failed.len(), report.total());
    }

    info!("Generated {} styles in {:?}", report.succeeded.len(), output_dir);
    Ok(())
}
