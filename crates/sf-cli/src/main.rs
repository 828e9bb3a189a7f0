mod explore;

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sf_core::{
    Filter, FloatingWord, KeywordStat, Record, Session, Snapshot, Speed, export_json,
    extract_keywords, generate_with_limit, poetry_phrases,
};
use sf_data::{Config, Dataset, resolve_data_path};

#[derive(Parser)]
#[command(name = "sf", about = "Survey responses as a field of floating keywords")]
struct Cli {
    /// Survey dataset: a JSON array of rows (default: $SF_DATA or data.json)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// TOML config file (default: $SF_CONFIG, else built-in settings)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List matched keywords by descending frequency
    Keywords {
        /// Show only the top N keywords
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Generate floating words and print them as JSON
    Generate {
        /// Seed for placement randomness (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Write JSON to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print short phrases cut from every answer
    Phrases,

    /// Show dataset statistics
    Stats,

    /// Run the drift animation, printing positions each frame
    Animate {
        /// Stop after this many frames (0 = until Ctrl-C)
        #[arg(long, default_value_t = 10)]
        frames: u64,

        /// Milliseconds between frames
        #[arg(long, default_value_t = 100)]
        interval_ms: u64,

        /// Category filter: all, q1, q2 or q3
        #[arg(long, default_value = "all")]
        filter: Filter,

        /// Speed preset: slow, medium or fast (default: from config)
        #[arg(long)]
        speed: Option<Speed>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Interactive session on stdin: select, collect, filter, pause
    Explore {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Keywords { limit } => cmd_keywords(&cli, *limit),
        Commands::Generate { seed, out } => cmd_generate(&cli, *seed, out.as_deref()),
        Commands::Phrases => cmd_phrases(&cli),
        Commands::Stats => cmd_stats(&cli),
        Commands::Animate {
            frames,
            interval_ms,
            filter,
            speed,
            seed,
        } => cmd_animate(&cli, *frames, *interval_ms, *filter, *speed, *seed).await,
        Commands::Explore { seed } => cmd_explore(&cli, *seed),
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

struct Loaded {
    config: Config,
    records: Vec<Record>,
    keywords: Vec<KeywordStat>,
}

impl Loaded {
    fn words(&self, seed: Option<u64>) -> Vec<FloatingWord> {
        let mut rng = make_rng(seed);
        generate_with_limit(
            &self.records,
            &self.keywords,
            self.config.max_words,
            &mut rng,
        )
    }
}

fn load(cli: &Cli) -> Result<Loaded> {
    let config = Config::resolve(cli.config.as_deref()).context("failed to load config")?;
    let path = resolve_data_path(cli.data.as_deref());
    let dataset = Dataset::load(&path, &config.questions).context("failed to load dataset")?;
    let vocabulary = config.vocabulary();
    let keywords = extract_keywords(&dataset.records, &vocabulary);
    tracing::debug!(
        "{} vocabulary terms, {} matched",
        vocabulary.len(),
        keywords.len()
    );
    Ok(Loaded {
        config,
        records: dataset.records,
        keywords,
    })
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

/// Wall-clock seconds; drift is a direct function of this.
fn now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_keywords(cli: &Cli, limit: Option<usize>) -> Result<()> {
    let loaded = load(cli)?;
    if loaded.keywords.is_empty() {
        println!("(no keywords found)");
        return Ok(());
    }
    let shown = limit.unwrap_or(loaded.keywords.len());
    for (rank, kw) in loaded.keywords.iter().take(shown).enumerate() {
        println!(
            "{:>3}. {}\t{}\t{}\tresponses={}",
            rank + 1,
            kw.text,
            kw.frequency,
            kw.category,
            kw.responses.len()
        );
    }
    Ok(())
}

fn cmd_generate(cli: &Cli, seed: Option<u64>, out: Option<&Path>) -> Result<()> {
    let loaded = load(cli)?;
    let words = loaded.words(seed);
    let word_count = words.len();
    let snapshot = Snapshot::new(loaded.records.len(), loaded.keywords, words);
    let json = export_json(&snapshot).context("failed to serialize starfield")?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {word_count} words to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_phrases(cli: &Cli) -> Result<()> {
    let loaded = load(cli)?;
    for phrase in poetry_phrases(&loaded.records) {
        println!("{phrase}");
    }
    Ok(())
}

fn cmd_stats(cli: &Cli) -> Result<()> {
    let loaded = load(cli)?;
    let words = loaded.words(Some(0));
    let blank = loaded.records.iter().filter(|r| r.is_blank()).count();

    println!("records:    {}", loaded.records.len());
    println!("blank:      {blank}");
    println!("keywords:   {}", loaded.keywords.len());
    println!("words:      {}", words.len());
    for category in sf_core::Category::ALL {
        let n = words.iter().filter(|w| w.category == category).count();
        println!("  {} {}: {n}", category, category.title());
    }
    if let Some(top) = loaded.keywords.first() {
        println!("top:        {} ({})", top.text, top.frequency);
    }
    Ok(())
}

async fn cmd_animate(
    cli: &Cli,
    frames: u64,
    interval_ms: u64,
    filter: Filter,
    speed: Option<Speed>,
    seed: Option<u64>,
) -> Result<()> {
    let loaded = load(cli)?;
    let speed = speed.unwrap_or(loaded.config.speed);
    let mut session = Session::with_speed(loaded.words(seed), speed);
    session.set_filter(filter);

    if session.field().is_empty() {
        println!("(no words)");
        return Ok(());
    }

    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut frame = 0u64;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let t = now_secs();
                session.tick(t);
                println!("frame {frame} t={t:.3} speed={} filter={}", session.speed(), session.filter());
                for (word, pos) in session.field().visible() {
                    println!("  {}\t{}\t{:.2}\t{:.2}", word.id, word.text, pos.x, pos.y);
                }
                frame += 1;
                if frames != 0 && frame >= frames {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                tracing::info!("interrupted after {frame} frames");
                break;
            }
        }
    }
    Ok(())
}

fn cmd_explore(cli: &Cli, seed: Option<u64>) -> Result<()> {
    let loaded = load(cli)?;
    let session = Session::with_speed(loaded.words(seed), loaded.config.speed);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    explore::run(session, stdin.lock(), stdout.lock(), now_secs).context("explore session failed")
}
