use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use seedcard::{
    DEFAULT_ANALOGOUS_SPREAD, DecorPlan, Harmony, Hsl, PaletteEntry, Seed, SeededStream,
    generate_batch, golden_sequence, pick, seed_run, shuffle,
};

#[derive(Parser, Debug)]
#[command(name = "seedcard", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print raw stream samples in [0, 1).
    Stream(StreamArgs),
    /// Print a golden-ratio sequence.
    Sequence(SequenceArgs),
    /// Print a color harmony.
    Palette(PaletteArgs),
    /// Print a seeded permutation of the given items.
    Shuffle(ShuffleArgs),
    /// Print the first N items of a seeded permutation.
    Pick(PickArgs),
    /// Regenerate the decoration described by a plan JSON.
    Layout(LayoutArgs),
    /// Regenerate a plan over a run of consecutive seeds, in parallel.
    Batch(BatchArgs),
}

#[derive(Parser, Debug)]
struct StreamArgs {
    /// Seed (negative values are reinterpreted as 32-bit).
    #[arg(long, allow_hyphen_values = true)]
    seed: Seed,

    /// Number of samples.
    #[arg(long, default_value_t = 3)]
    count: usize,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    /// Seed.
    #[arg(long, allow_hyphen_values = true)]
    seed: Seed,

    /// Number of values.
    #[arg(long)]
    count: usize,

    /// Lower bound (inclusive).
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    min: f64,

    /// Upper bound (exclusive).
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    max: f64,
}

#[derive(Parser, Debug)]
struct PaletteArgs {
    /// Base hue in degrees.
    #[arg(long, allow_hyphen_values = true)]
    hue: f64,

    /// Base saturation in percent.
    #[arg(long, default_value_t = 70.0)]
    saturation: f64,

    /// Base lightness in percent.
    #[arg(long, default_value_t = 60.0)]
    lightness: f64,

    /// Harmony to build.
    #[arg(long, value_enum, default_value_t = HarmonyChoice::Analogous)]
    harmony: HarmonyChoice,

    /// Analogous spread in degrees.
    #[arg(long, default_value_t = DEFAULT_ANALOGOUS_SPREAD)]
    spread: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HarmonyChoice {
    Complementary,
    Analogous,
    Triadic,
}

#[derive(Parser, Debug)]
struct ShuffleArgs {
    /// Seed.
    #[arg(long, allow_hyphen_values = true)]
    seed: Seed,

    /// Items to permute.
    items: Vec<String>,
}

#[derive(Parser, Debug)]
struct PickArgs {
    /// Seed.
    #[arg(long, allow_hyphen_values = true)]
    seed: Seed,

    /// How many items to take.
    #[arg(long)]
    count: usize,

    /// Candidate items.
    items: Vec<String>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Override the plan seed.
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<Seed>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Input plan JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First seed of the run.
    #[arg(long, allow_hyphen_values = true)]
    first_seed: Seed,

    /// Number of consecutive seeds.
    #[arg(long)]
    runs: usize,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Stream(args) => cmd_stream(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Palette(args) => cmd_palette(args),
        Command::Shuffle(args) => emit(&shuffle(&args.items, args.seed), None),
        Command::Pick(args) => emit(&pick(&args.items, args.count, args.seed), None),
        Command::Layout(args) => cmd_layout(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_stream(args: StreamArgs) -> anyhow::Result<()> {
    let mut stream = SeededStream::new(args.seed);
    let samples: Vec<f64> = (0..args.count).map(|_| stream.next_f64()).collect();
    emit(&samples, None)
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.min.is_finite() && args.max.is_finite(),
        "--min/--max must be finite"
    );
    emit(
        &golden_sequence(args.seed, args.count, args.min, args.max),
        None,
    )
}

fn cmd_palette(args: PaletteArgs) -> anyhow::Result<()> {
    let harmony = match args.harmony {
        HarmonyChoice::Complementary => Harmony::Complementary,
        HarmonyChoice::Analogous => Harmony::Analogous {
            spread: args.spread,
        },
        HarmonyChoice::Triadic => Harmony::Triadic,
    };
    let base = Hsl::new(args.hue, args.saturation, args.lightness);
    let entries: Vec<PaletteEntry> = harmony
        .apply(base)
        .into_iter()
        .map(PaletteEntry::from)
        .collect();
    emit(&entries, None)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let mut plan = DecorPlan::from_path(&args.in_path)?;
    if let Some(seed) = args.seed {
        plan = plan.with_seed(seed);
    }
    let layout = plan.generate()?;
    tracing::info!(
        seed = layout.seed.0,
        positions = layout.positions.len(),
        "layout generated"
    );
    emit(&layout, args.out.as_deref())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let plan = DecorPlan::from_path(&args.in_path)?;
    let seeds = seed_run(args.first_seed, args.runs);
    let layouts = generate_batch(&plan, &seeds, args.threads)?;
    tracing::info!(runs = layouts.len(), "batch generated");
    emit(&layouts, args.out.as_deref())
}

fn emit<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, value)
                .with_context(|| format!("write json '{}'", path.display()))?;
            w.flush()
                .with_context(|| format!("flush '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, value).context("write json to stdout")?;
            writeln!(lock).context("write json to stdout")?;
        }
    }
    Ok(())
}
