use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "closer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene frame at one scroll position as JSON.
    Sample(SampleArgs),
    /// Sweep the page and stream frames and bursts as JSON lines.
    Scrub(ScrubArgs),
    /// Submit a passcode against a file-backed unlock flag.
    Unlock(UnlockArgs),
    /// Clear the persisted unlock flag.
    Lock(LockArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Position {
    /// Page progress in [0, 1].
    #[arg(long)]
    progress: Option<f64>,

    /// Absolute scroll offset in pixels.
    #[arg(long)]
    scroll: Option<f64>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    position: Position,

    /// Config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sample as if the user prefers reduced motion.
    #[arg(long)]
    reduce_motion: bool,

    /// Sample with soft mode on.
    #[arg(long)]
    soft: bool,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    /// Number of frames from top to bottom (inclusive of both ends).
    #[arg(long, default_value_t = 60)]
    steps: u32,

    /// Scroll back up and down again after reaching the bottom.
    #[arg(long)]
    bounce: bool,

    /// Config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scrub as if the user prefers reduced motion.
    #[arg(long)]
    reduce_motion: bool,
}

#[derive(Parser, Debug)]
struct UnlockArgs {
    /// Passcode to try.
    #[arg(long)]
    code: String,

    /// JSON file holding the unlock flag. Falls back to the config's
    /// `store_path`.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LockArgs {
    /// JSON file holding the unlock flag. Falls back to the config's
    /// `store_path`.
    #[arg(long)]
    store: Option<PathBuf>,

    /// Config JSON. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Scrub(args) => cmd_scrub(args),
        Command::Unlock(args) => cmd_unlock(args),
        Command::Lock(args) => cmd_lock(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<closer::Config> {
    match path {
        Some(p) => {
            closer::Config::load(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(closer::Config::default()),
    }
}

fn store_path(flag: Option<PathBuf>, cfg: &closer::Config) -> anyhow::Result<PathBuf> {
    flag.or_else(|| cfg.store_path.clone())
        .context("no store: pass --store or set store_path in the config")
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let mut cfg = read_config(args.config.as_deref())?;
    cfg.reduce_motion |= args.reduce_motion;

    let layout = &cfg.layout;
    let scroll_y = match (args.position.progress, args.position.scroll) {
        (Some(p), _) => {
            anyhow::ensure!(p.is_finite(), "progress must be a finite number");
            layout.scroll_for_page_progress(p)
        }
        (None, Some(y)) => {
            anyhow::ensure!(y.is_finite(), "scroll must be a finite number");
            y
        }
        (None, None) => anyhow::bail!("one of --progress or --scroll is required"),
    };

    let story = closer::Story::new()?;
    let regions = layout.progress_at(scroll_y);
    let motion = closer::MotionPolicy::from_reduce_flag(cfg.reduce_motion);
    let frame = story.sample(&regions, motion, args.soft);

    let json = serde_json::to_string_pretty(&frame).with_context(|| "serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps >= 2, "--steps must be at least 2");

    let mut cfg = read_config(args.config.as_deref())?;
    cfg.reduce_motion |= args.reduce_motion;

    let stdout = std::io::stdout().lock();
    let sink = closer::JsonLinesSink::new(std::io::BufWriter::new(stdout));
    let mut director =
        closer::Director::mount(&cfg, Box::new(closer::MemoryStore::new()), sink)?;

    let max = director.layout().max_scroll();
    let last = f64::from(args.steps - 1);
    let down: Vec<f64> = (0..args.steps).map(|i| max * f64::from(i) / last).collect();
    let mut path = down.clone();
    if args.bounce {
        path.extend(down.iter().rev().skip(1));
        path.extend(down.iter().skip(1));
    }

    let frame_ms = 1000.0 / 60.0;
    for (i, y) in path.into_iter().enumerate() {
        director.jump_to(y);
        director
            .frame(i as f64 * frame_ms)
            .with_context(|| format!("write frame {i}"))?;
    }
    director.dispose();

    director
        .sink_mut()
        .flush()
        .with_context(|| "flush stdout")?;
    Ok(())
}

fn cmd_unlock(args: UnlockArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let path = store_path(args.store, &cfg)?;
    let store = closer::FileStore::new(&path);
    let mut gate = closer::Gate::open(store, &cfg.passcode.code, &cfg.passcode.hint);

    gate.set_input(args.code);
    match gate.submit(Instant::now()) {
        closer::SubmitOutcome::Unlocked => eprintln!("unlocked"),
        closer::SubmitOutcome::AlreadyUnlocked => eprintln!("already unlocked"),
        closer::SubmitOutcome::Rejected => anyhow::bail!("wrong passcode"),
    }

    let persisted = closer::FlagStore::get(gate.store(), closer::UNLOCK_KEY)
        .with_context(|| format!("read store '{}'", path.display()))?;
    anyhow::ensure!(
        persisted.as_deref() == Some(closer::UNLOCKED_VALUE),
        "unlock flag was not persisted to '{}'",
        path.display()
    );
    Ok(())
}

fn cmd_lock(args: LockArgs) -> anyhow::Result<()> {
    let cfg = read_config(args.config.as_deref())?;
    let path = store_path(args.store, &cfg)?;
    let mut store = closer::FileStore::new(&path);
    closer::FlagStore::remove(&mut store, closer::UNLOCK_KEY)
        .with_context(|| format!("update store '{}'", path.display()))?;
    eprintln!("locked");
    Ok(())
}
