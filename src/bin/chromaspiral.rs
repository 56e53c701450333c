use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chromaspiral::{
    CpuSurface, FrameIndex, FrameRange, InMemorySink, LayoutMode, PngSequenceSink, ShadowMode, ShapeFilter, ShapeKind, SketchConfig, SketchSession,
};

#[derive(Parser, Debug)]
#[command(name = "chromaspiral", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a numbered PNG sequence.
    Frames(FramesArgs),
    /// Dump the generated shape descriptors as JSON.
    Scene(SceneArgs),
}

#[derive(Args, Debug)]
struct SketchArgs {
    /// Sketch config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the random hue seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the layout (name or index 0..3).
    #[arg(long)]
    layout: Option<String>,

    /// Override the shadow mode (name or index 0..3).
    #[arg(long)]
    shadow: Option<String>,

    /// Override the shape kind ("all", a kind name, or index -1..5).
    #[arg(long)]
    shape: Option<String>,

    /// Override the number of shapes.
    #[arg(long)]
    shapes: Option<usize>,

    /// Enable the background fade at this speed.
    #[arg(long)]
    fade: Option<f64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Frame index (0-based); the animation is ticked up to and including it.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing output file.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Number of frames to render.
    #[arg(long)]
    frames: u64,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Fail instead of replacing existing frame files.
    #[arg(long)]
    no_overwrite: bool,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(args: &SketchArgs) -> anyhow::Result<SketchConfig> {
    let mut cfg = match &args.config {
        Some(path) => SketchConfig::from_path(path)
            .with_context(|| format!("load sketch config '{}'", path.display()))?,
        None => SketchConfig::default(),
    };

    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    if let Some(v) = &args.layout {
        cfg.params.layout = parse_mode(v, LayoutMode::from_index, LayoutMode::from_name)
            .with_context(|| format!("unknown layout '{v}'"))?;
    }
    if let Some(v) = &args.shadow {
        cfg.params.shadow = parse_mode(v, ShadowMode::from_index, ShadowMode::from_name)
            .with_context(|| format!("unknown shadow mode '{v}'"))?;
    }
    if let Some(v) = &args.shape {
        cfg.params.shape = parse_mode(v, ShapeFilter::from_index, |s| {
            if s.eq_ignore_ascii_case("all") {
                Some(ShapeFilter::All)
            } else {
                ShapeKind::from_name(s).map(ShapeFilter::Only)
            }
        })
        .with_context(|| format!("unknown shape kind '{v}'"))?;
    }
    if let Some(n) = args.shapes {
        cfg.params.total_shapes = n;
    }
    if let Some(speed) = args.fade {
        cfg.animation.background_fading = true;
        cfg.animation.fade_speed = speed;
    }
    Ok(cfg)
}

fn parse_mode<T>(
    v: &str,
    from_index: impl Fn(i64) -> T,
    from_name: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    match v.trim().parse::<i64>() {
        Ok(i) => Some(from_index(i)),
        Err(_) => from_name(v.trim()),
    }
}

fn new_session(args: &SketchArgs) -> anyhow::Result<SketchSession> {
    let cfg = load_config(args)?;
    Ok(SketchSession::new(cfg)?)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if args.no_overwrite && args.out.exists() {
        anyhow::bail!("output file '{}' already exists", args.out.display());
    }
    let mut sess = new_session(&args.sketch)?;
    let mut surface = CpuSurface::new(sess.canvas())?;

    let range = FrameRange::new(FrameIndex(args.frame), FrameIndex(args.frame + 1))?;
    let mut sink = InMemorySink::new();
    sess.render_range(range, &mut surface, &mut sink)?;
    let (_, frame) = sink
        .frames()
        .last()
        .context("no frame rendered (unexpected)")?;

    chromaspiral::write_png(&args.out, &frame.data, frame.width, frame.height)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let mut sess = new_session(&args.sketch)?;
    let mut surface = CpuSurface::new(sess.canvas())?;

    let mut sink = PngSequenceSink::new(&args.out_dir).with_overwrite(!args.no_overwrite);
    let range = FrameRange::new(FrameIndex(0), FrameIndex(args.frames))?;
    let stats = sess.render_range(range, &mut surface, &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let sess = new_session(&args.sketch)?;
    let json = serde_json::to_string_pretty(&*sess.shapes()).context("serialize scene")?;

    match args.out {
        Some(path) => {
            write_text(&path, &json)?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn write_text(path: &Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, text).with_context(|| format!("write '{}'", path.display()))
}
