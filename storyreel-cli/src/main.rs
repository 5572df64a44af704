use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use storyreel::{
    Composer, FfmpegSink, FfmpegSinkOpts, FontSet, FrameIndex, FrameRange, PngSequenceSink,
    RenderThreading, VideoConfig,
};

#[derive(Parser, Debug)]
#[command(name = "storyreel", version, about = "Render scene timelines to frames and video")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the canvas, duration and scene table of a config.
    Info(InfoArgs),
    /// Dump the evaluated frame tree as JSON (or SVG with `--svg`).
    Tree(TreeArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame range to MP4 (requires `ffmpeg` on PATH) or a PNG sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TreeArgs {
    /// Input config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index; may lie outside the timeline.
    #[arg(long, allow_negative_numbers = true)]
    frame: i64,

    /// Write the frame as an SVG document to this path instead of printing JSON.
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Extra directory of `.ttf`/`.otf` fonts.
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path: an `.mp4` file, or a directory for a PNG sequence.
    #[arg(long)]
    out: PathBuf,

    /// Fail instead of replacing an existing MP4.
    #[arg(long)]
    no_overwrite: bool,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the end of the timeline.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Extra directory of `.ttf`/`.otf` fonts.
    #[arg(long)]
    font_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Tree(args) => cmd_tree(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &Path) -> anyhow::Result<VideoConfig> {
    VideoConfig::from_path(path).with_context(|| format!("load config '{}'", path.display()))
}

fn fonts(dir: Option<&Path>) -> FontSet {
    match dir {
        Some(dir) => FontSet::system_with_dir(dir),
        None => FontSet::system(),
    }
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let config = load(&args.in_path)?;
    let composer = Composer::new(&config)?;
    let total = composer.total_frames();

    println!(
        "canvas  {}x{} @ {}/{} fps",
        config.width, config.height, config.fps.num, config.fps.den
    );
    println!(
        "frames  {total} ({:.2}s)",
        config.fps.frames_to_secs(total as f64)
    );
    println!("scenes  {}", config.scenes.len());
    for (entry, scene) in composer.timeline().entries().iter().zip(&config.scenes) {
        println!(
            "  {:>6}..{:<6} {:<10} {:<6} {}",
            entry.start(),
            entry.end(),
            scene.kind().as_str(),
            format!("{:?}", scene.transition).to_ascii_lowercase(),
            scene.id
        );
    }
    Ok(())
}

fn cmd_tree(args: TreeArgs) -> anyhow::Result<()> {
    let config = load(&args.in_path)?;
    let tree = storyreel::render_frame(&config, args.frame)?;

    match args.svg {
        Some(path) => {
            storyreel::ensure_dir(path.parent().unwrap_or_else(|| Path::new("")))?;
            std::fs::write(&path, tree.to_svg())
                .with_context(|| format!("write svg '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let json = serde_json::to_string_pretty(&tree).context("serialize frame tree")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load(&args.in_path)?;
    let frame = i64::try_from(args.frame).context("frame index too large")?;
    let tree = storyreel::render_frame(&config, frame)?;
    let pixels = storyreel::rasterize(&tree, &fonts(args.font_dir.as_deref()))?;

    storyreel::ensure_dir(args.out.parent().unwrap_or_else(|| Path::new("")))?;
    pixels.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load(&args.in_path)?;
    let end = args
        .end
        .unwrap_or_else(|| storyreel::total_duration(&config));
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;

    let threading = RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };
    let fonts = fonts(args.font_dir.as_deref());

    let is_mp4 = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("mp4"));
    let stats = if is_mp4 {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts {
            out_path: args.out.clone(),
            overwrite: !args.no_overwrite,
            background: config.background_color,
        });
        storyreel::render_range_to_sink(&config, range, &threading, &fonts, &mut sink)?
    } else {
        let mut sink = PngSequenceSink::new(&args.out);
        storyreel::render_range_to_sink(&config, range, &threading, &fonts, &mut sink)?
    };

    tracing::info!(frames = stats.frames_total, chunks = stats.chunks, "render finished");
    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames_total);
    Ok(())
}
