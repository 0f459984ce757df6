use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pizzaiolo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Export one animation cycle as a looping GIF.
    Export(ExportArgs),
    /// List the decoration catalog.
    Catalog,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Saved creation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Elapsed time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Driver options JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Saved creation JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Number of frames in the cycle.
    #[arg(long, default_value_t = 24)]
    frames: u32,

    /// Output GIF path.
    #[arg(long)]
    out: PathBuf,

    /// Driver options JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Export(args) => cmd_export(args),
        Command::Catalog => cmd_catalog(),
    }
}

fn read_creation(path: &Path) -> anyhow::Result<pizzaiolo::SavedCreation> {
    let f = File::open(path).with_context(|| format!("open creation '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse creation '{}'", path.display()))
}

fn make_driver(
    creation: &pizzaiolo::SavedCreation,
    config: Option<&Path>,
) -> anyhow::Result<pizzaiolo::FrameDriver> {
    let opts = match config {
        Some(path) => pizzaiolo::DriverOpts::from_path(path)
            .with_context(|| format!("load options '{}'", path.display()))?,
        None => pizzaiolo::DriverOpts::from_env()?,
    };
    let mut driver = pizzaiolo::FrameDriver::new(opts)?;
    driver
        .load_creation(creation)
        .with_context(|| format!("load creation '{}'", creation.draft.name))?;
    Ok(driver)
}

fn ensure_parent(out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let creation = read_creation(&args.in_path)?;
    let mut driver = make_driver(&creation, args.config.as_deref())?;

    let frame = driver.render_at(args.time)?;

    ensure_parent(&args.out)?;
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let creation = read_creation(&args.in_path)?;
    let mut driver = make_driver(&creation, args.config.as_deref())?;

    ensure_parent(&args.out)?;
    let mut sink = pizzaiolo::GifSink::create(&args.out)?;
    driver
        .export_cycle(args.frames, &mut sink)
        .with_context(|| format!("export gif '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_catalog() -> anyhow::Result<()> {
    for d in pizzaiolo::decor::registry::catalog() {
        let id = serde_json::to_string(&d.id)?;
        let kind = if d.is_point() { "point" } else { "zone" };
        let [r, g, b] = d.zone_color().to_array();
        println!(
            "{:<16} {:<6} #{r:02x}{g:02x}{b:02x}  {}",
            id.trim_matches('"'),
            kind,
            d.label
        );
    }
    Ok(())
}
