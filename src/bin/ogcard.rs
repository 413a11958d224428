use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "ogcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a card to an image file.
    Render(RenderArgs),
    /// Print the resolved scene tree as JSON.
    Scene(SceneArgs),
    /// Print HTML meta tags for the card's page.
    Meta(MetaArgs),
    /// List template ids and gradient presets.
    Templates,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input configuration JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Output format; inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Pixels per layout unit.
    #[arg(long, default_value_t = ogcard::DEFAULT_DOWNLOAD_DENSITY)]
    density: f64,

    /// Local image file to embed as the card's asset image.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Extra font directory (may be repeated).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,

    /// Skip system fonts; only `--font-dir` fonts are used.
    #[arg(long)]
    no_system_fonts: bool,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input configuration JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Print the scene fingerprint instead of the tree.
    #[arg(long)]
    fingerprint: bool,
}

#[derive(Parser, Debug)]
struct MetaArgs {
    /// Input configuration JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Public URL of the hosted card image.
    #[arg(long)]
    hosted_url: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    #[value(alias = "jpg")]
    Jpeg,
    Webp,
}

impl From<FormatChoice> for ogcard::ExportFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Png => ogcard::ExportFormat::Png,
            FormatChoice::Jpeg => ogcard::ExportFormat::Jpeg,
            FormatChoice::Webp => ogcard::ExportFormat::Webp,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Meta(args) => cmd_meta(args),
        Command::Templates => cmd_templates(),
    }
}

fn read_config_json(path: &Path) -> anyhow::Result<ogcard::CardConfig> {
    let f = File::open(path).with_context(|| format!("open configuration '{}'", path.display()))?;
    let cfg = ogcard::CardConfig::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse configuration '{}'", path.display()))?;
    Ok(cfg)
}

fn format_for(args: &RenderArgs) -> anyhow::Result<ogcard::ExportFormat> {
    if let Some(choice) = args.format {
        return Ok(choice.into());
    }
    let ext = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("png");
    Ok(ogcard::ExportFormat::parse(ext)?)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut cfg = read_config_json(&args.in_path)?;
    if let Some(path) = &args.image {
        cfg.image = Some(ogcard::ingest_image_file(path)?);
    }

    let mut sources = if args.no_system_fonts {
        ogcard::FontSources::default()
    } else {
        ogcard::FontSources::system()
    };
    for dir in &args.font_dirs {
        sources = sources.with_dir(dir);
    }

    let density = ogcard::PixelDensity::new(args.density)?;
    let options = ogcard::ExportOptions::new(format_for(&args)?, density);
    let session = ogcard::EditorSession::new(cfg, ogcard::RasterEngine::load(&sources));
    let artifact = session.export(&options)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &artifact.bytes)
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    if let Some(requested) = artifact.degraded_from {
        eprintln!("note: {requested} encoder unavailable, wrote {}", artifact.format);
    }
    eprintln!(
        "wrote {} ({}x{} {})",
        args.out.display(),
        artifact.width,
        artifact.height,
        artifact.format
    );
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let cfg = read_config_json(&args.in_path)?;
    let scene = ogcard::resolve_scene(&cfg);
    let mut out = std::io::stdout().lock();
    if args.fingerprint {
        writeln!(out, "{:016x}", scene.fingerprint())?;
    } else {
        serde_json::to_writer_pretty(&mut out, &scene).context("serialize scene tree")?;
        writeln!(out)?;
    }
    Ok(())
}

fn cmd_meta(args: MetaArgs) -> anyhow::Result<()> {
    let cfg = read_config_json(&args.in_path)?;
    let tags = ogcard::MetaTags::for_config(&cfg, args.hosted_url.as_deref());
    print!("{}", tags.to_html());
    Ok(())
}

fn cmd_templates() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "templates:")?;
    for t in ogcard::TemplateId::ALL {
        writeln!(out, "  {:<10} {}", t.as_str(), t.display_name())?;
    }
    writeln!(out, "gradient presets:")?;
    for p in &ogcard::GRADIENT_PRESETS {
        writeln!(out, "  {:<12} {} -> {} ({})", p.name, p.start, p.end, p.direction)?;
    }
    Ok(())
}
