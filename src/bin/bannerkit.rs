use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bannerkit::{
    BannerRequest, PipelineOpts, StylePlan, StylePresetCatalog, StyleSource, render_banner,
};

#[derive(Parser, Debug)]
#[command(name = "bannerkit", version)]
struct Cli {
    /// Log pipeline stages (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one banner as a PNG.
    Render(RenderArgs),
    /// Print the style catalog as JSON.
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 630)]
    height: u32,

    /// Style name; unknown names render as `modern`.
    #[arg(long, default_value = "modern", conflicts_with = "plan")]
    style: String,

    /// Explicit style plan JSON, used instead of `--style`.
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Extra named plans (JSON object of name -> plan) merged over the built-ins.
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Largest accepted width.
    #[arg(long, default_value_t = bannerkit::DEFAULT_MAX_WIDTH)]
    max_width: u32,

    /// Largest accepted height.
    #[arg(long, default_value_t = bannerkit::DEFAULT_MAX_HEIGHT)]
    max_height: u32,

    /// Seed for procedural textures.
    #[arg(long, default_value_t = bannerkit::DEFAULT_SEED)]
    seed: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    /// Extra named plans merged over the built-ins before listing.
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Print only the plan this name resolves to.
    #[arg(long)]
    style: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Presets(args) => cmd_presets(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "bannerkit=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(presets: Option<&PathBuf>) -> anyhow::Result<StylePresetCatalog> {
    let catalog = StylePresetCatalog::builtin();
    let Some(path) = presets else {
        return Ok(catalog);
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read presets '{}'", path.display()))?;
    catalog
        .extend_from_json_str(&s)
        .with_context(|| format!("load presets '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.presets.as_ref())?;
    let style = match &args.plan {
        Some(path) => {
            let s = std::fs::read_to_string(path)
                .with_context(|| format!("read plan '{}'", path.display()))?;
            let plan = StylePlan::from_json_str(&s)
                .with_context(|| format!("parse plan '{}'", path.display()))?;
            StyleSource::Plan(plan)
        }
        None => StyleSource::Named(args.style.clone()),
    };
    let opts = PipelineOpts {
        max_width: args.max_width,
        max_height: args.max_height,
        seed: args.seed,
    };
    let request = BannerRequest {
        width: i64::from(args.width),
        height: i64::from(args.height),
        style,
    };

    let banner = render_banner(&request, &catalog, &opts)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        banner.canvas.as_bytes(),
        banner.canvas.width(),
        banner.canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        banner.canvas.width(),
        banner.canvas.height()
    );
    Ok(())
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(args.presets.as_ref())?;
    let json = match &args.style {
        Some(name) => serde_json::to_string_pretty(catalog.resolve(name))?,
        None => {
            let all: BTreeMap<&str, &StylePlan> = catalog.iter().collect();
            serde_json::to_string_pretty(&all)?
        }
    };
    println!("{json}");
    Ok(())
}
