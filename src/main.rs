use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hue_pixelate::{Hsv, Rgb, Stylized};
use toonpass::api;
use toonpass::assets::{AssetLoader, ConfigSource};
use toonpass::models::{self, AppConfig};
use toonpass::rendering::{decode_png, encode_png, PixelPass};
use toonpass::server;

#[derive(Parser)]
#[command(name = "toonpass")]
#[command(about = "Toonpass - stylized pixelation with hue-palette snapping")]
struct Cli {
    /// Config file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP filter server
    Serve,
    /// Pixelate a PNG file
    Render {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Block size in pixels (default: from config; not snapped)
        #[arg(short, long)]
        pixel_size: Option<f32>,

        /// Resolution used to size blocks, e.g. "1600x1200" (default: the input size)
        #[arg(short, long)]
        resolution: Option<String>,

        /// Maximum hue shift per brightness step, degrees (default: from config)
        #[arg(long)]
        hue_shift_step: Option<f32>,

        /// Copy the input through without filtering
        #[arg(long)]
        disable: bool,
    },
    /// Show how a single color is stylized
    Inspect {
        /// Hex color, e.g. "#ff0000"
        color: String,
    },
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Toonpass API",
        description = "Stylized pixelation filter with runtime settings",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_pixelate,
        api::handle_get_settings,
        api::handle_put_settings,
        api::handle_resize,
    ),
    components(schemas(
        models::PassSettings,
        models::SettingsUpdate,
        models::ResizeRequest,
        models::Surface,
    )),
    tags(
        (name = "Pixelate", description = "Frame filtering"),
        (name = "Settings", description = "Pass settings and surface size")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_file = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            pixel_size,
            resolution,
            hue_shift_step,
            disable,
        }) => run_render_command(
            config_file,
            &input,
            &output,
            pixel_size,
            resolution.as_deref(),
            hue_shift_step,
            disable,
        ),
        Some(Commands::Inspect { color }) => run_inspect_command(config_file, &color),
        Some(Commands::Init { force }) => run_init_command(config_file, force),
        Some(Commands::Serve) => run_server(config_file).await,
        None => {
            run_status_command(config_file);
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toonpass=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Parse "WIDTHxHEIGHT"
fn parse_resolution(value: &str) -> anyhow::Result<[f32; 2]> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow::anyhow!("resolution must look like 1600x1200, got {value:?}"))?;
    let width: f32 = w.trim().parse()?;
    let height: f32 = h.trim().parse()?;
    if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
        anyhow::bail!("resolution must be positive, got {value:?}");
    }
    Ok([width, height])
}

/// Pixelate a PNG file directly (no server needed)
fn run_render_command(
    config_file: Option<PathBuf>,
    input: &Path,
    output: &Path,
    pixel_size: Option<f32>,
    resolution: Option<&str>,
    hue_shift_step: Option<f32>,
    disable: bool,
) -> anyhow::Result<()> {
    init_cli_logging();

    let loader = AssetLoader::new(config_file);
    let config = AppConfig::load_from_assets(&loader);
    let mut pass = PixelPass::from_config(&config);

    if let Some(step) = hue_shift_step {
        pass.set_hue_shift_step(step)?;
    }

    let mut snapshot = pass.snapshot();
    // The input file is the frame; size blocks from it unless told otherwise.
    snapshot.resolution = resolution.map(parse_resolution).transpose()?;
    if let Some(size) = pixel_size {
        snapshot.pixel_size = size;
    }
    if disable {
        snapshot.enabled = false;
    }

    let data = std::fs::read(input)?;
    let frame = decode_png(&data).map_err(|e| anyhow::anyhow!("{}: {e}", input.display()))?;
    let out = snapshot
        .render(&frame)
        .map_err(|e| anyhow::anyhow!("Render error: {e}"))?;
    let png_bytes = encode_png(&out)?;

    std::fs::write(output, &png_bytes)?;
    println!(
        "Rendered {} ({}x{}, {} bytes)",
        output.display(),
        out.width(),
        out.height(),
        png_bytes.len()
    );

    Ok(())
}

/// Print how one color travels through the stylizer
fn run_inspect_command(config_file: Option<PathBuf>, color: &str) -> anyhow::Result<()> {
    init_cli_logging();

    let rgb: Rgb = color.parse()?;
    let config = AppConfig::load_from_assets(&AssetLoader::new(config_file));
    let stylizer = PixelPass::from_config(&config).snapshot().pixelator().stylizer()?;

    let hsv = Hsv::from(rgb);
    println!("Input:  {rgb}");
    println!(
        "HSV:    h={:.2} deg  s={:.3}  v={:.3}",
        hsv.hue_degrees(),
        hsv.s,
        hsv.v
    );

    match stylizer.classify(hsv) {
        Stylized::PassThrough => {
            println!("Result: pass-through (saturation below threshold)");
            println!("Output: {rgb}");
        }
        Stylized::Quantized {
            palette_index,
            bucket,
            hsv: out,
        } => {
            let anchor = stylizer.palette().hue(palette_index) * 360.0;
            println!("Anchor: #{palette_index} ({anchor:.1} deg)");
            println!(
                "Bucket: {} (level {:.1}, shift {:+})",
                bucket.index(),
                bucket.level(),
                bucket.hue_shift_distance()
            );
            println!(
                "Styled: h={:.2} deg  s={:.3}  v={:.3}",
                out.hue_degrees(),
                out.s,
                out.v
            );
            println!("Output: {}", Rgb::from(out));
        }
    }

    Ok(())
}

/// Extract the embedded config to the filesystem
fn run_init_command(config_file: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let loader = AssetLoader::new(config_file);
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    for f in &report.skipped {
        println!("  - {f} (exists, use --force to overwrite)");
    }
    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command(config_file: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let loader = AssetLoader::new(config_file);

    println!("Toonpass v{VERSION} - stylized pixelation\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );

    let source = match loader.config_source() {
        ConfigSource::Embedded => "embedded".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Missing(path) => format!("embedded ({} not found)", path.display()),
    };
    println!("\nConfig: {source}");

    // Config parse warnings are not interesting here.
    let config = AppConfig::load_from_assets(&loader);
    let settings = PixelPass::from_config(&config).settings();
    println!("  enabled        = {}", settings.enabled);
    println!("  pixel_size     = {}", settings.pixel_size);
    println!("  hue_shift_step = {}", settings.hue_shift_step);
    println!("  hues           = {:?}", settings.hues);
    println!(
        "  surface        = {}x{} @{}",
        settings.surface.width, settings.surface.height, settings.surface.device_pixel_ratio
    );

    println!("\nCommands:");
    println!("  toonpass serve     Start the HTTP filter server");
    println!("  toonpass render    Pixelate a PNG file");
    println!("  toonpass inspect   Show how one color is stylized");
    println!("  toonpass init      Extract the default config.yaml");
    println!("\nRun 'toonpass --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_file: Option<PathBuf>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toonpass=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let loader = AssetLoader::new(config_file.clone());

    tracing::info!(
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Config source configured"
    );

    match loader.seed_if_configured() {
        Ok(true) => tracing::info!("Seeded missing config file with embedded default"),
        Ok(false) => {}
        Err(e) => tracing::warn!(%e, "Failed to seed config"),
    }

    let state = server::create_app_state(&loader);

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Toonpass server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
