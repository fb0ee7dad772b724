use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use check_tiles::{CheckRenderer, SampledGrid, SourceImage, WavePattern};
use checkstudio::api;
use checkstudio::models::{AppConfig, RenderParams};
use checkstudio::server;

#[derive(Parser)]
#[command(name = "checkstudio")]
#[command(about = "Checkmark tile studio - turn images into animated checkmark grids")]
struct Cli {
    /// YAML configuration file (default: $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Render an image to a PNG (static) or GIF (animated) file
    Render {
        /// Source image (PNG, JPEG or GIF)
        input: PathBuf,

        /// Output file (default: check_static.png or check_anim.gif)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        params: ParamArgs,
    },
    /// Print the tile grid size for an image
    Grid {
        /// Source image (PNG, JPEG or GIF)
        input: PathBuf,

        /// Tiles per row
        #[arg(long)]
        columns: Option<u32>,
    },
    /// List animation patterns
    Patterns,
}

/// Render parameters; anything left out comes from the config defaults.
#[derive(Args)]
struct ParamArgs {
    /// Tiles per row (10-64)
    #[arg(long)]
    columns: Option<u32>,

    /// Checkmark stroke width as a fraction of the tile (0.01-0.25)
    #[arg(long)]
    thickness: Option<f64>,

    /// Animation pattern (see `checkstudio patterns`)
    #[arg(long)]
    pattern: Option<String>,

    /// Wave speed (1-10)
    #[arg(long)]
    speed: Option<f64>,

    /// Frames per second (5-30)
    #[arg(long)]
    fps: Option<u32>,

    /// Frames in one animation loop (10-60)
    #[arg(long)]
    frames: Option<u32>,

    /// Background color as #rrggbb
    #[arg(long)]
    background: Option<String>,

    /// Checkmark color as #rrggbb
    #[arg(long)]
    check: Option<String>,
}

impl From<ParamArgs> for RenderParams {
    fn from(args: ParamArgs) -> Self {
        Self {
            columns: args.columns,
            thickness: args.thickness,
            pattern: args.pattern,
            speed: args.speed,
            fps: args.fps,
            frames: args.frames,
            background: args.background,
            check: args.check,
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Checkstudio API",
        description = "Render images as grids of rounded checkmark tiles",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_render, api::handle_grid, api::handle_patterns),
    components(schemas(api::GridResponse, api::PatternInfo, api::ErrorResponse)),
    tags(
        (name = "Render", description = "Tile rendering and grid sampling")
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
            params,
        }) => run_render_command(config_file.as_deref(), &input, output, params.into()),
        Some(Commands::Grid { input, columns }) => {
            run_grid_command(config_file.as_deref(), &input, columns)
        }
        Some(Commands::Patterns) => {
            run_patterns_command();
            Ok(())
        }
        Some(Commands::Serve) => run_server(config_file.as_deref()).await,
        None => {
            run_status_command(config_file.as_deref());
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkstudio=warn,check_tiles=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Render an image directly to a file (no server needed)
fn run_render_command(
    config_file: Option<&Path>,
    input: &Path,
    output: Option<PathBuf>,
    params: RenderParams,
) -> anyhow::Result<()> {
    init_cli_logging();

    let config = AppConfig::load(config_file);
    let render_config = params.resolve(&config.defaults)?;
    let source = SourceImage::open(input)?;

    let mut stderr = std::io::stderr();
    let image = CheckRenderer::new(render_config)
        .encode_options(config.encode_options())
        .progress(|done: u32, total: u32| {
            let _ = write!(stderr, "\rRendering frame {done}/{total}");
            if done == total {
                let _ = writeln!(stderr);
            }
        })
        .render(&source)?;

    let output = output.unwrap_or_else(|| PathBuf::from(image.filename()));
    std::fs::write(&output, &image.bytes)?;
    println!(
        "Rendered {} ({}x{}, {} frame{}, {} bytes)",
        output.display(),
        image.width,
        image.height,
        image.frame_count,
        if image.frame_count == 1 { "" } else { "s" },
        image.bytes.len()
    );
    Ok(())
}

/// Print the grid an image would be sampled to
fn run_grid_command(
    config_file: Option<&Path>,
    input: &Path,
    columns: Option<u32>,
) -> anyhow::Result<()> {
    init_cli_logging();

    let config = AppConfig::load(config_file);
    let params = RenderParams {
        columns,
        ..RenderParams::default()
    };
    let render_config = params.resolve(&config.defaults)?;
    let source = SourceImage::open(input)?;
    let grid = SampledGrid::from_source(&source, render_config.columns)?;

    println!("GRID: {}x{}", grid.columns(), grid.rows());
    Ok(())
}

fn run_patterns_command() {
    for pattern in WavePattern::ALL {
        let kind = if pattern.is_animated() {
            "animated"
        } else {
            "still"
        };
        println!("  {:<16} {:<9} {}", pattern.name(), kind, pattern.label());
    }
}

/// Display status and configuration information
fn run_status_command(config_file: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("Checkstudio v{VERSION} - checkmark tile studio");
    println!("Turns images into animated grids of checkmark tiles\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  checkstudio serve      Start the HTTP server");
    println!("  checkstudio render     Render an image to PNG or GIF");
    println!("  checkstudio grid       Print the tile grid for an image");
    println!("  checkstudio patterns   List animation patterns");
    println!("\nRun 'checkstudio --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_file: Option<&Path>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkstudio=info,check_tiles=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load(config_file).with_bind(std::env::var("BIND_ADDR").ok());
    let bind_addr = config.server.bind.clone();

    tracing::info!(
        max_upload_bytes = config.limits.max_upload_bytes,
        max_grid_rows = config.limits.max_grid_rows,
        max_render_pixels = config.limits.max_render_pixels,
        render_timeout_secs = config.server.render_timeout_secs,
        "Render limits configured"
    );

    let state = server::create_app_state(config);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Checkstudio server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
