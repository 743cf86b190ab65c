use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use mapdraw::capture::{DrawController, MapSurface};
use mapdraw::config::{FileConfig, OutputFormat};
use mapdraw::domain::{GeoPoint, Polygon};
use mapdraw::geometry::Viewport;
use mapdraw::replay::{ScriptedPointer, replay};

/// Replay recorded pointer strokes over a map and print the polygons drawn
///
/// Examples:
///   # Replay a single stroke over the default map center
///   mapdraw stroke.json
///
///   # Replay several strokes, re-arming drawing for each one
///   mapdraw strokes.json --rearm --format json
///
///   # Draw over London at 4 meters per pixel
///   mapdraw stroke.json --lat 51.5074 --lon -0.1278 --meters-per-pixel 4
#[derive(Parser, Debug)]
#[command(name = "mapdraw")]
#[command(version, about, long_about = None)]
struct Args {
    /// Pointer script: JSON array of {"phase", "x", "y"} events
    script: PathBuf,

    /// Path to config file (optional, auto-searches mapdraw.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Latitude of the map center (use with --lon)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Longitude of the map center (use with --lat)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Ground resolution of the surface
    #[arg(long)]
    meters_per_pixel: Option<f64>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Output format for drawn polygons
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Re-arm drawing at the start of every stroke
    #[arg(long)]
    rearm: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// A surface with nothing to draw on; overlay requests are logged
#[derive(Debug, Default)]
struct HeadlessSurface {
    overlays: usize,
}

impl MapSurface for HeadlessSurface {
    fn render_line(&mut self, points: &[GeoPoint]) {
        debug!(points = points.len(), "render line");
        self.overlays += 1;
    }

    fn render_polygon(&mut self, polygon: &Polygon) {
        debug!(vertices = polygon.len(), "render polygon");
        self.overlays += 1;
    }

    fn clear_overlays(&mut self) {
        debug!(overlays = self.overlays, "clear overlays");
        self.overlays = 0;
    }

    fn set_panning_enabled(&mut self, enabled: bool) {
        debug!(enabled, "native panning");
    }

    fn set_center(&mut self, center: GeoPoint) {
        debug!(lat = center.lat, lon = center.lon, "center map");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::from_path(config_path).context("Failed to load config file")?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    init_logging(verbose);

    let center = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => GeoPoint::new(lat, lon),
        _ => file_config.center(),
    };
    let meters_per_pixel = args
        .meters_per_pixel
        .unwrap_or(file_config.meters_per_pixel);
    let width = args.width.unwrap_or(file_config.width);
    let height = args.height.unwrap_or(file_config.height);
    let format = args.format.unwrap_or(file_config.format);
    let rearm = args.rearm || file_config.rearm;

    if meters_per_pixel <= 0.0 {
        bail!("--meters-per-pixel must be positive, got {}", meters_per_pixel);
    }
    if width <= 0.0 || height <= 0.0 {
        bail!("Surface size must be positive, got {}x{}", width, height);
    }

    info!(
        lat = center.lat,
        lon = center.lon,
        meters_per_pixel,
        width,
        height,
        "map surface"
    );

    let mut script = ScriptedPointer::from_path(&args.script)
        .with_context(|| format!("Failed to load pointer script: {}", args.script.display()))?;

    let viewport = Viewport::new(center, meters_per_pixel, (width, height));
    let mut controller = DrawController::new(viewport, HeadlessSurface::default());
    controller.map_loaded();

    let polygons = replay(&mut controller, &mut script, rearm);
    if polygons.is_empty() {
        bail!("No polygon was drawn: the script never completed a stroke");
    }

    for polygon in &polygons {
        print_polygon(polygon, format)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_polygon(polygon: &Polygon, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Wkt => println!("{}", polygon.to_wkt()),
        OutputFormat::Json => println!("{}", serde_json::to_string(polygon)?),
    }

    if polygon.is_degenerate() {
        warn!(vertices = polygon.len(), "degenerate polygon");
    }

    Ok(())
}
