use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::GeoPoint;
use crate::error::{Error, Result};

/// Where the map is centered before any location fix arrives
pub const DEFAULT_CENTER: (f64, f64) = (45.5076, -122.6736);

fn default_lat() -> f64 {
    DEFAULT_CENTER.0
}
fn default_lon() -> f64 {
    DEFAULT_CENTER.1
}
fn default_meters_per_pixel() -> f64 {
    1.0
}
fn default_width() -> f64 {
    390.0
}
fn default_height() -> f64 {
    844.0
}

/// How drawn polygons are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Wkt,
    Json,
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default = "default_lat")]
    pub lat: f64,
    #[serde(default = "default_lon")]
    pub lon: f64,
    #[serde(default = "default_meters_per_pixel")]
    pub meters_per_pixel: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub rearm: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            lat: default_lat(),
            lon: default_lon(),
            meters_per_pixel: default_meters_per_pixel(),
            width: default_width(),
            height: default_height(),
            format: OutputFormat::default(),
            rearm: false,
            verbose: false,
        }
    }
}

impl FileConfig {
    /// Search the usual locations, returning the first file that parses
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_path(&path) {
                Ok(config) => return Some(config),
                Err(e) => warn!("Failed to load config file {:?}: {}", path, e),
            }
        }
        None
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("mapdraw.toml"));
    paths.push(PathBuf::from(".mapdraw.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("mapdraw").join("config.toml"));
        paths.push(config_dir.join("mapdraw.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".mapdraw.toml"));
        paths.push(home.join(".config").join("mapdraw").join("config.toml"));
    }

    paths
}
