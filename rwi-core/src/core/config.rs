//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::footprint::{DEFAULT_FOOTPRINT_SIZE, DEFAULT_TILE_ZOOM};
use crate::core::grid::DEFAULT_CELL_SIZE;
use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub input: InputCfg,
    pub output: OutputCfg,
    #[serde(default)]
    pub raster: RasterCfg,
    #[serde(default)]
    pub footprint: FootprintCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InputCfg {
    /// Directory with CSV files
    pub dir: String,
    /// Column holding the sample value
    #[serde(default = "default_value_field")]
    pub value_field: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputCfg {
    pub dir: String,
    /// Raster driver name (GTiff built in, others require GDAL)
    #[serde(default = "default_raster_driver")]
    pub raster_driver: String,
    /// Vector driver name (GeoJSON built in, others require GDAL)
    #[serde(default = "default_vector_driver")]
    pub vector_driver: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RasterCfg {
    /// Cell size in meters
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
}

impl Default for RasterCfg {
    fn default() -> Self {
        RasterCfg {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct FootprintCfg {
    /// metric | tile
    #[serde(default = "default_strategy")]
    pub strategy: String,
    /// Box size in meters (metric strategy)
    #[serde(default = "default_footprint_size")]
    pub size: f64,
    /// Tile zoom level (tile strategy)
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Write sample points in addition to footprints
    #[serde(default)]
    pub points: bool,
}

impl Default for FootprintCfg {
    fn default() -> Self {
        FootprintCfg {
            strategy: default_strategy(),
            size: DEFAULT_FOOTPRINT_SIZE,
            zoom: DEFAULT_TILE_ZOOM,
            points: false,
        }
    }
}

pub const DEFAULT_VALUE_FIELD: &str = "rwi";

pub fn default_value_field() -> String {
    DEFAULT_VALUE_FIELD.to_string()
}

pub fn default_raster_driver() -> String {
    "GTiff".to_string()
}

pub fn default_vector_driver() -> String {
    "GeoJSON".to_string()
}

pub fn default_cell_size() -> f64 {
    DEFAULT_CELL_SIZE
}

pub fn default_strategy() -> String {
    "metric".to_string()
}

pub fn default_footprint_size() -> f64 {
    DEFAULT_FOOTPRINT_SIZE
}

pub fn default_zoom() -> u8 {
    DEFAULT_TILE_ZOOM
}

pub const DEFAULT_CONFIG: &'static str = r#"
[input]
dir = "relative-wealth-index-april-2021"
value_field = "rwi"

[output]
dir = "relative-wealth-index-april-2021-geotiff"
raster_driver = "GTiff"
vector_driver = "GeoJSON"

[raster]
# Cell size in meters
cell_size = 2400.0

[footprint]
# metric: box of `size` meters, tile: bounds of the zoom level `zoom` tile
strategy = "metric"
size = 2400.0
zoom = 14
points = false
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| match e.source() {
        Some(source) => format!("Template error: {}", source),
        None => format!("Template error: {}", e),
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
