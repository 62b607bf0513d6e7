//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Per-sample footprint polygons

use crate::core::config::{Config, FootprintCfg};
use crate::core::geodesy::{meters_to_latitude, meters_to_longitude};
use crate::core::sample::{Sample, SampleSet};
use tile_grid::{Extent, Tile, MAX_ZOOM};

pub const DEFAULT_FOOTPRINT_SIZE: f64 = 2400.0;
pub const DEFAULT_TILE_ZOOM: u8 = 14;

/// Footprint of a sample value
#[derive(PartialEq, Clone, Debug)]
pub struct Footprint {
    pub bounds: Extent,
    pub value: f64,
}

#[derive(PartialEq, Clone, Debug)]
pub enum FootprintStrategy {
    /// Box of `size` meters centered on the sample
    MetricBox { size: f64 },
    /// Bounds of the slippy map tile containing the sample
    Tile { zoom: u8 },
}

impl FootprintStrategy {
    pub fn footprint(&self, sample: &Sample) -> Footprint {
        let bounds = match *self {
            FootprintStrategy::MetricBox { size } => metric_box(sample, size),
            FootprintStrategy::Tile { zoom } => tile_box(sample, zoom),
        };
        Footprint {
            bounds,
            value: sample.value,
        }
    }
}

impl<'a> Config<'a, FootprintCfg> for FootprintStrategy {
    fn from_config(cfg: &FootprintCfg) -> Result<Self, String> {
        match cfg.strategy.to_lowercase().as_str() {
            "metric" => {
                if !(cfg.size.is_finite() && cfg.size > 0.0) {
                    return Err(format!("Invalid footprint size {}", cfg.size));
                }
                Ok(FootprintStrategy::MetricBox { size: cfg.size })
            }
            "tile" => {
                if cfg.zoom > MAX_ZOOM {
                    return Err(format!(
                        "Invalid zoom level {} (maximum {})",
                        cfg.zoom, MAX_ZOOM
                    ));
                }
                Ok(FootprintStrategy::Tile { zoom: cfg.zoom })
            }
            _ => Err(format!("Unknown footprint strategy '{}'", cfg.strategy)),
        }
    }
    fn gen_config() -> String {
        let toml = r#"
[footprint]
# metric: box of `size` meters, tile: bounds of the zoom level `zoom` tile
strategy = "metric"
size = 2400.0
zoom = 14
"#;
        toml.to_string()
    }
}

/// One footprint per sample in input order
pub fn footprints(samples: &SampleSet, strategy: &FootprintStrategy) -> Vec<Footprint> {
    samples.iter().map(|s| strategy.footprint(s)).collect()
}

/// Box of `size` meters, the width computed at the latitude of the sample
pub fn metric_box(sample: &Sample, size: f64) -> Extent {
    Extent::centered(
        sample.longitude,
        sample.latitude,
        meters_to_longitude(size, sample.latitude),
        meters_to_latitude(size),
    )
}

/// Bounds of the tile at `zoom` containing the sample
pub fn tile_box(sample: &Sample, zoom: u8) -> Extent {
    let tile = Tile::from_lonlat(sample.longitude, sample.latitude, zoom);
    trace!("sample ({}, {}) in tile {}", sample.longitude, sample.latitude, tile.quadkey());
    tile.extent()
}
