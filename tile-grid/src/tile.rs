//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Slippy map tiles (XYZ adressing scheme) and quadkeys

use crate::extent::Extent;
use std::f64::consts;
use std::fmt;

/// Earth radius of the spherical mercator projection
const EARTH_RADIUS: f64 = 6378137.0;
/// Half of the mercator extent in meters
const MERC_MAX: f64 = 20037508.3427892480;
/// Latitude limit of the spherical mercator projection
pub const MAX_LATITUDE: f64 = 85.0511287798066;
/// Highest zoom level representable with u32 tile indices and quadkeys
pub const MAX_ZOOM: u8 = 30;

/// Tile in XYZ adressing scheme (y = 0 is the northernmost row)
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl Tile {
    /// Zoom levels above `MAX_ZOOM` are clamped
    pub fn new(x: u32, y: u32, z: u8) -> Tile {
        Tile {
            x,
            y,
            z: z.min(MAX_ZOOM),
        }
    }

    /// Number of tiles along one axis at zoom level
    fn dim(zoom: u8) -> f64 {
        (1u64 << zoom.min(MAX_ZOOM)) as f64
    }

    /// Tile containing a WGS84 position.
    ///
    /// Positions outside the mercator domain are clamped to the nearest valid tile,
    /// points on the right or bottom edge belong to the last tile.
    pub fn from_lonlat(lon: f64, lat: f64, zoom: u8) -> Tile {
        let zoom = zoom.min(MAX_ZOOM);
        let n = Tile::dim(zoom);
        let lon = lon.max(-180.0).min(180.0);
        let lat = lat.max(-MAX_LATITUDE).min(MAX_LATITUDE);
        let (mx, my) = lonlat_to_merc(lon, lat);
        let fx = (mx + MERC_MAX) / (2.0 * MERC_MAX) * n;
        let fy = (MERC_MAX - my) / (2.0 * MERC_MAX) * n;
        let clamp = |v: f64| v.floor().max(0.0).min(n - 1.0) as u32;
        Tile {
            x: clamp(fx),
            y: clamp(fy),
            z: zoom,
        }
    }

    /// Bing maps quadkey
    pub fn quadkey(&self) -> String {
        let mut key = String::with_capacity(self.z as usize);
        for level in (1..=self.z.min(MAX_ZOOM)).rev() {
            let mask = 1u32 << (level - 1);
            let mut digit = b'0';
            if self.x & mask != 0 {
                digit += 1;
            }
            if self.y & mask != 0 {
                digit += 2;
            }
            key.push(digit as char);
        }
        key
    }

    /// Tile from Bing maps quadkey
    pub fn from_quadkey(quadkey: &str) -> Result<Tile, String> {
        if quadkey.len() > MAX_ZOOM as usize {
            return Err(format!(
                "Quadkey '{}' exceeds maximum zoom level {}",
                quadkey, MAX_ZOOM
            ));
        }
        let (mut x, mut y) = (0u32, 0u32);
        for ch in quadkey.chars() {
            x <<= 1;
            y <<= 1;
            match ch {
                '0' => {}
                '1' => x |= 1,
                '2' => y |= 1,
                '3' => {
                    x |= 1;
                    y |= 1;
                }
                _ => return Err(format!("Invalid quadkey digit '{}' in '{}'", ch, quadkey)),
            }
        }
        Ok(Tile {
            x,
            y,
            z: quadkey.len() as u8,
        })
    }

    /// Extent of the tile in WGS84 degrees
    pub fn extent(&self) -> Extent {
        let n = Tile::dim(self.z);
        let minx = self.x as f64 / n * 360.0 - 180.0;
        let maxx = (self.x as f64 + 1.0) / n * 360.0 - 180.0;
        let merc_top = MERC_MAX - self.y as f64 / n * 2.0 * MERC_MAX;
        let merc_bottom = MERC_MAX - (self.y as f64 + 1.0) / n * 2.0 * MERC_MAX;
        let (_, maxy) = merc_to_lonlat(0.0, merc_top);
        let (_, miny) = merc_to_lonlat(0.0, merc_bottom);
        Extent {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Returns the Spherical Mercator (x, y) in meters
pub fn lonlat_to_merc(lon: f64, lat: f64) -> (f64, f64) {
    let x = EARTH_RADIUS * lon.to_radians();
    let y = EARTH_RADIUS * ((consts::PI * 0.25) + (0.5 * lat.to_radians())).tan().ln();
    (x, y)
}

/// Returns WGS84 (lon, lat) of a Spherical Mercator position
pub fn merc_to_lonlat(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - consts::FRAC_PI_2).to_degrees();
    (lon, lat)
}
