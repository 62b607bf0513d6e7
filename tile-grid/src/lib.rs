//! A library for slippy map tile calculations
//!
//! ## Tiles and quadkeys
//!
//! ```rust
//! use tile_grid::Tile;
//!
//! let tile = Tile::from_lonlat(7.4474, 46.9480, 10);
//! assert_eq!((tile.x, tile.y, tile.z), (533, 360, 10));
//! assert_eq!(Tile::from_quadkey(&tile.quadkey()), Ok(tile));
//! ```
//!
//! ## Tile bounds
//!
//! ```rust
//! use tile_grid::{Extent, Tile};
//!
//! let extent = Tile::new(1, 0, 1).extent();
//! assert_eq!(extent.minx, 0.0);
//! assert_eq!(extent.maxx, 180.0);
//! ```

mod extent;
mod tile;

pub use extent::Extent;
pub use tile::{lonlat_to_merc, merc_to_lonlat, Tile, MAX_LATITUDE, MAX_ZOOM};
