//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Regular lat/lon grids derived from sample sets

use crate::core::error::{ConvertError, Result};
use crate::core::geodesy::{meters_to_latitude, meters_to_longitude};
use crate::core::sample::{Sample, SampleSet};
use tile_grid::Extent;

/// Default cell size in meters
pub const DEFAULT_CELL_SIZE: f64 = 2400.0;

/// Grid covering all samples of a set with a half cell margin.
///
/// Row 0 is the northernmost row, column 0 the westernmost column.
#[derive(PartialEq, Clone, Debug)]
pub struct GridSpec {
    /// Cell width in degrees
    pub cell_size_lon: f64,
    /// Cell height in degrees
    pub cell_size_lat: f64,
    /// West edge of the grid
    pub origin_lon: f64,
    /// North edge of the grid
    pub origin_lat: f64,
    pub rows: usize,
    pub cols: usize,
    /// Bounding box of the samples (x: longitude, y: latitude)
    pub sample_extent: Extent,
}

impl GridSpec {
    /// Plan a grid with cells of `cell_size` meters.
    ///
    /// The cell width is computed at the mean latitude of all samples.
    pub fn plan(samples: &SampleSet, cell_size: f64) -> Result<GridSpec> {
        let (extent, mean_lat) = match (samples.extent(), samples.mean_latitude()) {
            (Some(extent), Some(mean_lat)) => (extent, mean_lat),
            _ => return Err(ConvertError::EmptyInput),
        };
        let cell_size_lon = meters_to_longitude(cell_size, mean_lat);
        let cell_size_lat = meters_to_latitude(cell_size);

        let span_lat = extent.height().abs();
        let span_lon = extent.width().abs();
        if span_lat == 0.0 || span_lon == 0.0 {
            warn!(
                "Degenerate sample extent ({} x {} degrees), using a single row or column",
                span_lon, span_lat
            );
        }
        let rows = (span_lat / cell_size_lat).round_ties_even() as usize + 1;
        let cols = (span_lon / cell_size_lon).round_ties_even() as usize + 1;

        let grid = GridSpec {
            cell_size_lon,
            cell_size_lat,
            origin_lon: extent.minx - cell_size_lon * 0.5,
            origin_lat: extent.maxy + cell_size_lat * 0.5,
            rows,
            cols,
            sample_extent: extent,
        };
        debug!(
            "grid {}x{} cells of {:.6}x{:.6} degrees at ({:.6}, {:.6})",
            grid.rows, grid.cols, grid.cell_size_lon, grid.cell_size_lat, grid.origin_lon, grid.origin_lat
        );
        Ok(grid)
    }

    /// (row, col) of the cell a sample is assigned to.
    ///
    /// Positions are interpolated linearly over the sample extent, not divided by the cell size.
    pub fn cell_index(&self, sample: &Sample) -> (usize, usize) {
        let ext = &self.sample_extent;
        let row = scaled_index(
            (sample.latitude - ext.miny).abs(),
            ext.height().abs(),
            self.rows,
        );
        let col = scaled_index(
            (sample.longitude - ext.minx).abs(),
            ext.width().abs(),
            self.cols,
        );
        // raster rows run from north to south
        (self.rows - row - 1, col)
    }

    /// GDAL geotransform (north up)
    pub fn geotransform(&self) -> [f64; 6] {
        [
            self.origin_lon,
            self.cell_size_lon,
            0.0,
            self.origin_lat,
            0.0,
            -self.cell_size_lat,
        ]
    }

    /// Outer bounds of the grid cells
    pub fn bounds(&self) -> Extent {
        Extent {
            minx: self.origin_lon,
            miny: self.origin_lat - self.rows as f64 * self.cell_size_lat,
            maxx: self.origin_lon + self.cols as f64 * self.cell_size_lon,
            maxy: self.origin_lat,
        }
    }
}

/// Nearest of `count` evenly spaced positions over `span`
fn scaled_index(offset: f64, span: f64, count: usize) -> usize {
    if span == 0.0 {
        return 0;
    }
    let idx = ((count - 1) as f64 * offset / span).round_ties_even();
    (idx.max(0.0) as usize).min(count - 1)
}
