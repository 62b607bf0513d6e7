//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Single band raster assembled from samples

use crate::core::grid::GridSpec;
use crate::core::sample::SampleSet;

/// Spatial reference of all rasters (WGS84 lat/lon)
pub const RASTER_SRID: i32 = 4326;

/// Row-major raster of sample values, NaN marks cells without sample.
#[derive(Clone, Debug)]
pub struct RasterGrid {
    grid: GridSpec,
    data: Vec<f64>,
    collisions: usize,
}

impl RasterGrid {
    /// Write each sample value into its cell in input order.
    ///
    /// Samples falling into an already written cell replace its value.
    pub fn assemble(samples: &SampleSet, grid: GridSpec) -> RasterGrid {
        let mut data = vec![f64::NAN; grid.rows * grid.cols];
        let mut written = vec![false; data.len()];
        let mut collisions = 0;
        for sample in samples {
            let (row, col) = grid.cell_index(sample);
            let idx = row * grid.cols + col;
            if written[idx] {
                collisions += 1;
            }
            written[idx] = true;
            data[idx] = sample.value;
        }
        if collisions > 0 {
            debug!("{} samples replaced a previous cell value", collisions);
        }
        RasterGrid {
            grid,
            data,
            collisions,
        }
    }
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }
    pub fn rows(&self) -> usize {
        self.grid.rows
    }
    pub fn cols(&self) -> usize {
        self.grid.cols
    }
    /// Cell values, row by row from north to south
    pub fn data(&self) -> &[f64] {
        &self.data
    }
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.grid.rows && col < self.grid.cols {
            Some(self.data[row * self.grid.cols + col])
        } else {
            None
        }
    }
    pub fn nodata(&self) -> f64 {
        f64::NAN
    }
    pub fn srid(&self) -> i32 {
        RASTER_SRID
    }
    pub fn geotransform(&self) -> [f64; 6] {
        self.grid.geotransform()
    }
    /// Number of cells holding a sample value
    pub fn filled_cells(&self) -> usize {
        self.data.iter().filter(|v| !v.is_nan()).count()
    }
    /// Number of samples which overwrote an earlier sample
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
