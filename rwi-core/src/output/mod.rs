//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Raster and vector writers

mod geojson;
mod geotiff;

pub use self::geojson::GeoJsonWriter;
pub use self::geotiff::GeoTiffWriter;

use crate::core::error::Result;
use crate::core::feature::Feature;
use crate::core::raster::RasterGrid;
use std::path::Path;

pub trait RasterWriter {
    /// File extension of written rasters
    fn extension(&self) -> &str;
    /// Write a single band raster with geotransform, WGS84 reference and NaN nodata
    fn write_raster(&self, raster: &RasterGrid, path: &Path) -> Result<()>;
}

pub trait VectorWriter {
    /// File extension of written layers
    fn extension(&self) -> &str;
    /// Write a single WGS84 layer with the feature value as attribute `attribute`
    fn write_features<F: Feature>(
        &self,
        features: &[F],
        layer_name: &str,
        attribute: &str,
        path: &Path,
    ) -> Result<()>;
}
