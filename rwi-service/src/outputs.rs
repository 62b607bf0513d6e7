//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use rwi_core::core::error::Result;
use rwi_core::core::feature::Feature;
use rwi_core::core::raster::RasterGrid;
use rwi_core::output::{GeoJsonWriter, GeoTiffWriter, RasterWriter, VectorWriter};
#[cfg(feature = "with-gdal")]
use rwi_gdal::{GdalRasterWriter, GdalVectorWriter};
use std::path::Path;

#[derive(Clone, Debug)]
pub enum RasterOutput {
    GeoTiff(GeoTiffWriter),
    #[cfg(feature = "with-gdal")]
    Gdal(GdalRasterWriter),
}

impl RasterOutput {
    /// Built in writer for `GTiff`, GDAL driver otherwise
    pub fn from_driver(driver: &str) -> std::result::Result<RasterOutput, String> {
        match driver {
            "GTiff" => Ok(RasterOutput::GeoTiff(GeoTiffWriter)),
            #[cfg(feature = "with-gdal")]
            _ => Ok(RasterOutput::Gdal(GdalRasterWriter::new(driver))),
            #[cfg(not(feature = "with-gdal"))]
            _ => {
                debug!("raster driver: {}", driver);
                Err(format!(
                    "GDAL raster driver '{}' not supported in this build",
                    driver
                ))
            }
        }
    }
}

impl RasterWriter for RasterOutput {
    fn extension(&self) -> &str {
        match self {
            RasterOutput::GeoTiff(w) => w.extension(),
            #[cfg(feature = "with-gdal")]
            RasterOutput::Gdal(w) => w.extension(),
        }
    }
    fn write_raster(&self, raster: &RasterGrid, path: &Path) -> Result<()> {
        match self {
            RasterOutput::GeoTiff(w) => w.write_raster(raster, path),
            #[cfg(feature = "with-gdal")]
            RasterOutput::Gdal(w) => w.write_raster(raster, path),
        }
    }
}

#[derive(Clone, Debug)]
pub enum VectorOutput {
    GeoJson(GeoJsonWriter),
    #[cfg(feature = "with-gdal")]
    Gdal(GdalVectorWriter),
}

impl VectorOutput {
    /// Built in writer for `GeoJSON`, OGR driver otherwise
    pub fn from_driver(driver: &str) -> std::result::Result<VectorOutput, String> {
        match driver {
            "GeoJSON" => Ok(VectorOutput::GeoJson(GeoJsonWriter)),
            #[cfg(feature = "with-gdal")]
            _ => Ok(VectorOutput::Gdal(GdalVectorWriter::new(driver))),
            #[cfg(not(feature = "with-gdal"))]
            _ => {
                debug!("vector driver: {}", driver);
                Err(format!(
                    "GDAL vector driver '{}' not supported in this build",
                    driver
                ))
            }
        }
    }
}

impl VectorWriter for VectorOutput {
    fn extension(&self) -> &str {
        match self {
            VectorOutput::GeoJson(w) => w.extension(),
            #[cfg(feature = "with-gdal")]
            VectorOutput::Gdal(w) => w.extension(),
        }
    }
    fn write_features<F: Feature>(
        &self,
        features: &[F],
        layer_name: &str,
        attribute: &str,
        path: &Path,
    ) -> Result<()> {
        match self {
            VectorOutput::GeoJson(w) => w.write_features(features, layer_name, attribute, path),
            #[cfg(feature = "with-gdal")]
            VectorOutput::Gdal(w) => w.write_features(features, layer_name, attribute, path),
        }
    }
}
