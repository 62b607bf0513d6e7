//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use gdal::errors::GdalError;
use gdal::raster::Buffer;
use gdal::spatial_ref::SpatialRef;
use gdal::vector::{FieldValue, Geometry};
use gdal::Driver;
use gdal_sys::{OGRFieldType, OGRwkbGeometryType};
use rwi_core::core::error::{ConvertError, Result};
use rwi_core::core::feature::{Feature, GeometryType};
use rwi_core::core::raster::RasterGrid;
use rwi_core::output::{RasterWriter, VectorWriter};
use std::path::Path;
use tile_grid::Extent;

fn gdal_err(err: GdalError) -> ConvertError {
    ConvertError::Output(format!("GDAL: {}", err))
}

fn driver_extension(driver: &str) -> &str {
    match driver {
        "GTiff" | "COG" => "tif",
        "GPKG" => "gpkg",
        "ESRI Shapefile" => "shp",
        "GeoJSON" => "geojson",
        "FlatGeobuf" => "fgb",
        "netCDF" => "nc",
        "AAIGrid" => "asc",
        "HFA" => "img",
        "CSV" => "csv",
        _ => "dat",
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| ConvertError::Output(format!("Invalid path {}", path.display())))
}

fn wgs84() -> Result<SpatialRef> {
    SpatialRef::from_epsg(4326).map_err(gdal_err)
}

/// Raster output through a GDAL raster driver
#[derive(Clone, Debug)]
pub struct GdalRasterWriter {
    pub driver: String,
}

impl GdalRasterWriter {
    pub fn new(driver: &str) -> GdalRasterWriter {
        GdalRasterWriter {
            driver: driver.to_string(),
        }
    }
}

impl RasterWriter for GdalRasterWriter {
    fn extension(&self) -> &str {
        driver_extension(&self.driver)
    }
    fn write_raster(&self, raster: &RasterGrid, path: &Path) -> Result<()> {
        let driver = Driver::get(&self.driver).map_err(gdal_err)?;
        let (cols, rows) = (raster.cols(), raster.rows());
        debug!("{}: creating {}x{} {} raster", path.display(), rows, cols, self.driver);
        let mut dataset = driver
            .create_with_band_type::<f64>(path_str(path)?, cols as isize, rows as isize, 1)
            .map_err(gdal_err)?;
        dataset
            .set_geo_transform(&raster.geotransform())
            .map_err(gdal_err)?;
        let wkt = wgs84()?.to_wkt().map_err(gdal_err)?;
        dataset.set_projection(&wkt).map_err(gdal_err)?;
        let mut band = dataset.rasterband(1).map_err(gdal_err)?;
        band.set_no_data_value(raster.nodata()).map_err(gdal_err)?;
        let buffer = Buffer::new((cols, rows), raster.data().to_vec());
        band.write((0, 0), (cols, rows), &buffer).map_err(gdal_err)?;
        Ok(())
    }
}

/// Vector output through an OGR driver
#[derive(Clone, Debug)]
pub struct GdalVectorWriter {
    pub driver: String,
}

impl GdalVectorWriter {
    pub fn new(driver: &str) -> GdalVectorWriter {
        GdalVectorWriter {
            driver: driver.to_string(),
        }
    }
}

fn ring_wkt(extent: &Extent) -> String {
    let coords: Vec<String> = extent
        .ring()
        .iter()
        .map(|(x, y)| format!("{} {}", x, y))
        .collect();
    format!("POLYGON (({}))", coords.join(", "))
}

pub(crate) fn geometry_wkt(geometry: &GeometryType) -> String {
    match geometry {
        GeometryType::Point { x, y } => format!("POINT ({} {})", x, y),
        GeometryType::Box(extent) => ring_wkt(extent),
    }
}

fn ogr_type(geometry: Option<&GeometryType>) -> OGRwkbGeometryType::Type {
    match geometry {
        Some(GeometryType::Point { .. }) => OGRwkbGeometryType::wkbPoint,
        Some(GeometryType::Box(_)) => OGRwkbGeometryType::wkbPolygon,
        None => OGRwkbGeometryType::wkbUnknown,
    }
}

impl VectorWriter for GdalVectorWriter {
    fn extension(&self) -> &str {
        driver_extension(&self.driver)
    }
    fn write_features<F: Feature>(
        &self,
        features: &[F],
        layer_name: &str,
        attribute: &str,
        path: &Path,
    ) -> Result<()> {
        let driver = Driver::get(&self.driver).map_err(gdal_err)?;
        // OGR drivers refuse to overwrite existing datasets
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        let mut dataset = driver
            .create_vector_only(path_str(path)?)
            .map_err(gdal_err)?;
        let srs = wgs84()?;
        let geom_type = ogr_type(features.first().map(|f| f.geometry()).as_ref());
        let mut layer = dataset
            .create_layer_ext(layer_name, Some(&srs), geom_type)
            .map_err(gdal_err)?;
        layer
            .create_defn_fields(&[(attribute, OGRFieldType::OFTReal)])
            .map_err(gdal_err)?;
        for feat in features {
            let geometry = Geometry::from_wkt(&geometry_wkt(&feat.geometry())).map_err(gdal_err)?;
            layer
                .create_feature_fields(geometry, &[attribute], &[FieldValue::RealValue(feat.value())])
                .map_err(gdal_err)?;
        }
        debug!("{}: {} features written to layer `{}`", path.display(), features.len(), layer_name);
        Ok(())
    }
}
