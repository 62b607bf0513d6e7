//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! GeoTIFF output without GDAL

use crate::core::error::{ConvertError, Result};
use crate::core::raster::RasterGrid;
use crate::output::RasterWriter;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use tiff::encoder::colortype::Gray64Float;
use tiff::encoder::{DirectoryEncoder, TiffEncoder, TiffKind};
use tiff::tags::Tag;

// GeoKeys
const GT_MODEL_TYPE_GEO_KEY: u16 = 1024;
const GT_RASTER_TYPE_GEO_KEY: u16 = 1025;
const GEOGRAPHIC_TYPE_GEO_KEY: u16 = 2048;
const MODEL_TYPE_GEOGRAPHIC: u16 = 2;
const RASTER_PIXEL_IS_AREA: u16 = 1;

/// Single band Float64 GeoTIFF
#[derive(Clone, Debug, Default)]
pub struct GeoTiffWriter;

impl GeoTiffWriter {
    pub fn write_to<W: Write + Seek>(&self, raster: &RasterGrid, writer: W) -> Result<()> {
        if raster.rows() == 0 || raster.cols() == 0 {
            return Err(ConvertError::Output("Raster has zero dimensions".to_string()));
        }
        let mut encoder = TiffEncoder::new(writer)?;
        let mut image =
            encoder.new_image::<Gray64Float>(raster.cols() as u32, raster.rows() as u32)?;
        write_geotiff_tags(image.encoder(), raster)?;
        image.write_data(raster.data())?;
        Ok(())
    }
}

fn write_geotiff_tags<W: Write + Seek, K: TiffKind>(
    dir: &mut DirectoryEncoder<W, K>,
    raster: &RasterGrid,
) -> Result<()> {
    let grid = raster.grid();
    let pixel_scale = [grid.cell_size_lon, grid.cell_size_lat, 0.0];
    dir.write_tag(Tag::ModelPixelScaleTag, &pixel_scale[..])?;
    // pixel (0, 0) corner at the grid origin
    let tiepoint = [0.0, 0.0, 0.0, grid.origin_lon, grid.origin_lat, 0.0];
    dir.write_tag(Tag::ModelTiepointTag, &tiepoint[..])?;
    let geokeys: [u16; 16] = [
        1,
        1,
        0,
        3,
        GT_MODEL_TYPE_GEO_KEY,
        0,
        1,
        MODEL_TYPE_GEOGRAPHIC,
        GT_RASTER_TYPE_GEO_KEY,
        0,
        1,
        RASTER_PIXEL_IS_AREA,
        GEOGRAPHIC_TYPE_GEO_KEY,
        0,
        1,
        raster.srid() as u16,
    ];
    dir.write_tag(Tag::GeoKeyDirectoryTag, &geokeys[..])?;
    dir.write_tag(Tag::GdalNodata, "nan")?;
    Ok(())
}

impl RasterWriter for GeoTiffWriter {
    fn extension(&self) -> &str {
        "tif"
    }
    fn write_raster(&self, raster: &RasterGrid, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        self.write_to(raster, BufWriter::new(file))
    }
}
