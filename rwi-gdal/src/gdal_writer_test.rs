//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::gdal_writer::{geometry_wkt, GdalRasterWriter, GdalVectorWriter};
use gdal::Dataset;
use rwi_core::core::feature::GeometryType;
use rwi_core::core::footprint::{footprints, FootprintStrategy};
use rwi_core::core::grid::GridSpec;
use rwi_core::core::raster::RasterGrid;
use rwi_core::core::sample::{Sample, SampleSet};
use rwi_core::output::{RasterWriter, VectorWriter};
use std::env;
use tile_grid::Extent;

fn samples() -> SampleSet {
    vec![
        Sample::new(0.0, 0.0, 1.0),
        Sample::new(0.05, 0.05, 2.0),
        Sample::new(0.025, 0.0, 3.0),
    ]
    .into()
}

#[test]
fn test_wkt() {
    assert_eq!(
        geometry_wkt(&GeometryType::Point { x: 7.5, y: 47.0 }),
        "POINT (7.5 47)"
    );
    let extent = Extent {
        minx: 0.0,
        miny: 1.0,
        maxx: 2.0,
        maxy: 3.0,
    };
    assert_eq!(
        geometry_wkt(&GeometryType::Box(extent)),
        "POLYGON ((0 1, 2 1, 2 3, 0 3, 0 1))"
    );
}

#[test]
fn test_write_gtiff() {
    let samples = samples();
    let grid = GridSpec::plan(&samples, 2400.0).unwrap();
    let raster = RasterGrid::assemble(&samples, grid);
    let writer = GdalRasterWriter::new("GTiff");
    assert_eq!(writer.extension(), "tif");

    let mut path = env::temp_dir();
    path.push("rwi_gdal_test.tif");
    writer.write_raster(&raster, &path).unwrap();

    let dataset = Dataset::open(&path).unwrap();
    assert_eq!(dataset.raster_size(), (3, 3));
    assert_eq!(dataset.raster_count(), 1);
    assert_eq!(dataset.geo_transform().unwrap(), raster.geotransform());
    let band = dataset.rasterband(1).unwrap();
    assert!(band.no_data_value().unwrap().is_nan());
    let buffer = band.read_as::<f64>((0, 0), (3, 3), (3, 3)).unwrap();
    assert_eq!(buffer.data[2], 2.0);
    assert_eq!(buffer.data[3], 3.0);
    assert_eq!(buffer.data[6], 1.0);
    assert!(buffer.data[0].is_nan());
}

#[test]
fn test_write_gpkg() {
    let boxes = footprints(&samples(), &FootprintStrategy::Tile { zoom: 14 });
    let writer = GdalVectorWriter::new("GPKG");
    assert_eq!(writer.extension(), "gpkg");

    let mut path = env::temp_dir();
    path.push("rwi_gdal_test.gpkg");
    writer
        .write_features(&boxes, "footprints", "rwi", &path)
        .unwrap();

    let dataset = Dataset::open(&path).unwrap();
    let mut layer = dataset.layer_by_name("footprints").unwrap();
    let values: Vec<f64> = layer
        .features()
        .map(|feat| feat.field("rwi").unwrap().unwrap().into_real().unwrap())
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}
