//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::convert_service::{ConvertMode, ConvertService};
use crate::outputs::{RasterOutput, VectorOutput};
use rwi_core::core::config::{ApplicationCfg, DEFAULT_CONFIG};
use rwi_core::core::footprint::FootprintStrategy;
use rwi_core::core::{parse_config, read_config, Config};
use std::env;
use std::fs;
use std::path::PathBuf;

fn test_service(output: &str) -> ConvertService {
    let mut dir = env::temp_dir();
    dir.push(output);
    let _ = fs::remove_dir_all(&dir);
    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    config.input.dir = "src/test/data".to_string();
    config.output.dir = dir.to_str().unwrap().to_string();
    ConvertService::from_config(&config).unwrap()
}

#[test]
fn test_from_config() {
    let config: ApplicationCfg = read_config("src/test/example.toml").unwrap();
    let service = ConvertService::from_config(&config).unwrap();
    assert_eq!(service.input_dir, PathBuf::from("src/test/data"));
    assert_eq!(service.cell_size, 1200.0);
    assert_eq!(service.footprint, FootprintStrategy::Tile { zoom: 12 });
    assert!(service.write_points);
    match service.raster_output {
        RasterOutput::GeoTiff(_) => {}
        #[cfg(feature = "with-gdal")]
        _ => panic!("GeoTIFF writer expected"),
    }
    match service.vector_output {
        VectorOutput::GeoJson(_) => {}
        #[cfg(feature = "with-gdal")]
        _ => panic!("GeoJSON writer expected"),
    }
}

#[test]
fn test_invalid_config() {
    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    config.raster.cell_size = -1.0;
    assert_eq!(
        ConvertService::from_config(&config).err(),
        Some("Invalid cell size -1".to_string())
    );

    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    config.input.value_field = " ".to_string();
    assert_eq!(
        ConvertService::from_config(&config).err(),
        Some("Empty value field name".to_string())
    );

    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    config.footprint.strategy = "hexagon".to_string();
    assert_eq!(
        ConvertService::from_config(&config).err(),
        Some("Unknown footprint strategy 'hexagon'".to_string())
    );
}

#[test]
#[cfg(not(feature = "with-gdal"))]
fn test_unsupported_driver() {
    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    config.output.vector_driver = "GPKG".to_string();
    assert_eq!(
        ConvertService::from_config(&config).err(),
        Some("GDAL vector driver 'GPKG' not supported in this build".to_string())
    );
}

#[test]
fn test_gen_config() {
    let toml = ConvertService::gen_config();
    assert!(toml.contains("[input]"));
    assert!(toml.contains("[footprint]"));
    let config: ApplicationCfg = parse_config(toml, "").unwrap();
    assert_eq!(config.output.raster_driver, "GTiff");
    assert_eq!(config.raster.cell_size, 2400.0);
    assert!(!config.footprint.points);
    assert!(ConvertService::from_config(&config).is_ok());
}

#[test]
fn test_sources() {
    let service = test_service("rwi_sources");
    let names: Vec<String> = service
        .sources()
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["bern.csv", "empty.csv", "malformed.csv"]);
}

#[test]
fn test_raster_batch() {
    let service = test_service("rwi_raster_batch");
    let report = service.run(ConvertMode::Raster, false).unwrap();

    assert_eq!(report.converted.len(), 1);
    let bern = &report.converted[0];
    assert_eq!(bern.source, "bern.csv");
    assert_eq!(bern.samples, 4);
    assert_eq!(bern.raster_size, Some((4, 3)));
    // two samples share a cell
    assert_eq!(bern.filled_cells, Some(3));
    assert_eq!(bern.stats.min, -0.12);
    assert_eq!(bern.stats.max, 1.021);
    assert_eq!(bern.outputs, vec![service.output_dir.join("bern.tif")]);
    assert!(service.output_dir.join("bern.tif").exists());

    assert!(report.has_failures());
    assert_eq!(
        report.failed,
        vec![
            ("empty.csv".to_string(), "no samples found".to_string()),
            (
                "malformed.csv".to_string(),
                "line 3: invalid latitude value 'north'".to_string()
            ),
        ]
    );
    assert!(!service.output_dir.join("empty.tif").exists());
    assert!(!service.output_dir.join("malformed.tif").exists());
}

#[test]
fn test_footprint_batch() {
    let mut service = test_service("rwi_footprint_batch");
    service.write_points = true;
    let report = service.run(ConvertMode::Footprints, false).unwrap();

    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.failed.len(), 2);
    let bern = &report.converted[0];
    assert_eq!(bern.raster_size, None);
    let points = service.output_dir.join("bern_points.geojson");
    let footprints = service.output_dir.join("bern_footprints.geojson");
    assert_eq!(bern.outputs, vec![points.clone(), footprints.clone()]);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&footprints).unwrap()).unwrap();
    let features = json["features"].as_array().unwrap();
    assert_eq!(features.len(), 4);
    assert_eq!(features[0]["geometry"]["type"], "Polygon");
    assert_eq!(features[1]["properties"]["rwi"], 1.021);

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&points).unwrap()).unwrap();
    assert_eq!(json["features"][2]["geometry"]["type"], "Point");
}

#[test]
fn test_convert_single_source() {
    let service = test_service("rwi_single_source");
    fs::create_dir_all(&service.output_dir).unwrap();
    let report = service
        .convert_source(ConvertMode::Raster, &PathBuf::from("src/test/data/bern.csv"))
        .unwrap();
    assert_eq!(report.samples, 4);
    assert!(service
        .convert_source(ConvertMode::Raster, &PathBuf::from("src/test/data/missing.csv"))
        .is_err());
}
