//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{parse_config, read_config, ApplicationCfg, FootprintCfg, DEFAULT_CONFIG};
use crate::core::footprint::FootprintStrategy;
use crate::core::Config;

#[test]
fn test_default_config() {
    let config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "").unwrap();
    assert_eq!(config.input.dir, "relative-wealth-index-april-2021");
    assert_eq!(config.input.value_field, "rwi");
    assert_eq!(config.output.raster_driver, "GTiff");
    assert_eq!(config.output.vector_driver, "GeoJSON");
    assert_eq!(config.raster.cell_size, 2400.0);
    assert_eq!(config.footprint.strategy, "metric");
    assert_eq!(config.footprint.zoom, 14);
    assert!(!config.footprint.points);
}

#[test]
fn test_minimal_config() {
    let toml = r#"
        [input]
        dir = "in"

        [output]
        dir = "out"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.input.value_field, "rwi");
    assert_eq!(config.output.dir, "out");
    assert_eq!(config.raster.cell_size, 2400.0);
    assert_eq!(config.footprint.size, 2400.0);
    assert_eq!(config.footprint.zoom, 14);
}

#[test]
fn test_env_template() {
    std::env::set_var("RWI_TEST_INPUT_DIR", "/data/rwi");
    let toml = r#"
        [input]
        dir = "{{ env.RWI_TEST_INPUT_DIR }}"

        [output]
        dir = "out"
        "#;
    let config: ApplicationCfg = parse_config(toml.to_string(), "").unwrap();
    assert_eq!(config.input.dir, "/data/rwi");

    let toml = r#"
        [input]
        dir = "${RWI_TEST_INPUT_DIR}"
        "#;
    let config: Result<ApplicationCfg, _> = parse_config(toml.to_string(), "");
    assert_eq!(
        config.err(),
        Some("Replace environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string())
    );
}

#[test]
fn test_parse_error() {
    let config: Result<ApplicationCfg, _> = read_config("src/core/mod.rs");
    assert!(config.err().unwrap().starts_with("src/core/mod.rs - "));

    let config: Result<ApplicationCfg, _> = read_config("wrongfile");
    assert_eq!("Could not find config file!", config.err().unwrap());

    let config: Result<ApplicationCfg, _> = parse_config("[input]\ndir = \"in\"\n".to_string(), "");
    assert!(config.err().unwrap().contains("missing field `output`"));
}

#[test]
fn test_footprint_strategy() {
    let mut cfg = FootprintCfg::default();
    assert_eq!(
        FootprintStrategy::from_config(&cfg),
        Ok(FootprintStrategy::MetricBox { size: 2400.0 })
    );
    cfg.strategy = "Tile".to_string();
    cfg.zoom = 12;
    assert_eq!(
        FootprintStrategy::from_config(&cfg),
        Ok(FootprintStrategy::Tile { zoom: 12 })
    );
    cfg.zoom = 31;
    assert_eq!(
        FootprintStrategy::from_config(&cfg),
        Err("Invalid zoom level 31 (maximum 30)".to_string())
    );
    cfg.strategy = "metric".to_string();
    cfg.size = -5.0;
    assert_eq!(
        FootprintStrategy::from_config(&cfg),
        Err("Invalid footprint size -5".to_string())
    );
    cfg.strategy = "hexagon".to_string();
    assert_eq!(
        FootprintStrategy::from_config(&cfg),
        Err("Unknown footprint strategy 'hexagon'".to_string())
    );

    let toml = FootprintStrategy::gen_config();
    let parsed: toml::Value = toml.parse().unwrap();
    assert_eq!(parsed["footprint"]["strategy"].as_str(), Some("metric"));
}
