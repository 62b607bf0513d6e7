//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Configuration from command line arguments

use crate::convert_service::ConvertService;
use clap::ArgMatches;
use rwi_core::core::config::DEFAULT_CONFIG;
use rwi_core::core::{parse_config, read_config, ApplicationCfg, Config};
use std::str::FromStr;

const OVERRIDE_ARGS: [&str; 10] = [
    "input",
    "output",
    "value-field",
    "cell-size",
    "size",
    "strategy",
    "zoom",
    "points",
    "raster-driver",
    "vector-driver",
];

fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match args.value_of(name) {
        Some(s) => s
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Error parsing '{}' value '{}'", name, s)),
        None => Ok(None),
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<ApplicationCfg, String> {
    if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        for argname in OVERRIDE_ARGS.iter() {
            if args.value_of(argname).is_some() {
                warn!("Ignoring argument `{}`", argname);
            }
        }
        read_config(cfgpath)
    } else {
        let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "")?;
        if let Some(dir) = args.value_of("input") {
            config.input.dir = dir.to_string();
        }
        if let Some(dir) = args.value_of("output") {
            config.output.dir = dir.to_string();
        }
        if let Some(field) = args.value_of("value-field") {
            config.input.value_field = field.to_string();
        }
        if let Some(cell_size) = parse_arg(args, "cell-size")? {
            config.raster.cell_size = cell_size;
        }
        if let Some(size) = parse_arg(args, "size")? {
            config.footprint.size = size;
        }
        if let Some(strategy) = args.value_of("strategy") {
            config.footprint.strategy = strategy.to_string();
        }
        if let Some(zoom) = parse_arg(args, "zoom")? {
            config.footprint.zoom = zoom;
        }
        if let Some(points) = parse_arg(args, "points")? {
            config.footprint.points = points;
        }
        if let Some(driver) = args.value_of("raster-driver") {
            config.output.raster_driver = driver.to_string();
        }
        if let Some(driver) = args.value_of("vector-driver") {
            config.output.vector_driver = driver.to_string();
        }
        Ok(config)
    }
}

pub fn service_from_config(config: &ApplicationCfg) -> Result<ConvertService, String> {
    let service = ConvertService::from_config(config)?;
    debug!(
        "input '{}' output '{}' cell size {} footprint {:?}",
        service.input_dir.display(),
        service.output_dir.display(),
        service.cell_size,
        service.footprint
    );
    Ok(service)
}
