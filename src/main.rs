//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use rwi_core::core::Config;
use rwi_service::{ConvertMode, ConvertService};
use std::env;
use std::io::{self, Write};
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap_or_default(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log = match (args.value_of("loglevel"), env::var("RUST_LOG")) {
        (None, Ok(rust_log_env)) => rust_log_env,
        (loglevel, _) => loglevel.unwrap_or("info").to_string(),
    };
    builder.parse_filters(&rust_log);

    builder.init();
}

fn convert(args: &ArgMatches<'_>, mode: ConvertMode) {
    let service = rwi_service::config_from_args(args)
        .and_then(|config| rwi_service::service_from_config(&config))
        .unwrap_or_else(|err| {
            println!("Error reading configuration - {} ", err);
            process::exit(1)
        });
    let progress = args.value_of("progress").map_or(false, |s| {
        s.parse::<bool>().unwrap_or_else(|_| {
            println!("Error parsing 'progress' as boolean value");
            process::exit(1)
        })
    });
    match service.run(mode, progress) {
        Ok(report) => {
            if let Err(err) = report.write_csv(io::stdout()) {
                error!("Error writing report - {}", err);
            }
            if report.has_failures() {
                error!(
                    "{} of {} sources failed",
                    report.failed.len(),
                    report.failed.len() + report.converted.len()
                );
                process::exit(1);
            }
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

#[cfg(feature = "with-gdal")]
extern crate rwi_gdal;

fn version_info() -> String {
    #[cfg(feature = "with-gdal")]
    let version = format!(
        "{} (GDAL version {})",
        crate_version!(),
        rwi_gdal::gdal_version()
    );
    #[cfg(not(feature = "with-gdal"))]
    let version = crate_version!().to_string();
    version
}

const SOURCE_ARGS: &str = "-c, --config=[FILE] 'Load from custom config file'
                           --input=[DIR] 'Directory with CSV files (Default: relative-wealth-index-april-2021)'
                           --output=[DIR] 'Output directory'
                           --value-field=[NAME] 'Column with sample values (Default: rwi)'
                           --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'
                           --progress=[true|false] 'Show progress bar'";

fn main() {
    dotenv().ok();
    let version_info = version_info();
    let mut app = App::new("rwi_grid")
        .version(&version_info as &str)
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("convert geocoded point samples into rasters and footprint layers")
        .subcommand(SubCommand::with_name("raster")
                        .args_from_usage(SOURCE_ARGS)
                        .args_from_usage("--cell-size=[METERS] 'Raster cell size (Default: 2400)'
                                              --raster-driver=[DRIVER] 'Raster output driver (Default: GTiff)'")
                        .about("Write one WGS84 raster per CSV file"))
        .subcommand(SubCommand::with_name("footprints")
                        .args_from_usage(SOURCE_ARGS)
                        .args_from_usage("--strategy=[metric|tile] 'Footprint strategy (Default: metric)'
                                              --size=[METERS] 'Footprint size of metric strategy (Default: 2400)'
                                              --zoom=[LEVEL] 'Tile zoom level of tile strategy (Default: 14)'
                                              --points=[true|false] 'Write sample points layer'
                                              --vector-driver=[DRIVER] 'Vector output driver (Default: GeoJSON)'")
                        .about("Write one footprint polygon layer per CSV file"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("raster", Some(sub_m)) => {
                init_logger(sub_m);
                convert(sub_m, ConvertMode::Raster);
            }
            ("footprints", Some(sub_m)) => {
                init_logger(sub_m);
                convert(sub_m, ConvertMode::Footprints);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", ConvertService::gen_config());
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
