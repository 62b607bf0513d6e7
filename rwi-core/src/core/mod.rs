//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod config;
pub mod error;
pub mod feature;
pub mod footprint;
pub mod geodesy;
pub mod grid;
pub mod raster;
pub mod sample;
pub mod stats;

pub use self::config::{parse_config, read_config, ApplicationCfg, Config};
pub use self::error::{ConvertError, Result};

#[cfg(test)]
mod config_test;
