//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

#[cfg(feature = "with-gdal")]
extern crate rwi_gdal;

pub mod args;
pub mod convert_service;
#[cfg(test)]
mod convert_service_test;
pub mod outputs;
pub mod report;

pub use crate::args::{config_from_args, service_from_config};
pub use crate::convert_service::{ConvertMode, ConvertService};
pub use crate::report::{BatchReport, SourceReport};
