//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod csv_ds;
#[cfg(test)]
mod csv_ds_test;
mod datasource;

pub use self::csv_ds::CsvDatasource;
pub use self::datasource::SampleInput;
