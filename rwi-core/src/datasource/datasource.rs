//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::Result;
use crate::core::sample::SampleSet;

pub trait SampleInput {
    /// Name used in log messages and reports
    fn name(&self) -> String;
    /// Read all samples of the source in input order.
    /// Fails as a whole on the first invalid row.
    fn read_samples(&self) -> Result<SampleSet>;
}
