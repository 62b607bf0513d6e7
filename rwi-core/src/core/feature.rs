//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::footprint::Footprint;
use crate::core::sample::Sample;
use tile_grid::Extent;

/// Output geometry in WGS84 degrees
#[derive(Clone, PartialEq, Debug)]
pub enum GeometryType {
    Point { x: f64, y: f64 },
    /// Axis aligned rectangle
    Box(Extent),
}

impl GeometryType {
    /// OGC type name
    pub fn type_name(&self) -> &'static str {
        match self {
            GeometryType::Point { .. } => "POINT",
            GeometryType::Box(_) => "POLYGON",
        }
    }
}

/// Vector record with a single scalar attribute
pub trait Feature {
    fn geometry(&self) -> GeometryType;
    fn value(&self) -> f64;
}

impl Feature for Sample {
    fn geometry(&self) -> GeometryType {
        GeometryType::Point {
            x: self.longitude,
            y: self.latitude,
        }
    }
    fn value(&self) -> f64 {
        self.value
    }
}

impl Feature for Footprint {
    fn geometry(&self) -> GeometryType {
        GeometryType::Box(self.bounds.clone())
    }
    fn value(&self) -> f64 {
        self.value
    }
}
