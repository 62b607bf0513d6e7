//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use tile_grid::Extent;

/// Geocoded sample value
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Sample {
    pub latitude: f64,
    pub longitude: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(latitude: f64, longitude: f64, value: f64) -> Sample {
        Sample {
            latitude,
            longitude,
            value,
        }
    }
}

/// Samples of one input source in input order
#[derive(Clone, Debug, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> SampleSet {
        SampleSet { samples }
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    /// Bounding box (x: longitude, y: latitude), `None` for an empty set
    pub fn extent(&self) -> Option<Extent> {
        let mut iter = self.samples.iter();
        let first = iter.next()?;
        let mut extent = Extent::from_point(first.longitude, first.latitude);
        for s in iter {
            extent.expand(s.longitude, s.latitude);
        }
        Some(extent)
    }
    /// Arithmetic mean of all latitudes
    pub fn mean_latitude(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().map(|s| s.latitude).sum();
        Some(sum / self.samples.len() as f64)
    }
}

impl From<Vec<Sample>> for SampleSet {
    fn from(samples: Vec<Sample>) -> SampleSet {
        SampleSet::new(samples)
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
