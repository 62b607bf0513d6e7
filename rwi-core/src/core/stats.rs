//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Sample value statistics

use crate::core::sample::SampleSet;
use stats::{MinMax, OnlineStats};
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub struct ValueStats {
    pub len: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl ValueStats {
    /// Statistics over all non-NaN sample values
    pub fn from_samples(samples: &SampleSet) -> ValueStats {
        let mut online = OnlineStats::new();
        let mut minmax = MinMax::new();
        for value in samples.iter().map(|s| s.value).filter(|v| !v.is_nan()) {
            online.add(value);
            minmax.add(value);
        }
        if minmax.len() == 0 {
            return ValueStats {
                len: 0,
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
                stddev: f64::NAN,
            };
        }
        ValueStats {
            len: minmax.len(),
            min: *minmax.min().unwrap_or(&f64::NAN),
            max: *minmax.max().unwrap_or(&f64::NAN),
            mean: online.mean(),
            stddev: online.stddev(),
        }
    }
}

impl fmt::Display for ValueStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "#values: {}, min: {}, max: {}, mean: {:.6} +/- {:.6}",
            self.len, self.min, self.max, self.mean, self.stddev
        )
    }
}

#[test]
fn usage() {
    use crate::core::sample::Sample;

    let samples: SampleSet = vec![
        Sample::new(0.0, 0.0, 1.0),
        Sample::new(0.0, 0.0, 2.0),
        Sample::new(0.0, 0.0, f64::NAN),
        Sample::new(0.0, 0.0, 3.0),
    ]
    .into();
    let stats = ValueStats::from_samples(&samples);
    assert_eq!(stats.len, 3);
    assert_eq!(stats.min, 1.0);
    assert_eq!(stats.max, 3.0);
    assert_eq!(stats.mean, 2.0);
    assert_eq!(stats.stddev, 0.816496580927726);

    let stats = ValueStats::from_samples(&SampleSet::default());
    assert_eq!(stats.len, 0);
    assert!(stats.mean.is_nan());
}
