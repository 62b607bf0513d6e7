//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Conversion results

use rwi_core::core::stats::ValueStats;
use std::io::Write;
use std::path::PathBuf;

/// Result of a successfully converted source
#[derive(Clone, Debug)]
pub struct SourceReport {
    pub source: String,
    pub samples: usize,
    /// (rows, cols) of the raster
    pub raster_size: Option<(usize, usize)>,
    pub filled_cells: Option<usize>,
    pub outputs: Vec<PathBuf>,
    pub stats: ValueStats,
}

#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<SourceReport>,
    /// (source, error message)
    pub failed: Vec<(String, String)>,
}

fn opt_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

const CSV_HEADER: [&str; 10] = [
    "source", "status", "samples", "rows", "cols", "filled", "min", "max", "mean", "message",
];

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
    /// Write the summary table
    pub fn write_csv<W: Write>(&self, out: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(&CSV_HEADER)?;
        for r in &self.converted {
            writer.write_record(&[
                r.source.clone(),
                "ok".to_string(),
                r.samples.to_string(),
                opt_to_string(r.raster_size.map(|s| s.0)),
                opt_to_string(r.raster_size.map(|s| s.1)),
                opt_to_string(r.filled_cells),
                r.stats.min.to_string(),
                r.stats.max.to_string(),
                r.stats.mean.to_string(),
                String::new(),
            ])?;
        }
        for (source, msg) in &self.failed {
            writer.write_record(&[
                source.as_str(),
                "failed",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                msg.as_str(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
    /// Summary table
    pub fn as_csv(&self) -> String {
        let mut buf = Vec::new();
        if let Err(err) = self.write_csv(&mut buf) {
            warn!("Error writing report - {}", err);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}
