//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::{ConvertError, Result};
use crate::core::sample::{Sample, SampleSet};
use crate::datasource::SampleInput;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::{Path, PathBuf};

pub const LATITUDE_FIELD: &str = "latitude";
pub const LONGITUDE_FIELD: &str = "longitude";

/// CSV file with a header row and `latitude`, `longitude` and value columns
#[derive(Clone, Debug)]
pub struct CsvDatasource {
    pub path: PathBuf,
    pub value_field: String,
}

impl CsvDatasource {
    pub fn new<P: AsRef<Path>>(path: P, value_field: &str) -> CsvDatasource {
        CsvDatasource {
            path: path.as_ref().to_path_buf(),
            value_field: value_field.to_string(),
        }
    }
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| ConvertError::MalformedRow {
            line: 1,
            reason: format!("missing column `{}`", name),
        })
}

fn parse_field(record: &StringRecord, idx: usize, name: &str, line: u64) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("");
    raw.parse::<f64>().map_err(|_| ConvertError::MalformedRow {
        line,
        reason: format!("invalid {} value '{}'", name, raw),
    })
}

fn parse_coord(record: &StringRecord, idx: usize, name: &str, line: u64) -> Result<f64> {
    let value = parse_field(record, idx, name, line)?;
    if !value.is_finite() {
        return Err(ConvertError::MalformedRow {
            line,
            reason: format!("invalid {} value '{}'", name, value),
        });
    }
    Ok(value)
}

impl SampleInput for CsvDatasource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }
    fn read_samples(&self) -> Result<SampleSet> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(&self.path)?;
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        let lat_idx = column_index(&headers, LATITUDE_FIELD)?;
        let lon_idx = column_index(&headers, LONGITUDE_FIELD)?;
        let value_idx = column_index(&headers, &self.value_field)?;

        let mut samples = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line());
            let latitude = parse_coord(&record, lat_idx, LATITUDE_FIELD, line)?;
            let longitude = parse_coord(&record, lon_idx, LONGITUDE_FIELD, line)?;
            let value = parse_field(&record, value_idx, &self.value_field, line)?;
            samples.push(Sample::new(latitude, longitude, value));
        }
        if samples.is_empty() {
            return Err(ConvertError::EmptyInput);
        }
        debug!("{}: {} samples", self.name(), samples.len());
        Ok(SampleSet::new(samples))
    }
}
