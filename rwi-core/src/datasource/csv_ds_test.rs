//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::ConvertError;
use crate::core::sample::Sample;
use crate::datasource::{CsvDatasource, SampleInput};
use std::env;
use std::fs;
use std::path::PathBuf;

fn csv_file(name: &str, content: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("rwi_csv_test");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    fs::write(&dir, content).unwrap();
    dir
}

#[test]
fn test_read_samples() {
    let path = csv_file(
        "read.csv",
        "latitude,longitude,quadkey,rwi,error\n\
         -4.19,29.32,122321003,0.12,0.51\n\
         -4.2, 29.35 ,122321012,-0.3,0.5\n",
    );
    let ds = CsvDatasource::new(&path, "rwi");
    let samples = ds.read_samples().unwrap();
    assert_eq!(
        samples.samples(),
        &[
            Sample::new(-4.19, 29.32, 0.12),
            Sample::new(-4.2, 29.35, -0.3)
        ]
    );
}

#[test]
fn test_value_field() {
    let path = csv_file(
        "value_field.csv",
        "longitude,latitude,rwi,error\n29.32,-4.19,0.12,0.51\n",
    );
    let ds = CsvDatasource::new(&path, "error");
    let samples = ds.read_samples().unwrap();
    assert_eq!(samples.samples(), &[Sample::new(-4.19, 29.32, 0.51)]);
}

#[test]
fn test_missing_column() {
    let path = csv_file("missing_column.csv", "latitude,longitude,value\n1,2,3\n");
    match CsvDatasource::new(&path, "rwi").read_samples() {
        Err(ConvertError::MalformedRow { line, reason }) => {
            assert_eq!(line, 1);
            assert_eq!(reason, "missing column `rwi`");
        }
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_malformed_row() {
    let path = csv_file(
        "malformed.csv",
        "latitude,longitude,rwi\n1.0,2.0,0.5\n1.1,abc,0.7\n1.2,2.2,0.1\n",
    );
    let err = CsvDatasource::new(&path, "rwi").read_samples().unwrap_err();
    assert_eq!(err.to_string(), "line 3: invalid longitude value 'abc'");

    let path = csv_file("short_row.csv", "latitude,longitude,rwi\n1.0,2.0\n");
    let err = CsvDatasource::new(&path, "rwi").read_samples().unwrap_err();
    assert_eq!(err.to_string(), "line 2: invalid rwi value ''");

    let path = csv_file("nan_coord.csv", "latitude,longitude,rwi\nNaN,2.0,1.0\n");
    let err = CsvDatasource::new(&path, "rwi").read_samples().unwrap_err();
    assert_eq!(err.to_string(), "line 2: invalid latitude value 'NaN'");
}

#[test]
fn test_empty_input() {
    let path = csv_file("header_only.csv", "latitude,longitude,rwi\n");
    match CsvDatasource::new(&path, "rwi").read_samples() {
        Err(ConvertError::EmptyInput) => {}
        other => panic!("unexpected result {:?}", other),
    }
    let path = csv_file("empty.csv", "");
    match CsvDatasource::new(&path, "rwi").read_samples() {
        Err(ConvertError::EmptyInput) => {}
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let ds = CsvDatasource::new("/nonexistent/rwi.csv", "rwi");
    assert!(ds.read_samples().is_err());
}
