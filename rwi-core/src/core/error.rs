//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Conversion errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors aborting the conversion of a single input source
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input source without any sample rows.
    #[error("no samples found")]
    EmptyInput,

    /// Missing column or a row with a missing or non-numeric required field.
    #[error("line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TIFF encoding error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writer backend failure (e.g. GDAL)
    #[error("output error: {0}")]
    Output(String),
}
