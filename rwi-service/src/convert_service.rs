//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::outputs::{RasterOutput, VectorOutput};
use crate::report::{BatchReport, SourceReport};
use pbr::ProgressBar;
use rwi_core::core::error::{ConvertError, Result};
use rwi_core::core::footprint::{footprints, FootprintStrategy};
use rwi_core::core::grid::GridSpec;
use rwi_core::core::raster::RasterGrid;
use rwi_core::core::sample::SampleSet;
use rwi_core::core::stats::ValueStats;
use rwi_core::core::{ApplicationCfg, Config};
use rwi_core::datasource::{CsvDatasource, SampleInput};
use rwi_core::output::{RasterWriter, VectorWriter};
use std::fs;
use std::io::{stderr, Stderr};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum ConvertMode {
    /// One raster per source
    Raster,
    /// One footprint layer per source
    Footprints,
}

/// Batch conversion of a directory of CSV files
#[derive(Clone, Debug)]
pub struct ConvertService {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub value_field: String,
    /// Raster cell size in meters
    pub cell_size: f64,
    pub footprint: FootprintStrategy,
    /// Write sample points next to footprints
    pub write_points: bool,
    pub raster_output: RasterOutput,
    pub vector_output: VectorOutput,
}

impl<'a> Config<'a, ApplicationCfg> for ConvertService {
    fn from_config(config: &ApplicationCfg) -> std::result::Result<Self, String> {
        if config.input.value_field.trim().is_empty() {
            return Err("Empty value field name".to_string());
        }
        let cell_size = config.raster.cell_size;
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(format!("Invalid cell size {}", cell_size));
        }
        Ok(ConvertService {
            input_dir: PathBuf::from(&config.input.dir),
            output_dir: PathBuf::from(&config.output.dir),
            value_field: config.input.value_field.clone(),
            cell_size,
            footprint: FootprintStrategy::from_config(&config.footprint)?,
            write_points: config.footprint.points,
            raster_output: RasterOutput::from_driver(&config.output.raster_driver)?,
            vector_output: VectorOutput::from_driver(&config.output.vector_driver)?,
        })
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_SOURCES);
        config.push_str(TOML_RASTER);
        config.push_str(&FootprintStrategy::gen_config());
        config.push_str("points = false\n");
        config
    }
}

const TOML_SOURCES: &'static str = r#"# rwi_grid configuration

[input]
dir = "relative-wealth-index-april-2021"
value_field = "rwi"

[output]
dir = "relative-wealth-index-april-2021-geotiff"
raster_driver = "GTiff"
vector_driver = "GeoJSON"
"#;

const TOML_RASTER: &'static str = r#"
[raster]
# Cell size in meters
cell_size = 2400.0
"#;

impl ConvertService {
    /// CSV files of the input directory in name order
    pub fn sources(&self) -> Result<Vec<PathBuf>> {
        let mut sources = Vec::new();
        for entry in fs::read_dir(&self.input_dir)? {
            let path = entry?.path();
            let is_csv = path
                .extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
            if path.is_file() && is_csv {
                sources.push(path);
            }
        }
        sources.sort();
        Ok(sources)
    }

    fn progress_bar(&self, sources: usize) -> ProgressBar<Stderr> {
        let mut pb = ProgressBar::on(stderr(), sources as u64);
        pb.message("Sources: ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }

    /// Convert all sources of the input directory.
    ///
    /// A failing source is reported and does not stop the batch.
    pub fn run(&self, mode: ConvertMode, progress: bool) -> Result<BatchReport> {
        let sources = self.sources()?;
        if sources.is_empty() {
            warn!("No CSV files found in '{}'", self.input_dir.display());
        }
        fs::create_dir_all(&self.output_dir)?;

        let mut report = BatchReport::default();
        let mut pb = if progress {
            Some(self.progress_bar(sources.len()))
        } else {
            None
        };
        for path in &sources {
            let source = source_name(path);
            info!("processing {}", source);
            let start = Instant::now();
            match self.convert_source(mode, path) {
                Ok(source_report) => {
                    info!(
                        "{}: {} samples converted in {:.2?}",
                        source,
                        source_report.samples,
                        start.elapsed()
                    );
                    report.converted.push(source_report);
                }
                Err(err) => {
                    error!("{}: {}", source, err);
                    report.failed.push((source, err.to_string()));
                }
            }
            if let Some(ref mut pb) = pb {
                pb.inc();
            }
        }
        if let Some(ref mut pb) = pb {
            pb.finish_println("");
        }
        Ok(report)
    }

    /// Convert a single CSV file
    pub fn convert_source(&self, mode: ConvertMode, path: &Path) -> Result<SourceReport> {
        let ds = CsvDatasource::new(path, &self.value_field);
        let samples = ds.read_samples()?;
        let stats = ValueStats::from_samples(&samples);
        debug!("{}: {}", ds.name(), stats);
        let mut report = SourceReport {
            source: source_name(path),
            samples: samples.len(),
            raster_size: None,
            filled_cells: None,
            outputs: Vec::new(),
            stats,
        };
        match mode {
            ConvertMode::Raster => self.convert_raster(&samples, path, &mut report)?,
            ConvertMode::Footprints => self.convert_footprints(&samples, path, &mut report)?,
        }
        Ok(report)
    }

    fn convert_raster(&self, samples: &SampleSet, path: &Path, report: &mut SourceReport) -> Result<()> {
        let grid = GridSpec::plan(samples, self.cell_size)?;
        let raster = RasterGrid::assemble(samples, grid);
        let out = self.output_path(path, "", self.raster_output.extension())?;
        self.raster_output.write_raster(&raster, &out)?;
        report.raster_size = Some((raster.rows(), raster.cols()));
        report.filled_cells = Some(raster.filled_cells());
        report.outputs.push(out);
        Ok(())
    }

    fn convert_footprints(
        &self,
        samples: &SampleSet,
        path: &Path,
        report: &mut SourceReport,
    ) -> Result<()> {
        let ext = self.vector_output.extension();
        if self.write_points {
            let out = self.output_path(path, "_points", ext)?;
            self.vector_output
                .write_features(samples.samples(), "points", &self.value_field, &out)?;
            report.outputs.push(out);
        }
        let boxes = footprints(samples, &self.footprint);
        let out = self.output_path(path, "_footprints", ext)?;
        self.vector_output
            .write_features(&boxes, "footprints", &self.value_field, &out)?;
        report.outputs.push(out);
        Ok(())
    }

    fn output_path(&self, source: &Path, suffix: &str, ext: &str) -> Result<PathBuf> {
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ConvertError::Output(format!("Invalid file name {}", source.display())))?;
        Ok(self.output_dir.join(format!("{}{}.{}", stem, suffix, ext)))
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
