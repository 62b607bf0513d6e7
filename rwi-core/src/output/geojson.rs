//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::error::Result;
use crate::core::feature::{Feature, GeometryType};
use crate::output::VectorWriter;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// GeoJSON FeatureCollection (RFC 7946, WGS84)
#[derive(Clone, Debug, Default)]
pub struct GeoJsonWriter;

fn geometry_json(geometry: &GeometryType) -> Value {
    match geometry {
        GeometryType::Point { x, y } => json!({
            "type": "Point",
            "coordinates": [x, y]
        }),
        GeometryType::Box(extent) => {
            let ring: Vec<[f64; 2]> = extent.ring().iter().map(|&(x, y)| [x, y]).collect();
            json!({
                "type": "Polygon",
                "coordinates": [ring]
            })
        }
    }
}

impl GeoJsonWriter {
    pub fn feature_collection<F: Feature>(
        &self,
        features: &[F],
        layer_name: &str,
        attribute: &str,
    ) -> Value {
        let features: Vec<Value> = features
            .iter()
            .map(|feat| {
                let mut properties = serde_json::Map::new();
                // NaN is serialized as null
                properties.insert(attribute.to_string(), json!(feat.value()));
                json!({
                    "type": "Feature",
                    "properties": properties,
                    "geometry": geometry_json(&feat.geometry())
                })
            })
            .collect();
        json!({
            "type": "FeatureCollection",
            "name": layer_name,
            "features": features
        })
    }
}

impl VectorWriter for GeoJsonWriter {
    fn extension(&self) -> &str {
        "geojson"
    }
    fn write_features<F: Feature>(
        &self,
        features: &[F],
        layer_name: &str,
        attribute: &str,
        path: &Path,
    ) -> Result<()> {
        let collection = self.feature_collection(features, layer_name, attribute);
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &collection)?;
        writer.flush()?;
        Ok(())
    }
}
