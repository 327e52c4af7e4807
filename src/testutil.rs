// ============================================================
// Test Fixtures
// ============================================================
// A minimal model that exercises the ModelArchive/ModelDecoder
// seam without pulling in a real framework: one dense layer,
// weights stored as little-endian f64 bytes in the ".h5" file.
//
// StubDecoder carries a literal hook table (the Rust shape of
// a `custom_objects` mapping) so decoding an unknown layer
// type fails the same way a real decoder would.

use anyhow::{anyhow, Result};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::domain::traits::{ModelArchive, ModelDecoder};

#[derive(Debug)]
pub struct StubModel {
    pub activation: String,
    pub units:      usize,
    pub weights:    Vec<f64>,
}

impl StubModel {
    pub fn relu(units: usize, weights: Vec<f64>) -> Self {
        Self {
            activation: "relu".to_string(),
            units,
            weights,
        }
    }
}

impl ModelArchive for StubModel {
    fn structure(&self) -> Result<Value> {
        Ok(json!({
            "class_name": "Dense",
            "config": {
                "activation": self.activation,
                "units": self.units,
            },
        }))
    }

    fn write_weights(&self, path: &Path) -> Result<()> {
        let mut bytes = Vec::with_capacity(self.weights.len() * 8);
        for w in &self.weights {
            bytes.extend_from_slice(&w.to_le_bytes());
        }
        fs::write(path, bytes)?;
        Ok(())
    }

    fn read_weights(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path)?;
        if bytes.len() % 8 != 0 {
            return Err(anyhow!("weights file '{}' is truncated", path.display()));
        }
        self.weights = bytes
            .chunks_exact(8)
            .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
            .collect();
        Ok(())
    }

    fn summary(&self) -> String {
        format!(
            "Layer (type)         Output Shape   Param #\n\
             dense (Dense)        (None, {})      {}",
            self.units,
            self.weights.len(),
        )
    }
}

type LayerHook = fn(&Value) -> Result<StubModel>;

pub struct StubDecoder {
    hooks: HashMap<String, LayerHook>,
}

impl StubDecoder {
    pub fn new() -> Self {
        let mut hooks: HashMap<String, LayerHook> = HashMap::new();
        hooks.insert("Dense".to_string(), |config| {
            let activation = config["activation"]
                .as_str()
                .ok_or_else(|| anyhow!("Dense config missing 'activation'"))?
                .to_string();
            let units = config["units"]
                .as_u64()
                .ok_or_else(|| anyhow!("Dense config missing 'units'"))?
                as usize;
            Ok(StubModel {
                activation,
                units,
                // Fresh models start zeroed; read_weights overwrites.
                weights: vec![0.0; units],
            })
        });
        Self { hooks }
    }
}

impl ModelDecoder for StubDecoder {
    type Model = StubModel;

    fn from_structure(&self, structure: &Value) -> Result<StubModel> {
        let class = structure["class_name"]
            .as_str()
            .ok_or_else(|| anyhow!("structure is missing 'class_name'"))?;
        let hook = self
            .hooks
            .get(class)
            .ok_or_else(|| anyhow!("no deserialization hook registered for '{class}'"))?;
        hook(&structure["config"])
    }
}
