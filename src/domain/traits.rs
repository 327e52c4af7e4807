// ============================================================
// Core Traits (Abstractions)
// ============================================================
// The model itself is owned by whatever deep-learning framework
// the caller uses; this crate only needs four capabilities from
// it. By programming against these traits the persistence code
// never names a framework type, and any model, hand-rolled or
// framework-backed, can be saved and restored the same way.
//
// Restoring is split into its own trait because rebuilding a
// model from its structure file needs caller-supplied
// deserialization hooks (custom layer constructors, etc.).
// A `ModelDecoder` implementation owns whatever hook table its
// structure format requires.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

// ─── ModelArchive ─────────────────────────────────────────────────────────────
/// A model whose architecture and weights can be persisted.
///
/// Implementations:
///   - any framework model wrapper that can serialize its
///     architecture to JSON and its parameters to a file
pub trait ModelArchive {
    /// The model's architecture as a JSON value: layers,
    /// shapes, hyperparameters. Numeric parameters do NOT
    /// belong here; they go through `write_weights`.
    fn structure(&self) -> Result<Value>;

    /// Write all learned parameters to `path` in the model's
    /// native binary format.
    fn write_weights(&self, path: &Path) -> Result<()>;

    /// Load learned parameters from `path` into this model.
    /// The model must already have the matching architecture.
    fn read_weights(&mut self, path: &Path) -> Result<()>;

    /// A human-readable, multi-line description of the
    /// architecture, appended verbatim to the results report.
    fn summary(&self) -> String;
}

// ─── ModelDecoder ─────────────────────────────────────────────────────────────
/// Rebuilds a model from its persisted structure.
///
/// This is where custom deserialization hooks live: a decoder
/// for a format with user-defined layer types carries its own
/// name → constructor mapping and consults it while decoding.
pub trait ModelDecoder {
    /// The model type this decoder produces.
    type Model: ModelArchive;

    /// Build a model (weights uninitialized) from the structure
    /// JSON previously produced by `ModelArchive::structure`.
    /// Fails if the structure is malformed or references a
    /// layer type with no registered hook.
    fn from_structure(&self, structure: &Value) -> Result<Self::Model>;
}
