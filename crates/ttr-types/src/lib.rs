//! # ttr-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the value objects produced by `stylometry-ttr`:
//! single-document results, per-chunk records and cross-document aggregates.
//!
//! ## Stability Policy
//!
//! **JSON-first stability**: the primary contract is the flat JSON shape
//! (`text_id`, `total_words`, `ttr`, `sttr`, `delta_mean`, ...), not the Rust
//! struct layout. Internally the standardized-TTR fields are grouped in
//! [`SttrStats`] so they are either all present or all absent.
//!
//! ## What belongs here
//! * Pure data structs (results, chunk records, aggregates)
//! * Serialization/Deserialization logic
//! * Table and JSON rendering of a single value
//!
//! ## What does NOT belong here
//! * Tokenization or TTR computation
//! * File I/O
//! * CLI argument parsing

mod record;
mod render;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use record::RecordError;
use record::{AggregateRecord, TtrRecord};

/// TTR of one standardized-TTR chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChunkTtr {
    /// 1-indexed position of the chunk in the document.
    pub chunk_number: usize,
    /// Type-token ratio local to the chunk, in `[0, 1]`.
    pub ttr: f64,
}

/// Statistics over consecutive chunk-TTR differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaStats {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Standardized TTR and everything that only exists alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct SttrStats {
    /// Mean of the chunk TTRs.
    pub mean: f64,
    /// Population standard deviation of the chunk TTRs.
    pub std_dev: f64,
    /// Number of complete chunks.
    pub chunk_count: usize,
    /// Per-chunk values, kept only when requested.
    pub chunks: Option<Vec<ChunkTtr>>,
    /// Drift between neighbouring chunks; `None` with fewer than two chunks.
    pub delta: Option<DeltaStats>,
}

/// Lexical-diversity metrics for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "TtrRecord", try_from = "TtrRecord")]
pub struct TtrResult {
    pub text_id: String,
    pub title: Option<String>,
    pub author: Option<String>,
    pub total_words: usize,
    pub unique_words: usize,
    pub ttr: f64,
    /// Guiraud's index.
    pub root_ttr: f64,
    /// Herdan's C.
    pub log_ttr: f64,
    /// `None` when the document is too short for standardized TTR.
    pub sttr: Option<SttrStats>,
}

impl TtrResult {
    /// Human-readable multi-line report.
    pub fn to_table(&self) -> String {
        render::result_table(self)
    }

    /// Pretty JSON with absent fields omitted.
    pub fn to_json(&self) -> serde_json::Result<String> {
        self.to_json_with(JsonOptions::default())
    }

    pub fn to_json_with(&self, options: JsonOptions) -> serde_json::Result<String> {
        render::json(self, options)
    }

    /// JSON object form, for embedding in larger documents.
    pub fn to_json_value(&self, exclude_none: bool) -> serde_json::Result<serde_json::Value> {
        render::json_value(self, exclude_none)
    }

    /// Parse a result previously written by [`TtrResult::to_json`].
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Label used in report headings: the title when known, else the id.
    pub fn display_name(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.text_id)
    }

    pub fn chunk_count(&self) -> Option<usize> {
        self.sttr.as_ref().map(|s| s.chunk_count)
    }

    pub fn chunk_ttrs(&self) -> Option<&[ChunkTtr]> {
        self.sttr.as_ref().and_then(|s| s.chunks.as_deref())
    }

    pub fn delta(&self) -> Option<&DeltaStats> {
        self.sttr.as_ref().and_then(|s| s.delta.as_ref())
    }
}

impl fmt::Display for TtrResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_table())
    }
}

/// Summary over several documents sharing a group id.
///
/// Parsing rejects `text_count == 0` and extrema that do not bracket the mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "AggregateRecord", try_from = "AggregateRecord")]
pub struct TtrAggregateResult {
    pub group_id: String,
    pub text_count: usize,
    pub total_words: usize,
    pub ttr_mean: f64,
    pub ttr_min: f64,
    pub ttr_max: f64,
}

impl TtrAggregateResult {
    pub fn to_table(&self) -> String {
        render::aggregate_table(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        self.to_json_with(JsonOptions::default())
    }

    pub fn to_json_with(&self, options: JsonOptions) -> serde_json::Result<String> {
        render::json(self, options)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for TtrAggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_table())
    }
}

/// Options for JSON rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    /// Omit fields whose value is absent instead of writing `null`.
    pub exclude_none: bool,
    /// Indent with two spaces.
    pub pretty: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            exclude_none: true,
            pretty: true,
        }
    }
}

/// Output format for rendered results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable report.
    #[default]
    Table,
    /// A single JSON document.
    Json,
    /// One JSON object per line.
    Jsonl,
    /// Comma-separated values, one row per document.
    Csv,
}
