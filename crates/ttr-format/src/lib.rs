//! # ttr-format
//!
//! **Tier 2 (Formatting)**
//!
//! Batch rendering of [`TtrResult`]s and [`TtrAggregateResult`]s as table,
//! JSON, JSONL or CSV, plus the chunk-series CSV used for plotting drift
//! within a document. Single-value rendering lives in `ttr-types`; this
//! crate only decides how several values share one output stream.
//!
//! ## What belongs here
//! * Output formatting and serialization of collections
//! * Reading results back from JSON / JSONL
//!
//! ## What does NOT belong here
//! * Computation
//! * CLI argument parsing

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use ttr_types::{JsonOptions, OutputFormat, TtrAggregateResult, TtrResult};

const RESULT_CSV_HEADER: [&str; 15] = [
    "text_id",
    "title",
    "author",
    "total_words",
    "unique_words",
    "ttr",
    "root_ttr",
    "log_ttr",
    "sttr",
    "sttr_std",
    "chunk_count",
    "delta_mean",
    "delta_std",
    "delta_min",
    "delta_max",
];

const AGGREGATE_CSV_HEADER: [&str; 6] = [
    "group_id",
    "text_count",
    "total_words",
    "ttr_mean",
    "ttr_min",
    "ttr_max",
];

// -----------------------
// Results
// -----------------------

/// Write `results` to stdout.
pub fn write_results(results: &[TtrResult], format: OutputFormat, json: JsonOptions) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results_to(&mut out, results, format, json)?;
    out.flush()?;
    Ok(())
}

pub fn write_results_to<W: Write>(
    out: &mut W,
    results: &[TtrResult],
    format: OutputFormat,
    json: JsonOptions,
) -> Result<()> {
    match format {
        OutputFormat::Table => {
            for (i, r) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}", r.to_table())?;
            }
        }
        OutputFormat::Json => {
            let values = results
                .iter()
                .map(|r| r.to_json_value(json.exclude_none))
                .collect::<serde_json::Result<Vec<_>>>()?;
            let array = Value::Array(values);
            if json.pretty {
                writeln!(out, "{}", serde_json::to_string_pretty(&array)?)?;
            } else {
                writeln!(out, "{}", serde_json::to_string(&array)?)?;
            }
        }
        OutputFormat::Jsonl => {
            let compact = JsonOptions {
                pretty: false,
                ..json
            };
            for r in results {
                writeln!(out, "{}", r.to_json_with(compact)?)?;
            }
        }
        OutputFormat::Csv => write_results_csv(out, results)?,
    }
    Ok(())
}

fn write_results_csv<W: Write>(out: &mut W, results: &[TtrResult]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(RESULT_CSV_HEADER)?;

    for r in results {
        let sttr = r.sttr.as_ref();
        let delta = r.delta();
        wtr.write_record([
            r.text_id.clone(),
            r.title.clone().unwrap_or_default(),
            r.author.clone().unwrap_or_default(),
            r.total_words.to_string(),
            r.unique_words.to_string(),
            r.ttr.to_string(),
            r.root_ttr.to_string(),
            r.log_ttr.to_string(),
            cell(sttr.map(|s| s.mean)),
            cell(sttr.map(|s| s.std_dev)),
            cell(sttr.map(|s| s.chunk_count)),
            cell(delta.map(|d| d.mean)),
            cell(delta.map(|d| d.std_dev)),
            cell(delta.map(|d| d.min)),
            cell(delta.map(|d| d.max)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

// -----------------------
// Aggregate
// -----------------------

/// Write `aggregate` to stdout.
pub fn write_aggregate(
    aggregate: &TtrAggregateResult,
    format: OutputFormat,
    json: JsonOptions,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_aggregate_to(&mut out, aggregate, format, json)?;
    out.flush()?;
    Ok(())
}

pub fn write_aggregate_to<W: Write>(
    out: &mut W,
    aggregate: &TtrAggregateResult,
    format: OutputFormat,
    json: JsonOptions,
) -> Result<()> {
    match format {
        OutputFormat::Table => writeln!(out, "{}", aggregate.to_table())?,
        OutputFormat::Json => writeln!(out, "{}", aggregate.to_json_with(json)?)?,
        OutputFormat::Jsonl => {
            let compact = JsonOptions {
                pretty: false,
                ..json
            };
            writeln!(out, "{}", aggregate.to_json_with(compact)?)?;
        }
        OutputFormat::Csv => {
            let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
            wtr.write_record(AGGREGATE_CSV_HEADER)?;
            wtr.write_record([
                aggregate.group_id.clone(),
                aggregate.text_count.to_string(),
                aggregate.total_words.to_string(),
                aggregate.ttr_mean.to_string(),
                aggregate.ttr_min.to_string(),
                aggregate.ttr_max.to_string(),
            ])?;
            wtr.flush()?;
        }
    }
    Ok(())
}

// -----------------------
// Chunk series
// -----------------------

/// One `text_id,chunk_number,ttr` row per chunk, across all `results`.
///
/// Documents too short for STTR contribute no rows. A document that has
/// STTR but was computed without chunk details is an error, since its
/// series cannot be recovered.
pub fn write_chunk_series_csv<W: Write>(out: &mut W, results: &[TtrResult]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(["text_id", "chunk_number", "ttr"])?;

    for r in results {
        if r.sttr.is_none() {
            continue;
        }
        let Some(chunks) = r.chunk_ttrs() else {
            bail!(
                "{}: no chunk details; recompute with return_chunk_details enabled",
                r.text_id
            );
        };
        for c in chunks {
            wtr.write_record([
                r.text_id.clone(),
                c.chunk_number.to_string(),
                c.ttr.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

// -----------------------
// Reading
// -----------------------

/// Parse results from a JSON object, a JSON array, or JSONL.
///
/// Values may be separated by any whitespace, so pretty-printed objects
/// and one-per-line streams are both accepted.
pub fn read_results(input: &str) -> Result<Vec<TtrResult>> {
    let mut results = Vec::new();
    let stream = serde_json::Deserializer::from_str(input).into_iter::<Value>();

    for (i, value) in stream.enumerate() {
        let value = value.with_context(|| format!("invalid JSON in value {}", i + 1))?;
        match value {
            Value::Array(items) => {
                for (j, item) in items.into_iter().enumerate() {
                    let r = serde_json::from_value(item).with_context(|| {
                        format!("value {}, element {}: not a TTR result", i + 1, j + 1)
                    })?;
                    results.push(r);
                }
            }
            other => {
                let r = serde_json::from_value(other)
                    .with_context(|| format!("value {}: not a TTR result", i + 1))?;
                results.push(r);
            }
        }
    }

    Ok(results)
}
