//! Flat wire representation of [`TtrResult`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ChunkTtr, DeltaStats, SttrStats, TtrAggregateResult, TtrResult};

/// Reasons a JSON record cannot become a [`TtrResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unique_words ({unique}) exceeds total_words ({total})")]
    UniqueExceedsTotal { unique: usize, total: usize },

    #[error("sttr, sttr_std and chunk_count must be present together")]
    PartialSttr,

    #[error("delta_mean, delta_std, delta_min and delta_max must be present together")]
    PartialDelta,

    #[error("{0} requires sttr to be present")]
    OrphanField(&'static str),

    #[error("chunk_ttrs has {actual} entries but chunk_count is {expected}")]
    ChunkCountMismatch { expected: usize, actual: usize },

    #[error("aggregate '{0}' has text_count 0")]
    EmptyAggregate(String),

    #[error("aggregate '{0}' violates ttr_min <= ttr_mean <= ttr_max")]
    UnorderedAggregate(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtrRecord {
    text_id: String,
    title: Option<String>,
    author: Option<String>,
    total_words: usize,
    unique_words: usize,
    ttr: f64,
    root_ttr: f64,
    log_ttr: f64,
    sttr: Option<f64>,
    sttr_std: Option<f64>,
    chunk_count: Option<usize>,
    chunk_ttrs: Option<Vec<ChunkTtr>>,
    delta_mean: Option<f64>,
    delta_std: Option<f64>,
    delta_min: Option<f64>,
    delta_max: Option<f64>,
}

impl From<TtrResult> for TtrRecord {
    fn from(result: TtrResult) -> Self {
        let (sttr, sttr_std, chunk_count, chunk_ttrs, delta) = match result.sttr {
            Some(s) => (
                Some(s.mean),
                Some(s.std_dev),
                Some(s.chunk_count),
                s.chunks,
                s.delta,
            ),
            None => (None, None, None, None, None),
        };
        Self {
            text_id: result.text_id,
            title: result.title,
            author: result.author,
            total_words: result.total_words,
            unique_words: result.unique_words,
            ttr: result.ttr,
            root_ttr: result.root_ttr,
            log_ttr: result.log_ttr,
            sttr,
            sttr_std,
            chunk_count,
            chunk_ttrs,
            delta_mean: delta.map(|d| d.mean),
            delta_std: delta.map(|d| d.std_dev),
            delta_min: delta.map(|d| d.min),
            delta_max: delta.map(|d| d.max),
        }
    }
}

impl TryFrom<TtrRecord> for TtrResult {
    type Error = RecordError;

    fn try_from(r: TtrRecord) -> Result<Self, Self::Error> {
        if r.unique_words > r.total_words {
            return Err(RecordError::UniqueExceedsTotal {
                unique: r.unique_words,
                total: r.total_words,
            });
        }

        let delta = match (r.delta_mean, r.delta_std, r.delta_min, r.delta_max) {
            (Some(mean), Some(std_dev), Some(min), Some(max)) => Some(DeltaStats {
                mean,
                std_dev,
                min,
                max,
            }),
            (None, None, None, None) => None,
            _ => return Err(RecordError::PartialDelta),
        };

        let sttr = match (r.sttr, r.sttr_std, r.chunk_count) {
            (Some(mean), Some(std_dev), Some(chunk_count)) => {
                if let Some(chunks) = &r.chunk_ttrs
                    && chunks.len() != chunk_count
                {
                    return Err(RecordError::ChunkCountMismatch {
                        expected: chunk_count,
                        actual: chunks.len(),
                    });
                }
                Some(SttrStats {
                    mean,
                    std_dev,
                    chunk_count,
                    chunks: r.chunk_ttrs,
                    delta,
                })
            }
            (None, None, None) => {
                if r.chunk_ttrs.is_some() {
                    return Err(RecordError::OrphanField("chunk_ttrs"));
                }
                if delta.is_some() {
                    return Err(RecordError::OrphanField("delta metrics"));
                }
                None
            }
            _ => return Err(RecordError::PartialSttr),
        };

        Ok(TtrResult {
            text_id: r.text_id,
            title: r.title,
            author: r.author,
            total_words: r.total_words,
            unique_words: r.unique_words,
            ttr: r.ttr,
            root_ttr: r.root_ttr,
            log_ttr: r.log_ttr,
            sttr,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRecord {
    group_id: String,
    text_count: usize,
    total_words: usize,
    ttr_mean: f64,
    ttr_min: f64,
    ttr_max: f64,
}

impl From<TtrAggregateResult> for AggregateRecord {
    fn from(a: TtrAggregateResult) -> Self {
        Self {
            group_id: a.group_id,
            text_count: a.text_count,
            total_words: a.total_words,
            ttr_mean: a.ttr_mean,
            ttr_min: a.ttr_min,
            ttr_max: a.ttr_max,
        }
    }
}

impl TryFrom<AggregateRecord> for TtrAggregateResult {
    type Error = RecordError;

    fn try_from(r: AggregateRecord) -> Result<Self, Self::Error> {
        if r.text_count == 0 {
            return Err(RecordError::EmptyAggregate(r.group_id));
        }
        // Written as a negation so NaN is rejected too.
        if !(r.ttr_min <= r.ttr_mean && r.ttr_mean <= r.ttr_max) {
            return Err(RecordError::UnorderedAggregate(r.group_id));
        }
        Ok(TtrAggregateResult {
            group_id: r.group_id,
            text_count: r.text_count,
            total_words: r.total_words,
            ttr_mean: r.ttr_mean,
            ttr_min: r.ttr_min,
            ttr_max: r.ttr_max,
        })
    }
}
