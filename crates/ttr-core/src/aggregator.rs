//! Cross-document summaries.

use tracing::debug;
use ttr_math::summarize;
use ttr_types::{TtrAggregateResult, TtrResult};

use crate::TtrError;

/// Summarizes the document-level `ttr` of many results.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtrAggregator;

impl TtrAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate `results` under `group_id`.
    ///
    /// Fails with [`TtrError::EmptyAggregate`] when `results` is empty.
    pub fn aggregate(
        &self,
        results: &[TtrResult],
        group_id: impl Into<String>,
    ) -> Result<TtrAggregateResult, TtrError> {
        let group_id = group_id.into();
        let ttrs: Vec<f64> = results.iter().map(|r| r.ttr).collect();
        let Some(summary) = summarize(&ttrs) else {
            return Err(TtrError::EmptyAggregate { group_id });
        };
        let total_words = results.iter().map(|r| r.total_words).sum();

        debug!(%group_id, text_count = results.len(), total_words, "aggregated ttr");

        Ok(TtrAggregateResult {
            group_id,
            text_count: results.len(),
            total_words,
            ttr_mean: summary.mean,
            ttr_min: summary.min,
            ttr_max: summary.max,
        })
    }
}
