//! Single-document TTR computation.

use std::collections::HashSet;

use tracing::debug;
use ttr_math::{consecutive_diffs, log_ratio, ratio, root_ratio, summarize};
use ttr_settings::TtrConfig;
use ttr_types::{ChunkTtr, DeltaStats, SttrStats, TtrResult};

use crate::TtrError;

/// Caller-supplied identity of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMeta {
    pub text_id: String,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl DocumentMeta {
    pub fn new(text_id: impl Into<String>) -> Self {
        Self {
            text_id: text_id.into(),
            title: None,
            author: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

impl From<&str> for DocumentMeta {
    fn from(text_id: &str) -> Self {
        Self::new(text_id)
    }
}

impl From<String> for DocumentMeta {
    fn from(text_id: String) -> Self {
        Self::new(text_id)
    }
}

/// Computes [`TtrResult`]s under a fixed configuration.
///
/// Holds nothing but its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtrCalculator {
    config: TtrConfig,
}

impl TtrCalculator {
    pub fn new(config: TtrConfig) -> Self {
        Self { config }
    }

    /// Build from raw parameters, rejecting non-positive sizes.
    pub fn with_params(
        min_words_for_sttr: usize,
        sttr_chunk_size: usize,
        return_chunk_details: bool,
    ) -> Result<Self, TtrError> {
        let config = TtrConfig::new(min_words_for_sttr, sttr_chunk_size, return_chunk_details)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &TtrConfig {
        &self.config
    }

    /// Compute every metric for one token sequence.
    ///
    /// Never fails: an empty or short document yields zeros and no STTR.
    pub fn compute<S: AsRef<str>>(&self, tokens: &[S], meta: impl Into<DocumentMeta>) -> TtrResult {
        let meta = meta.into();
        let total_words = tokens.len();
        let unique_words = count_types(tokens);
        let sttr = self.standardized(tokens);

        debug!(
            text_id = %meta.text_id,
            total_words,
            unique_words,
            chunk_count = sttr.as_ref().map(|s| s.chunk_count),
            "computed ttr"
        );

        TtrResult {
            text_id: meta.text_id,
            title: meta.title,
            author: meta.author,
            total_words,
            unique_words,
            ttr: ratio(unique_words, total_words),
            root_ttr: root_ratio(unique_words, total_words),
            log_ttr: log_ratio(unique_words, total_words),
            sttr,
        }
    }

    fn standardized<S: AsRef<str>>(&self, tokens: &[S]) -> Option<SttrStats> {
        if tokens.len() < self.config.min_words_for_sttr() {
            return None;
        }

        // chunks_exact drops the trailing partial chunk.
        let chunk_ttrs: Vec<f64> = tokens
            .chunks_exact(self.config.sttr_chunk_size())
            .map(|chunk| ratio(count_types(chunk), chunk.len()))
            .collect();
        let summary = summarize(&chunk_ttrs)?;

        let delta = summarize(&consecutive_diffs(&chunk_ttrs)).map(|d| DeltaStats {
            mean: d.mean,
            std_dev: d.std_dev,
            min: d.min,
            max: d.max,
        });

        let chunks = self.config.return_chunk_details().then(|| {
            chunk_ttrs
                .iter()
                .enumerate()
                .map(|(i, ttr)| ChunkTtr {
                    chunk_number: i + 1,
                    ttr: *ttr,
                })
                .collect()
        });

        Some(SttrStats {
            mean: summary.mean,
            std_dev: summary.std_dev,
            chunk_count: chunk_ttrs.len(),
            chunks,
            delta,
        })
    }
}

fn count_types<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens.iter().map(AsRef::as_ref).collect::<HashSet<&str>>().len()
}
