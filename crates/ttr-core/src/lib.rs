//! # ttr-core
//!
//! This crate is the **primary library interface** for `stylometry-ttr`.
//! It computes lexical-diversity metrics for single documents and summarizes
//! them across documents.
//!
//! If you are embedding `stylometry-ttr` into another Rust application,
//! depend on this crate and `ttr-types`.
//!
//! ## Example
//!
//! ```rust
//! use ttr_core::{DocumentMeta, TtrAggregator, TtrCalculator, Tokenizer};
//!
//! let tokens = Tokenizer::default().tokenize("The well-known cat sat. The cat can't sit!");
//! let calc = TtrCalculator::default();
//! let result = calc.compute(&tokens, DocumentMeta::new("doc-1").with_title("Cats"));
//! assert_eq!(result.total_words, 8);
//! assert!(result.sttr.is_none());
//!
//! let agg = TtrAggregator::new().aggregate(&[result], "cats").unwrap();
//! assert_eq!(agg.text_count, 1);
//! ```

mod aggregator;
mod calculator;
mod error;

pub use aggregator::TtrAggregator;
pub use calculator::{DocumentMeta, TtrCalculator};
pub use error::TtrError;

// Re-export types for convenience
pub use ttr_settings::{Settings, SettingsError, TokenizerSettings, TtrConfig};
pub use ttr_tokenize::Tokenizer;
pub use ttr_types as types;
pub use ttr_types::{ChunkTtr, DeltaStats, SttrStats, TtrAggregateResult, TtrResult};

/// Tokenize `text` and compute its metrics in one step.
pub fn analyze_text(
    text: &str,
    meta: impl Into<DocumentMeta>,
    tokenizer: &Tokenizer,
    calculator: &TtrCalculator,
) -> TtrResult {
    let tokens = tokenizer.tokenize(text);
    calculator.compute(&tokens, meta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_text_tokenizes_then_computes() {
        let result = analyze_text(
            "The the THE cat.",
            "doc",
            &Tokenizer::default(),
            &TtrCalculator::default(),
        );
        assert_eq!(result.total_words, 4);
        assert_eq!(result.unique_words, 2);
        assert_eq!(result.ttr, 0.5);
    }

    #[test]
    fn engine_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TtrCalculator>();
        assert_send_sync::<TtrAggregator>();
        assert_send_sync::<Tokenizer>();
    }
}
