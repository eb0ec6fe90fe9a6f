//! Property-based tests for flag layering.

use proptest::prelude::*;
use ttr_config::{ComputeArgs, Settings, TtrConfig};

proptest! {
    #[test]
    fn absent_flags_keep_file_values(min in 1usize..10_000, chunk in 1usize..10_000, details in any::<bool>()) {
        let base = Settings {
            ttr: TtrConfig::new(min, chunk, details).unwrap(),
            ..Settings::default()
        };
        let merged = ComputeArgs::default().apply(base).unwrap();
        prop_assert_eq!(merged, base);
    }

    #[test]
    fn present_flags_win(min in 1usize..10_000, chunk in 1usize..10_000) {
        let args = ComputeArgs {
            strip_numbers: true,
            min_words: Some(min),
            chunk_size: Some(chunk),
        };
        let merged = args.apply(Settings::default()).unwrap();
        prop_assert_eq!(merged.ttr.min_words_for_sttr(), min);
        prop_assert_eq!(merged.ttr.sttr_chunk_size(), chunk);
        prop_assert!(merged.tokenizer.strip_numbers);
    }
}
