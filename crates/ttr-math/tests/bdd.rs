use ttr_math::{consecutive_diffs, ratio, root_ratio, std_dev, summarize};

#[test]
fn given_zero_tokens_when_ratio_is_computed_then_result_is_zero() {
    assert_eq!(ratio(0, 0), 0.0);
    assert_eq!(root_ratio(0, 0), 0.0);
}

#[test]
fn given_one_repeated_type_when_ratio_is_computed_then_result_is_reciprocal() {
    assert_eq!(ratio(1, 5), 0.2);
}

#[test]
fn given_single_value_when_std_dev_is_computed_then_spread_is_zero() {
    assert_eq!(std_dev(&[0.42]), Some(0.0));
}

#[test]
fn given_two_chunks_when_diffs_are_taken_then_one_delta_remains() {
    let diffs = consecutive_diffs(&[0.4, 0.5]);
    assert_eq!(diffs.len(), 1);
    assert!((diffs[0] - 0.1).abs() < 1e-12);
}

#[test]
fn given_mixed_series_when_summarized_then_extrema_bound_the_mean() {
    let s = summarize(&[0.3, 0.9, 0.6]).unwrap();
    assert_eq!(s.min, 0.3);
    assert_eq!(s.max, 0.9);
    assert!((s.mean - 0.6).abs() < 1e-12);
}
