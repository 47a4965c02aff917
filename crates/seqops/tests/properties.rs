use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use seqops::{
    all, any, contains, filter, mean, none, order_by, order_by_descending, select, variance,
};

const ROUNDS: usize = 200;

fn random_values(rng: &mut Pcg32) -> Vec<i32> {
    let len = rng.random_range(0..40);
    (0..len).map(|_| rng.random_range(-20..20)).collect()
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}

fn is_subsequence(sub: &[i32], of: &[i32]) -> bool {
    let mut rest = of.iter();
    sub.iter().all(|s| rest.any(|o| o == s))
}

#[test]
fn test_filter_is_order_preserving_partition() {
    let mut rng = Pcg32::seed_from_u64(1);
    for _ in 0..ROUNDS {
        let values = random_values(&mut rng);
        let threshold = rng.random_range(-20..20);
        let kept = filter(&values, |&v| v < threshold);
        let dropped = filter(&values, |&v| v >= threshold);

        assert!(kept.iter().all(|&v| v < threshold));
        assert!(is_subsequence(&kept, &values));
        assert_eq!(kept.len() + dropped.len(), values.len());
    }
}

#[test]
fn test_order_by_is_sorted_permutation() {
    let mut rng = Pcg32::seed_from_u64(2);
    for _ in 0..ROUNDS {
        let values = random_values(&mut rng);
        let ascending = order_by(&values, |&v| v.abs());
        let descending = order_by_descending(&values, |&v| v.abs());

        assert!(ascending.is_sorted_by_key(|v| v.abs()));
        assert!(descending.iter().rev().is_sorted_by_key(|v| v.abs()));
        assert_eq!(sorted_copy(&ascending), sorted_copy(&values));
        assert_eq!(sorted_copy(&descending), sorted_copy(&values));
    }
}

#[test]
fn test_order_by_is_idempotent() {
    let mut rng = Pcg32::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let values = random_values(&mut rng);
        let once = order_by(&values, |&v| v % 5);
        let twice = order_by(&once, |&v| v % 5);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_orderings_reverse_without_ties() {
    let mut rng = Pcg32::seed_from_u64(4);
    for _ in 0..ROUNDS {
        let mut values = random_values(&mut rng);
        values.sort_unstable();
        values.dedup();
        let ascending = order_by(&values, |&v| -v);
        let mut descending = order_by_descending(&values, |&v| -v);
        descending.reverse();
        assert_eq!(ascending, descending);
    }
}

#[test]
fn test_select_maps_each_element() {
    let mut rng = Pcg32::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let values = VecDeque::from(random_values(&mut rng));
        let selected = select(&values, |&v| i64::from(v) * 3 - 1);
        assert_eq!(selected.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(selected[i], i64::from(v) * 3 - 1);
        }
    }
}

#[test]
fn test_contains_after_filter() {
    let mut rng = Pcg32::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let values = random_values(&mut rng);
        for v in &values {
            assert!(contains(&values, v));
            let without = filter(&values, |x| x != v);
            assert!(!contains(&without, v));
        }
    }
}

#[test]
fn test_quantifiers_agree() {
    let mut rng = Pcg32::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let values = random_values(&mut rng);
        let threshold = rng.random_range(-25..25);
        let p = |v: &i32| *v > threshold;
        let not_p = |v: &i32| *v <= threshold;
        assert_eq!(all(&values, p), none(&values, not_p));
        assert_eq!(any(&values, p), !none(&values, p));
        assert_eq!(any(&values, p), values.iter().any(p));
    }
}

#[test]
fn test_variance_is_non_negative_and_shift_invariant() {
    let mut rng = Pcg32::seed_from_u64(8);
    for _ in 0..ROUNDS {
        let values = random_values(&mut rng);
        if values.is_empty() {
            assert!(mean(&values).is_err());
            continue;
        }
        let shifted = select(&values, |&v| v + 100);
        let var = variance(&values).unwrap();
        let shifted_var = variance(&shifted).unwrap();
        assert!(var >= 0.0);
        assert!((var - shifted_var).abs() < 1e-6);
        assert!((mean(&shifted).unwrap() - mean(&values).unwrap() - 100.0).abs() < 1e-9);
    }
}
