//! Universal, existential, and negated-existential predicates.
//!
//! All three stop scanning at the first element that decides the answer.
//! They are related by `all(s, p) == none(s, !p)` and
//! `any(s, p) == !none(s, p)`.

use crate::sequence::Sequence;

/// Returns `true` if every element satisfies `predicate`.
///
/// Vacuously `true` for an empty sequence.
///
/// # Examples
///
/// ```
/// use seqops::quantifier::all;
///
/// let values = vec![1, 3, 4, 2, 2];
/// assert!(all(&values, |&v| v > 0));
/// assert!(!all(&values, |&v| v > 1));
/// ```
#[must_use]
pub fn all<S, P>(seq: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    seq.items().all(|item| predicate(item))
}

/// Returns `true` if no element satisfies `predicate`.
///
/// Vacuously `true` for an empty sequence.
///
/// # Examples
///
/// ```
/// use seqops::quantifier::none;
///
/// let values = vec![1, 3, 4, 2, 2];
/// assert!(none(&values, |&v| v < 0));
/// assert!(!none(&values, |&v| v > 1));
/// ```
#[must_use]
pub fn none<S, P>(seq: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    !seq.items().any(|item| predicate(item))
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Always `false` for an empty sequence.
///
/// # Examples
///
/// ```
/// use seqops::quantifier::any;
///
/// let values = vec![1, 3, 4, 2, 2];
/// assert!(any(&values, |&v| v == 4));
/// assert!(!any(&values, |&v| v == 5));
/// ```
#[must_use]
pub fn any<S, P>(seq: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    seq.items().any(|item| predicate(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_consistency<S>(values: &S, threshold: i32)
    where
        S: Sequence<Item = i32>,
    {
        let p = |v: &i32| *v > threshold;
        let not_p = |v: &i32| *v <= threshold;
        assert_eq!(all(values, p), none(values, not_p));
        assert_eq!(any(values, p), !none(values, p));
    }

    #[test]
    fn test_empty_input() {
        let values: Vec<i32> = vec![];
        assert!(all(&values, |_| false));
        assert!(none(&values, |_| true));
        assert!(!any(&values, |_| true));
    }

    #[test]
    fn test_consistency_laws() {
        let cases = [
            vec![],
            vec![5, 6, 7],
            vec![-1, -2, 0],
            vec![1, 3, 4, 2, 2],
        ];
        for values in &cases {
            check_consistency(values, 0);
            check_consistency(values, 2);
        }
    }

    #[test]
    fn test_none_rejects_partial_matches() {
        let values = vec![1, 3, 4, 2, 2];
        assert!(!none(&values, |&v| v < 2));
    }

    #[test]
    fn test_short_circuits() {
        let values = vec![1, 2, 3, 4, 5];

        let mut visited = 0;
        assert!(!all(&values, |&v| {
            visited += 1;
            v < 2
        }));
        assert_eq!(visited, 2);

        let mut visited = 0;
        assert!(!none(&values, |&v| {
            visited += 1;
            v == 3
        }));
        assert_eq!(visited, 3);

        let mut visited = 0;
        assert!(any(&values, |&v| {
            visited += 1;
            v == 1
        }));
        assert_eq!(visited, 1);
    }
}
