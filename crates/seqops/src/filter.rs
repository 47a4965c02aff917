use crate::sequence::Sequence;

/// Returns a new container holding the elements that satisfy `predicate`.
///
/// Matching elements keep their original relative order. The input is left
/// untouched; matches are cloned into the result.
///
/// # Examples
///
/// ```
/// use seqops::filter::filter;
///
/// let values = vec![1, 2, 3, 4, 5];
/// let odd = filter(&values, |v| v % 2 == 1);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
#[must_use]
pub fn filter<S, P>(seq: &S, mut predicate: P) -> S
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    S::from_items(seq.items().filter(|&item| predicate(item)).cloned())
}
