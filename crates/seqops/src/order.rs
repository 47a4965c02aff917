use std::cmp::Ordering;

use crate::sequence::Sequence;

/// Sort direction for keyed ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn compare<K>(self, a: &K, b: &K) -> Ordering
    where
        K: PartialOrd,
    {
        let ordering = compare_keys(a, b);
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Compares keys, treating keys that are not comparable with themselves
/// (such as NaN) as equal to each other and greater than every other key.
///
/// Two distinct keys that are each comparable with themselves but not with
/// each other compare `Equal`. That is not transitive, so the result only
/// goes to [`merge_sort_by`], which tolerates it.
fn compare_keys<K>(a: &K, b: &K) -> Ordering
where
    K: PartialOrd,
{
    let a_unordered = a.partial_cmp(a).is_none();
    let b_unordered = b.partial_cmp(b).is_none();
    match (a_unordered, b_unordered) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Stable top-down merge sort.
///
/// Each element is moved into place by a single comparison against the head
/// of the other run, so an inconsistent `compare` only yields an unspecified
/// permutation and never a panic.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // ties take from the left run
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Stable sort of precomputed `(key, element)` pairs.
pub(crate) fn sort_keyed<K, T>(keyed: Vec<(K, T)>, direction: Direction) -> Vec<(K, T)>
where
    K: PartialOrd,
{
    merge_sort_by(keyed, &mut |(a, _): &(K, T), (b, _): &(K, T)| {
        direction.compare(a, b)
    })
}

fn order_with<S, F, K>(seq: &S, mut key: F, direction: Direction) -> S
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    let keyed = seq.items().map(|item| (key(item), item)).collect::<Vec<_>>();
    let sorted = sort_keyed(keyed, direction);
    S::from_items(sorted.into_iter().map(|(_, item)| item.clone()))
}

/// Returns a copy of `seq` ordered by ascending `key`.
///
/// The sort is stable: elements with equal keys keep their original relative
/// order. `key` is evaluated exactly once per element. Keys that cannot be
/// compared with themselves (NaN) are placed after all other keys.
///
/// Keys should otherwise be totally ordered. Two keys that are incomparable
/// with each other but not with themselves are treated as equal, which gives
/// an unspecified (but complete and panic-free) placement.
///
/// # Examples
///
/// ```
/// use seqops::order::order_by;
///
/// let values = vec![1, 3, 4, 2, 2];
/// assert_eq!(order_by(&values, |&v| -(v as f32)), vec![4, 3, 2, 2, 1]);
/// ```
#[must_use]
pub fn order_by<S, F, K>(seq: &S, key: F) -> S
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    order_with(seq, key, Direction::Ascending)
}

/// Returns a copy of `seq` ordered by descending `key`.
///
/// Like [`order_by`] the sort is stable, so equal keys are *not* reversed
/// relative to each other. Keys that cannot be compared with themselves
/// (NaN) come first. Other incomparable keys are handled as in
/// [`order_by`].
///
/// # Examples
///
/// ```
/// use seqops::order::order_by_descending;
///
/// let values = vec![1, 3, 4, 2, 2];
/// assert_eq!(order_by_descending(&values, |&v| -(v as f32)), vec![1, 2, 2, 3, 4]);
/// ```
#[must_use]
pub fn order_by_descending<S, F, K>(seq: &S, key: F) -> S
where
    S: Sequence,
    S::Item: Clone,
    F: FnMut(&S::Item) -> K,
    K: PartialOrd,
{
    order_with(seq, key, Direction::Descending)
}
