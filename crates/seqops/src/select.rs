//! Element-wise projection into the same container kind.

use crate::sequence::Sequence;

/// Applies `transform` to every element, keeping the container kind.
///
/// The element type of the result is inferred from the return type of
/// `transform`.
///
/// # Examples
///
/// ```
/// use seqops::select::select;
///
/// let values = vec![1, 3, 4, 2, 2];
/// let inverse = select(&values, |&v| 1.0 / v as f32);
/// assert_eq!(inverse, vec![1.0, 1.0 / 3.0, 0.25, 0.5, 0.5]);
/// ```
#[must_use]
pub fn select<S, F, U>(seq: &S, transform: F) -> S::Rebind<U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> U,
{
    <S::Rebind<U> as Sequence>::from_items(seq.items().map(transform))
}

/// Applies `transform` to every element, producing elements of the explicit
/// type `U`.
///
/// `transform` may return any type convertible into `U`, which makes this
/// the form to use when the result needs widening.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use seqops::select::select_as;
///
/// let values = VecDeque::from([1_u8, 2, 4]);
/// let widened = select_as::<u64, _, _, _>(&values, |&v| v * 2);
/// assert_eq!(widened, VecDeque::from([2_u64, 4, 8]));
/// ```
#[must_use]
pub fn select_as<U, S, F, R>(seq: &S, mut transform: F) -> S::Rebind<U>
where
    S: Sequence,
    F: FnMut(&S::Item) -> R,
    R: Into<U>,
{
    <S::Rebind<U> as Sequence>::from_items(seq.items().map(|item| transform(item).into()))
}

/// Applies a fallible `transform` to every element.
///
/// Stops at the first element whose transform fails and returns that error
/// unchanged; no partial result is produced.
///
/// # Examples
///
/// ```
/// use seqops::select::try_select;
///
/// let words = vec!["1", "20", "300"];
/// let parsed = try_select(&words, |w| w.parse::<u32>()).unwrap();
/// assert_eq!(parsed, vec![1, 20, 300]);
///
/// let words = vec!["1", "x", "300"];
/// assert!(try_select(&words, |w| w.parse::<u32>()).is_err());
/// ```
pub fn try_select<S, F, U, E>(seq: &S, transform: F) -> Result<S::Rebind<U>, E>
where
    S: Sequence,
    F: FnMut(&S::Item) -> Result<U, E>,
{
    let selected = seq.items().map(transform).collect::<Result<Vec<_>, E>>()?;
    Ok(<S::Rebind<U> as Sequence>::from_items(selected))
}
