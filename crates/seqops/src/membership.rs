use crate::sequence::Sequence;

/// Returns `true` if some element compares equal to `value`.
///
/// This is whole-element equality. For substring search in text use
/// [`contains_text`](crate::text::contains_text).
///
/// # Examples
///
/// ```
/// use seqops::membership::contains;
///
/// let values = vec![1, 3, 4, 2, 2];
/// assert!(contains(&values, &4));
/// assert!(!contains(&values, &5));
///
/// let words = vec![String::from("Happy"), String::from("birthday")];
/// assert!(contains(&words, "Happy"));
/// assert!(!contains(&words, "Ha"));
/// ```
#[must_use]
pub fn contains<S, Q>(seq: &S, value: &Q) -> bool
where
    S: Sequence,
    S::Item: PartialEq<Q>,
    Q: ?Sized,
{
    seq.items().any(|item| item == value)
}
