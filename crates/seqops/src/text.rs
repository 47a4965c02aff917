//! Operations on text buffers.
//!
//! A `String` is not a [`Sequence`](crate::sequence::Sequence) of references,
//! so text gets its own entry points. Membership in particular means
//! something different for text: [`contains_text`] searches for a substring,
//! while [`contains`](crate::membership::contains) compares whole elements.

use crate::order::{Direction, sort_keyed};

/// A needle that can be searched for inside a text buffer.
pub trait TextPattern {
    /// Returns `true` if `self` occurs anywhere in `haystack`.
    fn occurs_in(&self, haystack: &str) -> bool;
}

impl TextPattern for str {
    fn occurs_in(&self, haystack: &str) -> bool {
        haystack.contains(self)
    }
}

impl TextPattern for String {
    fn occurs_in(&self, haystack: &str) -> bool {
        haystack.contains(self.as_str())
    }
}

impl TextPattern for char {
    fn occurs_in(&self, haystack: &str) -> bool {
        haystack.contains(*self)
    }
}

impl<P> TextPattern for &P
where
    P: TextPattern + ?Sized,
{
    fn occurs_in(&self, haystack: &str) -> bool {
        (**self).occurs_in(haystack)
    }
}

/// Returns `true` if `needle` occurs anywhere in `haystack`.
///
/// An empty needle occurs in every haystack.
///
/// # Examples
///
/// ```
/// use seqops::text::contains_text;
///
/// let greeting = String::from("Happy birthday.");
/// assert!(contains_text(&greeting, "Happy"));
/// assert!(contains_text(&greeting, String::from("day.")));
/// assert!(contains_text(&greeting, 'b'));
/// assert!(!contains_text(&greeting, "Ha.."));
/// ```
#[must_use]
pub fn contains_text<P>(haystack: &str, needle: P) -> bool
where
    P: TextPattern,
{
    needle.occurs_in(haystack)
}

/// Returns a new string holding the characters that satisfy `predicate`.
///
/// # Examples
///
/// ```
/// use seqops::text::filter_text;
///
/// assert_eq!(filter_text("Happy birthday.", char::is_alphabetic), "Happybirthday");
/// ```
#[must_use]
pub fn filter_text<P>(text: &str, mut predicate: P) -> String
where
    P: FnMut(char) -> bool,
{
    text.chars().filter(|&c| predicate(c)).collect()
}

fn order_text_with<F, K>(text: &str, mut key: F, direction: Direction) -> String
where
    F: FnMut(char) -> K,
    K: PartialOrd,
{
    let keyed = text.chars().map(|c| (key(c), c)).collect::<Vec<_>>();
    sort_keyed(keyed, direction)
        .into_iter()
        .map(|(_, c)| c)
        .collect()
}

/// Returns the characters of `text` ordered by ascending `key` (stable).
///
/// # Examples
///
/// ```
/// use seqops::text::order_text_by;
///
/// assert_eq!(order_text_by("banana", |c| c), "aaabnn");
/// ```
#[must_use]
pub fn order_text_by<F, K>(text: &str, key: F) -> String
where
    F: FnMut(char) -> K,
    K: PartialOrd,
{
    order_text_with(text, key, Direction::Ascending)
}

/// Returns the characters of `text` ordered by descending `key` (stable).
#[must_use]
pub fn order_text_by_descending<F, K>(text: &str, key: F) -> String
where
    F: FnMut(char) -> K,
    K: PartialOrd,
{
    order_text_with(text, key, Direction::Descending)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_search() {
        let father = String::from("Happy birthday.");
        assert!(contains_text(&father, "Happy"));
        assert!(!contains_text(&father, "Ha.."));
        assert!(contains_text(&father, &String::from("birth")));
        assert!(!contains_text(&father, 'z'));
    }

    #[test]
    fn test_empty_needle_and_haystack() {
        assert!(contains_text("", ""));
        assert!(contains_text("abc", ""));
        assert!(!contains_text("", "a"));
    }

    #[test]
    fn test_filter_text() {
        assert_eq!(filter_text("a1b2c3", |c| c.is_ascii_digit()), "123");
        assert_eq!(filter_text("", |_| true), "");
    }

    #[test]
    fn test_order_text_is_stable() {
        // Case-insensitive key, equal keys keep input order.
        let lower = |c: char| c.to_ascii_lowercase();
        assert_eq!(order_text_by("bBaA", lower), "aAbB");
        assert_eq!(order_text_by_descending("bBaA", lower), "bBaA");
    }
}
