use std::collections::{LinkedList, VecDeque};

/// An ordered, homogeneous container the operations in this crate work on.
///
/// A `Sequence` can be iterated by reference, rebuilt from an iterator of
/// owned elements, and asked for its length. [`Sequence::Rebind`] names the
/// same container kind holding a different element type, which is what lets
/// [`select`](crate::select::select) turn a `VecDeque<i32>` into a
/// `VecDeque<f32>` rather than into some fixed container.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use seqops::sequence::Sequence;
///
/// let values = VecDeque::from([1, 2, 3]);
/// assert_eq!(Sequence::len(&values), 3);
///
/// let doubled = VecDeque::from_items(values.items().map(|v| v * 2));
/// assert_eq!(doubled, VecDeque::from([2, 4, 6]));
/// ```
pub trait Sequence {
    /// The element type.
    type Item;

    /// The same container kind holding `U` elements.
    type Rebind<U>: Sequence<Item = U>;

    /// Iterates over the elements in their natural order.
    fn items(&self) -> impl Iterator<Item = &Self::Item>;

    /// Builds a new container from elements in iteration order.
    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self::Item>,
        Self: Sized;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! impl_sequence {
    ($($container:ident),* $(,)?) => {
        $(
            impl<T> Sequence for $container<T> {
                type Item = T;
                type Rebind<U> = $container<U>;

                fn items(&self) -> impl Iterator<Item = &T> {
                    self.iter()
                }

                fn from_items<I>(items: I) -> Self
                where
                    I: IntoIterator<Item = T>,
                {
                    items.into_iter().collect()
                }

                fn len(&self) -> usize {
                    $container::len(self)
                }
            }
        )*
    };
}

impl_sequence!(Vec, VecDeque, LinkedList);

impl<T> Sequence for Box<[T]> {
    type Item = T;
    type Rebind<U> = Box<[U]>;

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }

    fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        items.into_iter().collect()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}
