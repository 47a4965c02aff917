//! Declarative operations over ordered, homogeneous containers.
//!
//! This crate provides eager, side-effect free helpers that replace common
//! hand-written loops:
//!
//! - **Filtering**: keep the elements matching a predicate
//! - **Ordering**: stable sort by a derived key, ascending or descending
//! - **Projection**: transform every element, keeping the container kind
//! - **Membership**: equality search, and substring search for text
//! - **Quantifiers**: `all`, `none`, `any`
//! - **Statistics**: mean, population variance, standard deviation
//!
//! Every operation takes its input by shared reference and never mutates it.
//! Operations that produce a container allocate a new one of the same kind
//! as the input (see [`sequence::Sequence`]).
//!
//! # Modules
//!
//! - [`sequence`]: The container capability trait
//! - [`filter`]: Predicate filtering
//! - [`order`]: Keyed ordering
//! - [`select`]: Element-wise projection
//! - [`membership`]: Equality-based membership
//! - [`text`]: Text buffers, including substring search
//! - [`quantifier`]: Universal and existential predicates
//! - [`numeric`]: Numeric types usable by [`stats`]
//! - [`stats`]: Descriptive statistics
//!
//! # Examples
//!
//! ```
//! use seqops::{filter, order_by, order_by_descending, select, contains, all, any, none, mean};
//!
//! let values = vec![1, 3, 4, 2, 2];
//!
//! assert_eq!(filter(&values, |v| v % 2 == 1), vec![1, 3]);
//! assert_eq!(order_by(&values, |&v| -v), vec![4, 3, 2, 2, 1]);
//! assert_eq!(order_by_descending(&values, |&v| -v), vec![1, 2, 2, 3, 4]);
//! assert_eq!(select(&values, |&v| v * 10), vec![10, 30, 40, 20, 20]);
//! assert!(contains(&values, &4));
//! assert!(all(&values, |&v| v > 0));
//! assert!(none(&values, |&v| v < 0));
//! assert!(any(&values, |&v| v == 4));
//! assert_eq!(mean(&values), Ok(2.4));
//! ```

pub use self::{
    filter::filter,
    membership::contains,
    numeric::Numeric,
    order::{order_by, order_by_descending},
    quantifier::{all, any, none},
    select::{select, select_as, try_select},
    sequence::Sequence,
    stats::{
        StatsError, mean, mean_as, standard_deviation, standard_deviation_as, variance,
        variance_as,
    },
    text::{TextPattern, contains_text, filter_text, order_text_by, order_text_by_descending},
};

pub mod filter;
pub mod membership;
pub mod numeric;
pub mod order;
pub mod quantifier;
pub mod select;
pub mod sequence;
pub mod stats;
pub mod text;
