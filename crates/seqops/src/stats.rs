//! Descriptive statistics over numeric sequences.
//!
//! Every function comes in two forms: a plain one computing in `f64`, and an
//! `_as` form that computes in an explicitly chosen [`Numeric`] type. The
//! explicit form follows that type's arithmetic throughout, so an integer
//! target gives a truncated mean:
//!
//! ```
//! use seqops::stats::{mean, mean_as};
//!
//! let values = vec![1, 3, 4, 2, 2];
//! assert_eq!(mean(&values), Ok(2.4));
//! assert_eq!(mean_as::<i32, _>(&values), Ok(2));
//! ```
//!
//! Empty input has no mean, so all functions return
//! [`StatsError::EmptySequence`] for it instead of dividing by zero. The
//! element count must also fit the target type, which a narrow integer such
//! as `u8` cannot always do:
//!
//! ```
//! use seqops::stats::{StatsError, mean_as};
//!
//! let values = vec![0_u8; 256];
//! assert_eq!(mean_as::<u8, _>(&values), Err(StatsError::CountOverflow { count: 256 }));
//! assert_eq!(mean_as::<u16, _>(&values), Ok(0));
//! ```

use num_traits::AsPrimitive;

use crate::{numeric::Numeric, sequence::Sequence};

/// Error returned when statistics cannot be computed in the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    /// The sequence has no elements.
    #[display("cannot compute statistics of an empty sequence")]
    EmptySequence,
    /// The element count is not representable in the target type, so it
    /// cannot be used as a divisor.
    #[display("element count {count} does not fit the target numeric type")]
    CountOverflow { count: usize },
}

/// Arithmetic mean computed in `f64`.
pub fn mean<S>(seq: &S) -> Result<f64, StatsError>
where
    S: Sequence,
    S::Item: AsPrimitive<f64>,
{
    mean_as(seq)
}

/// Arithmetic mean computed in `T`.
///
/// Elements are converted to `T` with `as` semantics and summed left to
/// right, then divided by the element count in `T`.
///
/// # Returns
///
/// - `Ok(mean)` for non-empty input
/// - `Err(StatsError::EmptySequence)` if `seq` is empty
/// - `Err(StatsError::CountOverflow)` if the element count does not fit in `T`
pub fn mean_as<T, S>(seq: &S) -> Result<T, StatsError>
where
    T: Numeric,
    S: Sequence,
    S::Item: AsPrimitive<T>,
{
    mean_and_count(seq).map(|(mean, _)| mean)
}

/// Population variance computed in `f64`.
///
/// # Examples
///
/// ```
/// use seqops::stats::variance;
///
/// let values = vec![1, 3, 4, 2, 2];
/// let var = variance(&values).unwrap();
/// assert!((var - 1.04).abs() < 1e-12);
/// ```
pub fn variance<S>(seq: &S) -> Result<f64, StatsError>
where
    S: Sequence,
    S::Item: AsPrimitive<f64>,
{
    variance_as(seq)
}

/// Population variance computed in `T`.
///
/// This is the mean of the squared deviations from the mean, divided by the
/// element count (not the count minus one).
///
/// # Returns
///
/// - `Ok(variance)` for non-empty input
/// - `Err(StatsError::EmptySequence)` if `seq` is empty
/// - `Err(StatsError::CountOverflow)` if the element count does not fit in `T`
pub fn variance_as<T, S>(seq: &S) -> Result<T, StatsError>
where
    T: Numeric,
    S: Sequence,
    S::Item: AsPrimitive<T>,
{
    let (mean, count) = mean_and_count::<T, S>(seq)?;
    let sum_sq = seq.items().fold(T::zero(), |acc, &v| {
        let dev = AsPrimitive::<T>::as_(v).abs_diff(mean);
        acc + dev * dev
    });
    Ok(sum_sq / count)
}

/// Population standard deviation computed in `f64`.
///
/// # Examples
///
/// ```
/// use seqops::stats::standard_deviation;
///
/// let values = vec![1, 3, 4, 2, 2];
/// let std_dev = standard_deviation(&values).unwrap();
/// assert!((std_dev - 1.0198).abs() < 1e-4);
/// ```
pub fn standard_deviation<S>(seq: &S) -> Result<f64, StatsError>
where
    S: Sequence,
    S::Item: AsPrimitive<f64>,
{
    standard_deviation_as(seq)
}

/// Population standard deviation computed in `T`.
///
/// # Returns
///
/// The square root of [`variance_as`], with the same errors.
pub fn standard_deviation_as<T, S>(seq: &S) -> Result<T, StatsError>
where
    T: Numeric,
    S: Sequence,
    S::Item: AsPrimitive<T>,
{
    Ok(variance_as::<T, S>(seq)?.sqrt())
}

/// Returns the mean together with the divisor it was computed with.
fn mean_and_count<T, S>(seq: &S) -> Result<(T, T), StatsError>
where
    T: Numeric,
    S: Sequence,
    S::Item: AsPrimitive<T>,
{
    let count = match seq.len() {
        0 => return Err(StatsError::EmptySequence),
        n => T::from_count(n).ok_or(StatsError::CountOverflow { count: n })?,
    };
    let sum = seq.items().fold(T::zero(), |acc, &v| acc + AsPrimitive::<T>::as_(v));
    Ok((sum / count, count))
}
