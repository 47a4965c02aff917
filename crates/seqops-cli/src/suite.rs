//! The fixed checks run by the harness, one group per library operation.

use std::{collections::VecDeque, str::FromStr};

use seqops::{
    StatsError, all, any, contains, contains_text, filter, mean, mean_as, none, order_by,
    order_by_descending, select, select_as, standard_deviation, variance,
};

use crate::check::{CheckFailure, Checker};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, serde::Serialize)]
pub(crate) enum Group {
    Where,
    OrderBy,
    OrderByDescending,
    Select,
    Contains,
    All,
    None,
    Any,
    Mean,
    Variant,
    #[display("Standard_Deviation")]
    StandardDeviation,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown operation group `{_0}`")]
pub(crate) struct UnknownGroupError(#[error(not(source))] String);

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|&ch| ch != '_')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

/// Accepts both the variant name and the printed label, ignoring case and
/// underscores (`StandardDeviation`, `Standard_Deviation`,
/// `standard_deviation`).
impl FromStr for Group {
    type Err = UnknownGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Group::ALL
            .into_iter()
            .find(|group| normalize(&format!("{group:?}")) == wanted)
            .ok_or_else(|| UnknownGroupError(s.to_owned()))
    }
}

fn sample() -> Vec<i32> {
    vec![1, 3, 4, 2, 2]
}

fn population_variance_by_hand() -> f64 {
    let m = f64::from(1 + 3 + 4 + 2 + 2) / 5.0;
    let sqr = |x: f64| x * x;
    (sqr(1.0 - m) + sqr(3.0 - m) + sqr(4.0 - m) + sqr(2.0 - m) + sqr(2.0 - m)) / 5.0
}

impl Group {
    pub(crate) const ALL: [Group; 11] = [
        Group::Where,
        Group::OrderBy,
        Group::OrderByDescending,
        Group::Select,
        Group::Contains,
        Group::All,
        Group::None,
        Group::Any,
        Group::Mean,
        Group::Variant,
        Group::StandardDeviation,
    ];

    pub(crate) fn run(self, c: &mut Checker) -> Result<(), CheckFailure> {
        match self {
            Group::Where => check_where(c),
            Group::OrderBy => check_order_by(c),
            Group::OrderByDescending => check_order_by_descending(c),
            Group::Select => check_select(c),
            Group::Contains => check_contains(c),
            Group::All => check_all(c),
            Group::None => check_none(c),
            Group::Any => check_any(c),
            Group::Mean => check_mean(c),
            Group::Variant => check_variant(c),
            Group::StandardDeviation => check_standard_deviation(c),
        }
    }
}

fn check_where(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = vec![1, 2, 3, 4, 5];
    c.ensure_eq(&filter(&values, |v| v % 2 == 1), &vec![1, 3, 5], "odd of 1..=5")?;
    c.ensure_eq(&filter(&sample(), |v| v % 2 == 1), &vec![1, 3], "odd of sample")?;
    c.ensure_eq(
        &filter(&VecDeque::from(sample()), |&v| v > 10),
        &VecDeque::new(),
        "no match",
    )?;
    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn negated(v: &i32) -> f32 {
    -(*v as f32)
}

fn check_order_by(c: &mut Checker) -> Result<(), CheckFailure> {
    c.ensure_eq(
        &order_by(&sample(), negated),
        &vec![4, 3, 2, 2, 1],
        "by negated float key",
    )?;
    let words = vec!["pear", "fig", "kiwi", "yam"];
    c.ensure_eq(
        &order_by(&words, |w| w.len()),
        &vec!["fig", "yam", "pear", "kiwi"],
        "stable on equal keys",
    )?;
    Ok(())
}

fn check_order_by_descending(c: &mut Checker) -> Result<(), CheckFailure> {
    c.ensure_eq(
        &order_by_descending(&sample(), negated),
        &vec![1, 2, 2, 3, 4],
        "by negated float key",
    )?;
    Ok(())
}

#[expect(clippy::cast_precision_loss)]
fn inverse(v: &i32) -> f32 {
    1.0 / *v as f32
}

fn check_select(c: &mut Checker) -> Result<(), CheckFailure> {
    let expected = vec![1.0_f32, 1.0 / 3.0, 1.0 / 4.0, 1.0 / 2.0, 1.0 / 2.0];
    c.ensure_eq(&select(&sample(), inverse), &expected, "inferred type")?;
    c.ensure_eq(
        &select_as::<f32, _, _, _>(&sample(), inverse),
        &expected,
        "explicit type",
    )?;
    c.ensure_eq(
        &select_as::<f64, _, _, _>(&sample(), inverse),
        &expected.iter().copied().map(f64::from).collect::<Vec<_>>(),
        "widened type",
    )?;
    Ok(())
}

fn check_contains(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = sample();
    c.ensure(contains(&values, &4), "4 is present")?;
    c.ensure(!contains(&values, &5), "5 is absent")?;

    let father = String::from("Happy birthday.");
    c.ensure(contains_text(&father, "Happy"), "substring \"Happy\"")?;
    c.ensure(!contains_text(&father, "Ha.."), "no substring \"Ha..\"")?;
    Ok(())
}

fn check_all(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = sample();
    c.ensure(all(&values, |&v| v > 0), "all > 0")?;
    c.ensure(!all(&values, |&v| v > 1), "not all > 1")?;
    c.ensure(all(&Vec::<i32>::new(), |_| false), "vacuous on empty")?;
    Ok(())
}

fn check_none(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = sample();
    c.ensure(none(&values, |&v| v < 0), "none < 0")?;
    c.ensure(!none(&values, |&v| v > 1), "some > 1")?;
    c.ensure(!none(&values, |&v| v < 2), "some < 2")?;
    c.ensure(none(&Vec::<i32>::new(), |_| true), "vacuous on empty")?;
    Ok(())
}

fn check_any(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = sample();
    c.ensure(any(&values, |&v| v == 4), "some == 4")?;
    c.ensure(!any(&values, |&v| v == 5), "none == 5")?;
    c.ensure(!any(&Vec::<i32>::new(), |_| true), "false on empty")?;
    Ok(())
}

fn check_mean(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = sample();
    c.ensure_eq(&mean_as::<i32, _>(&values), &Ok(2), "integer mean")?;
    c.ensure_eq(&mean(&values), &Ok(2.4), "default mean")?;
    c.ensure_eq(&mean_as::<f64, _>(&values), &Ok(2.4), "explicit mean")?;
    c.ensure_eq(
        &mean(&Vec::<i32>::new()),
        &Err(StatsError::EmptySequence),
        "empty input",
    )?;
    Ok(())
}

fn check_variant(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = sample();
    c.ensure_eq(
        &variance(&values),
        &Ok(population_variance_by_hand()),
        "population variance",
    )?;
    c.ensure_eq(
        &variance(&Vec::<f64>::new()),
        &Err(StatsError::EmptySequence),
        "empty input",
    )?;
    Ok(())
}

fn check_standard_deviation(c: &mut Checker) -> Result<(), CheckFailure> {
    let values = sample();
    c.ensure_eq(
        &standard_deviation(&values),
        &Ok(population_variance_by_hand().sqrt()),
        "population standard deviation",
    )?;
    c.ensure_eq(
        &standard_deviation(&Vec::<f64>::new()),
        &Err(StatsError::EmptySequence),
        "empty input",
    )?;
    Ok(())
}
