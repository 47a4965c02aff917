use std::collections::{LinkedList, VecDeque};

use seqops::{
    all, any, contains, contains_text, filter, filter_text, mean, mean_as, none, order_by,
    order_by_descending, order_text_by, select, select_as, standard_deviation, variance,
};

fn sample() -> Vec<i32> {
    vec![1, 3, 4, 2, 2]
}

#[test]
fn test_filter_odd() {
    assert_eq!(filter(&vec![1, 2, 3, 4, 5], |v| v % 2 == 1), vec![1, 3, 5]);
    assert_eq!(filter(&sample(), |v| v % 2 == 1), vec![1, 3]);
}

#[test]
fn test_order_by_negated_float_key() {
    #[expect(clippy::cast_precision_loss)]
    let neg = |v: &i32| -(*v as f32);
    assert_eq!(order_by(&sample(), neg), vec![4, 3, 2, 2, 1]);
    assert_eq!(order_by_descending(&sample(), neg), vec![1, 2, 2, 3, 4]);
}

#[test]
fn test_select_inverse() {
    #[expect(clippy::cast_precision_loss)]
    let inverse = |v: &i32| 1.0_f32 / *v as f32;
    let expected = vec![1.0_f32, 1.0 / 3.0, 1.0 / 4.0, 1.0 / 2.0, 1.0 / 2.0];
    assert_eq!(select(&sample(), inverse), expected);
    assert_eq!(select_as::<f32, _, _, _>(&sample(), inverse), expected);
}

#[test]
fn test_contains() {
    assert!(contains(&sample(), &4));
    assert!(!contains(&sample(), &5));

    let father = String::from("Happy birthday.");
    assert!(contains_text(&father, "Happy"));
    assert!(!contains_text(&father, "Ha.."));
}

#[test]
fn test_quantifiers() {
    let values = sample();
    assert!(all(&values, |&v| v > 0));
    assert!(!all(&values, |&v| v > 1));
    assert!(none(&values, |&v| v < 0));
    assert!(!none(&values, |&v| v > 1));
    assert!(!none(&values, |&v| v < 2));
    assert!(any(&values, |&v| v == 4));
}

#[test]
fn test_statistics() {
    let values = sample();
    assert_eq!(mean_as::<i32, _>(&values), Ok(2));
    assert_eq!(mean(&values), Ok(2.4));

    let var = variance(&values).unwrap();
    assert!((var - 1.04).abs() < 1e-12);

    let std_dev = standard_deviation(&values).unwrap();
    assert!((std_dev - 1.0198).abs() < 1e-4);
    assert!((std_dev * std_dev - var).abs() < 1e-12);
}

#[test]
fn test_other_containers() {
    let deque = VecDeque::from(sample());
    assert_eq!(filter(&deque, |v| v % 2 == 0), VecDeque::from([4, 2, 2]));

    let list = sample().into_iter().collect::<LinkedList<_>>();
    let ordered = order_by(&list, |&v| v);
    assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![1, 2, 2, 3, 4]);

    let boxed: Box<[i32]> = sample().into_boxed_slice();
    assert_eq!(mean(&boxed), Ok(2.4));

    assert_eq!(filter_text("Happy birthday.", |c| c != ' '), "Happybirthday.");
    assert_eq!(order_text_by("dcba", |c| c), "abcd");
}
