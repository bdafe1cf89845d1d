//! Tests for request holders.

use lockstep_config::EvaluationConfig;
use lockstep_core::{source, LockstepError};
use lockstep_test::{sample_orders, Boom, CountingSource, FailOn, FailingSource, ProbeConsumer};
use rust_decimal::Decimal;

use super::*;
use crate::consumer::SumConsumer;
use crate::select::Identity;

#[test]
fn test_begin_holds_one_request() {
    let holder = RequestHolder::begin(vec![1i32, 2, 3], SumConsumer::<i32, i32, _>::new(Identity));
    assert_eq!(holder.arity(), 1);
    let (total,) = holder.extract().unwrap();
    assert_eq!(total, 6);
}

#[test]
fn test_each_request_grows_arity() {
    let holder = requests(vec![1u8, 2]).count();
    assert_eq!(holder.arity(), 1);
    let holder = holder.sum().first_or_default();
    assert_eq!(holder.arity(), 3);
}

#[test]
fn test_first_where_and_sum_share_one_pass() {
    let source = CountingSource::new(vec![1i64, 2, 3, 4, 5]);
    let stats = source.stats();

    let (first, total) = requests(source)
        .first_or_default_where(|x| *x > 3)
        .sum()
        .extract()
        .unwrap();

    assert_eq!(first, 4);
    assert_eq!(total, 15);
    assert_eq!(stats.opens(), 1);
    assert_eq!(stats.releases(), 1);
    assert_eq!(stats.yielded(), 5);
}

#[test]
fn test_sum_by_selector() {
    let (doubled,) = requests(vec![1i64, 2, 3])
        .sum_by(|x| x * 2)
        .extract()
        .unwrap();
    assert_eq!(doubled, 12);
}

#[test]
fn test_sum_optional_skips_absent() {
    let (total, count) = requests(vec![Some(5i32), None, Some(3), None])
        .sum_optional()
        .count()
        .extract()
        .unwrap();
    assert_eq!(total, 8);
    assert_eq!(count, 4);
}

#[test]
fn test_empty_source_defaults() {
    let (sum, first, fallback, count, fold) = requests(Vec::<i32>::new())
        .sum()
        .first_or_default()
        .first_or(-1)
        .count()
        .fold(String::from("seed"), |acc, x| acc.push_str(&x.to_string()))
        .extract()
        .unwrap();

    assert_eq!(sum, 0);
    assert_eq!(first, 0);
    assert_eq!(fallback, -1);
    assert_eq!(count, 0);
    assert_eq!(fold, "seed");
}

#[test]
fn test_decimal_order_totals() {
    let (revenue, discounts, big_orders, first_undiscounted) = requests(sample_orders())
        .sum_by(|o| o.line_total())
        .sum_optional_by(|o| o.discount)
        .count_where(|o| o.quantity >= 4)
        .first_or_where(Default::default(), |o| o.discount.is_none())
        .extract()
        .unwrap();

    // 2.20 + 1.25 + 10.00 + 10.00
    assert_eq!(revenue, Decimal::new(2345, 2));
    assert_eq!(discounts, 8);
    assert_eq!(big_orders, 2);
    assert_eq!(first_undiscounted.id, 2);
}

#[test]
fn test_selector_failure_abandons_all_requests() {
    let source = CountingSource::new(vec![10i32, 20, 30, 40]);
    let stats = source.stats();
    let log = ProbeConsumer::log();
    let probe = ProbeConsumer::new(0, &log);
    let finishes = probe.finishes();

    let mut calls = 0;
    let result = requests(source)
        .add(probe)
        .try_sum_by(move |x| {
            calls += 1;
            if calls == 3 {
                Err(Boom::new("third element"))
            } else {
                Ok(*x)
            }
        })
        .count()
        .extract();

    match result {
        Err(LockstepError::Callback(e)) => assert_eq!(e.to_string(), "boom: third element"),
        other => panic!("unexpected: {:?}", other.map(|_| ())),
    }
    assert_eq!(log.borrow().len(), 3);
    assert_eq!(*finishes.borrow(), 0);
    assert_eq!(stats.opens(), 1);
    assert_eq!(stats.releases(), 1);
    assert_eq!(stats.yielded(), 3);
}

#[test]
fn test_consumer_failure_stops_enumeration() {
    let source = CountingSource::new(vec![1, 2, 3, 4, 5]);
    let stats = source.stats();

    let result = requests(source).count().add(FailOn(2)).extract();

    assert!(matches!(result, Err(LockstepError::Callback(_))));
    assert_eq!(stats.yielded(), 2);
    assert_eq!(stats.releases(), 1);
}

#[test]
fn test_source_open_failure() {
    let source = FailingSource::<i32>::new();
    let stats = source.stats();

    let result = requests(source).sum().count().extract();

    assert!(matches!(result, Err(LockstepError::Source(_))));
    assert_eq!(stats.opens(), 1);
}

#[test]
fn test_try_first_predicate_failure() {
    let result = requests(vec![1, 2, 3])
        .try_first_or_default_where(|x| {
            if *x == 2 {
                Err("cannot compare")
            } else {
                Ok(false)
            }
        })
        .extract();
    assert!(matches!(result, Err(LockstepError::Callback(_))));
}

#[test]
fn test_try_fold() {
    let (product,) = requests(vec![2u64, 3, 7])
        .try_fold(1u64, |acc, x| {
            *acc = acc.checked_mul(*x).ok_or("overflow")?;
            Ok::<(), &str>(())
        })
        .extract()
        .unwrap();
    assert_eq!(product, 42);
}

#[test]
fn test_get_bridges_stream_transform() {
    let (evens, running) = requests(vec![1i32, 2, 3, 4, 5, 6])
        .get(|s| s.filter(|x| x % 2 == 0).count())
        .get(|s| s.scan(0, |acc, x| *acc += x).take(3))
        .extract()
        .unwrap();
    assert_eq!(evens, 3);
    assert_eq!(running, 6);
}

#[test]
fn test_try_get_rejects_before_enumeration() {
    let source = CountingSource::new(vec![1, 2, 3]);
    let stats = source.stats();

    let result = requests(source)
        .count()
        .try_get(|_s| Err::<crate::stream::Stream<i32, i32>, _>(Boom::new("bad window")));

    assert!(matches!(result, Err(LockstepError::Callback(_))));
    assert_eq!(stats.opens(), 0);
}

#[test]
fn test_try_get_accepts_valid_transform() {
    let (count, last) = requests(vec![4, 5, 6])
        .count()
        .try_get(|s| Ok::<_, Boom>(s.last()))
        .unwrap()
        .extract()
        .unwrap();
    assert_eq!(count, 3);
    assert_eq!(last, 6);
}

#[test]
fn test_borrowed_and_lazy_sources() {
    let data = vec![3, 1, 4, 1, 5];
    let (total,) = requests(&data).sum().extract().unwrap();
    let (ones,) = requests(data.as_slice())
        .count_where(|x| *x == 1)
        .extract()
        .unwrap();
    let (squares,) = requests(source::iter((1..=4).map(|x| x * x)))
        .sum()
        .extract()
        .unwrap();

    assert_eq!(total, 14);
    assert_eq!(ones, 2);
    assert_eq!(squares, 30);
    assert_eq!(data.len(), 5);
}

#[test]
fn test_extract_with_config() {
    let config = EvaluationConfig::new()
        .with_name("holder")
        .with_progress_interval(1);
    let (count,) = requests([1, 2, 3]).count().extract_with(&config).unwrap();
    assert_eq!(count, 3);
}
