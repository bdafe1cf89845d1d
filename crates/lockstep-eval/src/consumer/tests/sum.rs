// Tests for the sum, count and fold consumers.

use lockstep_core::{Consumer, LockstepError};
use rust_decimal::Decimal;

use crate::factory::ConsumerFactory;

fn drive<T, C: Consumer<T>>(consumer: &mut C, items: &[T]) -> lockstep_core::Result<C::Output> {
    for item in items {
        consumer.accept(item)?;
    }
    consumer.finish()
}

// ============================================================================
// Sum
// ============================================================================

#[test]
fn test_sum_integers() {
    let mut sum = ConsumerFactory::<i64>::new().sum();
    assert_eq!(drive(&mut sum, &[1, 2, 3, 4, 5]).unwrap(), 15);
}

#[test]
fn test_sum_empty_is_zero() {
    let mut sum = ConsumerFactory::<i32>::new().sum();
    assert_eq!(drive(&mut sum, &[]).unwrap(), 0);
}

#[test]
fn test_sum_overflow_is_an_error() {
    let mut sum = ConsumerFactory::<i8>::new().sum();
    match drive(&mut sum, &[100, 27, 1]) {
        Err(LockstepError::Overflow { operation }) => assert_eq!(operation, "sum"),
        other => panic!("expected overflow, got {:?}", other),
    }
}

#[test]
fn test_sum_decimal_is_exact() {
    let mut sum = ConsumerFactory::<Decimal>::new().sum();
    let tenth = Decimal::new(1, 1);
    let total = drive(&mut sum, &[tenth, tenth, tenth]).unwrap();
    assert_eq!(total, Decimal::new(3, 1));
}

#[test]
fn test_sum_by_widens_selected_value() {
    let mut sum = ConsumerFactory::<u8>::new().sum_by(|x| u64::from(*x) * 1_000);
    assert_eq!(drive(&mut sum, &[255, 255]).unwrap(), 510_000);
}

#[test]
fn test_try_sum_by_failure() {
    let mut sum = ConsumerFactory::<&str>::new().try_sum_by(|s| s.parse::<i32>());
    assert_eq!(drive(&mut sum, &["4", "2"]).unwrap(), 6);

    let mut sum = ConsumerFactory::<&str>::new().try_sum_by(|s| s.parse::<i32>());
    assert!(matches!(
        drive(&mut sum, &["4", "x"]),
        Err(LockstepError::Callback(_))
    ));
}

#[test]
fn test_sum_optional_skips_none() {
    let mut sum = ConsumerFactory::<Option<i32>>::new().sum_optional();
    assert_eq!(drive(&mut sum, &[Some(5), None, Some(3), None]).unwrap(), 8);
}

#[test]
fn test_sum_optional_all_absent_is_zero() {
    let mut sum = ConsumerFactory::<Option<i64>>::new().sum_optional();
    assert_eq!(drive(&mut sum, &[None, None]).unwrap(), 0);
}

#[test]
fn test_sum_optional_by_overflow() {
    let mut sum = ConsumerFactory::<u32>::new().sum_optional_by(|x| Some(*x));
    match drive(&mut sum, &[u32::MAX, 1]) {
        Err(LockstepError::Overflow { operation }) => assert_eq!(operation, "optional sum"),
        other => panic!("expected overflow, got {:?}", other),
    }
}

#[test]
fn test_sum_finish_is_repeatable() {
    let mut sum = ConsumerFactory::<i32>::new().sum();
    sum.accept(&7).unwrap();
    assert_eq!(sum.finish().unwrap(), 7);
    assert_eq!(sum.finish().unwrap(), 7);
}

// ============================================================================
// Count and fold
// ============================================================================

#[test]
fn test_count_and_count_where() {
    let factory = ConsumerFactory::<i32>::new();
    let mut all = factory.count();
    let mut odd = factory.count_where(|x| x % 2 != 0);
    assert_eq!(drive(&mut all, &[1, 2, 3, 4, 5]).unwrap(), 5);
    assert_eq!(drive(&mut odd, &[1, 2, 3, 4, 5]).unwrap(), 3);
}

#[test]
fn test_fold_collects_in_order() {
    let mut fold = ConsumerFactory::<char>::new().fold(String::new(), |acc, c| acc.push(*c));
    assert_eq!(drive(&mut fold, &['a', 'b', 'c']).unwrap(), "abc");
}

#[test]
fn test_fold_empty_returns_init() {
    let mut fold = ConsumerFactory::<i32>::new().fold(vec![0], |acc, x| acc.push(*x));
    assert_eq!(drive(&mut fold, &[]).unwrap(), vec![0]);
}

#[test]
fn test_try_fold_failure() {
    let mut fold = ConsumerFactory::<i32>::new().try_fold(0i32, |acc, x| {
        if *x < 0 {
            return Err("negative input");
        }
        *acc += x;
        Ok(())
    });
    assert!(matches!(
        drive(&mut fold, &[1, -1]),
        Err(LockstepError::Callback(_))
    ));
}
