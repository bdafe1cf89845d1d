//! Zero-erasure selectors and predicates for consumers.
//!
//! Closures are wrapped in small concrete types instead of boxed trait
//! objects, so every consumer stays fully monomorphized.

mod predicate;
mod selector;

pub use predicate::{Always, FnPredicate, Predicate, TryFnPredicate};
pub use selector::{FnSelector, Identity, Selector, TryFnSelector};

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep_core::LockstepError;

    #[test]
    fn test_identity_selector() {
        let mut s = Identity;
        assert_eq!(Selector::<i32>::select(&mut s, &7).unwrap(), 7);
    }

    #[test]
    fn test_fn_selector() {
        let mut s = FnSelector::new(|x: &i32| x * 2);
        assert_eq!(s.select(&21).unwrap(), 42);
    }

    #[test]
    fn test_try_fn_selector_failure() {
        let mut s = TryFnSelector::new(|x: &i32| {
            if *x < 0 {
                Err("negative")
            } else {
                Ok(*x)
            }
        });
        assert_eq!(s.select(&3).unwrap(), 3);
        assert!(matches!(s.select(&-1), Err(LockstepError::Callback(_))));
    }

    #[test]
    fn test_always_predicate() {
        let mut p = Always;
        assert!(Predicate::<&str>::test(&mut p, &"anything").unwrap());
    }

    #[test]
    fn test_fn_predicate() {
        let mut p = FnPredicate::new(|x: &i32| *x > 10);
        assert!(p.test(&15).unwrap());
        assert!(!p.test(&5).unwrap());
    }

    #[test]
    fn test_stateful_predicate() {
        let mut seen = 0;
        let mut p = FnPredicate::new(|_: &i32| {
            seen += 1;
            seen == 2
        });
        assert!(!p.test(&0).unwrap());
        assert!(p.test(&0).unwrap());
    }

    #[test]
    fn test_try_fn_predicate_failure() {
        let mut p = TryFnPredicate::new(|_: &i32| Err::<bool, _>("broken"));
        match p.test(&1) {
            Err(LockstepError::Callback(e)) => assert_eq!(e.to_string(), "broken"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
