//! Tests for push-stream stages.

use std::cell::RefCell;
use std::rc::Rc;

use lockstep_core::LockstepError;

use super::*;

#[derive(Debug, Default)]
struct Recorded<T> {
    values: Vec<T>,
    errors: Vec<String>,
    completions: usize,
}

struct Recorder<T>(Rc<RefCell<Recorded<T>>>);

impl<T> Observer<T> for Recorder<T> {
    fn on_next(&mut self, value: T) {
        self.0.borrow_mut().values.push(value);
    }

    fn on_error(&mut self, error: LockstepError) {
        self.0.borrow_mut().errors.push(error.to_string());
    }

    fn on_complete(&mut self) {
        self.0.borrow_mut().completions += 1;
    }
}

// Pushes `input` through `stream`, completes it and returns what came out.
fn run<T: 'static, U: 'static>(
    stream: Stream<'static, T, U>,
    input: Vec<T>,
) -> Rc<RefCell<Recorded<U>>> {
    let out = Rc::new(RefCell::new(Recorded {
        values: Vec::new(),
        errors: Vec::new(),
        completions: 0,
    }));
    let mut sink = stream.subscribe(Recorder(Rc::clone(&out)));
    for value in input {
        sink.on_next(value);
    }
    sink.on_complete();
    out
}

#[test]
fn test_source_is_identity() {
    let out = run(Stream::source(), vec![1, 2, 3]);
    assert_eq!(out.borrow().values, vec![1, 2, 3]);
    assert_eq!(out.borrow().completions, 1);
}

#[test]
fn test_map_and_filter() {
    let stream = Stream::<i32, i32>::source()
        .filter(|x| x % 2 == 0)
        .map(|x| x * 100);
    let out = run(stream, vec![1, 2, 3, 4]);
    assert_eq!(out.borrow().values, vec![200, 400]);
}

#[test]
fn test_last_emits_on_completion() {
    let out = Rc::new(RefCell::new(Recorded::default()));
    let mut sink = Stream::<i32, i32>::source()
        .last()
        .subscribe(Recorder(Rc::clone(&out)));

    sink.on_next(1);
    sink.on_next(2);
    assert!(out.borrow().values.is_empty());

    sink.on_complete();
    assert_eq!(out.borrow().values, vec![2]);
    assert_eq!(out.borrow().completions, 1);
}

#[test]
fn test_last_of_empty_stream() {
    let out = run(Stream::<i32, i32>::source().last(), vec![]);
    assert!(out.borrow().values.is_empty());
    assert_eq!(out.borrow().completions, 1);
}

#[test]
fn test_scan_emits_running_totals() {
    let stream = Stream::<i32, i32>::source().scan(0i64, |acc, x| *acc += i64::from(x));
    let out = run(stream, vec![1, 2, 3]);
    assert_eq!(out.borrow().values, vec![1, 3, 6]);
}

#[test]
fn test_take_completes_early() {
    let out = run(Stream::<i32, i32>::source().take(2), vec![5, 6, 7, 8]);
    assert_eq!(out.borrow().values, vec![5, 6]);
    // completion from take, the later upstream completion is swallowed
    assert_eq!(out.borrow().completions, 1);
}

#[test]
fn test_take_zero() {
    let out = run(Stream::<i32, i32>::source().take(0), vec![1]);
    assert!(out.borrow().values.is_empty());
    assert_eq!(out.borrow().completions, 1);
}

#[test]
fn test_skip() {
    let out = run(Stream::<i32, i32>::source().skip(2), vec![1, 2, 3, 4]);
    assert_eq!(out.borrow().values, vec![3, 4]);
}

#[test]
fn test_count() {
    let out = run(Stream::<&str, &str>::source().count(), vec!["a", "b", "c"]);
    assert_eq!(out.borrow().values, vec![3]);
}

#[test]
fn test_single() {
    let one = run(Stream::<i32, i32>::source().single(), vec![7]);
    assert_eq!(one.borrow().values, vec![7]);
    assert_eq!(one.borrow().completions, 1);

    let many = run(Stream::<i32, i32>::source().single(), vec![7, 8, 9]);
    assert!(many.borrow().values.is_empty());
    assert_eq!(many.borrow().errors, vec!["Stream error: single: more than one value"]);
    assert_eq!(many.borrow().completions, 0);
}

#[test]
fn test_reduce() {
    let out = run(Stream::<i32, i32>::source().reduce(i32::max), vec![3, 9, 4]);
    assert_eq!(out.borrow().values, vec![9]);

    let empty = run(Stream::<i32, i32>::source().reduce(i32::max), vec![]);
    assert!(empty.borrow().values.is_empty());
}

#[test]
fn test_try_map_failure_ends_stream() {
    let stream = Stream::<i32, i32>::source().try_map(|x| {
        if x == 2 {
            Err("two is not allowed")
        } else {
            Ok(x)
        }
    });
    let out = run(stream, vec![1, 2, 3]);
    let recorded = out.borrow();
    assert_eq!(recorded.values, vec![1]);
    assert_eq!(recorded.errors.len(), 1);
    assert!(recorded.errors[0].contains("two is not allowed"));
    assert_eq!(recorded.completions, 0);
}

#[test]
fn test_events_after_completion_ignored() {
    let out = Rc::new(RefCell::new(Recorded::default()));
    let mut sink = Stream::<i32, i32>::source()
        .map(|x| x + 1)
        .subscribe(Recorder(Rc::clone(&out)));

    sink.on_complete();
    sink.on_next(1);
    sink.on_complete();

    assert!(out.borrow().values.is_empty());
    assert_eq!(out.borrow().completions, 1);
}
