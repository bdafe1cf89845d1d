// Push-stream combinators.
//
// A `Stream<'a, S, T>` is a recipe, not a running stream: it describes how
// values of type `S` pushed at the input end are turned into values of type
// `T` at the output end. Subscribing an output observer wires every stage
// together and hands back the input observer.

use lockstep_core::{BoxError, LockstepError};

use super::observer::{BoxObserver, Observer};

// A composable push-stream recipe from input values `S` to output values `T`.
//
// # Example
//
// ```
// use lockstep_eval::stream::{Observer, Stream};
// use lockstep_core::LockstepError;
//
// struct Collect(Vec<i32>);
//
// impl Observer<i32> for &mut Collect {
//     fn on_next(&mut self, value: i32) { self.0.push(value); }
//     fn on_error(&mut self, _: LockstepError) {}
//     fn on_complete(&mut self) {}
// }
//
// let mut out = Collect(Vec::new());
// {
//     let mut input = Stream::<i32, i32>::source()
//         .filter(|x| x % 2 == 1)
//         .map(|x| x * 10)
//         .subscribe(&mut out);
//     for x in 1..=5 {
//         input.on_next(x);
//     }
//     input.on_complete();
// }
// assert_eq!(out.0, vec![10, 30, 50]);
// ```
pub struct Stream<'a, S, T> {
    connect: Box<dyn FnOnce(BoxObserver<'a, T>) -> BoxObserver<'a, S> + 'a>,
}

impl<'a, S: 'a> Stream<'a, S, S> {
    // Creates the identity stream: values pushed in come straight out.
    pub fn source() -> Self {
        Self {
            connect: Box::new(|down: BoxObserver<'a, S>| down),
        }
    }
}

impl<'a, S: 'a, T: 'a> Stream<'a, S, T> {
    // Appends a custom stage.
    //
    // The stage receives the downstream observer and returns the observer
    // that receives this stream's output.
    pub fn pipe<U, G>(self, stage: G) -> Stream<'a, S, U>
    where
        U: 'a,
        G: FnOnce(BoxObserver<'a, U>) -> BoxObserver<'a, T> + 'a,
    {
        let connect = self.connect;
        Stream {
            connect: Box::new(move |down: BoxObserver<'a, U>| connect(stage(down))),
        }
    }

    // Transforms every value.
    pub fn map<U, F>(self, f: F) -> Stream<'a, S, U>
    where
        U: 'a,
        F: FnMut(T) -> U + 'a,
    {
        self.pipe(move |down: BoxObserver<'a, U>| -> BoxObserver<'a, T> {
            Box::new(Map {
                f,
                down,
                done: false,
            })
        })
    }

    // Transforms every value with a fallible function.
    //
    // The first failure is forwarded downstream as `on_error` and ends the
    // stream.
    pub fn try_map<U, E, F>(self, f: F) -> Stream<'a, S, U>
    where
        U: 'a,
        E: Into<BoxError> + 'a,
        F: FnMut(T) -> Result<U, E> + 'a,
    {
        self.pipe(move |down: BoxObserver<'a, U>| -> BoxObserver<'a, T> {
            Box::new(TryMap {
                f,
                down,
                done: false,
            })
        })
    }

    // Keeps only values matching the predicate.
    pub fn filter<P>(self, predicate: P) -> Stream<'a, S, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.pipe(move |down: BoxObserver<'a, T>| -> BoxObserver<'a, T> {
            Box::new(Filter {
                predicate,
                down,
                done: false,
            })
        })
    }

    // Emits the running accumulator after every value.
    pub fn scan<A, F>(self, init: A, f: F) -> Stream<'a, S, A>
    where
        A: Clone + 'a,
        F: FnMut(&mut A, T) + 'a,
    {
        self.pipe(move |down: BoxObserver<'a, A>| -> BoxObserver<'a, T> {
            Box::new(Scan {
                acc: init,
                f,
                down,
                done: false,
            })
        })
    }

    // Emits the first `n` values, then completes.
    pub fn take(self, n: usize) -> Stream<'a, S, T> {
        self.pipe(move |down: BoxObserver<'a, T>| -> BoxObserver<'a, T> {
            Box::new(Take {
                remaining: n,
                down,
                done: false,
            })
        })
    }

    // Drops the first `n` values.
    pub fn skip(self, n: usize) -> Stream<'a, S, T> {
        self.pipe(move |down: BoxObserver<'a, T>| -> BoxObserver<'a, T> {
            Box::new(Skip {
                remaining: n,
                down,
                done: false,
            })
        })
    }

    // Emits only the final value, on completion.
    pub fn last(self) -> Stream<'a, S, T> {
        self.pipe(move |down: BoxObserver<'a, T>| -> BoxObserver<'a, T> {
            Box::new(Last {
                last: None,
                down,
                done: false,
            })
        })
    }

    // Emits the only value on completion.
    //
    // A second value fails the stream with `LockstepError::Stream`; an empty
    // stream completes without emitting.
    pub fn single(self) -> Stream<'a, S, T> {
        self.pipe(move |down: BoxObserver<'a, T>| -> BoxObserver<'a, T> {
            Box::new(Single {
                value: None,
                down,
                done: false,
            })
        })
    }

    // Emits the number of values on completion.
    pub fn count(self) -> Stream<'a, S, u64> {
        self.pipe(move |down: BoxObserver<'a, u64>| -> BoxObserver<'a, T> {
            Box::new(Count {
                count: 0,
                down,
                done: false,
            })
        })
    }

    // Combines all values pairwise and emits the result on completion.
    //
    // An empty stream completes without emitting.
    pub fn reduce<F>(self, f: F) -> Stream<'a, S, T>
    where
        F: FnMut(T, T) -> T + 'a,
    {
        self.pipe(move |down: BoxObserver<'a, T>| -> BoxObserver<'a, T> {
            Box::new(Reduce {
                acc: None,
                f,
                down,
                done: false,
            })
        })
    }

    // Wires the stream to `observer` and returns the input end.
    pub fn subscribe<O>(self, observer: O) -> BoxObserver<'a, S>
    where
        O: Observer<T> + 'a,
    {
        (self.connect)(Box::new(observer))
    }
}

struct Map<F, D> {
    f: F,
    down: D,
    done: bool,
}

impl<T, U, F, D> Observer<T> for Map<F, D>
where
    F: FnMut(T) -> U,
    D: Observer<U>,
{
    fn on_next(&mut self, value: T) {
        if !self.done {
            let mapped = (self.f)(value);
            self.down.on_next(mapped);
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if !self.done {
            self.done = true;
            self.down.on_complete();
        }
    }
}

struct TryMap<F, D> {
    f: F,
    down: D,
    done: bool,
}

impl<T, U, E, F, D> Observer<T> for TryMap<F, D>
where
    F: FnMut(T) -> Result<U, E>,
    E: Into<BoxError>,
    D: Observer<U>,
{
    fn on_next(&mut self, value: T) {
        if self.done {
            return;
        }
        match (self.f)(value) {
            Ok(mapped) => self.down.on_next(mapped),
            Err(e) => {
                self.done = true;
                self.down.on_error(LockstepError::callback(e));
            }
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if !self.done {
            self.done = true;
            self.down.on_complete();
        }
    }
}

struct Filter<P, D> {
    predicate: P,
    down: D,
    done: bool,
}

impl<T, P, D> Observer<T> for Filter<P, D>
where
    P: FnMut(&T) -> bool,
    D: Observer<T>,
{
    fn on_next(&mut self, value: T) {
        if !self.done && (self.predicate)(&value) {
            self.down.on_next(value);
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if !self.done {
            self.done = true;
            self.down.on_complete();
        }
    }
}

struct Scan<A, F, D> {
    acc: A,
    f: F,
    down: D,
    done: bool,
}

impl<T, A, F, D> Observer<T> for Scan<A, F, D>
where
    A: Clone,
    F: FnMut(&mut A, T),
    D: Observer<A>,
{
    fn on_next(&mut self, value: T) {
        if !self.done {
            (self.f)(&mut self.acc, value);
            self.down.on_next(self.acc.clone());
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if !self.done {
            self.done = true;
            self.down.on_complete();
        }
    }
}

struct Take<D> {
    remaining: usize,
    down: D,
    done: bool,
}

impl<T, D> Observer<T> for Take<D>
where
    D: Observer<T>,
{
    fn on_next(&mut self, value: T) {
        if self.done {
            return;
        }
        if self.remaining == 0 {
            self.done = true;
            self.down.on_complete();
            return;
        }
        self.remaining -= 1;
        self.down.on_next(value);
        if self.remaining == 0 {
            self.done = true;
            self.down.on_complete();
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if !self.done {
            self.done = true;
            self.down.on_complete();
        }
    }
}

struct Skip<D> {
    remaining: usize,
    down: D,
    done: bool,
}

impl<T, D> Observer<T> for Skip<D>
where
    D: Observer<T>,
{
    fn on_next(&mut self, value: T) {
        if self.done {
            return;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        } else {
            self.down.on_next(value);
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if !self.done {
            self.done = true;
            self.down.on_complete();
        }
    }
}

struct Last<T, D> {
    last: Option<T>,
    down: D,
    done: bool,
}

impl<T, D> Observer<T> for Last<T, D>
where
    D: Observer<T>,
{
    fn on_next(&mut self, value: T) {
        if !self.done {
            self.last = Some(value);
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        if let Some(value) = self.last.take() {
            self.down.on_next(value);
        }
        self.down.on_complete();
    }
}

struct Single<T, D> {
    value: Option<T>,
    down: D,
    done: bool,
}

impl<T, D> Observer<T> for Single<T, D>
where
    D: Observer<T>,
{
    fn on_next(&mut self, value: T) {
        if self.done {
            return;
        }
        if self.value.is_some() {
            self.done = true;
            self.value = None;
            self.down
                .on_error(LockstepError::Stream("single: more than one value".to_string()));
            return;
        }
        self.value = Some(value);
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        if let Some(value) = self.value.take() {
            self.down.on_next(value);
        }
        self.down.on_complete();
    }
}

struct Count<D> {
    count: u64,
    down: D,
    done: bool,
}

impl<T, D> Observer<T> for Count<D>
where
    D: Observer<u64>,
{
    fn on_next(&mut self, _: T) {
        if !self.done {
            self.count += 1;
        }
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        self.down.on_next(self.count);
        self.down.on_complete();
    }
}

struct Reduce<T, F, D> {
    acc: Option<T>,
    f: F,
    down: D,
    done: bool,
}

impl<T, F, D> Observer<T> for Reduce<T, F, D>
where
    F: FnMut(T, T) -> T,
    D: Observer<T>,
{
    fn on_next(&mut self, value: T) {
        if self.done {
            return;
        }
        self.acc = Some(match self.acc.take() {
            Some(acc) => (self.f)(acc, value),
            None => value,
        });
    }

    fn on_error(&mut self, error: LockstepError) {
        if !self.done {
            self.done = true;
            self.down.on_error(error);
        }
    }

    fn on_complete(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        if let Some(value) = self.acc.take() {
            self.down.on_next(value);
        }
        self.down.on_complete();
    }
}
