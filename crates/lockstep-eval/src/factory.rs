// Consumer factory for the standard request kinds.
//
// The factory is stateless; it fixes the element type `T` once so every
// constructor can infer closure argument types from it.

use std::marker::PhantomData;

use lockstep_core::{BoxError, Result, Summable};

use crate::consumer::{
    Count, CountConsumer, CountWhere, First, FirstConsumer, FirstWhere, FnFolder, Fold,
    FoldConsumer, GetConsumer, OptionalSum, OptionalSumBy, OptionalSumConsumer, Sum, SumBy,
    SumConsumer, TryFirstWhere, TryFnFolder, TryFold, TrySumBy,
};
use crate::select::{Always, FnPredicate, FnSelector, Identity, TryFnPredicate, TryFnSelector};
use crate::stream::Stream;

// Factory for consumers over elements of type `T`.
//
// # Example
//
// ```
// use lockstep_eval::ConsumerFactory;
// use lockstep_core::Consumer;
//
// let factory = ConsumerFactory::<i64>::new();
// let mut total = factory.sum_by(|x| x * 2);
// for x in [1, 2, 3] {
//     total.accept(&x).unwrap();
// }
// assert_eq!(total.finish().unwrap(), 12);
// ```
pub struct ConsumerFactory<T> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T> Default for ConsumerFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConsumerFactory<T> {
    // Creates a new consumer factory.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    // Sums the elements themselves.
    pub fn sum(&self) -> Sum<T>
    where
        T: Summable,
    {
        SumConsumer::new(Identity)
    }

    // Sums a value selected from each element.
    pub fn sum_by<V, F>(&self, selector: F) -> SumBy<T, V, F>
    where
        V: Summable,
        F: FnMut(&T) -> V,
    {
        SumConsumer::new(FnSelector::new(selector))
    }

    // Sums a value selected by a fallible function.
    pub fn try_sum_by<V, E, F>(&self, selector: F) -> TrySumBy<T, V, F, E>
    where
        V: Summable,
        E: Into<BoxError>,
        F: FnMut(&T) -> std::result::Result<V, E>,
    {
        SumConsumer::new(TryFnSelector::new(selector))
    }

    // Sums an optional value selected from each element, skipping `None`.
    pub fn sum_optional_by<V, F>(&self, selector: F) -> OptionalSumBy<T, V, F>
    where
        V: Summable,
        F: FnMut(&T) -> Option<V>,
    {
        OptionalSumConsumer::new(FnSelector::new(selector))
    }

    // First element, or `T::default()` for an empty sequence.
    pub fn first_or_default(&self) -> First<T>
    where
        T: Clone + Default,
    {
        FirstConsumer::new(Always, T::default())
    }

    // First element, or `default` for an empty sequence.
    pub fn first_or(&self, default: T) -> First<T>
    where
        T: Clone,
    {
        FirstConsumer::new(Always, default)
    }

    // First element matching `predicate`, or `T::default()`.
    pub fn first_or_default_where<F>(&self, predicate: F) -> FirstWhere<T, F>
    where
        T: Clone + Default,
        F: FnMut(&T) -> bool,
    {
        FirstConsumer::new(FnPredicate::new(predicate), T::default())
    }

    // First element matching `predicate`, or `default`.
    pub fn first_or_where<F>(&self, default: T, predicate: F) -> FirstWhere<T, F>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        FirstConsumer::new(FnPredicate::new(predicate), default)
    }

    // First element matching a fallible predicate, or `T::default()`.
    pub fn try_first_or_default_where<E, F>(&self, predicate: F) -> TryFirstWhere<T, F, E>
    where
        T: Clone + Default,
        E: Into<BoxError>,
        F: FnMut(&T) -> std::result::Result<bool, E>,
    {
        FirstConsumer::new(TryFnPredicate::new(predicate), T::default())
    }

    // Number of elements.
    pub fn count(&self) -> Count {
        CountConsumer::new(Always)
    }

    // Number of elements matching `predicate`.
    pub fn count_where<F>(&self, predicate: F) -> CountWhere<F>
    where
        F: FnMut(&T) -> bool,
    {
        CountConsumer::new(FnPredicate::new(predicate))
    }

    // Folds every element into `init`.
    pub fn fold<A, F>(&self, init: A, f: F) -> Fold<T, A, F>
    where
        A: Clone,
        F: FnMut(&mut A, &T),
    {
        FoldConsumer::new(init, FnFolder::new(f))
    }

    // Folds every element into `init` with a fallible step.
    pub fn try_fold<A, E, F>(&self, init: A, f: F) -> TryFold<T, A, F, E>
    where
        A: Clone,
        E: Into<BoxError>,
        F: FnMut(&mut A, &T) -> std::result::Result<(), E>,
    {
        FoldConsumer::new(init, TryFnFolder::new(f))
    }

    // Bridges the elements into a push-stream transform.
    //
    // The result is the last value the derived stream emits, once the
    // input has completed.
    pub fn get<'a, R, F>(&self, transform: F) -> GetConsumer<'a, T, R>
    where
        T: 'a,
        R: 'a,
        F: FnOnce(Stream<'a, T, T>) -> Stream<'a, T, R>,
    {
        GetConsumer::new(transform)
    }

    // Bridges into a transform that may reject its configuration.
    //
    // # Errors
    //
    // Returns `LockstepError::Callback` immediately if the transform fails,
    // before any element is enumerated.
    pub fn try_get<'a, R, E, F>(&self, transform: F) -> Result<GetConsumer<'a, T, R>>
    where
        T: 'a,
        R: 'a,
        E: Into<BoxError>,
        F: FnOnce(Stream<'a, T, T>) -> std::result::Result<Stream<'a, T, R>, E>,
    {
        GetConsumer::try_new(transform)
    }
}

impl<V> ConsumerFactory<Option<V>> {
    // Sums optional elements, skipping `None`.
    pub fn sum_optional(&self) -> OptionalSum<V>
    where
        V: Summable,
    {
        OptionalSumConsumer::new(Identity)
    }
}
