//! Request holders: a source bound to an ordered tuple of consumers.

use lockstep_config::EvaluationConfig;
use lockstep_core::{BoxError, Consumer, Result, Source, Summable};

use crate::consumer::{
    Count, CountWhere, First, FirstWhere, Fold, GetConsumer, OptionalSum, OptionalSumBy, Sum,
    SumBy, TryFirstWhere, TryFold, TrySumBy,
};
use crate::evaluator::evaluate;
use crate::factory::ConsumerFactory;
use crate::set::{Append, ConsumerSet};
use crate::stream::Stream;

/// Creates an empty holder over `source`.
///
/// An empty holder cannot be extracted; attach at least one request first.
///
/// # Example
///
/// ```
/// use lockstep_eval::requests;
///
/// let (total, first_big, count) = requests(vec![1i64, 2, 3, 4, 5])
///     .sum()
///     .first_or_default_where(|x| *x > 3)
///     .count()
///     .extract()
///     .unwrap();
///
/// assert_eq!((total, first_big, count), (15, 4, 5));
/// ```
pub fn requests<S: Source>(source: S) -> RequestHolder<S, ()> {
    RequestHolder::new(source)
}

/// An immutable binding of one source to an ordered tuple of consumers.
///
/// Every request call consumes the holder and returns a new one with one
/// more slot, so the arity and the type of every slot are fixed in the
/// holder's type. The source is not opened until [`extract`] is called,
/// and `extract` consumes the holder, so a holder is evaluated at most once.
///
/// [`extract`]: RequestHolder::extract
#[must_use = "a request holder does nothing until `extract` is called"]
pub struct RequestHolder<S, C> {
    source: S,
    consumers: C,
}

impl<S: Source> RequestHolder<S, ()> {
    /// Creates an empty holder.
    pub fn new(source: S) -> Self {
        Self {
            source,
            consumers: (),
        }
    }
}

impl<S, K> RequestHolder<S, (K,)>
where
    S: Source,
    K: Consumer<S::Item>,
{
    /// Creates an arity-1 holder from a source and its first consumer.
    pub fn begin(source: S, consumer: K) -> Self {
        Self {
            source,
            consumers: (consumer,),
        }
    }
}

impl<S, C> RequestHolder<S, C>
where
    S: Source,
{
    /// Appends a ready-made consumer, returning a holder of arity N+1.
    ///
    /// Earlier consumers are moved, not rebuilt or revalidated, and the
    /// source is not touched.
    pub fn add<K>(self, consumer: K) -> RequestHolder<S, C::Output>
    where
        C: Append<K>,
        K: Consumer<S::Item>,
    {
        RequestHolder {
            source: self.source,
            consumers: self.consumers.append(consumer),
        }
    }

    /// Number of attached requests.
    pub fn arity(&self) -> usize
    where
        C: ConsumerSet<S::Item>,
    {
        C::ARITY
    }

    /// Evaluates every request in one pass and returns the results in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns the first failure raised while opening the source, accepting
    /// an element or finishing a consumer. No partial results are returned.
    pub fn extract(self) -> Result<C::Output>
    where
        C: ConsumerSet<S::Item>,
    {
        self.extract_with(&EvaluationConfig::default())
    }

    /// Like [`extract`](Self::extract), with explicit evaluation settings.
    pub fn extract_with(self, config: &EvaluationConfig) -> Result<C::Output>
    where
        C: ConsumerSet<S::Item>,
    {
        evaluate(self.source, self.consumers, config)
    }

    fn factory(&self) -> ConsumerFactory<S::Item> {
        ConsumerFactory::new()
    }

    /// Requests the sum of the elements.
    pub fn sum(self) -> RequestHolder<S, <C as Append<Sum<S::Item>>>::Output>
    where
        S::Item: Summable,
        C: Append<Sum<S::Item>>,
    {
        let consumer = self.factory().sum();
        self.add(consumer)
    }

    /// Requests the sum of a value selected from each element.
    pub fn sum_by<V, F>(self, selector: F) -> RequestHolder<S, <C as Append<SumBy<S::Item, V, F>>>::Output>
    where
        V: Summable,
        F: FnMut(&S::Item) -> V,
        C: Append<SumBy<S::Item, V, F>>,
    {
        let consumer = self.factory().sum_by(selector);
        self.add(consumer)
    }

    /// Requests the sum of a value selected by a fallible function.
    pub fn try_sum_by<V, E, F>(
        self,
        selector: F,
    ) -> RequestHolder<S, <C as Append<TrySumBy<S::Item, V, F, E>>>::Output>
    where
        V: Summable,
        E: Into<BoxError>,
        F: FnMut(&S::Item) -> std::result::Result<V, E>,
        C: Append<TrySumBy<S::Item, V, F, E>>,
    {
        let consumer = self.factory().try_sum_by(selector);
        self.add(consumer)
    }

    /// Requests the sum of optional elements, skipping `None`.
    pub fn sum_optional<V>(self) -> RequestHolder<S, <C as Append<OptionalSum<V>>>::Output>
    where
        S: Source<Item = Option<V>>,
        V: Summable,
        C: Append<OptionalSum<V>>,
    {
        let consumer = ConsumerFactory::<Option<V>>::new().sum_optional();
        self.add(consumer)
    }

    /// Requests the sum of an optional value selected from each element.
    pub fn sum_optional_by<V, F>(
        self,
        selector: F,
    ) -> RequestHolder<S, <C as Append<OptionalSumBy<S::Item, V, F>>>::Output>
    where
        V: Summable,
        F: FnMut(&S::Item) -> Option<V>,
        C: Append<OptionalSumBy<S::Item, V, F>>,
    {
        let consumer = self.factory().sum_optional_by(selector);
        self.add(consumer)
    }

    /// Requests the first element, or the type's default.
    pub fn first_or_default(self) -> RequestHolder<S, <C as Append<First<S::Item>>>::Output>
    where
        S::Item: Clone + Default,
        C: Append<First<S::Item>>,
    {
        let consumer = self.factory().first_or_default();
        self.add(consumer)
    }

    /// Requests the first element, or `default`.
    pub fn first_or(self, default: S::Item) -> RequestHolder<S, <C as Append<First<S::Item>>>::Output>
    where
        S::Item: Clone,
        C: Append<First<S::Item>>,
    {
        let consumer = self.factory().first_or(default);
        self.add(consumer)
    }

    /// Requests the first element matching `predicate`, or the type's default.
    pub fn first_or_default_where<F>(
        self,
        predicate: F,
    ) -> RequestHolder<S, <C as Append<FirstWhere<S::Item, F>>>::Output>
    where
        S::Item: Clone + Default,
        F: FnMut(&S::Item) -> bool,
        C: Append<FirstWhere<S::Item, F>>,
    {
        let consumer = self.factory().first_or_default_where(predicate);
        self.add(consumer)
    }

    /// Requests the first element matching `predicate`, or `default`.
    pub fn first_or_where<F>(
        self,
        default: S::Item,
        predicate: F,
    ) -> RequestHolder<S, <C as Append<FirstWhere<S::Item, F>>>::Output>
    where
        S::Item: Clone,
        F: FnMut(&S::Item) -> bool,
        C: Append<FirstWhere<S::Item, F>>,
    {
        let consumer = self.factory().first_or_where(default, predicate);
        self.add(consumer)
    }

    /// Requests the first element matching a fallible predicate.
    pub fn try_first_or_default_where<E, F>(
        self,
        predicate: F,
    ) -> RequestHolder<S, <C as Append<TryFirstWhere<S::Item, F, E>>>::Output>
    where
        S::Item: Clone + Default,
        E: Into<BoxError>,
        F: FnMut(&S::Item) -> std::result::Result<bool, E>,
        C: Append<TryFirstWhere<S::Item, F, E>>,
    {
        let consumer = self.factory().try_first_or_default_where(predicate);
        self.add(consumer)
    }

    /// Requests the number of elements.
    pub fn count(self) -> RequestHolder<S, <C as Append<Count>>::Output>
    where
        C: Append<Count>,
    {
        let consumer = self.factory().count();
        self.add(consumer)
    }

    /// Requests the number of elements matching `predicate`.
    pub fn count_where<F>(self, predicate: F) -> RequestHolder<S, <C as Append<CountWhere<F>>>::Output>
    where
        F: FnMut(&S::Item) -> bool,
        C: Append<CountWhere<F>>,
    {
        let consumer = self.factory().count_where(predicate);
        self.add(consumer)
    }

    /// Requests a fold of every element into `init`.
    pub fn fold<A, F>(self, init: A, f: F) -> RequestHolder<S, <C as Append<Fold<S::Item, A, F>>>::Output>
    where
        A: Clone,
        F: FnMut(&mut A, &S::Item),
        C: Append<Fold<S::Item, A, F>>,
    {
        let consumer = self.factory().fold(init, f);
        self.add(consumer)
    }

    /// Requests a fold with a fallible step.
    pub fn try_fold<A, E, F>(
        self,
        init: A,
        f: F,
    ) -> RequestHolder<S, <C as Append<TryFold<S::Item, A, F, E>>>::Output>
    where
        A: Clone,
        E: Into<BoxError>,
        F: FnMut(&mut A, &S::Item) -> std::result::Result<(), E>,
        C: Append<TryFold<S::Item, A, F, E>>,
    {
        let consumer = self.factory().try_fold(init, f);
        self.add(consumer)
    }

    /// Requests the last value of a derived push stream.
    ///
    /// # Example
    ///
    /// ```
    /// use lockstep_eval::requests;
    ///
    /// let (running_max, evens) = requests(vec![3i32, 8, 2, 6])
    ///     .get(|s| s.reduce(i32::max))
    ///     .get(|s| s.filter(|x| x % 2 == 0).count())
    ///     .extract()
    ///     .unwrap();
    ///
    /// assert_eq!(running_max, 8);
    /// assert_eq!(evens, 3);
    /// ```
    pub fn get<'a, R, F>(
        self,
        transform: F,
    ) -> RequestHolder<S, <C as Append<GetConsumer<'a, S::Item, R>>>::Output>
    where
        S::Item: Clone + 'a,
        R: Clone + 'a,
        F: FnOnce(Stream<'a, S::Item, S::Item>) -> Stream<'a, S::Item, R>,
        C: Append<GetConsumer<'a, S::Item, R>>,
    {
        let consumer = self.factory().get(transform);
        self.add(consumer)
    }

    /// Requests the last value of a derived push stream whose transform
    /// may reject its configuration.
    ///
    /// # Errors
    ///
    /// Returns the transform's error immediately; the source is not opened.
    pub fn try_get<'a, R, E, F>(
        self,
        transform: F,
    ) -> Result<RequestHolder<S, <C as Append<GetConsumer<'a, S::Item, R>>>::Output>>
    where
        S::Item: Clone + 'a,
        R: Clone + 'a,
        E: Into<BoxError>,
        F: FnOnce(Stream<'a, S::Item, S::Item>) -> std::result::Result<Stream<'a, S::Item, R>, E>,
        C: Append<GetConsumer<'a, S::Item, R>>,
    {
        let consumer = self.factory().try_get(transform)?;
        Ok(self.add(consumer))
    }
}

#[cfg(test)]
mod tests;
