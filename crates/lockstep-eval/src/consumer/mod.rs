// Concrete consumers for the standard request kinds.
//
// Every consumer is fully monomorphized: closures live in selector,
// predicate and folder wrapper types rather than behind `dyn`. The aliases
// below name the exact types the factory and the request holder build.

mod count;
mod first;
mod fold;
mod get;
mod sum;

#[cfg(test)]
mod tests;

pub use count::CountConsumer;
pub use first::FirstConsumer;
pub use fold::{FnFolder, FoldConsumer, Folder, TryFnFolder};
pub use get::GetConsumer;
pub use sum::{OptionalSumConsumer, SumConsumer};

use crate::select::{Always, FnPredicate, FnSelector, Identity, TryFnPredicate, TryFnSelector};

pub type Sum<T> = SumConsumer<T, T, Identity>;
pub type SumBy<T, V, F> = SumConsumer<T, V, FnSelector<F, V>>;
pub type TrySumBy<T, V, F, E> = SumConsumer<T, V, TryFnSelector<F, V, E>>;
pub type OptionalSum<V> = OptionalSumConsumer<Option<V>, V, Identity>;
pub type OptionalSumBy<T, V, F> = OptionalSumConsumer<T, V, FnSelector<F, Option<V>>>;
pub type First<T> = FirstConsumer<T, Always>;
pub type FirstWhere<T, F> = FirstConsumer<T, FnPredicate<F>>;
pub type TryFirstWhere<T, F, E> = FirstConsumer<T, TryFnPredicate<F, E>>;
pub type Count = CountConsumer<Always>;
pub type CountWhere<F> = CountConsumer<FnPredicate<F>>;
pub type Fold<T, A, F> = FoldConsumer<T, A, FnFolder<F>>;
pub type TryFold<T, A, F, E> = FoldConsumer<T, A, TryFnFolder<F, E>>;
