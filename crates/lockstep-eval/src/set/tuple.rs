// Tuple-based consumer sets for zero-erasure lock-step evaluation.
//
// A tuple of consumers `(C0, C1, ..)` is driven as one unit: every element
// goes to every slot in order, and finishing yields a tuple of the slots'
// outputs in the same order.

use lockstep_core::{Consumer, Result};

// An ordered, fixed-arity set of consumers over elements of type `T`.
//
// Implemented for tuples of 1 through 16 consumers.
pub trait ConsumerSet<T> {
    // Results of every slot, positionally aligned with the consumers.
    type Output;

    // Number of consumers in the set.
    const ARITY: usize;

    // Feeds one element to every consumer in registration order.
    //
    // Stops at the first failing consumer and returns its error.
    fn accept_all(&mut self, element: &T) -> Result<()>;

    // Finishes every consumer in registration order.
    fn finish_all(&mut self) -> Result<Self::Output>;

    // Number of consumers that no longer need data.
    fn satisfied_count(&self) -> usize;
}

// Grows a consumer tuple by one slot.
//
// Implemented for `()` and tuples of 1 through 15 consumers, so a set can
// never exceed 16 consumers.
pub trait Append<K> {
    type Output;

    fn append(self, consumer: K) -> Self::Output;
}

impl<K> Append<K> for () {
    type Output = (K,);

    #[inline]
    fn append(self, consumer: K) -> (K,) {
        (consumer,)
    }
}

macro_rules! impl_consumer_set_for_tuple {
    ($arity:expr; $($idx:tt: $C:ident),+) => {
        impl<T, $($C),+> ConsumerSet<T> for ($($C,)+)
        where
            $($C: Consumer<T>,)+
        {
            type Output = ($($C::Output,)+);

            const ARITY: usize = $arity;

            #[inline]
            fn accept_all(&mut self, element: &T) -> Result<()> {
                $(self.$idx.accept(element)?;)+
                Ok(())
            }

            #[inline]
            fn finish_all(&mut self) -> Result<Self::Output> {
                Ok(($(self.$idx.finish()?,)+))
            }

            #[inline]
            fn satisfied_count(&self) -> usize {
                let mut count = 0;
                $(if self.$idx.is_satisfied() { count += 1; })+
                count
            }
        }
    };
}

macro_rules! impl_append_for_tuple {
    ($($idx:tt: $C:ident),+) => {
        impl<K, $($C),+> Append<K> for ($($C,)+) {
            type Output = ($($C,)+ K,);

            #[inline]
            fn append(self, consumer: K) -> Self::Output {
                ($(self.$idx,)+ consumer,)
            }
        }
    };
}

// Implement for tuples of size 1 through 16
impl_consumer_set_for_tuple!(1; 0: C0);
impl_consumer_set_for_tuple!(2; 0: C0, 1: C1);
impl_consumer_set_for_tuple!(3; 0: C0, 1: C1, 2: C2);
impl_consumer_set_for_tuple!(4; 0: C0, 1: C1, 2: C2, 3: C3);
impl_consumer_set_for_tuple!(5; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4);
impl_consumer_set_for_tuple!(6; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5);
impl_consumer_set_for_tuple!(7; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6);
impl_consumer_set_for_tuple!(8; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7);
impl_consumer_set_for_tuple!(9; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8);
impl_consumer_set_for_tuple!(10; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9);
impl_consumer_set_for_tuple!(11; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10);
impl_consumer_set_for_tuple!(12; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11);
impl_consumer_set_for_tuple!(13; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11, 12: C12);
impl_consumer_set_for_tuple!(14; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11, 12: C12, 13: C13);
impl_consumer_set_for_tuple!(15; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11, 12: C12, 13: C13, 14: C14);
impl_consumer_set_for_tuple!(16; 0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11, 12: C12, 13: C13, 14: C14, 15: C15);

// Appending to a 15-tuple yields the maximum arity of 16
impl_append_for_tuple!(0: C0);
impl_append_for_tuple!(0: C0, 1: C1);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11, 12: C12);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11, 12: C12, 13: C13);
impl_append_for_tuple!(0: C0, 1: C1, 2: C2, 3: C3, 4: C4, 5: C5, 6: C6, 7: C7, 8: C8, 9: C9, 10: C10, 11: C11, 12: C12, 13: C13, 14: C14);
