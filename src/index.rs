//! Compile-time resolution of a numeric index to a slot of a tuple.
//!
//! An index is resolved by recursing over the tuple's type: index zero is
//! the head of the tuple itself, and index `i + 1` is index `i` of the rest.
//! The recursion happens entirely in the type system, once per `S` in the
//! index, so the compiled access is a plain field projection with no branch,
//! loop, or table lookup. An index that is not less than the tuple's length
//! has no resolution at all, and the program containing it does not compile.

use crate::list::{Cons, List};
use crate::unary::{LessThan, Number, S, ToUnary, Unary, UnaryOf, Z};

/// Resolves the type-level index `N` to a slot of this tuple.
///
/// The resolution produces both the [`Element`](Slot::Element) type stored
/// at the index and the [`Ancestor`](Slot::Ancestor): the suffix of the
/// recursive structure whose head is that very slot. Element access works by
/// viewing the tuple as that ancestor and taking its head; the
/// [`ancestor`](Slot::ancestor) view itself is also exposed.
///
/// This trait is implemented for every [`Cons`] and every in-range index,
/// and for nothing else; like [`List`] it cannot be implemented outside this
/// crate.
pub trait Slot<N: Unary>: List {
    /// The type of the element stored at index `N`.
    type Element;

    /// The suffix of this tuple whose head slot is the element at index `N`.
    type Ancestor: List;

    /// A view of this tuple as the ancestor holding index `N` as its head.
    fn ancestor(&self) -> &Self::Ancestor;

    /// A mutable view of this tuple as the ancestor holding index `N` as
    /// its head.
    fn ancestor_mut(&mut self) -> &mut Self::Ancestor;

    /// A reference to the element at index `N`.
    fn slot(&self) -> &Self::Element;

    /// A mutable reference to the element at index `N`.
    fn slot_mut(&mut self) -> &mut Self::Element;
}

impl<H, R: List> Slot<Z> for Cons<H, R> {
    type Element = H;
    type Ancestor = Self;

    fn ancestor(&self) -> &Self {
        self
    }

    fn ancestor_mut(&mut self) -> &mut Self {
        self
    }

    fn slot(&self) -> &H {
        self.head()
    }

    fn slot_mut(&mut self) -> &mut H {
        self.head_mut()
    }
}

impl<N: Unary, H, R: Slot<N>> Slot<S<N>> for Cons<H, R> {
    type Element = R::Element;
    type Ancestor = R::Ancestor;

    fn ancestor(&self) -> &R::Ancestor {
        self.rest.ancestor()
    }

    fn ancestor_mut(&mut self) -> &mut R::Ancestor {
        self.rest.ancestor_mut()
    }

    fn slot(&self) -> &R::Element {
        self.rest.slot()
    }

    fn slot_mut(&mut self) -> &mut R::Element {
        self.rest.slot_mut()
    }
}

impl<H, R: List> Cons<H, R> {
    /// A reference to the element at index `I`, counted from the head at
    /// index `0`.
    ///
    /// The index is checked against the tuple's length at compile time;
    /// there is no runtime bounds check because there is nothing left to
    /// check. Constant indices are supported up to 32 (see
    /// [`unary::types`](crate::unary::types)); indexing generic code can use
    /// [`Slot`] with a unary index directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use catena::tuple;
    ///
    /// let t = tuple!(1, 'a', "str");
    /// assert_eq!(*t.get::<0>(), 1);
    /// assert_eq!(*t.get::<1>(), 'a');
    /// assert_eq!(*t.get::<2>(), "str");
    /// ```
    ///
    /// An index that is not less than the length does not resolve, so this
    /// does not compile:
    ///
    /// ```compile_fail
    /// # use catena::tuple;
    /// #
    /// let t = tuple!(1, 'a', "str");
    /// let _ = t.get::<3>();
    /// ```
    pub fn get<const I: usize>(&self) -> &<Self as Slot<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<Self as List>::Length>,
        Self: Slot<UnaryOf<I>>,
    {
        <Self as Slot<UnaryOf<I>>>::slot(self)
    }

    /// A mutable reference to the element at index `I`.
    ///
    /// The reference points into the tuple's own storage. For an owned slot,
    /// writing through it mutates the contained value; for an alias slot,
    /// the element *is* the reference, so one more dereference writes the
    /// referent itself:
    ///
    /// ```
    /// use catena::tuple;
    ///
    /// let mut i = 42;
    /// {
    ///     let mut t = tuple!('a', mut i);
    ///     **t.get_mut::<1>() = 84;
    /// }
    /// assert_eq!(i, 84);
    /// ```
    pub fn get_mut<const I: usize>(&mut self) -> &mut <Self as Slot<UnaryOf<I>>>::Element
    where
        Number<I>: ToUnary,
        UnaryOf<I>: LessThan<<Self as List>::Length>,
        Self: Slot<UnaryOf<I>>,
    {
        <Self as Slot<UnaryOf<I>>>::slot_mut(self)
    }

    /// A reference to the *last* slot's value, i.e. the element at index
    /// `LENGTH - 1`.
    ///
    /// Note the asymmetry with the usual cons-list vocabulary: `tail` here
    /// names the final element, not the list of everything after the head.
    ///
    /// ```
    /// use catena::tuple;
    ///
    /// let t = tuple!(1, 'a', "last");
    /// assert_eq!(*t.tail(), "last");
    /// assert_eq!(t.tail(), t.get::<2>());
    /// ```
    pub fn tail(&self) -> &<Self as Slot<R::Length>>::Element
    where
        Self: Slot<R::Length>,
    {
        <Self as Slot<R::Length>>::slot(self)
    }

    /// A mutable reference to the last slot's value.
    pub fn tail_mut(&mut self) -> &mut <Self as Slot<R::Length>>::Element
    where
        Self: Slot<R::Length>,
    {
        <Self as Slot<R::Length>>::slot_mut(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::unary::types::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<Tuple![u8, char, String] as Slot<U0>>::Element, u8);
    assert_type_eq_all!(<Tuple![u8, char, String] as Slot<U1>>::Element, char);
    assert_type_eq_all!(<Tuple![u8, char, String] as Slot<U2>>::Element, String);
    assert_type_eq_all!(
        <Tuple![u8, char, String] as Slot<U1>>::Ancestor,
        Tuple![char, String]
    );

    #[test]
    fn every_index_reads_its_own_slot() {
        let t = tuple!(1u8, 'a', String::from("end"));
        assert_eq!(*t.get::<0>(), 1);
        assert_eq!(*t.get::<1>(), 'a');
        assert_eq!(*t.get::<2>(), "end");
    }

    #[test]
    fn writes_through_get_mut_land_in_the_tuple() {
        let mut t = tuple!(1u8, 'a');
        *t.get_mut::<0>() = 2;
        *t.get_mut::<1>() = 'b';
        assert_eq!(*t.get::<0>(), 2);
        assert_eq!(*t.get::<1>(), 'b');
    }

    #[test]
    fn tail_is_the_last_element() {
        let mut t = tuple!(1u8, 'a', String::from("end"));
        assert_eq!(t.tail(), t.get::<2>());
        t.tail_mut().push_str("ing");
        assert_eq!(*t.get::<2>(), "ending");
    }

    #[test]
    fn tail_of_a_single_slot_tuple_is_its_head() {
        let t = tuple!(7);
        assert_eq!(t.tail(), t.head());
    }

    #[test]
    fn ancestor_is_the_suffix_holding_the_slot() {
        let mut t = tuple!(1u8, 'a', String::from("end"));
        {
            let suffix = <Tuple![u8, char, String] as Slot<U1>>::ancestor(&t);
            assert_eq!(suffix.len(), 2);
            assert_eq!(*suffix.head(), 'a');
        }
        let suffix = <Tuple![u8, char, String] as Slot<U1>>::ancestor_mut(&mut t);
        *suffix.head_mut() = 'b';
        assert_eq!(*t.get::<1>(), 'b');
    }

    #[test]
    fn shared_alias_slots_observe_the_referent_both_ways() {
        use std::cell::Cell;

        let x = Cell::new(1);
        let t = tuple!(ref x);
        x.set(2);
        assert_eq!(t.get::<0>().get(), 2);
        t.get::<0>().set(3);
        assert_eq!(x.get(), 3);
    }
}
