//! The variadic construction surface: [`tuple!`](crate::tuple) for values
//! and [`Tuple!`](crate::Tuple) for types.
//!
//! Rust has no variadic functions, so the "take any number of heterogeneous
//! arguments" entry point is a macro expanding to nested [`cons`] calls; the
//! decay rule still runs on every argument, because the expansion routes
//! each one through [`val`], [`by_ref`], or [`by_mut`].
//!
//! [`cons`]: crate::cons
//! [`val`]: crate::val
//! [`by_ref`]: crate::by_ref
//! [`by_mut`]: crate::by_mut

/// Constructs a tuple from a comma-separated list of arguments.
///
/// Each argument chooses its slot's storage:
///
/// - a plain expression makes an **owned** slot: the value moves (or
///   copies) into the tuple;
/// - `ref x` makes a **shared alias** slot: the tuple stores `&x`;
/// - `mut x` makes an **exclusive alias** slot: the tuple stores `&mut x`.
///
/// The resulting type is spelled by the matching [`Tuple!`](crate::Tuple)
/// macro.
///
/// # Examples
///
/// ```
/// use catena::tuple;
///
/// let mut count = 42;
/// let name = String::from("Hello World");
///
/// let t = tuple!(1.23, mut count, 'A', name.clone(), ref name);
/// assert_eq!(t.len(), 5);
/// assert_eq!(*t.head(), 1.23);
/// assert_eq!(**t.get::<1>(), 42);
/// assert_eq!(*t.get::<2>(), 'A');
/// assert_eq!(*t.get::<3>(), "Hello World");
/// ```
///
/// The empty invocation is the empty tuple:
///
/// ```
/// use catena::tuple;
///
/// assert_eq!(tuple!().len(), 0);
/// ```
#[macro_export]
macro_rules! tuple {
    () => { $crate::Nil };
    (ref $head:expr $(, $($rest:tt)*)?) => {
        $crate::cons($crate::by_ref(&$head), $crate::tuple!($($($rest)*)?))
    };
    (mut $head:expr $(, $($rest:tt)*)?) => {
        $crate::cons($crate::by_mut(&mut $head), $crate::tuple!($($($rest)*)?))
    };
    ($head:expr $(, $($rest:tt)*)?) => {
        $crate::cons($crate::val($head), $crate::tuple!($($($rest)*)?))
    };
}

/// Writes the type of a tuple as a comma-separated list of slot types.
///
/// Owned slots are spelled by their value type, alias slots by their
/// reference type:
///
/// ```
/// use catena::{tuple, Tuple};
///
/// let mut count = 42;
/// let t: Tuple![f64, &mut i32, char] = tuple!(1.23, mut count, 'A');
/// assert_eq!(t.len(), 3);
/// ```
#[macro_export]
macro_rules! Tuple {
    () => { $crate::Nil };
    ($head:ty $(, $($rest:tt)*)?) => {
        $crate::Cons<$head, $crate::Tuple![$($($rest)*)?]>
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn construction_reads_back_every_argument() {
        let t = tuple!(1u8, 2u16, 3u32, 4u64);
        assert_eq!(*t.get::<0>(), 1);
        assert_eq!(*t.get::<1>(), 2);
        assert_eq!(*t.get::<2>(), 3);
        assert_eq!(*t.get::<3>(), 4);
    }

    #[test]
    fn trailing_commas_are_accepted() {
        let t = tuple!(1, 'a',);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn the_type_macro_spells_the_construction_type() {
        let mut count = 0;
        let mut t: Tuple![i32, &mut i32] = tuple!(7, mut count);
        assert_eq!(*t.get::<0>(), 7);
        **t.get_mut::<1>() = 9;
        drop(t);
        assert_eq!(count, 9);
    }

    /// The original demonstration, end to end: five slots, mixed owned and
    /// aliased, mutated through the tuple and observed outside it.
    #[test]
    fn five_slot_demonstration() {
        let mut i = 42;
        let hello = String::from("Hello World");
        let mut greeting = hello.clone();
        {
            let mut t = tuple!(1.23, mut i, 'A', hello.clone(), mut greeting);

            assert_eq!(t.len(), 5);
            assert_eq!(*t.head(), 1.23);
            assert_eq!(**t.get::<1>(), 42);
            assert_eq!(*t.get::<2>(), 'A');
            assert_eq!(*t.get::<3>(), "Hello World");
            assert_eq!(t.tail(), t.get::<4>());

            // Rewriting the aliased string is seen by tail(); the owned
            // copy at index 3 keeps the value taken at construction.
            **t.get_mut::<4>() = String::from("Hello Univers");
            assert_eq!(*t.tail(), "Hello Univers");
            assert_eq!(*t.get::<3>(), "Hello World");

            *t.get_mut::<0>() = 1.42;
            **t.get_mut::<1>() = 84;
            assert_eq!(*t.head(), 1.42);
        }
        assert_eq!(i, 84);
        assert_eq!(greeting, "Hello Univers");
        assert_eq!(hello, "Hello World");
    }
}
