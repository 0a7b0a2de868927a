//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! Tuple indices are type-level numbers in this representation, so that
//! resolving an index is a finite recursion over the type structure and
//! nothing remains of it at run time.

/// The number zero.
///
/// # Examples
///
/// ```
/// use catena::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use catena::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A convenient type synonym for writing out unary types using constants.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// use catena::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<2>>::VALUE, 2);
/// // ...
/// assert_eq!(<UnaryOf<32>>::VALUE, 32);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Ensure that a unary number is strictly less than some other number.
///
/// This is the range constraint on indexed tuple access: an index is only
/// usable when it is [`LessThan`] the tuple's length.
///
/// # Examples
///
/// This compiles, because `1 < 2`:
///
/// ```
/// use catena::unary::*;
///
/// fn ok() where UnaryOf<1>: LessThan<UnaryOf<2>> {}
/// ```
///
/// But this does not compile, because `2 >= 1`:
///
/// ```compile_fail
/// # use catena::unary::*;
/// #
/// fn bad() where UnaryOf<2>: LessThan<UnaryOf<1>> {}
/// ```
///
/// Because [`LessThan`] is a *strict* less-than relationship (i.e. `<`, not
/// `<=`), this does not compile either:
///
/// ```compile_fail
/// # use catena::unary::*;
/// #
/// fn bad() where UnaryOf<16>: LessThan<UnaryOf<16>> {}
/// ```
pub trait LessThan<N: Unary>
where
    Self: Unary,
{
}

impl<N: Unary> LessThan<S<N>> for Z {}

impl<N: Unary, M: LessThan<N>> LessThan<S<N>> for S<M> {}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values to allow implementing traits on them.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// A trait which allows conversion from a wrapper type over a type-level
/// `usize` to a unary type-level number representation.
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// A trait which allows conversion from a unary type-level representation to
/// a wrapper over a type-level `usize`.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

pub mod types {
    //! Names for the unary numbers up to the maximum constant-indexable
    //! arity, `U0` through `U32`.
    //!
    //! Indices written with a constant (`tuple.get::<3>()`) pass through the
    //! conversions defined here, so constant indexing stops at 32; indices
    //! written directly in unary have no such bound.
    use super::{Number, S, ToConstant, ToUnary, Z};

    macro_rules! unary_constants {
        ($($value:literal => $name:ident = $unary:ty),* $(,)?) => {$(
            #[doc = concat!("The unary representation of `", stringify!($value), "`.")]
            pub type $name = $unary;

            impl ToUnary for Number<$value> {
                type AsUnary = $name;
            }

            impl ToConstant for $name {
                type AsConstant = Number<$value>;
            }
        )*};
    }

    unary_constants! {
        0 => U0 = Z,
        1 => U1 = S<U0>,
        2 => U2 = S<U1>,
        3 => U3 = S<U2>,
        4 => U4 = S<U3>,
        5 => U5 = S<U4>,
        6 => U6 = S<U5>,
        7 => U7 = S<U6>,
        8 => U8 = S<U7>,
        9 => U9 = S<U8>,
        10 => U10 = S<U9>,
        11 => U11 = S<U10>,
        12 => U12 = S<U11>,
        13 => U13 = S<U12>,
        14 => U14 = S<U13>,
        15 => U15 = S<U14>,
        16 => U16 = S<U15>,
        17 => U17 = S<U16>,
        18 => U18 = S<U17>,
        19 => U19 = S<U18>,
        20 => U20 = S<U19>,
        21 => U21 = S<U20>,
        22 => U22 = S<U21>,
        23 => U23 = S<U22>,
        24 => U24 = S<U23>,
        25 => U25 = S<U24>,
        26 => U26 = S<U25>,
        27 => U27 = S<U26>,
        28 => U28 = S<U27>,
        29 => U29 = S<U28>,
        30 => U30 = S<U29>,
        31 => U31 = S<U30>,
        32 => U32 = S<U31>,
    }
}

mod sealed {
    use super::*;

    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}
}

#[cfg(test)]
mod tests {
    use super::types::*;
    use super::{Unary, UnaryOf};
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(UnaryOf<0>, U0);
    assert_type_eq_all!(UnaryOf<7>, U7);
    assert_type_eq_all!(UnaryOf<32>, U32);

    #[test]
    fn values_count_up() {
        assert_eq!(U0::VALUE, 0);
        assert_eq!(U1::VALUE, 1);
        assert_eq!(U5::VALUE, 5);
        assert_eq!(U16::VALUE, 16);
        assert_eq!(U32::VALUE, 32);
    }
}
