/*!
> **catena (noun):** a connected series; a chain whose links each carry
> something different.
>
> **catena (crate):** heterogeneous tuples as chains of typed slots, indexed
> at compile time.

A `catena` tuple is a fixed-size, heterogeneous container whose shape (its
length and the type of every slot) is part of its static type. Element
access by index is resolved entirely by the type system: there is no runtime
dispatch, no tag, no bounds check, because an out-of-range index is a type
error, not a value.

Each slot stores its element one of two ways, decided per argument at
construction:

- **owned**: the tuple holds its own value; cloning the tuple clones it,
  dropping the tuple drops it;
- **aliased**: the tuple holds a reference (`&T` shared, or `&mut T`
  exclusive) to a value whose lifetime is managed elsewhere; the tuple
  never copies or drops the referent.

## Quick reference

Make a tuple with the [`tuple!`] macro, name its type with [`Tuple!`], and
use the accessors:

| Operation | Meaning |
| :-------- | :------ |
| `tuple!(a, ref b, mut c)` | construct: `a` owned, `b` shared alias, `c` exclusive alias |
| [`len`](Cons::len) / [`List::LENGTH`] | number of slots (compile-time constant) |
| [`head`](Cons::head) / [`head_mut`](Cons::head_mut) | first slot |
| [`get`](Cons::get) / [`get_mut`](Cons::get_mut) | slot `I`, compile-time checked `I < LENGTH` |
| [`tail`](Cons::tail) / [`tail_mut`](Cons::tail_mut) | *last* slot (index `LENGTH - 1`) |
| [`swap`] | exchange all slots of two same-typed tuples |
| `clone` | deep-clone owned slots, re-alias shared slots |

# Examples

```
use catena::prelude::*;

let mut i = 42;
let hello = String::from("Hello World");

let mut t = tuple!(1.23, mut i, 'A', hello.clone());
assert_eq!(t.len(), 4);
assert_eq!(*t.head(), 1.23);

*t.get_mut::<0>() = 1.42;
**t.get_mut::<1>() = 84;
assert_eq!(*t.head(), 1.42);

drop(t);
assert_eq!(i, 84);
assert_eq!(hello, "Hello World");
```

# Counterexamples

Everything that can go wrong with a tuple goes wrong before the program
runs.

1. An index must be less than the length; there is no slot `2` in a
   two-slot tuple:

   ```compile_fail
   # use catena::tuple;
   let t = tuple!(1, 'a');
   let _ = t.get::<2>();
   ```

2. The empty tuple has no head:

   ```compile_fail
   # use catena::tuple;
   let t = tuple!();
   let _ = t.head();
   ```

   nor a tail:

   ```compile_fail
   # use catena::tuple;
   let t = tuple!();
   let _ = t.tail();
   ```

3. A tuple holding an exclusive alias cannot be cloned, since that would
   make two exclusive borrows of one referent:

   ```compile_fail
   # use catena::tuple;
   let mut x = 5;
   let t = tuple!(mut x);
   let u = Clone::clone(&t);
   ```
*/

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

#[macro_use]
extern crate derivative;

pub mod trace;
pub mod unary;

mod arg;
mod index;
mod list;
mod tuple_macro;

pub use arg::{by_mut, by_ref, val, Arg, Decay};
pub use index::Slot;
pub use list::{cons, swap, Cons, List, Nil};

/// The prelude module for quickly getting started with catena.
///
/// This module is designed to be imported as `use catena::prelude::*;`,
/// which brings into scope everything needed to construct, index, and
/// observe tuples.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::trace::{Event, Recorder, Sink, Trace, Traced, Verbosity};
    #[doc(no_inline)]
    pub use crate::unary::{Unary, UnaryOf};
    #[doc(no_inline)]
    pub use crate::{by_mut, by_ref, cons, swap, val, Arg, Cons, Decay, List, Nil, Slot};
    #[doc(no_inline)]
    pub use crate::{tuple, Tuple};
    #[doc(no_inline)]
    pub use call_by::{Mut, Ref, Val};
}
