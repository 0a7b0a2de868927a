//! Builds a five-slot tuple of mixed owned and aliased slots, mutates
//! through it, and prints what each accessor sees.
//!
//! Run with `cargo run --example demo`.

use std::rc::Rc;

use catena::prelude::*;

fn main() {
    let mut i = 42;
    let hello = String::from("Hello World");
    let mut greeting = hello.clone();

    // The type of `tuple` is
    // Tuple![f64, &mut i32, char, String, &mut String]:
    // slot 1 aliases `i`, slot 4 aliases `greeting`, and slot 3 owns an
    // independent copy of `hello` taken here.
    let mut tuple = tuple!(1.23, mut i, 'A', hello.clone(), mut greeting);

    println!("tuple.len()      : {}", tuple.len()); // 5
    println!("tuple.head()     : {}", tuple.head()); // 1.23
    println!("*tuple.get::<1>(): {}", *tuple.get::<1>()); // 42
    println!("tuple.get::<2>() : {}", tuple.get::<2>()); // A
    println!("tuple.get::<3>() : {}", tuple.get::<3>()); // Hello World
    println!();

    // Rewriting the aliased string only affects slot 4; the copy at
    // slot 3 keeps the value it was given at construction.
    **tuple.get_mut::<4>() = String::from("Hello Univers");

    println!("tuple.get::<3>() : {}", tuple.get::<3>()); // Hello World
    println!("tuple.tail()     : {}", tuple.tail()); // Hello Univers
    println!();

    *tuple.get_mut::<0>() = 1.42; // writes the owned slot in place
    **tuple.get_mut::<1>() = 84; // writes `i` through the alias

    println!("tuple.head()     : {}", tuple.head()); // 1.42
    drop(tuple);
    println!("i                : {}", i); // 84
    println!("greeting         : {}", greeting); // Hello Univers
    println!();

    // The same lifecycle, observed through an injected trace.
    let recorder = Rc::new(Recorder::default());
    let trace = Trace::new(Verbosity::All, recorder.clone());
    {
        let mut a = trace.wrap(tuple!(1, 'a'));
        let mut b = trace.wrap(tuple!(2, 'b'));
        let _copy = a.clone();
        a.swap_with(&mut b);
    }
    println!("observed events  : {:?}", recorder.events());
}
