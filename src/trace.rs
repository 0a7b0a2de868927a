//! Optional, injected observation of tuple lifecycle events.
//!
//! Nothing here affects what a tuple *does*; a [`Traced`] tuple behaves
//! exactly like the tuple it wraps. What it adds is a [`Trace`] handle (a
//! [`Verbosity`] filter plus a shared [`Sink`]) injected at wrap time,
//! so a test (or a curious caller) can observe construction, cloning,
//! swapping, and destruction as they happen. The handle is explicit and
//! per-tuple; there is no process-wide switch.
//!
//! ```
//! use std::rc::Rc;
//!
//! use catena::trace::{Event, Recorder, Trace, Verbosity};
//! use catena::tuple;
//!
//! let recorder = Rc::new(Recorder::default());
//! let trace = Trace::new(Verbosity::All, recorder.clone());
//! {
//!     let t = trace.wrap(tuple!(1, 'a'));
//!     let _copy = t.clone();
//! }
//! assert_eq!(
//!     recorder.events(),
//!     vec![Event::Construct, Event::Clone, Event::Drop, Event::Drop],
//! );
//! ```

use std::cell::RefCell;
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use crate::list::List;

/// How much lifecycle detail a [`Trace`] passes on to its sink.
///
/// The ladder is cumulative: [`Lifecycle`](Verbosity::Lifecycle) admits
/// construction, clone, and swap events, and [`All`](Verbosity::All)
/// additionally admits drop events. There is no "move" event to admit:
/// moves are not observable effects in Rust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Record nothing.
    Off,
    /// Record construction, clone, and swap events.
    Lifecycle,
    /// Record everything `Lifecycle` records, plus drop events.
    All,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Off
    }
}

impl Verbosity {
    fn admits(self, event: Event) -> bool {
        match self {
            Verbosity::Off => false,
            Verbosity::Lifecycle => !matches!(event, Event::Drop),
            Verbosity::All => true,
        }
    }
}

/// A lifecycle event observed on a traced tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A tuple was wrapped by a [`Trace`].
    Construct,
    /// A traced tuple was cloned (the clone reports to the same sink).
    Clone,
    /// Two traced tuples exchanged their slots.
    Swap,
    /// A traced tuple was dropped.
    Drop,
}

/// Where admitted events go.
pub trait Sink {
    /// Called once per admitted event, in program order.
    fn record(&self, event: Event);
}

/// A sink that remembers every event it is given, for later inspection.
///
/// Keep a second handle to the `Rc` passed into [`Trace::new`] and read the
/// events back with [`events`](Recorder::events) once the traced tuples are
/// gone.
#[derive(Debug, Default)]
pub struct Recorder {
    events: RefCell<Vec<Event>>,
}

impl Recorder {
    /// The events recorded so far, oldest first.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl Sink for Recorder {
    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

/// A sink that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Sink for Discard {
    fn record(&self, _event: Event) {}
}

/// The handle injected into a traced tuple: a verbosity filter in front of a
/// shared sink.
///
/// Cloning the handle is cheap and every clone reports to the same sink,
/// which is how a traced tuple and its clones end up in one event stream.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct Trace {
    verbosity: Verbosity,
    #[derivative(Debug = "ignore")]
    sink: Rc<dyn Sink>,
}

impl Trace {
    /// A handle that filters at `verbosity` and records into `sink`.
    pub fn new(verbosity: Verbosity, sink: Rc<dyn Sink>) -> Self {
        Trace { verbosity, sink }
    }

    /// A handle that records nothing at all.
    pub fn disabled() -> Self {
        Trace::new(Verbosity::Off, Rc::new(Discard))
    }

    /// The verbosity this handle filters at.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Wraps a tuple, emitting [`Event::Construct`], and ties every later
    /// lifecycle event of the wrapper to this handle's sink.
    pub fn wrap<L: List>(&self, list: L) -> Traced<L> {
        self.emit(Event::Construct);
        Traced {
            list,
            trace: self.clone(),
        }
    }

    pub(crate) fn emit(&self, event: Event) {
        if self.verbosity.admits(event) {
            self.sink.record(event);
        }
    }
}

/// A tuple bundled with the [`Trace`] handle observing it.
///
/// Dereferences to the wrapped tuple, so every accessor ([`head`],
/// [`get`], [`tail`], ...) works unchanged; the wrapper only adds event
/// emission on clone, swap, and drop.
///
/// [`head`]: crate::Cons::head
/// [`get`]: crate::Cons::get
/// [`tail`]: crate::Cons::tail
#[derive(Derivative)]
#[derivative(Debug(bound = "L: Debug"))]
pub struct Traced<L: List> {
    list: L,
    #[derivative(Debug = "ignore")]
    trace: Trace,
}

impl<L: List> Traced<L> {
    /// Exchanges every slot with `other`, like [`List::swap_with`], and
    /// emits a single [`Event::Swap`] against `self`'s handle.
    pub fn swap_with(&mut self, other: &mut Self) {
        self.trace.emit(Event::Swap);
        self.list.swap_with(&mut other.list);
    }
}

impl<L: List> Deref for Traced<L> {
    type Target = L;

    fn deref(&self) -> &L {
        &self.list
    }
}

impl<L: List> DerefMut for Traced<L> {
    fn deref_mut(&mut self) -> &mut L {
        &mut self.list
    }
}

impl<L: List + Clone> Clone for Traced<L> {
    fn clone(&self) -> Self {
        self.trace.emit(Event::Clone);
        Traced {
            list: self.list.clone(),
            trace: self.trace.clone(),
        }
    }
}

impl<L: List> Drop for Traced<L> {
    fn drop(&mut self) {
        self.trace.emit(Event::Drop);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{Event, Recorder, Trace, Verbosity};
    use crate::tuple;

    #[test]
    fn all_records_the_whole_lifecycle() {
        let recorder = Rc::new(Recorder::default());
        let trace = Trace::new(Verbosity::All, recorder.clone());
        {
            let mut a = trace.wrap(tuple!(1, 'x'));
            let mut b = trace.wrap(tuple!(2, 'y'));
            let c = a.clone();
            a.swap_with(&mut b);
            drop(c);
        }
        assert_eq!(
            recorder.events(),
            vec![
                Event::Construct,
                Event::Construct,
                Event::Clone,
                Event::Swap,
                Event::Drop,
                Event::Drop,
                Event::Drop,
            ],
        );
    }

    #[test]
    fn lifecycle_omits_drops() {
        let recorder = Rc::new(Recorder::default());
        let trace = Trace::new(Verbosity::Lifecycle, recorder.clone());
        {
            let t = trace.wrap(tuple!(1));
            let _copy = t.clone();
        }
        assert_eq!(recorder.events(), vec![Event::Construct, Event::Clone]);
    }

    #[test]
    fn off_records_nothing() {
        let recorder = Rc::new(Recorder::default());
        let trace = Trace::new(Verbosity::Off, recorder.clone());
        assert_eq!(trace.verbosity(), Verbosity::Off);
        {
            let mut a = trace.wrap(tuple!(1));
            let mut b = trace.wrap(tuple!(2));
            a.swap_with(&mut b);
        }
        assert_eq!(recorder.events(), vec![]);
    }

    #[test]
    fn tracing_does_not_change_what_the_tuple_does() {
        let trace = Trace::disabled();
        let mut t = trace.wrap(tuple!(1, String::from("same")));
        *t.get_mut::<0>() = 2;
        t.get_mut::<1>().push_str(" as ever");
        assert_eq!(*t.get::<0>(), 2);
        assert_eq!(*t.get::<1>(), "same as ever");
        assert_eq!(t.len(), 2);
    }
}
