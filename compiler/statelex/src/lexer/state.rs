//! State function handles.

use std::fmt;

use super::Lexer;

type StateFnPtr = fn(&mut Lexer<'_>) -> Option<StateFn>;
type StateClosure = Box<dyn FnOnce(&mut Lexer<'_>) -> Option<StateFn>>;

/// The next piece of scanning logic to run.
///
/// A state function reads input through the [`Lexer`], optionally emits
/// items, and returns the state to run next. Returning `None` is the
/// terminal state: the lexer stops scanning and, once its queue drains,
/// yields end-of-input items forever.
///
/// Plain functions are the common case. A boxed closure covers states that
/// need data from the state that created them (a quote character, a nesting
/// depth, ...).
pub struct StateFn(Repr);

enum Repr {
    Fn(StateFnPtr),
    Closure(StateClosure),
}

impl StateFn {
    /// Wrap a plain state function.
    pub const fn new(f: StateFnPtr) -> Self {
        Self(Repr::Fn(f))
    }

    /// Wrap a one-shot closure.
    pub fn from_closure(f: impl FnOnce(&mut Lexer<'_>) -> Option<StateFn> + 'static) -> Self {
        Self(Repr::Closure(Box::new(f)))
    }

    /// Run the state against `lexer`, returning the next state.
    pub(super) fn run(self, lexer: &mut Lexer<'_>) -> Option<StateFn> {
        match self.0 {
            Repr::Fn(f) => f(lexer),
            Repr::Closure(f) => f(lexer),
        }
    }
}

impl fmt::Debug for StateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Fn(_) => f.write_str("StateFn(<fn>)"),
            Repr::Closure(_) => f.write_str("StateFn(<closure>)"),
        }
    }
}
