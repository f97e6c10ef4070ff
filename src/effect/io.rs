//! IO Monad - Deferred side effect handling.
//!
//! The `Io` type wraps a zero-argument computation (a thunk), defers its
//! evaluation, and composes through functor (`map`), applicative (`ap`),
//! and monad (`bind`) operations. Side effects are not executed until
//! `exec` is called, maintaining referential transparency in pure code.
//!
//! # Design Philosophy
//!
//! An `Io` "describes" side effects but doesn't "execute" them. Callers
//! build an action graph purely through composition; a single forcing call
//! walks the graph and performs the wrapped computations. Forcing should
//! happen at the program's "edge" (e.g., in the `main` function).
//!
//! # Examples
//!
//! ```rust
//! use deferio::effect::Io;
//!
//! // Lift a pure value
//! let action = Io::of(42);
//! assert_eq!(action.exec(), 42);
//!
//! // Chain actions
//! let action = Io::of(10)
//!     .map(|x| x * 2)
//!     .bind(|x| Io::of(x + 1));
//! assert_eq!(action.exec(), 21);
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use deferio::effect::Io;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let executed_clone = executed.clone();
//!
//! let action = Io::new(move || {
//!     executed_clone.store(true, Ordering::SeqCst);
//!     42
//! });
//!
//! // Not executed yet
//! assert!(!executed.load(Ordering::SeqCst));
//!
//! // Forcing runs the thunk
//! let result = action.exec();
//! assert!(executed.load(Ordering::SeqCst));
//! assert_eq!(result, 42);
//! ```

use std::path::PathBuf;

use super::error::{Fallible, FileAccessError, IoException};

/// A monad representing deferred side effects.
///
/// `Io<A>` wraps a thunk that produces a value of type `A` and may perform
/// side effects. Constructing an `Io` never executes its thunk; only
/// forcing via [`Io::exec`] does. Each combinator consumes the action it is
/// called on and produces a new action that closes over it, so a thunk
/// chain runs at most once.
///
/// # Type Parameters
///
/// - `A`: The type of the value produced by the action.
///
/// # Monad Laws
///
/// `Io` satisfies the monad laws (observed after forcing):
///
/// 1. **Left Identity**: `Io::of(a).bind(f) == f(a)`
/// 2. **Right Identity**: `m.bind(Io::of) == m`
/// 3. **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
pub struct Io<A> {
    /// The wrapped thunk that produces a value of type `A`.
    thunk: Box<dyn FnOnce() -> A>,
}

impl<A: 'static> Io<A> {
    /// Creates an action from a zero-argument closure.
    ///
    /// This is the "lift a callable" constructor. The closure will not be
    /// executed until [`Io::exec`] is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::new(|| 10 + 20);
    /// // Nothing has run yet
    /// assert_eq!(action.exec(), 30);
    /// ```
    pub fn new<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + 'static,
    {
        Self {
            thunk: Box::new(thunk),
        }
    }

    /// Lifts a plain value into an action.
    ///
    /// This is the "lift a value" constructor: the resulting action wraps a
    /// trivial thunk that returns `value` unchanged, without performing any
    /// side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of(42);
    /// assert_eq!(action.exec(), 42);
    /// ```
    pub fn of(value: A) -> Self {
        Self::new(move || value)
    }

    /// Forces the action, executing its thunk chain and returning the
    /// final value.
    ///
    /// This is the only way to extract a value from an action. The chain
    /// runs sequentially on the caller's thread, left-to-right in
    /// composition order; consuming `self` guarantees each node executes at
    /// most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of("scooter");
    /// assert_eq!(action.exec(), "scooter");
    /// ```
    pub fn exec(self) -> A {
        (self.thunk)()
    }

    /// Transforms the result of an action using a function.
    ///
    /// This is the functor operation: the returned action, when forced,
    /// computes the original thunk's value and applies `function` to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of("foo").map(str::to_uppercase);
    /// assert_eq!(action.exec(), "FOO");
    /// ```
    pub fn map<B, F>(self, function: F) -> Io<B>
    where
        F: FnOnce(A) -> B + 'static,
        B: 'static,
    {
        Io::new(move || function(self.exec()))
    }

    /// Applies a deferred function to a deferred argument.
    ///
    /// The payload of `self` must be a single-argument function. The
    /// returned action, when forced, forces `self` to obtain the function,
    /// forces `value` to obtain the argument, and applies one to the other.
    /// That a non-invocable payload cannot reach this point is enforced by
    /// the type system.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of(|text: String| text.to_uppercase())
    ///     .ap(Io::of("foo".to_string()));
    /// assert_eq!(action.exec(), "FOO");
    /// ```
    pub fn ap<X, B>(self, value: Io<X>) -> Io<B>
    where
        A: FnOnce(X) -> B,
        X: 'static,
        B: 'static,
    {
        Io::new(move || {
            let function = self.exec();
            let argument = value.exec();
            function(argument)
        })
    }

    /// Chains actions, passing the result of the first to a function that
    /// produces the second.
    ///
    /// This is the monadic bind: the only combinator that lets a computed
    /// value choose the next effect to run. The returned action, when
    /// forced, forces `self`, applies `function` to obtain the inner
    /// action, and forces that too.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of(10).bind(|x| Io::of(x * 2));
    /// assert_eq!(action.exec(), 20);
    /// ```
    pub fn bind<B, F>(self, function: F) -> Io<B>
    where
        F: FnOnce(A) -> Io<B> + 'static,
        B: 'static,
    {
        Io::new(move || function(self.exec()).exec())
    }

    /// Alias for `bind`.
    ///
    /// This is the conventional Rust name for monadic bind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of(10).and_then(|x| Io::of(x + 5));
    /// assert_eq!(action.exec(), 15);
    /// ```
    pub fn and_then<B, F>(self, function: F) -> Io<B>
    where
        F: FnOnce(A) -> Io<B> + 'static,
        B: 'static,
    {
        self.bind(function)
    }

    /// Sequences two actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of(10).then(Io::of(20));
    /// assert_eq!(action.exec(), 20);
    /// ```
    pub fn then<B>(self, next: Io<B>) -> Io<B>
    where
        B: 'static,
    {
        self.bind(move |_| next)
    }

    /// Combines two actions using a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of(10).map2(Io::of(20), |a, b| a + b);
    /// assert_eq!(action.exec(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: Io<B>, function: F) -> Io<C>
    where
        F: FnOnce(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.bind(move |a| other.map(move |b| function(a, b)))
    }

    /// Combines two actions into a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let action = Io::of(10).product(Io::of("hello".to_string()));
    /// assert_eq!(action.exec(), (10, "hello".to_string()));
    /// ```
    pub fn product<B>(self, other: Io<B>) -> Io<(A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Forces the action and applies `function` to the result, returning
    /// the plain value.
    ///
    /// Unlike [`Io::bind`], this is a forcing operation: no wrapper leaks
    /// to the caller. Use it with ordinary functions at the edge of a
    /// composition; for functions that themselves produce an action, use
    /// [`Io::flat_map_action`] so the inner action is forced as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let value = Io::of("scooter".to_string()).flat_map(|s| s.to_uppercase());
    /// assert_eq!(value, "SCOOTER");
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        function(self.exec())
    }

    /// Forces the action, applies an action-producing `function`, and
    /// forces the produced action too.
    ///
    /// This is the flattening counterpart of [`Io::flat_map`]: the inner
    /// action is detected statically and forced rather than being returned
    /// as the final value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let value = Io::of(2).flat_map_action(|x| Io::of(x * 21));
    /// assert_eq!(value, 42);
    /// ```
    pub fn flat_map_action<B, F>(self, function: F) -> B
    where
        F: FnOnce(A) -> Io<B>,
        B: 'static,
    {
        function(self.exec()).exec()
    }

    /// Forces the action immediately and re-wraps the value as a fresh
    /// pure action (identity read-back).
    ///
    /// Useful for normalizing an already-computed value back into the
    /// action type. Note that the force happens at call time, not when the
    /// returned action is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let read = Io::of("foo").read_io();
    /// assert_eq!(read.exec(), "foo");
    /// ```
    pub fn read_io(self) -> Self {
        Self::of(self.exec())
    }
}

// =============================================================================
// Exception Channel
// =============================================================================

impl Io<Fallible<String>> {
    /// Creates an action whose forced result is an exception value
    /// carrying `message`.
    ///
    /// Constructing and composing the action never raises; the failure
    /// surfaces only when a forcing point observes it, via
    /// [`Io::exec_or_raise`] or interception by [`Io::catch`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let outcome = Io::exception("boom").exec();
    /// assert_eq!(outcome.unwrap_err().message(), "boom");
    /// ```
    pub fn exception<S: Into<String>>(message: S) -> Self {
        let exception = IoException::new(message);
        Self::new(move || Err(exception))
    }
}

impl<A: 'static> Io<Fallible<A>> {
    /// Forces the action, raising if the result is an exception value.
    ///
    /// On success the plain value is returned. An uncaught exception value
    /// terminates the evaluation with its failure message.
    ///
    /// # Panics
    ///
    /// Panics with the exception's message if the forced result is a
    /// failure.
    ///
    /// # Examples
    ///
    /// ```rust,should_panic
    /// use deferio::effect::Io;
    ///
    /// let _ = Io::exception("boom").exec_or_raise(); // panics with "boom"
    /// ```
    pub fn exec_or_raise(self) -> A {
        match self.exec() {
            Ok(value) => value,
            Err(exception) => panic!("{exception}"),
        }
    }

    /// Intercepts an exception value, yielding its message as a plain
    /// successful string instead of raising.
    ///
    /// This is the single sanctioned recovery point for the exception
    /// channel. A successful result passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::Io;
    ///
    /// let recovered = Io::exception("another exception").catch();
    /// assert_eq!(recovered.exec(), "another exception");
    /// ```
    pub fn catch(self) -> Io<String>
    where
        A: Into<String>,
    {
        Io::new(move || match self.exec() {
            Ok(value) => value.into(),
            Err(exception) => exception.into_message(),
        })
    }
}

// =============================================================================
// File Read Primitive
// =============================================================================

impl Io<Result<String, FileAccessError>> {
    /// Creates an action that reads the named file's full contents as
    /// UTF-8 text.
    ///
    /// The file is opened, read, and closed entirely within the single
    /// forcing call. A missing or unreadable path yields a
    /// [`FileAccessError`] through the structural error channel, which
    /// propagates to the `exec` caller rather than being interceptable by
    /// [`Io::catch`].
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use deferio::effect::Io;
    ///
    /// let action = Io::read_file("notes.txt");
    /// let contents = action.exec().expect("failed to read notes.txt");
    /// println!("{contents}");
    /// ```
    pub fn read_file<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        Self::new(move || {
            std::fs::read_to_string(&path)
                .map_err(move |source| FileAccessError::new(path, source))
        })
    }
}
