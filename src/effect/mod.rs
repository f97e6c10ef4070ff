//! Deferred side effect handling.
//!
//! This module provides the [`Io`] monad, the library's core effect
//! abstraction: a computation that may perform side effects, deferred until
//! [`Io::exec`] is called.
//!
//! # Deferred Actions
//!
//! An `Io<A>` wraps a zero-argument computation producing an `A`. Building
//! and composing actions performs no work; only forcing does:
//!
//! ```rust
//! use deferio::effect::Io;
//!
//! let action = Io::of(10)
//!     .map(|x| x * 2)
//!     .bind(|x| Io::of(x + 1));
//!
//! assert_eq!(action.exec(), 21);
//! ```
//!
//! # Exception Values
//!
//! Recoverable failures are represented as data: an [`IoException`] carried
//! inside a [`Fallible`] payload travels through the action graph like any
//! other value and only becomes a host-level failure when a forcing point
//! observes it. [`Io::catch`] is the sanctioned interception point:
//!
//! ```rust
//! use deferio::effect::Io;
//!
//! let recovered = Io::exception("boom").catch();
//! assert_eq!(recovered.exec(), "boom");
//! ```
//!
//! # Primitive Actions
//!
//! Ready-made actions cover text output ([`Io::put_char`], [`Io::put_str`],
//! [`Io::put_str_ln`]), identity read-back ([`Io::read_io`]), and whole-file
//! reads ([`Io::read_file`]). Output goes through an injectable [`Sink`] so
//! tests can capture it deterministically.

// =============================================================================
// Core IO Monad
// =============================================================================

mod io;

pub use io::Io;

// =============================================================================
// Error Types
// =============================================================================

mod error;

pub use error::{Fallible, FileAccessError, IoException};

// =============================================================================
// Console Output Primitives
// =============================================================================

mod console;

pub use console::{Captured, Sink};
