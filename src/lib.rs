//! # deferio
//!
//! A functional programming library for Rust providing a deferred-execution
//! IO monad with exception-as-value error handling.
//!
//! ## Overview
//!
//! This library is built around a single effect abstraction: [`effect::Io`],
//! a wrapper over a zero-argument computation (a thunk) that defers all side
//! effects until an explicit forcing step. Actions compose through functor,
//! applicative, and monad operations; nothing executes until `exec` is
//! called. It includes:
//!
//! - **Deferred Actions**: `Io<A>` with `of`/`new` construction, `map`,
//!   `ap`, `bind`, and a single forcing operation `exec`
//! - **Exception Values**: recoverable failures that travel through the
//!   action graph as ordinary data and only raise at a forcing point
//! - **Primitive Actions**: character/string output against an injectable
//!   sink, identity read-back, and whole-file reads
//!
//! ## Example
//!
//! ```rust
//! use deferio::effect::Io;
//!
//! let action = Io::of(10)
//!     .map(|x| x * 2)
//!     .bind(|x| Io::of(x + 1));
//!
//! // Nothing has run yet; forcing produces the value.
//! assert_eq!(action.exec(), 21);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use deferio::prelude::*;
/// ```
pub mod prelude {
    pub use crate::effect::*;
}

pub mod effect;
