//! Console output primitives.
//!
//! Text output is modeled as an injected capability: each primitive action
//! writes through a [`Sink`], a shared handle over an arbitrary writer.
//! The plain constructors ([`Io::put_char`], [`Io::put_str`],
//! [`Io::put_str_ln`]) target standard output; the `_to` variants thread an
//! explicit sink, and [`Sink::capture`] provides a capturing sink for
//! deterministic tests.
//!
//! # Examples
//!
//! ```rust
//! use deferio::effect::{Io, Sink};
//!
//! let (sink, captured) = Sink::capture();
//! let action = Io::put_str_ln_to(sink, "hello");
//!
//! // Nothing is written before forcing
//! assert_eq!(captured.contents(), "");
//!
//! let emitted = action.exec();
//! assert_eq!(emitted, "hello\n");
//! assert_eq!(captured.contents(), "hello\n");
//! ```

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use super::io::Io;

/// A shared handle to the writer used by the console primitives.
///
/// Cloning a `Sink` yields another handle to the same underlying writer,
/// so a single sink can be threaded through several primitive actions. The
/// effect model is single-threaded, so the handle is reference-counted
/// rather than thread-safe.
#[derive(Clone)]
pub struct Sink {
    writer: Rc<RefCell<dyn Write>>,
}

impl Sink {
    /// Creates a sink targeting the process's standard output stream.
    pub fn stdout() -> Self {
        Self::from_writer(std::io::stdout())
    }

    /// Creates a sink over an arbitrary writer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::{Io, Sink};
    ///
    /// let sink = Sink::from_writer(std::io::sink());
    /// assert_eq!(Io::put_str_to(sink, "discarded").exec(), "discarded");
    /// ```
    pub fn from_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Rc::new(RefCell::new(writer)),
        }
    }

    /// Creates a capturing sink together with a handle that exposes the
    /// accumulated text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::{Io, Sink};
    ///
    /// let (sink, captured) = Sink::capture();
    /// Io::put_str_to(sink, "abc").exec();
    /// assert_eq!(captured.contents(), "abc");
    /// ```
    pub fn capture() -> (Self, Captured) {
        let buffer = Rc::new(RefCell::new(Vec::new()));
        let sink = Self {
            writer: Rc::new(RefCell::new(SharedBuffer(buffer.clone()))),
        };
        (sink, Captured { buffer })
    }

    /// Writes `text` to the underlying writer and flushes it.
    ///
    /// A write failure is a structural host error with no recovery path,
    /// matching the semantics of the standard `print!` macros.
    fn write_text(&self, text: &str) {
        let mut writer = self.writer.borrow_mut();
        let outcome = writer
            .write_all(text.as_bytes())
            .and_then(|()| writer.flush());
        if let Err(error) = outcome {
            panic!("failed to write to output sink: {error}");
        }
    }
}

/// Read-back handle for a capturing [`Sink`].
///
/// Returned by [`Sink::capture`]; exposes everything written through the
/// paired sink so far.
pub struct Captured {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl Captured {
    /// Returns the text written through the paired sink so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }
}

/// Writer half of a capturing sink, sharing its buffer with [`Captured`].
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Output Primitives
// =============================================================================

impl Io<String> {
    /// Creates an action that emits a single character to standard output
    /// and yields the emitted text.
    ///
    /// Nothing is written until the action is forced.
    pub fn put_char(character: char) -> Self {
        Self::put_char_to(Sink::stdout(), character)
    }

    /// Like [`Io::put_char`], writing through an explicit sink.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use deferio::effect::{Io, Sink};
    ///
    /// let (sink, captured) = Sink::capture();
    /// assert_eq!(Io::put_char_to(sink, 'a').exec(), "a");
    /// assert_eq!(captured.contents(), "a");
    /// ```
    pub fn put_char_to(sink: Sink, character: char) -> Self {
        Io::new(move || {
            let text = character.to_string();
            sink.write_text(&text);
            text
        })
    }

    /// Creates an action that emits a string to standard output and yields
    /// the emitted text.
    ///
    /// Nothing is written until the action is forced.
    pub fn put_str<S: Into<String>>(text: S) -> Self {
        Self::put_str_to(Sink::stdout(), text)
    }

    /// Like [`Io::put_str`], writing through an explicit sink.
    pub fn put_str_to<S: Into<String>>(sink: Sink, text: S) -> Self {
        let text = text.into();
        Io::new(move || {
            sink.write_text(&text);
            text
        })
    }

    /// Creates an action that emits a string followed by a newline to
    /// standard output and yields the emitted text, trailing newline
    /// included.
    ///
    /// Nothing is written until the action is forced.
    pub fn put_str_ln<S: Into<String>>(text: S) -> Self {
        Self::put_str_ln_to(Sink::stdout(), text)
    }

    /// Like [`Io::put_str_ln`], writing through an explicit sink.
    pub fn put_str_ln_to<S: Into<String>>(sink: Sink, text: S) -> Self {
        let mut text = text.into();
        text.push('\n');
        Io::new(move || {
            sink.write_text(&text);
            text
        })
    }
}
