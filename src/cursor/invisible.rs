use std::fmt;
use std::io::{self, StdoutLock, Write};
use std::ops::{Deref, DerefMut};

use crate::cursor::{HIDE, SHOW};
use crate::errors::{Error, Result};

/// Keeps the cursor hidden on `stream` until shown or dropped.
///
/// The guard derefs to the stream, so output can be drawn through it while
/// the cursor is hidden. Dropping it without calling [`HiddenCursor::show`]
/// (for example while unwinding from a panic) still writes the show
/// sequence, ignoring write errors.
pub struct HiddenCursor<'a, W: Write> {
    stream: &'a mut W,
    shown: bool,
}

impl<'a, W: Write> HiddenCursor<'a, W> {
    pub fn hide(stream: &'a mut W) -> Result<Self> {
        write_flush(stream, HIDE)?;
        Ok(Self {
            stream,
            shown: false,
        })
    }

    pub fn show(mut self) -> Result<()> {
        self.shown = true;
        write_flush(self.stream, SHOW)
    }
}

impl<W: Write> Deref for HiddenCursor<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.stream
    }
}

impl<W: Write> DerefMut for HiddenCursor<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        self.stream
    }
}

impl<W: Write> Drop for HiddenCursor<'_, W> {
    fn drop(&mut self) {
        if !self.shown {
            let _ = write_flush(self.stream, SHOW);
        }
    }
}

impl<W: Write> fmt::Debug for HiddenCursor<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HiddenCursor")
            .field("shown", &self.shown)
            .finish()
    }
}

fn write_flush<W: Write>(stream: &mut W, seq: &str) -> Result<()> {
    stream.write_all(seq.as_bytes())?;
    stream.flush()?;
    Ok(())
}

/// Hide the cursor on `stream` while `action` draws to it.
///
/// The show sequence is written however `action` ends, panics included.
/// If the hide sequence cannot be written, `action` is not run.
pub fn invisible<W, F, T>(stream: &mut W, action: F) -> Result<T>
where
    W: Write,
    F: FnOnce(&mut W) -> T,
{
    let mut guard = HiddenCursor::hide(stream)?;
    let value = action(&mut guard);
    guard.show()?;
    Ok(value)
}

/// Like [`invisible`] for a fallible action. The cursor is shown again
/// before the action's error is handed back.
pub fn try_invisible<W, F, T, E>(stream: &mut W, action: F) -> std::result::Result<T, E>
where
    W: Write,
    F: FnOnce(&mut W) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let mut guard = HiddenCursor::hide(stream)?;
    let outcome = action(&mut guard);
    guard.show()?;
    outcome
}

/// [`invisible`] on the process stdout.
pub fn invisible_stdout<F, T>(action: F) -> Result<T>
where
    F: FnOnce(&mut StdoutLock<'static>) -> T,
{
    let mut stdout = io::stdout().lock();
    invisible(&mut stdout, action)
}
