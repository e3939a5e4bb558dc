//! Shared console for output produced by concurrently running workers.

use std::{
    fmt::{self, Debug},
    io::{self, Write},
    sync::{Mutex, MutexGuard},
};

/// Serializes writes from several threads to one underlying writer.
///
/// Every call holds the lock for its whole output, so lines from different workers never
/// interleave. The order in which workers get the lock is up to the scheduler.
pub struct Console<W> {
    out: Mutex<W>,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// A panic while holding the lock can at worst leave a partial line behind, so a poisoned
    /// lock is taken over rather than propagated.
    fn lock(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Writes one complete line.
    pub fn line(&self, args: fmt::Arguments<'_>) -> io::Result<()> {
        let mut out = self.lock();
        out.write_fmt(args)?;
        out.write_all(b"\n")?;
        out.flush()
    }

    /// Runs `f` with exclusive access to the writer, for output that must stay together.
    pub fn with<V>(&self, f: impl FnOnce(&mut W) -> V) -> V {
        let mut out = self.lock();
        f(&mut out)
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W> Debug for Console<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Console")
    }
}
