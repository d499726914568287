use crate::Key;
use std::io::{self, Write};

/// Receiver for anomalies detected while measuring.
///
/// Reports are a side channel: they never change the returned timings.
pub trait Diagnostics {
    /// Called when a key inserted during the insertion phase is absent
    /// during the search phase.
    fn missing_key(&mut self, key: Key);
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn missing_key(&mut self, key: Key) {
        (**self).missing_key(key);
    }
}

/// Writes one `not found: <key>` line per report to `W`.
#[derive(Debug, Default, Clone)]
pub struct Stream<W>(pub W);

impl<W> Stream<W> {
    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: Write> Diagnostics for Stream<W> {
    fn missing_key(&mut self, key: Key) {
        // A broken writer must not abort the measurement.
        let _ = writeln!(self.0, "not found: {key}");
    }
}

/// Writes one `not found: <key>` line per report to the standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl Diagnostics for Stderr {
    fn missing_key(&mut self, key: Key) {
        Stream(io::stderr().lock()).missing_key(key);
    }
}

/// Records every reported key, in report order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Collect(pub Vec<Key>);

impl Collect {
    /// Returns the reported keys.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }
}

impl Diagnostics for Collect {
    fn missing_key(&mut self, key: Key) {
        self.0.push(key);
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ignore;

impl Diagnostics for Ignore {
    fn missing_key(&mut self, _key: Key) {}
}
