//! Single-sample timing of a [`BTreeSet`](std::collections::BTreeSet) under
//! insertion, lookup and deletion, callable from Rust or from C.

mod diagnostic;
mod ffi;
mod measure;
mod timer;

pub use diagnostic::{Collect, Diagnostics, Ignore, Stderr, Stream};
pub use ffi::measure_std_set;
pub use measure::{measure, measure_with, ElapsedTimes, Measurement};
pub use timer::ElapsedTimer;

/// A key, as the C `size_t` the harness hands over.
pub type Key = usize;
