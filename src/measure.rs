use crate::{
    diagnostic::{Diagnostics, Stderr},
    ElapsedTimer, Key,
};
#[cfg(feature = "trace")]
use si_trace_print::{defn, defo, defx};
use std::{collections::BTreeSet, hint::black_box};

/// Time spent in each phase of a measurement, in fractional milliseconds.
///
/// The layout is C-compatible and the field order is part of the ABI.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ElapsedTimes {
    /// Inserting every key into an empty set.
    pub insertion: f64,
    /// Looking every key up.
    pub search: f64,
    /// Erasing every key.
    pub deletion: f64,
}

/// Outcome of [`measure_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Phase timings.
    pub times: ElapsedTimes,
    /// Number of keys held by the set once the insertion phase is over.
    pub distinct: usize,
    /// Number of lookups that missed during the search phase.
    pub missing: usize,
}

/// Measures insertion, search and deletion of `keys` in a [`BTreeSet`].
///
/// Keys that cannot be found during the search phase are reported on the
/// standard error.
///
/// # Examples
///
/// ```
/// let times = stdset_bench::measure(&[5, 3, 5, 1]);
/// assert!(times.insertion >= 0.);
/// assert!(times.search >= 0.);
/// assert!(times.deletion >= 0.);
/// ```
pub fn measure(keys: &[Key]) -> ElapsedTimes {
    measure_with(keys, &mut Stderr).times
}

/// Measures insertion, search and deletion of `keys` in a [`BTreeSet`],
/// reporting anomalies to `sink`.
///
/// The three phases run in order on the same set, each walking `keys` from
/// start to end:
/// 1. every key is inserted (duplicates collapse into one entry);
/// 2. every key is looked up, a miss is reported but does not stop the walk;
/// 3. every key is erased (erasing an absent key does nothing).
///
/// A single sample is taken: there is no warm-up nor repetition.
///
/// # Examples
///
/// ```
/// use stdset_bench::{measure_with, Collect};
///
/// let mut sink = Collect::default();
/// let result = measure_with(&[5, 3, 5, 1], &mut sink);
///
/// assert_eq!(result.distinct, 3);
/// assert_eq!(result.missing, 0);
/// assert!(sink.keys().is_empty());
/// ```
pub fn measure_with<D>(keys: &[Key], sink: &mut D) -> Measurement
where
    D: Diagnostics + ?Sized,
{
    #[cfg(feature = "trace")]
    defn!("{} keys", keys.len());
    let mut timer = ElapsedTimer::new();

    let mut set = BTreeSet::new();
    for &key in keys {
        black_box(set.insert(key));
    }
    let insertion = timer.elapsed();
    let distinct = set.len();
    #[cfg(feature = "trace")]
    defo!("insertion: {}ms, {} distinct keys", insertion, distinct);
    timer.reset();

    let mut missing = 0;
    for &key in keys {
        if !black_box(set.contains(&key)) {
            missing += 1;
            sink.missing_key(key);
        }
    }
    let search = timer.elapsed();
    #[cfg(feature = "trace")]
    defo!("search: {}ms, {} missing keys", search, missing);
    timer.reset();

    for key in keys {
        black_box(set.remove(key));
    }
    let deletion = timer.elapsed();
    #[cfg(feature = "trace")]
    defx!("deletion: {}ms", deletion);

    Measurement {
        times: ElapsedTimes {
            insertion,
            search,
            deletion,
        },
        distinct,
        missing,
    }
}
