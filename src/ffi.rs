//! C entry point, see `include/stdset_bench.h`.

use crate::{measure, ElapsedTimes, Key};
use std::slice;

/// Measures insertion, search and deletion of `count` keys read from `keys`.
///
/// Exported as `measureCXXSTDSet`.
///
/// # Safety
///
/// When `count` is non-zero, `keys` must be non-null, aligned and point to
/// at least `count` initialized values that are not mutated for the duration
/// of the call. When `count` is zero, `keys` is never read and may be null.
#[export_name = "measureCXXSTDSet"]
pub unsafe extern "C" fn measure_std_set(
    keys: *const Key,
    count: usize,
) -> ElapsedTimes {
    // SAFETY: same contract as ours.
    measure(unsafe { key_slice(keys, count) })
}

/// # Safety
///
/// See [`measure_std_set`].
unsafe fn key_slice<'a>(keys: *const Key, count: usize) -> &'a [Key] {
    if count == 0 {
        return &[];
    }
    debug_assert!(!keys.is_null(), "null key buffer");
    // SAFETY: upheld by the caller.
    unsafe { slice::from_raw_parts(keys, count) }
}
