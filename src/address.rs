//! Address resolution for line and character positions
//!
//! Indices are signed and may be out of range. A negative index `k`
//! resolves to `total + k` and is clamped at zero, so resolution never fails.

use std::ops::Range;

/// Resolve an insertion point in `[0, total]`
pub fn insertion_point(index: i64, total: usize) -> usize {
    let total_i = i64::try_from(total).unwrap_or(i64::MAX);
    let position = if index >= 0 {
        index.min(total_i)
    } else {
        total_i.saturating_add(index).max(0)
    };
    // Position is within [0, total] so the conversion cannot fail.
    usize::try_from(position).unwrap_or(total)
}

/// Resolve a half-open range `[start, start + count)` clamped to `[0, total]`
///
/// A negative count is treated as zero.
pub fn range(start: i64, count: i64, total: usize) -> Range<usize> {
    let start = insertion_point(start, total);
    let count = usize::try_from(count.max(0)).unwrap_or(usize::MAX);
    let end = start.saturating_add(count).min(total);
    start..end
}
