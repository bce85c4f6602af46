use crate::units::Px;

/// Count how many leading `items` measure within `budget`.
///
/// `measure` must be non-decreasing over `items` (for text, the width of a
/// prefix never exceeds the width of a longer prefix). Under that assumption
/// the result is the index one past the last item that fits, found with a
/// binary search in `O(log n)` calls to `measure`. A return value of `0`
/// means nothing fits; `items.len()` means everything does.
///
/// When `items` are prefix lengths `0..n`, the return value is therefore the
/// largest prefix length `k` whose shorter neighbour `k - 1` fits, which is
/// what callers then confirm by measuring `k` itself.
pub fn rightmost_fit<T, F>(items: &[T], budget: Px, mut measure: F) -> usize
where
    F: FnMut(&T) -> Px,
{
    items.partition_point(|item| measure(item) <= budget)
}
