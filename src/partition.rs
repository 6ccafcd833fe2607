use core::cmp::Ordering::{self, Greater};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Partitions `v` around the `pivot` estimate and returns the split point.
///
/// On return, every element before the split compares less than or equal to `pivot` and every
/// element after it compares greater than or equal; the element at the split itself is left for
/// the recursion on the right range to place. Since `pivot` is an estimate, it need not occur in
/// `v` at all, but it must not compare less than every element, as [`SampleMean`] guarantees for
/// a mean over sampled elements. The split is then always interior, `0 < split < v.len()`, so
/// both ranges shrink.
///
/// [`SampleMean`]: crate::SampleMean
///
/// The two cursors scan toward each other only while they are more than one apart, and every
/// iteration moves exactly one cursor after the swap check. Both rules together are the
/// termination guarantee on duplicate-heavy inputs and must not be relaxed.
pub fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, pivot: &T, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	debug_assert!(v.len() >= 2);

	let mut left = 0;
	let mut right = v.len() - 1;

	loop {
		// Skip elements already on their side of the estimate.
		while is_less(&v[left], pivot) && right - left > 1 {
			left += 1;
		}
		while is_less(pivot, &v[right]) && right - left > 1 {
			right -= 1;
		}

		if is_less(&v[right], &v[left]) {
			v.swap(left, right);
		}

		// Ties at the estimate belong to the left range.
		if !is_less(pivot, &v[left]) {
			left += 1;
		} else {
			right -= 1;
		}

		if left == right {
			break;
		}
	}

	left
}

/// Checks that adjacent elements are non-decreasing under `compare`.
///
/// Incomparable pairs (`None`) count as unsorted.
pub fn is_sorted<T, F>(v: ArrayView1<'_, T>, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	let mut iter = v.iter();
	if let Some(mut prev) = iter.next() {
		for next in iter {
			if !matches!(compare(prev, next), Some(ord) if ord != Greater) {
				return false;
			}
			prev = next;
		}
	}
	true
}
