#![cfg(feature = "alloc")]

use ndarray::ArrayViewMut1;

/// Sorts `v` using iterative bottom-up merge sort, *O*(*n* \* log(*n*)) worst-case.
///
/// Allocates one auxiliary buffer the length of `v`. Each pass merges adjacent runs of the
/// current group size into the buffer, then the roles of `v` and the buffer swap for the next
/// pass with twice the group size. The destination is fully overwritten before a pass reads it
/// back, and a final copy restores the result into `v` when an odd number of passes ran.
///
/// Ties take the left run first, so each merge is stable.
pub fn merge_sort<T, F>(mut v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	T: Clone,
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len < 2 {
		return;
	}

	// Scratch storage; the initial contents are never read.
	let mut buf = v.to_vec();
	// Whether the authoritative data currently lives in `buf` instead of `v`.
	let mut in_buf = false;

	let mut group = 1;
	while group < len {
		if in_buf {
			merge_pass(len, group, |i| buf[i].clone(), |i, x| v[i] = x, &mut is_less);
		} else {
			merge_pass(len, group, |i| v[i].clone(), |i, x| buf[i] = x, &mut is_less);
		}
		in_buf = !in_buf;
		group *= 2;
	}

	if in_buf {
		for (slot, sorted) in v.iter_mut().zip(&buf) {
			*slot = sorted.clone();
		}
	}
}

/// Runs one merge pass from the source to the destination storage.
///
/// Walks the sequence in strides of `2 * group`, merging the left run `[idx, idx + group)` with
/// the right run `[idx + group, idx + 2 * group)` truncated to `len`. An unpaired leftover run
/// shorter than `group` is copied through unchanged so the next pass picks it up.
fn merge_pass<T, F, R, W>(len: usize, group: usize, mut read: R, mut write: W, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
	R: FnMut(usize) -> T,
	W: FnMut(usize, T),
{
	let mut idx = 0;
	while idx + group < len {
		let left_end = idx + group;
		let right_end = len.min(idx + 2 * group);

		let mut left = idx;
		let mut right = left_end;
		let mut out = idx;
		while left < left_end && right < right_end {
			let a = read(left);
			let b = read(right);
			if is_less(&b, &a) {
				write(out, b);
				right += 1;
			} else {
				write(out, a);
				left += 1;
			}
			out += 1;
		}
		while left < left_end {
			write(out, read(left));
			left += 1;
			out += 1;
		}
		while right < right_end {
			write(out, read(right));
			right += 1;
			out += 1;
		}

		idx += 2 * group;
	}

	// Unpaired tail, if any.
	while idx < len {
		write(idx, read(idx));
		idx += 1;
	}
}
