use crate::{
	partition::partition,
	pivot::{SampleMean, estimate_pivot},
};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using quicksort with a sampled-mean pivot estimate, *O*(*n* \* log(*n*)) on average.
///
/// The pivot is estimated as the mean of up to three samples rather than selected from the range,
/// so the partition places ties at the estimate into the left range and never pins the pivot
/// element itself.
pub fn quick_sort<T, F>(v: ArrayViewMut1<'_, T>, mut is_less: F)
where
	T: SampleMean + Clone,
	F: FnMut(&T, &T) -> bool,
{
	recurse(v, &mut is_less);
}

/// Sorts `v` recursively.
///
/// Recurses into the shorter range and loops on the longer one, keeping the call depth in
/// *O*(log *n*) even for lopsided splits.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	T: SampleMean + Clone,
	F: FnMut(&T, &T) -> bool,
{
	loop {
		if v.len() <= 1 {
			return;
		}

		let pivot = estimate_pivot(v.view());
		let split = partition(v.view_mut(), &pivot, is_less);

		let (left, right) = v.split_at(Axis(0), split);
		if left.len() < right.len() {
			maybe_grow(|| recurse(left, &mut *is_less));
			v = right;
		} else {
			maybe_grow(|| recurse(right, &mut *is_less));
			v = left;
		}
	}
}

/// Grows the stack when the remaining red zone runs low.
#[cfg(feature = "stacker")]
#[inline]
fn maybe_grow<R>(callback: impl FnOnce() -> R) -> R {
	// 64 KiB red zone, 1 MiB growth.
	stacker::maybe_grow(64 * 1024, 1024 * 1024, callback)
}

#[cfg(not(feature = "stacker"))]
#[inline]
fn maybe_grow<R>(callback: impl FnOnce() -> R) -> R {
	callback()
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::quick_sort;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;
	use rand::prelude::*;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_signed(xs: Vec<i32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, sorted);
	}

	#[test]
	fn small() {
		let mut array = arr1(&[5, 3, 8, 1, 9, 2]);
		quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, arr1(&[1, 2, 3, 5, 8, 9]));
	}

	#[test]
	fn empty_and_singleton() {
		let empty: [i32; 0] = [];
		let mut array = arr1(&empty);
		quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array.len(), 0);
		let mut array = arr1(&[42]);
		quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, arr1(&[42]));
	}

	#[test]
	fn all_equal_terminates() {
		let mut array = arr1(&[5, 5, 5, 5, 5]);
		quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, arr1(&[5, 5, 5, 5, 5]));
	}

	#[test]
	fn all_equal_floats_terminate() {
		// A value whose unclamped three-sample mean rounds below the value itself, which used to
		// keep the partition from shrinking the range.
		let x = 718.941_828_362_269_7_f64;
		let mut array = arr1(&[x; 5]);
		quick_sort(array.view_mut(), f64::lt);
		assert_eq!(array, arr1(&[x; 5]));
	}

	#[test]
	fn already_sorted_is_unchanged() {
		let mut array = Array1::from_iter(0..1000);
		quick_sort(array.view_mut(), i32::lt);
		assert_eq!(array, Array1::from_iter(0..1000));
	}

	#[test]
	fn floats() {
		let mut rng = rand::rng();
		let xs = (0..10_000)
			.map(|_| rng.random_range(-1.0e3..1.0e3))
			.collect::<Vec<f64>>();
		let mut sorted = xs.clone();
		sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), f64::lt);
		assert_eq!(array, Array1::from_vec(sorted));
	}

	#[test]
	fn large_random_matches_standard_sort() {
		let mut rng = rand::rng();
		let xs = (0..100_000)
			.map(|_| rng.random_range(0..1_000_000))
			.collect::<Vec<u32>>();
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), u32::lt);
		assert_eq!(array, Array1::from_vec(sorted));
	}
}
