//! Two classic in-memory [sorting] algorithms for non-contiguous (sub)views into
//! *n*-dimensional [`ndarray`] arrays, written to be benchmarked against the standard-library
//! sorts by an external driver:
//!
//!   * a recursive in-place quicksort whose pivot is *estimated* as the arithmetic mean of up to
//!     three sampled elements rather than selected from the range;
//!   * an iterative bottom-up merge sort that doubles its group size every pass, alternating
//!     between the caller's storage and one auxiliary buffer.
//!
//! # Example
//!
//! ```
//! use ndarray_sorts::{ndarray::arr2, Sort1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, sorting is specifically implemented for non-contiguous
//! // mutable (sub)views.
//! column.quick_sort();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view.
//!
//! | Resource | Complexity | [`quick_sort`]       | [`merge_sort`]   |
//! |----------|------------|----------------------|------------------|
//! | Time     | Average    | *O*(*n* log *n*)     | *O*(*n* log *n*) |
//! | Time     | Worst      | *O*(*n*^2)           | *O*(*n* log *n*) |
//! | Space    | Worst      | *O*(log *n*)         | *O*(*n*)         |
//!
//! [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
//!
//! [`quick_sort`]: Sort1Ext::quick_sort
//! [`merge_sort`]: Sort1Ext::merge_sort
//!
//! # Features
//!
//!   * `alloc` for [`merge_sort`]. Enabled by `std`.
//!   * `std` for tests and dependencies requiring it. Enabled by `default`.
//!   * `stacker` for growing the stack under deep quicksort recursion. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod merge_sort;
mod partition;
mod pivot;
mod quick_sort;

#[cfg(feature = "alloc")]
use crate::merge_sort::merge_sort;
use crate::{partition::is_sorted, quick_sort::quick_sort};
use ndarray::{ArrayBase, Data, DataMut, Ix1};

pub use ndarray;
pub use pivot::SampleMean;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing the two [sorting] algorithms of this
/// crate and the sortedness check their external benchmark driver verifies results with.
///
/// [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array ascending, in place, but might not preserve the order of equal elements.
	///
	/// # Current Implementation
	///
	/// Recursive quicksort. The pivot is estimated as the arithmetic [mean](SampleMean) of the
	/// first, middle and last elements of the range being partitioned; ties at the estimate go
	/// to the left partition. Averaging two integer samples truncates toward zero, which affects
	/// pivot quality but not correctness.
	///
	/// The partition recursion descends into the shorter range and iterates on the longer one,
	/// so the stack depth stays in *O*(log *n*); with the `stacker` feature the stack
	/// additionally grows on demand. Time is *O*(*n* log *n*) on average and *O*(*n*^2)
	/// worst-case for adversarial orderings.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.quick_sort();
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	fn quick_sort(&mut self)
	where
		A: SampleMean + Clone + PartialOrd,
		S: DataMut;

	/// Sorts the array ascending, in place, allocating one auxiliary buffer the length of the
	/// array.
	///
	/// # Current Implementation
	///
	/// Iterative bottom-up merge sort, *O*(*n* log *n*) worst-case. Sorted groups double in size
	/// every pass and adjacent groups are merged into the auxiliary buffer, whose role swaps
	/// with the array between passes; the sorted result always ends up in the array regardless
	/// of the number of passes. Each merge prefers the left run on ties, although stability is
	/// not part of this crate's contract.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[4, 2, 7, 1, 3]);
	///
	/// v.merge_sort();
	/// assert!(v == arr1(&[1, 2, 3, 4, 7]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort(&mut self)
	where
		A: Clone + PartialOrd,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// That is, for each element `a` and its following element `b`, `a <= b` must hold. If the
	/// array yields exactly zero or one element, `true` is returned. Two consecutive
	/// incomparable elements (e.g., NaN) yield `false`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_sorts::{ndarray::arr1, Sort1Ext};
	///
	/// let empty: [i32; 0] = [];
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// assert!(arr1(&[0]).is_sorted());
	/// assert!(arr1(&empty).is_sorted());
	/// assert!(!arr1(&[0.0, 1.0, f32::NAN]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn quick_sort(&mut self)
	where
		A: SampleMean + Clone + PartialOrd,
		S: DataMut,
	{
		quick_sort(self.view_mut(), A::lt);
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort(&mut self)
	where
		A: Clone + PartialOrd,
		S: DataMut,
	{
		merge_sort(self.view_mut(), A::lt);
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		is_sorted(self.view(), |a, b| a.partial_cmp(b))
	}
}
