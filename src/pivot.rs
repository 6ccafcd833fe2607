use ndarray::ArrayView1;

/// Arithmetic mean over a handful of sampled elements.
///
/// Quicksort estimates its pivot as the mean of up to three samples drawn from the range being
/// partitioned. The estimate is a *value*, not an index, and need not equal any element of the
/// range.
///
/// Integer implementations widen before summing, so the mean of samples near the type's extremes
/// does not overflow, and divide with truncation toward zero. Float implementations divide and
/// clamp the result to no less than the smallest sample, as the division can round just below it
/// (e.g., for three equal samples). Either way, the estimate is never less than every sample,
/// which partitioning relies on to keep its split interior.
pub trait SampleMean {
	/// Mean of two samples.
	fn mean2(a: &Self, b: &Self) -> Self;
	/// Mean of three samples.
	fn mean3(a: &Self, b: &Self, c: &Self) -> Self;
}

macro_rules! impl_sample_mean_int {
	($($t:ty => $wide:ty),* $(,)?) => {
		$(impl SampleMean for $t {
			#[inline]
			fn mean2(a: &Self, b: &Self) -> Self {
				((*a as $wide + *b as $wide) / 2) as $t
			}
			#[inline]
			fn mean3(a: &Self, b: &Self, c: &Self) -> Self {
				((*a as $wide + *b as $wide + *c as $wide) / 3) as $t
			}
		})*
	};
}

impl_sample_mean_int! {
	i8 => i16, i16 => i32, i32 => i64, i64 => i128, isize => i128,
	u8 => u16, u16 => u32, u32 => u64, u64 => u128, usize => u128,
}

macro_rules! impl_sample_mean_float {
	($($t:ty),* $(,)?) => {
		$(impl SampleMean for $t {
			#[inline]
			fn mean2(a: &Self, b: &Self) -> Self {
				((a + b) / 2.0).max(a.min(*b))
			}
			#[inline]
			fn mean3(a: &Self, b: &Self, c: &Self) -> Self {
				((a + b + c) / 3.0).max(a.min(*b).min(*c))
			}
		})*
	};
}

impl_sample_mean_float!(f32, f64);

/// Estimates a pivot for partitioning non-empty `v`.
///
/// Samples the first, middle and last elements and averages them. Ranges of exactly two elements
/// average the first and last; a range of one yields its sole element.
pub fn estimate_pivot<T>(v: ArrayView1<'_, T>) -> T
where
	T: SampleMean + Clone,
{
	let len = v.len();
	debug_assert!(len > 0);

	if len > 2 {
		T::mean3(&v[0], &v[len / 2], &v[len - 1])
	} else if len == 2 {
		T::mean2(&v[0], &v[1])
	} else {
		v[0].clone()
	}
}
