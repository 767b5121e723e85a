//! Batch data model.

/// One ordered sequence of integers to be sorted.
pub type SubArray = Vec<i64>;

/// The full set of sub-arrays submitted in one request.
pub type Batch = Vec<SubArray>;

/// Sorted sub-arrays produced by an executor.
///
/// Whether `result[i]` corresponds to `batch[i]` depends on the executor:
/// the sequential executor always preserves input order, the concurrent one
/// only under [`ResultOrder::Input`](crate::options::ResultOrder::Input).
pub type ResultSet = Vec<SubArray>;

/// Check that every sub-array of `results` is in non-decreasing order.
#[must_use]
pub fn is_sorted_set(results: &[SubArray]) -> bool {
    results
        .iter()
        .all(|values| values.windows(2).all(|pair| pair[0] <= pair[1]))
}

/// Check that `results` holds the same sorted sub-arrays as `expected`,
/// ignoring the order in which the sub-arrays appear.
#[must_use]
pub fn same_sub_arrays(results: &[SubArray], expected: &[SubArray]) -> bool {
    if results.len() != expected.len() {
        return false;
    }
    let mut left: Vec<&SubArray> = results.iter().collect();
    let mut right: Vec<&SubArray> = expected.iter().collect();
    left.sort();
    right.sort();
    left == right
}
