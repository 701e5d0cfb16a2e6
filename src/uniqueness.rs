/* src/uniqueness.rs */

use std::collections::BTreeSet;
use std::fmt::Display;

/// Check named value lists for an expected size and for duplicates.
///
/// Lists are checked in iteration order and each produces at most one
/// message; a size mismatch hides any duplicates. Values are compared by
/// content. An empty result means every list is valid.
///
/// ```
/// use tlsfuzz_helpers::uniqueness_check;
///
/// let report = uniqueness_check([("ints", &[1, 2, 3, 1][..])], 4);
/// assert_eq!(report, ["Duplicated entries in 'ints'."]);
/// ```
#[must_use]
pub fn uniqueness_check<'a, K, T, I>(named_lists: I, expected: usize) -> Vec<String>
where
	I: IntoIterator<Item = (K, &'a [T])>,
	K: Display,
	T: Ord + 'a,
{
	let mut report = Vec::new();
	for (name, values) in named_lists {
		if values.len() != expected {
			report.push(format!(
				"Unexpected number of values in '{name}'. Expected: {expected}, got: {}.",
				values.len()
			));
		} else if has_duplicates(values) {
			report.push(format!("Duplicated entries in '{name}'."));
		}
	}
	if !report.is_empty() {
		tracing::debug!(violations = report.len(), "uniqueness check failed");
	}
	report
}

fn has_duplicates<T: Ord>(values: &[T]) -> bool {
	let mut seen = BTreeSet::new();
	!values.iter().all(|v| seen.insert(v))
}
