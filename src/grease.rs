/* src/grease.rs */

//! GREASE identifiers (RFC 8701).
//!
//! Key shares for a GREASE group are accepted by the key share builder and
//! carry a single byte of material, the size most clients send.

/// Key exchange length used for GREASE key shares.
pub(crate) const GREASE_KEY_SHARE_LEN: usize = 1;

/// Check whether a `u16` value is one of the sixteen GREASE values
/// `0x0A0A, 0x1A1A, ..., 0xFAFA`.
///
/// ```
/// assert!(tlsfuzz_helpers::is_grease(0x2A2A));
/// assert!(!tlsfuzz_helpers::is_grease(0x001d));
/// ```
#[must_use]
pub const fn is_grease(value: u16) -> bool {
	let [hi, lo] = value.to_be_bytes();
	hi == lo && lo & 0x0F == 0x0A
}

/// All GREASE values in ascending order.
pub fn grease_values() -> impl Iterator<Item = u16> {
	(0..16u16).map(|i| (i << 12) | (i << 4) | 0x0A0A)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn values_are_grease() {
		assert_eq!(grease_values().count(), 16);
		assert!(grease_values().all(is_grease));
		assert_eq!(grease_values().last(), Some(0xFAFA));
	}

	#[test]
	fn registered_groups_are_not_grease() {
		for (name, id) in crate::tables::GROUP_NAMES.iter() {
			assert!(!is_grease(id), "{name} collides with GREASE");
		}
	}

	#[test]
	fn unequal_bytes() {
		assert!(!is_grease(0x0A1A));
		assert!(!is_grease(0x3AFA));
		assert!(!is_grease(0x0B0B));
	}
}
