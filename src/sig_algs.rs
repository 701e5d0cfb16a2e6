/* src/sig_algs.rs */

use crate::Error;
use crate::resolve::resolve_u8;
use crate::tables::{HASH_NAMES, SIGNATURE_NAMES, SIGNATURE_SCHEMES, scheme_to_pair};

/// Separator between the hash and signature halves of a legacy token.
const LEGACY_SEPARATOR: char = '+';

/// Parse a whitespace-separated list of signature algorithms into
/// `(hash, signature)` pairs.
///
/// Each token is either a legacy `hash+signature` pair, where each half is a
/// name or a decimal number, or a TLS 1.3 signature scheme name. Order is
/// preserved and an empty string gives an empty list.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] for names missing from their table,
/// [`Error::MissingValue`] when a half is `none`, and
/// [`Error::OutOfRange`] when a numeric half does not fit in a byte.
///
/// ```
/// use tlsfuzz_helpers::sig_algs_to_ids;
///
/// let ids = sig_algs_to_ids("rsa_pss_pss_sha256 sha512+0").unwrap();
/// assert_eq!(ids, vec![(8, 9), (6, 0)]);
/// ```
pub fn sig_algs_to_ids(names: &str) -> Result<Vec<(u8, u8)>, Error> {
	names.split_whitespace().map(token_to_pair).collect()
}

fn token_to_pair(token: &str) -> Result<(u8, u8), Error> {
	if let Some((hash, sig)) = token.split_once(LEGACY_SEPARATOR) {
		let hash = resolve_u8(hash, &HASH_NAMES, "hash algorithm")?;
		let sig = resolve_u8(sig, &SIGNATURE_NAMES, "signature algorithm")?;
		return Ok((hash, sig));
	}
	SIGNATURE_SCHEMES
		.get(token)
		.map(scheme_to_pair)
		.ok_or_else(|| Error::UnknownSymbol {
			table: SIGNATURE_SCHEMES.name(),
			name: token.to_owned(),
		})
}

/// RSA schemes, PSS first.
pub const RSA_SIG_ALL: &[(u8, u8)] = &[
	(8, 4),
	(8, 5),
	(8, 6),
	(8, 9),
	(8, 10),
	(8, 11),
	(6, 1),
	(5, 1),
	(4, 1),
	(3, 1),
	(2, 1),
];

/// ECDSA schemes, strongest hash first.
pub const ECDSA_SIG_ALL: &[(u8, u8)] = &[(6, 3), (5, 3), (4, 3), (3, 3), (2, 3)];

/// EdDSA schemes.
pub const EDDSA_SIG_ALL: &[(u8, u8)] = &[(8, 7), (8, 8)];

/// Every scheme in [`RSA_SIG_ALL`], [`ECDSA_SIG_ALL`] and [`EDDSA_SIG_ALL`].
pub const SIG_ALL: &[(u8, u8)] = &[
	(8, 4),
	(8, 5),
	(8, 6),
	(8, 9),
	(8, 10),
	(8, 11),
	(6, 1),
	(5, 1),
	(4, 1),
	(3, 1),
	(2, 1),
	(6, 3),
	(5, 3),
	(4, 3),
	(3, 3),
	(2, 3),
	(8, 7),
	(8, 8),
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty() {
		assert!(sig_algs_to_ids("").unwrap().is_empty());
		assert!(sig_algs_to_ids("  \t ").unwrap().is_empty());
	}

	#[test]
	fn legacy_names() {
		assert_eq!(sig_algs_to_ids("sha256+rsa").unwrap(), vec![(4, 1)]);
	}

	#[test]
	fn legacy_numbers() {
		assert_eq!(sig_algs_to_ids("15+22").unwrap(), vec![(15, 22)]);
	}

	#[test]
	fn legacy_mixed() {
		assert_eq!(sig_algs_to_ids("15+rsa").unwrap(), vec![(15, 1)]);
	}

	#[test]
	fn scheme_name() {
		assert_eq!(sig_algs_to_ids("rsa_pss_pss_sha256").unwrap(), vec![(8, 9)]);
	}

	#[test]
	fn multiple_tokens_keep_order() {
		assert_eq!(
			sig_algs_to_ids("rsa_pss_pss_sha256 sha512+0").unwrap(),
			vec![(8, 9), (6, 0)]
		);
	}

	#[test]
	fn unknown_scheme() {
		let err = sig_algs_to_ids("rsa_pss_pss_sha1").unwrap_err();
		assert!(matches!(err, Error::UnknownSymbol { table: "signature scheme", .. }));
	}

	#[test]
	fn unknown_legacy_half() {
		let err = sig_algs_to_ids("sha3+rsa").unwrap_err();
		assert!(matches!(err, Error::UnknownSymbol { table: "hash", .. }));
	}

	#[test]
	fn none_half_rejected() {
		let err = sig_algs_to_ids("none+rsa").unwrap_err();
		assert_eq!(
			err,
			Error::MissingValue {
				field: "hash algorithm",
			}
		);
	}

	#[test]
	fn numeric_half_out_of_range() {
		let err = sig_algs_to_ids("256+1").unwrap_err();
		assert!(matches!(err, Error::OutOfRange { value: 256, .. }));
	}

	#[test]
	fn sig_all_is_concatenation() {
		let joined: Vec<_> = RSA_SIG_ALL
			.iter()
			.chain(ECDSA_SIG_ALL)
			.chain(EDDSA_SIG_ALL)
			.copied()
			.collect();
		assert_eq!(joined, SIG_ALL);
	}
}
