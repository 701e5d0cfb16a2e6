/* src/version.rs */

use crate::Error;

/// Accepted spellings for each `(major, minor)` protocol version.
const PROTOCOL_NAMES: &[((u8, u8), &[&str])] = &[
	((0, 2), &["SSLv2", "SSL2"]),
	((3, 0), &["SSLv3", "SSL3"]),
	((3, 1), &["TLSv1.0", "TLS1.0"]),
	((3, 2), &["TLSv1.1", "TLS1.1"]),
	((3, 3), &["TLSv1.2", "TLS1.2"]),
	((3, 4), &["TLSv1.3", "TLS1.3"]),
];

/// Map a protocol name such as `TLSv1.2` or `tls1.2` to its version tuple.
///
/// Matching ignores ASCII case and accepts the name with or without the
/// `v`.
///
/// # Errors
///
/// Returns [`Error::UnknownProtocol`] for names not in the table.
///
/// ```
/// use tlsfuzz_helpers::protocol_name_to_tuple;
///
/// assert_eq!(protocol_name_to_tuple("TLSv1.2").unwrap(), (3, 3));
/// assert_eq!(protocol_name_to_tuple("ssl2").unwrap(), (0, 2));
/// assert!(protocol_name_to_tuple("SSL3.1").is_err());
/// ```
pub fn protocol_name_to_tuple(name: &str) -> Result<(u8, u8), Error> {
	PROTOCOL_NAMES
		.iter()
		.find(|(_, names)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))
		.map(|&(version, _)| version)
		.ok_or_else(|| Error::UnknownProtocol(name.to_owned()))
}

/// Canonical name of a protocol version, e.g. `TLSv1.3` for `(3, 4)`.
#[must_use]
pub fn protocol_tuple_to_name(version: (u8, u8)) -> Option<&'static str> {
	PROTOCOL_NAMES
		.iter()
		.find(|(v, _)| *v == version)
		.and_then(|(_, names)| names.first().copied())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_spelling() {
		let cases = [
			("SSLv2", (0, 2)),
			("SSL2", (0, 2)),
			("SSLv3", (3, 0)),
			("SSL3", (3, 0)),
			("TLSv1.0", (3, 1)),
			("TLS1.0", (3, 1)),
			("TLSv1.1", (3, 2)),
			("TLS1.1", (3, 2)),
			("TLSv1.2", (3, 3)),
			("TLS1.2", (3, 3)),
			("TLSv1.3", (3, 4)),
			("TLS1.3", (3, 4)),
		];
		for (name, version) in cases {
			assert_eq!(protocol_name_to_tuple(name).unwrap(), version, "{name}");
		}
	}

	#[test]
	fn case_insensitive() {
		assert_eq!(protocol_name_to_tuple("tlsv1.3").unwrap(), (3, 4));
		assert_eq!(protocol_name_to_tuple("Tls1.1").unwrap(), (3, 2));
	}

	#[test]
	fn unknown() {
		assert_eq!(
			protocol_name_to_tuple("SSL3.1").unwrap_err(),
			Error::UnknownProtocol("SSL3.1".into())
		);
		assert!(protocol_name_to_tuple("TLS1").is_err());
		assert!(protocol_name_to_tuple("").is_err());
	}

	#[test]
	fn reverse() {
		assert_eq!(protocol_tuple_to_name((3, 4)), Some("TLSv1.3"));
		assert_eq!(protocol_tuple_to_name((0, 2)), Some("SSLv2"));
		assert_eq!(protocol_tuple_to_name((3, 5)), None);
	}
}
