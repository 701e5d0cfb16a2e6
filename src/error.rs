/* src/error.rs */

/// Errors produced while translating test-case settings into TLS structures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// A name did not resolve in the symbol table it was looked up in.
	#[error("unknown {table} name: {name:?}")]
	UnknownSymbol {
		/// Name of the symbol table searched.
		table: &'static str,
		/// The token that failed to resolve.
		name: String,
	},

	/// A numeric token does not fit the wire field it is destined for.
	#[error("value {value} out of range for {field}")]
	OutOfRange {
		/// Name of the wire field.
		field: &'static str,
		/// Value that was supplied.
		value: u64,
	},

	/// The `none` sentinel was used where a concrete value is required.
	#[error("{field} may not be \"none\"")]
	MissingValue {
		/// Name of the field that needs a value.
		field: &'static str,
	},

	/// A PSK configuration did not have 2 or 3 fields.
	#[error("PSK configuration needs 2 or 3 fields (identity, secret[, hash]), got {0}")]
	PskArity(usize),

	/// A PSK configuration had an empty identity.
	#[error("PSK identity must not be empty")]
	EmptyPskIdentity,

	/// A PSK configuration named a hash that cannot drive a TLS 1.3 binder.
	#[error("unsupported PSK hash: {0:?}")]
	UnsupportedPskHash(String),

	/// A group is known by name but has no key share shape.
	#[error("unsupported key share group: {0}")]
	UnsupportedGroup(u16),

	/// A ticket-derived PSK was requested but the connection holds no ticket.
	#[error("No New Session Ticket messages in connection state")]
	NoSessionTicket,

	/// Protocol version name is not recognised.
	#[error("unrecognised protocol name: {0:?}")]
	UnknownProtocol(String),

	/// A length-prefixed field is too long for its prefix.
	#[error("{field} too long: {len} bytes")]
	FieldTooLong {
		/// Name of the oversized field.
		field: &'static str,
		/// Length that was attempted.
		len: usize,
	},

	/// The random source failed to produce key material.
	#[error("random source failure")]
	RandomSource,
}
