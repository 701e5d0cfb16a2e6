/* src/resolve.rs */

use crate::Error;

/// Static name to wire-value table used for name resolution.
#[derive(Debug, Clone, Copy)]
pub struct SymbolTable {
	name: &'static str,
	entries: &'static [(&'static str, u16)],
}

impl SymbolTable {
	/// Create a table. `name` is used in error messages.
	#[must_use]
	pub const fn new(name: &'static str, entries: &'static [(&'static str, u16)]) -> Self {
		Self { name, entries }
	}

	/// Table name, e.g. `"group"`.
	#[must_use]
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Look up a symbol by exact name.
	#[must_use]
	pub fn get(&self, symbol: &str) -> Option<u16> {
		self
			.entries
			.iter()
			.find_map(|&(n, v)| (n == symbol).then_some(v))
	}

	/// Reverse lookup. Returns the first name registered for `value`.
	#[must_use]
	pub fn name_of(&self, value: u16) -> Option<&'static str> {
		self
			.entries
			.iter()
			.find_map(|&(n, v)| (v == value).then_some(n))
	}

	/// Iterate over all `(name, value)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, u16)> + '_ {
		self.entries.iter().copied()
	}
}

/// Resolve a human-written token into a protocol value.
///
/// A base-10 integer is returned as is, whatever the table. The sentinel
/// `none` (any ASCII case) resolves to `None`. Anything else must be a
/// symbol in `table`.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] when the token is neither numeric nor
/// `none` and `table` is absent or does not contain it.
///
/// ```
/// use tlsfuzz_helpers::{resolve_name, tables::GROUP_NAMES};
///
/// assert_eq!(resolve_name("12", None).unwrap(), Some(12));
/// assert_eq!(resolve_name("None", Some(&GROUP_NAMES)).unwrap(), None);
/// assert_eq!(resolve_name("secp384r1", Some(&GROUP_NAMES)).unwrap(), Some(24));
/// ```
pub fn resolve_name(token: &str, table: Option<&SymbolTable>) -> Result<Option<u64>, Error> {
	if let Ok(value) = token.parse::<u64>() {
		return Ok(Some(value));
	}
	if token.eq_ignore_ascii_case("none") {
		return Ok(None);
	}
	let table_name = table.map_or("<no table>", SymbolTable::name);
	let value = table
		.and_then(|t| t.get(token))
		.ok_or_else(|| Error::UnknownSymbol {
			table: table_name,
			name: token.to_owned(),
		})?;
	tracing::trace!(table = table_name, token, value, "resolved name");
	Ok(Some(u64::from(value)))
}

/// Resolve a token that must produce a concrete value fitting in a `u16`.
pub(crate) fn resolve_u16(
	token: &str,
	table: &SymbolTable,
	field: &'static str,
) -> Result<u16, Error> {
	let value = resolve_name(token, Some(table))?.ok_or(Error::MissingValue { field })?;
	u16::try_from(value).map_err(|_| Error::OutOfRange { field, value })
}

/// Resolve a token that must produce a concrete value fitting in a `u8`.
pub(crate) fn resolve_u8(
	token: &str,
	table: &SymbolTable,
	field: &'static str,
) -> Result<u8, Error> {
	let value = resolve_name(token, Some(table))?.ok_or(Error::MissingValue { field })?;
	u8::try_from(value).map_err(|_| Error::OutOfRange { field, value })
}
