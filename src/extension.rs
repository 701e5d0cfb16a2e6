/* src/extension.rs */

use crate::Error;
use crate::key_share::ClientKeyShareExtension;
use crate::psk::PreSharedKeyExtension;
use crate::resolve::resolve_u16;
use crate::state::SessionState;
use crate::tables::{EXT_KEY_SHARE, EXT_PRE_SHARED_KEY, EXT_SIGNATURE_ALGORITHMS, EXTENSION_TYPES};
use crate::writer::Writer;

/// Marker for an extension that is present but has an empty body.
///
/// Carries no data, so every value is the same value.
///
/// ```
/// use tlsfuzz_helpers::AutoEmptyExtension;
///
/// assert_eq!(AutoEmptyExtension::new(), AutoEmptyExtension::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutoEmptyExtension;

impl AutoEmptyExtension {
	/// The empty-body marker.
	#[must_use]
	pub const fn new() -> Self {
		Self
	}
}

/// Canonical [`AutoEmptyExtension`] value.
pub const AUTO_EMPTY_EXTENSION: AutoEmptyExtension = AutoEmptyExtension::new();

/// Payload of a ClientHello extension built by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Extension {
	/// `key_share` (type `0x0033`) as sent by a client.
	KeyShare(ClientKeyShareExtension),
	/// `pre_shared_key` (type `0x0029`) with binder placeholders.
	PreSharedKey(PreSharedKeyExtension),
	/// `signature_algorithms` (type `0x000d`) as `(hash, signature)` pairs.
	SignatureAlgorithms(Vec<(u8, u8)>),
	/// Extension present on the wire with an empty body.
	Empty(AutoEmptyExtension),
	/// Pre-encoded body, sent verbatim.
	Raw(Vec<u8>),
}

impl Extension {
	/// Build a `signature_algorithms` payload from a list of names.
	///
	/// # Errors
	///
	/// Fails like [`sig_algs_to_ids`](crate::sig_algs_to_ids).
	pub fn signature_algorithms(names: &str) -> Result<Self, Error> {
		crate::sig_algs_to_ids(names).map(Self::SignatureAlgorithms)
	}

	/// Extension type implied by the payload, if any.
	///
	/// [`Extension::Empty`] and [`Extension::Raw`] can stand in for any type.
	#[must_use]
	pub const fn extension_type(&self) -> Option<u16> {
		match self {
			Self::KeyShare(_) => Some(EXT_KEY_SHARE),
			Self::PreSharedKey(_) => Some(EXT_PRE_SHARED_KEY),
			Self::SignatureAlgorithms(_) => Some(EXT_SIGNATURE_ALGORITHMS),
			Self::Empty(_) | Self::Raw(_) => None,
		}
	}

	/// Encode the `extension_data` body.
	///
	/// # Errors
	///
	/// Returns [`Error::FieldTooLong`] when a length-prefixed field overflows.
	pub fn encode_body(&self) -> Result<Vec<u8>, Error> {
		match self {
			Self::KeyShare(ext) => ext.encode(),
			Self::PreSharedKey(ext) => ext.encode(),
			Self::SignatureAlgorithms(algs) => {
				let mut w = Writer::new();
				w.nested16("signature algorithms", |w| {
					for &(hash, sig) in algs {
						w.put_u8(hash);
						w.put_u8(sig);
					}
					Ok(())
				})?;
				Ok(w.into_inner())
			}
			Self::Empty(_) => Ok(Vec::new()),
			Self::Raw(data) => Ok(data.clone()),
		}
	}
}

impl From<AutoEmptyExtension> for Extension {
	fn from(marker: AutoEmptyExtension) -> Self {
		Self::Empty(marker)
	}
}

impl From<ClientKeyShareExtension> for Extension {
	fn from(ext: ClientKeyShareExtension) -> Self {
		Self::KeyShare(ext)
	}
}

impl From<PreSharedKeyExtension> for Extension {
	fn from(ext: PreSharedKeyExtension) -> Self {
		Self::PreSharedKey(ext)
	}
}

/// Encode a full extension: type, length and body.
///
/// # Errors
///
/// Returns [`Error::FieldTooLong`] when the body or one of its fields is
/// too long for its length prefix.
pub fn encode_extension(ext_type: u16, ext: &Extension) -> Result<Vec<u8>, Error> {
	let body = ext.encode_body()?;
	let mut w = Writer::new();
	w.put_u16(ext_type);
	w.put_vec16(&body, "extension data")?;
	Ok(w.into_inner())
}

/// Resolve an extension type name (or number) to its identifier.
///
/// # Errors
///
/// Returns [`Error::UnknownSymbol`] for unknown names,
/// [`Error::MissingValue`] for `none` and [`Error::OutOfRange`] for numbers
/// above `0xffff`.
pub fn ext_name_to_id(name: &str) -> Result<u16, Error> {
	resolve_u16(name, &EXTENSION_TYPES, "extension type")
}

/// Builds an extension payload from the connection state at send time.
pub trait ExtensionGenerator {
	/// Produce the extension payload.
	///
	/// # Errors
	///
	/// Implementations fail when the state lacks something they need or
	/// when key material cannot be generated.
	fn generate(&self, state: &dyn SessionState) -> Result<Extension, Error>;
}

impl ExtensionGenerator for AutoEmptyExtension {
	fn generate(&self, _state: &dyn SessionState) -> Result<Extension, Error> {
		Ok(Extension::Empty(*self))
	}
}

impl ExtensionGenerator for Extension {
	fn generate(&self, _state: &dyn SessionState) -> Result<Extension, Error> {
		Ok(self.clone())
	}
}
