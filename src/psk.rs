/* src/psk.rs */

//! `pre_shared_key` extension with binder placeholders.
//!
//! Binders are zero-filled and sized after the PSK's hash. They only fix the
//! extension length so that a later stage can hash the truncated ClientHello
//! and write the real HMAC values in place.

use crate::Error;
use crate::extension::{Extension, ExtensionGenerator};
use crate::state::SessionState;
use crate::tables::{HashDescriptor, SHA256, SHA384, cipher_suite_hash};
use crate::writer::Writer;

/// Hash used when a PSK configuration does not name one.
pub const DEFAULT_PSK_HASH: &str = "sha256";

/// Hashes a TLS 1.3 binder can be computed with.
static PSK_HASHES: [&HashDescriptor; 2] = [&SHA256, &SHA384];

/// Look up a hash usable for a PSK binder.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPskHash`] for any name other than `sha256`
/// or `sha384`.
pub fn psk_hash(name: &str) -> Result<&'static HashDescriptor, Error> {
	PSK_HASHES
		.iter()
		.copied()
		.find(|h| h.name == name)
		.ok_or_else(|| Error::UnsupportedPskHash(name.to_owned()))
}

/// An externally provisioned PSK as written in a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PskConfig {
	/// Identity sent on the wire.
	pub identity: Vec<u8>,
	/// Key material, used by the stage that computes binders.
	pub secret: Vec<u8>,
	/// Binder hash name; [`DEFAULT_PSK_HASH`] when absent.
	pub hash: Option<String>,
}

impl PskConfig {
	/// Configuration using the default hash.
	#[must_use]
	pub fn new(identity: &[u8], secret: &[u8]) -> Self {
		Self {
			identity: identity.to_vec(),
			secret: secret.to_vec(),
			hash: None,
		}
	}

	/// Set the binder hash name.
	#[must_use]
	pub fn with_hash(mut self, hash: &str) -> Self {
		self.hash = Some(hash.to_owned());
		self
	}

	/// Build a configuration from `identity, secret[, hash]` fields.
	///
	/// # Errors
	///
	/// Returns [`Error::PskArity`] unless there are 2 or 3 fields, and
	/// [`Error::UnsupportedPskHash`] when the hash field is not UTF-8.
	///
	/// ```
	/// use tlsfuzz_helpers::PskConfig;
	///
	/// let cfg = PskConfig::from_fields(&[&b"test"[..], b"secret", b"sha384"]).unwrap();
	/// assert_eq!(cfg.hash_name(), "sha384");
	/// assert!(PskConfig::from_fields(&[&b"test"[..]]).is_err());
	/// ```
	pub fn from_fields(fields: &[&[u8]]) -> Result<Self, Error> {
		match *fields {
			[identity, secret] => Ok(Self::new(identity, secret)),
			[identity, secret, hash] => {
				let hash = core::str::from_utf8(hash)
					.map_err(|_| Error::UnsupportedPskHash(String::from_utf8_lossy(hash).into_owned()))?;
				Ok(Self::new(identity, secret).with_hash(hash))
			}
			_ => Err(Error::PskArity(fields.len())),
		}
	}

	/// Binder hash name, with the default applied.
	#[must_use]
	pub fn hash_name(&self) -> &str {
		self.hash.as_deref().unwrap_or(DEFAULT_PSK_HASH)
	}

	fn validate(&self) -> Result<&'static HashDescriptor, Error> {
		if self.identity.is_empty() {
			return Err(Error::EmptyPskIdentity);
		}
		psk_hash(self.hash_name())
	}
}

/// One identity of a `pre_shared_key` extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PskIdentity {
	/// Opaque identity.
	pub identity: Vec<u8>,
	/// Ticket age plus `ticket_age_add`; zero for external PSKs.
	pub obfuscated_ticket_age: u32,
}

impl PskIdentity {
	/// Create an identity.
	#[must_use]
	pub fn new(identity: &[u8], obfuscated_ticket_age: u32) -> Self {
		Self {
			identity: identity.to_vec(),
			obfuscated_ticket_age,
		}
	}
}

/// Client `pre_shared_key` extension body.
///
/// The builders in this module keep `identities` and `binders` the same
/// length and co-indexed. Fields stay public so tests can break that on
/// purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreSharedKeyExtension {
	/// Offered identities.
	pub identities: Vec<PskIdentity>,
	/// Binder for each identity.
	pub binders: Vec<Vec<u8>>,
}

impl PreSharedKeyExtension {
	fn push(&mut self, identity: PskIdentity, hash: &HashDescriptor) {
		self.identities.push(identity);
		self.binders.push(vec![0u8; hash.digest_len]);
	}

	/// Encoded length of the binders list, length prefix included.
	///
	/// This is the number of bytes to cut from the end of an encoded
	/// ClientHello to get the part the binders are computed over.
	#[must_use]
	pub fn binders_len(&self) -> usize {
		2 + self.binders.iter().map(|b| 1 + b.len()).sum::<usize>()
	}

	/// Encode the `OfferedPsks` body.
	///
	/// # Errors
	///
	/// Returns [`Error::FieldTooLong`] when an identity, binder or list
	/// overflows its length prefix.
	pub fn encode(&self) -> Result<Vec<u8>, Error> {
		let mut w = Writer::new();
		w.nested16("PSK identities", |w| {
			self.identities.iter().try_for_each(|id| {
				w.put_vec16(&id.identity, "PSK identity")?;
				w.put_u32(id.obfuscated_ticket_age);
				Ok(())
			})
		})?;
		w.nested16("PSK binders", |w| {
			self
				.binders
				.iter()
				.try_for_each(|binder| w.put_vec8(binder, "PSK binder"))
		})?;
		Ok(w.into_inner())
	}
}

/// Build a `pre_shared_key` extension for external PSKs.
///
/// Identities are sent in input order with an obfuscated age of zero; each
/// binder is a zero-filled placeholder as long as its hash's digest.
///
/// # Errors
///
/// Returns [`Error::EmptyPskIdentity`] or [`Error::UnsupportedPskHash`] for
/// the first bad configuration. Nothing is built in that case.
///
/// ```
/// use tlsfuzz_helpers::{PskConfig, psk_ext_gen};
///
/// let ext = psk_ext_gen(&[
///     PskConfig::new(b"test", b"secret").with_hash("sha256"),
///     PskConfig::new(b"example", b"secret").with_hash("sha384"),
/// ])
/// .unwrap();
/// assert_eq!(ext.binders, vec![vec![0u8; 32], vec![0u8; 48]]);
/// ```
pub fn psk_ext_gen(configs: &[PskConfig]) -> Result<PreSharedKeyExtension, Error> {
	let hashes = configs
		.iter()
		.map(PskConfig::validate)
		.collect::<Result<Vec<_>, Error>>()?;
	let mut ext = PreSharedKeyExtension::default();
	for (cfg, hash) in configs.iter().zip(hashes) {
		ext.push(PskIdentity::new(&cfg.identity, 0), hash);
	}
	tracing::debug!(identities = ext.identities.len(), "built pre_shared_key extension");
	Ok(ext)
}

/// Generator for a `pre_shared_key` extension that resumes the latest
/// session ticket.
///
/// Created by [`psk_session_ext_gen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PskSessionExtGen {
	external: PreSharedKeyExtension,
}

impl PskSessionExtGen {
	/// Build the extension from the connection state.
	///
	/// The ticket identity comes first, its binder sized by the hash of the
	/// negotiated cipher suite; external PSKs follow in configuration order.
	///
	/// # Errors
	///
	/// Returns [`Error::NoSessionTicket`] when the state holds no ticket.
	pub fn build(&self, state: &dyn SessionState) -> Result<PreSharedKeyExtension, Error> {
		let ticket = state.session_tickets().last().ok_or(Error::NoSessionTicket)?;
		let hash = cipher_suite_hash(state.cipher_suite());
		let age = ticket.obfuscated_age(state.time_ms());

		let mut ext = PreSharedKeyExtension::default();
		ext.push(PskIdentity::new(&ticket.ticket, age), hash);
		ext.identities.extend_from_slice(&self.external.identities);
		ext.binders.extend_from_slice(&self.external.binders);
		tracing::debug!(
			cipher = state.cipher_suite(),
			binder_len = hash.digest_len,
			identities = ext.identities.len(),
			"built resumption pre_shared_key extension"
		);
		Ok(ext)
	}
}

impl ExtensionGenerator for PskSessionExtGen {
	fn generate(&self, state: &dyn SessionState) -> Result<Extension, Error> {
		self.build(state).map(Extension::PreSharedKey)
	}
}

/// Create a generator for a ticket-based `pre_shared_key` extension,
/// optionally followed by external PSKs.
///
/// External configurations are checked now; the ticket is read when the
/// generator runs.
///
/// # Errors
///
/// Fails like [`psk_ext_gen`] on a bad external configuration.
pub fn psk_session_ext_gen(configs: Option<&[PskConfig]>) -> Result<PskSessionExtGen, Error> {
	let external = psk_ext_gen(configs.unwrap_or_default())?;
	Ok(PskSessionExtGen { external })
}
