/* src/key_share.rs */

use rand::RngCore;

use crate::Error;
use crate::extension::{Extension, ExtensionGenerator};
use crate::grease::{GREASE_KEY_SHARE_LEN, is_grease};
use crate::resolve::resolve_u16;
use crate::state::SessionState;
use crate::tables::{GROUP_NAMES, GroupShape, group_descriptor};
use crate::writer::Writer;

/// Tag byte of an uncompressed elliptic curve point.
const UNCOMPRESSED_POINT: u8 = 0x04;

/// One entry of a `key_share` extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyShareEntry {
	/// Named group identifier.
	pub group: u16,
	/// Key exchange material.
	pub key_exchange: Vec<u8>,
}

impl KeyShareEntry {
	/// Create an entry with caller-chosen material.
	#[must_use]
	pub fn new(group: u16, key_exchange: &[u8]) -> Self {
		Self {
			group,
			key_exchange: key_exchange.to_vec(),
		}
	}

	fn write(&self, w: &mut Writer) -> Result<(), Error> {
		w.put_u16(self.group);
		w.put_vec16(&self.key_exchange, "key exchange")
	}
}

/// Client `key_share` extension body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientKeyShareExtension {
	/// Offered shares in send order. Duplicates are kept.
	pub client_shares: Vec<KeyShareEntry>,
}

impl ClientKeyShareExtension {
	/// Wrap a list of entries.
	#[must_use]
	pub fn new(client_shares: Vec<KeyShareEntry>) -> Self {
		Self { client_shares }
	}

	/// Encode the `KeyShareClientHello` body.
	///
	/// # Errors
	///
	/// Returns [`Error::FieldTooLong`] when an entry or the list overflows
	/// its two-byte length.
	pub fn encode(&self) -> Result<Vec<u8>, Error> {
		let mut w = Writer::new();
		w.nested16("client shares", |w| {
			self.client_shares.iter().try_for_each(|entry| entry.write(w))
		})?;
		Ok(w.into_inner())
	}
}

/// A group given either by identifier or by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSpec<'a> {
	/// Already resolved identifier.
	Id(u16),
	/// Name or decimal number, resolved against the group table.
	Name(&'a str),
}

impl GroupSpec<'_> {
	fn resolve(self) -> Result<u16, Error> {
		match self {
			Self::Id(id) => Ok(id),
			Self::Name(name) => resolve_u16(name, &GROUP_NAMES, "group"),
		}
	}
}

impl From<u16> for GroupSpec<'_> {
	fn from(id: u16) -> Self {
		Self::Id(id)
	}
}

impl<'a> From<&'a str> for GroupSpec<'a> {
	fn from(name: &'a str) -> Self {
		Self::Name(name)
	}
}

fn group_shape(group: u16) -> Result<GroupShape, Error> {
	if is_grease(group) {
		return Ok(GroupShape::FixedLength(GREASE_KEY_SHARE_LEN));
	}
	group_descriptor(group)
		.map(|g| g.shape)
		.ok_or(Error::UnsupportedGroup(group))
}

fn random_material<R: RngCore + ?Sized>(shape: GroupShape, rng: &mut R) -> Result<Vec<u8>, Error> {
	let mut material = vec![0u8; shape.material_len()];
	let random_part = match shape {
		GroupShape::FixedLength(_) => &mut material[..],
		GroupShape::EllipticCurve(_) => {
			material[0] = UNCOMPRESSED_POINT;
			&mut material[1..]
		}
	};
	rng
		.try_fill_bytes(random_part)
		.map_err(|_| Error::RandomSource)?;
	Ok(material)
}

/// Generate a key share for `group` with fresh random material.
///
/// Finite field, X25519 and X448 groups get exactly the group's key size;
/// elliptic curve groups get an uncompressed point of random coordinates,
/// which need not lie on the curve.
///
/// # Errors
///
/// Fails when the group name does not resolve, when the group has no
/// known key share shape, or when the random source fails.
///
/// ```
/// let entry = tlsfuzz_helpers::key_share_gen("secp256r1").unwrap();
/// assert_eq!(entry.group, 23);
/// assert_eq!(entry.key_exchange.len(), 65);
/// ```
pub fn key_share_gen<'a>(group: impl Into<GroupSpec<'a>>) -> Result<KeyShareEntry, Error> {
	key_share_gen_with_rng(group, &mut rand::thread_rng())
}

/// [`key_share_gen`] with an explicit random source.
///
/// # Errors
///
/// Same as [`key_share_gen`].
pub fn key_share_gen_with_rng<'a, R: RngCore + ?Sized>(
	group: impl Into<GroupSpec<'a>>,
	rng: &mut R,
) -> Result<KeyShareEntry, Error> {
	let group = group.into().resolve()?;
	let key_exchange = random_material(group_shape(group)?, rng)?;
	tracing::debug!(group, len = key_exchange.len(), "generated key share");
	Ok(KeyShareEntry {
		group,
		key_exchange,
	})
}

/// Input item for [`key_share_ext_gen`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyShareSpec<'a> {
	/// Generate a fresh share for this group on every use.
	Group(GroupSpec<'a>),
	/// Send this entry unchanged.
	Entry(KeyShareEntry),
}

impl From<u16> for KeyShareSpec<'_> {
	fn from(id: u16) -> Self {
		Self::Group(GroupSpec::Id(id))
	}
}

impl<'a> From<&'a str> for KeyShareSpec<'a> {
	fn from(name: &'a str) -> Self {
		Self::Group(GroupSpec::Name(name))
	}
}

impl From<KeyShareEntry> for KeyShareSpec<'_> {
	fn from(entry: KeyShareEntry) -> Self {
		Self::Entry(entry)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShareSource {
	Fresh { group: u16, shape: GroupShape },
	Fixed(KeyShareEntry),
}

/// Generator for a client `key_share` extension.
///
/// Created by [`key_share_ext_gen`]. Group names are resolved once, at
/// creation; key material is regenerated on every build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyShareExtGen {
	sources: Vec<ShareSource>,
}

impl KeyShareExtGen {
	/// Build the extension with the thread-local random source.
	///
	/// # Errors
	///
	/// Returns [`Error::RandomSource`] when the random source fails.
	pub fn build(&self) -> Result<ClientKeyShareExtension, Error> {
		self.build_with_rng(&mut rand::thread_rng())
	}

	/// Build the extension with an explicit random source.
	///
	/// # Errors
	///
	/// Returns [`Error::RandomSource`] when the random source fails.
	pub fn build_with_rng<R: RngCore + ?Sized>(
		&self,
		rng: &mut R,
	) -> Result<ClientKeyShareExtension, Error> {
		let client_shares = self
			.sources
			.iter()
			.map(|source| match source {
				ShareSource::Fresh { group, shape } => Ok(KeyShareEntry {
					group: *group,
					key_exchange: random_material(*shape, &mut *rng)?,
				}),
				ShareSource::Fixed(entry) => Ok(entry.clone()),
			})
			.collect::<Result<Vec<_>, Error>>()?;
		tracing::debug!(shares = client_shares.len(), "built key_share extension");
		Ok(ClientKeyShareExtension { client_shares })
	}
}

impl ExtensionGenerator for KeyShareExtGen {
	fn generate(&self, _state: &dyn SessionState) -> Result<Extension, Error> {
		self.build().map(Extension::KeyShare)
	}
}

/// Create a `key_share` generator from groups and prebuilt entries.
///
/// Items keep their order; duplicate groups are not merged.
///
/// # Errors
///
/// Fails when a group name does not resolve or a group has no known key
/// share shape.
///
/// ```
/// use tlsfuzz_helpers::{KeyShareEntry, KeyShareSpec, key_share_ext_gen};
///
/// let items: Vec<KeyShareSpec<'_>> = vec![
///     "x25519".into(),
///     KeyShareEntry::new(1313, b"something").into(),
/// ];
/// let ext = key_share_ext_gen(items).unwrap().build().unwrap();
/// assert_eq!(ext.client_shares[0].key_exchange.len(), 32);
/// assert_eq!(ext.client_shares[1].group, 1313);
/// ```
pub fn key_share_ext_gen<'a, I>(items: I) -> Result<KeyShareExtGen, Error>
where
	I: IntoIterator,
	I::Item: Into<KeyShareSpec<'a>>,
{
	let sources = items
		.into_iter()
		.map(|item| match item.into() {
			KeyShareSpec::Group(spec) => {
				let group = spec.resolve()?;
				Ok(ShareSource::Fresh {
					group,
					shape: group_shape(group)?,
				})
			}
			KeyShareSpec::Entry(entry) => Ok(ShareSource::Fixed(entry)),
		})
		.collect::<Result<Vec<_>, Error>>()?;
	Ok(KeyShareExtGen { sources })
}
