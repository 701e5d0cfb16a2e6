/* src/tables.rs */

//! Static protocol tables: named groups, hashes, signature algorithms,
//! signature schemes, cipher suites and extension types.
//!
//! Name tables are [`SymbolTable`]s so every builder resolves names the same
//! way through [`resolve_name`](crate::resolve_name). Descriptor tables
//! carry the sizing data the builders need.

use crate::resolve::SymbolTable;

/// Shape of the key exchange material for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupShape {
	/// Opaque material of exactly this many bytes (FFDHE, X25519, X448).
	FixedLength(usize),
	/// Uncompressed point: `0x04` followed by two coordinates of this many bytes.
	EllipticCurve(usize),
}

impl GroupShape {
	/// Total number of bytes of key exchange material.
	#[must_use]
	pub const fn material_len(self) -> usize {
		match self {
			Self::FixedLength(n) => n,
			Self::EllipticCurve(n) => 2 * n + 1,
		}
	}
}

/// Named group with a known key share shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDescriptor {
	/// Registered name.
	pub name: &'static str,
	/// Wire identifier.
	pub id: u16,
	/// Key exchange material shape.
	pub shape: GroupShape,
}

/// Hash algorithm with its digest size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashDescriptor {
	/// Lowercase name as used in test configurations.
	pub name: &'static str,
	/// TLS 1.2 `HashAlgorithm` identifier.
	pub id: u8,
	/// Digest output length in bytes.
	pub digest_len: usize,
}

/// Named groups (RFC 8422, RFC 7919, RFC 8446, RFC 8734).
pub static GROUP_NAMES: SymbolTable = SymbolTable::new(
	"group",
	&[
		("sect163k1", 1),
		("sect163r1", 2),
		("sect163r2", 3),
		("sect193r1", 4),
		("sect193r2", 5),
		("sect233k1", 6),
		("sect233r1", 7),
		("sect239k1", 8),
		("sect283k1", 9),
		("sect283r1", 10),
		("sect409k1", 11),
		("sect409r1", 12),
		("sect571k1", 13),
		("sect571r1", 14),
		("secp160k1", 15),
		("secp160r1", 16),
		("secp160r2", 17),
		("secp192k1", 18),
		("secp192r1", 19),
		("secp224k1", 20),
		("secp224r1", 21),
		("secp256k1", 22),
		("secp256r1", 23),
		("secp384r1", 24),
		("secp521r1", 25),
		("brainpoolP256r1", 26),
		("brainpoolP384r1", 27),
		("brainpoolP512r1", 28),
		("x25519", 29),
		("x448", 30),
		("brainpoolP256r1tls13", 31),
		("brainpoolP384r1tls13", 32),
		("brainpoolP512r1tls13", 33),
		("ffdhe2048", 256),
		("ffdhe3072", 257),
		("ffdhe4096", 258),
		("ffdhe6144", 259),
		("ffdhe8192", 260),
		("secp256r1mlkem768", 0x11EB),
		("x25519mlkem768", 0x11EC),
		("secp384r1mlkem1024", 0x11ED),
	],
);

/// Groups for which key shares can be generated.
///
/// Binary curves are nameable but have no entry here. Hybrid KEM shares are
/// the classical share followed by the ML-KEM encapsulation key
/// (X25519MLKEM768 puts the ML-KEM key first), sent as opaque bytes.
pub static GROUPS: &[GroupDescriptor] = &[
	group("secp160k1", 15, GroupShape::EllipticCurve(20)),
	group("secp160r1", 16, GroupShape::EllipticCurve(20)),
	group("secp160r2", 17, GroupShape::EllipticCurve(20)),
	group("secp192k1", 18, GroupShape::EllipticCurve(24)),
	group("secp192r1", 19, GroupShape::EllipticCurve(24)),
	group("secp224k1", 20, GroupShape::EllipticCurve(28)),
	group("secp224r1", 21, GroupShape::EllipticCurve(28)),
	group("secp256k1", 22, GroupShape::EllipticCurve(32)),
	group("secp256r1", 23, GroupShape::EllipticCurve(32)),
	group("secp384r1", 24, GroupShape::EllipticCurve(48)),
	group("secp521r1", 25, GroupShape::EllipticCurve(66)),
	group("brainpoolP256r1", 26, GroupShape::EllipticCurve(32)),
	group("brainpoolP384r1", 27, GroupShape::EllipticCurve(48)),
	group("brainpoolP512r1", 28, GroupShape::EllipticCurve(64)),
	group("x25519", 29, GroupShape::FixedLength(32)),
	group("x448", 30, GroupShape::FixedLength(56)),
	group("brainpoolP256r1tls13", 31, GroupShape::EllipticCurve(32)),
	group("brainpoolP384r1tls13", 32, GroupShape::EllipticCurve(48)),
	group("brainpoolP512r1tls13", 33, GroupShape::EllipticCurve(64)),
	group("ffdhe2048", 256, GroupShape::FixedLength(2048 / 8)),
	group("ffdhe3072", 257, GroupShape::FixedLength(3072 / 8)),
	group("ffdhe4096", 258, GroupShape::FixedLength(4096 / 8)),
	group("ffdhe6144", 259, GroupShape::FixedLength(6144 / 8)),
	group("ffdhe8192", 260, GroupShape::FixedLength(8192 / 8)),
	group("secp256r1mlkem768", 0x11EB, GroupShape::FixedLength(65 + 1184)),
	group("x25519mlkem768", 0x11EC, GroupShape::FixedLength(1184 + 32)),
	group("secp384r1mlkem1024", 0x11ED, GroupShape::FixedLength(97 + 1568)),
];

const fn group(name: &'static str, id: u16, shape: GroupShape) -> GroupDescriptor {
	GroupDescriptor { name, id, shape }
}

/// Find the descriptor for a group id.
#[must_use]
pub fn group_descriptor(id: u16) -> Option<&'static GroupDescriptor> {
	GROUPS.iter().find(|g| g.id == id)
}

/// TLS 1.2 `HashAlgorithm` names.
pub static HASH_NAMES: SymbolTable = SymbolTable::new(
	"hash",
	&[
		("md5", 1),
		("sha1", 2),
		("sha224", 3),
		("sha256", 4),
		("sha384", 5),
		("sha512", 6),
		("intrinsic", 8),
	],
);

/// SHA-256 descriptor.
pub const SHA256: HashDescriptor = HashDescriptor {
	name: "sha256",
	id: 4,
	digest_len: 32,
};

/// SHA-384 descriptor.
pub const SHA384: HashDescriptor = HashDescriptor {
	name: "sha384",
	id: 5,
	digest_len: 48,
};

/// Hashes with a digest, in `HashAlgorithm` order.
pub static HASHES: &[HashDescriptor] = &[
	HashDescriptor {
		name: "md5",
		id: 1,
		digest_len: 16,
	},
	HashDescriptor {
		name: "sha1",
		id: 2,
		digest_len: 20,
	},
	HashDescriptor {
		name: "sha224",
		id: 3,
		digest_len: 28,
	},
	SHA256,
	SHA384,
	HashDescriptor {
		name: "sha512",
		id: 6,
		digest_len: 64,
	},
];

/// Find a hash descriptor by its lowercase name.
#[must_use]
pub fn hash_descriptor(name: &str) -> Option<&'static HashDescriptor> {
	HASHES.iter().find(|h| h.name == name)
}

/// TLS 1.2 `SignatureAlgorithm` names.
pub static SIGNATURE_NAMES: SymbolTable = SymbolTable::new(
	"signature algorithm",
	&[
		("anonymous", 0),
		("rsa", 1),
		("dsa", 2),
		("ecdsa", 3),
		("ed25519", 7),
		("ed448", 8),
	],
);

/// TLS 1.3 `SignatureScheme` names, plus the legacy pairs that never got
/// an IANA name and the pre-RFC `rsa_pss_*` aliases.
pub static SIGNATURE_SCHEMES: SymbolTable = SymbolTable::new(
	"signature scheme",
	&[
		("rsa_pkcs1_sha1", 0x0201),
		("rsa_pkcs1_sha224", 0x0301),
		("rsa_pkcs1_sha256", 0x0401),
		("rsa_pkcs1_sha384", 0x0501),
		("rsa_pkcs1_sha512", 0x0601),
		("dsa_sha1", 0x0202),
		("dsa_sha224", 0x0302),
		("dsa_sha256", 0x0402),
		("dsa_sha384", 0x0502),
		("dsa_sha512", 0x0602),
		("ecdsa_sha1", 0x0203),
		("ecdsa_sha224", 0x0303),
		("ecdsa_secp256r1_sha256", 0x0403),
		("ecdsa_secp384r1_sha384", 0x0503),
		("ecdsa_secp521r1_sha512", 0x0603),
		("rsa_pss_rsae_sha256", 0x0804),
		("rsa_pss_rsae_sha384", 0x0805),
		("rsa_pss_rsae_sha512", 0x0806),
		("ed25519", 0x0807),
		("ed448", 0x0808),
		("rsa_pss_pss_sha256", 0x0809),
		("rsa_pss_pss_sha384", 0x080a),
		("rsa_pss_pss_sha512", 0x080b),
		("ecdsa_brainpoolP256r1tls13_sha256", 0x081a),
		("ecdsa_brainpoolP384r1tls13_sha384", 0x081b),
		("ecdsa_brainpoolP512r1tls13_sha512", 0x081c),
		("mldsa44", 0x0904),
		("mldsa65", 0x0905),
		("mldsa87", 0x0906),
		("rsa_pss_sha256", 0x0804),
		("rsa_pss_sha384", 0x0805),
		("rsa_pss_sha512", 0x0806),
	],
);

/// Split a signature scheme into its `(hash, signature)` byte pair.
#[must_use]
pub const fn scheme_to_pair(scheme: u16) -> (u8, u8) {
	let [hash, sig] = scheme.to_be_bytes();
	(hash, sig)
}

/// Cipher suite names (RFC 8446, RFC 5289, RFC 7905).
pub static CIPHER_SUITE_NAMES: SymbolTable = SymbolTable::new(
	"cipher suite",
	&[
		("TLS_AES_128_GCM_SHA256", 0x1301),
		("TLS_AES_256_GCM_SHA384", 0x1302),
		("TLS_CHACHA20_POLY1305_SHA256", 0x1303),
		("TLS_AES_128_CCM_SHA256", 0x1304),
		("TLS_AES_128_CCM_8_SHA256", 0x1305),
		("TLS_RSA_WITH_AES_128_CBC_SHA", 0x002F),
		("TLS_RSA_WITH_AES_256_CBC_SHA", 0x0035),
		("TLS_RSA_WITH_AES_128_GCM_SHA256", 0x009C),
		("TLS_RSA_WITH_AES_256_GCM_SHA384", 0x009D),
		("TLS_DHE_RSA_WITH_AES_128_GCM_SHA256", 0x009E),
		("TLS_DHE_RSA_WITH_AES_256_GCM_SHA384", 0x009F),
		("TLS_DHE_DSS_WITH_AES_256_GCM_SHA384", 0x00A3),
		("TLS_DH_anon_WITH_AES_256_GCM_SHA384", 0x00A7),
		("TLS_PSK_WITH_AES_256_GCM_SHA384", 0x00A9),
		("TLS_PSK_WITH_AES_256_CBC_SHA384", 0x00AF),
		("TLS_EMPTY_RENEGOTIATION_INFO_SCSV", 0x00FF),
		("TLS_ECDHE_ECDSA_WITH_AES_128_CBC_SHA256", 0xC023),
		("TLS_ECDHE_ECDSA_WITH_AES_256_CBC_SHA384", 0xC024),
		("TLS_ECDHE_RSA_WITH_AES_128_CBC_SHA256", 0xC027),
		("TLS_ECDHE_RSA_WITH_AES_256_CBC_SHA384", 0xC028),
		("TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256", 0xC02B),
		("TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384", 0xC02C),
		("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256", 0xC02F),
		("TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384", 0xC030),
		("TLS_ECDH_ECDSA_WITH_AES_256_GCM_SHA384", 0xC02E),
		("TLS_ECDH_RSA_WITH_AES_256_GCM_SHA384", 0xC032),
		("TLS_ECDHE_PSK_WITH_AES_256_CBC_SHA384", 0xC038),
		("TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256", 0xCCA8),
		("TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256", 0xCCA9),
	],
);

/// Cipher suites whose PRF (or HKDF) hash is SHA-384 (RFC 5288, RFC 5289,
/// RFC 5487, RFC 5489, RFC 8446).
pub static SHA384_PRF_SUITES: &[u16] = &[
	0x009D, 0x009F, 0x00A1, 0x00A3, 0x00A5, 0x00A7, // AES_256_GCM, RFC 5288
	0x00A9, 0x00AB, 0x00AD, // PSK AES_256_GCM
	0x00AF, 0x00B1, 0x00B3, 0x00B5, 0x00B7, 0x00B9, // PSK CBC and NULL
	0xC024, 0xC026, 0xC028, 0xC02A, // ECDH(E) AES_256_CBC
	0xC02C, 0xC02E, 0xC030, 0xC032, // ECDH(E) AES_256_GCM
	0xC038, 0xC03B, // ECDHE_PSK
	0x1302, // TLS_AES_256_GCM_SHA384
];

/// PRF / HKDF hash of a cipher suite.
///
/// Suites listed in [`SHA384_PRF_SUITES`] use SHA-384; everything else,
/// unknown suites included, falls back to SHA-256 as in the TLS 1.2
/// default PRF.
#[must_use]
pub fn cipher_suite_hash(cipher: u16) -> &'static HashDescriptor {
	if SHA384_PRF_SUITES.contains(&cipher) { &SHA384 } else { &SHA256 }
}

/// Extension type names (IANA TLS ExtensionType registry).
pub static EXTENSION_TYPES: SymbolTable = SymbolTable::new(
	"extension type",
	&[
		("server_name", 0),
		("max_fragment_length", 1),
		("status_request", 5),
		("supported_groups", 10),
		("ec_point_formats", 11),
		("signature_algorithms", 13),
		("use_srtp", 14),
		("heartbeat", 15),
		("alpn", 16),
		("signed_certificate_timestamp", 18),
		("client_certificate_type", 19),
		("server_certificate_type", 20),
		("padding", 21),
		("encrypt_then_mac", 22),
		("extended_master_secret", 23),
		("compress_certificate", 27),
		("record_size_limit", 28),
		("session_ticket", 35),
		("pre_shared_key", 41),
		("early_data", 42),
		("supported_versions", 43),
		("cookie", 44),
		("psk_key_exchange_modes", 45),
		("certificate_authorities", 47),
		("oid_filters", 48),
		("post_handshake_auth", 49),
		("signature_algorithms_cert", 50),
		("key_share", 51),
		("renegotiation_info", 0xff01),
	],
);

/// `key_share` extension type.
pub const EXT_KEY_SHARE: u16 = 51;
/// `pre_shared_key` extension type.
pub const EXT_PRE_SHARED_KEY: u16 = 41;
/// `signature_algorithms` extension type.
pub const EXT_SIGNATURE_ALGORITHMS: u16 = 13;
