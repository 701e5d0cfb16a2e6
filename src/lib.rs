/* src/lib.rs */

//! Name-to-wire helpers for TLS conformance and fuzz test cases.
//!
//! Test cases name things the way people do: `secp256r1`, `sha384`,
//! `rsa_pss_pss_sha256`, `TLSv1.2`. This crate turns those names into the
//! exact values a ClientHello carries:
//!
//! - key shares of the right size for a group via [`key_share_gen`] and
//!   [`key_share_ext_gen`];
//! - `pre_shared_key` extensions with binder placeholders sized after each
//!   PSK's hash via [`psk_ext_gen`] and [`psk_session_ext_gen`];
//! - `(hash, signature)` pairs via [`sig_algs_to_ids`];
//! - protocol version tuples via [`protocol_name_to_tuple`].
//!
//! [`uniqueness_check`] validates test configuration before anything is
//! built. Key material is random and only shaped like a real key; binders
//! are zeros for a later stage to overwrite.

mod error;
mod extension;
mod grease;
mod key_share;
mod psk;
mod resolve;
mod sig_algs;
mod state;
pub mod tables;
mod uniqueness;
mod version;
mod writer;

pub use crate::error::Error;
pub use crate::extension::{
	AUTO_EMPTY_EXTENSION, AutoEmptyExtension, Extension, ExtensionGenerator, encode_extension,
	ext_name_to_id,
};
pub use crate::grease::{grease_values, is_grease};
pub use crate::key_share::{
	ClientKeyShareExtension, GroupSpec, KeyShareEntry, KeyShareExtGen, KeyShareSpec,
	key_share_ext_gen, key_share_gen, key_share_gen_with_rng,
};
pub use crate::psk::{
	DEFAULT_PSK_HASH, PreSharedKeyExtension, PskConfig, PskIdentity, PskSessionExtGen, psk_ext_gen,
	psk_hash, psk_session_ext_gen,
};
pub use crate::resolve::{SymbolTable, resolve_name};
pub use crate::sig_algs::{ECDSA_SIG_ALL, EDDSA_SIG_ALL, RSA_SIG_ALL, SIG_ALL, sig_algs_to_ids};
pub use crate::state::{ConnectionState, SessionState, SessionTicket};
pub use crate::uniqueness::uniqueness_check;
pub use crate::version::{protocol_name_to_tuple, protocol_tuple_to_name};
