/* tests/build.rs */
#![allow(missing_docs)]

mod helpers;

use helpers::{BrokenRng, FillRng};
use tlsfuzz_helpers::{
	AUTO_EMPTY_EXTENSION, ConnectionState, Error, Extension, ExtensionGenerator, KeyShareEntry,
	PskConfig, encode_extension, ext_name_to_id, key_share_ext_gen, key_share_gen_with_rng,
	protocol_name_to_tuple, psk_ext_gen, psk_session_ext_gen, sig_algs_to_ids, uniqueness_check,
};

#[test]
fn key_share_wire_layout() {
	let generator = key_share_ext_gen(["x25519", "secp256r1"]).unwrap();
	let ext = generator.build_with_rng(&mut FillRng(0xAB)).unwrap();
	let bytes = encode_extension(51, &ext.into()).unwrap();
	let expected = format!(
		"0033006b0069001d0020{}0017004104{}",
		"ab".repeat(32),
		"ab".repeat(64)
	);
	assert_eq!(hex::encode(bytes), expected);
}

#[test]
fn prebuilt_entry_passes_through_unchanged() {
	let entry = KeyShareEntry::new(1313, b"something");
	let generator = key_share_ext_gen([entry.clone()]).unwrap();
	let ext = generator.build_with_rng(&mut BrokenRng).unwrap();
	assert_eq!(ext.client_shares, vec![entry]);
}

#[test]
fn random_source_failure_is_fatal() {
	assert_eq!(
		key_share_gen_with_rng("x25519", &mut BrokenRng).unwrap_err(),
		Error::RandomSource
	);
	let generator = key_share_ext_gen(["ffdhe2048"]).unwrap();
	assert_eq!(
		generator.build_with_rng(&mut BrokenRng).unwrap_err(),
		Error::RandomSource
	);
}

#[test]
fn resumption_psk_wire_layout() {
	let state = helpers::resumable_state(0x1302);
	let ext = psk_session_ext_gen(None).unwrap().build(&state).unwrap();
	let body = ext.encode().unwrap();
	let expected = format!(
		"0012000c7469636b65742076616c7565010208e0003130{}",
		"00".repeat(48)
	);
	assert_eq!(hex::encode(&body), expected);
	assert_eq!(ext.binders_len(), 51);
	assert_eq!(&body[body.len() - ext.binders_len()..][..2], [0x00, 0x31]);
}

#[test]
fn tls12_sha384_suite_sizes_ticket_binder() {
	let state = helpers::resumable_state(0x00A7);
	let ext = psk_session_ext_gen(None).unwrap().build(&state).unwrap();
	assert_eq!(ext.binders_len(), 2 + 1 + 48);
}

#[test]
fn external_psk_wire_layout() {
	let ext = psk_ext_gen(&[PskConfig::new(b"test", b"secret")]).unwrap();
	let bytes = encode_extension(41, &ext.into()).unwrap();
	let expected = format!("0029002f000a00047465737400000000002120{}", "00".repeat(32));
	assert_eq!(hex::encode(bytes), expected);
}

#[test]
fn binders_sit_at_the_end_of_the_extension() {
	let configs = [
		PskConfig::new(b"test", b"secret"),
		PskConfig::new(b"example", b"secret").with_hash("sha384"),
	];
	let ext = psk_session_ext_gen(Some(configs.as_slice()))
		.unwrap()
		.build(&helpers::resumable_state(0x1301))
		.unwrap();
	let body = ext.encode().unwrap();
	let tail = &body[body.len() - ext.binders_len()..];
	assert_eq!(tail.len(), 2 + 33 + 33 + 49);
	assert!(tail[2..].iter().all(|&b| b == 0 || b == 32 || b == 48));
}

#[test]
fn generators_build_a_client_hello_extension_block() {
	let key_share = key_share_ext_gen(["x25519"]).unwrap();
	let sig_algs =
		Extension::signature_algorithms("ecdsa_secp256r1_sha256 rsa_pss_rsae_sha256").unwrap();
	let psk = psk_session_ext_gen(None).unwrap();
	let generators: [(u16, &dyn ExtensionGenerator); 4] = [
		(ext_name_to_id("key_share").unwrap(), &key_share as &dyn ExtensionGenerator),
		(ext_name_to_id("signature_algorithms").unwrap(), &sig_algs as &dyn ExtensionGenerator),
		(ext_name_to_id("early_data").unwrap(), &AUTO_EMPTY_EXTENSION as &dyn ExtensionGenerator),
		(ext_name_to_id("pre_shared_key").unwrap(), &psk as &dyn ExtensionGenerator),
	];

	let state = helpers::resumable_state(0x1301);
	let encoded: Vec<Vec<u8>> = generators
		.iter()
		.map(|(ext_type, generator)| {
			let ext = generator.generate(&state).unwrap();
			if let Some(implied) = ext.extension_type() {
				assert_eq!(implied, *ext_type);
			}
			encode_extension(*ext_type, &ext).unwrap()
		})
		.collect();

	assert_eq!(encoded[0].len(), 4 + 2 + 4 + 32);
	assert_eq!(hex::encode(&encoded[1]), "000d000600040403 0804".replace(' ', ""));
	assert_eq!(encoded[2], [0x00, 0x2a, 0x00, 0x00]);
	assert_eq!(encoded[3][..2], [0x00, 0x29]);

	let block = helpers::extensions_block(&encoded);
	let total: usize = encoded.iter().map(Vec::len).sum();
	assert_eq!(block.len(), total + 2);
}

#[test]
fn missing_ticket_through_generator() {
	let psk = psk_session_ext_gen(None).unwrap();
	let err = psk.generate(&ConnectionState::default()).unwrap_err();
	assert!(err.to_string().contains("No New Session Ticket"));
}

#[test]
fn psk_config_field_counts() {
	assert_eq!(
		PskConfig::from_fields(&[&b"test"[..]]).unwrap_err(),
		Error::PskArity(1)
	);
	assert_eq!(
		PskConfig::from_fields(&[&b"test"[..], b"secret", b"sha256", b"extra"]).unwrap_err(),
		Error::PskArity(4)
	);
	assert!(matches!(
		PskConfig::from_fields(&[&b"test"[..], b"secret", &[0xFF, 0xFE]]).unwrap_err(),
		Error::UnsupportedPskHash(_)
	));
}

#[test]
fn psk_identities_checked_before_building() {
	let configs = [
		PskConfig::new(b"one", b"secret"),
		PskConfig::new(b"two", b"secret"),
		PskConfig::new(b"one", b"other"),
	];
	let identities: Vec<Vec<u8>> = configs.iter().map(|c| c.identity.clone()).collect();
	assert_eq!(
		uniqueness_check([("psk identities", identities.as_slice())], configs.len()),
		["Duplicated entries in 'psk identities'."]
	);
}

#[test]
fn uniqueness_check_is_repeatable() {
	let groups = [23u16, 24, 23];
	let versions = [(3u8, 3u8), (3, 4)];
	let first = uniqueness_check([("groups", &groups[..])], 3);
	let second = uniqueness_check([("groups", &groups[..])], 3);
	assert_eq!(first, second);
	assert_eq!(groups, [23, 24, 23]);
	assert!(uniqueness_check([("versions", &versions[..])], 2).is_empty());
}

#[test]
fn names_feed_the_builders() {
	assert_eq!(sig_algs_to_ids("sha256+rsa").unwrap(), vec![(4, 1)]);
	assert_eq!(protocol_name_to_tuple("TLS1.2").unwrap(), (3, 3));
	assert_eq!(
		sig_algs_to_ids("sha256+rsa bogus").unwrap_err(),
		Error::UnknownSymbol {
			table: "signature scheme",
			name: "bogus".into(),
		}
	);
}

#[test]
fn error_messages() {
	assert_eq!(
		Error::UnknownSymbol {
			table: "group",
			name: "seccc".into(),
		}
		.to_string(),
		"unknown group name: \"seccc\""
	);
	assert_eq!(
		Error::PskArity(4).to_string(),
		"PSK configuration needs 2 or 3 fields (identity, secret[, hash]), got 4"
	);
	assert_eq!(
		Error::UnknownProtocol("SSL3.1".into()).to_string(),
		"unrecognised protocol name: \"SSL3.1\""
	);
}
