/* demos/build_extensions.rs */
#![allow(missing_docs)]

use tlsfuzz_helpers::{
	AUTO_EMPTY_EXTENSION, ConnectionState, Extension, ExtensionGenerator, SessionTicket,
	encode_extension, ext_name_to_id, key_share_ext_gen, protocol_name_to_tuple,
	psk_session_ext_gen, uniqueness_check,
};

fn main() {
	let groups = ["x25519", "secp256r1", "ffdhe2048"];
	let problems = uniqueness_check([("groups", &groups[..])], groups.len());
	if !problems.is_empty() {
		for problem in problems {
			eprintln!("{problem}");
		}
		return;
	}

	let key_share = match key_share_ext_gen(groups) {
		Ok(generator) => generator,
		Err(e) => {
			eprintln!("Key share setup failed: {e}");
			return;
		}
	};
	let sig_algs = match Extension::signature_algorithms(
		"ecdsa_secp256r1_sha256 rsa_pss_rsae_sha256 ed25519",
	) {
		Ok(ext) => ext,
		Err(e) => {
			eprintln!("Signature algorithms failed: {e}");
			return;
		}
	};
	let psk = match psk_session_ext_gen(None) {
		Ok(generator) => generator,
		Err(e) => {
			eprintln!("PSK setup failed: {e}");
			return;
		}
	};

	let state = ConnectionState {
		cipher: 0x1301,
		session_tickets: vec![
			SessionTicket::new(7200, 0x5f3a_9c01, b"\x00", b"demo ticket").received_at(1_000),
		],
		time_ms: 3_500,
	};

	let generators: [(&str, &dyn ExtensionGenerator); 4] = [
		("key_share", &key_share as &dyn ExtensionGenerator),
		("signature_algorithms", &sig_algs as &dyn ExtensionGenerator),
		("early_data", &AUTO_EMPTY_EXTENSION as &dyn ExtensionGenerator),
		("pre_shared_key", &psk as &dyn ExtensionGenerator),
	];

	if let Ok((major, minor)) = protocol_name_to_tuple("TLSv1.3") {
		println!("Target version: {major}.{minor}");
	}

	for (name, generator) in generators {
		let built = ext_name_to_id(name)
			.and_then(|id| generator.generate(&state).map(|ext| (id, ext)))
			.and_then(|(id, ext)| encode_extension(id, &ext));
		match built {
			Ok(bytes) => println!(
				"{name} ({} bytes): {:02x?}",
				bytes.len(),
				&bytes[..bytes.len().min(16)]
			),
			Err(e) => eprintln!("{name}: {e}"),
		}
	}
}
