/* tests/helpers/mod.rs */

use rand::RngCore;
use tlsfuzz_helpers::{ConnectionState, SessionTicket};

/// Random source that fills every byte with the same value.
pub(crate) struct FillRng(pub(crate) u8);

impl RngCore for FillRng {
	fn next_u32(&mut self) -> u32 {
		u32::from_ne_bytes([self.0; 4])
	}

	fn next_u64(&mut self) -> u64 {
		u64::from_ne_bytes([self.0; 8])
	}

	fn fill_bytes(&mut self, dest: &mut [u8]) {
		dest.fill(self.0);
	}

	fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
		self.fill_bytes(dest);
		Ok(())
	}
}

/// Random source that always fails.
pub(crate) struct BrokenRng;

impl RngCore for BrokenRng {
	fn next_u32(&mut self) -> u32 {
		0
	}

	fn next_u64(&mut self) -> u64 {
		0
	}

	fn fill_bytes(&mut self, _dest: &mut [u8]) {}

	fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
		Err(rand::Error::new("entropy source unavailable"))
	}
}

/// State after a full handshake that issued one ticket.
pub(crate) fn resumable_state(cipher: u16) -> ConnectionState {
	ConnectionState {
		cipher,
		session_tickets: vec![
			SessionTicket::new(134, 0x0102_0304, b"nonce", b"ticket value").received_at(60_000),
		],
		time_ms: 61_500,
	}
}

/// Assemble an extensions block: two-byte total length then each extension.
pub(crate) fn extensions_block(encoded: &[Vec<u8>]) -> Vec<u8> {
	let body: Vec<u8> = encoded.concat();
	let mut block = Vec::with_capacity(body.len() + 2);
	block.extend_from_slice(&(body.len() as u16).to_be_bytes());
	block.extend_from_slice(&body);
	block
}
