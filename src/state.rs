/* src/state.rs */

/// A NewSessionTicket received on an earlier connection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionTicket {
	/// Lifetime hint in seconds.
	pub ticket_lifetime: u32,
	/// Value added to the ticket age before it is sent.
	pub ticket_age_add: u32,
	/// Per-ticket nonce.
	pub ticket_nonce: Vec<u8>,
	/// Opaque ticket, sent back as the PSK identity.
	pub ticket: Vec<u8>,
	/// Time the ticket was received, in milliseconds on the state's clock.
	pub time_ms: u64,
}

impl SessionTicket {
	/// Create a ticket as received from a NewSessionTicket message.
	#[must_use]
	pub fn new(ticket_lifetime: u32, ticket_age_add: u32, ticket_nonce: &[u8], ticket: &[u8]) -> Self {
		Self {
			ticket_lifetime,
			ticket_age_add,
			ticket_nonce: ticket_nonce.to_vec(),
			ticket: ticket.to_vec(),
			time_ms: 0,
		}
	}

	/// Record the receive time.
	#[must_use]
	pub fn received_at(mut self, time_ms: u64) -> Self {
		self.time_ms = time_ms;
		self
	}

	/// Obfuscated ticket age at `now_ms` (RFC 8446 section 4.2.11.1).
	#[must_use]
	pub fn obfuscated_age(&self, now_ms: u64) -> u32 {
		let age = now_ms.saturating_sub(self.time_ms);
		// truncation to 32 bits is the mod 2^32 the RFC asks for
		(age as u32).wrapping_add(self.ticket_age_add)
	}
}

/// Read-only view of the handshake driver's connection state.
pub trait SessionState {
	/// Currently negotiated cipher suite.
	fn cipher_suite(&self) -> u16;

	/// Stored session tickets, oldest first.
	fn session_tickets(&self) -> &[SessionTicket];

	/// Current time in milliseconds, on the clock used for [`SessionTicket::time_ms`].
	fn time_ms(&self) -> u64;
}

/// Plain connection state as kept by a handshake driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
	/// Negotiated cipher suite.
	pub cipher: u16,
	/// Session tickets received so far.
	pub session_tickets: Vec<SessionTicket>,
	/// Current time in milliseconds.
	pub time_ms: u64,
}

impl SessionState for ConnectionState {
	fn cipher_suite(&self) -> u16 {
		self.cipher
	}

	fn session_tickets(&self) -> &[SessionTicket] {
		&self.session_tickets
	}

	fn time_ms(&self) -> u64 {
		self.time_ms
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn age_adds_offset() {
		let t = SessionTicket::new(134, 1000, b"nonce", b"ticket").received_at(5_000);
		assert_eq!(t.obfuscated_age(7_500), 3_500);
	}

	#[test]
	fn age_wraps() {
		let t = SessionTicket::new(134, u32::MAX, b"", b"ticket");
		assert_eq!(t.obfuscated_age(2), 1);
	}

	#[test]
	fn clock_going_backwards_gives_zero_age() {
		let t = SessionTicket::new(134, 7, b"", b"ticket").received_at(10_000);
		assert_eq!(t.obfuscated_age(9_000), 7);
	}
}
