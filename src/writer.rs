/* src/writer.rs */

use crate::Error;

/// Sequential big-endian writer with length-prefix checking.
#[derive(Debug, Default)]
pub(crate) struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn into_inner(self) -> Vec<u8> {
		self.buf
	}

	pub(crate) fn put_u8(&mut self, val: u8) {
		self.buf.push(val);
	}

	pub(crate) fn put_u16(&mut self, val: u16) {
		self.buf.extend_from_slice(&val.to_be_bytes());
	}

	pub(crate) fn put_u32(&mut self, val: u32) {
		self.buf.extend_from_slice(&val.to_be_bytes());
	}

	pub(crate) fn put_bytes(&mut self, data: &[u8]) {
		self.buf.extend_from_slice(data);
	}

	/// Write `data` behind a one-byte length.
	pub(crate) fn put_vec8(&mut self, data: &[u8], field: &'static str) -> Result<(), Error> {
		let len = u8::try_from(data.len()).map_err(|_| Error::FieldTooLong {
			field,
			len: data.len(),
		})?;
		self.put_u8(len);
		self.put_bytes(data);
		Ok(())
	}

	/// Write `data` behind a two-byte length.
	pub(crate) fn put_vec16(&mut self, data: &[u8], field: &'static str) -> Result<(), Error> {
		let len = u16::try_from(data.len()).map_err(|_| Error::FieldTooLong {
			field,
			len: data.len(),
		})?;
		self.put_u16(len);
		self.put_bytes(data);
		Ok(())
	}

	/// Write whatever `body` produces behind a two-byte length.
	pub(crate) fn nested16<F>(&mut self, field: &'static str, body: F) -> Result<(), Error>
	where
		F: FnOnce(&mut Self) -> Result<(), Error>,
	{
		let mut inner = Self::new();
		body(&mut inner)?;
		self.put_vec16(&inner.buf, field)
	}
}
