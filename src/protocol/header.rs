//! Header definitions
//!
//! The fixed 16-byte framing struct (`xsd_sockmsg` in `xs_wire.h`).

use bytes::{Buf, BufMut};

use crate::error::{Result, XsError};
use super::Op;

/// Header size: four little-endian u32 fields
pub const HEADER_SIZE: usize = 16;

/// Maximum payload size accepted by XenStore
pub const MAX_PAYLOAD_SIZE: usize = 4096;

/// Raw packet header, as read off the wire
///
/// Nothing here is validated until [`Header::validate`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Operation code
    pub op: u32,

    /// Request id, echoed back by the server
    pub rq_id: u32,

    /// Transaction id, 0 when no transaction is running
    pub tx_id: u32,

    /// Payload length in bytes
    pub size: u32,
}

impl Header {
    /// Parse a header from the first 16 bytes of `bytes`
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(XsError::MalformedHeader(format!(
                "Incomplete header: expected {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut buf = &bytes[..HEADER_SIZE];
        Ok(Self {
            op: buf.get_u32_le(),
            rq_id: buf.get_u32_le(),
            tx_id: buf.get_u32_le(),
            size: buf.get_u32_le(),
        })
    }

    /// Append the 16 header bytes to `buf`
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u32_le(self.op);
        buf.put_u32_le(self.rq_id);
        buf.put_u32_le(self.tx_id);
        buf.put_u32_le(self.size);
    }

    /// Encode to a fixed array
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        self.write_to(&mut &mut out[..]);
        out
    }

    /// Check the op code and declared size, returning the decoded operation
    pub fn validate(&self) -> Result<Op> {
        let op = Op::try_from(self.op)?;

        if self.size as usize > MAX_PAYLOAD_SIZE {
            return Err(XsError::InvalidPayload {
                size: self.size as usize,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        Ok(op)
    }

    /// Declared payload length
    pub fn payload_len(&self) -> usize {
        self.size as usize
    }
}
