//! Packet definitions
//!
//! A single message to or from XenStore.

use bytes::Bytes;

use crate::error::{Result, XsError};
use super::header::{Header, MAX_PAYLOAD_SIZE};
use super::Op;

/// A validated, immutable XenStore message
///
/// `size` is always the payload length; there is no way to set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    op: Op,
    rq_id: u32,
    tx_id: u32,
    payload: Bytes,
}

impl Packet {
    /// Build a packet
    ///
    /// Text payloads are stored as their UTF-8 bytes. Missing ids become 0,
    /// which XenStore treats the same as an explicit 0.
    ///
    /// Fails with `InvalidPayload` if the payload is over 4096 bytes, and
    /// with `InvalidOperation` if `op` is not a known code.
    pub fn new(
        op: impl Into<u32>,
        payload: impl AsRef<[u8]>,
        rq_id: Option<u32>,
        tx_id: Option<u32>,
    ) -> Result<Self> {
        let payload = payload.as_ref();
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(XsError::InvalidPayload {
                size: payload.len(),
                max: MAX_PAYLOAD_SIZE,
            });
        }

        let op = Op::try_from(op.into())?;

        Ok(Self::from_validated(
            op,
            Bytes::copy_from_slice(payload),
            rq_id.unwrap_or(0),
            tx_id.unwrap_or(0),
        ))
    }

    /// Build a request outside of any transaction, with request id 0
    pub fn request(op: Op, payload: impl AsRef<[u8]>) -> Result<Self> {
        Self::new(op, payload, None, None)
    }

    /// Build a packet with explicit request and transaction ids
    pub fn with_ids(op: Op, payload: impl AsRef<[u8]>, rq_id: u32, tx_id: u32) -> Result<Self> {
        Self::new(op, payload, Some(rq_id), Some(tx_id))
    }

    /// Assemble a packet from a header that already passed `Header::validate`
    ///
    /// The caller guarantees `payload` is no longer than `MAX_PAYLOAD_SIZE`.
    pub(crate) fn from_validated(op: Op, payload: Bytes, rq_id: u32, tx_id: u32) -> Self {
        debug_assert!(payload.len() <= MAX_PAYLOAD_SIZE);
        Self {
            op,
            rq_id,
            tx_id,
            payload,
        }
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn rq_id(&self) -> u32 {
        self.rq_id
    }

    pub fn tx_id(&self) -> u32 {
        self.tx_id
    }

    /// Payload length in bytes
    pub fn size(&self) -> u32 {
        // Bounded by MAX_PAYLOAD_SIZE at construction.
        self.payload.len() as u32
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Header describing this packet
    pub fn header(&self) -> Header {
        Header {
            op: self.op.code(),
            rq_id: self.rq_id,
            tx_id: self.tx_id,
            size: self.size(),
        }
    }

    /// Serialize to header + payload bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        super::codec::encode_packet(self)
    }

    /// Does the payload carry a server error such as `ENOENT\0`?
    ///
    /// Matches `^E[A-Z]+\0$` against the whole payload.
    pub fn is_error(&self) -> bool {
        self.error_name().is_some()
    }

    /// Symbolic error name (`"ENOENT"`) if this is an error reply
    pub fn error_name(&self) -> Option<&str> {
        let name = self.payload.strip_suffix(b"\0")?;
        let letters = name.strip_prefix(b"E")?;

        if letters.is_empty() || !letters.iter().all(u8::is_ascii_uppercase) {
            return None;
        }

        // All bytes are ASCII uppercase letters at this point.
        std::str::from_utf8(name).ok()
    }
}
