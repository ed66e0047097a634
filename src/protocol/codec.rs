//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┬──────────────────────┐
//! │  op (4)  │ rq_id (4)│ tx_id (4)│ size (4) │   Payload (size)     │
//! └──────────┴──────────┴──────────┴──────────┴──────────────────────┘
//! ```
//!
//! All header fields are little-endian u32. The payload is at most 4096
//! bytes.

use std::io::{Read, Write};

use bytes::{BufMut, Bytes};

use crate::config::{Config, PayloadPolicy};
use crate::error::{Result, XsError};
use super::header::{Header, HEADER_SIZE};
use super::Packet;

// =============================================================================
// Buffer Encoding/Decoding
// =============================================================================

/// Encode a packet to bytes
///
/// Format: op (4) + rq_id (4) + tx_id (4) + size (4) + payload
pub fn encode_packet(packet: &Packet) -> Vec<u8> {
    let mut message = Vec::with_capacity(HEADER_SIZE + packet.payload().len());
    packet.header().write_to(&mut message);
    message.put_slice(packet.payload());

    tracing::trace!(
        "Encoded {} packet: rq_id={} tx_id={} size={}",
        packet.op(),
        packet.rq_id(),
        packet.tx_id(),
        packet.size()
    );

    message
}

/// Decode a packet from bytes, taking the payload right after the header
///
/// Bytes past the end of the payload are ignored.
pub fn decode_packet(bytes: &[u8]) -> Result<Packet> {
    decode_packet_with(bytes, PayloadPolicy::HeaderOffset)
}

/// Decode a packet from bytes using the given payload policy
pub fn decode_packet_with(bytes: &[u8], policy: PayloadPolicy) -> Result<Packet> {
    let header = Header::parse(bytes)?;
    let op = header.validate().inspect_err(|e| {
        tracing::debug!("Rejected packet header {:?}: {}", header, e);
    })?;

    let payload_len = header.payload_len();
    let total_len = HEADER_SIZE + payload_len;
    if bytes.len() < total_len {
        return Err(XsError::MalformedHeader(format!(
            "Incomplete payload: expected {} bytes, got {}",
            total_len,
            bytes.len()
        )));
    }

    let payload = match policy {
        PayloadPolicy::HeaderOffset => &bytes[HEADER_SIZE..total_len],
        PayloadPolicy::Trailing => &bytes[bytes.len() - payload_len..],
    };

    let packet = Packet::from_validated(
        op,
        Bytes::copy_from_slice(payload),
        header.rq_id,
        header.tx_id,
    );

    tracing::trace!(
        "Decoded {} packet: rq_id={} tx_id={} size={} ({} trailing bytes)",
        packet.op(),
        packet.rq_id(),
        packet.tx_id(),
        packet.size(),
        bytes.len() - total_len
    );

    Ok(packet)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete packet from a stream
///
/// Blocks until the header and then the payload have been read. The header
/// is validated before the payload is read, so a bad header consumes only
/// 16 bytes. A short read surfaces as `XsError::Io`.
pub fn read_packet<R: Read>(reader: &mut R) -> Result<Packet> {
    // Read header first
    let mut header_bytes = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header_bytes)?;

    let header = Header::parse(&header_bytes)?;
    let op = header.validate().inspect_err(|e| {
        tracing::debug!("Rejected packet header {:?}: {}", header, e);
    })?;

    // Read payload
    let mut payload = vec![0u8; header.payload_len()];
    if !payload.is_empty() {
        reader.read_exact(&mut payload)?;
    }

    let packet = Packet::from_validated(op, Bytes::from(payload), header.rq_id, header.tx_id);

    tracing::trace!(
        "Read {} packet: rq_id={} tx_id={} size={}",
        packet.op(),
        packet.rq_id(),
        packet.tx_id(),
        packet.size()
    );

    Ok(packet)
}

/// Write a packet to a stream
pub fn write_packet<W: Write>(writer: &mut W, packet: &Packet) -> Result<()> {
    let bytes = encode_packet(packet);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Configured codec
// =============================================================================

/// Stateless codec carrying a [`Config`]
///
/// Only buffer decoding depends on the configuration; a stream read always
/// stops at the packet boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: Config,
}

impl Codec {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn encode(&self, packet: &Packet) -> Vec<u8> {
        encode_packet(packet)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Packet> {
        decode_packet_with(bytes, self.config.payload_policy)
    }

    pub fn read<R: Read>(&self, reader: &mut R) -> Result<Packet> {
        read_packet(reader)
    }

    pub fn write<W: Write>(&self, writer: &mut W, packet: &Packet) -> Result<()> {
        write_packet(writer, packet)
    }
}
