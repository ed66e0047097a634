//! Protocol Module
//!
//! Defines the XenStore wire protocol as seen by a client.
//!
//! ## Packet Format
//! ```text
//! ┌──────────┬──────────┬──────────┬──────────┬──────────────────────┐
//! │  op (4)  │ rq_id (4)│ tx_id (4)│ size (4) │   Payload (size)     │
//! └──────────┴──────────┴──────────┴──────────┴──────────────────────┘
//! ```
//!
//! ### Payloads
//! - Requests: NUL-delimited path segments and values
//! - Error replies: `E<NAME>\0`, e.g. `ENOENT\0`
//! - WATCH_EVENT: `path\0token\0`, split into an [`Event`] by the watch layer

mod op;
mod event;
mod header;
mod packet;
mod codec;

pub use op::Op;
pub use event::Event;
pub use header::{Header, HEADER_SIZE, MAX_PAYLOAD_SIZE};
pub use packet::Packet;
pub use codec::{
    decode_packet, decode_packet_with, encode_packet, read_packet, write_packet, Codec,
};
