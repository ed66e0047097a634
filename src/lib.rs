//! # xswire
//!
//! Client-side packet codec for the XenStore wire protocol:
//! - Fixed 16-byte little-endian header framing
//! - Validated, immutable packets (known op codes, 4096-byte payload cap)
//! - Buffer and blocking-stream decoding
//! - Server error classification (`E<NAME>\0` payloads)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │            Transport / Transactions / Watches                │
//! │                    (caller-provided)                         │
//! └──────────────┬───────────────────────────────▲──────────────┘
//!                │ Packet                        │ Packet
//! ┌──────────────▼───────────────────────────────┴──────────────┐
//! │                        Packet Codec                          │
//! │         encode / decode / read_packet / write_packet         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!                ┌─────────────┐
//!                │  Op Table   │
//!                └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use xswire::protocol::{decode_packet, Op, Packet};
//!
//! let request = Packet::new(Op::Read, "/local/domain/0/name\0", Some(7), None)?;
//! let bytes = request.to_bytes();
//! assert_eq!(bytes.len(), 16 + request.size() as usize);
//!
//! let reply = decode_packet(&bytes)?;
//! assert_eq!(reply, request);
//! assert!(!reply.is_error());
//! # Ok::<(), xswire::XsError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{XsError, Result};
pub use config::{Config, PayloadPolicy};
pub use protocol::{Codec, Event, Op, Packet};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of xswire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
