//! Configuration for xswire
//!
//! Codec options with sensible defaults.

use serde::{Deserialize, Serialize};

/// Codec configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Decoding Configuration
    // -------------------------------------------------------------------------
    /// Where the payload is taken from when decoding a buffer
    pub payload_policy: PayloadPolicy,
}

/// Payload extraction policy for buffer decoding
///
/// The two policies only differ when extra bytes trail the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayloadPolicy {
    /// The `size` bytes immediately following the 16-byte header
    #[default]
    HeaderOffset,

    /// The last `size` bytes of the whole buffer (legacy behaviour)
    Trailing,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the payload extraction policy
    pub fn payload_policy(mut self, policy: PayloadPolicy) -> Self {
        self.config.payload_policy = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
