//! Event definitions
//!
//! A watch notification as seen by the layer that owns watches.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fired watch: the path that changed and the token it was registered with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    path: String,
    token: String,
}

impl Event {
    pub fn new(path: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            token: token.into(),
        }
    }

    /// Path that changed
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Token supplied when the watch was registered
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.token)
    }
}
