//! Runtime kind of a registry
//!
//! Distinguishes client-side from server-side configurations. The kind is
//! fixed when a registry is created and copied verbatim into child registries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Operating context of a registry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeKind {
    /// Client-side configuration (outbound requests)
    Client,

    /// Server-side configuration (inbound requests)
    #[default]
    Server,
}

impl RuntimeKind {
    /// Check if this is the client runtime
    pub fn is_client(&self) -> bool {
        *self == RuntimeKind::Client
    }

    /// Check if this is the server runtime
    pub fn is_server(&self) -> bool {
        *self == RuntimeKind::Server
    }

    /// Lowercase name, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            RuntimeKind::Client => "client",
            RuntimeKind::Server => "server",
        }
    }
}

impl fmt::Display for RuntimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuntimeKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "client" => Ok(RuntimeKind::Client),
            "server" => Ok(RuntimeKind::Server),
            _ => Err(Error::config(format!(
                "Invalid runtime kind: {s}. Use client or server"
            ))),
        }
    }
}
