// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Identity types.
//!
//! Identities and digests are fixed 32-byte arrays compared by value.
//! Text form is lowercase hex, which is also what the canonical messages embed.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::DIGEST_LEN;

/// Output of the protocol digest (SHA-256).
pub type Digest32 = [u8; DIGEST_LEN];

/// Error returned when parsing an identity from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid hex: {0}")]
    Hex(String),
    #[error("expected 32 bytes, found {0}")]
    Length(usize),
}

/// Decodes 64 hex characters into a digest-sized array.
pub fn parse_digest_hex(s: &str) -> Result<Digest32, IdParseError> {
    let bytes = hex::decode(s.trim()).map_err(|e| IdParseError::Hex(e.to_string()))?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| IdParseError::Length(len))
}

macro_rules! identity_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name(pub Digest32);

        impl $name {
            pub const fn new(bytes: Digest32) -> Self {
                $name(bytes)
            }

            pub fn as_bytes(&self) -> &Digest32 {
                &self.0
            }

            pub fn to_bytes(self) -> Digest32 {
                self.0
            }

            pub fn to_hex(&self) -> String {
                hex::encode(self.0)
            }
        }

        impl From<Digest32> for $name {
            fn from(bytes: Digest32) -> Self {
                $name(bytes)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.to_hex())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.to_hex())
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_digest_hex(s).map($name)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

identity_type!(
    /// Public identity of an agent: the raw ed25519 verifying key.
    AgentId
);

identity_type!(
    /// Identity of a target program an intent wants to invoke.
    ProgramId
);

/// Serde adapter for `Digest32` fields carried as hex strings.
pub mod digest_hex {
    use super::{parse_digest_hex, Digest32};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(digest: &Digest32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(digest))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Digest32, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_digest_hex(&s).map_err(serde::de::Error::custom)
    }
}
