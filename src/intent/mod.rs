// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Agent intents.
//!
//! An intent is a signed, time-bounded proposal to call `method` on
//! `target_program`. The signature covers the canonical message of every
//! other field, so an intent is immutable once signed: changing anything
//! means rebuilding and re-signing.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::canonical::{canonical_bytes, digest32};
use crate::types::enums::ActionType;
use crate::types::id::{AgentId, Digest32, ProgramId};

pub mod builder;
pub mod validate;

pub use builder::{ActionInput, IntentBuilder};
pub use validate::{validate_intent, validate_intent_now};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub agent_id: AgentId,
    pub action_type: ActionType,
    pub target_program: ProgramId,
    pub method: String,
    pub params: Value,
    pub constraints: Value,
    pub expiration_unix_ms: i64,
    pub nonce: String,
    /// Detached ed25519 signature over [`Intent::canonical_message`].
    #[serde(default, skip_serializing_if = "Option::is_none", with = "signature_hex")]
    pub signature: Option<Vec<u8>>,
}

impl Intent {
    /// The exact bytes an agent signs. The signature field never participates.
    pub fn canonical_message(&self) -> Vec<u8> {
        canonical_bytes(&self.signing_payload())
    }

    /// SHA-256 of the canonical message; this is what the submission payload carries.
    pub fn hash(&self) -> Digest32 {
        digest32(&self.canonical_message())
    }

    /// Copy of this intent with the signature stripped.
    pub fn unsigned(&self) -> Intent {
        Intent {
            signature: None,
            ..self.clone()
        }
    }

    /// Attaches a detached signature, producing a new value.
    pub fn with_signature(self, signature: impl Into<Vec<u8>>) -> Intent {
        Intent {
            signature: Some(signature.into()),
            ..self
        }
    }

    pub fn is_signed(&self) -> bool {
        self.signature.as_ref().is_some_and(|s| !s.is_empty())
    }

    fn signing_payload(&self) -> Value {
        json!({
            "agentId": self.agent_id.to_hex(),
            "actionType": self.action_type.as_str(),
            "targetProgram": self.target_program.to_hex(),
            "method": self.method,
            "params": self.params,
            "constraints": self.constraints,
            "expirationUnixMs": self.expiration_unix_ms,
            "nonce": self.nonce,
        })
    }
}

mod signature_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(sig: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match sig {
            Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error> {
        let text: Option<String> = Option::deserialize(deserializer)?;
        text.map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .transpose()
    }
}
