// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod canonical_tests;
pub mod policy_tests;

use ed25519_dalek::{Signer, SigningKey};
use serde_json::json;

use crate::intent::{ActionInput, Intent, IntentBuilder};
use crate::types::id::{AgentId, ProgramId};

pub const NOW_MS: i64 = 1_700_000_000_000;

pub fn signing_key(seed: u8) -> SigningKey {
    SigningKey::from_bytes(&[seed; 32])
}

pub fn agent_id(key: &SigningKey) -> AgentId {
    AgentId(key.verifying_key().to_bytes())
}

pub fn program(byte: u8) -> ProgramId {
    ProgramId([byte; 32])
}

pub fn sign(intent: Intent, key: &SigningKey) -> Intent {
    let sig = key.sign(&intent.canonical_message());
    intent.with_signature(sig.to_bytes().to_vec())
}

/// A swap on `program(2)` signed by `key`, valid for one minute after `NOW_MS`.
pub fn signed_swap(key: &SigningKey, nonce: &str) -> Intent {
    let intent = IntentBuilder::at(agent_id(key), NOW_MS)
        .swap(ActionInput::new(program(2), json!({"amountIn": "1"})))
        .nonce(nonce)
        .build();
    sign(intent, key)
}
