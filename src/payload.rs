// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Submission payload.
//!
//! Layout (72 bytes):
//! `[0..7) "AUTONEX" | [7] version 0 | [8..40) intentHash | [40..72) policyHash`
//!
//! The intent hash is computed with the signature excluded, so the same
//! proposal binds to the same payload however it was signed.

use crate::config::{DIGEST_LEN, PAYLOAD_LEN, PAYLOAD_TAG, PAYLOAD_VERSION};
use crate::error::{AutonexError, Result};
use crate::intent::Intent;
use crate::policy::Policy;
use crate::types::id::Digest32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub intent_hash: Digest32,
    pub policy_hash: Digest32,
}

impl SubmissionPayload {
    pub fn new(intent: &Intent, policy: &Policy) -> Self {
        Self {
            intent_hash: intent.hash(),
            policy_hash: policy.hash(),
        }
    }

    pub fn to_bytes(&self) -> [u8; PAYLOAD_LEN] {
        let mut out = [0u8; PAYLOAD_LEN];
        let tag_len = PAYLOAD_TAG.len();
        out[..tag_len].copy_from_slice(PAYLOAD_TAG);
        out[tag_len] = PAYLOAD_VERSION;
        out[tag_len + 1..tag_len + 1 + DIGEST_LEN].copy_from_slice(&self.intent_hash);
        out[tag_len + 1 + DIGEST_LEN..].copy_from_slice(&self.policy_hash);
        out
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != PAYLOAD_LEN {
            return Err(AutonexError::PayloadInvalid(format!(
                "payload must be {} bytes, found {}",
                PAYLOAD_LEN,
                data.len()
            )));
        }

        let tag_len = PAYLOAD_TAG.len();
        if &data[..tag_len] != PAYLOAD_TAG {
            return Err(AutonexError::PayloadInvalid("bad payload tag".into()));
        }
        if data[tag_len] != PAYLOAD_VERSION {
            return Err(AutonexError::PayloadInvalid(format!(
                "unsupported payload version: {}",
                data[tag_len]
            )));
        }

        let mut intent_hash = [0u8; DIGEST_LEN];
        let mut policy_hash = [0u8; DIGEST_LEN];
        intent_hash.copy_from_slice(&data[tag_len + 1..tag_len + 1 + DIGEST_LEN]);
        policy_hash.copy_from_slice(&data[tag_len + 1 + DIGEST_LEN..]);

        Ok(Self {
            intent_hash,
            policy_hash,
        })
    }
}

/// Builds the 72-byte payload for an intent under a policy.
pub fn build_submission_payload(intent: &Intent, policy: &Policy) -> [u8; PAYLOAD_LEN] {
    SubmissionPayload::new(intent, policy).to_bytes()
}
