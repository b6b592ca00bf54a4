// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Intent validation.

use ed25519_dalek::{Signature, Verifier, VerifyingKey};

use crate::error::{AutonexError, Result};
use crate::intent::Intent;

/// Checks an intent against `now_unix_ms`.
///
/// Order: signature presence, nonce, method, expiry, then the signature
/// itself over the canonical message. The first failing check is reported.
pub fn validate_intent(intent: &Intent, now_unix_ms: i64) -> Result<()> {
    let signature = match intent.signature.as_deref() {
        Some(sig) if !sig.is_empty() => sig,
        _ => return Err(AutonexError::IntentUnsigned),
    };

    if intent.nonce.is_empty() {
        return Err(AutonexError::IntentInvalid("intent nonce is required".into()));
    }

    if intent.method.is_empty() {
        return Err(AutonexError::IntentInvalid("intent method is required".into()));
    }

    // Expiry is strict: an intent expiring exactly now is already dead.
    if intent.expiration_unix_ms <= now_unix_ms {
        return Err(AutonexError::IntentExpired {
            expiration_unix_ms: intent.expiration_unix_ms,
            now_unix_ms,
        });
    }

    let verifying_key = VerifyingKey::from_bytes(intent.agent_id.as_bytes())
        .map_err(|_| AutonexError::IntentInvalid("agent id is not a valid ed25519 public key".into()))?;
    let sig = Signature::from_slice(signature)
        .map_err(|_| AutonexError::IntentInvalid("intent signature encoding is invalid".into()))?;

    verifying_key
        .verify(&intent.canonical_message(), &sig)
        .map_err(|_| AutonexError::IntentInvalid("intent signature verification failed".into()))
}

/// [`validate_intent`] against the wall clock.
pub fn validate_intent_now(intent: &Intent) -> Result<()> {
    validate_intent(intent, chrono::Utc::now().timestamp_millis())
}
