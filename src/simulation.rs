// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Simulation Gate.
//!
//! The single decision function that may authorize a submission. It never
//! fails: every validation error becomes a denial with a readable reason.
//!
//! Financial, time and risk rules are only shape-checked here (through
//! [`validate_policy`]). Evaluating their thresholds against intent
//! parameters is an extension point and is intentionally not done.

use serde::{Deserialize, Serialize};

use crate::intent::{validate_intent, Intent};
use crate::policy::{validate_policy, Policy};

pub const REASON_ALLOWED: &str = "Allowed";
pub const REASON_PROGRAM_NOT_ALLOWED: &str = "Target program is not allowlisted by policy";
pub const REASON_METHOD_NOT_ALLOWED: &str = "Method is not allowlisted by policy";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub allowed: bool,
    pub reason: String,
}

impl SimulationResult {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: REASON_ALLOWED.to_string(),
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: reason.into(),
        }
    }
}

/// Decides whether `intent` may be submitted under `policy` at `now_unix_ms`.
///
/// Steps: policy validation, intent validation, target allow-list, then the
/// method allow-list when it is non-empty.
pub fn simulate(intent: &Intent, policy: Option<&Policy>, now_unix_ms: i64) -> SimulationResult {
    let policy = match validate_policy(policy) {
        Ok(policy) => policy,
        Err(e) => return SimulationResult::deny(format!("{}: {}", e.code(), e)),
    };

    if let Err(e) = validate_intent(intent, now_unix_ms) {
        return SimulationResult::deny(format!("{}: {}", e.code(), e));
    }

    let rules = &policy.protocol_rules;
    if !rules.allows_program(&intent.target_program) {
        return SimulationResult::deny(REASON_PROGRAM_NOT_ALLOWED);
    }

    if !rules.allows_method(&intent.method) {
        return SimulationResult::deny(REASON_METHOD_NOT_ALLOWED);
    }

    SimulationResult::allow()
}

/// [`simulate`] against the wall clock.
pub fn simulate_now(intent: &Intent, policy: Option<&Policy>) -> SimulationResult {
    simulate(intent, policy, chrono::Utc::now().timestamp_millis())
}
