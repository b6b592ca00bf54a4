// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Policy validation.

use crate::config::MAX_HOUR_UTC;
use crate::error::{AutonexError, Result};
use crate::policy::Policy;

/// Checks that a policy is present and well-formed, returning it on success.
pub fn validate_policy(policy: Option<&Policy>) -> Result<&Policy> {
    let policy = policy.ok_or(AutonexError::PolicyMissing)?;

    if let Some(bps) = policy.financial_rules.max_slippage_bps {
        if bps < 0 {
            return Err(AutonexError::PolicyInvalid(
                "maxSlippageBps must be a non-negative integer".into(),
            ));
        }
    }

    if let Some(window) = policy.time_rules.time_window {
        let in_range = |h: i32| (0..=MAX_HOUR_UTC).contains(&h);
        if !in_range(window.start_hour_utc) || !in_range(window.end_hour_utc) {
            return Err(AutonexError::PolicyInvalid(
                "timeWindow hours must be integers in [0, 23]".into(),
            ));
        }
    }

    // Without a protocol allow-list the policy could authorize any call target.
    let has_protocols = policy
        .protocol_rules
        .allow_protocols
        .as_ref()
        .is_some_and(|p| !p.is_empty());
    if !has_protocols {
        return Err(AutonexError::PolicyInvalid(
            "protocolRules.allowProtocols must be a non-empty allow-list".into(),
        ));
    }

    Ok(policy)
}
