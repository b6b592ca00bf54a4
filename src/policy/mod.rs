// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Local restriction policies.
//!
//! A policy is four independent rule groups. Unset fields mean "no
//! restriction", except the protocol allow-list, which must always be
//! present and non-empty for the policy to be valid.
//!
//! Only the shape of the financial, time and risk groups is validated; they
//! are hashed and bound into submissions but not evaluated against intents.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::canonical::{canonical_bytes, digest32};
use crate::types::id::{Digest32, ProgramId};

pub mod builder;
pub mod validate;

pub use builder::PolicyBuilder;
pub use validate::validate_policy;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialRules {
    pub max_tx_amount_lamports: Option<u64>,
    pub daily_limit_lamports: Option<u64>,
    pub max_slippage_bps: Option<i32>,
}

/// Inclusive UTC hour window. Both bounds must lie in `[0, 23]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_hour_utc: i32,
    pub end_hour_utc: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRules {
    pub time_window: Option<TimeWindow>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProtocolRules {
    pub allow_protocols: Option<Vec<ProgramId>>,
    /// Empty or absent means any method.
    pub allow_methods: Option<Vec<String>>,
}

impl ProtocolRules {
    pub fn allows_program(&self, program: &ProgramId) -> bool {
        self.allow_protocols
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|p| p == program)
    }

    pub fn allows_method(&self, method: &str) -> bool {
        match self.allow_methods.as_deref() {
            None | Some([]) => true,
            Some(methods) => methods.iter().any(|m| m == method),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskRules {
    pub max_risk_score: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policy {
    pub financial_rules: FinancialRules,
    pub time_rules: TimeRules,
    pub protocol_rules: ProtocolRules,
    pub risk_rules: RiskRules,
}

impl Policy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::new()
    }

    /// The exact bytes hashed to bind this policy into submissions and receipts.
    ///
    /// Lamport amounts render as decimal strings. Unset scalars and an unset
    /// time window render as explicit `null`, unset allow-lists as `[]`.
    pub fn canonical_message(&self) -> Vec<u8> {
        let financial = &self.financial_rules;
        let protocol = &self.protocol_rules;

        let payload = json!({
            "financialRules": {
                "maxTxAmountLamports": financial.max_tx_amount_lamports.map(|v| v.to_string()),
                "dailyLimitLamports": financial.daily_limit_lamports.map(|v| v.to_string()),
                "maxSlippageBps": financial.max_slippage_bps,
            },
            "timeRules": self.time_rules.time_window.map(|w| json!({
                "startHourUtc": w.start_hour_utc,
                "endHourUtc": w.end_hour_utc,
            })),
            "protocolRules": {
                "allowProtocols": protocol
                    .allow_protocols
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(|p| Value::String(p.to_hex()))
                    .collect::<Vec<_>>(),
                "allowMethods": protocol.allow_methods.clone().unwrap_or_default(),
            },
            "riskRules": {
                "maxRiskScore": self.risk_rules.max_risk_score,
            },
        });

        canonical_bytes(&payload)
    }

    pub fn hash(&self) -> Digest32 {
        digest32(&self.canonical_message())
    }
}
