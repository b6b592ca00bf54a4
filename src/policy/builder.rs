// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Policy builder.

use crate::policy::{Policy, TimeWindow};
use crate::types::id::ProgramId;

/// Accumulates rule groups independently; anything left unset stays unrestricted.
#[derive(Clone, Debug, Default)]
pub struct PolicyBuilder {
    policy: Policy,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_tx_amount(mut self, lamports: u64) -> Self {
        self.policy.financial_rules.max_tx_amount_lamports = Some(lamports);
        self
    }

    pub fn daily_limit(mut self, lamports: u64) -> Self {
        self.policy.financial_rules.daily_limit_lamports = Some(lamports);
        self
    }

    pub fn max_slippage(mut self, bps: i32) -> Self {
        self.policy.financial_rules.max_slippage_bps = Some(bps);
        self
    }

    pub fn time_window(mut self, start_hour_utc: i32, end_hour_utc: i32) -> Self {
        self.policy.time_rules.time_window = Some(TimeWindow {
            start_hour_utc,
            end_hour_utc,
        });
        self
    }

    pub fn allow_protocols(mut self, protocols: impl IntoIterator<Item = ProgramId>) -> Self {
        self.policy.protocol_rules.allow_protocols = Some(protocols.into_iter().collect());
        self
    }

    pub fn allow_methods<S: Into<String>>(mut self, methods: impl IntoIterator<Item = S>) -> Self {
        self.policy.protocol_rules.allow_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_risk_score(mut self, score: u32) -> Self {
        self.policy.risk_rules.max_risk_score = Some(score);
        self
    }

    pub fn build(self) -> Policy {
        self.policy
    }
}
