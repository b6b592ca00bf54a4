// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

/// Every failure the kernel can report. All of them are terminal at this layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutonexError {
    #[error("intent is unsigned")]
    IntentUnsigned,

    #[error("intent is expired (expiration {expiration_unix_ms} <= now {now_unix_ms})")]
    IntentExpired {
        expiration_unix_ms: i64,
        now_unix_ms: i64,
    },

    #[error("{0}")]
    IntentInvalid(String),

    #[error("policy is required")]
    PolicyMissing,

    #[error("{0}")]
    PolicyInvalid(String),

    #[error("simulation rejected: {0}")]
    SimulationRejected(String),

    #[error("{0}")]
    ReceiptInvalid(String),

    #[error("{0}")]
    PayloadInvalid(String),
}

impl AutonexError {
    /// Stable machine-readable code, used as the prefix of simulation denial reasons.
    pub fn code(&self) -> &'static str {
        match self {
            AutonexError::IntentUnsigned => "INTENT_UNSIGNED",
            AutonexError::IntentExpired { .. } => "INTENT_EXPIRED",
            AutonexError::IntentInvalid(_) => "INTENT_INVALID",
            AutonexError::PolicyMissing => "POLICY_MISSING",
            AutonexError::PolicyInvalid(_) => "POLICY_INVALID",
            AutonexError::SimulationRejected(_) => "SIMULATION_REJECTED",
            AutonexError::ReceiptInvalid(_) => "RECEIPT_INVALID",
            AutonexError::PayloadInvalid(_) => "PAYLOAD_INVALID",
        }
    }
}

pub type Result<T> = std::result::Result<T, AutonexError>;
