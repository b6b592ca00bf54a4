// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol Enums.

use serde::{Deserialize, Serialize};

/// Kind of action an intent proposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Swap,
    Transfer,
    Stake,
    Vote,
    #[default]
    Generic,
}

impl ActionType {
    /// Name used in the canonical intent message and as the default method.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Swap => "swap",
            ActionType::Transfer => "transfer",
            ActionType::Stake => "stake",
            ActionType::Vote => "vote",
            ActionType::Generic => "generic",
        }
    }
}

/// Outcome recorded in an execution receipt. The discriminant is the wire byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ExecutionStatus {
    Success = 0,
    Rejected = 1,
    Failed = 2,
}

impl ExecutionStatus {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(ExecutionStatus::Success),
            1 => Some(ExecutionStatus::Rejected),
            2 => Some(ExecutionStatus::Failed),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AgentStatus {
    #[default]
    Active = 0,
    Paused = 1,
    Revoked = 2,
}
