// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Execution Receipts.
//!
//! Receipt binary format (v0), little-endian:
//!
//! | offset | size     | field                                 |
//! |--------|----------|---------------------------------------|
//! | 0      | 1        | version (0)                           |
//! | 1      | 32       | agentId                               |
//! | 33     | 32       | policyHash                            |
//! | 65     | 8        | timestampUnixMs (i64)                 |
//! | 73     | 1        | status (0 success, 1 rejected, 2 failed) |
//! | 74     | 2        | errorLen (u16)                        |
//! | 76     | errorLen | error (UTF-8)                         |
//!
//! The execution hash is not carried on the wire. It is re-derived from the
//! fields above, so a receipt can be checked without any external signature.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{AutonexError, Result};
use crate::types::enums::ExecutionStatus;
use crate::types::id::{digest_hex, AgentId, Digest32};

pub mod encode;
pub mod decode;

pub use decode::decode_receipt;
pub use encode::encode_receipt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReceipt {
    #[serde(with = "digest_hex")]
    pub execution_hash: Digest32,
    pub agent_id: AgentId,
    #[serde(with = "digest_hex")]
    pub policy_hash: Digest32,
    pub timestamp_unix_ms: i64,
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionReceipt {
    /// Builds a receipt whose execution hash is derived from the given fields.
    pub fn new(
        agent_id: AgentId,
        policy_hash: Digest32,
        timestamp_unix_ms: i64,
        status: ExecutionStatus,
        error: Option<String>,
    ) -> Self {
        let execution_hash = compute_execution_hash(
            &agent_id,
            &policy_hash,
            timestamp_unix_ms,
            status,
            error.as_deref(),
        );
        Self {
            execution_hash,
            agent_id,
            policy_hash,
            timestamp_unix_ms,
            status,
            error,
        }
    }

    /// Recomputes the execution hash from this receipt's own fields and
    /// fails if it differs from the stored one in any byte.
    pub fn verify_deterministic_fields(&self) -> Result<()> {
        let expected = compute_execution_hash(
            &self.agent_id,
            &self.policy_hash,
            self.timestamp_unix_ms,
            self.status,
            self.error.as_deref(),
        );

        if expected != self.execution_hash {
            return Err(AutonexError::ReceiptInvalid(
                "receipt deterministic fields verification failed".into(),
            ));
        }
        Ok(())
    }
}

/// SHA-256 over `agentId || policyHash || timestamp (i64 LE) || status || error`.
pub fn compute_execution_hash(
    agent_id: &AgentId,
    policy_hash: &Digest32,
    timestamp_unix_ms: i64,
    status: ExecutionStatus,
    error: Option<&str>,
) -> Digest32 {
    let mut hasher = Sha256::new();
    hasher.update(agent_id.as_bytes());
    hasher.update(policy_hash);
    hasher.update(timestamp_unix_ms.to_le_bytes());
    hasher.update([status.as_u8()]);
    if let Some(error) = error {
        hasher.update(error.as_bytes());
    }
    hasher.finalize().into()
}
