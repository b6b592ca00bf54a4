// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Capabilities consumed by the executor.
//!
//! Addressing, transaction assembly and key custody live behind these
//! traits. Their errors reach the caller unchanged.

use async_trait::async_trait;
use autonex_kernel::{AgentId, ProgramId};

use crate::errors::BoxError;

/// Unsigned unit of submission: the payload plus what the target needs to route it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionUnit {
    pub program_id: ProgramId,
    /// Identity paying for and authorizing the submission (the signer's).
    pub payer: AgentId,
    /// Recent anchor (e.g. blockhash) bounding the unit's validity.
    pub recent_anchor: String,
    /// Opaque application data: the submission payload.
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedSubmission {
    pub unit: SubmissionUnit,
    pub signature: Vec<u8>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches a recent anchor value for a new submission.
    async fn recent_anchor(&self) -> Result<String, BoxError>;

    /// Sends a signed unit and returns the transport's confirmation id.
    async fn send(&self, submission: SignedSubmission) -> Result<String, BoxError>;
}

#[async_trait]
pub trait SubmissionSigner: Send + Sync {
    fn public_identity(&self) -> AgentId;

    async fn sign(&self, unit: SubmissionUnit) -> Result<SignedSubmission, BoxError>;
}
