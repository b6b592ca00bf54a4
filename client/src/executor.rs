// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Execution Coordinator.
//!
//! Ordering inside one `execute` call is fixed:
//! gate -> payload -> anchor -> sign -> send.
//! There is no way to skip the gate, and nothing is retried.

use autonex_kernel::error::AutonexError;
use autonex_kernel::intent::Intent;
use autonex_kernel::payload::build_submission_payload;
use autonex_kernel::policy::Policy;
use autonex_kernel::simulation::simulate;
use autonex_kernel::ProgramId;

use crate::errors::ClientError;
use crate::telemetry::{METRIC_SIMULATIONS, METRIC_SUBMISSIONS};
use crate::transport::{SubmissionSigner, SubmissionUnit, Transport};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    /// Use this anchor instead of asking the transport.
    pub recent_anchor: Option<String>,
    /// Evaluate expiry against this instant instead of the wall clock.
    pub now_unix_ms: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Confirmation id returned by the transport.
    pub signature: String,
}

pub struct Executor<T> {
    transport: T,
    program_id: ProgramId,
}

impl<T: Transport> Executor<T> {
    pub fn new(transport: T, program_id: ProgramId) -> Self {
        Self {
            transport,
            program_id,
        }
    }

    pub fn program_id(&self) -> ProgramId {
        self.program_id
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Simulates, then builds, signs and sends the submission.
    ///
    /// A denial fails with `SimulationRejected` before the transport is touched.
    /// Transport and signer errors are not re-described: `ClientError::External`
    /// is `#[error(transparent)]`, so its message is the original one, and
    /// [`ClientError::external_ref`] downcasts back to the capability's own type.
    pub async fn execute<S>(
        &self,
        intent: &Intent,
        policy: &Policy,
        signer: &S,
        options: ExecuteOptions,
    ) -> Result<ExecutionOutcome, ClientError>
    where
        S: SubmissionSigner + ?Sized,
    {
        let now = options
            .now_unix_ms
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());

        let verdict = simulate(intent, Some(policy), now);
        if !verdict.allowed {
            metrics::increment_counter!(METRIC_SIMULATIONS, "verdict" => "denied");
            tracing::warn!(agent = %intent.agent_id, nonce = %intent.nonce, reason = %verdict.reason, "Simulation rejected intent");
            return Err(AutonexError::SimulationRejected(verdict.reason).into());
        }
        metrics::increment_counter!(METRIC_SIMULATIONS, "verdict" => "allowed");
        tracing::info!(agent = %intent.agent_id, nonce = %intent.nonce, "Simulation allowed intent");

        let data = build_submission_payload(intent, policy).to_vec();
        tracing::debug!(len = data.len(), "Built submission payload");

        let recent_anchor = match options.recent_anchor {
            Some(anchor) => {
                tracing::debug!("Using caller-supplied anchor");
                anchor
            }
            None => self
                .transport
                .recent_anchor()
                .await
                .map_err(ClientError::External)?,
        };

        let unit = SubmissionUnit {
            program_id: self.program_id,
            payer: signer.public_identity(),
            recent_anchor,
            data,
        };

        let signed = signer.sign(unit).await.map_err(ClientError::External)?;
        let signature = self
            .transport
            .send(signed)
            .await
            .map_err(ClientError::External)?;

        metrics::increment_counter!(METRIC_SUBMISSIONS);
        tracing::info!(%signature, "Submission sent");

        Ok(ExecutionOutcome { signature })
    }
}
