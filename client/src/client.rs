// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Client facade.

use autonex_kernel::error::Result as KernelResult;
use autonex_kernel::intent::{validate_intent, Intent, IntentBuilder};
use autonex_kernel::policy::{validate_policy, Policy, PolicyBuilder};
use autonex_kernel::receipt::{decode_receipt, ExecutionReceipt};
use autonex_kernel::simulation::{simulate, SimulationResult};
use autonex_kernel::{AgentId, Digest32, ProgramId};

use crate::config::ClientConfig;
use crate::directory::InMemoryAgentDirectory;
use crate::errors::ClientError;
use crate::executor::{ExecuteOptions, ExecutionOutcome, Executor};
use crate::transport::{SubmissionSigner, Transport};

/// Bundles configuration, the agent directory and the executor.
pub struct AutonexClient<T> {
    config: ClientConfig,
    agents: InMemoryAgentDirectory,
    executor: Executor<T>,
}

impl<T: Transport> AutonexClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Self {
        tracing::info!(rpc_url = %config.rpc_url, program_id = %config.program_id, "Initializing Autonex client");
        let executor = Executor::new(transport, config.program_id);
        Self {
            config,
            agents: InMemoryAgentDirectory::new(),
            executor,
        }
    }

    /// Installs the tracing subscriber using the configured default filter.
    pub fn init_telemetry(&self) {
        crate::telemetry::init_telemetry(&self.config.log_filter);
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn program_id(&self) -> ProgramId {
        self.executor.program_id()
    }

    pub fn agents(&self) -> &InMemoryAgentDirectory {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut InMemoryAgentDirectory {
        &mut self.agents
    }

    pub fn executor(&self) -> &Executor<T> {
        &self.executor
    }

    pub fn policy_builder(&self) -> PolicyBuilder {
        PolicyBuilder::new()
    }

    pub fn intent_builder(&self, agent_id: AgentId) -> IntentBuilder {
        IntentBuilder::new(agent_id)
    }

    pub fn validate_policy(&self, policy: Option<&Policy>) -> KernelResult<()> {
        validate_policy(policy).map(|_| ())
    }

    pub fn validate_intent(&self, intent: &Intent, now_unix_ms: i64) -> KernelResult<()> {
        validate_intent(intent, now_unix_ms)
    }

    pub fn policy_hash(&self, policy: &Policy) -> Digest32 {
        policy.hash()
    }

    pub fn intent_hash(&self, intent: &Intent) -> Digest32 {
        intent.hash()
    }

    pub fn simulate(&self, intent: &Intent, policy: Option<&Policy>, now_unix_ms: i64) -> SimulationResult {
        simulate(intent, policy, now_unix_ms)
    }

    /// Runs the executor; the configured anchor override applies when the caller gives none.
    pub async fn execute<S>(
        &self,
        intent: &Intent,
        policy: &Policy,
        signer: &S,
        mut options: ExecuteOptions,
    ) -> Result<ExecutionOutcome, ClientError>
    where
        S: SubmissionSigner + ?Sized,
    {
        if options.recent_anchor.is_none() {
            options.recent_anchor = self.config.anchor_override.clone();
        }
        self.executor.execute(intent, policy, signer, options).await
    }

    /// Decodes a receipt and checks its execution hash against its fields.
    pub fn decode_receipt(&self, bytes: &[u8]) -> KernelResult<ExecutionReceipt> {
        let receipt = decode_receipt(bytes)?;
        receipt.verify_deterministic_fields()?;
        Ok(receipt)
    }

    pub fn verify_receipt(&self, receipt: &ExecutionReceipt) -> KernelResult<()> {
        receipt.verify_deterministic_fields()
    }
}
