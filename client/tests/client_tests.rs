use async_trait::async_trait;
use autonex_client::directory::{AgentDirectory, InMemoryAgentDirectory};
use autonex_client::{AutonexClient, BoxError, ClientConfig, ClientError, SignedSubmission, Transport};
use autonex_kernel::agent::Agent;
use autonex_kernel::receipt::{encode_receipt, ExecutionReceipt};
use autonex_kernel::types::enums::{AgentStatus, ExecutionStatus};
use autonex_kernel::AgentId;

struct NoopTransport;

#[async_trait]
impl Transport for NoopTransport {
    async fn recent_anchor(&self) -> Result<String, BoxError> {
        Ok(String::new())
    }

    async fn send(&self, _submission: SignedSubmission) -> Result<String, BoxError> {
        Ok(String::new())
    }
}

#[test]
fn test_directory_upsert_replaces_whole_record() {
    let mut dir = InMemoryAgentDirectory::new();
    let agent = Agent::new(AgentId([1; 32]), "trader", vec!["swap".into()]);

    assert!(dir.upsert(agent.clone()).is_none());
    let paused = agent.with_status(AgentStatus::Paused);
    assert_eq!(dir.upsert(paused.clone()), Some(agent));

    assert_eq!(dir.len(), 1);
    let stored = dir.get(&AgentId([1; 32])).unwrap();
    assert_eq!(stored, paused);
    assert!(!stored.is_active());
    assert!(stored.has_permission("swap"));
}

#[test]
fn test_directory_list_sorted_by_id() {
    let mut dir = InMemoryAgentDirectory::new();
    for b in [5u8, 1, 3] {
        dir.upsert(Agent::new(AgentId([b; 32]), "r", Vec::new()));
    }

    let ids: Vec<u8> = dir.list().iter().map(|a| a.agent_id.0[0]).collect();
    assert_eq!(ids, vec![1, 3, 5]);

    assert!(dir.remove(&AgentId([3; 32])).is_some());
    assert_eq!(dir.list().len(), 2);
    assert!(dir.get(&AgentId([3; 32])).is_none());
}

#[test]
fn test_config_from_lookup() {
    let program = "ab".repeat(32);
    let cfg = ClientConfig::from_lookup(|key| match key {
        "AUTONEX_RPC_URL" => Some("https://rpc.example".to_string()),
        "AUTONEX_PROGRAM_ID" => Some(program.clone()),
        _ => None,
    })
    .unwrap();

    assert_eq!(cfg.rpc_url, "https://rpc.example");
    assert_eq!(cfg.program_id.0, [0xab; 32]);
    assert_eq!(cfg.log_filter, ClientConfig::default().log_filter);
}

#[test]
fn test_config_rejects_bad_program_id() {
    let err = ClientConfig::from_lookup(|key| (key == "AUTONEX_PROGRAM_ID").then(|| "xyz".to_string()))
        .unwrap_err();
    assert!(matches!(err, ClientError::Config(_)));
}

#[test]
fn test_client_decodes_and_verifies_receipts() {
    let client = AutonexClient::new(ClientConfig::default(), NoopTransport);
    let receipt = ExecutionReceipt::new(AgentId([3; 32]), [4; 32], 42, ExecutionStatus::Failed, Some("oops".into()));
    let bytes = encode_receipt(&receipt).unwrap();

    let decoded = client.decode_receipt(&bytes).unwrap();
    assert_eq!(decoded, receipt);
    client.verify_receipt(&decoded).unwrap();

    let mut tampered = decoded;
    tampered.execution_hash[0] ^= 1;
    assert_eq!(client.verify_receipt(&tampered).unwrap_err().code(), "RECEIPT_INVALID");
}

#[test]
fn test_client_agents_are_mutable_in_place() {
    let mut client = AutonexClient::new(ClientConfig::default(), NoopTransport);
    client
        .agents_mut()
        .upsert(Agent::new(AgentId([8; 32]), "voter", vec!["vote".into()]));
    assert_eq!(client.agents().len(), 1);
}

#[test]
fn test_telemetry_init_is_idempotent() {
    let client = AutonexClient::new(ClientConfig::default(), NoopTransport);
    client.init_telemetry();
    client.init_telemetry();
    assert_eq!(client.config().log_filter, "autonex_client=info");
}
