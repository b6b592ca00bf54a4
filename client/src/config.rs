// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use autonex_kernel::ProgramId;

use crate::errors::ClientError;

pub const ENV_RPC_URL: &str = "AUTONEX_RPC_URL";
pub const ENV_PROGRAM_ID: &str = "AUTONEX_PROGRAM_ID";
pub const ENV_LOG: &str = "AUTONEX_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint handed to whichever transport the host wires in.
    pub rpc_url: String,
    /// Program that receives submission payloads.
    pub program_id: ProgramId,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Fixed anchor value used instead of asking the transport (deterministic runs).
    pub anchor_override: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8899".to_string(),
            program_id: ProgramId::default(),
            log_filter: "autonex_client=info".to_string(),
            anchor_override: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `AUTONEX_RPC_URL`, `AUTONEX_PROGRAM_ID` and `AUTONEX_LOG`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut cfg = Self::default();

        if let Some(url) = lookup(ENV_RPC_URL) {
            cfg.rpc_url = url;
        }
        if let Some(raw) = lookup(ENV_PROGRAM_ID) {
            cfg.program_id = raw
                .parse()
                .map_err(|e| ClientError::Config(format!("{ENV_PROGRAM_ID}: {e}")))?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            cfg.log_filter = filter;
        }

        Ok(cfg)
    }
}
