// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Agent records.

use serde::{Deserialize, Serialize};

use crate::types::enums::AgentStatus;
use crate::types::id::AgentId;

/// An agent known to the host. Records are replaced wholesale, never patched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub agent_id: AgentId,
    pub role: String,
    pub permissions: Vec<String>,
    pub status: AgentStatus,
}

impl Agent {
    pub fn new(agent_id: AgentId, role: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            agent_id,
            role: role.into(),
            permissions,
            status: AgentStatus::Active,
        }
    }

    /// Returns a copy of this record with a different status.
    pub fn with_status(&self, status: AgentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AgentStatus::Active
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }
}
