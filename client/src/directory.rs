// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Agent directory.

use autonex_kernel::agent::Agent;
use autonex_kernel::AgentId;
use rustc_hash::FxHashMap;

/// Keyed lookup of agent records. No ordering or freshness guarantee is implied.
pub trait AgentDirectory {
    fn get(&self, agent_id: &AgentId) -> Option<Agent>;
    fn list(&self) -> Vec<Agent>;
}

/// Process-local directory. Nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAgentDirectory {
    agents: FxHashMap<AgentId, Agent>,
}

impl InMemoryAgentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record, returning the one it replaced.
    pub fn upsert(&mut self, agent: Agent) -> Option<Agent> {
        self.agents.insert(agent.agent_id, agent)
    }

    pub fn remove(&mut self, agent_id: &AgentId) -> Option<Agent> {
        self.agents.remove(agent_id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl AgentDirectory for InMemoryAgentDirectory {
    fn get(&self, agent_id: &AgentId) -> Option<Agent> {
        self.agents.get(agent_id).cloned()
    }

    /// Records sorted by id, so listings are stable across runs.
    fn list(&self) -> Vec<Agent> {
        let mut out: Vec<Agent> = self.agents.values().cloned().collect();
        out.sort_by(|a, b| a.agent_id.cmp(&b.agent_id));
        out
    }
}
