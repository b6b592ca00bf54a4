// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Intent builder.

use serde_json::{Map, Value};

use crate::config::DEFAULT_INTENT_TTL_MS;
use crate::intent::Intent;
use crate::types::enums::ActionType;
use crate::types::id::{AgentId, ProgramId};

/// Per-action input shared by the `swap`/`transfer`/`stake`/`vote` helpers.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionInput {
    pub target_program: ProgramId,
    /// Defaults to the action name.
    pub method: Option<String>,
    pub params: Value,
    /// Defaults to `{}`.
    pub constraints: Option<Value>,
}

impl ActionInput {
    pub fn new(target_program: ProgramId, params: Value) -> Self {
        Self {
            target_program,
            method: None,
            params,
            constraints: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn constraints(mut self, constraints: Value) -> Self {
        self.constraints = Some(constraints);
        self
    }
}

/// Staged configuration for an [`Intent`]. `build` yields an unsigned intent.
///
/// A fresh builder targets the agent's own id as a placeholder with an empty
/// method and nonce, so it fails validation until an action and nonce are set.
#[derive(Clone, Debug)]
pub struct IntentBuilder {
    intent: Intent,
}

impl IntentBuilder {
    /// Starts a builder whose expiration is one default TTL from the wall clock.
    pub fn new(agent_id: AgentId) -> Self {
        Self::at(agent_id, chrono::Utc::now().timestamp_millis())
    }

    /// Starts a builder whose expiration is one default TTL after `now_unix_ms`.
    pub fn at(agent_id: AgentId, now_unix_ms: i64) -> Self {
        Self {
            intent: Intent {
                agent_id,
                action_type: ActionType::Generic,
                target_program: ProgramId(agent_id.to_bytes()),
                method: String::new(),
                params: Value::Object(Map::new()),
                constraints: Value::Object(Map::new()),
                expiration_unix_ms: now_unix_ms.saturating_add(DEFAULT_INTENT_TTL_MS),
                nonce: String::new(),
                signature: None,
            },
        }
    }

    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.intent.nonce = nonce.into();
        self
    }

    pub fn constraints(mut self, constraints: Value) -> Self {
        self.intent.constraints = constraints;
        self
    }

    pub fn expiration_unix_ms(mut self, expiration_unix_ms: i64) -> Self {
        self.intent.expiration_unix_ms = expiration_unix_ms;
        self
    }

    pub fn swap(self, input: ActionInput) -> Self {
        self.named_action(ActionType::Swap, input)
    }

    pub fn transfer(self, input: ActionInput) -> Self {
        self.named_action(ActionType::Transfer, input)
    }

    pub fn stake(self, input: ActionInput) -> Self {
        self.named_action(ActionType::Stake, input)
    }

    pub fn vote(self, input: ActionInput) -> Self {
        self.named_action(ActionType::Vote, input)
    }

    /// Arbitrary call. The method is mandatory here; the action kind defaults to `generic`.
    pub fn generic(
        self,
        action_type: Option<ActionType>,
        target_program: ProgramId,
        method: impl Into<String>,
        params: Value,
        constraints: Option<Value>,
    ) -> Self {
        self.set_action(
            action_type.unwrap_or(ActionType::Generic),
            target_program,
            method.into(),
            params,
            constraints,
        )
    }

    pub fn build(self) -> Intent {
        self.intent
    }

    fn named_action(self, action_type: ActionType, input: ActionInput) -> Self {
        let method = input
            .method
            .unwrap_or_else(|| action_type.as_str().to_string());
        self.set_action(action_type, input.target_program, method, input.params, input.constraints)
    }

    fn set_action(
        mut self,
        action_type: ActionType,
        target_program: ProgramId,
        method: String,
        params: Value,
        constraints: Option<Value>,
    ) -> Self {
        self.intent.action_type = action_type;
        self.intent.target_program = target_program;
        self.intent.method = method;
        self.intent.params = params;
        self.intent.constraints = constraints.unwrap_or_else(|| Value::Object(Map::new()));
        self
    }
}
