// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.

//! autonex-kernel: the deterministic trust boundary between autonomous agents
//! and the programs they act on.
//!
//! Intents and policies are hashed through one canonical encoding, intents are
//! verified against the agent's ed25519 identity, and every submission must
//! pass the simulation gate first. Execution receipts travel as a fixed binary
//! layout whose hash is re-derived from the raw fields on decode.

pub mod config;
pub mod error;
pub mod types;
pub mod canonical;
pub mod agent;
pub mod intent;
pub mod policy;
pub mod simulation;
pub mod payload;
pub mod receipt;

pub use error::{AutonexError, Result};
pub use types::id::{AgentId, Digest32, ProgramId};

#[cfg(test)]
pub mod tests;
