// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! autonex-client: gated submission of agent intents.
//!
//! The [`executor::Executor`] is the only way to hand an intent to a
//! transport, and it always runs the kernel's simulation gate first.
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod transport;
pub mod executor;
pub mod directory;
pub mod client;

pub use client::AutonexClient;
pub use config::ClientConfig;
pub use errors::{BoxError, ClientError};
pub use executor::{ExecuteOptions, ExecutionOutcome, Executor};
pub use transport::{SignedSubmission, SubmissionSigner, SubmissionUnit, Transport};
