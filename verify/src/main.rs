use anyhow::{Context, Result};
use autonex_kernel::intent::{validate_intent, Intent};
use autonex_kernel::payload::SubmissionPayload;
use autonex_kernel::policy::{validate_policy, Policy};
use autonex_kernel::receipt::decode_receipt;
use autonex_kernel::simulation::simulate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Offline checks for Autonex intents, policies, payloads and receipts", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a receipt (hex, or @path to a binary file) and recheck its execution hash
    Receipt { input: String },
    /// Validate a policy JSON file and print its canonical message and hash
    Policy { file: PathBuf },
    /// Print an intent's canonical message and hash
    Intent {
        file: PathBuf,
        /// Also verify signature and expiry at this unix-ms instant
        #[arg(long)]
        now: Option<i64>,
    },
    /// Decode a hex submission payload
    Payload { hex: String },
    /// Run the simulation gate over an intent and a policy
    Simulate {
        #[arg(long)]
        intent: PathBuf,
        #[arg(long)]
        policy: PathBuf,
        #[arg(long)]
        now: Option<i64>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HashReport {
    canonical_message: String,
    hash: String,
    /// Absent when no validation was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl HashReport {
    fn new(message: Vec<u8>, hash: [u8; 32], check: Option<autonex_kernel::Result<()>>) -> Self {
        Self {
            canonical_message: String::from_utf8_lossy(&message).into_owned(),
            hash: hex::encode(hash),
            valid: check.as_ref().map(|r| r.is_ok()),
            error: check.and_then(|r| r.err()).map(|e| format!("{}: {}", e.code(), e)),
        }
    }
}

fn policy_report(policy: &Policy) -> HashReport {
    HashReport::new(
        policy.canonical_message(),
        policy.hash(),
        Some(validate_policy(Some(policy)).map(|_| ())),
    )
}

fn intent_report(intent: &Intent, now: Option<i64>) -> HashReport {
    HashReport::new(
        intent.canonical_message(),
        intent.hash(),
        now.map(|now| validate_intent(intent, now)),
    )
}

/// Prints the report and fails the process when a requested check failed.
fn emit(report: &HashReport) -> Result<()> {
    print(report)?;
    match &report.error {
        Some(e) => anyhow::bail!("{e}"),
        None => Ok(()),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PayloadReport {
    intent_hash: String,
    policy_hash: String,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_receipt_bytes(input: &str) -> Result<Vec<u8>> {
    match input.strip_prefix('@') {
        Some(path) => fs::read(path).with_context(|| format!("Failed to read {path}")),
        None => hex::decode(input.trim()).context("Receipt is not valid hex"),
    }
}

fn now_or_clock(now: Option<i64>) -> i64 {
    now.unwrap_or_else(|| chrono::Utc::now().timestamp_millis())
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Receipt { input } => {
            let bytes = read_receipt_bytes(&input)?;
            let receipt = decode_receipt(&bytes).map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e))?;
            let check = receipt.verify_deterministic_fields();
            print(&serde_json::json!({
                "valid": check.is_ok(),
                "receipt": receipt,
            }))?;
            if let Err(e) = check {
                anyhow::bail!("{}: {}", e.code(), e);
            }
        }
        Command::Policy { file } => {
            let policy: Policy = read_json(&file)?;
            emit(&policy_report(&policy))?;
        }
        Command::Intent { file, now } => {
            let intent: Intent = read_json(&file)?;
            emit(&intent_report(&intent, now))?;
        }
        Command::Payload { hex: raw } => {
            let bytes = hex::decode(raw.trim()).context("Payload is not valid hex")?;
            let payload =
                SubmissionPayload::from_bytes(&bytes).map_err(|e| anyhow::anyhow!("{}: {}", e.code(), e))?;
            print(&PayloadReport {
                intent_hash: hex::encode(payload.intent_hash),
                policy_hash: hex::encode(payload.policy_hash),
            })?;
        }
        Command::Simulate { intent, policy, now } => {
            let intent: Intent = read_json(&intent)?;
            let policy: Policy = read_json(&policy)?;
            let verdict = simulate(&intent, Some(&policy), now_or_clock(now));
            print(&verdict)?;
            if !verdict.allowed {
                anyhow::bail!("simulation rejected: {}", verdict.reason);
            }
        }
    }

    Ok(())
}
