// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub const METRIC_SIMULATIONS: &str = "autonex_simulations_total";
pub const METRIC_SUBMISSIONS: &str = "autonex_submissions_total";

/// Initialize telemetry (logs + metric descriptions).
///
/// `RUST_LOG` wins over `default_filter`. No metrics exporter is installed;
/// the host process owns the recorder.
pub fn init_telemetry(default_filter: &str) {
    let installed = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if installed.is_err() {
        tracing::warn!("Tracing subscriber already set. Telemetry re-initialized?");
    }

    metrics::describe_counter!(METRIC_SIMULATIONS, "Simulation gate verdicts, labelled by verdict");
    metrics::describe_counter!(METRIC_SUBMISSIONS, "Submissions handed to the transport");
}
