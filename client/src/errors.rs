// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use autonex_kernel::error::AutonexError;
use thiserror::Error;

/// Error type produced by external capabilities (transport, signer).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Kernel failure, including `SimulationRejected` when the gate denies.
    #[error(transparent)]
    Autonex(#[from] AutonexError),

    /// Transport or signer failure, passed through as the original error.
    #[error(transparent)]
    External(BoxError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// The kernel error, if this is one.
    pub fn as_autonex(&self) -> Option<&AutonexError> {
        match self {
            ClientError::Autonex(e) => Some(e),
            _ => None,
        }
    }

    /// Downcasts an external failure back to the concrete error the capability returned.
    pub fn external_ref<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            ClientError::External(e) => e.downcast_ref::<E>(),
            _ => None,
        }
    }
}
