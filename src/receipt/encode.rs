// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Receipt encoding.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::config::{RECEIPT_HEADER_LEN, RECEIPT_VERSION};
use crate::error::{AutonexError, Result};
use crate::receipt::ExecutionReceipt;

fn io_err(e: std::io::Error) -> AutonexError {
    AutonexError::ReceiptInvalid(format!("receipt write failed: {e}"))
}

/// Writes `receipt` in the v0 layout. The execution hash is not written.
pub fn encode_receipt(receipt: &ExecutionReceipt) -> Result<Vec<u8>> {
    let error = receipt.error.as_deref().unwrap_or_default().as_bytes();
    let error_len = u16::try_from(error.len()).map_err(|_| {
        AutonexError::ReceiptInvalid(format!(
            "receipt error is {} bytes, limit is {}",
            error.len(),
            u16::MAX
        ))
    })?;

    let mut buf = Vec::with_capacity(RECEIPT_HEADER_LEN + error.len());
    buf.write_u8(RECEIPT_VERSION).map_err(io_err)?;
    buf.extend_from_slice(receipt.agent_id.as_bytes());
    buf.extend_from_slice(&receipt.policy_hash);
    buf.write_i64::<LittleEndian>(receipt.timestamp_unix_ms).map_err(io_err)?;
    buf.write_u8(receipt.status.as_u8()).map_err(io_err)?;
    buf.write_u16::<LittleEndian>(error_len).map_err(io_err)?;
    buf.extend_from_slice(error);

    Ok(buf)
}
