// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Receipt decoding.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::config::{DIGEST_LEN, RECEIPT_HEADER_LEN, RECEIPT_VERSION};
use crate::error::{AutonexError, Result};
use crate::receipt::ExecutionReceipt;
use crate::types::enums::ExecutionStatus;
use crate::types::id::AgentId;

fn invalid(msg: impl Into<String>) -> AutonexError {
    AutonexError::ReceiptInvalid(msg.into())
}

fn read_digest(cursor: &mut Cursor<&[u8]>) -> Result<[u8; DIGEST_LEN]> {
    let mut out = [0u8; DIGEST_LEN];
    cursor
        .read_exact(&mut out)
        .map_err(|_| invalid("receipt truncated"))?;
    Ok(out)
}

/// Decodes a v0 receipt and derives its execution hash.
///
/// Never returns a partially decoded receipt. Bytes past `76 + errorLen` are ignored.
/// A status byte above 2 is rejected as `ReceiptInvalid` rather than read as `failed`.
pub fn decode_receipt(data: &[u8]) -> Result<ExecutionReceipt> {
    if data.len() < RECEIPT_HEADER_LEN {
        return Err(invalid(format!(
            "receipt too short: {} bytes, need at least {}",
            data.len(),
            RECEIPT_HEADER_LEN
        )));
    }

    let mut cursor = Cursor::new(data);

    let version = cursor.read_u8().map_err(|_| invalid("receipt truncated"))?;
    if version != RECEIPT_VERSION {
        return Err(invalid(format!("unsupported receipt version: {version}")));
    }

    let agent_id = AgentId(read_digest(&mut cursor)?);
    let policy_hash = read_digest(&mut cursor)?;
    let timestamp_unix_ms = cursor
        .read_i64::<LittleEndian>()
        .map_err(|_| invalid("receipt truncated"))?;

    let status_byte = cursor.read_u8().map_err(|_| invalid("receipt truncated"))?;
    let status = ExecutionStatus::from_u8(status_byte)
        .ok_or_else(|| invalid(format!("unknown receipt status: {status_byte}")))?;

    let error_len = cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| invalid("receipt truncated"))? as usize;
    let error_end = RECEIPT_HEADER_LEN + error_len;
    if error_end > data.len() {
        return Err(invalid(format!(
            "invalid error length: {} bytes declared, {} available",
            error_len,
            data.len() - RECEIPT_HEADER_LEN
        )));
    }

    let error = if error_len > 0 {
        let text = std::str::from_utf8(&data[RECEIPT_HEADER_LEN..error_end])
            .map_err(|_| invalid("receipt error is not valid UTF-8"))?;
        Some(text.to_string())
    } else {
        None
    };

    Ok(ExecutionReceipt::new(
        agent_id,
        policy_hash,
        timestamp_unix_ms,
        status,
        error,
    ))
}
