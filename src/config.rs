// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Protocol constants.

/// Length of every digest and identity in the protocol.
pub const DIGEST_LEN: usize = 32;

/// Only supported receipt layout version.
pub const RECEIPT_VERSION: u8 = 0;

/// Fixed receipt header: version(1) + agentId(32) + policyHash(32) + timestamp(8) + status(1) + errorLen(2).
pub const RECEIPT_HEADER_LEN: usize = 76;

/// ASCII tag opening every submission payload.
pub const PAYLOAD_TAG: &[u8; 7] = b"AUTONEX";

/// Submission payload layout version.
pub const PAYLOAD_VERSION: u8 = 0;

/// tag(7) + version(1) + intentHash(32) + policyHash(32).
pub const PAYLOAD_LEN: usize = PAYLOAD_TAG.len() + 1 + DIGEST_LEN * 2;

/// Expiration applied by a fresh intent builder, relative to now.
pub const DEFAULT_INTENT_TTL_MS: i64 = 60_000;

/// Highest valid hour in a policy time window.
pub const MAX_HOUR_UTC: i32 = 23;
