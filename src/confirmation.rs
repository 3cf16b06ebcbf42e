// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Optional key-confirmation round on top of the exchange
//!
//! Each side hashes its session key with bcrypt and sends the tag; the
//! peer verifies it against its own key. The bcrypt cost is not fixed: it
//! climbs until hashing overruns a wall-clock budget, and the last hash
//! that finished inside the budget is the one emitted. Tags are therefore
//! machine-dependent and transcripts nondeterministic.

use core::time::Duration;
use std::time::Instant;

use crate::errors::PakeError;

const MIN_COST: u32 = 4;
const MAX_COST: u32 = 30;

/// Wall-clock budget the cost search spends by default
pub const DEFAULT_CONFIRMATION_BUDGET: Duration = Duration::from_secs(1);

pub(crate) fn tag(key: &[u8], budget: Duration) -> Result<String, PakeError> {
    let start = Instant::now();
    let mut tag = bcrypt::hash(key, MIN_COST).map_err(|_| PakeError::ConfirmationFailed)?;
    for cost in MIN_COST + 1..=MAX_COST {
        if start.elapsed() >= budget {
            break;
        }
        tag = bcrypt::hash(key, cost).map_err(|_| PakeError::ConfirmationFailed)?;
    }
    Ok(tag)
}

pub(crate) fn verify(key: &[u8], tag: &str) -> Result<(), PakeError> {
    match bcrypt::verify(key, tag) {
        Ok(true) => Ok(()),
        _ => Err(PakeError::ConfirmationFailed),
    }
}
