// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! A list of error types which are produced during an execution of the protocol
use displaydoc::Display;
use thiserror::Error;

/// Represents an error which occurs during an execution of the protocol
#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
pub enum PakeError {
    /// The curve name is not in the registry
    UnknownCurve,
    /// A fixed generator failed the curve membership check
    BadGenerator,
    /// Reading from the system randomness source failed
    RandomSourceFailed,
    /// The peer message could not be decoded
    MalformedMessage,
    /// The peer message carries the same role as this session
    RoleCollision,
    /// A received point does not lie on the configured curve
    PointNotOnCurve,
    /// The session key has not been derived yet
    NoSessionKey,
    /// The key confirmation tag failed to verify
    ConfirmationFailed,
}
