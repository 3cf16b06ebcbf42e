// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the PAKE2 password-authenticated key exchange
//! protocol over configurable elliptic curves
//!
//! # Overview
//!
//! PAKE2 is a protocol between two parties holding the same low-entropy
//! secret, a "weak key" such as a short passphrase. After two messages
//! over an untrusted channel, both parties hold an identical high-entropy
//! 32-byte session key, and an eavesdropper (or an active attacker who
//! does not know the weak key) learns nothing useful about either secret.
//! The construction follows Boneh and Shoup's "A Graduate Course in
//! Applied Cryptography", Figure 21/15.
//!
//! The two parties must agree on an elliptic curve. Five are available
//! (see [`available_curves`]): the NIST curves `p256`, `p384` and `p521`,
//! the super-isolated curve `siec`, and the twisted-Edwards curve
//! `ed25519`.
//!
//! # Protocol Execution
//!
//! The initiator (role 0) creates its session and immediately has a
//! message to send:
//!
//! ```
//! use pake_ecc::{Pake, Role};
//!
//! let initiator = Pake::new(b"hunter2", Role::Initiator, "siec")?;
//! let message_one = initiator.to_bytes();
//! // send message_one over the wire to the responder
//! # Ok::<(), pake_ecc::PakeError>(())
//! ```
//!
//! The responder (role 1) creates its session with the same weak key,
//! absorbs the initiator's message and answers with its own view; at this
//! point the responder already holds the session key:
//!
//! ```
//! # use pake_ecc::{Pake, Role};
//! # let initiator = Pake::new(b"hunter2", Role::Initiator, "siec")?;
//! # let message_one = initiator.to_bytes();
//! let mut responder = Pake::new(b"hunter2", Role::Responder, "siec")?;
//! responder.update(&message_one)?;
//! let message_two = responder.to_bytes();
//! assert!(responder.have_session_key());
//! // send message_two back to the initiator
//! # Ok::<(), pake_ecc::PakeError>(())
//! ```
//!
//! Absorbing the answer completes the exchange on the initiator's side,
//! and the two keys agree exactly when the weak keys did:
//!
//! ```
//! # use pake_ecc::{Pake, Role};
//! # let mut initiator = Pake::new(b"hunter2", Role::Initiator, "siec")?;
//! # let message_one = initiator.to_bytes();
//! # let mut responder = Pake::new(b"hunter2", Role::Responder, "siec")?;
//! # responder.update(&message_one)?;
//! # let message_two = responder.to_bytes();
//! initiator.update(&message_two)?;
//! assert_eq!(initiator.session_key()?, responder.session_key()?);
//! # Ok::<(), pake_ecc::PakeError>(())
//! ```
//!
//! # Key Confirmation
//!
//! The session key is usable as soon as it exists; deployments that want
//! an explicit confirmation round can exchange bcrypt tags over it with
//! [`Pake::key_confirmation`] and [`Pake::verify_confirmation`]. Skipping
//! confirmation never invalidates the key.

#![deny(unsafe_code)]
#![deny(missing_docs)]

// Error types
pub mod errors;

pub mod group;

mod confirmation;
mod messages;
mod pake;
mod registry;

#[cfg(test)]
mod tests;

// Exports

pub use crate::confirmation::DEFAULT_CONFIRMATION_BUDGET;
pub use crate::errors::PakeError;
pub use crate::pake::{Pake, Role};
pub use crate::registry::{available_curves, CURVE_NAMES};
