// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Provides the main PAKE session API
//!
//! The construction is PAKE2 from Boneh and Shoup's "A Graduate Course in
//! Applied Cryptography" (Figure 21/15): both parties mask a fresh
//! ephemeral point with a multiple of a fixed generator derived from the
//! weak key, and the shared point `Z = α·(peer − own_mask)` feeds the
//! session-key hash.

use core::time::Duration;

use num_bigint::BigInt;
use num_traits::Zero;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::confirmation;
use crate::errors::PakeError;
use crate::group::{EllipticCurve, Point};
use crate::messages::{coordinates, PublicView};
use crate::registry::{init_curve, CurveInit};

/// The byte width of the ephemeral secret α, uniform across curves
const ALPHA_LENGTH: usize = 32;

/// The two parts a party can play in the exchange
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Role 0: sends X with its first message
    Initiator,
    /// Role 1: answers with Y once X has arrived
    Responder,
}

impl Role {
    pub(crate) fn as_wire(self) -> u8 {
        match self {
            Role::Initiator => 0,
            Role::Responder => 1,
        }
    }
}

/// A PAKE session, held by one party for the duration of the exchange.
///
/// A session is created with [`Pake::new`], advanced exclusively through
/// [`Pake::update`] with the peer's [`Pake::to_bytes`] output, and yields
/// the shared 32-byte secret through [`Pake::session_key`]. The weak key,
/// the ephemeral secret and the session key are zeroized on drop.
pub struct Pake {
    role: Role,
    curve: Box<dyn EllipticCurve + Send + Sync>,
    u: Point,
    v: Point,
    pw: Vec<u8>,
    u_pw: Option<Point>,
    v_pw: Option<Point>,
    alpha: Option<[u8; ALPHA_LENGTH]>,
    x: Option<Point>,
    y: Option<Point>,
    z: Option<Point>,
    k: Option<[u8; 32]>,
    verified: bool,
}

impl core::fmt::Debug for Pake {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pake")
            .field("role", &self.role)
            .field("u", &self.u)
            .field("v", &self.v)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("verified", &self.verified)
            .finish()
    }
}

impl Pake {
    /// Creates a session over the named curve from the weak key.
    ///
    /// An initiator computes its outgoing point X right away; a responder
    /// stays passive until the first [`update`](Self::update).
    pub fn new(pw: &[u8], role: Role, curve_name: &str) -> Result<Self, PakeError> {
        let CurveInit { curve, u, v } = init_curve(curve_name)?;

        let (u_pw, v_pw, alpha, x) = match role {
            Role::Initiator => {
                let u_pw = curve.scalar_mult(&u, pw);
                let v_pw = curve.scalar_mult(&v, pw);
                let alpha = random_scalar()?;
                let x = curve.add(&u_pw, &curve.scalar_base_mult(&alpha));
                (Some(u_pw), Some(v_pw), Some(alpha), Some(x))
            }
            Role::Responder => (None, None, None, None),
        };

        Ok(Self {
            role,
            curve,
            u,
            v,
            pw: pw.to_vec(),
            u_pw,
            v_pw,
            alpha,
            x,
            y: None,
            z: None,
            k: None,
            verified: false,
        })
    }

    /// Canonical encoding of the session's public view, fit for the wire
    pub fn to_bytes(&self) -> Vec<u8> {
        let (uu, uv) = coordinates(Some(&self.u));
        let (vu, vv) = coordinates(Some(&self.v));
        let (xu, xv) = coordinates(self.x.as_ref());
        let (yu, yv) = coordinates(self.y.as_ref());
        PublicView {
            role: self.role.as_wire(),
            uu,
            uv,
            vu,
            vv,
            xu,
            xv,
            yu,
            yv,
        }
        .encode()
    }

    /// Consumes the peer's public view and advances the exchange.
    ///
    /// A responder derives Y, Z and the session key from the peer's X; an
    /// initiator derives Z and the session key from the peer's Y. Once a
    /// session key exists further updates are accepted but ignored, so the
    /// first completed exchange wins. A message carrying this session's
    /// own role is always rejected.
    pub fn update(&mut self, peer_bytes: &[u8]) -> Result<(), PakeError> {
        let peer = PublicView::decode(peer_bytes)?;
        if peer.role == self.role.as_wire() {
            return Err(PakeError::RoleCollision);
        }
        if self.k.is_some() {
            return Ok(());
        }
        match self.role {
            Role::Responder => self.respond(&peer),
            Role::Initiator => self.finish(&peer),
        }
    }

    // Responder half of the exchange: X arrives, Y and K leave.
    fn respond(&mut self, peer: &PublicView) -> Result<(), PakeError> {
        let Some(x) = peer.x() else {
            return Ok(());
        };
        if !self.curve.is_on_curve(&x) {
            return Err(PakeError::PointNotOnCurve);
        }

        let u_pw = self.curve.scalar_mult(&self.u, &self.pw);
        let v_pw = self.curve.scalar_mult(&self.v, &self.pw);
        let alpha = random_scalar()?;
        let y = self.curve.add(&v_pw, &self.curve.scalar_base_mult(&alpha));
        let z = self
            .curve
            .scalar_mult(&self.curve.subtract(&x, &u_pw), &alpha);

        self.k = Some(derive_key(&self.pw, &x, &y, &z));
        self.u_pw = Some(u_pw);
        self.v_pw = Some(v_pw);
        self.alpha = Some(alpha);
        self.x = Some(x);
        self.y = Some(y);
        self.z = Some(z);
        Ok(())
    }

    // Initiator half: Y arrives, K is derived against the retained X.
    fn finish(&mut self, peer: &PublicView) -> Result<(), PakeError> {
        let Some(y) = peer.y() else {
            return Ok(());
        };
        let (Some(x), Some(v_pw), Some(alpha)) = (self.x.clone(), self.v_pw.clone(), self.alpha)
        else {
            return Ok(());
        };
        if !self.curve.is_on_curve(&y) {
            return Err(PakeError::PointNotOnCurve);
        }

        let z = self
            .curve
            .scalar_mult(&self.curve.subtract(&y, &v_pw), &alpha);

        self.k = Some(derive_key(&self.pw, &x, &y, &z));
        self.y = Some(y);
        self.z = Some(z);
        Ok(())
    }

    /// Returns the derived 32-byte session key, or [`PakeError::NoSessionKey`]
    /// while the exchange is still in flight
    pub fn session_key(&self) -> Result<[u8; 32], PakeError> {
        self.k.ok_or(PakeError::NoSessionKey)
    }

    /// Returns whether a session key has been derived
    pub fn have_session_key(&self) -> bool {
        self.k.is_some()
    }

    /// Produces a confirmation tag over the session key, spending up to
    /// `budget` of wall-clock time on the underlying cost search
    pub fn key_confirmation(&self, budget: Duration) -> Result<String, PakeError> {
        confirmation::tag(&self.session_key()?, budget)
    }

    /// Checks the peer's confirmation tag against the session key and
    /// marks the session verified on success
    pub fn verify_confirmation(&mut self, tag: &str) -> Result<(), PakeError> {
        confirmation::verify(&self.session_key()?, tag)?;
        self.verified = true;
        Ok(())
    }

    /// Returns whether a peer confirmation tag has been verified.
    /// Confirmation is optional; an unverified session key is still valid.
    pub fn is_verified(&self) -> bool {
        self.verified
    }

    #[cfg(test)]
    pub(crate) fn shared_point(&self) -> Option<&Point> {
        self.z.as_ref()
    }
}

impl Drop for Pake {
    fn drop(&mut self) {
        self.pw.zeroize();
        if let Some(alpha) = self.alpha.as_mut() {
            alpha.zeroize();
        }
        if let Some(k) = self.k.as_mut() {
            k.zeroize();
        }
    }
}

fn random_scalar() -> Result<[u8; ALPHA_LENGTH], PakeError> {
    let mut bytes = [0u8; ALPHA_LENGTH];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| PakeError::RandomSourceFailed)?;
    Ok(bytes)
}

// K = H(pw ‖ X ‖ Y ‖ Z) over the minimal big-endian coordinate bytes.
fn derive_key(pw: &[u8], x: &Point, y: &Point, z: &Point) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(pw);
    for coordinate in [&x.x, &x.y, &y.x, &y.y, &z.x, &z.y] {
        hasher.update(minimal_bytes(coordinate));
    }
    hasher.finalize().into()
}

// Minimal-length big-endian encoding; zero encodes as the empty string.
fn minimal_bytes(n: &BigInt) -> Vec<u8> {
    if n.is_zero() {
        Vec::new()
    } else {
        n.to_bytes_be().1
    }
}
