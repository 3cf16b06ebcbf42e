// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Defines the EllipticCurve trait to specify the underlying curve used in
//! the key exchange

mod edwards;
mod weierstrass;

pub use edwards::Ed25519;
pub use weierstrass::WeierstrassCurve;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// An affine curve point with non-negative coordinates.
///
/// `(0, 0)` stands for the point at infinity on the short-Weierstrass
/// curves. Ed25519 carries its 32-byte compressed encoding big-endian in
/// `x` with `y` pinned to zero; callers never need to distinguish the two
/// representations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    /// The affine x-coordinate
    pub x: BigInt,
    /// The affine y-coordinate
    pub y: BigInt,
}

impl Point {
    /// Constructs a point from its coordinates
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Self { x, y }
    }

    /// The identity sentinel `(0, 0)`
    pub fn identity() -> Self {
        Self::new(BigInt::zero(), BigInt::zero())
    }

    /// Returns whether this is the identity sentinel
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

/// A curve over which the protocol can run. This abstraction is noted
/// additively, with scalars as plain byte strings.
///
/// All operations are total: on undecodable input they return the identity
/// sentinel rather than failing. Validity of a point is the caller's
/// responsibility via [`is_on_curve`](EllipticCurve::is_on_curve).
pub trait EllipticCurve {
    /// Adds two points
    fn add(&self, p: &Point, q: &Point) -> Point;

    /// Multiplies the curve's base point by a scalar
    fn scalar_base_mult(&self, k: &[u8]) -> Point;

    /// Multiplies an arbitrary point by a scalar
    fn scalar_mult(&self, p: &Point, k: &[u8]) -> Point;

    /// Returns whether the point is a valid element of the curve
    fn is_on_curve(&self, p: &Point) -> bool;

    /// The prime of the underlying field
    fn field_prime(&self) -> &BigInt;

    /// Computes `p - q`.
    ///
    /// For curves with true affine coordinates this is addition of the
    /// negated point; the negated y-coordinate must be reduced into
    /// `[0, p)` before it re-enters the group law. Curves whose point
    /// representation makes coordinate negation meaningless override this
    /// with a native subtraction.
    fn subtract(&self, p: &Point, q: &Point) -> Point {
        let prime = self.field_prime();
        let neg_y = (prime - q.y.mod_floor(prime)).mod_floor(prime);
        self.add(p, &Point::new(q.x.clone(), neg_y))
    }
}
