// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! The twisted-Edwards curve Ed25519

use core::str::FromStr;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::{clamp_integer, Scalar};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use super::{EllipticCurve, Point};

/// Ed25519, driven through its 32-byte compressed encoding.
///
/// The native Edwards APIs only expose compressed points and clamped
/// scalars, so the affine pair carries the whole encoding big-endian in
/// `x` while `y` stays zero. Negating a y-coordinate is meaningless in
/// this representation; [`subtract`](EllipticCurve::subtract) is
/// overridden with the native point subtraction instead.
pub struct Ed25519 {
    p: BigInt,
}

impl Ed25519 {
    /// Constructs the curve object
    pub fn new() -> Self {
        Self {
            // `p: 2^255 - 19`
            p: BigInt::from_str(
                "57896044618658097711785492504343953926634992332820282019728792003956564819949",
            )
            .unwrap(),
        }
    }

    fn decode(point: &Point) -> Option<EdwardsPoint> {
        if point.x.is_negative() {
            return None;
        }
        let (_, bytes) = point.x.to_bytes_be();
        if bytes.len() > 32 {
            return None;
        }
        let mut encoding = [0u8; 32];
        encoding[32 - bytes.len()..].copy_from_slice(&bytes);
        CompressedEdwardsY(encoding).decompress()
    }

    fn encode(point: &EdwardsPoint) -> Point {
        Point::new(
            BigInt::from_bytes_be(Sign::Plus, point.compress().as_bytes()),
            BigInt::zero(),
        )
    }

    // Scalars are normalized to exactly 32 bytes, then clamped per
    // RFC 7748 §5.1 before reduction.
    fn scalar(k: &[u8]) -> Scalar {
        let mut buf = [0u8; 32];
        if k.len() >= 32 {
            buf.copy_from_slice(&k[..32]);
        } else {
            buf[32 - k.len()..].copy_from_slice(k);
        }
        Scalar::from_bytes_mod_order(clamp_integer(buf))
    }
}

impl Default for Ed25519 {
    fn default() -> Self {
        Self::new()
    }
}

impl EllipticCurve for Ed25519 {
    fn add(&self, p: &Point, q: &Point) -> Point {
        match (Self::decode(p), Self::decode(q)) {
            (Some(p), Some(q)) => Self::encode(&(p + q)),
            _ => Point::identity(),
        }
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Point {
        Self::encode(&EdwardsPoint::mul_base(&Self::scalar(k)))
    }

    fn scalar_mult(&self, p: &Point, k: &[u8]) -> Point {
        match Self::decode(p) {
            Some(p) => Self::encode(&(p * Self::scalar(k))),
            None => Point::identity(),
        }
    }

    /// Membership means the encoding in `x` decompresses; `y` is ignored.
    fn is_on_curve(&self, p: &Point) -> bool {
        Self::decode(p).is_some()
    }

    fn field_prime(&self) -> &BigInt {
        &self.p
    }

    fn subtract(&self, p: &Point, q: &Point) -> Point {
        match (Self::decode(p), Self::decode(q)) {
            (Some(p), Some(q)) => Self::encode(&(p - q)),
            _ => Point::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_normalization_pads_short_inputs() {
        let mut padded = [0u8; 32];
        padded[31] = 9;
        assert_eq!(Ed25519::scalar(&[9]), Ed25519::scalar(&padded));
        assert_eq!(Ed25519::scalar(&[]), Ed25519::scalar(&[0u8; 32]));
    }

    #[test]
    fn generated_points_are_on_curve() {
        let curve = Ed25519::new();
        let p = curve.scalar_base_mult(&[1, 2, 3]);
        assert!(curve.is_on_curve(&p));
        assert!(p.y.is_zero());
    }

    #[test]
    fn subtract_inverts_add() {
        let curve = Ed25519::new();
        let p = curve.scalar_base_mult(&[5]);
        let q = curve.scalar_base_mult(&[11]);
        let sum = curve.add(&p, &q);
        assert_eq!(curve.subtract(&sum, &q), p);
    }

    #[test]
    fn rejects_oversized_encodings() {
        let curve = Ed25519::new();
        let too_wide = Point::new(BigInt::from(1) << 260, BigInt::zero());
        assert!(!curve.is_on_curve(&too_wide));
        let negative = Point::new(BigInt::from(-5), BigInt::zero());
        assert!(!curve.is_on_curve(&negative));
    }
}
