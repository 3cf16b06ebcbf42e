// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Short-Weierstrass curves `y² = x³ + ax + b` over a prime field, in
//! affine coordinates

use core::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use super::{EllipticCurve, Point};

fn dec(digits: &str) -> BigInt {
    BigInt::from_str(digits).unwrap()
}

fn hex(digits: &[u8]) -> BigInt {
    BigInt::parse_bytes(digits, 16).unwrap()
}

/// A short-Weierstrass curve described by its field prime, the two curve
/// coefficients and a base point.
///
/// One implementation covers every such curve in the registry; the
/// per-curve constructors below only differ in their literals. Group
/// operations run in variable time.
pub struct WeierstrassCurve {
    p: BigInt,
    a: BigInt,
    b: BigInt,
    gx: BigInt,
    gy: BigInt,
}

impl WeierstrassCurve {
    /// NIST P-256 (FIPS 186-4)
    pub fn p256() -> Self {
        Self {
            // `p: 2^256 - 2^224 + 2^192 + 2^96 - 1`
            p: dec("115792089210356248762697446949407573530086143415290314195533631308867097853951"),
            a: BigInt::from(-3),
            b: hex(b"5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
            gx: hex(b"6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
            gy: hex(b"4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
        }
    }

    /// NIST P-384 (FIPS 186-4)
    pub fn p384() -> Self {
        Self {
            // `p: 2^384 - 2^128 - 2^96 + 2^32 - 1`
            p: dec(
                "394020061963944792122790401001436138050797392704654466679482934042457217714968\
                 70329047266088258938001861606973112319",
            ),
            a: BigInt::from(-3),
            b: hex(
                b"b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2e\
                  d19d2a85c8edd3ec2aef",
            ),
            gx: hex(
                b"aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a385502f25dbf55\
                  296c3a545e3872760ab7",
            ),
            gy: hex(
                b"3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c00a60b1ce1d7e\
                  819d7a431d7c90ea0e5f",
            ),
        }
    }

    /// NIST P-521 (FIPS 186-4)
    pub fn p521() -> Self {
        Self {
            // `p: 2^521 - 1`
            p: dec(
                "686479766013060971498190079908139321726943530014330540939446345918554318339765\
                 6052122559640661454554977296311391480858037121987999716643812574028291115057151",
            ),
            a: BigInt::from(-3),
            b: hex(
                b"0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951\
                  ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00",
            ),
            gx: hex(
                b"00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d3dbaa14b5e77\
                  efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5bd66",
            ),
            gy: hex(
                b"011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e662c97ee7299\
                  5ef42640c550b9013fad0761353c7086a272c24088be94769fd16650",
            ),
        }
    }

    /// SIEC-255, the super-isolated curve `y² = x³ + 19`
    pub fn siec255() -> Self {
        Self {
            p: dec("28948022309329048855892746252183396360603931420023084536990047309120118726721"),
            a: BigInt::zero(),
            b: BigInt::from(19),
            gx: BigInt::from(5),
            gy: BigInt::from(12),
        }
    }

    // p is prime, so Fermat gives the inverse.
    fn inverse(&self, n: &BigInt) -> BigInt {
        n.modpow(&(&self.p - 2), &self.p)
    }

    fn double(&self, point: &Point) -> Point {
        if point.is_identity() || point.y.is_zero() {
            return Point::identity();
        }
        let two_y = (&point.y + &point.y).mod_floor(&self.p);
        let lambda =
            ((BigInt::from(3) * &point.x * &point.x + &self.a) * self.inverse(&two_y)).mod_floor(&self.p);
        let x3 = (&lambda * &lambda - &point.x - &point.x).mod_floor(&self.p);
        let y3 = (&lambda * (&point.x - &x3) - &point.y).mod_floor(&self.p);
        Point::new(x3, y3)
    }
}

impl EllipticCurve for WeierstrassCurve {
    fn add(&self, p: &Point, q: &Point) -> Point {
        if p.is_identity() {
            return q.clone();
        }
        if q.is_identity() {
            return p.clone();
        }
        let (x1, y1) = (p.x.mod_floor(&self.p), p.y.mod_floor(&self.p));
        let (x2, y2) = (q.x.mod_floor(&self.p), q.y.mod_floor(&self.p));
        if x1 == x2 {
            if (&y1 + &y2).mod_floor(&self.p).is_zero() {
                return Point::identity();
            }
            return self.double(&Point::new(x1, y1));
        }
        let lambda = ((&y2 - &y1) * self.inverse(&(&x2 - &x1).mod_floor(&self.p))).mod_floor(&self.p);
        let x3 = (&lambda * &lambda - &x1 - &x2).mod_floor(&self.p);
        let y3 = (&lambda * (&x1 - &x3) - &y1).mod_floor(&self.p);
        Point::new(x3, y3)
    }

    fn scalar_base_mult(&self, k: &[u8]) -> Point {
        self.scalar_mult(&Point::new(self.gx.clone(), self.gy.clone()), k)
    }

    fn scalar_mult(&self, p: &Point, k: &[u8]) -> Point {
        let mut acc = Point::identity();
        for byte in k {
            for shift in (0..8).rev() {
                acc = self.double(&acc);
                if byte >> shift & 1 == 1 {
                    acc = self.add(&acc, p);
                }
            }
        }
        acc
    }

    fn is_on_curve(&self, p: &Point) -> bool {
        if p.x.is_negative() || p.y.is_negative() || p.x >= self.p || p.y >= self.p {
            return false;
        }
        let lhs = (&p.y * &p.y).mod_floor(&self.p);
        let rhs = (&p.x * &p.x * &p.x + &self.a * &p.x + &self.b).mod_floor(&self.p);
        lhs == rhs
    }

    fn field_prime(&self) -> &BigInt {
        &self.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves() -> Vec<WeierstrassCurve> {
        vec![
            WeierstrassCurve::p256(),
            WeierstrassCurve::p384(),
            WeierstrassCurve::p521(),
            WeierstrassCurve::siec255(),
        ]
    }

    #[test]
    fn base_point_is_on_curve() {
        for curve in curves() {
            let g = Point::new(curve.gx.clone(), curve.gy.clone());
            assert!(curve.is_on_curve(&g));
        }
    }

    #[test]
    fn small_multiples_are_consistent() {
        for curve in curves() {
            let g = curve.scalar_base_mult(&[1]);
            let doubled = curve.add(&g, &g);
            assert_eq!(doubled, curve.scalar_base_mult(&[2]));
            assert_eq!(curve.add(&doubled, &g), curve.scalar_base_mult(&[3]));
            assert!(curve.is_on_curve(&doubled));
        }
    }

    #[test]
    fn identity_is_neutral() {
        for curve in curves() {
            let g = curve.scalar_base_mult(&[1]);
            assert_eq!(curve.add(&Point::identity(), &g), g);
            assert_eq!(curve.add(&g, &Point::identity()), g);
            assert_eq!(curve.scalar_base_mult(&[]), Point::identity());
            assert_eq!(curve.scalar_base_mult(&[0]), Point::identity());
        }
    }

    #[test]
    fn subtract_inverts_add() {
        for curve in curves() {
            let p = curve.scalar_base_mult(&[5]);
            let q = curve.scalar_base_mult(&[11]);
            let sum = curve.add(&p, &q);
            assert_eq!(curve.subtract(&sum, &q), p);
        }
    }

    #[test]
    fn subtracting_a_point_from_itself_gives_identity() {
        for curve in curves() {
            let p = curve.scalar_base_mult(&[7]);
            assert_eq!(curve.subtract(&p, &p), Point::identity());
        }
    }

    #[test]
    fn scalar_mult_distributes_over_bytes() {
        let curve = WeierstrassCurve::p256();
        // 0x0100 = 256, so [1, 0] must equal 256 * G
        let by_bytes = curve.scalar_base_mult(&[1, 0]);
        let mut acc = Point::identity();
        let g = curve.scalar_base_mult(&[1]);
        for _ in 0..256 {
            acc = curve.add(&acc, &g);
        }
        assert_eq!(by_bytes, acc);
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let curve = WeierstrassCurve::p256();
        let g = curve.scalar_base_mult(&[1]);
        let shifted = Point::new(&g.x + curve.field_prime(), g.y.clone());
        assert!(!curve.is_on_curve(&shifted));
        let negated = Point::new(g.x.clone(), -&g.y);
        assert!(!curve.is_on_curve(&negated));
        assert!(!curve.is_on_curve(&Point::identity()));
    }
}
