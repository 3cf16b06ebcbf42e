// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Maps curve names to curve objects and the fixed generators U and V
//!
//! The generators are hard-coded so that callers cannot supply points with
//! a known discrete-log relation. The x-coordinate of U is shared across
//! the NIST curves (it is lifted from the same 160-bit seed onto each), and
//! likewise for V.

use core::str::FromStr;

use num_bigint::BigInt;

use crate::errors::PakeError;
use crate::group::{Ed25519, EllipticCurve, Point, WeierstrassCurve};

/// The curve names recognized by [`Pake::new`](crate::Pake::new)
pub const CURVE_NAMES: [&str; 5] = ["p256", "p384", "p521", "siec", "ed25519"];

/// Returns the names of the curves the registry can instantiate
pub fn available_curves() -> &'static [&'static str] {
    &CURVE_NAMES
}

const NIST_UX: &str = "793136080485469241208656611513609866400481671852";
const NIST_VX: &str = "1086685267857089638167386722555472967068468061489";

pub(crate) struct CurveInit {
    pub(crate) curve: Box<dyn EllipticCurve + Send + Sync>,
    pub(crate) u: Point,
    pub(crate) v: Point,
}

impl core::fmt::Debug for CurveInit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CurveInit")
            .field("u", &self.u)
            .field("v", &self.v)
            .finish()
    }
}

fn dec(digits: &str) -> BigInt {
    BigInt::from_str(digits).unwrap()
}

fn point(x: &str, y: &str) -> Point {
    Point::new(dec(x), dec(y))
}

/// Instantiates a curve together with its fixed generators, verifying the
/// generators against the curve equation before handing them out.
pub(crate) fn init_curve(name: &str) -> Result<CurveInit, PakeError> {
    let (curve, u, v): (Box<dyn EllipticCurve + Send + Sync>, Point, Point) = match name {
        "p256" => (
            Box::new(WeierstrassCurve::p256()),
            point(
                NIST_UX,
                "59748757929350367369315811184980635230185250460108398961713395032485227207304",
            ),
            point(
                NIST_VX,
                "9157340230202296554417312816309453883742349874205386245733062928888341584123",
            ),
        ),
        "p384" => (
            Box::new(WeierstrassCurve::p384()),
            point(
                NIST_UX,
                "78548907993823923881708523255168042668582489367994292604030441779818109830543\
                 51714387874260245230531084533936948596",
            ),
            point(
                NIST_VX,
                "21898206562669911998235297167979083576432197282633635629145270958059347586763\
                 418294901448537278960988843108277491616",
            ),
        ),
        "p521" => (
            Box::new(WeierstrassCurve::p521()),
            point(
                NIST_UX,
                "40328212038121969447955023913457767608522020590103822561345928387221233853258\
                 02540879231526503456158741518531456199762365161310489884151533417829496019094620",
            ),
            point(
                NIST_VX,
                "50109162680866553471946557081607151959310186762258318398356024659995660664505\
                 01167246678404591906342753230577187831311039273858772817427392089150297708931207",
            ),
        ),
        "siec" => (
            Box::new(WeierstrassCurve::siec255()),
            point(
                "793136080485469241208656611513609866400481671853",
                "18458907634222644275952014841865282643645472623913459400556233196838128612339",
            ),
            point(
                NIST_VX,
                "19593504966619549205903364028255899745298716108914514072669075231742699650911",
            ),
        ),
        "ed25519" => (
            Box::new(Ed25519::new()),
            point(
                "41821174510521985817056358996007359290163947216650231187782646151092828043509",
                "0",
            ),
            point(
                "1456941786990260824647297143563623381366314063537015067473110401627488371271",
                "0",
            ),
        ),
        _ => return Err(PakeError::UnknownCurve),
    };

    if !curve.is_on_curve(&u) || !curve.is_on_curve(&v) {
        return Err(PakeError::BadGenerator);
    }

    Ok(CurveInit { curve, u, v })
}
