// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Contains the message exchanged between the two parties

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::errors::PakeError;
use crate::group::Point;

/// The public view of a session: the role, the fixed generators and the
/// party's outgoing points, nothing else.
///
/// Field names follow the subscript convention of the protocol notation
/// (`Uᵤ` is the x-coordinate of U, `Uᵥ` its y-coordinate). Coordinates
/// travel as decimal strings; a point a party has not produced yet is
/// null. The weak key and every derived secret stay out of the encoding.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct PublicView {
    #[serde(rename = "Role", default)]
    pub(crate) role: u8,
    #[serde(rename = "Uᵤ", with = "decimal", default)]
    pub(crate) uu: Option<BigInt>,
    #[serde(rename = "Uᵥ", with = "decimal", default)]
    pub(crate) uv: Option<BigInt>,
    #[serde(rename = "Vᵤ", with = "decimal", default)]
    pub(crate) vu: Option<BigInt>,
    #[serde(rename = "Vᵥ", with = "decimal", default)]
    pub(crate) vv: Option<BigInt>,
    #[serde(rename = "Xᵤ", with = "decimal", default)]
    pub(crate) xu: Option<BigInt>,
    #[serde(rename = "Xᵥ", with = "decimal", default)]
    pub(crate) xv: Option<BigInt>,
    #[serde(rename = "Yᵤ", with = "decimal", default)]
    pub(crate) yu: Option<BigInt>,
    #[serde(rename = "Yᵥ", with = "decimal", default)]
    pub(crate) yv: Option<BigInt>,
}

impl PublicView {
    pub(crate) fn encode(&self) -> Vec<u8> {
        serde_json::to_vec(self).expect("the public view always serializes")
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, PakeError> {
        serde_json::from_slice(bytes).map_err(|_| PakeError::MalformedMessage)
    }

    /// The peer's X, present only when both coordinates were sent
    pub(crate) fn x(&self) -> Option<Point> {
        point(&self.xu, &self.xv)
    }

    /// The peer's Y, present only when both coordinates were sent
    pub(crate) fn y(&self) -> Option<Point> {
        point(&self.yu, &self.yv)
    }
}

fn point(x: &Option<BigInt>, y: &Option<BigInt>) -> Option<Point> {
    Some(Point::new(x.as_ref()?.clone(), y.as_ref()?.clone()))
}

/// Splits a point into the optional coordinate pair the view carries.
pub(crate) fn coordinates(point: Option<&Point>) -> (Option<BigInt>, Option<BigInt>) {
    match point {
        Some(p) => (Some(p.x.clone()), Some(p.y.clone())),
        None => (None, None),
    }
}

mod decimal {
    use core::str::FromStr;

    use num_bigint::BigInt;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Option<BigInt>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(n) => serializer.serialize_some(&n.to_str_radix(10)),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigInt>, D::Error> {
        let repr: Option<String> = Option::deserialize(deserializer)?;
        repr.map(|digits| BigInt::from_str(&digits).map_err(D::Error::custom))
            .transpose()
    }
}
