/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants
//!
//! `Scalar` and `CurvePoint` are thin immutable wrappers around the `k256` types,
//! which provide constant-time arithmetic over secp256k1.

use k256::{
    AffinePoint,
    ProjectivePoint,
    EncodedPoint,
    FieldBytes,
    U256,
    elliptic_curve::{
        PrimeField,
        group::Group,
        ops::Reduce,
        point::{AffineCoordinates, DecompressPoint},
        sec1::{FromEncodedPoint, ToEncodedPoint},
        subtle::Choice
    }
};
use rand::{CryptoRng, RngCore};
use serde::{
    de::Error as DeError,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer
};
use zeroize::Zeroize;

use crate::errors::{
    ArithmeticError,
    PointError,
    RandomnessError,
    SerializationError
};
#[cfg(feature = "to_bytes")]
use crate::tobytes::ToBytes;

///Length of an encoded scalar.
pub const SCALAR_LENGTH: usize = 32;
///Length of a SEC1 compressed point.
pub const COMPRESSED_POINT_LENGTH: usize = 33;
///Length of an x-only (BIP340) point.
pub const X_ONLY_POINT_LENGTH: usize = 32;
///Length of a SEC1 uncompressed point.
pub const UNCOMPRESSED_POINT_LENGTH: usize = 65;

///Draws `Scalar::random` makes before giving up on the random source.
///An honest source needs more than one draw with probability about 2^-128.
pub const MAX_SAMPLING_ATTEMPTS: usize = 128;

///An integer modulo the secp256k1 group order `n`.
///
///Always stored reduced, so equality is plain scalar equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Zeroize)]
pub struct Scalar(k256::Scalar);

impl Scalar {
    pub const ZERO: Self = Self(k256::Scalar::ZERO);
    pub const ONE: Self = Self(k256::Scalar::ONE);

    ///Draw a scalar uniformly from `[1, n-1]`.
    ///
    ///Bytes are rejection sampled, so the result is unbiased.
    ///Fails if the random source fails, or keeps producing out of range values
    ///for `MAX_SAMPLING_ATTEMPTS` draws in a row.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, RandomnessError> {
        let mut bytes = [0u8; SCALAR_LENGTH];
        for _ in 0..MAX_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|err| RandomnessError(err.to_string()))?;
            let candidate = Self::from_canonical(&bytes);
            bytes.zeroize();

            if let Some(scalar) = candidate {
                if !scalar.is_zero() {
                    return Ok(scalar)
                }
            }
        }
        return Err(RandomnessError("random source keeps producing out of range scalars".to_string()))
    }

    ///Reduce 32 big-endian bytes (usually a hash output) modulo `n`.
    pub fn from_bytes_mod_order(bytes: [u8; SCALAR_LENGTH]) -> Self {
        return Self(<k256::Scalar as Reduce<U256>>::reduce_bytes(&FieldBytes::from(bytes)))
    }

    ///Decode 32 big-endian bytes, rejecting values `>= n`.
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let bytes: [u8; SCALAR_LENGTH] = bytes.try_into()
            .map_err(|_| SerializationError::DecodingError)?;
        return Self::from_canonical(&bytes).ok_or(SerializationError::DecodingError)
    }

    fn from_canonical(bytes: &[u8; SCALAR_LENGTH]) -> Option<Self> {
        return Option::<k256::Scalar>::from(k256::Scalar::from_repr(FieldBytes::from(*bytes)))
            .map(Self)
    }

    ///Decode a 64 character hex string, rejecting values `>= n`.
    pub fn from_hex(hex_str: &str) -> Result<Self, SerializationError> {
        let bytes = hex::decode(hex_str).map_err(|_| SerializationError::DecodingError)?;
        return Self::from_canonical_bytes(&bytes)
    }

    pub fn from_u64(value: u64) -> Self {
        return Self(k256::Scalar::from(value))
    }

    ///Encode as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; SCALAR_LENGTH] {
        return self.0.to_bytes().into()
    }

    pub fn to_hex(&self) -> String {
        return hex::encode(self.to_bytes())
    }

    pub fn is_zero(&self) -> bool {
        return self.0.is_zero().into()
    }

    pub fn add(&self, other: &Self) -> Self {
        return Self(self.0 + other.0)
    }

    pub fn sub(&self, other: &Self) -> Self {
        return Self(self.0 - other.0)
    }

    pub fn mul(&self, other: &Self) -> Self {
        return Self(self.0 * other.0)
    }

    pub fn neg(&self) -> Self {
        return Self(-self.0)
    }

    ///Multiplicative inverse modulo `n`.
    pub fn invert(&self) -> Result<Self, ArithmeticError> {
        return Option::<k256::Scalar>::from(self.0.invert())
            .map(Self)
            .ok_or(ArithmeticError::ZeroInverse)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            return serializer.serialize_str(&self.to_hex())
        }
        return serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = match deserializer.is_human_readable() {
            true => hex::decode(String::deserialize(deserializer)?).map_err(D::Error::custom)?,
            false => Vec::<u8>::deserialize(deserializer)?
        };
        return Self::from_canonical_bytes(&bytes).map_err(D::Error::custom)
    }
}

#[cfg(feature = "to_bytes")]
impl<'a> ToBytes<'a> for Scalar {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(Scalar::to_bytes(self).to_vec())
    }

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, SerializationError> {
        return Self::from_canonical_bytes(bytes)
    }
}

///A point on secp256k1.
///
///The identity is representable (it can fall out of arithmetic)
///but can never be decoded; see `PublicKey` for a type that excludes it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurvePoint(ProjectivePoint);

impl CurvePoint {
    pub const IDENTITY: Self = Self(ProjectivePoint::IDENTITY);
    ///The basepoint `G`.
    pub const GENERATOR: Self = Self(ProjectivePoint::GENERATOR);

    ///`scalar * G`
    pub fn mul_base(scalar: &Scalar) -> Self {
        return Self(ProjectivePoint::GENERATOR * scalar.0)
    }

    ///`(a * G) + (b * point)`, the shape of every link in a ring.
    pub fn mul_base_add(a: &Scalar, b: &Scalar, point: &Self) -> Self {
        return Self((ProjectivePoint::GENERATOR * a.0) + (point.0 * b.0))
    }

    pub fn add(&self, other: &Self) -> Self {
        return Self(self.0 + other.0)
    }

    pub fn sub(&self, other: &Self) -> Self {
        return Self(self.0 - other.0)
    }

    pub fn neg(&self) -> Self {
        return Self(-self.0)
    }

    pub fn mul(&self, scalar: &Scalar) -> Self {
        return Self(self.0 * scalar.0)
    }

    pub fn is_identity(&self) -> bool {
        return self.0.is_identity().into()
    }

    ///Whether the affine y coordinate is odd. The identity reports `false`.
    pub fn has_odd_y(&self) -> bool {
        return self.0.to_affine().y_is_odd().into()
    }

    ///Decode a point from its 33 byte compressed, 65 byte uncompressed,
    ///or 32 byte x-only encoding.
    ///
    ///x-only encodings follow BIP340: the point with an even y coordinate is chosen.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PointError> {
        let affine = match bytes.len() {
            X_ONLY_POINT_LENGTH => Self::lift_x(bytes)?,
            COMPRESSED_POINT_LENGTH | UNCOMPRESSED_POINT_LENGTH => {
                //bad SEC1 tag byte
                let encoded = EncodedPoint::from_bytes(bytes)
                    .map_err(|_| PointError::InvalidEncoding)?;
                Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
                    .ok_or(PointError::NotOnCurve)?
            },
            _ => return Err(PointError::InvalidLength)
        };

        let point = Self(ProjectivePoint::from(affine));
        if point.is_identity() {
            return Err(PointError::Identity)
        }
        return Ok(point)
    }

    fn lift_x(x: &[u8]) -> Result<AffinePoint, PointError> {
        let x = FieldBytes::clone_from_slice(x);
        return Option::<AffinePoint>::from(AffinePoint::decompress(&x, Choice::from(0)))
            .ok_or(PointError::NotOnCurve)
    }

    ///Decode a point from a hex string of any supported encoding.
    pub fn from_hex(hex_str: &str) -> Result<Self, PointError> {
        let bytes = hex::decode(hex_str).map_err(|_| PointError::InvalidEncoding)?;
        return Self::from_bytes(&bytes)
    }

    ///Encode as a 33 byte SEC1 compressed point.
    ///
    ///The identity has no compressed encoding and is returned as all zeroes,
    ///which `from_bytes` rejects.
    pub fn to_bytes(&self) -> [u8; COMPRESSED_POINT_LENGTH] {
        let mut bytes = [0u8; COMPRESSED_POINT_LENGTH];
        if !self.is_identity() {
            bytes.copy_from_slice(self.0.to_affine().to_encoded_point(true).as_bytes());
        }
        return bytes
    }

    ///The 32 byte x coordinate, as used by x-only (BIP340/Nostr) keys.
    pub fn to_x_only(&self) -> [u8; X_ONLY_POINT_LENGTH] {
        return self.0.to_affine().x().into()
    }

    pub fn to_hex(&self) -> String {
        return hex::encode(self.to_bytes())
    }
}

impl Serialize for CurvePoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            return serializer.serialize_str(&self.to_hex())
        }
        return serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de> Deserialize<'de> for CurvePoint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes = match deserializer.is_human_readable() {
            true => hex::decode(String::deserialize(deserializer)?).map_err(D::Error::custom)?,
            false => Vec::<u8>::deserialize(deserializer)?
        };
        return Self::from_bytes(&bytes).map_err(D::Error::custom)
    }
}

#[cfg(feature = "to_bytes")]
impl<'a> ToBytes<'a> for CurvePoint {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        if self.is_identity() {
            return Err(SerializationError::EncodingError)
        }
        return Ok(CurvePoint::to_bytes(self).to_vec())
    }

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, SerializationError> {
        return CurvePoint::from_bytes(bytes).map_err(|_| SerializationError::DecodingError)
    }
}
