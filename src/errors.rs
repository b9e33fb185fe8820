/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    error::Error,
    fmt::Display
};

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializationError {
    ///Failure to serialize.
    EncodingError,
    ///Failure to deserialize.
    DecodingError,

} impl Display for SerializationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::EncodingError => "Encoding error.",
            Self::DecodingError => "Decoding error."
        })
    }

} impl Error for SerializationError {}

///Scalar arithmetic errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    ///Zero has no multiplicative inverse.
    ZeroInverse,

} impl Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::ZeroInverse => "Zero has no inverse modulo the group order.",
        })
    }

} impl Error for ArithmeticError {}

///Curve point decoding/validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointError {
    ///The encoding is not valid hex, or has a bad SEC1 tag byte.
    InvalidEncoding,
    ///The encoding is not 32 (x-only), 33 (compressed) or 65 (uncompressed) bytes long.
    InvalidLength,
    ///The encoded coordinates do not satisfy the curve equation.
    NotOnCurve,
    ///The point is the identity (point at infinity).
    Identity,

} impl Display for PointError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self{
            Self::InvalidEncoding => "Invalid point encoding.",
            Self::InvalidLength => "Invalid point encoding length.",
            Self::NotOnCurve => "Point is not on the curve.",
            Self::Identity => "Point is the identity.",
        })
    }

} impl Error for PointError {}

///The secure random source failed.
///
///This is fatal: there is never a fallback to a weaker source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomnessError(pub String);

impl Display for RandomnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secure random source unavailable: {}", self.0)
    }

} impl Error for RandomnessError {}

///Ring signature errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    ///The ring has fewer than `MIN_RING_SIZE` members.
    RingTooSmall,
    ///The ring member at this index could not be decoded into a valid public key.
    InvalidRingMember(usize, PointError),
    ///The private key is malformed or zero.
    InvalidKey,
    ///The private key does not belong to the ring (or to the claimed ring index).
    KeyMismatch,
    ///The signature, or one of its parts, is structurally malformed.
    InvalidFormat,
    ///The secure random source failed.
    Randomness(RandomnessError),

} impl Display for SignatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self{
            Self::RingTooSmall => write!(f, "The ring is too small."),
            Self::InvalidRingMember(index, err) => write!(f, "Invalid ring member at index {index}: {err}"),
            Self::InvalidKey => write!(f, "Invalid private key."),
            Self::KeyMismatch => write!(f, "Private key does not match the ring."),
            Self::InvalidFormat => write!(f, "Malformed signature."),
            Self::Randomness(err) => write!(f, "{err}"),
        }
    }

} impl Error for SignatureError {}

impl From<RandomnessError> for SignatureError {
    fn from(err: RandomnessError) -> Self {
        return Self::Randomness(err)
    }
}

impl From<SerializationError> for SignatureError {
    fn from(_: SerializationError) -> Self {
        return Self::InvalidFormat
    }
}
