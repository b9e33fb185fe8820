/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{self, Debug};

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::*;
use crate::signature::get_key_image;

///A public key: a curve point which is never the identity.
///
///Validation happens on construction, so anything holding a `PublicKey` can rely on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicKey(CurvePoint);

impl PublicKey {
    ///Wrap a point, rejecting the identity.
    pub fn from_point(point: CurvePoint) -> Result<Self, PointError> {
        if point.is_identity() {
            return Err(PointError::Identity)
        }
        return Ok(Self(point))
    }

    ///Decode a 33 byte compressed, 65 byte uncompressed, or 32 byte x-only key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PointError> {
        return Self::from_point(CurvePoint::from_bytes(bytes)?)
    }

    ///Decode a hex encoded key, see `from_bytes`.
    pub fn from_hex(hex_str: &str) -> Result<Self, PointError> {
        return Self::from_point(CurvePoint::from_hex(hex_str)?)
    }

    ///Return the elliptic curve point which represents this key.
    pub fn to_point(&self) -> CurvePoint {
        return self.0
    }

    ///33 byte compressed encoding.
    pub fn to_bytes(&self) -> [u8; COMPRESSED_POINT_LENGTH] {
        return self.0.to_bytes()
    }

    ///32 byte x-only (BIP340/Nostr) encoding.
    ///
    ///This drops the parity of y: decoding it yields this key only if `has_odd_y` is false,
    ///and its negation otherwise.
    pub fn to_x_only(&self) -> [u8; X_ONLY_POINT_LENGTH] {
        return self.0.to_x_only()
    }

    pub fn to_hex(&self) -> String {
        return self.0.to_hex()
    }

    pub fn has_odd_y(&self) -> bool {
        return self.0.has_odd_y()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for PublicKey {}

///A private key and its public key, `public = secret * G`.
///
///The private key is cleared from memory when this is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct KeyPair {
    secret: Scalar,
    #[zeroize(skip)]
    public: PublicKey

} impl KeyPair {
    ///Generate a new key pair from a secure random source.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, RandomnessError> {
        let secret = Scalar::random(rng)?;
        return Ok(Self{
            secret,
            public: PublicKey(CurvePoint::mul_base(&secret))
        })
    }

    ///Create a key pair from a private key. Zero is not a valid private key.
    pub fn from_secret(secret: Scalar) -> Result<Self, PointError> {
        let public = PublicKey::from_point(CurvePoint::mul_base(&secret))?;
        return Ok(Self{secret, public})
    }

    ///Import a 32 byte big-endian private key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        let secret = Scalar::from_canonical_bytes(bytes)?;
        return Self::from_secret(secret)
            .map_err(|_| SerializationError::DecodingError)
    }

    ///Import a hex encoded private key.
    pub fn from_hex(hex_str: &str) -> Result<Self, SerializationError> {
        let mut bytes = hex::decode(hex_str)
            .map_err(|_| SerializationError::DecodingError)?;
        let keys = Self::from_bytes(&bytes);
        bytes.zeroize();
        return keys
    }

    pub fn secret(&self) -> &Scalar {
        return &self.secret
    }

    pub fn public_key(&self) -> PublicKey {
        return self.public
    }

    ///Hex encoding of the private key.
    pub fn to_hex(&self) -> String {
        return self.secret.to_hex()
    }

    ///Return the key image of this key, as published by linkable signatures.
    pub fn key_image(&self) -> KeyImage {
        return get_key_image(&self.secret, &self.public)
    }

} impl Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }

} impl Drop for KeyPair {
    fn drop(&mut self) {
        //clear the keys from memory to improve security
        self.zeroize()
    }
}

///A deterministic per-key tag, `secret * Hp(x(public))`, published by linkable signatures.
///
///Two linkable signatures whose key images match (see `signature::key_images_match`)
///were created with the same private key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyImage(pub(crate) CurvePoint);

impl KeyImage {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PointError> {
        return Ok(Self(CurvePoint::from_bytes(bytes)?))
    }

    pub fn from_hex(hex_str: &str) -> Result<Self, PointError> {
        return Ok(Self(CurvePoint::from_hex(hex_str)?))
    }

    pub fn to_point(&self) -> CurvePoint {
        return self.0
    }

    pub fn to_bytes(&self) -> [u8; COMPRESSED_POINT_LENGTH] {
        return self.0.to_bytes()
    }

    pub fn to_hex(&self) -> String {
        return self.0.to_hex()
    }

    ///The x coordinate, which is shared by a key image and its negation.
    pub fn to_x_only(&self) -> [u8; X_ONLY_POINT_LENGTH] {
        return self.0.to_x_only()
    }
}

///A Ring represents the ordered public keys among which a signer hides.
///
///This is a wrapper type for `Vec<PublicKey>`.
///The internal `Vec` can be accessed with `ring.0`.
///Order matters: signature responses map positionally onto ring members.
///Duplicate keys are allowed but weaken anonymity; see `sort` and `has_duplicates`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ring(pub Vec<PublicKey>);
impl Ring {
    ///Creates a new, empty ring.
    pub fn new() -> Self {
        return Self(Vec::new());
    }

    ///Decode a ring from public key encodings, see `PublicKey::from_bytes`.
    ///
    ///Fails on the first member which is not a valid public key.
    pub fn from_encoded<B: AsRef<[u8]>>(encoded: &[B]) -> Result<Self, SignatureError> {
        return encoded.iter().enumerate()
            .map(|(i, bytes)| PublicKey::from_bytes(bytes.as_ref())
                .map_err(|err| SignatureError::InvalidRingMember(i, err)))
            .collect::<Result<Vec<PublicKey>, SignatureError>>()
            .map(Self)
    }

    ///Decode a ring from hex encoded public keys, see `PublicKey::from_hex`.
    pub fn from_hex<S: AsRef<str>>(encoded: &[S]) -> Result<Self, SignatureError> {
        return encoded.iter().enumerate()
            .map(|(i, hex_str)| PublicKey::from_hex(hex_str.as_ref())
                .map_err(|err| SignatureError::InvalidRingMember(i, err)))
            .collect::<Result<Vec<PublicKey>, SignatureError>>()
            .map(Self)
    }

    ///Appends a key to the ring.
    pub fn push(&mut self, value: PublicKey) {
        self.0.push(value);
    }

    ///Inserts a key at position `index` within the ring, shifting all keys after it to the right.
    pub fn insert(&mut self, index: usize, element: PublicKey) {
        self.0.insert(index, element);
    }

    pub fn len(&self) -> usize {
        return self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty()
    }

    ///Index of `key` within the ring, if present.
    pub fn position(&self, key: &PublicKey) -> Option<usize> {
        return self.0.iter().position(|member| member == key)
    }

    ///Compressed encodings of every member, in ring order.
    pub fn encoded(&self) -> Vec<[u8; COMPRESSED_POINT_LENGTH]> {
        return self.0.iter().map(|key| key.to_bytes()).collect()
    }

    ///Hex encodings of every member, in ring order.
    pub fn to_hex(&self) -> Vec<String> {
        return self.0.iter().map(|key| key.to_hex()).collect()
    }

    ///Sorts the ring by encoding and removes duplicates.
    ///
    ///A sorted ring gives no hint about where the signer inserted their own key.
    pub fn sort(&mut self) {
        self.0.sort_unstable_by_key(|key| key.to_bytes());
        self.0.dedup();
    }

    ///Checks if the ring is sorted and has no duplicates.
    pub fn is_sorted(&self) -> bool {
        let encoded = self.encoded();
        return encoded.windows(2)
            .all(|keys| keys[0] < keys[1])
    }

    ///Checks if any key appears more than once.
    pub fn has_duplicates(&self) -> bool {
        let mut encoded = self.encoded();
        encoded.sort_unstable();
        return encoded.windows(2)
            .any(|keys| keys[0] == keys[1])
    }

} impl FromIterator<PublicKey> for Ring {
    fn from_iter<I: IntoIterator<Item = PublicKey>>(iter: I) -> Self {
        return Self(iter.into_iter().collect())
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for Ring {}
