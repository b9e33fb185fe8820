/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::internal_common::*;
use super::signature_utils::*;

///A linkable ring signature.
///
///bLSAG stands for "back's Linkable Spontaneous Anonymous Group (signature)".
///Like `SAGSignature` it hides the signer within the ring,
///but it also publishes a key image (accessible with `signature.key_image`)
///which is the same for every signature made with the same private key,
///regardless of the message or the other ring members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BLSAGSignature {
    pub key_image: KeyImage,
    #[serde(rename = "c0")]
    c_0: Scalar,
    s: Vec<Scalar>

} impl BLSAGSignature {
    ///Create a signature given a ring, a private key whose public key is in the ring, and a message.
    ///
    ///Return a bLSAG signature if signing was successful,
    ///or `SignatureError` if an error occurred.
    pub fn sign<R: RngCore + CryptoRng>(
        ring: &Ring, secret: &Scalar, msg: &[u8], rng: &mut R
    ) -> Result<Self, SignatureError> {
        check_ring_size(ring)?;
        let (j, key) = locate_signer(ring, secret, None)?;
        return Self::sign_internal(ring, j, key, msg, rng)
    }

    ///Same as `sign`, except the signer's position is given explicitly.
    ///
    ///Returns `SignatureError::KeyMismatch` if the private key does not belong to `ring[index]`.
    pub fn sign_at<R: RngCore + CryptoRng>(
        ring: &Ring, secret: &Scalar, index: usize, msg: &[u8], rng: &mut R
    ) -> Result<Self, SignatureError> {
        check_ring_size(ring)?;
        let (j, key) = locate_signer(ring, secret, Some(index))?;
        return Self::sign_internal(ring, j, key, msg, rng)
    }

    ///Internal signing function.
    fn sign_internal<R: RngCore + CryptoRng>(
        ring: &Ring, j: usize, mut key: Scalar, msg: &[u8], rng: &mut R
    ) -> Result<Self, SignatureError> {
        let n = ring.len();

        let key_image_points = get_key_image_points(ring);
        let key_image = KeyImage(key_image_points[j].mul(&key));

        let m = create_message(&ring.encoded(), Some(&key_image), msg);

        let mut s = derive_nonces(&key, &m, n, rng)?;
        let mut alpha = s[j];

        //compute starting values
        let mut left = CurvePoint::mul_base(&alpha);
        let mut right = key_image_points[j].mul(&alpha);

        let mut c_i = Scalar::ONE;
        let mut c_0 = c_i;
        let mut i = j;
        for _ in 0..n {
            i = (i + 1) % n;

            c_i = blsag_challenge(&m, i, &left, &right);

            if i == 0 { c_0 = c_i }
            if i == j { break }

            //(s[i] * G) + (c[i] * ring[i])
            left = CurvePoint::mul_base_add(&s[i], &c_i, &ring.0[i].to_point());
            //(s[i] * key_image_points[i]) + (c[i] * key_image)
            right = key_image_points[i].mul(&s[i]).add(&key_image.0.mul(&c_i));
        }
        s[j] = alpha.sub(&c_i.mul(&key));

        alpha.zeroize();
        key.zeroize();

        return Ok(Self{key_image, c_0, s})
    }

    ///Given a bLSAG signature, a ring, and a message, check if it's valid.
    ///
    ///The ring must be in the **exact** same order as when it was signed.
    ///Returns `false` for invalid signatures, rings smaller than `MIN_RING_SIZE`,
    ///response counts which don't match the ring, and an identity key image.
    pub fn verify(signature: &BLSAGSignature, ring: &Ring, msg: &[u8]) -> bool {
        let BLSAGSignature{key_image, c_0, s} = signature;
        let n = ring.len();

        if n < MIN_RING_SIZE || s.len() != n || key_image.0.is_identity() {
            return false
        }

        let key_image_points = get_key_image_points(ring);
        let m = create_message(&ring.encoded(), Some(key_image), msg);

        //travel around the ring
        let mut c_i = *c_0;
        for i in 0..n {
            //(s[i] * G) + (c[i] * ring[i])
            let left = CurvePoint::mul_base_add(&s[i], &c_i, &ring.0[i].to_point());
            //(s[i] * key_image_points[i]) + (c[i] * key_image)
            let right = key_image_points[i].mul(&s[i]).add(&key_image.0.mul(&c_i));

            c_i = blsag_challenge(&m, (i + 1) % n, &left, &right);
        }
        //check if we end up back where we started
        return c_i == *c_0
    }

    ///Check whether two signatures were made with the same private key.
    ///
    ///This only compares key images; verify both signatures first.
    pub fn is_linked(&self, other: &BLSAGSignature) -> bool {
        return key_images_match(&self.key_image, &other.key_image)
    }

    ///Assemble a signature from its parts.
    pub fn from_parts(key_image: KeyImage, c_0: Scalar, s: Vec<Scalar>) -> Self {
        return Self{key_image, c_0, s}
    }

    ///Decode a signature from a hex encoded key image, `c_0`, and responses.
    ///
    ///Returns `SignatureError::InvalidFormat` for anything which is not a valid point or canonical scalar.
    pub fn from_hex<S: AsRef<str>>(key_image: &str, c_0: &str, s: &[S]) -> Result<Self, SignatureError> {
        return Ok(Self{
            key_image: KeyImage::from_hex(key_image)
                .map_err(|_| SignatureError::InvalidFormat)?,
            c_0: Scalar::from_hex(c_0)?,
            s: responses_from_hex(s)?
        })
    }

    pub fn c_0(&self) -> &Scalar {
        return &self.c_0
    }

    ///The responses, one per ring member.
    pub fn s(&self) -> &[Scalar] {
        return &self.s
    }

    ///The number of ring members this signature was made for.
    pub fn ring_size(&self) -> usize {
        return self.s.len()
    }

    pub fn c_0_hex(&self) -> String {
        return self.c_0.to_hex()
    }

    pub fn s_hex(&self) -> Vec<String> {
        return self.s.iter().map(|s_i| s_i.to_hex()).collect()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for BLSAGSignature {}

///Check whether two key images come from the same private key.
///
///A private key signs as `-x` when its ring member is the even-y lift of an odd-y key,
///which negates its key image, so images are compared up to sign.
pub fn key_images_match(a: &KeyImage, b: &KeyImage) -> bool {
    return a.to_x_only() == b.to_x_only()
}
