/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::internal_common::*;
use super::signature_utils::*;

///An unlinkable ring signature.
///
///SAG stands for "Spontaneous Anonymous Group (signature)".
///It proves that one member of a ring signed the message without revealing which one,
///and two signatures by the same key cannot be linked to each other.
///
///`c_0` is the challenge entering ring position 0,
///and `s` holds one response per ring member, in ring order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SAGSignature {
    #[serde(rename = "c0")]
    c_0: Scalar,
    s: Vec<Scalar>

} impl SAGSignature {
    ///Create a signature given a ring, a private key whose public key is in the ring, and a message.
    ///
    ///The signer's position is found by matching the private key against the ring.
    ///Return a SAG signature if signing was successful,
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
        let m = create_message(&ring.encoded(), None, msg);

        //s[j] doubles as the secret nonce until the ring is closed
        let mut s = derive_nonces(&key, &m, n, rng)?;
        let mut alpha = s[j];

        //compute starting values
        let mut left = CurvePoint::mul_base(&alpha);

        let mut c_i = Scalar::ONE;
        let mut c_0 = c_i;
        let mut i = j;
        for _ in 0..n {
            i = (i + 1) % n;

            c_i = sag_challenge(&m, i, &left);

            if i == 0 { c_0 = c_i }
            if i == j { break }

            //(s[i] * G) + (c[i] * ring[i])
            left = CurvePoint::mul_base_add(&s[i], &c_i, &ring.0[i].to_point());
        }
        s[j] = alpha.sub(&c_i.mul(&key));

        alpha.zeroize();
        key.zeroize();

        return Ok(Self{c_0, s})
    }

    ///Given a SAG signature, a ring, and a message, check if it's valid.
    ///
    ///The ring must be in the **exact** same order as when it was signed.
    ///An invalid signature is a normal outcome and returns `false`,
    ///as do rings smaller than `MIN_RING_SIZE` and response counts which don't match the ring.
    pub fn verify(signature: &SAGSignature, ring: &Ring, msg: &[u8]) -> bool {
        let SAGSignature{c_0, s} = signature;
        let n = ring.len();

        if n < MIN_RING_SIZE || s.len() != n {
            return false
        }

        let m = create_message(&ring.encoded(), None, msg);

        //travel around the ring
        let mut c_i = *c_0;
        for i in 0..n {
            //(s[i] * G) + (c[i] * ring[i])
            let left = CurvePoint::mul_base_add(&s[i], &c_i, &ring.0[i].to_point());
            c_i = sag_challenge(&m, (i + 1) % n, &left);
        }
        //check if we end up back where we started
        return c_i == *c_0
    }

    ///Assemble a signature from its parts.
    pub fn from_parts(c_0: Scalar, s: Vec<Scalar>) -> Self {
        return Self{c_0, s}
    }

    ///Decode a signature from a hex encoded `c_0` and hex encoded responses.
    ///
    ///Returns `SignatureError::InvalidFormat` for anything which is not a canonical 32 byte scalar.
    pub fn from_hex<S: AsRef<str>>(c_0: &str, s: &[S]) -> Result<Self, SignatureError> {
        return Ok(Self{
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

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for SAGSignature {}
