/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use rand::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::internal_common::*;

///The smallest ring which provides any anonymity.
///A ring of one is just a plain signature and is rejected.
pub const MIN_RING_SIZE: usize = 2;

lazy_static! {
    static ref SAG_CHALLENGE_HASHER: Sha256 = tagged_hasher(domains::SAG_CHALLENGE);
    static ref BLSAG_CHALLENGE_HASHER: Sha256 = tagged_hasher(domains::BLSAG_CHALLENGE);
}

///Reject rings which are too small to hide a signer in.
pub(crate) fn check_ring_size(ring: &Ring) -> Result<(), SignatureError> {
    if ring.len() < MIN_RING_SIZE {
        return Err(SignatureError::RingTooSmall)
    }
    return Ok(())
}

///Create the signed message, binding the message, every ring member in order, and the key image (if any).
pub(crate) fn create_message(
    encoded_ring: &[[u8; COMPRESSED_POINT_LENGTH]], key_image: Option<&KeyImage>, msg: &[u8]
) -> [u8; 32] {
    let mut hasher = tagged_hasher(domains::RING_MESSAGE);
    hasher.update((msg.len() as u64).to_be_bytes());
    hasher.update(msg);
    hasher.update((encoded_ring.len() as u64).to_be_bytes());
    for key in encoded_ring {
        hasher.update(key);
    }
    if let Some(key_image) = key_image {
        hasher.update(key_image.to_bytes());
    }
    return hasher.finalize().into()
}

///The challenge entering ring position `index` of a SAG signature.
pub(crate) fn sag_challenge(m: &[u8; 32], index: usize, left: &CurvePoint) -> Scalar {
    let mut hasher = SAG_CHALLENGE_HASHER.clone();
    hasher.update(m);
    hasher.update((index as u64).to_be_bytes());
    hasher.update(left.to_bytes());
    return finalize_scalar(hasher)
}

///The challenge entering ring position `index` of a bLSAG signature.
pub(crate) fn blsag_challenge(m: &[u8; 32], index: usize, left: &CurvePoint, right: &CurvePoint) -> Scalar {
    let mut hasher = BLSAG_CHALLENGE_HASHER.clone();
    hasher.update(m);
    hasher.update((index as u64).to_be_bytes());
    hasher.update(left.to_bytes());
    hasher.update(right.to_bytes());
    return finalize_scalar(hasher)
}

///Find the ring member which `secret` can sign for.
///
///Returns the member's index and the private key to sign with.
///When `index` is given, only that member is checked.
///
///A key whose point has an odd y coordinate also matches the negation of its point,
///which is what an x-only (BIP340/Nostr) encoding of the key decodes to;
///the negated private key is returned in that case.
pub(crate) fn locate_signer(
    ring: &Ring, secret: &Scalar, index: Option<usize>
) -> Result<(usize, Scalar), SignatureError> {
    let public = CurvePoint::mul_base(secret);
    if public.is_identity() {
        return Err(SignatureError::InvalidKey)
    }
    let lifted = match public.has_odd_y() {
        true => Some(public.neg()),
        false => None
    };

    let key_for = |i: usize| -> Option<Scalar> {
        let member = ring.0.get(i)?.to_point();
        if member == public {
            return Some(*secret)
        }
        if Some(member) == lifted {
            return Some(secret.neg())
        }
        return None
    };

    if let Some(i) = index {
        return key_for(i)
            .map(|key| (i, key))
            .ok_or(SignatureError::KeyMismatch)
    }

    //prefer an exact match over an x-only one
    let exact = ring.0.iter().position(|member| member.to_point() == public);
    let position = exact.or_else(|| match lifted {
        Some(lifted) => ring.0.iter().position(|member| member.to_point() == lifted),
        None => None
    });
    return position
        .and_then(|i| key_for(i).map(|key| (i, key)))
        .ok_or(SignatureError::KeyMismatch)
}

///Derive `n` signing scalars.
///
///Scalars are generated deterministically from a seed of the private key, the signed message,
///and fresh entropy, so they are never weaker than the random source
///and never repeat across signatures.
pub(crate) fn derive_nonces<R: RngCore + CryptoRng>(
    secret: &Scalar, m: &[u8; 32], n: usize, rng: &mut R
) -> Result<Vec<Scalar>, RandomnessError> {
    let mut entropy = [0u8; 32];
    rng.try_fill_bytes(&mut entropy)
        .map_err(|err| RandomnessError(err.to_string()))?;

    let mut secret_bytes = secret.to_bytes();
    let mut seed = [secret_bytes.as_slice(), m, &entropy].concat();
    secret_bytes.zeroize();
    entropy.zeroize();

    let mut last_scalar = Scalar::ZERO;
    let mut scalars: Vec<Scalar> = Vec::with_capacity(n);
    for _ in 0..n {
        last_scalar = domain_h_scalar(&[ last_scalar.to_bytes().as_slice(), seed.as_slice() ].concat(), domains::SIGNING_NONCE);
        scalars.push(last_scalar);
    }

    seed.zeroize();
    last_scalar.zeroize();
    return Ok(scalars)
}

///Hash a public key to the point its key image is built on.
///
///Only the x coordinate is hashed, so a key and its negation (the two ways an
///x-only ring can hold the same private key) share one hash point,
///and their key images differ only in sign.
pub(crate) fn key_image_point(key: &PublicKey) -> CurvePoint {
    return domain_h_point(&key.to_x_only(), domains::KEY_IMAGE)
}

///Return the key image points for every member of a ring
pub(crate) fn get_key_image_points(ring: &Ring) -> Vec<CurvePoint> {
    return ring.0.iter().map(key_image_point).collect()
}

///Given a private key and its public key, return its key image
pub(crate) fn get_key_image(secret: &Scalar, public: &PublicKey) -> KeyImage {
    return KeyImage(key_image_point(public).mul(secret))
}

///Decode hex encoded responses.
pub(crate) fn responses_from_hex<S: AsRef<str>>(s: &[S]) -> Result<Vec<Scalar>, SignatureError> {
    return s.iter()
        .map(|s_i| Scalar::from_hex(s_i.as_ref()).map_err(SignatureError::from))
        .collect()
}
