/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Domain separated hashing.
//!
//! Every hash is a tagged SHA-256 in the style of BIP340:
//! `SHA256(SHA256(domain) || SHA256(domain) || msg)`.

use sha2::{
    Digest,
    Sha256
};
use crate::curve::*;

///Return a hasher which has already absorbed the tag prefix for `domain`.
///
///Clone the result to hash several messages under the same domain.
pub fn tagged_hasher(domain: &[u8]) -> Sha256 {
    let tag = Sha256::digest(domain);
    let mut hasher = Sha256::new();
    hasher.update(&tag);
    hasher.update(&tag);
    return hasher
}

///Finish a hash started with `tagged_hasher`, reducing it to a scalar.
pub fn finalize_scalar(hasher: Sha256) -> Scalar {
    return Scalar::from_bytes_mod_order(hasher.finalize().into())
}

///Hash bytes to bytes, domain separated.
pub fn domain_h_bytes(msg: &[u8], domain: &[u8]) -> [u8; 32] {
    let mut hasher = tagged_hasher(domain);
    hasher.update(msg);
    return hasher.finalize().into()
}

///Hash bytes to scalar, domain separated.
pub fn domain_h_scalar(msg: &[u8], domain: &[u8]) -> Scalar {
    return Scalar::from_bytes_mod_order(domain_h_bytes(msg, domain))
}

///Hash bytes to elliptic curve point, domain separated.
///
///Try-and-increment: the hash of `msg || counter` is used as an x coordinate
///until one lands on the curve, which happens for about half of all candidates.
///The loop is variable time, so only public data may be hashed to a point.
pub fn domain_h_point(msg: &[u8], domain: &[u8]) -> CurvePoint {
    let mut counter: u32 = 0;
    loop {
        let x = domain_h_bytes(&[msg, &counter.to_be_bytes()].concat(), domain);
        //x-only decoding rejects coordinates outside the field and points off the curve
        if let Ok(point) = CurvePoint::from_bytes(&x) {
            return point
        }
        counter = counter.wrapping_add(1);
    }
}

pub mod domains {
    //! Pre-defined hash domains

    pub const RING_MESSAGE: &[u8] =                     "ringsig/message".as_bytes();
    pub const SIGNING_NONCE: &[u8] =                    "ringsig/nonce".as_bytes();

    pub const SAG_CHALLENGE: &[u8] =                    "ringsig/sag_challenge".as_bytes();

    pub const BLSAG_CHALLENGE: &[u8] =                  "ringsig/blsag_challenge".as_bytes();
    pub const KEY_IMAGE: &[u8] =                        "ringsig/key_image".as_bytes();
}
