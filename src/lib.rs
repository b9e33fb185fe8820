/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ring signatures over secp256k1.
//!
//! A ring signature proves that *one of* a set of public keys signed a message,
//! without revealing which one.
//! `sign` and `verify` work directly on encoded keys and produce unlinkable (SAG) signatures;
//! see the `signature` module for the typed API and for linkable (bLSAG) signatures.

#[macro_use]
extern crate lazy_static;

use rand::{
    rngs::OsRng,
    CryptoRng,
    RngCore
};


//internal modules
mod types;
pub use types::*;
mod tobytes;
#[cfg(feature = "to_bytes")]
pub use tobytes::ToBytes;


//uncommon public modules
pub mod hashes;


//"normal" public modules
pub mod errors;
pub mod curve;

pub mod signature;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, types, to/from bytes, and elliptic curve primitives/functions are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need.
    //! Relying on something like this is generally considered bad practice,
    //! and is intended for use in tests, examples, mockups, etc.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        types::*, errors::*, tobytes::*, curve::*
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as internal/less-common modules.
    //!
    //! Use `internal_common::*` if you wish to automatically import everything.

    pub use crate::{
        common::*, hashes::*
    };
}

use errors::SignatureError;
use signature::{
    SAGSignature,
    BLSAGSignature
};

///Sign `msg` with a 32 byte private key on behalf of a ring of encoded public keys.
///
///Ring members may be 33 byte compressed, 65 byte uncompressed, or 32 byte x-only keys.
///The signer's position is found by matching the private key against the ring.
///Randomness comes from the operating system.
pub fn sign<B: AsRef<[u8]>>(msg: &[u8], secret_key: &[u8], ring: &[B]) -> Result<SAGSignature, SignatureError> {
    return sign_with_rng(msg, secret_key, ring, &mut OsRng)
}

///Same as `sign`, with an explicit secure random source.
pub fn sign_with_rng<B: AsRef<[u8]>, R: RngCore + CryptoRng>(
    msg: &[u8], secret_key: &[u8], ring: &[B], rng: &mut R
) -> Result<SAGSignature, SignatureError> {
    let ring = Ring::from_encoded(ring)?;
    let keys = KeyPair::from_bytes(secret_key)
        .map_err(|_| SignatureError::InvalidKey)?;
    return SAGSignature::sign(&ring, keys.secret(), msg, rng)
}

///Verify a signature created by `sign` against a ring of encoded public keys.
///
///Returns `Ok(false)` if the signature is invalid,
///and `Err(SignatureError::InvalidRingMember)` if a ring member can't be decoded.
pub fn verify<B: AsRef<[u8]>>(signature: &SAGSignature, msg: &[u8], ring: &[B]) -> Result<bool, SignatureError> {
    let ring = Ring::from_encoded(ring)?;
    return Ok(SAGSignature::verify(signature, &ring, msg))
}

///Same as `sign`, except a linkable (bLSAG) signature is produced.
pub fn sign_linkable<B: AsRef<[u8]>>(msg: &[u8], secret_key: &[u8], ring: &[B]) -> Result<BLSAGSignature, SignatureError> {
    return sign_linkable_with_rng(msg, secret_key, ring, &mut OsRng)
}

///Same as `sign_linkable`, with an explicit secure random source.
pub fn sign_linkable_with_rng<B: AsRef<[u8]>, R: RngCore + CryptoRng>(
    msg: &[u8], secret_key: &[u8], ring: &[B], rng: &mut R
) -> Result<BLSAGSignature, SignatureError> {
    let ring = Ring::from_encoded(ring)?;
    let keys = KeyPair::from_bytes(secret_key)
        .map_err(|_| SignatureError::InvalidKey)?;
    return BLSAGSignature::sign(&ring, keys.secret(), msg, rng)
}

///Same as `verify`, for signatures created by `sign_linkable`.
pub fn verify_linkable<B: AsRef<[u8]>>(signature: &BLSAGSignature, msg: &[u8], ring: &[B]) -> Result<bool, SignatureError> {
    let ring = Ring::from_encoded(ring)?;
    return Ok(BLSAGSignature::verify(signature, &ring, msg))
}
