/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Ring signatures over secp256k1
//!
//!Both signatures use the same challenge chain: starting from a secret nonce at the signer's
//!position, each ring member's response and public key produce the challenge for the next member,
//!and only the holder of the signer's private key can close the chain back onto itself.
//!
//! * `SAGSignature` is unlinkable.
//! * `BLSAGSignature` additionally publishes a key image, so signatures by the same key can be linked.

mod sag;
mod blsag;
mod signature_utils;

pub use sag::SAGSignature;
pub use blsag::{
    BLSAGSignature,
    key_images_match
};
pub use signature_utils::MIN_RING_SIZE;

pub(crate) use signature_utils::get_key_image;
