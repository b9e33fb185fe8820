// SPDX short identifier: Unlicense

use rand::thread_rng;

use ringsig::{
    KeyPair,
    Ring,
    signature::BLSAGSignature,
};

const RINGSIZE: usize = 8;

fn random_ring(signer: &KeyPair) -> Ring {
    let mut ring: Ring = (0..(RINGSIZE - 1))
        .map(|_| KeyPair::generate(&mut thread_rng()).unwrap().public_key())
        .collect();
    ring.push(signer.public_key());

    //If the signer was simply always placed at the end,
    //then everyone would know who signed it, which defeats the purpose.
    ring.sort();
    return ring
}

fn main() {
    let signer = KeyPair::generate(&mut thread_rng())
        .expect("Real software should have proper error handling.");

    //Create a linkable signature
    let ring = random_ring(&signer);
    let signature = BLSAGSignature::sign(&ring, signer.secret(), b"first vote", &mut thread_rng())
        .expect("Real software should have proper error handling.");
    assert!(BLSAGSignature::verify(&signature, &ring, b"first vote"));
    println!("key image: {}", signature.key_image.to_hex());

    //Create another one with a completely different ring and message
    let ring = random_ring(&signer);
    let signature2 = BLSAGSignature::sign(&ring, signer.secret(), b"second vote", &mut thread_rng())
        .expect("Real software should have proper error handling.");
    assert!(BLSAGSignature::verify(&signature2, &ring, b"second vote"));

    //Key images will always be the same when signing with the same key,
    //regardless of other ring members or the message.
    //The signer is still hidden, but both signatures are known to come from the same key.
    assert!(signature.is_linked(&signature2));
    println!("Signatures linked: {}", signature.is_linked(&signature2));

    //A different signer produces a different key image
    let other = KeyPair::generate(&mut thread_rng())
        .expect("Real software should have proper error handling.");
    let ring = random_ring(&other);
    let signature3 = BLSAGSignature::sign(&ring, other.secret(), b"first vote", &mut thread_rng())
        .expect("Real software should have proper error handling.");
    assert!(!signature.is_linked(&signature3));
}
