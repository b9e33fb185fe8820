// SPDX short identifier: Unlicense

use rand::thread_rng;

use ringsig::{
    KeyPair,
    sign,
    verify
};

fn main() {
    //Create the key pairs of every ring member.
    //In practice only the signer's private key would be known,
    //the other members just publish their public keys.
    let alice = KeyPair::generate(&mut thread_rng())
        .expect("Real software should have proper error handling.");
    let bob = KeyPair::generate(&mut thread_rng())
        .expect("Real software should have proper error handling.");

    //The ring is a plain list of encoded public keys.
    //x-only (32 byte) keys as used by Nostr work just as well as compressed ones.
    let ring: Vec<Vec<u8>> = vec![
        alice.public_key().to_bytes().to_vec(),
        bob.public_key().to_x_only().to_vec()
    ];

    let message = b"Hello, this is a ring signature example!";

    //Alice signs on behalf of the ring. Nobody can tell which member signed.
    let signature = sign(message, &alice.secret().to_bytes(), &ring)
        .expect("Real software should have proper error handling.");

    println!("c0: {}", signature.c_0_hex());
    for (i, s) in signature.s_hex().iter().enumerate() {
        println!("s[{i}]: {}...", &s[..16]);
    }

    //Anyone holding the ring can verify it
    let valid = verify(&signature, message, &ring)
        .expect("Real software should have proper error handling.");
    println!("Signature valid: {valid}");
    assert!(valid);

    //Changing the message breaks the signature
    let tampered = verify(&signature, b"Tampered message", &ring)
        .expect("Real software should have proper error handling.");
    println!("Tampered message valid: {tampered}");
    assert!(!tampered);
}
