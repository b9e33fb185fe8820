// SPDX short identifier: Unlicense

use rand::{
    thread_rng,
    CryptoRng,
    RngCore
};

use ringsig::{
    common::*,
    hashes::*
};

const GENERATOR_HEX: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const GROUP_ORDER_HEX: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

fn random_scalar() -> Scalar {
    return Scalar::random(&mut thread_rng()).unwrap()
}

///A random source which only ever produces `0xff` bytes, all of them above the group order.
struct SaturatedRng;

impl RngCore for SaturatedRng {
    fn next_u32(&mut self) -> u32 { u32::MAX }
    fn next_u64(&mut self) -> u64 { u64::MAX }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0xff);
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        return Ok(())
    }
}
impl CryptoRng for SaturatedRng {}

#[test]
fn scalar_arithmetic() {
    let a = random_scalar();
    let b = random_scalar();
    let c = random_scalar();

    assert_eq!(a.add(&b), b.add(&a));
    assert_eq!(a.add(&b).sub(&b), a);
    assert_eq!(a.add(&a.neg()), Scalar::ZERO);
    assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
    assert_eq!(a.mul(&Scalar::ONE), a);
    assert_eq!(a.mul(&Scalar::ZERO), Scalar::ZERO);
    assert_eq!(Scalar::from_u64(2).mul(&Scalar::from_u64(3)), Scalar::from_u64(6));

    //results wrap around the group order
    let order_minus_one = Scalar::ONE.neg();
    assert_eq!(order_minus_one.add(&Scalar::ONE), Scalar::ZERO);
    assert_eq!(Scalar::ZERO.sub(&Scalar::ONE), order_minus_one);
}

#[test]
fn scalar_inverse() {
    for _ in 0..16 {
        let a = random_scalar();
        assert_eq!(a.mul(&a.invert().unwrap()), Scalar::ONE);
    }
    assert_eq!(Scalar::ONE.invert(), Ok(Scalar::ONE));
    assert_eq!(Scalar::ZERO.invert(), Err(ArithmeticError::ZeroInverse));
}

#[test]
fn scalar_encoding() {
    let a = random_scalar();
    assert_eq!(Scalar::from_canonical_bytes(&a.to_bytes()), Ok(a));
    assert_eq!(Scalar::from_hex(&a.to_hex()), Ok(a));
    assert_eq!(Scalar::from_u64(258).to_bytes()[30..], [1, 2]);

    //n itself is not canonical, n - 1 is
    assert_eq!(Scalar::from_hex(GROUP_ORDER_HEX), Err(SerializationError::DecodingError));
    assert_eq!(
        Scalar::from_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364140"),
        Ok(Scalar::ONE.neg())
    );
    //but it reduces to zero
    let order: [u8; 32] = hex::decode(GROUP_ORDER_HEX).unwrap().try_into().unwrap();
    assert_eq!(Scalar::from_bytes_mod_order(order), Scalar::ZERO);

    assert!(Scalar::from_canonical_bytes(&[1u8; 31]).is_err());
    assert!(Scalar::from_canonical_bytes(&[1u8; 33]).is_err());
    assert!(Scalar::from_hex("not hex").is_err());

    //bincode
    let bytes = ToBytes::to_bytes(&a).unwrap();
    assert_eq!(bytes.len(), SCALAR_LENGTH);
    assert_eq!(<Scalar as ToBytes>::from_bytes(&bytes), Ok(a));
}

#[test]
fn random_scalars() {
    let a = random_scalar();
    let b = random_scalar();
    assert!(!a.is_zero());
    assert_ne!(a, b);

    //a source which never yields an in range value is given up on
    assert!(Scalar::random(&mut SaturatedRng).is_err());
    assert!(KeyPair::generate(&mut SaturatedRng).is_err());
}

#[test]
fn point_arithmetic() {
    let a = random_scalar();
    let b = random_scalar();

    assert_eq!(CurvePoint::mul_base(&Scalar::ONE), CurvePoint::GENERATOR);
    assert_eq!(CurvePoint::GENERATOR.to_hex(), GENERATOR_HEX);
    assert_eq!(
        CurvePoint::GENERATOR.add(&CurvePoint::GENERATOR),
        CurvePoint::mul_base(&Scalar::from_u64(2))
    );
    assert_eq!(
        CurvePoint::mul_base(&a.add(&b)),
        CurvePoint::mul_base(&a).add(&CurvePoint::mul_base(&b))
    );
    assert_eq!(
        CurvePoint::mul_base(&a).mul(&b),
        CurvePoint::mul_base(&a.mul(&b))
    );
    let p = CurvePoint::mul_base(&b);
    assert_eq!(
        CurvePoint::mul_base_add(&a, &b, &CurvePoint::GENERATOR),
        CurvePoint::mul_base(&a).add(&p)
    );
    assert_eq!(p.sub(&p), CurvePoint::IDENTITY);
    assert_eq!(p.add(&p.neg()), CurvePoint::IDENTITY);
    assert!(CurvePoint::GENERATOR.mul(&Scalar::ZERO).is_identity());
    assert!(!p.is_identity());
}

#[test]
fn point_encoding() {
    let p = CurvePoint::mul_base(&random_scalar());

    //compressed
    let compressed = p.to_bytes();
    assert!(compressed[0] == 0x02 || compressed[0] == 0x03);
    assert_eq!(compressed[0] == 0x03, p.has_odd_y());
    assert_eq!(CurvePoint::from_bytes(&compressed), Ok(p));
    assert_eq!(CurvePoint::from_hex(&p.to_hex()), Ok(p));

    //x-only always lifts to the even y point
    let lifted = CurvePoint::from_bytes(&p.to_x_only()).unwrap();
    assert!(!lifted.has_odd_y());
    match p.has_odd_y() {
        true => assert_eq!(lifted, p.neg()),
        false => assert_eq!(lifted, p)
    }

    //bincode
    let bytes = ToBytes::to_bytes(&p).unwrap();
    assert_eq!(<CurvePoint as ToBytes>::from_bytes(&bytes), Ok(p));
    assert!(ToBytes::to_bytes(&CurvePoint::IDENTITY).is_err());
}

#[test]
fn uncompressed_generator() {
    let generator = hex::decode(concat!(
        "04",
        "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"
    )).unwrap();
    assert_eq!(CurvePoint::from_bytes(&generator), Ok(CurvePoint::GENERATOR));

    //nudge y off the curve
    let mut off_curve = generator.clone();
    off_curve[64] ^= 0x01;
    assert_eq!(CurvePoint::from_bytes(&off_curve), Err(PointError::NotOnCurve));
}

#[test]
fn invalid_points() {
    assert_eq!(CurvePoint::from_bytes(&[0u8]), Err(PointError::InvalidLength));
    assert_eq!(CurvePoint::from_bytes(&[2u8; 34]), Err(PointError::InvalidLength));
    assert_eq!(CurvePoint::from_bytes(&[]), Err(PointError::InvalidLength));
    assert_eq!(CurvePoint::from_hex("xyz"), Err(PointError::InvalidEncoding));

    //an x coordinate outside the field
    assert_eq!(CurvePoint::from_bytes(&[0xffu8; 32]), Err(PointError::NotOnCurve));
    let mut compressed = [0xffu8; 33];
    compressed[0] = 0x03;
    assert_eq!(CurvePoint::from_bytes(&compressed), Err(PointError::NotOnCurve));

    //the identity has no encoding
    assert!(CurvePoint::from_bytes(&CurvePoint::IDENTITY.to_bytes()).is_err());

    //bad SEC1 tag bytes
    let generator = CurvePoint::GENERATOR.to_bytes();
    for tag in [0x00u8, 0x01, 0x04, 0x06, 0xff] {
        let mut bad_tag = generator;
        bad_tag[0] = tag;
        assert_eq!(CurvePoint::from_bytes(&bad_tag), Err(PointError::InvalidEncoding));
    }
    let mut uncompressed = [0x11u8; 65];
    uncompressed[0] = 0x02;
    assert_eq!(CurvePoint::from_bytes(&uncompressed), Err(PointError::InvalidEncoding));
}

#[test]
fn domain_separation() {
    let msg = b"ring member";

    assert_eq!(domain_h_bytes(msg, domains::SAG_CHALLENGE), domain_h_bytes(msg, domains::SAG_CHALLENGE));
    assert_ne!(domain_h_bytes(msg, domains::SAG_CHALLENGE), domain_h_bytes(msg, domains::BLSAG_CHALLENGE));
    assert_ne!(domain_h_scalar(msg, domains::KEY_IMAGE), domain_h_scalar(b"ring membeR", domains::KEY_IMAGE));

    //tagged hashers agree with the one-shot functions
    let mut hasher = tagged_hasher(domains::RING_MESSAGE);
    sha2::Digest::update(&mut hasher, msg);
    assert_eq!(finalize_scalar(hasher), domain_h_scalar(msg, domains::RING_MESSAGE));
}

#[test]
fn hash_to_point() {
    let a = domain_h_point(b"first", domains::KEY_IMAGE);
    let b = domain_h_point(b"second", domains::KEY_IMAGE);

    assert_eq!(a, domain_h_point(b"first", domains::KEY_IMAGE));
    assert_ne!(a, b);
    assert_ne!(a, domain_h_point(b"first", domains::SAG_CHALLENGE));
    assert!(!a.is_identity());
    assert!(!a.has_odd_y());
}
