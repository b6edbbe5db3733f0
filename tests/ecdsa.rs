use secdsa::ecdsa::cipher::CipherOps;
use secdsa::ecdsa::curves;
use secdsa::{EcCipher, Error};

use sha2::{Digest, Sha256};

const CURVES: [&str; 10] = [
    "secp112r1",
    "secp112r2",
    "secp128r1",
    "secp128r2",
    "secp160k1",
    "secp160r1",
    "secp192k1",
    "secp192r1",
    "secp256k1",
    "secp256r1",
];

/// Deterministic nonzero scalar bytes for a test case.
fn scalar(tag: &str, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut i = 0u32;
    while out.len() < len {
        let digest = Sha256::digest(format!("{tag}:{i}").as_bytes());
        out.extend_from_slice(&digest);
        i += 1;
    }
    out.truncate(len);
    out[len - 1] |= 1;
    out
}

#[test]
fn secp256k1_public_key_of_one_is_the_base_point() {
    let c = EcCipher::new("secp256k1").unwrap();
    let mut d = [0u8; 32];
    d[31] = 1;

    let mut qx = [0u8; 32];
    let mut qy = [0u8; 32];
    c.generate_public_key(&mut qx, &mut qy, &d);

    assert_eq!(
        qx.to_vec(),
        hex::decode("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798").unwrap()
    );
    assert_eq!(
        qy.to_vec(),
        hex::decode("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8").unwrap()
    );
}

#[test]
fn secp256r1_public_key_of_two_is_the_doubled_base_point() {
    let c = EcCipher::new("secp256r1").unwrap();
    let mut d = [0u8; 32];
    d[31] = 2;

    let mut qx = [0u8; 32];
    let mut qy = [0u8; 32];
    c.generate_public_key(&mut qx, &mut qy, &d);

    assert_eq!(
        qx.to_vec(),
        hex::decode("7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978").unwrap()
    );
    assert_eq!(
        qy.to_vec(),
        hex::decode("07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1").unwrap()
    );
}

#[test]
fn secp192r1_sign_and_verify_small_scalars() {
    let c = EcCipher::new("secp192r1").unwrap();
    let mut d = [0u8; 24];
    d[23] = 1;
    let mut k = [0u8; 24];
    k[23] = 2;
    let digest = [0u8; 24];

    let mut r = [0u8; 24];
    let mut s = [0u8; 24];
    c.generate_signature(&mut r, &mut s, &digest, &k, &d).unwrap();

    let mut qx = [0u8; 24];
    let mut qy = [0u8; 24];
    c.generate_public_key(&mut qx, &mut qy, &d);

    assert_eq!(c.verify_signature_status(&r, &s, &digest, &qx, &qy), -1);

    let wrong = [0xFFu8; 24];
    assert_eq!(c.verify_signature_status(&r, &s, &wrong, &qx, &qy), 0);
}

#[test]
fn unknown_curve_is_rejected() {
    let err = EcCipher::new("secp123r1").unwrap_err();
    assert_eq!(err, Error::InvalidCurve("secp123r1".to_string()));
    assert!(err.to_string().contains("invalid curve name"));

    // names are exact and case sensitive
    assert!(EcCipher::new("SECP256K1").is_err());
    assert!(EcCipher::new("secp256k1 ").is_err());
}

#[test]
fn round_trip_on_every_curve() {
    for name in CURVES {
        let c = EcCipher::new(name).unwrap();
        let nno = c.prime_byte_length();
        let npo = c.coordinate_byte_length();

        let d = scalar(&format!("{name}:d"), nno);
        let k = scalar(&format!("{name}:k"), nno);
        let digest = Sha256::digest(format!("{name}:message").as_bytes());

        let mut qx = vec![0u8; npo];
        let mut qy = vec![0u8; npo];
        c.generate_public_key(&mut qx, &mut qy, &d);

        let mut r = vec![0u8; nno];
        let mut s = vec![0u8; nno];
        c.generate_signature(&mut r, &mut s, &digest, &k, &d)
            .unwrap_or_else(|e| panic!("{name}: {e}"));

        assert!(
            c.verify_signature(&r, &s, &digest, &qx, &qy),
            "{name}: round trip"
        );
        assert_eq!(c.verify_signature_status(&r, &s, &digest, &qx, &qy), -1);
    }
}

#[test]
fn tampering_is_detected_on_every_curve() {
    for name in CURVES {
        let c = EcCipher::new(name).unwrap();
        let nno = c.prime_byte_length();
        let npo = c.coordinate_byte_length();

        let d = scalar(&format!("{name}:td"), nno);
        let k = scalar(&format!("{name}:tk"), nno);
        let digest = Sha256::digest(format!("{name}:payload").as_bytes());

        let mut qx = vec![0u8; npo];
        let mut qy = vec![0u8; npo];
        c.generate_public_key(&mut qx, &mut qy, &d);

        let mut r = vec![0u8; nno];
        let mut s = vec![0u8; nno];
        c.generate_signature(&mut r, &mut s, &digest, &k, &d).unwrap();

        let mut bad_r = r.clone();
        bad_r[nno / 2] ^= 0x04;
        assert!(!c.verify_signature(&bad_r, &s, &digest, &qx, &qy), "{name}: r");

        let mut bad_s = s.clone();
        bad_s[0] ^= 0x01;
        assert!(!c.verify_signature(&r, &bad_s, &digest, &qx, &qy), "{name}: s");

        let mut bad_h = digest.to_vec();
        bad_h[7] ^= 0x80;
        assert!(!c.verify_signature(&r, &s, &bad_h, &qx, &qy), "{name}: digest");

        let mut bad_qx = qx.clone();
        bad_qx[npo - 1] ^= 0x02;
        assert!(!c.verify_signature(&r, &s, &digest, &bad_qx, &qy), "{name}: qx");

        let mut bad_qy = qy.clone();
        bad_qy[1] ^= 0x10;
        assert!(!c.verify_signature(&r, &s, &digest, &qx, &bad_qy), "{name}: qy");
    }
}

#[test]
fn public_key_is_deterministic() {
    let c = EcCipher::new("secp128r1").unwrap();
    let d = scalar("determinism", 16);

    let mut qx1 = [0u8; 16];
    let mut qy1 = [0u8; 16];
    let mut qx2 = [0u8; 16];
    let mut qy2 = [0u8; 16];
    c.generate_public_key(&mut qx1, &mut qy1, &d);
    c.generate_public_key(&mut qx2, &mut qy2, &d);
    assert_eq!(qx1, qx2);
    assert_eq!(qy1, qy2);
}

#[test]
fn produced_signatures_are_low_s() {
    let c = EcCipher::new("secp256k1").unwrap();
    let half_order =
        hex::decode("7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0").unwrap();

    for i in 0..8 {
        let d = scalar(&format!("lowd:{i}"), 32);
        let k = scalar(&format!("lowk:{i}"), 32);
        let digest = Sha256::digest(format!("low-s:{i}").as_bytes());

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        c.generate_signature(&mut r, &mut s, &digest, &k, &d).unwrap();

        // big-endian byte order makes the slice comparison numeric
        assert!(s.as_slice() <= half_order.as_slice(), "case {i}");
    }
}

#[test]
fn oversized_buffers_are_left_padded() {
    let c = EcCipher::new("secp256k1").unwrap();
    let d = scalar("pad:d", 32);
    let k = scalar("pad:k", 32);
    let digest = Sha256::digest(b"padding");

    let mut r32 = [0u8; 32];
    let mut s32 = [0u8; 32];
    c.generate_signature(&mut r32, &mut s32, &digest, &k, &d).unwrap();

    let mut r64 = [0u8; 64];
    let mut s64 = [0u8; 64];
    c.generate_signature(&mut r64, &mut s64, &digest, &k, &d).unwrap();

    assert_eq!(&r64[..32], &[0u8; 32]);
    assert_eq!(&r64[32..], &r32);
    assert_eq!(&s64[..32], &[0u8; 32]);
    assert_eq!(&s64[32..], &s32);

    // oversized outputs stay verifiable through boxing
    assert!({
        let mut qx = [0u8; 32];
        let mut qy = [0u8; 32];
        c.generate_public_key(&mut qx, &mut qy, &d);
        c.verify_signature(&r64, &s64, &digest, &qx, &qy)
    });
}

#[test]
fn zero_ephemeral_scalar_fails_to_sign() {
    let c = EcCipher::new("secp192k1").unwrap();
    let d = scalar("zk:d", 24);
    let k = [0u8; 24];
    let digest = Sha256::digest(b"zero-k");

    let mut r = [0u8; 24];
    let mut s = [0u8; 24];
    let err = c.generate_signature(&mut r, &mut s, &digest, &k, &d).unwrap_err();
    assert_eq!(err, Error::SignatureFailed);
}

#[test]
fn malformed_verify_inputs_read_as_invalid() {
    let c = EcCipher::new("secp256r1").unwrap();
    let d = scalar("mv:d", 32);
    let k = scalar("mv:k", 32);
    let digest = Sha256::digest(b"malformed");

    let mut qx = [0u8; 32];
    let mut qy = [0u8; 32];
    c.generate_public_key(&mut qx, &mut qy, &d);

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    c.generate_signature(&mut r, &mut s, &digest, &k, &d).unwrap();

    // r = 0 and s = 0 are outside [1, n-1]
    assert!(!c.verify_signature(&[0u8; 32], &s, &digest, &qx, &qy));
    assert!(!c.verify_signature(&r, &[0u8; 32], &digest, &qx, &qy));

    // s = n is outside the range as well
    let mut order = [0u8; 32];
    c.prime(&mut order);
    assert!(!c.verify_signature(&r, &order, &digest, &qx, &qy));

    // a public key off the curve is rejected
    assert!(!c.verify_signature(&r, &s, &digest, &qx, &qx));
    assert!(!c.verify_signature(&r, &s, &digest, &[0u8; 32], &[0u8; 32]));
}

#[test]
fn prime_accessors_report_the_group_order() {
    let c = EcCipher::new("secp160k1").unwrap();
    assert_eq!(c.prime_bit_length(), 161);
    assert_eq!(c.prime_byte_length(), 21);
    assert_eq!(c.coordinate_bit_length(), 160);
    assert_eq!(c.coordinate_byte_length(), 20);

    let mut order = [0u8; 21];
    c.prime(&mut order);
    assert_eq!(
        order.to_vec(),
        hex::decode("0100000000000000000001B8FA16DFAB9ACA16B6B3").unwrap()
    );

    let c = EcCipher::new("secp112r2").unwrap();
    assert_eq!(c.prime_bit_length(), 110);
    assert_eq!(c.prime_byte_length(), 14);
    assert_eq!(c.coordinate_bit_length(), 112);
}

#[test]
fn digest_longer_than_the_order_is_boxed() {
    // 64-byte digest on a 161-bit order: truncate, then shift right
    let c = EcCipher::new("secp160r1").unwrap();
    let d = scalar("box:d", 21);
    let k = scalar("box:k", 21);
    let mut digest = [0u8; 64];
    for (i, b) in digest.iter_mut().enumerate() {
        *b = i as u8;
    }

    let mut qx = [0u8; 20];
    let mut qy = [0u8; 20];
    c.generate_public_key(&mut qx, &mut qy, &d);

    let mut r = [0u8; 21];
    let mut s = [0u8; 21];
    c.generate_signature(&mut r, &mut s, &digest, &k, &d).unwrap();
    assert!(c.verify_signature(&r, &s, &digest, &qx, &qy));

    // bytes beyond the boxed prefix are ignored entirely
    let mut extended = digest;
    extended[40] ^= 0xFF;
    assert!(c.verify_signature(&r, &s, &extended, &qx, &qy));
}

#[test]
fn word_sizes_agree() {
    let narrow = curves::secp192k1::<u16, 12, 12>();
    let wide = curves::secp192k1::<u32, 6, 6>();

    let d = scalar("w:d", 24);
    let k = scalar("w:k", 24);
    let digest = Sha256::digest(b"word-size");

    let mut qx16 = [0u8; 24];
    let mut qy16 = [0u8; 24];
    let mut qx32 = [0u8; 24];
    let mut qy32 = [0u8; 24];
    narrow.public_key(&mut qx16, &mut qy16, &d);
    wide.public_key(&mut qx32, &mut qy32, &d);
    assert_eq!(qx16, qx32);
    assert_eq!(qy16, qy32);

    let mut r16 = [0u8; 24];
    let mut s16 = [0u8; 24];
    let mut r32 = [0u8; 24];
    let mut s32 = [0u8; 24];
    assert!(narrow.sign(&mut r16, &mut s16, &digest, &k, &d));
    assert!(wide.sign(&mut r32, &mut s32, &digest, &k, &d));
    assert_eq!(r16, r32);
    assert_eq!(s16, s32);

    assert!(narrow.verify(&r32, &s32, &digest, &qx32, &qy32));
    assert!(wide.verify(&r16, &s16, &digest, &qx16, &qy16));
}

#[test]
fn cross_curve_signatures_do_not_verify() {
    let k1 = EcCipher::new("secp256k1").unwrap();
    let r1 = EcCipher::new("secp256r1").unwrap();
    let d = scalar("x:d", 32);
    let k = scalar("x:k", 32);
    let digest = Sha256::digest(b"cross");

    let mut qx = [0u8; 32];
    let mut qy = [0u8; 32];
    k1.generate_public_key(&mut qx, &mut qy, &d);

    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    k1.generate_signature(&mut r, &mut s, &digest, &k, &d).unwrap();

    assert!(k1.verify_signature(&r, &s, &digest, &qx, &qy));
    assert!(!r1.verify_signature(&r, &s, &digest, &qx, &qy));
}
