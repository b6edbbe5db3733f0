//! SEC curve parameter tables.
//!
//! Each constructor instantiates [`Cipher`] with the curve's equation
//! parameters A and B, the base point G, the coordinate prime p with its
//! Barrett multiplier, and the group order n with its Barrett
//! multiplier. The multiplier is `floor(4^bits / modulus)` for a general
//! modulus, or the small folding constant `~ m + m^2 / 2^bits` when the
//! modulus is `2^bits - m`.
//!
//! The word type and word counts are generic so the same tables serve
//! 16- and 32-bit builds; the word counts must satisfy
//! `NPW = ceil(NPB / W::BITS)` and `NNW = ceil(NNB / W::BITS)`.

use crate::primitives::word::Word;

use super::cipher::Cipher;

pub fn secp112r1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 112, NPW, 112, NNW> {
    Cipher::new(
        "DB7C2ABF62E35E668076BEAD2088",
        "659EF8BA043916EEDE8911702B22",
        "09487239995A5EE76B55F9C2F098",
        "A89CE5AF8724C0A23E0E0FF77500",
        "DB7C2ABF62E35E668076BEAD208B",
        "12A97000000000000000000000000",
        "DB7C2ABF62E35E7628DFAC6561C5",
        "12A96FFFFFFFFFFEAB2EA46B3447E",
    )
}

pub fn secp112r2<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 112, NPW, 110, NNW> {
    Cipher::new(
        "6127C24C05F38A0AAAF65C0EF02C",
        "51DEF1815DB5ED74FCC34C85D709",
        "4BA30AB5E892B4E1649DD0928643",
        "ADCD46F5882E3747DEF36E956E97",
        "DB7C2ABF62E35E668076BEAD208B",
        "12A97000000000000000000000000",
        "36DF0AAFD8B8D7597CA10520D04B",
        "4AA5C0000000005741402575BCFC",
    )
}

pub fn secp128r1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 128, NPW, 128, NNW> {
    Cipher::new(
        "FFFFFFFDFFFFFFFFFFFFFFFFFFFFFFFC",
        "E87579C11079F43DD824993C2CEE5ED3",
        "161FF7528B899B2D0C28607CA52C5B86",
        "CF5AC8395BAFEB13C02DA292DDED7A83",
        "FFFFFFFDFFFFFFFFFFFFFFFFFFFFFFFF",
        "2000000040000000800000011",
        "FFFFFFFE0000000075A30D1B9038A115",
        "2000000038A5CF2EA993B2A87",
    )
}

pub fn secp128r2<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 128, NPW, 126, NNW> {
    Cipher::new(
        "D6031998D1B3BBFEBF59CC9BBFF9AEE1",
        "5EEEFCA380D02919DC2C6558BB6D8A5D",
        "7B6AA5D85E572983E6FB32A7CDEBC140",
        "27B6916A894D3AEE7106FE805FC34B44",
        "FFFFFFFDFFFFFFFFFFFFFFFFFFFFFFFF",
        "2000000040000000800000011",
        "3FFFFFFF7FFFFFFFBE0024720613B5A3",
        "400000008000000141FFDB9101EBB89C",
    )
}

pub fn secp160k1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 160, NPW, 161, NNW> {
    Cipher::new(
        "0",
        "7",
        "3B4C382CE37AA192A4019E763036F4F5DD4D7EBB",
        "938CF935318FDCED6BC28286531733C3F03C4FEE",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFAC73",
        "10000538D",
        "100000000000000000001B8FA16DFAB9ACA16B6B3",
        "3FFFFFFFFFFFFFFFFFFF91C17A4815194D7A5253F",
    )
}

pub fn secp160r1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 160, NPW, 161, NNW> {
    Cipher::new(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7FFFFFFC",
        "1C97BEFC54BD7A8B65ACF89F81D4D4ADC565FA45",
        "4A96B5688EF573284664698968C38BB913CBFC82",
        "23A628553168947D59DCC912042351377AC5FB32",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7FFFFFFF",
        "80000001",
        "100000000000000000001F4C8F927AED3CA752257",
        "3FFFFFFFFFFFFFFFFFFF82CDC1B6144B0D62B76B3",
    )
}

pub fn secp192k1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 192, NPW, 192, NNW> {
    Cipher::new(
        "0",
        "3",
        "DB4FF10EC057E9AE26B07D0280B7F4341DA5D1B1EAE06C7D",
        "9B2F2F6D9C5628A7844163D015BE86344082AA88D95E2F9D",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFEE37",
        "1000011C9",
        "FFFFFFFFFFFFFFFFFFFFFFFE26F2FC170F69466A74DEFD8D",
        "1D90D03E8F096B9958B210276",
    )
}

pub fn secp192r1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 192, NPW, 192, NNW> {
    Cipher::new(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
        "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
        "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
        "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
        "10000000000000001",
        "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
        "662107C9EB94364E4B2DD7CF",
    )
}

pub fn secp256k1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 256, NPW, 256, NNW> {
    Cipher::new(
        "0",
        "7",
        "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        "1000003D1",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        "14551231950B75FC4402DA1732FC9BEC0",
    )
}

pub fn secp256r1<W: Word, const NPW: usize, const NNW: usize>() -> Cipher<W, 256, NPW, 256, NNW> {
    Cipher::new(
        "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
        "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
        "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
        "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
        "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
        "FFFFFFFFFFFFFFFEFFFFFFFEFFFFFFFEFFFFFFFF0000000000000003",
        "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
        "FFFFFFFFFFFFFFFEFFFFFFFF43190552DF1A6C21012FFD85EEDF9BFE",
    )
}
