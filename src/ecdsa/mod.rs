//! ECDSA over the SEC prime-field curves.
//!
//! [`EcCipher`] is the public entry point: a closed union over the ten
//! supported curve instantiations, selected by name at construction and
//! dispatched through the shared [`CipherOps`] interface.
//!
//! One naming wart is kept on purpose for compatibility with the
//! engine's historical interface: the `prime_*` accessors report the
//! **group order n** (the scalar field), while the `coordinate_*`
//! accessors report the coordinate field prime p.

pub mod cipher;
pub mod curves;
pub mod point;

use crate::errors::Error;

use cipher::{Cipher, CipherOps};

#[derive(Debug)]
enum CurveCipher {
    Secp112r1(Cipher<u32, 112, 4, 112, 4>),
    Secp112r2(Cipher<u32, 112, 4, 110, 4>),
    Secp128r1(Cipher<u32, 128, 4, 128, 4>),
    Secp128r2(Cipher<u32, 128, 4, 126, 4>),
    Secp160k1(Cipher<u32, 160, 5, 161, 6>),
    Secp160r1(Cipher<u32, 160, 5, 161, 6>),
    Secp192k1(Cipher<u32, 192, 6, 192, 6>),
    Secp192r1(Cipher<u32, 192, 6, 192, 6>),
    Secp256k1(Cipher<u32, 256, 8, 256, 8>),
    Secp256r1(Cipher<u32, 256, 8, 256, 8>),
}

macro_rules! dispatch {
    ($self:expr, $c:ident => $body:expr) => {
        match &$self.inner {
            CurveCipher::Secp112r1($c) => $body,
            CurveCipher::Secp112r2($c) => $body,
            CurveCipher::Secp128r1($c) => $body,
            CurveCipher::Secp128r2($c) => $body,
            CurveCipher::Secp160k1($c) => $body,
            CurveCipher::Secp160r1($c) => $body,
            CurveCipher::Secp192k1($c) => $body,
            CurveCipher::Secp192r1($c) => $body,
            CurveCipher::Secp256k1($c) => $body,
            CurveCipher::Secp256r1($c) => $body,
        }
    };
}

/// ECDSA engine for a named SEC curve.
///
/// All multi-precision values cross this interface as big-endian byte
/// slices. Output buffers may be larger than the value (left padded with
/// zeros) and inputs may be shorter (treated as zero extended).
///
/// The engine is read-only after construction and may be shared across
/// threads; each call works exclusively on caller-owned buffers.
#[derive(Debug)]
pub struct EcCipher {
    inner: CurveCipher,
}

impl EcCipher {
    /// Selects a curve by its exact, case-sensitive SEC name.
    pub fn new(curve: &str) -> Result<Self, Error> {
        let inner = match curve {
            "secp112r1" => CurveCipher::Secp112r1(curves::secp112r1()),
            "secp112r2" => CurveCipher::Secp112r2(curves::secp112r2()),
            "secp128r1" => CurveCipher::Secp128r1(curves::secp128r1()),
            "secp128r2" => CurveCipher::Secp128r2(curves::secp128r2()),
            "secp160k1" => CurveCipher::Secp160k1(curves::secp160k1()),
            "secp160r1" => CurveCipher::Secp160r1(curves::secp160r1()),
            "secp192k1" => CurveCipher::Secp192k1(curves::secp192k1()),
            "secp192r1" => CurveCipher::Secp192r1(curves::secp192r1()),
            "secp256k1" => CurveCipher::Secp256k1(curves::secp256k1()),
            "secp256r1" => CurveCipher::Secp256r1(curves::secp256r1()),
            _ => return Err(Error::InvalidCurve(curve.to_string())),
        };
        Ok(Self { inner })
    }

    /// Bit length of the group order n.
    pub fn prime_bit_length(&self) -> usize {
        dispatch!(self, c => c.prime_bit_length())
    }

    /// Byte length of the group order n.
    pub fn prime_byte_length(&self) -> usize {
        dispatch!(self, c => c.prime_byte_length())
    }

    /// Writes the group order n big-endian into `out`.
    pub fn prime(&self, out: &mut [u8]) {
        dispatch!(self, c => c.prime_bytes(out))
    }

    /// Bit length of the coordinate field prime p.
    pub fn coordinate_bit_length(&self) -> usize {
        dispatch!(self, c => c.coordinate_bit_length())
    }

    /// Byte length of the coordinate field prime p.
    pub fn coordinate_byte_length(&self) -> usize {
        dispatch!(self, c => c.coordinate_byte_length())
    }

    /// Derives the public key of a big-endian secret scalar.
    ///
    /// Scalars longer than the order bit length are silently masked
    /// down to it.
    pub fn generate_public_key(&self, qx: &mut [u8], qy: &mut [u8], secret: &[u8]) {
        dispatch!(self, c => c.public_key(qx, qy, secret))
    }

    /// Signs a precomputed message digest with a caller-supplied
    /// ephemeral scalar and secret scalar.
    ///
    /// The ephemeral scalar must be unique per signature; reusing it
    /// across two signatures reveals the secret scalar.
    pub fn generate_signature(
        &self,
        r: &mut [u8],
        s: &mut [u8],
        digest: &[u8],
        ephemeral: &[u8],
        secret: &[u8],
    ) -> Result<(), Error> {
        if dispatch!(self, c => c.sign(r, s, digest, ephemeral, secret)) {
            Ok(())
        } else {
            Err(Error::SignatureFailed)
        }
    }

    /// Checks a signature against a digest and public key.
    pub fn verify_signature(&self, r: &[u8], s: &[u8], digest: &[u8], qx: &[u8], qy: &[u8]) -> bool {
        dispatch!(self, c => c.verify(r, s, digest, qx, qy))
    }

    /// Legacy status form of [`verify_signature`](Self::verify_signature):
    /// `-1` for a valid signature, `0` otherwise.
    pub fn verify_signature_status(
        &self,
        r: &[u8],
        s: &[u8],
        digest: &[u8],
        qx: &[u8],
        qy: &[u8],
    ) -> i32 {
        if self.verify_signature(r, s, digest, qx, qy) {
            -1
        } else {
            0
        }
    }
}
