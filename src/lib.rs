//! ECDSA signature engine over SEC prime-field curves.
//!
//! This crate is a self-contained implementation of ECDSA on ten named
//! short-Weierstrass curves (secp112r1/r2, secp128r1/r2, secp160k1/r1,
//! secp192k1/r1, secp256k1/r1), built from its own multi-precision
//! arithmetic with no cryptographic dependencies.
//!
//! The focus is on **explicit, auditable arithmetic**: fixed-size value
//! types, caller-owned buffers, and no heap allocation on the hot paths.
//! Hashing and randomness are deliberately out of scope; the caller
//! supplies a precomputed digest and a fresh ephemeral scalar.
//!
//! # Module overview
//!
//! - `primitives`
//!   The machine word abstraction (16- and 32-bit digits), slice-based
//!   multi-precision arithmetic with two Barrett reduction variants, and
//!   the fixed-width [`primitives::UInt`] integer with big-endian byte
//!   and hex conversions.
//!
//! - `field`
//!   Prime field contexts with canonical-residue semantics, tuned at
//!   compile time for pseudo-Mersenne and general primes.
//!
//! - `ecdsa`
//!   Affine and projective point arithmetic, the curve-parametric
//!   cipher with signing and verification, the SEC parameter tables,
//!   and the [`EcCipher`] curve registry that ties it all together.
//!
//! # Example
//!
//! ```
//! use secdsa::EcCipher;
//!
//! let cipher = EcCipher::new("secp256k1").unwrap();
//! let mut qx = [0u8; 32];
//! let mut qy = [0u8; 32];
//! let secret = [0x42u8; 32];
//! cipher.generate_public_key(&mut qx, &mut qy, &secret);
//!
//! let digest = [0x01u8; 32];
//! let ephemeral = [0x37u8; 32];
//! let mut r = [0u8; 32];
//! let mut s = [0u8; 32];
//! cipher
//!     .generate_signature(&mut r, &mut s, &digest, &ephemeral, &secret)
//!     .unwrap();
//! assert!(cipher.verify_signature(&r, &s, &digest, &qx, &qy));
//! ```

pub mod ecdsa;
pub mod field;
pub mod primitives;

mod errors;

pub use ecdsa::EcCipher;
pub use errors::Error;
