//! Curve-parametric ECDSA cipher.
//!
//! [`Cipher`] binds a short-Weierstrass curve `y^2 = x^3 + Ax + B` to two
//! prime fields: the coordinate field of `NPB` bits over `NPW` words and
//! the scalar field (the group order) of `NNB` bits over `NNW` words.
//! The two widths differ on some curves, so points and scalars are kept
//! as distinct integer types throughout.
//!
//! Point arithmetic exists in affine and projective form; the signing
//! and verification paths run the projective double-and-add ladder and
//! normalize once at the end, paying for a single field inversion per
//! scalar multiplication.

use crate::field::Fp;
use crate::primitives::mp;
use crate::primitives::uint::UInt;
use crate::primitives::word::Word;

use super::point::{EcPoint, EcPointP};

/// ECDSA engine for one curve instantiation.
///
/// Immutable after construction; a single value can serve concurrent
/// callers as long as each call owns its buffers.
#[derive(Clone, Debug)]
pub struct Cipher<W: Word, const NPB: usize, const NPW: usize, const NNB: usize, const NNW: usize>
{
    a: UInt<W, NPW>,
    b: UInt<W, NPW>,
    g: EcPoint<W, NPW>,
    p_fp: Fp<W, NPB, NPW>,
    n_fp: Fp<W, NNB, NNW>,
}

impl<W: Word, const NPB: usize, const NPW: usize, const NNB: usize, const NNW: usize>
    Cipher<W, NPB, NPW, NNB, NNW>
{
    /// Builds a cipher from the curve constants as hex strings: the
    /// equation parameters, the base point, the coordinate prime with
    /// its Barrett multiplier, and the group order with its Barrett
    /// multiplier.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        a: &str,
        b: &str,
        gx: &str,
        gy: &str,
        p: &str,
        pr: &str,
        n: &str,
        nr: &str,
    ) -> Self {
        Self {
            a: UInt::from_hex(a),
            b: UInt::from_hex(b),
            g: EcPoint::new(UInt::from_hex(gx), UInt::from_hex(gy)),
            p_fp: Fp::new(p, pr),
            n_fp: Fp::new(n, nr),
        }
    }

    pub fn base_point(&self) -> &EcPoint<W, NPW> {
        &self.g
    }

    pub fn coordinate_field(&self) -> &Fp<W, NPB, NPW> {
        &self.p_fp
    }

    pub fn scalar_field(&self) -> &Fp<W, NNB, NNW> {
        &self.n_fp
    }

    /// Affine point doubling.
    pub fn twice_affine(&self, p: &EcPoint<W, NPW>) -> EcPoint<W, NPW> {
        if p.is_zero() || p.y.is_zero() {
            return EcPoint::infinity();
        }
        let f = &self.p_fp;
        let xq = f.square(&p.x);
        let u = f.add(&f.mul(&UInt::from_word(W::from_u8(3)), &xq), &self.a);
        let v = f.twice(&p.y);
        let lambda = f.mul(&u, &f.inverse(&v));
        let mut t = f.square(&lambda);
        t = f.sub(&t, &p.x);
        t = f.sub(&t, &p.x);
        let w = f.mul(&lambda, &f.sub(&p.x, &t));
        EcPoint::new(t, f.sub(&w, &p.y))
    }

    /// Affine point addition.
    pub fn add_affine(&self, p1: &EcPoint<W, NPW>, p2: &EcPoint<W, NPW>) -> EcPoint<W, NPW> {
        if p1.is_zero() {
            return *p2;
        }
        if p2.is_zero() {
            return *p1;
        }
        let f = &self.p_fp;
        let u = f.sub(&p2.y, &p1.y);
        let v = f.sub(&p2.x, &p1.x);
        if v.is_zero() {
            // same x: either the same point (double) or a mirror pair
            return if u.is_zero() {
                self.twice_affine(p1)
            } else {
                EcPoint::infinity()
            };
        }
        let lambda = f.mul(&u, &f.inverse(&v));
        let mut t = f.square(&lambda);
        t = f.sub(&t, &p1.x);
        t = f.sub(&t, &p2.x);
        let w = f.mul(&lambda, &f.sub(&p1.x, &t));
        EcPoint::new(t, f.sub(&w, &p1.y))
    }

    /// Projective point doubling, inversion free.
    pub fn twice_proj(&self, p: &EcPointP<W, NPW>) -> EcPointP<W, NPW> {
        if p.is_zero() || p.y.is_zero() {
            return EcPointP::default();
        }
        let f = &self.p_fp;
        let xq = f.square(&p.x);
        let zq = f.square(&p.z);
        let u = f.add(&f.add(&f.twice(&xq), &xq), &f.mul(&self.a, &zq));
        let v = f.twice(&f.mul(&p.y, &p.z));
        let uq = f.square(&u);
        let vy = f.mul(&v, &p.y);
        let t = f.twice(&f.mul(&p.x, &vy));
        let w = f.sub(&uq, &f.twice(&t));
        let y = f.sub(&f.mul(&f.sub(&t, &w), &u), &f.twice(&f.square(&vy)));
        let x = f.mul(&w, &v);
        let z = f.mul(&f.square(&v), &v);
        EcPointP::new(x, y, z)
    }

    /// Projective point addition, inversion free.
    pub fn add_proj(&self, p1: &EcPointP<W, NPW>, p2: &EcPointP<W, NPW>) -> EcPointP<W, NPW> {
        if p1.is_zero() {
            return *p2;
        }
        if p2.is_zero() {
            return *p1;
        }
        let f = &self.p_fp;
        let u0 = f.mul(&p2.y, &p1.z);
        let u1 = f.mul(&p1.y, &p2.z);
        let v0 = f.mul(&p2.x, &p1.z);
        let v1 = f.mul(&p1.x, &p2.z);
        let u = f.sub(&u0, &u1);
        let v = f.sub(&v0, &v1);
        if v.is_zero() {
            return if u.is_zero() {
                self.twice_proj(p1)
            } else {
                EcPointP::default()
            };
        }
        let z1z2 = f.mul(&p1.z, &p2.z);
        let vq = f.square(&v);
        let vqz2 = f.mul(&vq, &p2.z);
        let uq = f.square(&u);
        let w2 = f.mul(&vq, &f.add(&v0, &v1));
        let w = f.sub(&f.mul(&uq, &z1z2), &w2);
        let vvy = f.mul(&f.mul(&vqz2, &v), &p1.y);
        let y = f.sub(&f.mul(&f.sub(&f.mul(&vqz2, &p1.x), &w), &u), &vvy);
        let x = f.mul(&w, &v);
        let z = f.mul(&f.mul(&vqz2, &p1.z), &v);
        EcPointP::new(x, y, z)
    }

    /// Affine double-and-add over all `k.len() * W::BITS` bits, least
    /// significant bit first.
    pub fn mul_affine(&self, base: &EcPoint<W, NPW>, k: &[W]) -> EcPoint<W, NPW> {
        let mut runner = *base;
        let mut acc = EcPoint::infinity();
        for w in k {
            for j in 0..W::BITS {
                if (*w >> j) & W::ONE == W::ONE {
                    acc = self.add_affine(&acc, &runner);
                }
                runner = self.twice_affine(&runner);
            }
        }
        acc
    }

    /// Projective double-and-add over all `k.len() * W::BITS` bits,
    /// least significant bit first.
    pub fn mul_proj(&self, base: &EcPointP<W, NPW>, k: &[W]) -> EcPointP<W, NPW> {
        let mut runner = *base;
        let mut acc = EcPointP::default();
        for w in k {
            for j in 0..W::BITS {
                if (*w >> j) & W::ONE == W::ONE {
                    acc = self.add_proj(&acc, &runner);
                }
                runner = self.twice_proj(&runner);
            }
        }
        acc
    }

    /// Scales a projective point back to affine coordinates.
    pub fn normalize(&self, p: &EcPointP<W, NPW>) -> EcPoint<W, NPW> {
        let iz = self.p_fp.inverse(&p.z);
        EcPoint::new(self.p_fp.mul(&p.x, &iz), self.p_fp.mul(&p.y, &iz))
    }

    /// Whether an affine point satisfies `y^2 = x^3 + Ax + B`.
    pub fn is_on_curve(&self, p: &EcPoint<W, NPW>) -> bool {
        let f = &self.p_fp;
        let lhs = f.square(&p.y);
        let mut rhs = f.mul(&f.square(&p.x), &p.x);
        rhs = f.add(&rhs, &f.mul(&self.a, &p.x));
        rhs = f.add(&rhs, &self.b);
        lhs == rhs
    }

    /// Boxes a message digest into the scalar width.
    ///
    /// Takes at most the leading order-byte-length bytes of the digest,
    /// then drops the low bits in excess of the order bit length.
    pub fn box_hash(&self, digest: &[u8]) -> UInt<W, NNW> {
        let take = NNB.div_ceil(8).min(digest.len());
        let boxed: UInt<W, NNW> = UInt::from_bytes(&digest[..take]);
        if take * 8 > NNB {
            boxed >> (take * 8 - NNB)
        } else {
            boxed
        }
    }

    /// Brings a value of at most `NNB` bits into `[0, n)` with a single
    /// conditional subtraction.
    fn reduce_once(&self, x: &UInt<W, NNW>) -> UInt<W, NNW> {
        if mp::ge(&x.words, &self.n_fp.prime().words) {
            let mut y = UInt::ZERO;
            mp::sub(&mut y.words, &x.words, &self.n_fp.prime().words);
            y
        } else {
            *x
        }
    }

    /// Public key `Q = d * G` from a boxed secret scalar.
    pub fn public_key_scalars(&self, sk: &UInt<W, NNW>) -> (UInt<W, NPW>, UInt<W, NPW>) {
        let p = self.mul_proj(&EcPointP::from_affine(self.g.x, self.g.y), &sk.words);
        let p = self.normalize(&p);
        (p.x, p.y)
    }

    /// Produces the signature pair for a boxed digest, ephemeral scalar
    /// and secret scalar.
    ///
    /// Inputs must already be masked to `NNB` bits. Returns `None` when
    /// either signature component degenerates to zero. The `s` component
    /// is canonicalized to the low half of the order.
    pub fn sign_scalars(
        &self,
        hash: &UInt<W, NNW>,
        ek: &UInt<W, NNW>,
        sk: &UInt<W, NNW>,
    ) -> Option<(UInt<W, NNW>, UInt<W, NNW>)> {
        let ek_red = self.reduce_once(ek);
        let sk_red = self.reduce_once(sk);

        let p = self.mul_proj(&EcPointP::from_affine(self.g.x, self.g.y), &ek.words);
        let p = self.normalize(&p);

        let r = self.n_fp.modulo(&p.x.words);
        if r.is_zero() {
            return None;
        }

        let z = self.reduce_once(hash);
        let mut s = self.n_fp.mul(&r, &sk_red);
        s = self.n_fp.add(&s, &z);
        s = self.n_fp.mul(&s, &self.n_fp.inverse(&ek_red));
        if s.is_zero() {
            return None;
        }

        // low-s form: keep the smaller of s and n - s
        let ns = self.n_fp.sub(&UInt::ZERO, &s);
        if mp::lt(&ns.words, &s.words) {
            s = ns;
        }
        Some((r, s))
    }

    /// Checks a signature pair against a boxed digest and public key.
    ///
    /// Signature components outside `[1, n - 1]` and public keys that
    /// are out of range or off the curve are rejected up front; every
    /// rejection reads as an invalid signature, never as an error.
    pub fn verify_scalars(
        &self,
        r: &UInt<W, NNW>,
        s: &UInt<W, NNW>,
        hash: &UInt<W, NNW>,
        qx: &UInt<W, NPW>,
        qy: &UInt<W, NPW>,
    ) -> bool {
        let n = self.n_fp.prime();
        if r.is_zero() || s.is_zero() || mp::ge(&r.words, &n.words) || mp::ge(&s.words, &n.words)
        {
            return false;
        }
        let p = self.p_fp.prime();
        if mp::ge(&qx.words, &p.words) || mp::ge(&qy.words, &p.words) {
            return false;
        }
        let q = EcPoint::new(*qx, *qy);
        if !self.is_on_curve(&q) {
            return false;
        }

        let z = self.reduce_once(hash);
        let w = self.n_fp.inverse(s);
        let u1 = self.n_fp.mul(&z, &w);
        let u2 = self.n_fp.mul(r, &w);

        let p1 = self.mul_proj(&EcPointP::from_affine(self.g.x, self.g.y), &u1.words);
        let p2 = self.mul_proj(&EcPointP::from_affine(q.x, q.y), &u2.words);
        let sum = self.normalize(&self.add_proj(&p1, &p2));

        let rt = self.n_fp.modulo(&sum.x.words);
        rt == *r
    }
}

/// Byte-level operations shared by every curve instantiation.
///
/// The "prime" accessors report the group order n; the coordinate
/// accessors report the field prime p. The naming follows the engine's
/// long-standing external interface and is kept for compatibility.
pub trait CipherOps {
    fn prime_bit_length(&self) -> usize;

    fn prime_byte_length(&self) -> usize {
        self.prime_bit_length().div_ceil(8)
    }

    /// Serializes the group order big-endian into `out`.
    fn prime_bytes(&self, out: &mut [u8]);

    fn coordinate_bit_length(&self) -> usize;

    fn coordinate_byte_length(&self) -> usize {
        self.coordinate_bit_length().div_ceil(8)
    }

    /// Derives the public key of a big-endian secret scalar.
    fn public_key(&self, qx: &mut [u8], qy: &mut [u8], secret: &[u8]);

    /// Signs a digest; returns `false` on a degenerate signature.
    fn sign(&self, r: &mut [u8], s: &mut [u8], digest: &[u8], ephemeral: &[u8], secret: &[u8])
    -> bool;

    /// Verifies a signature; malformed input reads as invalid.
    fn verify(&self, r: &[u8], s: &[u8], digest: &[u8], qx: &[u8], qy: &[u8]) -> bool;
}

impl<W: Word, const NPB: usize, const NPW: usize, const NNB: usize, const NNW: usize> CipherOps
    for Cipher<W, NPB, NPW, NNB, NNW>
{
    fn prime_bit_length(&self) -> usize {
        NNB
    }

    fn prime_bytes(&self, out: &mut [u8]) {
        self.n_fp.prime().to_bytes(out);
    }

    fn coordinate_bit_length(&self) -> usize {
        NPB
    }

    fn public_key(&self, qx: &mut [u8], qy: &mut [u8], secret: &[u8]) {
        let mask = UInt::<W, NNW>::ones(NNB);
        let sk = UInt::from_bytes(secret) & mask;
        let (x, y) = self.public_key_scalars(&sk);
        x.to_bytes(qx);
        y.to_bytes(qy);
    }

    fn sign(
        &self,
        r: &mut [u8],
        s: &mut [u8],
        digest: &[u8],
        ephemeral: &[u8],
        secret: &[u8],
    ) -> bool {
        let mask = UInt::<W, NNW>::ones(NNB);
        let ek = UInt::from_bytes(ephemeral) & mask;
        let sk = UInt::from_bytes(secret) & mask;
        let hash = self.box_hash(digest);

        match self.sign_scalars(&hash, &ek, &sk) {
            Some((r_val, s_val)) => {
                r_val.to_bytes(r);
                s_val.to_bytes(s);
                true
            }
            None => false,
        }
    }

    fn verify(&self, r: &[u8], s: &[u8], digest: &[u8], qx: &[u8], qy: &[u8]) -> bool {
        let r_box = UInt::<W, NNW>::from_bytes(r);
        let s_box = UInt::<W, NNW>::from_bytes(s);
        let qx_box = UInt::<W, NPW>::from_bytes(qx);
        let qy_box = UInt::<W, NPW>::from_bytes(qy);
        let hash = self.box_hash(digest);
        self.verify_scalars(&r_box, &s_box, &hash, &qx_box, &qy_box)
    }
}
