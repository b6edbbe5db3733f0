//! Prime field arithmetic with Barrett reduction.
//!
//! [`Fp`] implements the field of integers modulo a prime of `NP` bits,
//! stored in `NW` words. Every operation takes canonical residues in
//! `[0, prime)` and returns a canonical residue.
//!
//! ## Reduction regimes
//!
//! The field is tuned at compile time to one of two regimes, selected by
//! whether the prime fills its word array exactly (`NP == NW * W::BITS`):
//!
//! - **compact**: the prime is `2^NP - m` for a small `m`. Sums reduce by
//!   adding `m` (a two's-complement subtraction of the modulus), and
//!   products reduce with the `m`-driven Barrett variant.
//! - **general**: any other prime. Sums reduce by subtracting the prime,
//!   and products use classical Barrett with `r = floor(4^NP / prime)`.
//!
//! The Barrett multiplier `r` is supplied by the caller together with the
//! prime; the SEC curve tables carry both as hex constants.
//!
//! ## Inversion
//!
//! [`Fp::inverse`] is a binary extended-Euclidean variant working on two
//! value triplets. A logical swap flag selects which triplet currently
//! holds the larger value, so the triplets are never physically
//! exchanged. The loop finishes within `2 * NW * W::BITS` iterations; a
//! zero input yields zero.

use crate::primitives::mp;
use crate::primitives::uint::UInt;
use crate::primitives::word::Word;

/// Prime field over a single-word modulus.
///
/// The small sibling of [`Fp`]: residues are plain words, reduction goes
/// through the double-width type, and inversion falls back to the
/// word-level extended Euclidean routine. Useful for the word-sized
/// moduli where a full Barrett context would be overhead.
#[derive(Clone, Copy, Debug)]
pub struct SmallFp<W: Word> {
    prime: W,
}

impl<W: Word> SmallFp<W> {
    pub fn new(prime: W) -> Self {
        Self { prime }
    }

    pub fn bits(&self) -> usize {
        W::BITS as usize
    }

    pub fn prime(&self) -> W {
        self.prime
    }

    pub fn add(&self, a: W, b: W) -> W {
        let (s, c) = a.carrying_add(b, W::ZERO);
        if c != W::ZERO || s >= self.prime {
            s.wrapping_sub(self.prime)
        } else {
            s
        }
    }

    pub fn sub(&self, a: W, b: W) -> W {
        let (d, borrow) = a.borrowing_sub(b, false);
        if borrow { d.wrapping_add(self.prime) } else { d }
    }

    pub fn mul(&self, a: W, b: W) -> W {
        a.mul_mod(b, self.prime)
    }

    pub fn square(&self, a: W) -> W {
        self.mul(a, a)
    }

    pub fn twice(&self, a: W) -> W {
        self.add(a, a)
    }

    pub fn half(&self, a: W) -> W {
        if a & W::ONE == W::ONE {
            (a >> 1).wrapping_add((self.prime >> 1).wrapping_add(W::ONE))
        } else {
            a >> 1
        }
    }

    pub fn inverse(&self, a: W) -> W {
        mp::word_inverse_mod(a, self.prime)
    }
}

/// Prime field context for an `NP`-bit prime over `NW` words of `W`.
#[derive(Clone, Debug)]
pub struct Fp<W: Word, const NP: usize, const NW: usize> {
    prime: UInt<W, NW>,
    half_prime: UInt<W, NW>,
    m: UInt<W, NW>,
    r: UInt<W, NW>,
    nm: usize,
    nr: usize,
}

impl<W: Word, const NP: usize, const NW: usize> Fp<W, NP, NW> {
    /// Whether the prime fills the word array exactly (compact regime).
    const FW: bool = NP == NW * W::BITS as usize;

    /// Builds a field context from the prime and its Barrett multiplier,
    /// both as big-endian hex strings.
    pub fn new(prime: &str, r: &str) -> Self {
        let prime: UInt<W, NW> = UInt::from_hex(prime);
        let r: UInt<W, NW> = UInt::from_hex(r);

        // m = 2^NP - prime, modulo the array width
        let two_pow: UInt<W, NW> = UInt::ONE << NP;
        let mut m = UInt::ZERO;
        mp::sub(&mut m.words, &two_pow.words, &prime.words);

        let mut half_prime = prime >> 1;
        mp::add_word_assign(&mut half_prime.words, W::ONE);

        let nm = m.word_count();
        let nr = r.word_count();
        Self {
            prime,
            half_prime,
            m,
            r,
            nm,
            nr,
        }
    }

    /// Bit length of the prime.
    pub fn bits(&self) -> usize {
        NP
    }

    pub fn prime(&self) -> &UInt<W, NW> {
        &self.prime
    }

    /// `(a + b) mod prime`.
    pub fn add(&self, a: &UInt<W, NW>, b: &UInt<W, NW>) -> UInt<W, NW> {
        let mut x = UInt::ZERO;
        let c = mp::add(&mut x.words, &a.words, &b.words);
        if Self::FW {
            if c != W::ZERO || mp::carry(&x.words, &self.m.words[..self.nm]) != W::ZERO {
                mp::add_assign_ragged(&mut x.words, &self.m.words[..self.nm]);
            }
        } else if mp::ge(&x.words, &self.prime.words) {
            mp::sub_assign_ragged(&mut x.words, &self.prime.words);
        }
        x
    }

    /// `(a - b) mod prime`.
    pub fn sub(&self, a: &UInt<W, NW>, b: &UInt<W, NW>) -> UInt<W, NW> {
        let mut x = UInt::ZERO;
        let borrow = mp::sub(&mut x.words, &a.words, &b.words);
        if borrow {
            if Self::FW {
                mp::sub_assign_ragged(&mut x.words, &self.m.words[..self.nm]);
            } else {
                mp::add_assign_ragged(&mut x.words, &self.prime.words);
            }
        }
        x
    }

    /// `2u mod prime`.
    pub fn twice(&self, u: &UInt<W, NW>) -> UInt<W, NW> {
        let mut x = UInt::ZERO;
        if Self::FW {
            let big = u.words[NW - 1] >> (W::BITS - 1) == W::ONE;
            mp::shift_left(&mut x.words, &u.words, 1);
            if big || mp::carry(&x.words, &self.m.words[..self.nm]) != W::ZERO {
                mp::add_assign_ragged(&mut x.words, &self.m.words[..self.nm]);
            }
        } else {
            mp::shift_left(&mut x.words, &u.words, 1);
            if mp::ge(&x.words, &self.prime.words) {
                mp::sub_assign_ragged(&mut x.words, &self.prime.words);
            }
        }
        x
    }

    /// `u / 2 mod prime`.
    ///
    /// An odd input folds the dropped bit back in by adding
    /// `(prime + 1) / 2`.
    pub fn half(&self, u: &UInt<W, NW>) -> UInt<W, NW> {
        let odd = u.is_odd();
        let x = *u >> 1;
        if odd { self.add(&x, &self.half_prime) } else { x }
    }

    /// `(a * b) mod prime`.
    pub fn mul(&self, a: &UInt<W, NW>, b: &UInt<W, NW>) -> UInt<W, NW> {
        let mut prod = [W::ZERO; 2 * mp::MAX_WORDS];
        mp::mul(&mut prod[..2 * NW], &a.words, &b.words);
        self.reduce(&prod[..2 * NW])
    }

    /// `a^2 mod prime`.
    pub fn square(&self, a: &UInt<W, NW>) -> UInt<W, NW> {
        let mut prod = [W::ZERO; 2 * mp::MAX_WORDS];
        mp::square(&mut prod[..2 * NW], &a.words);
        self.reduce(&prod[..2 * NW])
    }

    /// Reduces a value of up to `2 * NW` words into the field.
    pub fn modulo(&self, a: &[W]) -> UInt<W, NW> {
        debug_assert!(a.len() <= 2 * NW);
        let mut wide = [W::ZERO; 2 * mp::MAX_WORDS];
        wide[..a.len()].copy_from_slice(a);
        self.reduce(&wide[..2 * NW])
    }

    fn reduce(&self, prod: &[W]) -> UInt<W, NW> {
        let mut t = [W::ZERO; 3 * mp::MAX_WORDS];
        let mut x = UInt::ZERO;
        if Self::FW {
            mp::barrett_compact(
                &mut x.words,
                prod,
                &self.m.words[..self.nm],
                &self.r.words[..self.nr],
                &mut t[..3 * NW],
            );
        } else {
            mp::barrett_wide(
                &mut x.words,
                prod,
                &self.prime.words,
                &self.r.words,
                NP,
                &mut t[..3 * NW],
            );
        }
        x
    }

    /// `u^-1 mod prime`, zero for a zero input.
    pub fn inverse(&self, u: &UInt<W, NW>) -> UInt<W, NW> {
        let one = UInt::<W, NW>::ONE;
        let mut x = [self.prime, *u];
        let mut a = [UInt::<W, NW>::ONE, UInt::ZERO];
        let mut b = [UInt::<W, NW>::ZERO, UInt::ONE];

        // x[h] >= x[l] throughout; the flag tracks which slot is which
        let mut swap = false;
        for _ in 0..(2 * NW * W::BITS as usize) {
            let (h, l) = if swap { (1, 0) } else { (0, 1) };
            if x[l] == one {
                return b[l];
            }
            let h_odd = x[h].is_odd();
            let l_odd = x[l].is_odd();

            if h_odd && l_odd {
                let mut d = UInt::ZERO;
                mp::sub(&mut d.words, &x[h].words, &x[l].words);
                x[h] = d >> 1;
                a[h] = self.half(&self.sub(&a[h], &a[l]));
                b[h] = self.half(&self.sub(&b[h], &b[l]));
                if mp::lt(&x[h].words, &x[l].words) {
                    swap = !swap;
                }
            } else if h_odd {
                x[l] = x[l] >> 1;
                a[l] = self.half(&a[l]);
                b[l] = self.half(&b[l]);
            } else if l_odd {
                x[h] = x[h] >> 1;
                a[h] = self.half(&a[h]);
                b[h] = self.half(&b[h]);
                if mp::lt(&x[h].words, &x[l].words) {
                    swap = !swap;
                }
            }
        }
        UInt::ZERO
    }
}
