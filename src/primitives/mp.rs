//! Multi-precision arithmetic over word slices.
//!
//! Numbers are arrays of machine words, least significant word first.
//! Every routine writes into a caller-allocated output slice and works
//! on explicit word counts taken from the slice lengths, so the hot
//! paths never touch the heap. Scratch space, where needed, is supplied
//! by the caller as well.
//!
//! Two Barrett reduction variants are provided:
//! - [`barrett_compact`] for moduli of the form `2^n - m` with small `m`,
//!   where the reduction can be driven entirely by `m`;
//! - [`barrett_wide`] for a general modulus, using the classical
//!   `q = floor(prod * r / 4^np)` estimate.

use super::word::Word;

/// Upper bound on the word count of a single field element across all
/// supported instantiations (a 256-bit field over 16-bit words).
pub const MAX_WORDS: usize = 16;

/// `x = a + b` over equally sized slices; returns the carry word.
pub fn add<W: Word>(x: &mut [W], a: &[W], b: &[W]) -> W {
    let mut c = W::ZERO;
    for i in 0..x.len() {
        (x[i], c) = a[i].carrying_add(b[i], c);
    }
    c
}

/// `x = a + b` where `b` may be shorter than `a`; returns the carry word.
pub fn add_ragged<W: Word>(x: &mut [W], a: &[W], b: &[W]) -> W {
    debug_assert!(a.len() >= b.len() && x.len() == a.len());
    let mut c = W::ZERO;
    for i in 0..b.len() {
        (x[i], c) = a[i].carrying_add(b[i], c);
    }
    for i in b.len()..a.len() {
        (x[i], c) = a[i].carrying_add(W::ZERO, c);
    }
    c
}

/// `x += b` where `b` may be shorter than `x`; returns the carry word.
pub fn add_assign_ragged<W: Word>(x: &mut [W], b: &[W]) -> W {
    debug_assert!(x.len() >= b.len());
    let mut c = W::ZERO;
    for i in 0..b.len() {
        (x[i], c) = x[i].carrying_add(b[i], c);
    }
    for i in b.len()..x.len() {
        (x[i], c) = x[i].carrying_add(W::ZERO, c);
    }
    c
}

/// `x += w` for a single word addend; returns the carry word.
pub fn add_word_assign<W: Word>(x: &mut [W], w: W) -> W {
    let mut c = w;
    for i in 0..x.len() {
        (x[i], c) = x[i].carrying_add(c, W::ZERO);
    }
    c
}

/// `x = a - b` over equally sized slices; returns whether a borrow
/// propagated out of the most significant word.
pub fn sub<W: Word>(x: &mut [W], a: &[W], b: &[W]) -> bool {
    let mut borrow = false;
    for i in 0..x.len() {
        (x[i], borrow) = a[i].borrowing_sub(b[i], borrow);
    }
    borrow
}

/// `x = a - b` where `b` may be shorter than `a`.
pub fn sub_ragged<W: Word>(x: &mut [W], a: &[W], b: &[W]) -> bool {
    debug_assert!(a.len() >= b.len() && x.len() == a.len());
    let mut borrow = false;
    for i in 0..b.len() {
        (x[i], borrow) = a[i].borrowing_sub(b[i], borrow);
    }
    for i in b.len()..a.len() {
        (x[i], borrow) = a[i].borrowing_sub(W::ZERO, borrow);
    }
    borrow
}

/// `x -= b` where `b` may be shorter than `x`.
pub fn sub_assign_ragged<W: Word>(x: &mut [W], b: &[W]) -> bool {
    debug_assert!(x.len() >= b.len());
    let mut borrow = false;
    for i in 0..b.len() {
        (x[i], borrow) = x[i].borrowing_sub(b[i], borrow);
    }
    for i in b.len()..x.len() {
        (x[i], borrow) = x[i].borrowing_sub(W::ZERO, borrow);
    }
    borrow
}

/// Schoolbook product; `x` must hold exactly `a.len() + b.len()` words.
pub fn mul<W: Word>(x: &mut [W], a: &[W], b: &[W]) {
    debug_assert_eq!(x.len(), a.len() + b.len());
    x.fill(W::ZERO);
    for j in 0..b.len() {
        let mut c = W::ZERO;
        for i in 0..a.len() {
            (x[i + j], c) = x[i + j].mul_acc(a[i], b[j], c);
        }
        x[j + a.len()] = c;
    }
}

/// Square of `a` into `2 * a.len()` words.
///
/// Accumulates the off-diagonal triangle once, doubles it, then folds in
/// the diagonal squares. Roughly halves the partial products of a full
/// schoolbook multiply.
pub fn square<W: Word>(x: &mut [W], a: &[W]) {
    let n = a.len();
    debug_assert_eq!(x.len(), 2 * n);
    x.fill(W::ZERO);

    for j in 0..n {
        let mut c = W::ZERO;
        for i in (j + 1)..n {
            (x[i + j], c) = x[i + j].mul_acc(a[i], a[j], c);
        }
        x[j + n] = c;
    }

    let mut c = W::ZERO;
    for i in 0..(2 * n) {
        (x[i], c) = x[i].carrying_add(x[i], c);
    }

    let mut c = W::ZERO;
    for j in 0..n {
        let (pl, ph) = a[j].wide_mul(a[j]);
        (x[2 * j], c) = x[2 * j].carrying_add(pl, c);
        (x[2 * j + 1], c) = x[2 * j + 1].carrying_add(ph, c);
    }
}

/// `x = a + b * m` for a word multiplier `m`; returns the carry word.
///
/// `b` may be shorter than `a`; `x` and `a` are the same length.
pub fn mult_add<W: Word>(x: &mut [W], a: &[W], b: &[W], m: W) -> W {
    debug_assert!(a.len() >= b.len() && x.len() == a.len());
    let mut c = W::ZERO;
    for i in 0..b.len() {
        (x[i], c) = a[i].mul_acc(b[i], m, c);
    }
    for i in b.len()..a.len() {
        (x[i], c) = a[i].carrying_add(c, W::ZERO);
    }
    c
}

/// `x = a >> bits`, zero filling from the top.
pub fn shift_right<W: Word>(x: &mut [W], a: &[W], bits: usize) {
    let n = x.len();
    debug_assert_eq!(a.len(), n);
    let wb = W::BITS as usize;
    let bh = (bits / wb).min(n);
    let bl = (bits % wb) as u32;
    let blc = W::BITS - bl;
    let mut c = if bh < n { a[bh] } else { W::ZERO };
    for i in 1..(n - bh) {
        let d = a[i + bh];
        x[i - 1] = if bl > 0 { (c >> bl) | (d << blc) } else { c };
        c = d;
    }
    if bh < n {
        x[n - bh - 1] = c >> bl;
    }
    for i in (n - bh)..n {
        x[i] = W::ZERO;
    }
}

/// In-place variant of [`shift_right`].
pub fn shift_right_assign<W: Word>(x: &mut [W], bits: usize) {
    let n = x.len();
    let wb = W::BITS as usize;
    let bh = (bits / wb).min(n);
    let bl = (bits % wb) as u32;
    let blc = W::BITS - bl;
    let mut c = if bh < n { x[bh] } else { W::ZERO };
    for i in 1..(n - bh) {
        let d = x[i + bh];
        x[i - 1] = if bl > 0 { (c >> bl) | (d << blc) } else { c };
        c = d;
    }
    if bh < n {
        x[n - bh - 1] = c >> bl;
    }
    for i in (n - bh)..n {
        x[i] = W::ZERO;
    }
}

/// `x = a << bits`, zero filling from the bottom.
pub fn shift_left<W: Word>(x: &mut [W], a: &[W], bits: usize) {
    let n = x.len();
    debug_assert_eq!(a.len(), n);
    let wb = W::BITS as usize;
    let bh = (bits / wb).min(n);
    let bl = (bits % wb) as u32;
    let blc = W::BITS - bl;
    for w in x.iter_mut().take(bh) {
        *w = W::ZERO;
    }
    let mut c = W::ZERO;
    for i in bh..n {
        let d = a[i - bh];
        x[i] = if bl > 0 { (d << bl) | (c >> blc) } else { d };
        c = d;
    }
}

pub fn bitand<W: Word>(x: &mut [W], a: &[W], b: &[W]) {
    for i in 0..x.len() {
        x[i] = a[i] & b[i];
    }
}

pub fn bitor<W: Word>(x: &mut [W], a: &[W], b: &[W]) {
    for i in 0..x.len() {
        x[i] = a[i] | b[i];
    }
}

pub fn bitxor<W: Word>(x: &mut [W], a: &[W], b: &[W]) {
    for i in 0..x.len() {
        x[i] = a[i] ^ b[i];
    }
}

/// Carry that `a + b` would produce out of `max(a.len(), b.len())`
/// words, without materializing the sum.
pub fn carry<W: Word>(a: &[W], b: &[W]) -> W {
    if b.len() > a.len() {
        return carry(b, a);
    }
    let mut c = W::ZERO;
    for i in 0..b.len() {
        (_, c) = a[i].carrying_add(b[i], c);
    }
    for i in b.len()..a.len() {
        (_, c) = a[i].carrying_add(W::ZERO, c);
    }
    c
}

pub fn is_zero<W: Word>(a: &[W]) -> bool {
    a.iter().all(|w| *w == W::ZERO)
}

pub fn eq<W: Word>(a: &[W], b: &[W]) -> bool {
    a == b
}

/// `a > b`, comparing most significant words first.
pub fn gt<W: Word>(a: &[W], b: &[W]) -> bool {
    for i in (0..a.len()).rev() {
        if a[i] > b[i] {
            return true;
        }
        if a[i] < b[i] {
            return false;
        }
    }
    false
}

pub fn lt<W: Word>(a: &[W], b: &[W]) -> bool {
    for i in (0..a.len()).rev() {
        if a[i] < b[i] {
            return true;
        }
        if a[i] > b[i] {
            return false;
        }
    }
    false
}

pub fn ge<W: Word>(a: &[W], b: &[W]) -> bool {
    !lt(a, b)
}

pub fn le<W: Word>(a: &[W], b: &[W]) -> bool {
    !gt(a, b)
}

/// Inverse of an odd word modulo `2^BITS`, by the extended Euclidean
/// algorithm on the wrapped quotients.
pub fn word_inverse<W: Word>(x: W) -> W {
    debug_assert!(x & W::ONE == W::ONE);
    if x == W::ONE {
        return W::ONE;
    }
    let q = W::MAX / x;
    let r = (W::MAX % x).wrapping_add(W::ONE);

    let mut t2 = W::ONE;
    let mut t1 = W::ZERO.wrapping_sub(q);
    let mut r2 = x;
    let mut r1 = r;

    while r1 != W::ZERO {
        let q = r2 / r1;
        let r = r2 % r1;
        let t = t2.wrapping_sub(q.wrapping_mul(t1));
        t2 = t1;
        t1 = t;
        r2 = r1;
        r1 = r;
    }
    t2
}

/// Inverse of `x` modulo an arbitrary single-word modulus.
///
/// Returns garbage when `gcd(x, modulus) != 1`; the caller picks
/// coprime inputs.
pub fn word_inverse_mod<W: Word>(x: W, modulus: W) -> W {
    if x == W::ONE {
        return W::ONE;
    }
    let q = modulus / x;
    let r = modulus % x;

    let mut t2 = W::ONE;
    let mut t1 = modulus.wrapping_sub(q);
    let mut r2 = x;
    let mut r1 = r;

    while r1 != W::ZERO {
        let q = r2 / r1;
        let r = r2 % r1;
        let v1 = q.mul_mod(t1, modulus);
        // t = t2 - v1 (mod modulus), kept in range without widening
        let t = if t2 > v1 {
            t2.wrapping_sub(v1)
        } else {
            t2.wrapping_sub(v1).wrapping_add(modulus)
        };
        t2 = t1;
        t1 = t;
        r2 = r1;
        r1 = r;
    }
    t2
}

/// Barrett reduction for a modulus `2^n - m` with small `m`.
///
/// `prod` is the `2n`-word value to reduce, `m` and `r` are trimmed to
/// their significant words, and `t` is a `3n`-word scratch slice. The
/// quotient estimate is `q = floor(prod * (2^n + r) / 4^n)` with
/// `r ~ m + m^2 / 2^n`; the estimate is close enough that a single
/// conditional `+ m` (a subtraction of the modulus in two's complement)
/// finishes the job.
pub fn barrett_compact<W: Word>(x: &mut [W], prod: &[W], m: &[W], r: &[W], t: &mut [W]) {
    let n = x.len();
    let nm = m.len();
    let nr = r.len();
    debug_assert_eq!(prod.len(), 2 * n);
    debug_assert_eq!(t.len(), 3 * n);
    debug_assert!(nm <= n && nr <= n);

    // t[n..3n] = prod + prod * r / 2^n words, so t[2n..3n] = q
    mul(&mut t[..2 * n + nr], prod, r);
    let mut c = W::ZERO;
    for i in 0..(n + nr) {
        (t[n + i], c) = prod[i].carrying_add(t[n + i], c);
    }
    for i in (n + nr)..(2 * n) {
        (t[n + i], c) = prod[i].carrying_add(c, W::ZERO);
    }

    // t[0..2n] = q * (2^n - m), built as q * 2^n - q * m
    {
        let (lo, hi) = t.split_at_mut(2 * n);
        mul(&mut lo[..n + nm], &hi[..n], m);
    }
    let mut borrow = false;
    for i in 0..(n + nm) {
        (t[i], borrow) = W::ZERO.borrowing_sub(t[i], borrow);
    }
    for i in (n + nm)..(2 * n) {
        (t[i], borrow) = W::ZERO.borrowing_sub(W::ZERO, borrow);
    }
    {
        let (lo, hi) = t.split_at_mut(2 * n);
        add_assign_ragged(&mut lo[n..2 * n], &hi[..n]);
    }

    // t[0..2n] = prod - q * modulus
    let mut borrow = false;
    for i in 0..(2 * n) {
        (t[i], borrow) = prod[i].borrowing_sub(t[i], borrow);
    }

    let done = is_zero(&t[n..2 * n]) && carry(&t[..n], m) == W::ZERO;
    if done {
        x.copy_from_slice(&t[..n]);
    } else {
        add_ragged(x, &t[..n], m);
    }
}

/// Classical Barrett reduction for a general modulus of `np` bits.
///
/// `prod` is `2n` words, `r = floor(4^np / prime)` occupies the full
/// `n` words, and `t` is a `3n`-word scratch slice. At most one final
/// subtraction of the modulus is needed.
pub fn barrett_wide<W: Word>(x: &mut [W], prod: &[W], prime: &[W], r: &[W], np: usize, t: &mut [W]) {
    let n = x.len();
    debug_assert_eq!(prod.len(), 2 * n);
    debug_assert_eq!(prime.len(), n);
    debug_assert_eq!(r.len(), n);
    debug_assert_eq!(t.len(), 3 * n);

    mul(t, prod, r);
    shift_right_assign(t, 2 * np);

    {
        let (q, rest) = t.split_at_mut(n);
        mul(rest, q, prime);
    }
    let mut borrow = false;
    for i in 0..(2 * n) {
        (t[n + i], borrow) = prod[i].borrowing_sub(t[n + i], borrow);
    }

    let done = is_zero(&t[2 * n..]) && lt(&t[n..2 * n], prime);
    if done {
        x.copy_from_slice(&t[n..2 * n]);
    } else {
        sub(x, &t[n..2 * n], prime);
    }
}
