//! Mixed-radix positional conversion.
//!
//! An HRID is a number written in a positional system where each digit has
//! its own base: the length of the word list backing that element. These
//! routines convert between an integer and its per-element digits. Digits
//! are ordered most-significant first, matching the configured element
//! order.

/// Decomposes `n` into mixed-radix digits for the given bases.
///
/// Processes bases from least-significant (last) to most-significant
/// (first) by repeated division, then returns the digits in
/// most-significant-first order. Each digit is a valid index into the
/// word list whose length is the corresponding base.
///
/// Precondition: every base is nonzero and `n < product(bases)`.
pub(crate) fn decompose(mut n: u64, bases: &[u64]) -> Vec<usize> {
    let mut digits = Vec::with_capacity(bases.len());
    for &base in bases.iter().rev() {
        digits.push((n % base) as usize);
        n /= base;
    }
    digits.reverse();
    digits
}

/// Composes mixed-radix digits back into an integer.
///
/// Horner's method over mixed radices: `n = n * base + digit` across
/// digits in most-significant-first order. Exact inverse of
/// [`decompose`] for the same bases.
///
/// Precondition: `digits.len() == bases.len()` and each digit is below
/// its base.
pub(crate) fn compose(digits: &[usize], bases: &[u64]) -> u64 {
    digits
        .iter()
        .zip(bases)
        .fold(0u64, |n, (&digit, &base)| n * base + digit as u64)
}
