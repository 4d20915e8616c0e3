//! Multiplicative scrambling over the ID space.
//!
//! Scrambling maps an index `n` to `(n * multiplier) mod space_size` before
//! mixed-radix decomposition, so sequential inputs land far apart in the
//! ID space. With the multiplier coprime to `space_size` the map is a
//! bijection over `[0, space_size)`, and its inverse is multiplication by
//! the modular inverse of the multiplier. This is a reversible permutation
//! for visual de-correlation, not a cipher.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Well-known large odd constants tried when no scramble seed is given:
/// two golden-ratio-derived primes, then the 32-bit FNV offset basis and
/// FNV prime. Order matters for compatibility with already-issued IDs.
const COPRIME_CANDIDATES: [u64; 4] = [2654435769, 1640531527, 2166136261, 16777619];

/// Maximum candidates drawn in the seeded coprime search before falling
/// back to the fixed constants.
const SEEDED_SEARCH_BUDGET: usize = 1000;

/// Reversible multiplicative permutation of `[0, space_size)`.
///
/// Construction selects a multiplier coprime to `space_size` and computes
/// its modular inverse once; [`apply`](Self::apply) and
/// [`invert`](Self::invert) are then pure modular multiplications.
#[derive(Debug, Clone)]
pub(crate) struct Scrambler {
    multiplier: u64,
    inverse: u64,
    space_size: u64,
}

impl Scrambler {
    /// Builds a scrambler for the given space size.
    ///
    /// With a seed, the multiplier is drawn deterministically from a
    /// seeded search, so distinct seeds yield distinct scrambling
    /// patterns while identical seeds reproduce the same one.
    pub(crate) fn new(space_size: u64, seed: Option<&str>) -> Self {
        let multiplier = find_coprime(space_size, seed);
        let inverse = mod_inverse(multiplier, space_size);
        Scrambler {
            multiplier,
            inverse,
            space_size,
        }
    }

    /// Scrambles an index: `(n * multiplier) mod space_size`.
    pub(crate) fn apply(&self, n: u64) -> u64 {
        mul_mod(n, self.multiplier, self.space_size)
    }

    /// Unscrambles an index: `(n * inverse) mod space_size`.
    pub(crate) fn invert(&self, n: u64) -> u64 {
        mul_mod(n, self.inverse, self.space_size)
    }
}

/// Modular multiplication with a u128 intermediate, exact for any
/// `m <= u64::MAX`.
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// Greatest common divisor by the Euclidean algorithm.
pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Modular multiplicative inverse via the iterative extended Euclidean
/// algorithm, normalized into `[0, m)`.
///
/// Precondition: `gcd(a, m) == 1`. Coprimality is guaranteed by
/// [`find_coprime`], so it is not re-checked here.
pub(crate) fn mod_inverse(a: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    // Track only the Bézout coefficient of `a`; the gcd itself is known
    // to be 1. Coefficients are bounded by m, so i128 cannot overflow.
    let (mut r0, mut r1) = (i128::from(a % m), i128::from(m));
    let (mut x0, mut x1) = (1i128, 0i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (x0, x1) = (x1, x0 - q * x1);
    }
    x0.rem_euclid(i128::from(m)) as u64
}

/// Finds a number coprime to `n` for scrambling distribution.
///
/// Selection order:
/// 1. `n == 1`: return 1 (scrambling is a no-op on a one-value space).
/// 2. With a seed: draw up to [`SEEDED_SEARCH_BUDGET`] candidates from
///    `[n / 3, n)` using a ChaCha stream seeded from the string, and
///    return the first coprime. The restricted range is kept as-is so a
///    given seed selects the same multiplier across implementations.
/// 3. The fixed [`COPRIME_CANDIDATES`] constants, in order.
/// 4. Linear scan from `n / 2` upward; `n - 1` is always coprime to `n`,
///    so this terminates for every `n > 1`.
pub(crate) fn find_coprime(n: u64, seed: Option<&str>) -> u64 {
    if n == 1 {
        return 1;
    }

    if let Some(seed) = seed {
        let mut rng = ChaCha8Rng::seed_from_u64(seed_from_str(seed));
        for _ in 0..SEEDED_SEARCH_BUDGET {
            let candidate = rng.gen_range(n / 3..n);
            if gcd(candidate, n) == 1 {
                return candidate;
            }
        }
    }

    for &c in &COPRIME_CANDIDATES {
        if gcd(c, n) == 1 {
            return c;
        }
    }
    for c in n / 2..n {
        if gcd(c, n) == 1 {
            return c;
        }
    }
    1
}

/// Reduces a seed string to a u64 via FNV-1a, for seeding the candidate
/// stream deterministically across platforms.
fn seed_from_str(s: &str) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for &byte in s.as_bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
