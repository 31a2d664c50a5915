//! The table of field sizes offered to curve explorers.

/// The first one hundred primes, `2..=541`.
///
/// Curves are only ever drawn over one of these fields, which keeps the
/// brute-force group order computation (`O(p²)`) cheap.
pub const PRIMES: [u64; 100] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
];

/// Look up the `index`-th prime of [`PRIMES`] (zero based).
pub fn prime_at(index: usize) -> Option<u64> {
    PRIMES.get(index).copied()
}

/// Trial-division primality test.
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }

    let mut d = 2;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }

    true
}
