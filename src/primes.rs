//! Prime capacities for the entity hash table.
//!
//! The table only ever grows into prime-sized slot arrays, each at least
//! double the previous one. [`sieve`] computes primality once up to a bound,
//! [`growth_sequence`] walks that bitmap to pick the capacities, and
//! [`PrimeTable`] hands them out one at a time as the table rehashes.

use log::warn;

use crate::error::PrimeError;

/// Largest bound accepted by [`sieve`]. Keeps the bitmap under ~100 MB.
pub const MAX_SIEVE_BOUND: i64 = 99_999_998;

/// Primality bitmap for every integer in `[0, bound]`
#[derive(Clone, PartialEq, Eq)]
pub struct Sieve {
    bits: Vec<bool>,
}

impl std::fmt::Debug for Sieve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sieve")
            .field("bound", &self.bound())
            .field("prime_count", &self.prime_count())
            .finish()
    }
}

/// Runs the sieve of Eratosthenes over `[2, bound]`.
pub fn sieve(bound: i64) -> Result<Sieve, PrimeError> {
    if !(2..=MAX_SIEVE_BOUND).contains(&bound) {
        return Err(PrimeError::InvalidBound(bound));
    }
    Ok(sieve_checked(bound as usize))
}

/// Sieve over a bound already known to be in range
fn sieve_checked(bound: usize) -> Sieve {
    let len = bound + 1;
    let mut bits = vec![true; len];
    bits[0] = false;
    bits[1] = false;

    let mut p = 2;
    while p * p < len {
        if bits[p] {
            for multiple in (p * p..len).step_by(p) {
                bits[multiple] = false;
            }
        }
        p += 1;
    }

    Sieve { bits }
}

impl Sieve {
    /// The inclusive upper bound this sieve was computed for
    pub fn bound(&self) -> usize {
        self.bits.len() - 1
    }

    pub fn is_prime(&self, n: usize) -> bool {
        self.bits.get(n).copied().unwrap_or(false)
    }

    /// All primes in `[2, bound]`, ascending
    pub fn primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(n, &prime)| prime.then_some(n))
    }

    pub fn prime_count(&self) -> usize {
        self.bits.iter().filter(|&&prime| prime).count()
    }

    /// Smallest prime in `[from, bound]`, if any
    fn next_prime_from(&self, from: usize) -> Option<usize> {
        (from..self.bits.len()).find(|&n| self.bits[n])
    }
}

/// Picks the doubling capacity sequence out of a sieve.
///
/// Starting at `seed`, records the smallest prime at or above the current
/// value, doubles that prime, and repeats until the value passes the bound.
/// Stops early when no prime is left between the current value and the
/// bound.
pub fn growth_sequence(sieve: &Sieve, seed: i64) -> Result<Vec<usize>, PrimeError> {
    let bound = sieve.bound();
    if seed < 2 || seed >= bound as i64 {
        return Err(PrimeError::InvalidSeed {
            seed,
            bound: bound as i64,
        });
    }

    Ok(doubling_primes(sieve, seed as usize))
}

fn doubling_primes(sieve: &Sieve, seed: usize) -> Vec<usize> {
    let bound = sieve.bound();
    let mut sequence = Vec::new();
    let mut value = seed;
    while value <= bound {
        let Some(prime) = sieve.next_prime_from(value) else {
            break;
        };
        sequence.push(prime);
        value = prime * 2;
    }
    sequence
}

fn is_prime_by_division(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

fn next_prime_at_least(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime_by_division(candidate) {
        candidate += 1;
    }
    candidate
}

/// Default sieve bound for a table's capacity sequence
pub const DEFAULT_SIEVE_BOUND: i64 = 1 << 20;

/// Default first capacity; the table starts at the smallest prime above it
pub const DEFAULT_CAPACITY_SEED: i64 = 10;

/// The capacity sequence owned by one hash table, plus a cursor that only
/// moves forward.
#[derive(Debug, Clone)]
pub struct PrimeTable {
    capacities: Vec<usize>,
    cursor: usize,
}

impl PrimeTable {
    /// Sieves up to `bound` and derives the capacities starting from `seed`.
    pub fn build(bound: i64, seed: i64) -> Result<Self, PrimeError> {
        let sieve = sieve(bound)?;
        let capacities = growth_sequence(&sieve, seed)?;
        Ok(Self::from_sequence(capacities, seed as usize))
    }

    fn from_sequence(mut capacities: Vec<usize>, seed: usize) -> Self {
        if capacities.is_empty() {
            // No prime between seed and bound; fall back to trial division.
            capacities.push(next_prime_at_least(seed));
        }
        Self {
            capacities,
            cursor: 0,
        }
    }

    /// Capacity at the cursor
    pub fn current(&self) -> usize {
        self.capacities[self.cursor]
    }

    /// Moves the cursor to the next capacity and returns it.
    ///
    /// Past the end of the pre-computed sequence the next capacity is the
    /// smallest prime at least double the last one.
    pub fn advance(&mut self) -> usize {
        if self.cursor + 1 == self.capacities.len() {
            let last = self.current();
            let next = next_prime_at_least(last * 2);
            warn!(
                "Prime growth sequence exhausted at {}; extending with {}",
                last, next
            );
            self.capacities.push(next);
        }
        self.cursor += 1;
        self.current()
    }

    /// How many times the cursor has advanced
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The capacities known so far, including any extended ones
    pub fn capacities(&self) -> &[usize] {
        &self.capacities
    }
}

impl Default for PrimeTable {
    /// Sequence for [`DEFAULT_SIEVE_BOUND`] and [`DEFAULT_CAPACITY_SEED`]
    fn default() -> Self {
        let sieve = sieve_checked(DEFAULT_SIEVE_BOUND as usize);
        let seed = DEFAULT_CAPACITY_SEED as usize;
        Self::from_sequence(doubling_primes(&sieve, seed), seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve_small_bound() {
        let sieve = sieve(30).unwrap();
        let primes: Vec<usize> = sieve.primes().collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(sieve.prime_count(), 10);
        assert_eq!(sieve.bound(), 30);
    }

    #[test]
    fn test_sieve_bound_is_inclusive() {
        let sieve = sieve(2).unwrap();
        assert!(sieve.is_prime(2));
        assert!(!sieve.is_prime(3)); // out of range
    }

    #[test]
    fn test_sieve_rejects_bad_bounds() {
        assert_eq!(sieve(1), Err(PrimeError::InvalidBound(1)));
        assert_eq!(sieve(-5), Err(PrimeError::InvalidBound(-5)));
        assert_eq!(
            sieve(MAX_SIEVE_BOUND + 1),
            Err(PrimeError::InvalidBound(MAX_SIEVE_BOUND + 1))
        );
    }

    #[test]
    fn test_growth_sequence_from_ten() {
        let sieve = sieve(100).unwrap();
        assert_eq!(growth_sequence(&sieve, 10).unwrap(), vec![11, 23, 47, 97]);
    }

    #[test]
    fn test_growth_sequence_stops_without_prime() {
        let sieve = sieve(100).unwrap();
        // 98, 99 and 100 are all composite
        assert!(growth_sequence(&sieve, 98).unwrap().is_empty());
    }

    #[test]
    fn test_growth_sequence_rejects_bad_seed() {
        let sieve = sieve(100).unwrap();
        assert!(matches!(
            growth_sequence(&sieve, 1),
            Err(PrimeError::InvalidSeed { seed: 1, bound: 100 })
        ));
        assert!(growth_sequence(&sieve, 100).is_err());
        assert!(growth_sequence(&sieve, 99).is_ok());
    }

    #[test]
    fn test_prime_table_extends_past_bound() {
        let mut table = PrimeTable::build(100, 10).unwrap();
        assert_eq!(table.current(), 11);
        assert_eq!(table.advance(), 23);
        assert_eq!(table.advance(), 47);
        assert_eq!(table.advance(), 97);
        // 194 is past the sieve; 197 is the next prime
        assert_eq!(table.advance(), 197);
        assert_eq!(table.position(), 4);
    }

    #[test]
    fn test_prime_table_falls_back_when_sequence_empty() {
        let table = PrimeTable::build(100, 98).unwrap();
        assert_eq!(table.current(), 101);
    }

    #[test]
    fn test_default_table_starts_at_eleven() {
        let mut table = PrimeTable::default();
        assert_eq!(table.current(), 11);
        assert_eq!(table.advance(), 23);
        assert!(table.capacities().windows(2).all(|w| w[1] >= w[0] * 2));
    }

    #[test]
    fn test_trial_division_agrees_with_sieve() {
        let sieve = sieve(500).unwrap();
        for n in 0..=500 {
            assert_eq!(sieve.is_prime(n), is_prime_by_division(n), "n = {}", n);
        }
    }
}
