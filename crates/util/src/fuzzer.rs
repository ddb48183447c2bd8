use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// Source of random test data.
///
/// Uses the xoshiro256** PRNG so that a failing run can be replayed from
/// [`seed`](Self::seed).
///
/// # Examples
///
/// ```
/// use link_forest_util::Fuzzer;
///
/// let fuzzer = Fuzzer::new(None);
/// let n = fuzzer.random_int(1, 10);
/// assert!((1..=10).contains(&n));
///
/// let keys = fuzzer.distinct_keys(5, 0, 100);
/// assert_eq!(keys.len(), 5);
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: RefCell<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: RefCell::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Fuzzer seeded from a single number, for table-driven tests.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&seed.to_le_bytes());
        Self::new(Some(bytes))
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng.borrow_mut().gen_range(min..=max)
    }

    /// Random index into a collection of `len` elements. `len` must be
    /// non-zero.
    pub fn random_index(&self, len: usize) -> usize {
        self.rng.borrow_mut().gen_range(0..len)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        &elements[self.random_index(elements.len())]
    }

    /// Generate a random boolean with the given probability of being true.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.rng.borrow_mut().gen_bool(probability)
    }

    pub fn shuffle<T>(&self, elements: &mut [T]) {
        elements.shuffle(&mut *self.rng.borrow_mut());
    }

    /// `count` distinct integers from [min, max], in random order. Panics if
    /// the range holds fewer than `count` values.
    pub fn distinct_keys(&self, count: usize, min: i64, max: i64) -> Vec<i64> {
        let span = (max - min + 1).max(0) as usize;
        assert!(span >= count, "range [{min}, {max}] too small for {count} keys");
        let mut seen = BTreeSet::new();
        let mut keys = Vec::with_capacity(count);
        while keys.len() < count {
            let k = self.random_int(min, max);
            if seen.insert(k) {
                keys.push(k);
            }
        }
        keys
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }
}
