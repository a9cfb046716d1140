use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::Mutex;

use crate::ops::{Op, ScriptConfig};

const ID_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Seeded random source for tree tests.
///
/// Uses the xoshiro256** PRNG so a run can be replayed from [`Fuzzer::seed`].
///
/// # Examples
///
/// ```
/// use weight_avl_util::{Fuzzer, Op, ScriptConfig};
///
/// let fuzzer = Fuzzer::from_u64(7);
/// let script = fuzzer.script(&ScriptConfig::default());
/// assert_eq!(script.len(), ScriptConfig::default().len);
/// assert!(matches!(script[0], Op::Insert { .. }));
/// ```
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Mutex<Xoshiro256StarStar>,
}

impl Fuzzer {
    /// Create a fuzzer with an optional seed, drawing one from `OsRng` if absent.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Mutex::new(Xoshiro256StarStar::from_seed(seed)),
        }
    }

    /// Create a fuzzer from a short numeric seed, convenient in test names.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut Xoshiro256StarStar) -> T) -> T {
        let mut rng = match self.rng.lock() {
            Ok(rng) => rng,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut *rng)
    }

    /// Random integer in `[min, max]`.
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    /// Random boolean, `true` with the given probability.
    pub fn random_bool(&self, probability: f64) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability))
    }

    /// Random index into a collection of `len` elements.
    pub fn random_index(&self, len: usize) -> usize {
        self.with_rng(|rng| rng.gen_range(0..len))
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        &elements[self.random_index(elements.len())]
    }

    /// Random lowercase alphanumeric string.
    pub fn random_id(&self, len: usize) -> String {
        self.with_rng(|rng| {
            (0..len)
                .map(|_| ID_CHARS[rng.gen_range(0..ID_CHARS.len())] as char)
                .collect()
        })
    }

    /// Generate an operation script.
    ///
    /// Deletes target a live entry most of the time and a random weight
    /// otherwise, so both the hit and the not-found paths get exercised. Ids
    /// are unique within a script.
    pub fn script(&self, config: &ScriptConfig) -> Vec<Op> {
        let (lo, hi) = config.weight_range;
        let mut live: Vec<(i64, String)> = Vec::new();
        let mut ops = Vec::with_capacity(config.len);

        for serial in 0..config.len {
            if live.is_empty() || !self.random_bool(config.delete_probability) {
                let weight = self.random_int(lo, hi);
                let id = format!("{}-{serial}", self.random_id(4));
                live.push((weight, id.clone()));
                ops.push(Op::Insert {
                    weight,
                    id: Some(id),
                });
                continue;
            }

            if self.random_bool(0.2) {
                ops.push(Op::Delete {
                    weight: self.random_int(lo, hi),
                });
                continue;
            }

            let (weight, id) = live.swap_remove(self.random_index(live.len()));
            if config.by_id {
                ops.push(Op::DeleteWithId { weight, id });
            } else {
                ops.push(Op::Delete { weight });
            }
        }

        ops
    }
}
