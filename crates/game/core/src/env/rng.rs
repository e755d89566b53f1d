//! Random source for deterministic battle simulation.
//!
//! Every random decision in a battle (turn order, damage variance, critical
//! hits, matchup and name picks) is drawn from a [`RandomSource`] injected at
//! construction. Two battles built from the same seed replay identically.

/// Stateful source of random numbers.
///
/// Implementations must be deterministic: the same starting state always
/// yields the same sequence. Helper methods are provided on top of
/// [`next_u32`](Self::next_u32) so implementors only supply raw output.
pub trait RandomSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Generate a value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = u64::from(max - min) + 1;
        min + (u64::from(self.next_u32()) % span) as u32
    }

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> u32 {
        self.range(1, 100)
    }

    /// Bernoulli trial with `pct` percent success probability.
    ///
    /// Always draws exactly one value so the sequence position does not
    /// depend on the probability.
    fn chance_pct(&mut self, pct: u32) -> bool {
        self.roll_d100() <= pct
    }

    /// Fair coin flip.
    fn coin_flip(&mut self) -> bool {
        self.next_u32() >> 31 == 1
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// Returns 0 for empty collections; callers check emptiness first.
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        let upper = u32::try_from(len - 1).unwrap_or(u32::MAX);
        self.range(0, upper) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit output through an xorshift and a
/// random rotation. Small, fast, and statistically solid for game rolls.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    ///
    /// The seed is avalanched first so that neighbouring seeds (0, 1, 2...)
    /// start from unrelated states.
    pub fn new(seed: u64) -> Self {
        Self {
            state: mix_seed(seed, 0),
        }
    }

    /// Create an independent stream derived from `seed`.
    ///
    /// Useful when several battles share one session seed: stream `n` is the
    /// `n`-th battle of the session.
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        Self {
            state: mix_seed(seed, stream),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Mix a base seed with a stream number into a well-distributed state.
///
/// SplitMix64-style combiner followed by the murmur3 finalizer.
pub fn mix_seed(seed: u64, stream: u64) -> u64 {
    let mut hash = seed;
    hash ^= stream.wrapping_mul(0x9e3779b97f4a7c15);
    hash = hash.wrapping_add(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}
