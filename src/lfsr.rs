//! Galois linear-feedback shift register
//!
//! Cheap deterministic randomness for picking colors and positions. Identical
//! seeds always produce identical sequences.

/// Default register seed
pub const DEFAULT_SEED: u32 = 0xDEAD_BEEF;

/// Default feedback mask
pub const DEFAULT_MASK: u32 = 0x00E1_0000;

/// Seed and feedback taps of an [`Lfsr`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LfsrConfig {
    pub seed: u32,
    pub mask: u32,
}

impl Default for LfsrConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            mask: DEFAULT_MASK,
        }
    }
}

/// Galois LFSR with a fixed feedback mask
#[derive(Debug, Clone)]
pub struct Lfsr {
    state: u32,
    mask: u32,
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new(LfsrConfig::default())
    }
}

impl Lfsr {
    pub const fn new(config: LfsrConfig) -> Self {
        Self {
            state: config.seed,
            mask: config.mask,
        }
    }

    /// Current register value
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advance the register by a single bit
    #[inline]
    pub fn step(&mut self) {
        let feedback = self.state & 1 != 0;
        self.state >>= 1;
        if feedback {
            self.state ^= self.mask;
        }
    }

    /// Advance the register by eight bits and return its low byte
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_byte(&mut self) -> u8 {
        for _ in 0..8 {
            self.step();
        }
        (self.state & 0xFF) as u8
    }

    /// Draw a value in `0..len` by reducing a random byte
    ///
    /// Returns 0 for an empty range.
    pub fn next_index(&mut self, len: usize) -> usize {
        let byte = usize::from(self.next_byte());
        if len == 0 { 0 } else { byte % len }
    }
}
