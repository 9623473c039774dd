//! Stochastic context generators for test variations.
//!
//! Uses seeded RNG for reproducibility. The seed is printed on failure for
//! replay via `SHORTCODE_TEST_SEED`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests.
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with a specific seed (for reproduction).
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from the environment or a random seed.
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("SHORTCODE_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha.
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// A word of plain prose. The charset deliberately avoids anything that
    /// could open a directive or terminate one early.
    fn word(&mut self) -> String {
        let len = 1 + self.geometric(0.7);
        let chars = b"abcdefghijklmnopqrstuvwxyz";
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())] as char)
            .collect()
    }

    /// A run of prose suitable for sharing a line with a directive.
    pub fn inline_prose(&mut self) -> String {
        let words = 1 + self.geometric(0.6);
        let mut out = String::new();
        for i in 0..words {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&self.word());
        }
        out
    }

    /// Zero or more full lines of prose, each newline-terminated.
    pub fn prose_lines(&mut self) -> String {
        let lines = self.geometric(0.5);
        let mut out = String::new();
        for _ in 0..lines {
            out.push_str(&self.inline_prose());
            if self.chance(0.2) {
                out.push('.');
            }
            out.push('\n');
        }
        out
    }

    /// Zero or more blank lines.
    pub fn blank_lines(&mut self) -> String {
        "\n".repeat(self.geometric(0.3))
    }
}
