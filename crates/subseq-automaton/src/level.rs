// Level assignment for SAD states.
//
// Every state carries a non-negative level; default transitions always point
// to the nearest state of strictly higher level, so the level cap bounds the
// default-hop chain length at query time.

use crate::BuildError;

/// Per-state levels for states `0..=n`, plus the cap `Lmax`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Levels {
    levels: Vec<usize>,
    max_level: usize,
}

/// `Lmax = ceil(log_k σ)`, with `Lmax = 0` whenever σ ≤ 1.
///
/// Computed as the smallest x with `k^x >= σ`, avoiding floating point.
/// Callers must ensure `k >= 2`.
pub fn max_level(sigma: usize, k: usize) -> usize {
    debug_assert!(k >= 2);
    if sigma <= 1 {
        return 0;
    }
    let mut x = 0;
    let mut power = 1usize;
    while power < sigma {
        power = power.saturating_mul(k);
        x += 1;
    }
    x
}

impl Levels {
    /// Assign levels for states `0..=n` over an alphabet of size `sigma`
    /// with base `k`.
    ///
    /// `level(i)` is the largest x with `i mod k^x == 0`, capped at `Lmax`;
    /// `level(0) = 0` by convention.
    pub fn assign(n: usize, sigma: usize, k: usize) -> Result<Self, BuildError> {
        if k <= 1 {
            return Err(BuildError::InvalidBase { k });
        }
        if sigma == 0 {
            return Err(BuildError::EmptyAlphabet);
        }

        let lmax = max_level(sigma, k);
        let mut levels = vec![0; n + 1];
        for (i, slot) in levels.iter_mut().enumerate().skip(1) {
            let mut lvl = 0;
            let mut power = k;
            while lvl + 1 <= lmax && i % power == 0 {
                lvl += 1;
                power = power.saturating_mul(k);
            }
            *slot = lvl;
        }

        Ok(Self {
            levels,
            max_level: lmax,
        })
    }

    /// All-zero levels for states `0..=n` (the general automaton: no level
    /// splitting, hence no default transitions ever materialize).
    pub fn zero(n: usize) -> Self {
        Self {
            levels: vec![0; n + 1],
            max_level: 0,
        }
    }

    /// The level of state `s`.
    pub fn get(&self, s: usize) -> usize {
        self.levels[s]
    }

    /// The cap `Lmax`.
    pub fn max(&self) -> usize {
        self.max_level
    }

    /// Number of states covered (n + 1).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_level_values() {
        assert_eq!(max_level(0, 2), 0);
        assert_eq!(max_level(1, 2), 0);
        assert_eq!(max_level(2, 2), 1);
        assert_eq!(max_level(3, 2), 2);
        assert_eq!(max_level(4, 2), 2);
        assert_eq!(max_level(5, 2), 3);
        assert_eq!(max_level(26, 2), 5);
        assert_eq!(max_level(26, 3), 3); // 3^3 = 27 >= 26
        assert_eq!(max_level(26, 5), 3); // 5^2 = 25 < 26
        assert_eq!(max_level(26, 50), 1);
    }

    #[test]
    fn rejects_degenerate_base() {
        assert_eq!(
            Levels::assign(10, 4, 0).unwrap_err(),
            BuildError::InvalidBase { k: 0 }
        );
        assert_eq!(
            Levels::assign(10, 4, 1).unwrap_err(),
            BuildError::InvalidBase { k: 1 }
        );
    }

    #[test]
    fn rejects_empty_alphabet() {
        assert_eq!(
            Levels::assign(10, 0, 2).unwrap_err(),
            BuildError::EmptyAlphabet
        );
    }

    #[test]
    fn base_two_levels_are_capped_valuations() {
        // σ = 4 -> Lmax = 2; level(i) = min(2, 2-adic valuation of i)
        let levels = Levels::assign(8, 4, 2).unwrap();
        assert_eq!(levels.max(), 2);
        let expected = [0, 0, 1, 0, 2, 0, 1, 0, 2];
        for (i, &want) in expected.iter().enumerate() {
            assert_eq!(levels.get(i), want, "state {i}");
        }
    }

    #[test]
    fn state_zero_is_level_zero() {
        let levels = Levels::assign(5, 26, 3).unwrap();
        assert_eq!(levels.get(0), 0);
    }

    #[test]
    fn levels_stay_within_cap() {
        let levels = Levels::assign(64, 26, 2).unwrap();
        for s in 0..levels.len() {
            assert!(levels.get(s) <= levels.max());
        }
    }

    #[test]
    fn unary_alphabet_flattens_all_levels() {
        let levels = Levels::assign(16, 1, 2).unwrap();
        assert_eq!(levels.max(), 0);
        for s in 0..levels.len() {
            assert_eq!(levels.get(s), 0);
        }
    }

    #[test]
    fn zero_levels() {
        let levels = Levels::zero(3);
        assert_eq!(levels.len(), 4);
        assert_eq!(levels.max(), 0);
        for s in 0..4 {
            assert_eq!(levels.get(s), 0);
        }
    }
}
