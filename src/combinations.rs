//! Lexicographic enumeration of k-subsets of `{0, .., n-1}`.

use crate::bitset::VertexSet;

/// Returns `C(n, k)`, or `0` when `k > n`. Saturates at `u128::MAX` when the value does not fit.
///
/// Each step folds in `(n - i) / (i + 1)` after dividing out their common factor with the
/// running value, so a product only overflows when the result itself would.
pub fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        let numer = (n - i) as u128;
        let denom = (i + 1) as u128;
        let g = gcd(result, denom);
        // `result * numer` is divisible by `denom` and `result / g` is coprime to `denom / g`.
        let Some(next) = (result / g).checked_mul(numer / (denom / g)) else {
            return u128::MAX;
        };
        result = next;
    }
    result
}

#[inline]
fn gcd(mut x: u128, mut y: u128) -> u128 {
    while y != 0 {
        (x, y) = (y, x % y);
    }
    x
}

/// Iterator over all `k`-subsets of `{0, .., n-1}`.
///
/// Subsets are produced in lexicographic order of their sorted index tuples:
/// `{0,1,2}, {0,1,3}, .., {0,1,n-1}, {0,2,3}, ..`.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    /// Starts the enumeration. `k == 0` yields one empty set; `k > n` yields nothing.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }

    /// Moves `indices` to the next tuple; returns `false` after the last one.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move right.
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[pos] += 1;
        for j in (pos + 1)..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = VertexSet;

    fn next(&mut self) -> Option<VertexSet> {
        if self.done {
            return None;
        }
        let current = VertexSet::from_vertices(self.n, self.indices.iter().copied());
        self.done = !self.advance();
        Some(current)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(12, 4), 495);
        assert_eq!(binomial(4, 5), 0);
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(100, 50), 100_891_344_545_564_193_334_812_497_256);
    }

    #[test]
    fn binomial_near_u128_limit_is_exact() {
        assert_eq!(
            binomial(130, 65),
            95_067_625_827_960_698_145_584_333_020_095_113_100
        );
        assert_eq!(binomial(130, 64), 93_627_207_254_809_778_476_711_843_125_851_247_750);
    }

    #[test]
    fn binomial_saturates_past_u128() {
        assert_eq!(binomial(140, 70), u128::MAX);
        assert_eq!(binomial(1000, 500), u128::MAX);
    }

    #[test]
    fn count_matches_binomial() {
        for n in 0..=9 {
            for k in 0..=n + 1 {
                let count = Combinations::new(n, k).count() as u128;
                assert_eq!(count, binomial(n, k), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn order_is_lexicographic() {
        let subsets: Vec<Vec<usize>> = Combinations::new(4, 2).map(|s| s.to_vec()).collect();
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }

    #[test]
    fn every_subset_has_k_members() {
        for subset in Combinations::new(10, 3) {
            assert_eq!(subset.len(), 3);
            assert_eq!(subset.universe(), 10);
        }
    }

    #[test]
    fn zero_sized_subset_is_yielded_once() {
        let all: Vec<VertexSet> = Combinations::new(6, 0).collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_empty());
    }
}
