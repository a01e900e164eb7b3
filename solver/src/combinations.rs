//! k-subsets of a small cell set, yielded as board masks.

use tails_types::CELL_COUNT;

/// `C(n, k)`, or 0 when `k > n`.
#[must_use]
pub const fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut acc: u64 = 1;
    let mut i = 0;
    while i < k {
        // Exact at every step: acc * (n - i) is divisible by (i + 1).
        acc = acc * (n - i) as u64 / (i + 1) as u64;
        i += 1;
    }
    acc
}

/// Lexicographic iterator over every `k`-subset of `cells`.
///
/// Each item is the bitwise union of the chosen cells. Choosing zero cells
/// yields exactly one empty mask.
pub struct Combinations {
    cells: Vec<usize>,
    picks: Vec<usize>,
    done: bool,
}

impl Combinations {
    #[must_use]
    pub fn new(cells: impl IntoIterator<Item = usize>, k: usize) -> Self {
        let cells: Vec<usize> = cells.into_iter().filter(|&c| c < CELL_COUNT).collect();
        let done = k > cells.len();
        Self {
            picks: (0..k).collect(),
            cells,
            done,
        }
    }

    fn current_mask(&self) -> u16 {
        self.picks
            .iter()
            .fold(0u16, |mask, &p| mask | (1 << self.cells[p]))
    }

    fn advance(&mut self) {
        let n = self.cells.len();
        let k = self.picks.len();
        // Rightmost pick that can still move right.
        let Some(i) = (0..k).rev().find(|&i| self.picks[i] < n - k + i) else {
            self.done = true;
            return;
        };
        self.picks[i] += 1;
        for j in i + 1..k {
            self.picks[j] = self.picks[j - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        if self.done {
            return None;
        }
        let mask = self.current_mask();
        self.advance();
        Some(mask)
    }
}
