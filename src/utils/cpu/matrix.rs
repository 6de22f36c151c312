use crate::utils::cpu::is_prime::{is_prime_with, PrimeMethod};
use crate::utils::hash::hash_bytes;

/// Square integer grid of compile-time size, stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize>(pub [[i64; N]; N]);

pub type Grid3 = Grid<3>;

/// Result of one aggregate pass over a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStats<const N: usize> {
    pub total: i128,
    pub row_sums: [i128; N],
    pub positive: usize,
    pub negative: usize,
    pub primes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalSums {
    pub main: i128,
    pub secondary: i128,
    /// Both diagonals, counting a shared center cell once.
    pub combined: i128,
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Grid([[0; N]; N])
    }
}

impl<const N: usize> Grid<N> {
    pub const CELLS: usize = N * N;

    pub fn new(rows: [[i64; N]; N]) -> Self {
        Grid(rows)
    }

    /// Fills a grid row-major from exactly N² values.
    pub fn from_row_major(values: &[i64]) -> Option<Self> {
        if values.len() != Self::CELLS {
            return None;
        }
        let mut g = Self::default();
        for (idx, &v) in values.iter().enumerate() {
            g.0[idx / N][idx % N] = v;
        }
        Some(g)
    }

    pub fn rows(&self) -> &[[i64; N]; N] {
        &self.0
    }

    pub fn cells(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    pub fn stats(&self) -> GridStats<N> {
        self.stats_with(PrimeMethod::Trial)
    }

    pub fn stats_with(&self, method: PrimeMethod) -> GridStats<N> {
        let mut stats = GridStats {
            total: 0,
            row_sums: [0; N],
            positive: 0,
            negative: 0,
            primes: 0,
        };
        for (i, row) in self.0.iter().enumerate() {
            for &v in row {
                stats.row_sums[i] += v as i128;
                if v > 0 {
                    stats.positive += 1;
                } else if v < 0 {
                    stats.negative += 1;
                }
                if is_prime_with(v, method) {
                    stats.primes += 1;
                }
            }
            stats.total += stats.row_sums[i];
        }
        stats
    }

    pub fn diagonals(&self) -> DiagonalSums {
        let mut main = 0i128;
        let mut secondary = 0i128;
        for i in 0..N {
            main += self.0[i][i] as i128;
            secondary += self.0[i][N - 1 - i] as i128;
        }
        let mut combined = main + secondary;
        if N % 2 == 1 {
            combined -= self.0[N / 2][N / 2] as i128;
        }
        DiagonalSums { main, secondary, combined }
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::default();
        for i in 0..N {
            for j in 0..N {
                t.0[j][i] = self.0[i][j];
            }
        }
        t
    }

    /// C = self × other. `None` when any cell overflows i64.
    pub fn multiply(&self, other: &Self) -> Option<Self> {
        // Bᵀ keeps the inner loop on contiguous rows
        let bt = other.transpose();
        let mut c = Self::default();
        for i in 0..N {
            for j in 0..N {
                let mut s: i64 = 0;
                for k in 0..N {
                    s = s.checked_add(self.0[i][k].checked_mul(bt.0[j][k])?)?;
                }
                c.0[i][j] = s;
            }
        }
        Some(c)
    }

    /// Flatten row-major, sort ascending, refill row-major.
    pub fn sorted(&self) -> Self {
        let mut flat: Vec<i64> = self.cells().collect();
        flat.sort_unstable();
        let mut g = Self::default();
        for (idx, v) in flat.into_iter().enumerate() {
            g.0[idx / N][idx % N] = v;
        }
        g
    }

    /// SHA-256 over the cells as big-endian bytes, row-major.
    pub fn fingerprint(&self) -> String {
        let mut bytes = Vec::with_capacity(Self::CELLS * 8);
        for v in self.cells() {
            bytes.extend_from_slice(&v.to_be_bytes());
        }
        hash_bytes(&bytes)
    }
}

/// Swaps every corresponding cell: afterwards `a` holds what was `b` and vice versa.
pub fn interchange<const N: usize>(a: &mut Grid<N>, b: &mut Grid<N>) {
    for i in 0..N {
        for j in 0..N {
            std::mem::swap(&mut a.0[i][j], &mut b.0[i][j]);
        }
    }
}
