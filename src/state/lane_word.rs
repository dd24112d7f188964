//! Optimized state representation for Keccak-p[1600, 24]: 25 `u64` lanes.
//!
//! Based on [XKCP]'s readable-and-compact reference, the same lineage the
//! bit-array backend's step mappings are derived from, but operating on
//! whole lanes with word-wide XOR/rotate/AND-NOT instead of per-bit loops.
//! Only valid for `w = 64` (`b = 1600`); callers must check that before
//! constructing one (see [`crate::hasher`]).
//!
//! [XKCP]: https://github.com/XKCP/XKCP

#![allow(non_snake_case)]
use std::ops::{Index, IndexMut};

const ROUNDS: usize = 24;
type Lane = u64;

/// State array A of Keccak-p[1600, 24]. Contains 1600 bits as 25 lanes.
#[derive(Clone, Copy)]
pub(crate) struct LaneState([Lane; 25]);

#[inline(always)]
fn idx(x: usize, y: usize) -> usize {
    (x % 5) + 5 * (y % 5)
}

impl Index<(usize, usize)> for LaneState {
    type Output = Lane;

    #[inline(always)]
    fn index(&self, (x, y): (usize, usize)) -> &Lane {
        &self.0[idx(x, y)]
    }
}

impl IndexMut<(usize, usize)> for LaneState {
    #[inline(always)]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Lane {
        &mut self.0[idx(x, y)]
    }
}

impl LaneState {
    pub(crate) fn new() -> Self {
        LaneState([0; 25])
    }

    /// XOR `bits` (big enough to cover at most the rate) into the state,
    /// most-significant-bit-last within each byte (FIPS 202 Annex B.1
    /// convention), using the same (x fastest, then y, then z) lane
    /// traversal as the bit-array backend.
    pub(crate) fn xor_rate_bits(&mut self, bits: &[bool]) {
        let mut pos = 0usize;
        'outer: for y in 0..5 {
            for x in 0..5 {
                let mut lane = self[(x, y)];
                for z in 0..64 {
                    if pos >= bits.len() {
                        break 'outer;
                    }
                    if bits[pos] {
                        lane ^= 1u64 << z;
                    }
                    pos += 1;
                }
                self[(x, y)] = lane;
            }
        }
    }

    pub(crate) fn read_rate_bits(&self, len: usize) -> Vec<bool> {
        let mut out = Vec::with_capacity(len);
        'outer: for y in 0..5 {
            for x in 0..5 {
                let lane = self[(x, y)];
                for z in 0..64 {
                    if out.len() >= len {
                        break 'outer;
                    }
                    out.push((lane >> z) & 1 != 0);
                }
            }
        }
        out
    }

    pub(crate) fn permute(&mut self) {
        for round in 0..ROUNDS {
            theta(self);
            rho(self);
            pi(self);
            chi(self);
            iota(self, round);
        }
    }
}

/// 3.2.1 Algorithm 1: θ(A)
fn theta(A: &mut LaneState) {
    let mut C: [Lane; 5] = Default::default();
    for (x, Cx) in C.iter_mut().enumerate() {
        *Cx = A[(x, 0)] ^ A[(x, 1)] ^ A[(x, 2)] ^ A[(x, 3)] ^ A[(x, 4)];
    }

    for x in 0..5 {
        let D = C[(x + 4) % 5] ^ C[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            A[(x, y)] ^= D;
        }
    }
}

/// Table 2 rho offsets, row-major starting at x=0, y=0; modulo w=64.
const KECCAK_RHO_OFFSETS: [u32; 25] = [
    0, 1, 62, 28, 27, 36, 44, 6, 55, 20, 3, 10, 43, 25, 39, 41, 45, 15, 21, 8, 18, 2, 61, 56, 14,
];

/// 3.2.2 Algorithm 2: ρ(A)
fn rho(A: &mut LaneState) {
    for x in 0..5 {
        for y in 0..5 {
            A[(x, y)] = A[(x, y)].rotate_left(KECCAK_RHO_OFFSETS[x + 5 * y]);
        }
    }
}

/// 3.2.3 Algorithm 3: π(A)
fn pi(A: &mut LaneState) {
    let temp_A = *A;
    for x in 0..5 {
        for y in 0..5 {
            A[(y, (2 * x + 3 * y) % 5)] = temp_A[(x, y)];
        }
    }
}

/// 3.2.4 Algorithm 4: χ(A), processed one row at a time, caching the row first.
fn chi(A: &mut LaneState) {
    let mut row: [Lane; 5] = Default::default();
    for y in 0..5 {
        for (x, rx) in row.iter_mut().enumerate() {
            *rx = A[(x, y)];
        }
        for x in 0..5 {
            A[(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

/// Round constants for the ι step, ir = 0..24. Taken from the XKCP reference
/// 64-bit implementation; see the bit-array backend for the LFSR that derives them.
const KECCAK_ROUND_CONSTANTS: [Lane; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// 3.2.5 Algorithm 6: ι(A, ir)
fn iota(A: &mut LaneState, round: usize) {
    A[(0, 0)] ^= KECCAK_ROUND_CONSTANTS[round];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_then_read_round_trips() {
        let mut s = LaneState::new();
        let bits: Vec<bool> = (0..1600).map(|i| i % 5 == 0).collect();
        s.xor_rate_bits(&bits);
        assert_eq!(s.read_rate_bits(1600), bits);
    }

    #[test]
    fn permute_is_deterministic() {
        let mut a = LaneState::new();
        let mut b = LaneState::new();
        a.permute();
        b.permute();
        assert_eq!(a.read_rate_bits(1600), b.read_rate_bits(1600));
    }
}
