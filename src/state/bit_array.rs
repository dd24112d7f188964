//! The literal, pedagogically faithful state representation: a 5×5×w array
//! of individual bits, addressed as `S[x][y][z]`.
//!
//! This mirrors the state array of FIPS 202 §3.1 directly (and the 3D
//! `State = [[[bool; W]; 5]; 5]` array used by the bit-array Keccak
//! implementations in this ecosystem) rather than packing lanes into
//! machine words. Every step mapping here loops over individual `z`
//! positions instead of operating on whole lanes at once — this is the
//! variant that can be traced sub-step by sub-step (see [`crate::trace`]).

use crate::trace::{StepLabel, Tracer};

/// `S : {0..4} × {0..4} × {0..w-1} -> {0,1}`, stored flat as `x + 5*y + 25*z`.
#[derive(Clone)]
pub(crate) struct BitState {
    w: usize,
    cells: Vec<bool>,
}

impl BitState {
    pub(crate) fn new(w: usize) -> Self {
        BitState {
            w,
            cells: vec![false; 5 * 5 * w],
        }
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, z: usize) -> usize {
        (x % 5) + 5 * (y % 5) + 25 * (z % self.w)
    }

    #[inline]
    pub(crate) fn bit(&self, x: usize, y: usize, z: usize) -> bool {
        self.cells[self.idx(x, y, z)]
    }

    #[inline]
    fn set_bit(&mut self, x: usize, y: usize, z: usize, value: bool) {
        let i = self.idx(x, y, z);
        self.cells[i] = value;
    }

    #[inline]
    fn xor_bit(&mut self, x: usize, y: usize, z: usize, value: bool) {
        let i = self.idx(x, y, z);
        self.cells[i] ^= value;
    }

    pub(crate) fn w(&self) -> usize {
        self.w
    }

    /// XOR `bits` into lanes starting at (0,0), filling x fastest then y
    /// (the traversal spec §4.7 requires for absorption).
    pub(crate) fn xor_rate_bits(&mut self, bits: &[bool]) {
        let mut pos = 0usize;
        'outer: for y in 0..5 {
            for x in 0..5 {
                for z in 0..self.w {
                    if pos >= bits.len() {
                        break 'outer;
                    }
                    self.xor_bit(x, y, z, bits[pos]);
                    pos += 1;
                }
            }
        }
    }

    /// Read `len` bits back out using the same traversal as [`Self::xor_rate_bits`].
    pub(crate) fn read_rate_bits(&self, len: usize) -> Vec<bool> {
        let mut out = Vec::with_capacity(len);
        'outer: for y in 0..5 {
            for x in 0..5 {
                for z in 0..self.w {
                    if out.len() >= len {
                        break 'outer;
                    }
                    out.push(self.bit(x, y, z));
                }
            }
        }
        out
    }

    /// Applies one full Keccak-p round (theta, rho, pi, chi, iota), calling
    /// `tracer` after every sub-step when tracing is enabled.
    pub(crate) fn round(
        &mut self,
        round_index: usize,
        l: usize,
        tracer: Option<&mut Tracer>,
    ) -> crate::error::Result<()> {
        match tracer {
            Some(t) => {
                t.snapshot_bits(self, StepLabel::Before(round_index, 1))?;
                theta(self);
                t.snapshot_bits(self, StepLabel::After(round_index, 1))?;
                rho(self);
                t.snapshot_bits(self, StepLabel::After(round_index, 2))?;
                pi(self);
                t.snapshot_bits(self, StepLabel::After(round_index, 3))?;
                chi(self);
                t.snapshot_bits(self, StepLabel::After(round_index, 4))?;
                iota(self, round_index, l);
                t.snapshot_bits(self, StepLabel::After(round_index, 5))?;
            }
            None => {
                theta(self);
                rho(self);
                pi(self);
                chi(self);
                iota(self, round_index, l);
            }
        }
        Ok(())
    }
}

/// 3.2.1 Algorithm 1: θ(A)
fn theta(state: &mut BitState) {
    let w = state.w();
    // C[x][z] = parity of column x
    let mut c = vec![false; 5 * w];
    for x in 0..5 {
        for z in 0..w {
            let mut bit = state.bit(x, 0, z);
            for y in 1..5 {
                bit ^= state.bit(x, y, z);
            }
            c[x + 5 * z] = bit;
        }
    }

    for x in 0..5 {
        for z in 0..w {
            let d = c[(x + 4) % 5 + 5 * z] ^ c[(x + 1) % 5 + 5 * ((z + w - 1) % w)];
            if d {
                for y in 0..5 {
                    state.xor_bit(x, y, z, true);
                }
            }
        }
    }
}

/// 3.2.2 Algorithm 2: ρ(A), offsets computed generically for any lane width `w`.
fn rho(state: &mut BitState) {
    let w = state.w();
    let old = state.clone();
    // Lane (0,0) is rotated by 0, so it's left untouched.
    let mut x = 1usize;
    let mut y = 0usize;
    for t in 0..24 {
        let offset = ((t + 1) * (t + 2) / 2) % w;
        for z in 0..w {
            let bit = old.bit(x, y, z);
            state.set_bit(x, y, (z + offset) % w, bit);
        }
        let (nx, ny) = (y, (2 * x + 3 * y) % 5);
        x = nx;
        y = ny;
    }
}

/// 3.2.3 Algorithm 3: π(A)
fn pi(state: &mut BitState) {
    let w = state.w();
    let old = state.clone();
    for x in 0..5 {
        for y in 0..5 {
            let (sx, sy) = ((x + 3 * y) % 5, x);
            for z in 0..w {
                state.set_bit(x, y, z, old.bit(sx, sy, z));
            }
        }
    }
}

/// 3.2.4 Algorithm 4: χ(A)
fn chi(state: &mut BitState) {
    let w = state.w();
    let old = state.clone();
    for y in 0..5 {
        for x in 0..5 {
            for z in 0..w {
                let bit = old.bit(x, y, z)
                    ^ ((!old.bit((x + 1) % 5, y, z)) & old.bit((x + 2) % 5, y, z));
                state.set_bit(x, y, z, bit);
            }
        }
    }
}

/// 3.2.5 Algorithm 6: ι(A, ir), round constant derived via the standard 8-bit LFSR.
fn iota(state: &mut BitState, round_index: usize, l: usize) {
    let w = state.w();
    for j in 0..=l {
        let bit_pos = (1usize << j) - 1;
        if bit_pos < w && rc(j + 7 * round_index) {
            state.xor_bit(0, 0, bit_pos, true);
        }
    }
}

/// 5.2 Algorithm 5: rc(t) — the round-constant bit generator.
///
/// Written exactly as described in the prose: a 9-bit shift register `R`,
/// prepend a zero, feed back into positions 0, 4, 5, 6, repeated `t mod 255`
/// times, return the surviving bit 0.
fn rc(t: usize) -> bool {
    if t % 255 == 0 {
        return true;
    }
    // R starts as 1000_0000, read right-to-left as R[0..=7].
    let mut r = [true, false, false, false, false, false, false, false];
    for _ in 0..(t % 255) {
        let mut next = [false; 9];
        next[1..9].copy_from_slice(&r);
        next[0] = false;
        next[0] ^= next[8];
        next[4] ^= next[8];
        next[5] ^= next[8];
        next[6] ^= next[8];
        r.copy_from_slice(&next[0..8]);
    }
    r[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_matches_known_round_constants() {
        // First few lanes of KECCAK_ROUND_CONSTANTS (lane_word.rs), bit 0 only,
        // derived independently via rc(7*ir).
        assert!(rc(0)); // round 0, j=0 -> bit 0 of 0x...01 is set
        assert!(!rc(7)); // round 1, j=0 -> bit 0 of 0x...8082 is clear
    }

    #[test]
    fn xor_then_read_round_trips() {
        let mut s = BitState::new(64);
        let bits: Vec<bool> = (0..64).map(|i| i % 3 == 0).collect();
        s.xor_rate_bits(&bits);
        assert_eq!(s.read_rate_bits(64), bits);
    }
}
