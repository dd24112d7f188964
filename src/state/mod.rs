//! The two equivalent state representations backing a Keccak-p permutation
//! (spec §9: "Two representations of state").

mod bit_array;
mod lane_word;

pub(crate) use bit_array::BitState;
pub(crate) use lane_word::LaneState;

use crate::error::Error;
use crate::trace::Tracer;

/// Which `b` values a Keccak-p permutation may be built for, mapped to
/// `(w, l)` (lane size, binary log of lane size). Mirrors the reference
/// implementation's `POSSIBLE_B` table.
pub(crate) const POSSIBLE_B: [(usize, usize, usize); 7] = [
    (25, 1, 0),
    (50, 2, 1),
    (100, 4, 2),
    (200, 8, 3),
    (400, 16, 4),
    (800, 32, 5),
    (1600, 64, 6),
];

pub(crate) fn w_and_l(b: usize) -> Result<(usize, usize), Error> {
    POSSIBLE_B
        .iter()
        .find(|(bb, _, _)| *bb == b)
        .map(|(_, w, l)| (*w, *l))
        .ok_or_else(|| Error::InvalidParameter {
            name: "b",
            reason: format!(
                "{b} is not one of the valid Keccak-p widths {:?}",
                POSSIBLE_B.iter().map(|(bb, _, _)| *bb).collect::<Vec<_>>()
            ),
        })
}

/// Dispatches between the literal bit-array and optimized lane-word
/// representations. Only `Lanes` requires `b = 1600`; `Bits` supports any
/// valid `b`.
#[derive(Clone)]
pub(crate) enum State {
    Bits(BitState),
    Lanes(LaneState),
}

impl State {
    pub(crate) fn xor_rate_bits(&mut self, bits: &[bool]) {
        match self {
            State::Bits(s) => s.xor_rate_bits(bits),
            State::Lanes(s) => s.xor_rate_bits(bits),
        }
    }

    pub(crate) fn read_rate_bits(&self, len: usize) -> Vec<bool> {
        match self {
            State::Bits(s) => s.read_rate_bits(len),
            State::Lanes(s) => s.read_rate_bits(len),
        }
    }

    /// Applies Keccak-p[b, rounds]. `tracer` is only honored by the
    /// bit-array backend; callers must reject tracing requests against
    /// the lane-word backend before constructing a [`State::Lanes`].
    pub(crate) fn permute(
        &mut self,
        rounds: usize,
        l: usize,
        mut tracer: Option<&mut Tracer>,
    ) -> Result<(), Error> {
        match self {
            State::Bits(s) => {
                for round in 0..rounds {
                    s.round(round, l, tracer.as_deref_mut())?;
                }
                if let Some(t) = tracer {
                    t.final_state(s)?;
                }
            }
            State::Lanes(s) => s.permute(),
        }
        Ok(())
    }
}
