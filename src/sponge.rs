//! The sponge construction: absorption, pad10*1 padding, and squeezing
//! (spec §4.7), parameterized by rate/capacity and generic over the
//! padding rule (spec §9: "Padding abstraction").

use crate::error::{Error, Result};
use crate::state::State;
use crate::trace::Tracer;

/// A pure function from (current buffer length, rate) to the bit suffix to
/// append before the final absorption. The sponge takes this as a
/// configuration knob so alternative rules can be substituted without
/// touching the core (spec §9).
pub(crate) trait Padding {
    fn pad(&self, buffer_len: usize, rate: usize) -> Vec<bool>;
}

/// The standard Keccak pad10*1 rule (spec §4.7 step 3, FIPS 202 §5.1).
pub(crate) struct Pad10Star1;

impl Padding for Pad10Star1 {
    fn pad(&self, buffer_len: usize, rate: usize) -> Vec<bool> {
        let j = (rate as isize - 2 - (buffer_len as isize % rate as isize))
            .rem_euclid(rate as isize) as usize;
        let mut bits = Vec::with_capacity(j + 2);
        bits.push(true);
        bits.extend(std::iter::repeat(false).take(j));
        bits.push(true);
        bits
    }
}

pub(crate) struct Sponge {
    rate: usize,
    rounds: usize,
    l: usize,
    state: State,
    buffer: Vec<bool>,
    finalized: bool,
    /// Counts permutation calls across the whole absorb/squeeze lifetime,
    /// labeling each one in the trace as `Keccak.py`'s `permutation_count`
    /// does with its "Permutation N" marker.
    permutation_count: usize,
}

impl Sponge {
    pub(crate) fn new(state: State, rate: usize, rounds: usize, l: usize) -> Self {
        Sponge {
            rate,
            rounds,
            l,
            state,
            buffer: Vec::new(),
            finalized: false,
            permutation_count: 0,
        }
    }

    pub(crate) fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Appends `bits` to the buffer and absorbs every full rate-sized
    /// prefix (spec §4.7 "Absorb (streaming)").
    pub(crate) fn absorb(&mut self, bits: &[bool], tracer: Option<&mut Tracer>) -> Result<()> {
        if self.finalized {
            return Err(Error::UseAfterFinalize);
        }
        self.buffer.extend_from_slice(bits);
        self.drain_full_blocks(tracer)
    }

    fn drain_full_blocks(&mut self, mut tracer: Option<&mut Tracer>) -> Result<()> {
        while self.buffer.len() >= self.rate {
            let block: Vec<bool> = self.buffer.drain(..self.rate).collect();
            self.state.xor_rate_bits(&block);
            if let Some(t) = tracer.as_deref_mut() {
                t.permutation(self.permutation_count)?;
            }
            self.permutation_count += 1;
            self.state
                .permute(self.rounds, self.l, tracer.as_deref_mut())?;
        }
        Ok(())
    }

    /// Appends the domain-separation suffix, applies `padding`, and
    /// absorbs all remaining blocks (spec §4.7 "Finalize").
    pub(crate) fn finalize_absorb(
        &mut self,
        domain_bits: &[bool],
        padding: &dyn Padding,
        mut tracer: Option<&mut Tracer>,
    ) -> Result<()> {
        if self.finalized {
            return Err(Error::UseAfterFinalize);
        }
        self.buffer.extend_from_slice(domain_bits);
        let pad = padding.pad(self.buffer.len(), self.rate);
        self.buffer.extend(pad);

        if self.buffer.is_empty() || self.buffer.len() % self.rate != 0 {
            return Err(Error::InternalInvariantViolation(
                "padded buffer length is not a positive multiple of the rate",
            ));
        }

        self.drain_full_blocks(tracer.as_deref_mut())?;
        if !self.buffer.is_empty() {
            return Err(Error::InternalInvariantViolation(
                "absorption left a non-empty buffer after padding",
            ));
        }
        self.finalized = true;
        Ok(())
    }

    /// Produces `len` output bits: the first rate-sized block is read
    /// straight out of the state, then the state is permuted and the next
    /// block read, and so on (spec §4.7 "Squeeze").
    pub(crate) fn squeeze(
        &mut self,
        len: usize,
        mut tracer: Option<&mut Tracer>,
    ) -> Result<Vec<bool>> {
        if !self.finalized {
            return Err(Error::InternalInvariantViolation(
                "squeeze called before finalize_absorb",
            ));
        }
        if let Some(t) = tracer.as_deref_mut() {
            t.squeezing()?;
        }
        let mut out = Vec::with_capacity(len);
        loop {
            let take = self.rate.min(len - out.len());
            out.extend(self.state.read_rate_bits(take));
            if out.len() >= len {
                break;
            }
            if let Some(t) = tracer.as_deref_mut() {
                t.permutation(self.permutation_count)?;
            }
            self.permutation_count += 1;
            self.state
                .permute(self.rounds, self.l, tracer.as_deref_mut())?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad10star1_produces_multiple_of_rate_and_1_x_1_shape() {
        let pad = Pad10Star1;
        for rate in [1088usize, 1152, 832, 576] {
            for buf_len in [0usize, 1, rate - 1, rate, rate + 3] {
                let suffix = pad.pad(buf_len, rate);
                assert!(suffix.len() >= 2);
                assert!(*suffix.first().unwrap());
                assert!(*suffix.last().unwrap());
                assert_eq!((buf_len + suffix.len()) % rate, 0);
                assert!(buf_len + suffix.len() > buf_len);
            }
        }
    }
}
