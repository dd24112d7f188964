//! Intermediate-value tracer (spec §4.9): emits the state after every
//! sub-step of every round, and after every full permutation, to a text
//! sink. Pedagogical only — bypassable with zero cost, and restricted to
//! the bit-array backend (spec §9's open question: tracing must fail
//! loudly rather than be silently dropped when paired with a backend that
//! can't produce it).

use std::io::Write;

use crate::error::{Error, Result};
use crate::state::BitState;

/// Which textual layout intermediate values are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    /// `(x,y): B0 B1 … B7`, each lane as hex bytes LSB-first — the format
    /// used in NIST's published example values.
    NistLane,
    /// Each lane shown as hex bytes MSB-first within each byte.
    ByteMajorHex,
}

pub(crate) enum StepLabel {
    Before(usize, u8),
    After(usize, u8),
}

impl StepLabel {
    fn header(&self) -> String {
        match self {
            StepLabel::Before(round, alg) => format!("Round {round} Before algorithm {alg} "),
            StepLabel::After(round, alg) => format!("Round {round} After algorithm {alg} "),
        }
    }
}

/// Owns the trace sink for the duration of one `finalize` call.
pub struct Tracer<'w> {
    sink: &'w mut dyn Write,
    format: TraceFormat,
}

impl<'w> Tracer<'w> {
    pub fn new(sink: &'w mut dyn Write, format: TraceFormat) -> Self {
        Tracer { sink, format }
    }

    pub(crate) fn snapshot_bits(&mut self, state: &BitState, label: StepLabel) -> Result<()> {
        self.write_state(state, &label.header())
    }

    pub(crate) fn final_state(&mut self, state: &BitState) -> Result<()> {
        self.write_state(state, "Final state ")
    }

    pub(crate) fn squeezing(&mut self) -> Result<()> {
        writeln!(self.sink, "Squeezing output. ").map_err(io_err)
    }

    pub(crate) fn permutation(&mut self, index: usize) -> Result<()> {
        writeln!(self.sink, "Permutation {index}").map_err(io_err)
    }

    fn write_state(&mut self, state: &BitState, header: &str) -> Result<()> {
        writeln!(self.sink, "{header}\n").map_err(io_err)?;
        let w = state.w();
        for y in 0..5 {
            for x in 0..5 {
                let bits: Vec<bool> = (0..w).map(|z| state.bit(x, y, z)).collect();
                let rendered = self.render_lane(&bits);
                writeln!(self.sink, "({x},{y}): {rendered}").map_err(io_err)?;
            }
        }
        writeln!(self.sink).map_err(io_err)?;
        Ok(())
    }

    fn render_lane(&self, bits: &[bool]) -> String {
        let mut out = String::new();
        for byte_bits in bits.chunks(8) {
            let byte = match self.format {
                // LSB-first within the byte, per Annex B.1 (and the NIST worked examples).
                TraceFormat::NistLane => {
                    byte_bits.iter().enumerate().fold(0u8, |acc, (i, b)| {
                        acc | ((*b as u8) << i)
                    })
                }
                // MSB-first within the byte.
                TraceFormat::ByteMajorHex => {
                    byte_bits.iter().enumerate().fold(0u8, |acc, (i, b)| {
                        acc | ((*b as u8) << (7 - i))
                    })
                }
            };
            out.push_str(&format!("{byte:02X} "));
        }
        out
    }
}

fn io_err(e: std::io::Error) -> Error {
    Error::TraceWrite(e.to_string())
}
