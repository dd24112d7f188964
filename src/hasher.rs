//! Named-function façade (spec §4.10): SHA3-224/256/384/512 and
//! SHAKE128/256, each a fixed instantiation of [`crate::sponge::Sponge`]
//! over a chosen [`State`] backend, with a streaming `update`/`finalize`
//! interface (spec §3 "Lifecycles").

use std::io::Write;

use crate::codec::{self, b2h, Base64Residual};
use crate::error::{Error, Result};
use crate::sponge::{Pad10Star1, Sponge};
use crate::state::{w_and_l, BitState, LaneState, State};
use crate::trace::{TraceFormat, Tracer};

/// Selects among the equivalent permutation backends (spec §9). Output is
/// identical either way; only the bit-array backend can be traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// The literal 5×5×w bit array, traceable sub-step by sub-step.
    BitArray,
    /// The optimized 25-lane `u64` representation. Faster; cannot be traced.
    LaneWord,
}

/// One value per recognized `input_format` tag (spec §6), carrying its data.
pub enum Input<'a> {
    String(&'a str),
    Bytes(&'a [u8]),
    Hexstring(&'a str),
    Bitstring(&'a str),
    Bitarray(&'a [u8]),
    Base64(&'a str),
}

impl<'a> Input<'a> {
    /// Dispatches a caller-supplied `input_format` tag string to the matching
    /// variant, mirroring `Keccak.py`'s `match self._input_format { ... case
    /// _ => raise }` (`SHA3.py`'s constructor takes the same tag as a
    /// string). Only the tags whose data is textual (`string`, `hexstring`,
    /// `bitstring`, `base64`) apply here; `bytes` and `bitarray` take `&[u8]`
    /// and so are constructed directly via their variants instead.
    pub fn from_tag(format: &str, data: &'a str) -> Result<Self> {
        match format {
            "string" => Ok(Input::String(data)),
            "hexstring" => Ok(Input::Hexstring(data)),
            "bitstring" => Ok(Input::Bitstring(data)),
            "base64" => Ok(Input::Base64(data)),
            other => Err(Error::InvalidInputFormat(other.to_string())),
        }
    }
}

/// Generic sponge-backed hasher/XOF, parameterized at construction by
/// (b, rounds, c, d or L, domain bits). Not exposed directly — the named
/// types below fix these per spec §4.10's table.
struct Keccak<'w> {
    sponge: Sponge,
    domain_bits: Vec<bool>,
    output_bits: usize,
    base64_residual: Base64Residual,
    tracer: Option<Tracer<'w>>,
    output: Option<String>,
}

impl<'w> Keccak<'w> {
    fn build(
        c: usize,
        output_bits: usize,
        domain_bits: &[bool],
        backend: Backend,
        tracer: Option<Tracer<'w>>,
    ) -> Result<Self> {
        if tracer.is_some() && backend != Backend::BitArray {
            return Err(Error::InvalidParameter {
                name: "backend",
                reason: "intermediate-value tracing requires Backend::BitArray".into(),
            });
        }
        if output_bits == 0 || output_bits % 8 != 0 {
            return Err(Error::InvalidParameter {
                name: "output_bits",
                reason: format!("{output_bits} is not a positive multiple of 8"),
            });
        }
        const B: usize = 1600;
        if c >= B || c == 0 {
            return Err(Error::InvalidParameter {
                name: "c",
                reason: format!("capacity {c} must satisfy 0 < c < {B}"),
            });
        }
        let (w, _l) = w_and_l(B)?;
        let rate = B - c;
        if rate % 8 != 0 {
            return Err(Error::InvalidParameter {
                name: "c",
                reason: format!("rate {rate} is not a multiple of 8"),
            });
        }

        let state = match backend {
            Backend::BitArray => State::Bits(BitState::new(w)),
            Backend::LaneWord => State::Lanes(LaneState::new()),
        };

        Ok(Keccak {
            sponge: Sponge::new(state, rate, 24, 6),
            domain_bits: domain_bits.to_vec(),
            output_bits,
            base64_residual: Base64Residual::new(),
            tracer,
            output: None,
        })
    }

    fn preprocess(&mut self, input: &Input) -> Result<Vec<bool>> {
        match input {
            Input::String(s) => Ok(codec::decode_string(s)),
            Input::Bytes(b) => Ok(codec::decode_bytes(b)),
            Input::Hexstring(s) => codec::decode_hexstring(s),
            Input::Bitstring(s) => codec::decode_bitstring(s),
            Input::Bitarray(v) => codec::decode_bitarray(v),
            Input::Base64(s) => self.base64_residual.push(s),
        }
    }

    fn update(&mut self, input: Input) -> Result<()> {
        if self.output.is_some() {
            return Err(Error::UseAfterFinalize);
        }
        let bits = self.preprocess(&input)?;
        self.sponge.absorb(&bits, self.tracer.as_mut())
    }

    fn finalize_with(&mut self, input: Option<Input>) -> Result<String> {
        if self.output.is_some() {
            return Err(Error::UseAfterFinalize);
        }
        if let Some(input) = input {
            let bits = self.preprocess(&input)?;
            self.sponge.absorb(&bits, self.tracer.as_mut())?;
        }
        self.base64_residual.finish()?;
        self.sponge
            .finalize_absorb(&self.domain_bits, &Pad10Star1, self.tracer.as_mut())?;
        let bits = self.sponge.squeeze(self.output_bits, self.tracer.as_mut())?;
        let hex = b2h(&bits)?;
        self.output = Some(hex.clone());
        Ok(hex)
    }

    fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }
}

/// Declares one fixed-digest SHA3-`$bits` façade type. Kept as a macro
/// rather than four hand-written copies, the way the teacher's own
/// `sha3_224`/`sha3_256`/`sha3_384`/`sha3_512` free functions differed only
/// by constant.
macro_rules! sha3_fixed {
    ($name:ident, $bits:expr, $c:expr) => {
        #[doc = concat!("SHA3-", stringify!($bits), " (spec §4.10).")]
        pub struct $name<'w> {
            inner: Keccak<'w>,
        }

        impl<'w> $name<'w> {
            const DOMAIN_BITS: [bool; 2] = [false, true];

            /// Constructs an instance using the fast lane-word backend.
            pub fn new() -> Result<Self> {
                Self::with_backend(Backend::LaneWord)
            }

            /// Constructs an instance using the chosen backend.
            pub fn with_backend(backend: Backend) -> Result<Self> {
                Ok(Self {
                    inner: Keccak::build($c, $bits, &Self::DOMAIN_BITS, backend, None)?,
                })
            }

            /// Constructs a tracing instance; forces [`Backend::BitArray`]
            /// since only it can produce intermediate-value traces.
            pub fn with_trace(sink: &'w mut dyn Write, format: TraceFormat) -> Result<Self> {
                let tracer = Tracer::new(sink, format);
                Ok(Self {
                    inner: Keccak::build(
                        $c,
                        $bits,
                        &Self::DOMAIN_BITS,
                        Backend::BitArray,
                        Some(tracer),
                    )?,
                })
            }

            pub fn update(&mut self, input: Input) -> Result<()> {
                self.inner.update(input)
            }

            pub fn finalize(&mut self) -> Result<String> {
                self.inner.finalize_with(None)
            }

            pub fn finalize_with(&mut self, input: Input) -> Result<String> {
                self.inner.finalize_with(Some(input))
            }

            pub fn output(&self) -> Option<&str> {
                self.inner.output()
            }

            /// One-shot convenience: absorb `input`, finalize, return hex.
            pub fn digest(input: Input) -> Result<String> {
                let mut h = Self::new()?;
                h.finalize_with(input)
            }
        }
    };
}

sha3_fixed!(Sha3_224, 224, 448);
sha3_fixed!(Sha3_256, 256, 512);
sha3_fixed!(Sha3_384, 384, 768);
sha3_fixed!(Sha3_512, 512, 1024);

/// Declares one SHAKE-`$security` XOF façade type; output length is
/// supplied by the caller, not fixed at compile time (spec §4.10).
macro_rules! shake {
    ($name:ident, $c:expr) => {
        #[doc = concat!(stringify!($name), " extendable-output function (spec §4.10).")]
        pub struct $name<'w> {
            inner: Keccak<'w>,
        }

        impl<'w> $name<'w> {
            const DOMAIN_BITS: [bool; 4] = [true, true, true, true];

            /// `output_length` is the requested output length in bits; must
            /// be a positive multiple of 8.
            pub fn new(output_length: usize) -> Result<Self> {
                Self::with_backend(output_length, Backend::LaneWord)
            }

            pub fn with_backend(output_length: usize, backend: Backend) -> Result<Self> {
                Ok(Self {
                    inner: Keccak::build(
                        $c,
                        output_length,
                        &Self::DOMAIN_BITS,
                        backend,
                        None,
                    )?,
                })
            }

            pub fn with_trace(
                output_length: usize,
                sink: &'w mut dyn Write,
                format: TraceFormat,
            ) -> Result<Self> {
                let tracer = Tracer::new(sink, format);
                Ok(Self {
                    inner: Keccak::build(
                        $c,
                        output_length,
                        &Self::DOMAIN_BITS,
                        Backend::BitArray,
                        Some(tracer),
                    )?,
                })
            }

            pub fn update(&mut self, input: Input) -> Result<()> {
                self.inner.update(input)
            }

            pub fn finalize(&mut self) -> Result<String> {
                self.inner.finalize_with(None)
            }

            pub fn finalize_with(&mut self, input: Input) -> Result<String> {
                self.inner.finalize_with(Some(input))
            }

            pub fn output(&self) -> Option<&str> {
                self.inner.output()
            }

            pub fn digest(input: Input, output_length: usize) -> Result<String> {
                let mut h = Self::new(output_length)?;
                h.finalize_with(input)
            }
        }
    };
}

shake!(Shake128, 256);
shake!(Shake256, 512);
