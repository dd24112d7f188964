//! Bit/byte conversions (spec §4.8, FIPS 202 Annex B.1) and the input-format
//! decoders spec §6 names (`string`, `bytes`, `hexstring`, `bitstring`,
//! `bitarray`, `base64`).
//!
//! Every format boils down to the same bit-within-byte convention: LSB
//! first. `h2b`/`b2h` are the Annex B.1 hex <-> bit-sequence functions;
//! everything else is built on top of the simpler observation that
//! `h2b(hex::encode(bytes))` is just the LSB-first bit unpacking of
//! `bytes` directly.

use base64ct::{Base64, Encoding};

use crate::error::{Error, Result};

const HEX_DIGITS: &[u8] = b"0123456789ABCDEF";

/// LSB-first bits of one byte: `bits[0]` is the least-significant bit.
pub(crate) fn byte_to_bits_lsb_first(b: u8) -> [bool; 8] {
    std::array::from_fn(|i| (b >> i) & 1 != 0)
}

pub(crate) fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    bytes.iter().flat_map(|b| byte_to_bits_lsb_first(*b)).collect()
}

fn hex_digit_value(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|v| v as u8)
        .ok_or_else(|| Error::MalformedInput {
            format: "hexstring",
            reason: format!("'{c}' is not a hex digit"),
        })
}

/// Annex B.1 `h2b`: hex string -> bit sequence. Each pair of hex characters
/// `(hi, lo)` becomes the 8 LSB-first bits `lsb(lo) ++ lsb(hi)` — which is
/// exactly the LSB-first bit unpacking of the byte `(hi << 4) | lo`.
pub fn h2b(hexstring: &str) -> Result<Vec<bool>> {
    let cleaned: String = hexstring.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.len() % 2 != 0 {
        return Err(Error::MalformedInput {
            format: "hexstring",
            reason: format!("odd-length hex string of {} characters", cleaned.len()),
        });
    }
    let mut bits = Vec::with_capacity(cleaned.len() * 4);
    let chars: Vec<char> = cleaned.chars().collect();
    for pair in chars.chunks(2) {
        let hi = hex_digit_value(pair[0])?;
        let lo = hex_digit_value(pair[1])?;
        let byte = (hi << 4) | lo;
        bits.extend(byte_to_bits_lsb_first(byte));
    }
    Ok(bits)
}

/// Annex B.1 `b2h`: bit sequence -> uppercase hex string. Inverse of [`h2b`].
pub fn b2h(bits: &[bool]) -> Result<String> {
    if bits.len() % 8 != 0 {
        return Err(Error::MalformedInput {
            format: "bitarray",
            reason: format!("cannot create hexstring from {} bits", bits.len()),
        });
    }
    let mut out = String::with_capacity(bits.len() / 4);
    for byte_bits in bits.chunks(8) {
        let byte = byte_bits
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, b)| acc | ((*b as u8) << i));
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0xf) as usize] as char);
    }
    Ok(out)
}

/// `string` format: UTF-8 text, bytes taken in order.
pub(crate) fn decode_string(s: &str) -> Vec<bool> {
    bytes_to_bits(s.as_bytes())
}

/// `bytes` format: raw bytes in order.
pub(crate) fn decode_bytes(b: &[u8]) -> Vec<bool> {
    bytes_to_bits(b)
}

/// `hexstring` format: whitespace-tolerant hex.
pub(crate) fn decode_hexstring(s: &str) -> Result<Vec<bool>> {
    h2b(s)
}

/// `bitstring` format: whitespace-tolerant '0'/'1' characters.
pub(crate) fn decode_bitstring(s: &str) -> Result<Vec<bool>> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            other => Err(Error::MalformedInput {
                format: "bitstring",
                reason: format!("'{other}' is not '0' or '1'"),
            }),
        })
        .collect()
}

/// `bitarray` format: sequence of 0/1 values, same ordering as `bitstring`.
pub(crate) fn decode_bitarray(values: &[u8]) -> Result<Vec<bool>> {
    values
        .iter()
        .map(|v| match v {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(Error::MalformedInput {
                format: "bitarray",
                reason: format!("{other} is not 0 or 1"),
            }),
        })
        .collect()
}

/// Accumulates base64 input across `update` calls, decoding complete
/// 4-character groups as they become available and buffering the rest.
/// Kept entirely separate from the bit-array/bit-string partial-bit
/// residual (spec §9's open question) since the two formats' "leftover"
/// concepts aren't interchangeable.
#[derive(Default)]
pub(crate) struct Base64Residual {
    pending: String,
}

impl Base64Residual {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, input: &str) -> Result<Vec<bool>> {
        self.pending.push_str(input);
        let ready_len = (self.pending.len() / 4) * 4;
        let ready: String = self.pending.drain(..ready_len).collect();
        if ready.is_empty() {
            return Ok(Vec::new());
        }
        let bytes = Base64::decode_vec(&ready).map_err(|e| Error::MalformedInput {
            format: "base64",
            reason: e.to_string(),
        })?;
        Ok(bytes_to_bits(&bytes))
    }

    /// Must be empty by the time `finalize` runs: a dangling partial group
    /// means the caller never supplied a complete base64 string.
    pub(crate) fn finish(&self) -> Result<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(Error::MalformedInput {
                format: "base64",
                reason: format!(
                    "{} leftover base64 character(s) at finalize",
                    self.pending.len()
                ),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h2b_matches_annex_b1_worked_example() {
        // Annex B.1 / spec §4.8: "A3" -> 1100 0101
        let bits = h2b("A3").unwrap();
        let expected = [true, true, false, false, false, true, false, true];
        assert_eq!(bits, expected);
    }

    #[test]
    fn b2h_is_h2b_inverse() {
        for hex in ["", "00", "A3", "FF01", "DEADBEEF"] {
            assert_eq!(b2h(&h2b(hex).unwrap()).unwrap(), hex);
        }
    }

    #[test]
    fn h2b_rejects_odd_length() {
        assert!(h2b("ABC").is_err());
    }

    #[test]
    fn h2b_rejects_non_hex() {
        assert!(h2b("ZZ").is_err());
    }

    #[test]
    fn bitarray_matches_equivalent_bitstring() {
        let values = [0u8, 1, 0, 0, 0, 1, 0, 1];
        let from_array = decode_bitarray(&values).unwrap();
        let from_string = decode_bitstring("00010101").unwrap();
        assert_eq!(from_array, from_string);
    }

    #[test]
    fn bitarray_rejects_values_other_than_0_or_1() {
        assert!(decode_bitarray(&[0, 1, 2]).is_err());
    }

    #[test]
    fn bitstring_tolerates_whitespace() {
        assert_eq!(
            decode_bitstring("0100 0101\n01111000").unwrap(),
            decode_bitstring("010001010 1111000").unwrap()
        );
    }

    #[test]
    fn base64_accumulates_partial_groups() {
        let mut dec = Base64Residual::new();
        // "example" base64-encodes to "ZXhhbXBsZQ==", split mid-group.
        let mut bits = dec.push("ZXhh").unwrap();
        bits.extend(dec.push("bXBs").unwrap());
        bits.extend(dec.push("ZQ==").unwrap());
        dec.finish().unwrap();
        assert_eq!(b2h(&bits).unwrap(), b2h(&decode_string("example")).unwrap());
    }

    #[test]
    fn base64_leftover_at_finish_is_malformed() {
        let mut dec = Base64Residual::new();
        dec.push("ZQ=").unwrap();
        assert!(dec.finish().is_err());
    }
}
