//! Fixed-width boolean patterns and their bit-string codec.
//!
//! A pattern maps 1:1 onto a layer: a `true` entry means the neuron at the
//! same position fires (input side) or has fired (output side). Streams of
//! patterns travel as plain strings of `0`s and `1`s, segmented into
//! fixed-width chunks with no separators.

use thiserror::Error;

/// Errors raised while decoding bit strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The data contains a character other than `0` and `1`.
    #[error("cannot create pattern: data contains {0:?}, expected only 0 and 1")]
    ForeignCharacter(char),
    /// The bit-string length does not divide into whole patterns.
    #[error("bit string of {length} entries does not divide into patterns of width {width}")]
    TrailingBits { length: usize, width: usize },
}

/// An ordered row of firing flags, one per neuron of the targeted layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pattern {
    pub entries: Vec<bool>,
}

impl Pattern {
    pub fn new(entries: Vec<bool>) -> Self {
        Self { entries }
    }

    /// Decodes a single pattern from a run of `0`/`1` characters.
    pub fn from_bits(bits: &str) -> Result<Self, PatternError> {
        bits.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(PatternError::ForeignCharacter(other)),
            })
            .collect::<Result<Vec<bool>, PatternError>>()
            .map(Self::new)
    }

    pub fn width(&self) -> usize {
        self.entries.len()
    }
}

/// Splits a bit string into consecutive patterns of `width` entries each.
///
/// A length that is not a whole multiple of `width` is rejected rather
/// than truncated.
pub fn parse_patterns(bits: &str, width: usize) -> Result<Vec<Pattern>, PatternError> {
    let entries = Pattern::from_bits(bits)?.entries;
    if width == 0 || entries.len() % width != 0 {
        return Err(PatternError::TrailingBits {
            length: entries.len(),
            width,
        });
    }
    Ok(entries
        .chunks(width)
        .map(|chunk| Pattern::new(chunk.to_vec()))
        .collect())
}

/// Renders patterns back into one continuous bit string, `width` entries
/// per pattern.
pub fn format_patterns(patterns: &[Pattern], width: usize) -> String {
    let mut out = String::with_capacity(patterns.len() * width);
    for pattern in patterns {
        for &entry in pattern.entries.iter().take(width) {
            out.push(if entry { '1' } else { '0' });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_strings_round_trip() {
        let bits = "110100101101";
        for width in [1, 2, 3, 4, 6] {
            let patterns = parse_patterns(bits, width).expect("divisible width");
            assert_eq!(patterns.len(), bits.len() / width);
            assert_eq!(format_patterns(&patterns, width), bits);
        }
    }

    #[test]
    fn foreign_characters_are_rejected() {
        assert_eq!(
            Pattern::from_bits("0120").err(),
            Some(PatternError::ForeignCharacter('2'))
        );
        assert_eq!(
            parse_patterns("01x0", 2).err(),
            Some(PatternError::ForeignCharacter('x'))
        );
    }

    #[test]
    fn trailing_bits_are_rejected() {
        // Truncating would silently drop the trailing entries; refuse the
        // stream instead.
        assert_eq!(
            parse_patterns("10110", 2).err(),
            Some(PatternError::TrailingBits {
                length: 5,
                width: 2
            })
        );
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(
            parse_patterns("1", 0).err(),
            Some(PatternError::TrailingBits {
                length: 1,
                width: 0
            })
        );
    }

    #[test]
    fn empty_stream_parses_to_no_patterns() {
        assert_eq!(parse_patterns("", 3).unwrap(), Vec::new());
    }
}
