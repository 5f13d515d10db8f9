//! Captures the output layer's firing state after each sweep.

use core_net::{format_patterns, Network, NeuronId, Pattern};

use crate::DriveError;

/// Records the output layer's `fired` flags, one pattern per sweep, up to a
/// fixed target count.
#[derive(Debug)]
pub struct PatternReader {
    output: Vec<NeuronId>,
    target: usize,
    captured: Vec<Pattern>,
}

impl PatternReader {
    pub fn new(output: Vec<NeuronId>, target: usize) -> Self {
        Self {
            output,
            target,
            captured: Vec::with_capacity(target),
        }
    }

    /// Captures the current output into the next buffer slot and returns a
    /// copy of it.
    pub fn read(&mut self, net: &Network) -> Result<Pattern, DriveError> {
        if self.captured.len() >= self.target {
            return Err(DriveError::StreamExhausted {
                role: "output",
                count: self.target,
            });
        }
        let entries = self.output.iter().map(|&id| net.neuron(id).fired).collect();
        let pattern = Pattern::new(entries);
        self.captured.push(pattern.clone());
        Ok(pattern)
    }

    /// Number of patterns captured so far.
    pub fn count(&self) -> usize {
        self.captured.len()
    }

    /// Number of patterns this reader will capture in total.
    pub fn target(&self) -> usize {
        self.target
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.captured
    }

    /// Bit-string rendering of everything captured so far.
    pub fn export(&self) -> String {
        format_patterns(&self.captured, self.output.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_net::test_helpers::fan_in;

    #[test]
    fn read_captures_fired_flags() {
        let mut net = fan_in(1.0, 0.6);
        let output = net.layer(1).to_vec();
        let mut reader = PatternReader::new(output.clone(), 2);

        reader.read(&net).unwrap();
        net.neuron_mut(output[0]).fired = true;
        reader.read(&net).unwrap();

        assert_eq!(reader.count(), 2);
        assert_eq!(reader.export(), "01");
    }

    #[test]
    fn reading_past_the_target_is_an_error() {
        let net = fan_in(1.0, 0.6);
        let mut reader = PatternReader::new(net.layer(1).to_vec(), 1);
        reader.read(&net).unwrap();
        assert_eq!(
            reader.read(&net).unwrap_err(),
            DriveError::StreamExhausted {
                role: "output",
                count: 1
            }
        );
    }
}
