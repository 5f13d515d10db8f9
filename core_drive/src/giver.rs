//! Feeds input patterns into a net's first layer.

use core_net::{Network, NeuronId, Pattern};

use crate::DriveError;

/// Presents a net with one input pattern per call, in stream order.
#[derive(Debug)]
pub struct PatternGiver {
    input: Vec<NeuronId>,
    patterns: Vec<Pattern>,
    sent: usize,
}

impl PatternGiver {
    /// Wires a giver onto the given input-layer ids. Every pattern in the
    /// stream must match the layer width.
    pub fn new(input: Vec<NeuronId>, patterns: Vec<Pattern>) -> Result<Self, DriveError> {
        for pattern in &patterns {
            if pattern.width() != input.len() {
                return Err(DriveError::WidthMismatch {
                    pattern: pattern.width(),
                    layer: input.len(),
                });
            }
        }
        Ok(Self {
            input,
            patterns,
            sent: 0,
        })
    }

    /// Injects the current pattern: fires every input neuron whose entry is
    /// set. Unset entries leave the neuron idle for the round.
    pub fn next(&mut self, net: &mut Network) -> Result<(), DriveError> {
        let Some(pattern) = self.patterns.get(self.sent) else {
            return Err(DriveError::StreamExhausted {
                role: "input",
                count: self.sent,
            });
        };
        for (&id, &on) in self.input.iter().zip(&pattern.entries) {
            if on {
                net.fire(id);
            }
        }
        self.sent += 1;
        Ok(())
    }

    /// Number of patterns the net has been presented with so far.
    pub fn sent(&self) -> usize {
        self.sent
    }

    /// Total length of the input stream.
    pub fn stream_len(&self) -> usize {
        self.patterns.len()
    }

    pub fn input(&self) -> &[NeuronId] {
        &self.input
    }
}
