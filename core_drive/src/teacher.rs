//! Output comparison and backward weight adjustment.
//!
//! The rule is a fixed-step local heuristic, not gradient descent: weights
//! move in 0.1 steps based solely on the fired / should-have-fired flags of
//! a synapse's endpoints, and the should-have-fired signal is pushed one
//! layer down for the next round of the walk.

use core_net::{Network, NeuronId, Pattern, SynapseId};

use crate::DriveError;

/// Compares captured output against a desired stream and adjusts weights
/// backwards through the net.
#[derive(Debug)]
pub struct Teacher {
    desired: Vec<Pattern>,
    compared: usize,
}

impl Teacher {
    pub fn new(desired: Vec<Pattern>) -> Self {
        Self {
            desired,
            compared: 0,
        }
    }

    pub fn desired(&self) -> &[Pattern] {
        &self.desired
    }

    /// Number of output patterns already compared.
    pub fn compared(&self) -> usize {
        self.compared
    }

    /// Compares the current desired pattern to the net's output and walks
    /// the layers backwards, adjusting every synapse that feeds a layer
    /// from the layer directly below it.
    pub fn teach(&mut self, net: &mut Network) -> Result<(), DriveError> {
        if self.compared >= self.desired.len() {
            return Err(DriveError::StreamExhausted {
                role: "teacher",
                count: self.compared,
            });
        }
        self.compare(net);
        self.backward_pass(net);
        self.compared += 1;
        Ok(())
    }

    /// Copies the current desired pattern onto the output layer's
    /// should-have-fired flags.
    fn compare(&self, net: &mut Network) {
        let Some(pattern) = self.desired.get(self.compared) else {
            return;
        };
        let output: Vec<NeuronId> = net.layers().last().cloned().unwrap_or_default();
        for (&id, &want) in output.iter().zip(&pattern.entries) {
            net.neuron_mut(id).should_have_fired = want;
        }
    }

    /// Walks target layers from the top down to layer 1; layer 0 is never a
    /// target. For each neuron of the layer below, every outgoing synapse
    /// whose target sits in the current target layer is adjusted.
    fn backward_pass(&self, net: &mut Network) {
        for target_layer in (1..net.layer_count()).rev() {
            let below: Vec<NeuronId> = net.layer(target_layer - 1).to_vec();
            for source in below {
                let outgoing: Vec<SynapseId> = net.outgoing(source).to_vec();
                for synapse_id in outgoing {
                    let target = net.synapse(synapse_id).target;
                    if !net.layer(target_layer).contains(&target) {
                        continue;
                    }
                    let target_neuron = net.neuron(target);
                    let (fired, should) =
                        (target_neuron.fired, target_neuron.should_have_fired);
                    let source_fired = net.neuron(source).fired;
                    adjust(net, synapse_id, fired, should, source_fired);
                }
            }
        }
    }
}

/// Applies the weight rule for one synapse. Only three of the eight flag
/// combinations have an effect:
///
/// | target fired | should have fired | source fired | effect              |
/// |--------------|-------------------|--------------|---------------------|
/// | yes          | yes               | yes          | propagate flag only |
/// | yes          | no                | yes          | weight -= 0.1       |
/// | no           | yes               | yes          | weight += 0.1, flag |
pub(crate) fn adjust(
    net: &mut Network,
    synapse_id: SynapseId,
    target_fired: bool,
    target_should_have_fired: bool,
    source_fired: bool,
) {
    match (target_fired, target_should_have_fired, source_fired) {
        (true, true, true) => {
            let source = net.synapse(synapse_id).source;
            net.neuron_mut(source).should_have_fired = true;
        }
        (true, false, true) => {
            net.synapse_mut(synapse_id).weight -= 0.1;
        }
        (false, true, true) => {
            net.synapse_mut(synapse_id).weight += 0.1;
            let source = net.synapse(synapse_id).source;
            net.neuron_mut(source).should_have_fired = true;
        }
        _ => {}
    }
}
