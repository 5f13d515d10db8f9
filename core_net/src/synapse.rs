//! Directed weighted edges between arena-indexed neurons.

/// Stable arena index of a neuron inside a [`Network`](crate::Network).
///
/// Ids survive layer insertion and replacement; the neuron's positional
/// coordinates are recomputed on demand by [`crate::NeuronLocator`].
pub type NeuronId = usize;

/// Index of a synapse in a network's flat synapse arena.
pub type SynapseId = usize;

/// A directed connection carrying activation from `source` to `target`.
///
/// Synapses are owned by their source neuron's outgoing list; the target id
/// is a non-owning reference. Only the training engine mutates `weight`.
#[derive(Clone, Debug)]
pub struct Synapse {
    pub source: NeuronId,
    pub target: NeuronId,
    pub weight: f32,
}

impl Synapse {
    pub fn new(source: NeuronId, target: NeuronId, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }
}
