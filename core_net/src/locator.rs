//! Positional identity lookups over a network's layer index.

use thiserror::Error;

use crate::net::Network;
use crate::synapse::NeuronId;

/// Raised when a neuron id is not reachable through any layer of the
/// searched network.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("the searched network does not contain neuron {0}")]
pub struct NeuronNotFound(pub NeuronId);

/// Resolves arena ids to `(layer, position)` coordinates.
///
/// Coordinates are recomputed by scanning the layer index on every call and
/// are only valid against the network instance they were computed from;
/// nothing stores them persistently. This is the single source of positional
/// identity consumed by the interchange codec.
pub struct NeuronLocator<'a> {
    net: &'a Network,
}

impl<'a> NeuronLocator<'a> {
    pub fn new(net: &'a Network) -> Self {
        Self { net }
    }

    /// Scans the layer index for `id`, comparing identity rather than
    /// neuron contents.
    pub fn locate(&self, id: NeuronId) -> Result<(usize, usize), NeuronNotFound> {
        for (layer_index, layer) in self.net.layers().iter().enumerate() {
            for (position, &candidate) in layer.iter().enumerate() {
                if candidate == id {
                    return Ok((layer_index, position));
                }
            }
        }
        Err(NeuronNotFound(id))
    }

    /// Index of the layer the neuron resides in.
    pub fn layer_id(&self, id: NeuronId) -> Result<usize, NeuronNotFound> {
        self.locate(id).map(|(layer, _)| layer)
    }

    /// Position of the neuron within its layer.
    pub fn neuron_id(&self, id: NeuronId) -> Result<usize, NeuronNotFound> {
        self.locate(id).map(|(_, position)| position)
    }
}
