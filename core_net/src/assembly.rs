//! Helpers for declarative network assembly used by demos and tests.

use crate::net::{Network, StructureError};
use crate::neuron::Neuron;

/// Positional address of a neuron while the net is still being described:
/// `(layer index, position within the layer)`.
pub type Slot = (usize, usize);

/// Recorded connection request between two slots.
#[derive(Clone, Debug)]
struct Link {
    from: Slot,
    to: Slot,
    weight: f32,
}

/// Incremental builder that records layers and positional connections and
/// materialises them into a [`Network`] in one step.
#[derive(Default, Debug)]
pub struct NetBuilder {
    layers: Vec<Vec<Neuron>>,
    links: Vec<Link>,
}

impl NetBuilder {
    /// Creates an empty builder ready to accept layers and connections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer and returns its index.
    pub fn add_layer(&mut self, neurons: Vec<Neuron>) -> usize {
        let index = self.layers.len();
        self.layers.push(neurons);
        index
    }

    /// Adds a layer of binary units with the given thresholds.
    pub fn add_binary_layer(&mut self, sigmas: &[f32]) -> usize {
        self.add_layer(sigmas.iter().map(|&s| Neuron::binary(s)).collect())
    }

    /// Registers a weighted connection between two previously recorded slots.
    pub fn connect(&mut self, from: Slot, to: Slot, weight: f32) {
        self.links.push(Link { from, to, weight });
    }

    /// Finalises the builder, producing a [`Network`].
    ///
    /// Every recorded connection endpoint must name a slot that was actually
    /// built; the layers themselves are validated by
    /// [`Network::from_layers`].
    pub fn build(self) -> Result<Network, StructureError> {
        for link in &self.links {
            for &(layer, neuron) in [&link.from, &link.to] {
                let exists = self
                    .layers
                    .get(layer)
                    .is_some_and(|l| neuron < l.len());
                if !exists {
                    return Err(StructureError::MissingNeuron { layer, neuron });
                }
            }
        }

        let mut net = Network::from_layers(self.layers)?;
        for link in self.links {
            let source = net.layer(link.from.0)[link.from.1];
            let target = net.layer(link.to.0)[link.to.1];
            net.connect(source, target, link.weight);
        }
        Ok(net)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_materialises_layers_and_connections() {
        let mut builder = NetBuilder::new();
        let input = builder.add_binary_layer(&[0.8, 0.8]);
        let output = builder.add_binary_layer(&[1.0]);
        builder.connect((input, 0), (output, 0), 0.6);
        builder.connect((input, 1), (output, 0), 0.6);

        let net = builder.build().expect("valid network");
        assert_eq!(net.layer_count(), 2);
        assert_eq!(net.synapses.len(), 2);
        let first = net.synapse(0);
        assert_eq!(first.source, net.layer(0)[0]);
        assert_eq!(first.target, net.layer(1)[0]);
    }

    #[test]
    fn builder_validates_connection_endpoints() {
        let mut builder = NetBuilder::new();
        builder.add_binary_layer(&[0.8]);
        builder.connect((0, 0), (1, 0), 0.5);

        let error = builder.build().err().expect("missing neuron error");
        assert_eq!(error, StructureError::MissingNeuron { layer: 1, neuron: 0 });
    }
}
