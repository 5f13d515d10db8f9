//! The layered network: a flat neuron/synapse arena plus an ordered layer
//! index that defines propagation order and positional identity.

use thiserror::Error;

use crate::neuron::{Neuron, NeuronKind};
use crate::synapse::{NeuronId, Synapse, SynapseId};
use crate::weights::random_weight;

/// Errors that can arise while assembling or mutating a network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    /// A neuron of a different variant was offered to a typed network.
    #[error("neuron kind does not match the {expected:?} network")]
    KindMismatch { expected: NeuronKind },
    /// The supplied layers carry no first neuron to establish a kind from.
    #[error("could not determine the neuron kind: the supplied layers are empty")]
    EmptyLayers,
    /// The supplied layers mix neuron variants.
    #[error("the supplied layers contain mixed neuron kinds")]
    MixedKinds,
    /// A layer index outside the current layer range was addressed.
    #[error("target layer {layer} does not exist (network has {layers} layers)")]
    LayerOutOfRange { layer: usize, layers: usize },
    /// A neuron was added to a layer while a lower layer is still empty.
    #[error("cannot populate layer {layer} while layer {empty} below it is empty")]
    LowerLayersEmpty { layer: usize, empty: usize },
    /// A connection request referenced a neuron position that was never built.
    #[error("connection references missing neuron position ({layer}, {neuron})")]
    MissingNeuron { layer: usize, neuron: usize },
}

/// A feed-forward net of threshold units.
///
/// Neurons and synapses live in flat arenas addressed by stable indices;
/// `layers` orders a subset of the neuron arena into the net's layer
/// structure. Replacing a layer orphans its previous neurons in the arena —
/// they stay allocated but are no longer reachable through the layer index,
/// and positional lookups on them fail.
///
/// All neurons in a network share one [`NeuronKind`]; the kind is fixed at
/// construction and every structural mutation re-checks it.
#[derive(Debug)]
pub struct Network {
    pub neurons: Vec<Neuron>,
    pub synapses: Vec<Synapse>,
    outgoing: Vec<Vec<SynapseId>>,
    layers: Vec<Vec<NeuronId>>,
    kind: NeuronKind,
}

impl Network {
    /// Creates an empty network of the declared kind.
    pub fn new(kind: NeuronKind) -> Self {
        Self {
            neurons: Vec::new(),
            synapses: Vec::new(),
            outgoing: Vec::new(),
            layers: Vec::new(),
            kind,
        }
    }

    /// Builds a network from complete layers, establishing the kind from the
    /// first neuron and validating homogeneity over every contained neuron.
    pub fn from_layers(layers: Vec<Vec<Neuron>>) -> Result<Self, StructureError> {
        let kind = layers
            .first()
            .and_then(|layer| layer.first())
            .map(Neuron::kind)
            .ok_or(StructureError::EmptyLayers)?;
        if layers
            .iter()
            .flatten()
            .any(|neuron| neuron.kind() != kind)
        {
            return Err(StructureError::MixedKinds);
        }
        let mut net = Self::new(kind);
        for layer in layers {
            let ids = layer.into_iter().map(|n| net.alloc(n)).collect();
            net.layers.push(ids);
        }
        Ok(net)
    }

    pub fn kind(&self) -> NeuronKind {
        self.kind
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Neuron ids of the layer at `index`, in their stored order.
    pub fn layer(&self, index: usize) -> &[NeuronId] {
        &self.layers[index]
    }

    pub fn layers(&self) -> &[Vec<NeuronId>] {
        &self.layers
    }

    pub fn neuron(&self, id: NeuronId) -> &Neuron {
        &self.neurons[id]
    }

    pub fn neuron_mut(&mut self, id: NeuronId) -> &mut Neuron {
        &mut self.neurons[id]
    }

    pub fn synapse(&self, id: SynapseId) -> &Synapse {
        &self.synapses[id]
    }

    pub fn synapse_mut(&mut self, id: SynapseId) -> &mut Synapse {
        &mut self.synapses[id]
    }

    /// Outgoing synapse ids of a neuron, in append order.
    pub fn outgoing(&self, id: NeuronId) -> &[SynapseId] {
        &self.outgoing[id]
    }

    /// Appends a neuron to the layer at `target_layer`.
    ///
    /// Lower layers must already be populated: a layer may only be non-empty
    /// if every layer below it is non-empty.
    pub fn add_neuron(
        &mut self,
        neuron: Neuron,
        target_layer: usize,
    ) -> Result<NeuronId, StructureError> {
        if neuron.kind() != self.kind {
            return Err(StructureError::KindMismatch {
                expected: self.kind,
            });
        }
        if target_layer >= self.layers.len() {
            return Err(StructureError::LayerOutOfRange {
                layer: target_layer,
                layers: self.layers.len(),
            });
        }
        if let Some(empty) = (0..target_layer).find(|&i| self.layers[i].is_empty()) {
            return Err(StructureError::LowerLayersEmpty {
                layer: target_layer,
                empty,
            });
        }
        let id = self.alloc(neuron);
        self.layers[target_layer].push(id);
        Ok(id)
    }

    /// Appends a layer at the end of the net, returning its index.
    pub fn add_layer(&mut self, neurons: Vec<Neuron>) -> Result<usize, StructureError> {
        self.insert_layer(neurons, self.layers.len())
    }

    /// Appends `count` empty layers.
    pub fn add_empty_layers(&mut self, count: usize) {
        for _ in 0..count {
            self.layers.push(Vec::new());
        }
    }

    /// Inserts a whole layer at `at`, shifting the layers at `at` and above
    /// one index up. `at` may equal the current layer count (append).
    pub fn insert_layer(
        &mut self,
        neurons: Vec<Neuron>,
        at: usize,
    ) -> Result<usize, StructureError> {
        if at > self.layers.len() {
            return Err(StructureError::LayerOutOfRange {
                layer: at,
                layers: self.layers.len(),
            });
        }
        let ids = self.admit_layer(neurons)?;
        self.layers.insert(at, ids);
        Ok(at)
    }

    /// Overwrites the layer at `at` in place; no indices shift. The previous
    /// neurons are orphaned in the arena.
    pub fn replace_layer(
        &mut self,
        neurons: Vec<Neuron>,
        at: usize,
    ) -> Result<(), StructureError> {
        if at >= self.layers.len() {
            return Err(StructureError::LayerOutOfRange {
                layer: at,
                layers: self.layers.len(),
            });
        }
        let ids = self.admit_layer(neurons)?;
        self.layers[at] = ids;
        Ok(())
    }

    /// Connects `source` to `target` with an explicit weight, appending to
    /// the source's outgoing list.
    pub fn connect(&mut self, source: NeuronId, target: NeuronId, weight: f32) -> SynapseId {
        let id = self.synapses.len();
        self.synapses.push(Synapse::new(source, target, weight));
        self.outgoing[source].push(id);
        id
    }

    /// Connects `source` to `target` with a random starting weight in the
    /// closed interval [-0.2, +0.2].
    pub fn connect_random<R: rand::Rng>(
        &mut self,
        source: NeuronId,
        target: NeuronId,
        rng: &mut R,
    ) -> SynapseId {
        let weight = random_weight(rng);
        self.connect(source, target, weight)
    }

    /// Whether the neuron's accumulated input satisfies its threshold.
    pub fn threshold_reached(&self, id: NeuronId) -> bool {
        self.neurons[id].threshold_reached()
    }

    /// Fires a neuron: pushes its weight onto every target's accumulator,
    /// zeroes its own accumulator and latches the fired flag.
    pub fn fire(&mut self, id: NeuronId) {
        for k in 0..self.outgoing[id].len() {
            let synapse_id = self.outgoing[id][k];
            let (target, weight) = {
                let synapse = &self.synapses[synapse_id];
                (synapse.target, synapse.weight)
            };
            self.neurons[target].gather(weight);
        }
        let neuron = &mut self.neurons[id];
        neuron.net = 0.0;
        neuron.fired = true;
    }

    /// Clears the transient state of every neuron reachable through the
    /// layer index.
    pub fn clear_all(&mut self) {
        for layer_index in 0..self.layers.len() {
            for position in 0..self.layers[layer_index].len() {
                let id = self.layers[layer_index][position];
                self.neurons[id].clear();
            }
        }
    }

    fn alloc(&mut self, neuron: Neuron) -> NeuronId {
        let id = self.neurons.len();
        self.neurons.push(neuron);
        self.outgoing.push(Vec::new());
        id
    }

    fn admit_layer(&mut self, neurons: Vec<Neuron>) -> Result<Vec<NeuronId>, StructureError> {
        if neurons.iter().any(|n| n.kind() != self.kind) {
            return Err(StructureError::KindMismatch {
                expected: self.kind,
            });
        }
        Ok(neurons.into_iter().map(|n| self.alloc(n)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_layer_net() -> Network {
        Network::from_layers(vec![
            vec![Neuron::binary(0.8), Neuron::binary(0.8)],
            vec![Neuron::binary(0.5)],
        ])
        .expect("valid layers")
    }

    #[test]
    fn from_layers_establishes_kind_and_order() {
        let net = two_layer_net();
        assert_eq!(net.kind(), NeuronKind::BinaryThreshold);
        assert_eq!(net.layer_count(), 2);
        assert_eq!(net.layer(0).len(), 2);
        assert_eq!(net.layer(1).len(), 1);
    }

    #[test]
    fn from_layers_rejects_empty_input() {
        assert_eq!(
            Network::from_layers(Vec::new()).err(),
            Some(StructureError::EmptyLayers)
        );
        assert_eq!(
            Network::from_layers(vec![Vec::new()]).err(),
            Some(StructureError::EmptyLayers)
        );
    }

    #[test]
    fn add_neuron_requires_populated_lower_layers() {
        let mut net = Network::new(NeuronKind::BinaryThreshold);
        net.add_empty_layers(3);
        net.add_neuron(Neuron::binary(0.8), 0).expect("layer 0");

        let error = net.add_neuron(Neuron::binary(0.8), 2).unwrap_err();
        assert_eq!(
            error,
            StructureError::LowerLayersEmpty { layer: 2, empty: 1 }
        );

        net.add_neuron(Neuron::binary(0.8), 1).expect("layer 1");
        net.add_neuron(Neuron::binary(0.8), 2).expect("layer 2");
        assert_eq!(net.layer(2).len(), 1);
    }

    #[test]
    fn add_neuron_rejects_out_of_range_layer() {
        let mut net = Network::new(NeuronKind::BinaryThreshold);
        net.add_empty_layers(1);
        let error = net.add_neuron(Neuron::binary(0.8), 3).unwrap_err();
        assert_eq!(error, StructureError::LayerOutOfRange { layer: 3, layers: 1 });
    }

    #[test]
    fn insert_layer_shifts_later_layers_up() {
        let mut net = two_layer_net();
        let output_id = net.layer(1)[0];
        net.insert_layer(vec![Neuron::binary(0.3)], 1).expect("insert");
        assert_eq!(net.layer_count(), 3);
        // The former output layer moved up by one; its neuron kept its id.
        assert_eq!(net.layer(2)[0], output_id);
    }

    #[test]
    fn replace_layer_keeps_index_range() {
        let mut net = two_layer_net();
        net.replace_layer(vec![Neuron::binary(0.9)], 1).expect("replace");
        assert_eq!(net.layer_count(), 2);
        assert_eq!(net.layer(1).len(), 1);

        let error = net.replace_layer(vec![Neuron::binary(0.9)], 2).unwrap_err();
        assert_eq!(error, StructureError::LayerOutOfRange { layer: 2, layers: 2 });
    }

    #[test]
    fn fire_pushes_weight_and_resets_accumulator() {
        let mut net = two_layer_net();
        let source = net.layer(0)[0];
        let target = net.layer(1)[0];
        net.connect(source, target, 0.7);

        net.neuron_mut(source).gather(1.0);
        net.fire(source);

        assert!(net.neuron(source).fired);
        assert_eq!(net.neuron(source).net, 0.0);
        assert_eq!(net.neuron(target).net, 0.7);
    }

    #[test]
    fn clear_all_resets_every_layered_neuron() {
        let mut net = two_layer_net();
        let source = net.layer(0)[0];
        let target = net.layer(1)[0];
        net.connect(source, target, 1.0);
        net.fire(source);
        net.neuron_mut(target).should_have_fired = true;

        net.clear_all();
        for layer in net.layers() {
            for &id in layer {
                let neuron = net.neuron(id);
                assert_eq!(neuron.net, 0.0);
                assert!(!neuron.fired);
                assert!(!neuron.should_have_fired);
            }
        }
    }

    #[test]
    fn outgoing_order_is_append_order() {
        let mut net = two_layer_net();
        let a = net.layer(0)[0];
        let b = net.layer(0)[1];
        let out = net.layer(1)[0];
        let first = net.connect(a, out, 0.1);
        let second = net.connect(a, out, 0.2);
        let other = net.connect(b, out, 0.3);
        assert_eq!(net.outgoing(a), &[first, second]);
        assert_eq!(net.outgoing(b), &[other]);
    }
}
