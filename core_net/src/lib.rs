//! Core library exposing the layered threshold-unit network, its positional
//! identity lookups and the boolean pattern codec.
//!
//! A [`Network`] owns every neuron and synapse in a flat arena and keeps an
//! ordered layer index on top of it. Layer order is semantically significant:
//! it is both the propagation order used by the engines and the id space the
//! interchange format addresses neurons by. The engines that drive a network
//! through time live in the `core_drive` crate; the text interchange codec
//! lives in `nnml`.

pub mod assembly;
pub mod locator;
pub mod net;
pub mod neuron;
pub mod pattern;
pub mod synapse;
pub mod test_helpers;
pub mod weights;

pub use assembly::NetBuilder;
pub use locator::{NeuronLocator, NeuronNotFound};
pub use net::{Network, StructureError};
pub use neuron::{Neuron, NeuronKind, ThresholdFn, DEFAULT_SIGMA};
pub use pattern::{format_patterns, parse_patterns, Pattern, PatternError};
pub use synapse::{NeuronId, Synapse, SynapseId};
pub use weights::{random_weight, random_weight_in};
