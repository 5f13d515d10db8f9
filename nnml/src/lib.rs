//! NNML interchange codec.
//!
//! Serialises a [`core_net::Network`] to the NNML text format and parses it
//! back. The document lists every layer (each neuron as its threshold
//! parameter) strictly before any synapse record; synapses address their
//! endpoints by zero-based `(layerID, neuronID)` positions, so a decoder can
//! resolve them by direct indexing into the already-built layers.
//!
//! ```text
//! <neural_net type="bineuron">
//!   <layer>
//!     <neuron sigma="0.8"/>
//!   </layer>
//!   <synapse weight="1.0">
//!     <source layerID="0" neuronID="0"/>
//!     <target layerID="1" neuronID="0"/>
//!   </synapse>
//! </neural_net>
//! ```

mod emit;
mod parse;

pub use emit::encode;
pub use parse::decode;

use core_net::{NeuronNotFound, StructureError};
use thiserror::Error;

/// Errors raised while encoding or decoding NNML documents.
#[derive(Debug, Error)]
pub enum NnmlError {
    /// The document declares a neuron type tag this codec does not know.
    #[error("unsupported neuron type tag {0:?}")]
    UnsupportedKind(String),
    /// The document lacks a required section.
    #[error("the document is missing its {0} section")]
    MissingSection(&'static str),
    /// An element appeared outside of its enclosing section.
    #[error("element {0:?} appeared outside of its enclosing section")]
    MisplacedElement(String),
    /// A synapse record ended without both of its endpoints.
    #[error("a synapse record is missing its source or target")]
    IncompleteSynapse,
    /// An element lacks a required attribute.
    #[error("an element is missing its {0} attribute")]
    MissingAttribute(&'static str),
    /// An attribute value failed to parse as a number.
    #[error("attribute {name} holds {value:?}, which is not a valid number")]
    BadNumber { name: &'static str, value: String },
    /// A synapse referenced a position that the layer section never built.
    #[error("synapse references missing position (layer {layer}, neuron {neuron})")]
    BadPosition { layer: usize, neuron: usize },
    /// The XML structure itself is malformed.
    #[error("malformed NNML document: {0}")]
    Malformed(#[from] quick_xml::Error),
    /// An attribute list could not be read.
    #[error("malformed NNML attribute: {0}")]
    MalformedAttribute(#[from] quick_xml::events::attributes::AttrError),
    /// The document could not be rendered.
    #[error("failed to render NNML document: {0}")]
    Render(#[from] std::io::Error),
    /// A serialised synapse references a neuron that is no longer reachable
    /// through the network's layers.
    #[error(transparent)]
    Locate(#[from] NeuronNotFound),
    /// The decoded layers do not form a valid network.
    #[error(transparent)]
    Structure(#[from] StructureError),
}
