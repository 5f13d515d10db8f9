//! Structured parsing of NNML text back into a network.
//!
//! The parser is a plain pull-parser pass over the XML event stream. It
//! enforces the schema: a `neural_net` root with a known type tag, at least
//! one `layer` and at least one `synapse` section, neurons inside layers,
//! endpoints inside synapse records.

use core_net::{Network, Neuron, NeuronKind};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::NnmlError;

#[derive(Default)]
struct PendingSynapse {
    weight: f32,
    source: Option<(usize, usize)>,
    target: Option<(usize, usize)>,
}

/// Parses an NNML document into a network.
///
/// The layer section is consumed first into complete layers of neurons;
/// each synapse record is then resolved by indexing its literal
/// `(layerID, neuronID)` positions into those layers — no searching.
pub fn decode(text: &str) -> Result<Network, NnmlError> {
    let mut reader = Reader::from_str(text);

    let mut kind: Option<NeuronKind> = None;
    let mut layers: Vec<Vec<Neuron>> = Vec::new();
    let mut current_layer: Option<Vec<Neuron>> = None;
    let mut pending: Option<PendingSynapse> = None;
    let mut synapses: Vec<PendingSynapse> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => match element.name().as_ref() {
                b"neural_net" => {
                    let tag = require_attr(&element, "type")?;
                    kind = Some(
                        NeuronKind::from_tag(&tag).ok_or(NnmlError::UnsupportedKind(tag))?,
                    );
                }
                b"layer" => {
                    current_layer = Some(Vec::new());
                }
                b"neuron" => {
                    let layer = current_layer
                        .as_mut()
                        .ok_or_else(|| NnmlError::MisplacedElement("neuron".into()))?;
                    let sigma = parse_f32("sigma", require_attr(&element, "sigma")?)?;
                    layer.push(Neuron::binary(sigma));
                }
                b"synapse" => {
                    let weight = parse_f32("weight", require_attr(&element, "weight")?)?;
                    pending = Some(PendingSynapse {
                        weight,
                        ..PendingSynapse::default()
                    });
                }
                b"source" => {
                    let record = pending
                        .as_mut()
                        .ok_or_else(|| NnmlError::MisplacedElement("source".into()))?;
                    record.source = Some(parse_position(&element)?);
                }
                b"target" => {
                    let record = pending
                        .as_mut()
                        .ok_or_else(|| NnmlError::MisplacedElement("target".into()))?;
                    record.target = Some(parse_position(&element)?);
                }
                _ => {}
            },
            Event::End(element) => match element.name().as_ref() {
                b"layer" => {
                    if let Some(layer) = current_layer.take() {
                        layers.push(layer);
                    }
                }
                b"synapse" => {
                    let record = pending.take().ok_or(NnmlError::IncompleteSynapse)?;
                    if record.source.is_none() || record.target.is_none() {
                        return Err(NnmlError::IncompleteSynapse);
                    }
                    synapses.push(record);
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if kind.is_none() {
        return Err(NnmlError::MissingSection("neural_net"));
    }
    if layers.is_empty() {
        return Err(NnmlError::MissingSection("layer"));
    }
    if synapses.is_empty() {
        return Err(NnmlError::MissingSection("synapse"));
    }

    let mut net = Network::from_layers(layers)?;
    for record in synapses {
        let source = resolve(&net, record.source.unwrap_or_default())?;
        let target = resolve(&net, record.target.unwrap_or_default())?;
        net.connect(source, target, record.weight);
    }
    Ok(net)
}

fn resolve(net: &Network, position: (usize, usize)) -> Result<usize, NnmlError> {
    let (layer, neuron) = position;
    net.layers()
        .get(layer)
        .and_then(|l| l.get(neuron))
        .copied()
        .ok_or(NnmlError::BadPosition { layer, neuron })
}

fn parse_position(element: &BytesStart<'_>) -> Result<(usize, usize), NnmlError> {
    let layer = parse_usize("layerID", require_attr(element, "layerID")?)?;
    let neuron = parse_usize("neuronID", require_attr(element, "neuronID")?)?;
    Ok((layer, neuron))
}

fn require_attr(element: &BytesStart<'_>, name: &'static str) -> Result<String, NnmlError> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() == name.as_bytes() {
            return Ok(attribute.unescape_value()?.into_owned());
        }
    }
    Err(NnmlError::MissingAttribute(name))
}

fn parse_f32(name: &'static str, value: String) -> Result<f32, NnmlError> {
    value
        .trim()
        .parse()
        .map_err(|_| NnmlError::BadNumber { name, value })
}

fn parse_usize(name: &'static str, value: String) -> Result<usize, NnmlError> {
    value
        .trim()
        .parse()
        .map_err(|_| NnmlError::BadNumber { name, value })
}
