//! Rendering a network into NNML text.

use core_net::{Network, NeuronLocator};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::NnmlError;

/// Serialises the network: header, every layer in order, then every synapse
/// in traversal order (layers, then neurons, then each neuron's outgoing
/// list). The layer section is fully emitted before the first synapse, so
/// decoded synapse records can rely on every position already existing.
pub fn encode(net: &Network) -> Result<String, NnmlError> {
    let locator = NeuronLocator::new(net);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped(
        r#"neural_net SYSTEM "nnml.dtd""#,
    )))?;

    let mut root = BytesStart::new("neural_net");
    root.push_attribute(("type", net.kind().tag()));
    writer.write_event(Event::Start(root))?;

    for layer in net.layers() {
        writer.write_event(Event::Start(BytesStart::new("layer")))?;
        for &id in layer {
            let mut neuron = BytesStart::new("neuron");
            neuron.push_attribute(("sigma", net.neuron(id).threshold.param().as_str()));
            writer.write_event(Event::Empty(neuron))?;
        }
        writer.write_event(Event::End(BytesEnd::new("layer")))?;
    }

    for layer in net.layers() {
        for &id in layer {
            for &synapse_id in net.outgoing(id) {
                let synapse = net.synapse(synapse_id);
                let (source_layer, source_neuron) = locator.locate(synapse.source)?;
                let (target_layer, target_neuron) = locator.locate(synapse.target)?;

                let mut record = BytesStart::new("synapse");
                record.push_attribute(("weight", format!("{}", synapse.weight).as_str()));
                writer.write_event(Event::Start(record))?;

                let mut source = BytesStart::new("source");
                source.push_attribute(("layerID", source_layer.to_string().as_str()));
                source.push_attribute(("neuronID", source_neuron.to_string().as_str()));
                writer.write_event(Event::Empty(source))?;

                let mut target = BytesStart::new("target");
                target.push_attribute(("layerID", target_layer.to_string().as_str()));
                target.push_attribute(("neuronID", target_neuron.to_string().as_str()));
                writer.write_event(Event::Empty(target))?;

                writer.write_event(Event::End(BytesEnd::new("synapse")))?;
            }
        }
    }

    writer.write_event(Event::End(BytesEnd::new("neural_net")))?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_net::test_helpers::single_synapse;
    use core_net::{Neuron, NeuronId};

    #[test]
    fn layers_are_emitted_before_synapses() {
        let net = single_synapse(0.8, 1.0);
        let text = encode(&net).unwrap();

        let last_layer = text.rfind("</layer>").expect("layer section");
        let first_synapse = text.find("<synapse").expect("synapse section");
        assert!(last_layer < first_synapse);
        assert!(text.contains(r#"<neural_net type="bineuron">"#));
        assert!(text.contains(r#"<neuron sigma="0.8"/>"#));
        assert!(text.contains(r#"<source layerID="0" neuronID="0"/>"#));
        assert!(text.contains(r#"<target layerID="1" neuronID="0"/>"#));
    }

    #[test]
    fn orphaned_endpoints_fail_to_encode() {
        let mut net = single_synapse(0.8, 1.0);
        let orphan: NeuronId = net.layer(1)[0];
        net.replace_layer(vec![Neuron::binary(0.9)], 1).unwrap();

        let error = encode(&net).unwrap_err();
        assert!(matches!(error, NnmlError::Locate(found) if found.0 == orphan));
    }
}
