use approx::assert_relative_eq;
use core_net::{NetBuilder, NeuronLocator, ThresholdFn};

fn sample_net() -> core_net::Network {
    let mut builder = NetBuilder::new();
    builder.add_binary_layer(&[0.8, 0.6]);
    builder.add_binary_layer(&[0.5, 0.5, 0.5]);
    builder.add_binary_layer(&[1.0]);
    builder.connect((0, 0), (1, 0), 0.25);
    builder.connect((0, 0), (1, 2), -0.5);
    builder.connect((0, 1), (1, 1), 2.0);
    builder.connect((1, 0), (2, 0), 1.0);
    builder.connect((1, 1), (2, 0), 0.1);
    builder.connect((1, 2), (2, 0), -1.25);
    builder.build().expect("valid sample net")
}

#[test]
fn encode_then_decode_preserves_the_graph() {
    let original = sample_net();
    let text = nnml::encode(&original).expect("encodes");
    let restored = nnml::decode(&text).expect("decodes");

    assert_eq!(restored.kind(), original.kind());
    assert_eq!(restored.layer_count(), original.layer_count());
    for (restored_layer, original_layer) in restored.layers().iter().zip(original.layers()) {
        assert_eq!(restored_layer.len(), original_layer.len());
        for (&restored_id, &original_id) in restored_layer.iter().zip(original_layer) {
            let ThresholdFn::Binary { sigma: restored_sigma } =
                restored.neuron(restored_id).threshold;
            let ThresholdFn::Binary { sigma: original_sigma } =
                original.neuron(original_id).threshold;
            assert_relative_eq!(restored_sigma, original_sigma, epsilon = 1e-6);
        }
    }

    // The synapse set survives with its positions and weights; traversal
    // order makes the arenas comparable index by index.
    assert_eq!(restored.synapses.len(), original.synapses.len());
    let original_locator = NeuronLocator::new(&original);
    let restored_locator = NeuronLocator::new(&restored);
    for (restored_synapse, original_synapse) in
        restored.synapses.iter().zip(&original.synapses)
    {
        assert_eq!(
            restored_locator.locate(restored_synapse.source).unwrap(),
            original_locator.locate(original_synapse.source).unwrap()
        );
        assert_eq!(
            restored_locator.locate(restored_synapse.target).unwrap(),
            original_locator.locate(original_synapse.target).unwrap()
        );
        assert_relative_eq!(
            restored_synapse.weight,
            original_synapse.weight,
            epsilon = 1e-6
        );
    }
}

#[test]
fn double_round_trip_is_stable() {
    let net = sample_net();
    let once = nnml::encode(&net).unwrap();
    let twice = nnml::encode(&nnml::decode(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn legacy_documents_still_decode() {
    // Documents from other producers: no indentation, every tag on its own
    // line, floats always carrying a decimal point.
    let text = "<?xml version=\"1.0\"?>\n\
<!DOCTYPE neural_net SYSTEM \"nnml.dtd\">\n\
<neural_net type=\"bineuron\">\n\
<layer>\n\
<neuron sigma=\"0.8\"/>\n\
</layer>\n\
<layer>\n\
<neuron sigma=\"0.8\"/>\n\
</layer>\n\
<synapse weight=\"1.0\">\n\
<source layerID=\"0\" neuronID=\"0\"/>\n\
<target layerID=\"1\" neuronID=\"0\"/>\n\
</synapse>\n\
</neural_net>";

    let net = nnml::decode(text).expect("legacy document decodes");
    assert_eq!(net.layer_count(), 2);
    assert_eq!(net.synapses.len(), 1);
    let synapse = net.synapse(0);
    assert_eq!(synapse.source, net.layer(0)[0]);
    assert_eq!(synapse.target, net.layer(1)[0]);
    assert_relative_eq!(synapse.weight, 1.0, epsilon = 1e-6);
}
