//! Canonical miniature nets shared by the engine and codec test suites.

use crate::assembly::NetBuilder;
use crate::net::Network;

/// One input unit wired to one output unit with the given output threshold
/// and synapse weight.
pub fn single_synapse(sigma: f32, weight: f32) -> Network {
    let mut builder = NetBuilder::new();
    let input = builder.add_binary_layer(&[sigma]);
    let output = builder.add_binary_layer(&[sigma]);
    builder.connect((input, 0), (output, 0), weight);
    builder.build().expect("valid single synapse net")
}

/// Two input units fanning into one output unit; fires only when both
/// inputs fire (an AND gate for the default weights).
pub fn fan_in(output_sigma: f32, weight: f32) -> Network {
    let mut builder = NetBuilder::new();
    let input = builder.add_binary_layer(&[0.8, 0.8]);
    let output = builder.add_binary_layer(&[output_sigma]);
    builder.connect((input, 0), (output, 0), weight);
    builder.connect((input, 1), (output, 0), weight);
    builder.build().expect("valid fan-in net")
}
