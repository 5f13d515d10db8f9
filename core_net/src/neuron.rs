//! Threshold units and the activation variants they can carry.

/// Discriminant for the neuron variants a network may be built from.
///
/// Networks are homogeneous: every neuron in a net shares one kind, checked
/// on every structural mutation. The kind also names the stable wire-level
/// tag used by the NNML interchange format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeuronKind {
    /// Binary threshold unit: fires iff the accumulated input reaches sigma.
    BinaryThreshold,
}

impl NeuronKind {
    /// Stable wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::BinaryThreshold => "bineuron",
        }
    }

    /// Resolves a wire tag back to a kind, if it is known.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bineuron" => Some(Self::BinaryThreshold),
            _ => None,
        }
    }
}

/// Threshold applied when a fresh binary unit is created without parameters.
pub const DEFAULT_SIGMA: f32 = 0.8;

/// Activation function attached to a single neuron.
///
/// A single case today; the enum is the extension point for further unit
/// types, which must also register a wire tag on [`NeuronKind`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThresholdFn {
    Binary { sigma: f32 },
}

impl ThresholdFn {
    /// The kind discriminant this function belongs to.
    pub fn kind(&self) -> NeuronKind {
        match self {
            Self::Binary { .. } => NeuronKind::BinaryThreshold,
        }
    }

    /// True when the accumulated input is enough to fire.
    pub fn reached(&self, net: f32) -> bool {
        match self {
            Self::Binary { sigma } => net >= *sigma,
        }
    }

    /// Parameter string rendered into the wire-level neuron record.
    pub fn param(&self) -> String {
        match self {
            Self::Binary { sigma } => format!("{sigma}"),
        }
    }
}

/// A single threshold unit.
///
/// `net` only accumulates between a reset and the next fire; `fired` is
/// meaningful after a propagation sweep and before the next reset.
/// `should_have_fired` is written by the training engine while comparing
/// actual against desired output.
#[derive(Clone, Debug)]
pub struct Neuron {
    pub threshold: ThresholdFn,
    pub net: f32,
    pub fired: bool,
    pub should_have_fired: bool,
}

impl Neuron {
    /// Creates a binary threshold unit with the given sigma and all
    /// transient fields zeroed.
    pub fn binary(sigma: f32) -> Self {
        Self {
            threshold: ThresholdFn::Binary { sigma },
            net: 0.0,
            fired: false,
            should_have_fired: false,
        }
    }

    pub fn kind(&self) -> NeuronKind {
        self.threshold.kind()
    }

    /// Accumulates incoming activation.
    pub fn gather(&mut self, weight: f32) {
        self.net += weight;
    }

    /// Whether the accumulated input satisfies the activation function.
    pub fn threshold_reached(&self) -> bool {
        self.threshold.reached(self.net)
    }

    /// Resets the transient fields; the outgoing connections are untouched.
    pub fn clear(&mut self) {
        self.net = 0.0;
        self.fired = false;
        self.should_have_fired = false;
    }
}

impl Default for Neuron {
    fn default() -> Self {
        Self::binary(DEFAULT_SIGMA)
    }
}
