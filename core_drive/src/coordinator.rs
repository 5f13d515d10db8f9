//! Serialises conceptually parallel firing into reproducible discrete
//! sweeps over a pattern stream.

use core_net::{Network, NeuronId, Pattern};
use tracing::{info, instrument};

use crate::giver::PatternGiver;
use crate::reader::PatternReader;
use crate::DriveError;

/// Summary of one completed sweep, handed to observers.
#[derive(Clone, Debug, Default)]
pub struct SweepReport {
    /// Ids of the non-input neurons that fired during the sweep.
    pub fired: Vec<NeuronId>,
    /// Output captured at the end of the sweep.
    pub output: Pattern,
}

/// Hook invoked after every completed sweep.
pub trait SweepObserver {
    fn on_sweep(&mut self, step: usize, net: &Network, report: &SweepReport);
}

/// Fires every non-input neuron whose threshold is reached, walking the
/// layers in ascending order and each layer in its stored order.
///
/// One sweep fully settles a strictly layered feed-forward topology,
/// because each layer only forwards to layers processed later in the same
/// sweep. Arbitrary wiring is not guaranteed to settle and is out of
/// contract.
pub(crate) fn sweep(net: &mut Network) -> Vec<NeuronId> {
    let mut fired = Vec::new();
    for layer_index in 1..net.layer_count() {
        for position in 0..net.layer(layer_index).len() {
            let id = net.layer(layer_index)[position];
            if net.threshold_reached(id) {
                net.fire(id);
                fired.push(id);
            }
        }
    }
    fired
}

/// Verifies the giver and reader are still advancing in lockstep.
pub(crate) fn lockstep(sent: usize, read: usize) -> Result<(), DriveError> {
    if sent == read {
        Ok(())
    } else {
        Err(DriveError::LockstepMismatch { sent, read })
    }
}

/// Drives a net through its input stream, one discrete step per pattern:
/// feed, sweep, capture, clear.
#[derive(Debug)]
pub struct Coordinator {
    giver: PatternGiver,
    reader: PatternReader,
}

impl Coordinator {
    /// Wires a giver on the net's first layer and a reader on its last; the
    /// reader's target is the length of the input stream.
    pub fn new(net: &Network, input: Vec<Pattern>) -> Result<Self, DriveError> {
        let first = net.layers().first().ok_or(DriveError::EmptyNetwork)?.clone();
        let last = net.layers().last().ok_or(DriveError::EmptyNetwork)?.clone();
        let target = input.len();
        let giver = PatternGiver::new(first, input)?;
        let reader = PatternReader::new(last, target);
        Ok(Self { giver, reader })
    }

    /// Assembles a coordinator from independently constructed parts.
    pub fn from_parts(giver: PatternGiver, reader: PatternReader) -> Self {
        Self { giver, reader }
    }

    pub fn giver(&self) -> &PatternGiver {
        &self.giver
    }

    pub fn reader(&self) -> &PatternReader {
        &self.reader
    }

    /// Executes one discrete step. Transient neuron state is cleared at the
    /// end of the step, once giver and reader agree on the count.
    pub fn step(&mut self, net: &mut Network) -> Result<SweepReport, DriveError> {
        self.giver.next(net)?;
        let fired = sweep(net);
        let output = self.reader.read(net)?;
        lockstep(self.giver.sent(), self.reader.count())?;
        net.clear_all();
        Ok(SweepReport { fired, output })
    }

    /// Steps until the whole input stream has been presented and read.
    #[instrument(skip_all, fields(patterns = self.reader.target()))]
    pub fn run(
        &mut self,
        net: &mut Network,
        mut observer: Option<&mut dyn SweepObserver>,
    ) -> Result<(), DriveError> {
        while self.reader.count() < self.reader.target() {
            let step = self.reader.count();
            let report = self.step(net)?;
            if let Some(hook) = observer.as_mut() {
                hook.on_sweep(step, net, &report);
            }
        }
        info!(read = self.reader.count(), "pattern stream drained");
        Ok(())
    }
}
