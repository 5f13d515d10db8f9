//! Coordinator variant that teaches after every output capture.

use core_net::{Network, Pattern};
use tracing::{info, instrument};

use crate::coordinator::{lockstep, sweep, SweepObserver, SweepReport};
use crate::giver::PatternGiver;
use crate::reader::PatternReader;
use crate::teacher::Teacher;
use crate::DriveError;

/// Drives a net exactly like [`crate::Coordinator`], but invokes the
/// teacher immediately after the output capture of every discrete step,
/// before the lockstep check and the clear.
#[derive(Debug)]
pub struct TrainingCoordinator {
    giver: PatternGiver,
    reader: PatternReader,
    teacher: Teacher,
}

impl TrainingCoordinator {
    /// Wires the engines onto the net and validates, once, that the desired
    /// output width matches the output layer.
    pub fn new(
        net: &Network,
        input: Vec<Pattern>,
        desired: Vec<Pattern>,
    ) -> Result<Self, DriveError> {
        let first = net.layers().first().ok_or(DriveError::EmptyNetwork)?.clone();
        let last = net.layers().last().ok_or(DriveError::EmptyNetwork)?.clone();
        for pattern in &desired {
            if pattern.width() != last.len() {
                return Err(DriveError::WidthMismatch {
                    pattern: pattern.width(),
                    layer: last.len(),
                });
            }
        }
        let target = input.len();
        let giver = PatternGiver::new(first, input)?;
        let reader = PatternReader::new(last, target);
        Ok(Self {
            giver,
            reader,
            teacher: Teacher::new(desired),
        })
    }

    pub fn giver(&self) -> &PatternGiver {
        &self.giver
    }

    pub fn reader(&self) -> &PatternReader {
        &self.reader
    }

    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// One discrete training step: feed, sweep, capture, teach, clear.
    pub fn step(&mut self, net: &mut Network) -> Result<SweepReport, DriveError> {
        self.giver.next(net)?;
        let fired = sweep(net);
        let output = self.reader.read(net)?;
        self.teacher.teach(net)?;
        lockstep(self.giver.sent(), self.reader.count())?;
        net.clear_all();
        Ok(SweepReport { fired, output })
    }

    /// Steps until the whole input stream has been presented, read and
    /// taught.
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
        info!(
            taught = self.teacher.compared(),
            "training stream drained"
        );
        Ok(())
    }
}
