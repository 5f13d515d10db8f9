//! Discrete-time engines that drive a layered net through pattern streams.
//!
//! The coordinator serialises what is conceptually simultaneous neuron
//! firing into one reproducible sweep per input pattern: feed, propagate
//! layer by layer, capture the output, clear. The training coordinator adds
//! a teacher that compares captured output against a desired stream and
//! nudges synapse weights with a fixed-step local rule.
//!
//! Everything here is single threaded and fully deterministic; exactly one
//! engine owns a network for the duration of a run.

pub mod coordinator;
pub mod giver;
pub mod reader;
pub mod teacher;
pub mod training;

pub use coordinator::{Coordinator, SweepObserver, SweepReport};
pub use giver::PatternGiver;
pub use reader::PatternReader;
pub use teacher::Teacher;
pub use training::TrainingCoordinator;

use thiserror::Error;

/// Errors raised while stepping a net through a pattern stream. All are
/// terminal for the run that raised them; nothing is retried internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DriveError {
    /// A giver, reader or teacher was invoked after its stream was spent.
    #[error("{role} stream exhausted after {count} patterns")]
    StreamExhausted { role: &'static str, count: usize },
    /// Giver and reader went out of lockstep. Unreachable under normal
    /// single-stream composition; signals an engine wiring bug.
    #[error("pattern giver and reader out of lockstep (sent {sent}, read {read})")]
    LockstepMismatch { sent: usize, read: usize },
    /// A pattern's width does not match the layer it is matched against.
    #[error("pattern width {pattern} does not match layer width {layer}")]
    WidthMismatch { pattern: usize, layer: usize },
    /// The driven network has no layers to feed or read.
    #[error("the network has no layers to drive")]
    EmptyNetwork,
}
