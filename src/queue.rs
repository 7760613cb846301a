//! Queue planning for duplicate pairs.
//!
//! Given two versions of a song, the planner works out which one to queue
//! and how many times, so that its play count catches up with the other.
//! Actually enqueueing is left to a `QueueSink`.

mod plan;
mod sink;
mod types;

pub use plan::{default_selection, plan};
pub use sink::{QueueError, QueueFileSink, QueueSink};
pub use types::{QueueBehavior, QueueMode, QueueRequest};

#[cfg(test)]
mod tests;
