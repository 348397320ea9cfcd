//! Tool for simulating processor scheduling policies.
//!
//! Three policies are available: round robin, preemptive shortest remaining
//! time, and multilevel feedback. Each of them consumes its own copy of a job
//! list and produces a [`Run`](run/struct.Run.html), that is, the execution
//! trace together with the final state of every job.

#[cfg(test)]
extern crate assert;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

extern crate serde;
extern crate toml;

#[macro_use]
mod macros;

mod result;

pub mod config;
pub mod history;
pub mod job;
pub mod report;
pub mod run;
pub mod schedule;
pub mod trace;
pub mod workload;

pub use config::Config;
pub use job::Job;
pub use result::{Error, ErrorKind, Result};
pub use run::{Metrics, Run};
pub use schedule::{Policy, Schedule};
pub use trace::{Slice, Trace};

/// A point or a span of simulated time.
pub type Ticks = u64;
