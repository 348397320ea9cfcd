//! Scheduling policies.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use config::Config;
use job::Job;
use run::Run;
use {Error, Result};

mod feedback;
mod queue;
mod round_robin;
mod shortest;

pub use self::feedback::Feedback;
pub use self::round_robin::RoundRobin;
pub use self::shortest::ShortestRemainingTime;

/// A scheduling policy.
pub trait Schedule {
    /// Return the policy.
    fn policy(&self) -> Policy;

    /// Simulate the policy on a copy of the jobs.
    fn run(&self, jobs: &[Job]) -> Result<Run>;
}

/// A kind of scheduling policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Round robin.
    RoundRobin,
    /// Preemptive shortest remaining time.
    ShortestRemainingTime,
    /// Multilevel feedback.
    Feedback,
}

impl Policy {
    /// Return all the policies in the order they are usually reported.
    #[inline]
    pub fn all() -> Vec<Policy> {
        vec![Policy::RoundRobin, Policy::ShortestRemainingTime, Policy::Feedback]
    }

    /// Return the short name.
    pub fn abbreviation(&self) -> &'static str {
        match *self {
            Policy::RoundRobin => "RR",
            Policy::ShortestRemainingTime => "SRT",
            Policy::Feedback => "FB",
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(name: &str) -> Result<Policy> {
        Ok(match &*name.to_uppercase() {
            "RR" => Policy::RoundRobin,
            "SRT" => Policy::ShortestRemainingTime,
            "FB" => Policy::Feedback,
            _ => raise!(Input, "expected RR, SRT, or FB but got {:?}", name),
        })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(match *self {
            Policy::RoundRobin => "round robin",
            Policy::ShortestRemainingTime => "shortest remaining time",
            Policy::Feedback => "feedback",
        })
    }
}

/// Create a scheduling policy.
pub fn new(policy: Policy, config: &Config) -> Box<dyn Schedule> {
    match policy {
        Policy::RoundRobin => Box::new(RoundRobin::new(&config.round_robin)),
        Policy::ShortestRemainingTime => Box::new(ShortestRemainingTime::new()),
        Policy::Feedback => Box::new(Feedback::new(&config.feedback)),
    }
}

/// Take a private copy of the jobs for a run.
///
/// Identifiers and names have to be unique, and the jobs should not have been
/// touched by another run.
fn prepare(jobs: &[Job], policy: Policy) -> Result<Vec<Job>> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    for job in jobs {
        if !ids.insert(job.id()) {
            raise!(Invariant, "the identifier of {} is not unique", job);
        }
        if !names.insert(job.name()) {
            raise!(Invariant, "the name of {} is not unique", job);
        }
        if !job.is_fresh() {
            raise!(Invariant, "{} has already been run and cannot be given to {}", job, policy);
        }
    }
    info!(target: "Schedule", "Simulating {} with {} jobs...", policy, jobs.len());
    Ok(jobs.to_vec())
}
