//! Outcomes of simulations.

use history::History;
use job::Job;
use schedule::Policy;
use trace::Trace;
use {Result, Ticks};

/// The outcome of simulating one policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Run {
    /// The policy.
    pub policy: Policy,
    /// The execution trace.
    pub trace: Trace,
    /// The jobs in their final state, in input order.
    pub jobs: Vec<Job>,
}

/// Final timing figures of a job.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub id: usize,
    pub name: char,
    pub arrival: Ticks,
    pub length: Ticks,
    pub completion: Ticks,
    /// The completion time minus the arrival time.
    pub turnaround: Ticks,
    /// The turnaround time minus the length.
    pub waiting: Ticks,
}

impl Run {
    /// Assemble a run and check that every job has been served exactly as
    /// much as it needed.
    pub fn new(policy: Policy, trace: Trace, jobs: Vec<Job>) -> Result<Run> {
        for job in &jobs {
            let completion = some!(job.completion(), Invariant,
                                   "{} has not completed under {}", job, policy);
            let service = trace.service(job.id());
            if service != job.length() {
                raise!(Invariant, "{} has received {} ticks of service under {}",
                       job, service, policy);
            }
            if completion < job.arrival() + job.length() {
                raise!(Invariant, "{} has completed too early ({}) under {}",
                       job, completion, policy);
            }
        }
        Ok(Run { policy: policy, trace: trace, jobs: jobs })
    }

    /// Return the final timing figures of the jobs in input order.
    pub fn metrics(&self) -> Vec<Metrics> {
        self.jobs.iter().filter_map(Job::metrics).collect()
    }

    /// Return summary statistics.
    #[inline]
    pub fn history(&self) -> History {
        History::new(&self.trace, &self.metrics())
    }

    /// Return the completion time of the job with a given name.
    pub fn completion(&self, name: char) -> Option<Ticks> {
        self.jobs.iter().find(|job| job.name() == name).and_then(Job::completion)
    }
}
