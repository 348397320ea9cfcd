use std::cmp::Reverse;
use std::collections::BinaryHeap;

use job::Job;
use run::Run;
use schedule::queue::Arrivals;
use schedule::{Policy, Schedule};
use trace::{Slice, Trace};
use {Result, Ticks};

/// A preemptive shortest-remaining-time scheduling policy.
///
/// The decision is taken anew at every tick. The job with the least remaining
/// time wins, and ties go to the earlier arrival and then to the smaller
/// identifier. Consecutive ticks of the same job are reported as one slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestRemainingTime;

/// The ranking of a ready job: remaining time, arrival time, identifier, and
/// position in the job list.
type Candidate = Reverse<(Ticks, Ticks, usize, usize)>;

impl ShortestRemainingTime {
    /// Create a scheduling policy.
    #[inline]
    pub fn new() -> ShortestRemainingTime {
        ShortestRemainingTime
    }
}

impl Schedule for ShortestRemainingTime {
    #[inline]
    fn policy(&self) -> Policy {
        Policy::ShortestRemainingTime
    }

    fn run(&self, jobs: &[Job]) -> Result<Run> {
        let mut jobs = super::prepare(jobs, self.policy())?;
        let mut arrivals = Arrivals::new(&jobs);
        let mut ready = BinaryHeap::new();
        let mut trace = Trace::new();
        let mut time = 0;
        let mut last = None;

        loop {
            for index in arrivals.admit(&mut jobs, time) {
                ready.push(rank(&jobs[index], index));
            }
            let index = match ready.pop() {
                Some(Reverse((_, _, _, index))) => index,
                _ => match arrivals.next() {
                    Some(arrival) => {
                        time = arrival;
                        continue;
                    },
                    _ => break,
                },
            };

            let job = &mut jobs[index];
            if last != Some(index) {
                debug!(target: "SRT", "{} takes the processor at {} with {} remaining.",
                       job.name(), time, job.remaining());
                last = Some(index);
            }
            job.serve(time, 1);
            trace.extend(Slice {
                id: job.id(),
                name: job.name(),
                start: time,
                end: time + 1,
                level: None,
            });
            time += 1;

            if job.is_complete() {
                info!(target: "SRT", "{} completes at {}.", job.name(), time);
            } else {
                ready.push(rank(job, index));
            }
        }

        Run::new(self.policy(), trace, jobs)
    }
}

#[inline]
fn rank(job: &Job, index: usize) -> Candidate {
    Reverse((job.remaining(), job.arrival(), job.id(), index))
}
