use std::collections::VecDeque;

use config::{self, Bottom};
use job::Job;
use run::Run;
use schedule::queue::Arrivals;
use schedule::{Policy, Schedule};
use trace::{Slice, Trace};
use {Result, Ticks};

/// The largest number of levels. Beyond it, quanta no longer grow.
pub const MAX_LEVELS: usize = 64;

/// A multilevel-feedback scheduling policy.
///
/// Each level is a first-in-first-out queue, and level `k` grants a quantum of
/// `quantum * 2^k` ticks. Arriving jobs enter the top level, and a job whose
/// quantum expires moves one level down. A running job is never interrupted
/// before its quantum expires, even if a job arrives at a higher level.
#[derive(Clone, Copy, Debug)]
pub struct Feedback {
    levels: usize,
    quantum: Ticks,
    bottom: Bottom,
}

impl Feedback {
    /// Create a scheduling policy.
    pub fn new(config: &config::Feedback) -> Feedback {
        let mut levels = config.levels();
        if levels > MAX_LEVELS {
            warn!(target: "Feedback", "The number of levels is limited to {}.", MAX_LEVELS);
            levels = MAX_LEVELS;
        }
        Feedback { levels: levels, quantum: config.quantum(), bottom: config.bottom }
    }

    /// Return the number of levels.
    #[inline]
    pub fn levels(&self) -> usize {
        self.levels
    }

    /// Return the quantum of a level or `None` if jobs at the level run to
    /// completion.
    pub fn quantum(&self, level: usize) -> Option<Ticks> {
        debug_assert!(level < self.levels);
        if level + 1 == self.levels && self.bottom == Bottom::Fifo {
            return None;
        }
        let factor = 2u64.checked_pow(level as u32).unwrap_or(Ticks::max_value());
        Some(self.quantum.saturating_mul(factor))
    }
}

impl Schedule for Feedback {
    #[inline]
    fn policy(&self) -> Policy {
        Policy::Feedback
    }

    fn run(&self, jobs: &[Job]) -> Result<Run> {
        let mut jobs = super::prepare(jobs, self.policy())?;
        let mut arrivals = Arrivals::new(&jobs);
        let mut queues = vec![VecDeque::new(); self.levels];
        let mut trace = Trace::new();
        let mut time = 0;

        loop {
            queues[0].extend(arrivals.admit(&mut jobs, time));
            let next = queues.iter_mut().enumerate().filter_map(|(level, queue)| {
                queue.pop_front().map(|index| (level, index))
            }).next();
            let (level, index) = match next {
                Some(next) => next,
                _ => match arrivals.next() {
                    Some(arrival) => {
                        time = arrival;
                        continue;
                    },
                    _ => break,
                },
            };

            let start = time;
            let quantum = self.quantum(level).unwrap_or(Ticks::max_value());
            let complete = {
                let job = &mut jobs[index];
                time += job.serve(start, quantum);
                trace.push(Slice {
                    id: job.id(),
                    name: job.name(),
                    start: start,
                    end: time,
                    level: Some(level),
                });
                debug!(target: "Feedback", "{} runs from {} to {} at level {}.",
                       job.name(), start, time, level);
                job.is_complete()
            };

            if complete {
                info!(target: "Feedback", "{} completes at {}.", jobs[index].name(), time);
                continue;
            }

            queues[0].extend(arrivals.admit(&mut jobs, time));
            if level + 1 < self.levels {
                debug!(target: "Feedback", "{} moves to level {}.", jobs[index].name(), level + 1);
                queues[level + 1].push_back(index);
            } else {
                queues[level].push_back(index);
            }
        }

        Run::new(self.policy(), trace, jobs)
    }
}
