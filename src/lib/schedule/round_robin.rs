use std::collections::VecDeque;

use config;
use job::Job;
use run::Run;
use schedule::queue::Arrivals;
use schedule::{Policy, Schedule};
use trace::{Slice, Trace};
use {Result, Ticks};

/// A round-robin scheduling policy.
///
/// Jobs share a single first-in-first-out queue and take turns of at most one
/// quantum each. Jobs arriving during a turn are queued before the job that
/// has just been interrupted.
#[derive(Clone, Copy, Debug)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// Create a scheduling policy.
    pub fn new(config: &config::RoundRobin) -> RoundRobin {
        RoundRobin { quantum: config.quantum() }
    }

    /// Return the quantum.
    #[inline]
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Schedule for RoundRobin {
    #[inline]
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn run(&self, jobs: &[Job]) -> Result<Run> {
        let mut jobs = super::prepare(jobs, self.policy())?;
        let mut arrivals = Arrivals::new(&jobs);
        let mut ready = VecDeque::new();
        let mut trace = Trace::new();
        let mut time = 0;

        loop {
            ready.extend(arrivals.admit(&mut jobs, time));
            let index = match ready.pop_front() {
                Some(index) => index,
                _ => match arrivals.next() {
                    Some(arrival) => {
                        time = arrival;
                        continue;
                    },
                    _ => break,
                },
            };

            let start = time;
            let complete = {
                let job = &mut jobs[index];
                time += job.serve(start, self.quantum);
                trace.push(Slice {
                    id: job.id(),
                    name: job.name(),
                    start: start,
                    end: time,
                    level: None,
                });
                debug!(target: "Round Robin", "{} runs from {} to {}.", job.name(), start, time);
                job.is_complete()
            };

            if complete {
                info!(target: "Round Robin", "{} completes at {}.", jobs[index].name(), time);
            } else {
                ready.extend(arrivals.admit(&mut jobs, time));
                ready.push_back(index);
            }
        }

        Run::new(self.policy(), trace, jobs)
    }
}

#[cfg(test)]
mod tests {
    use config;
    use job::Job;
    use schedule::{Policy, Schedule};
    use super::RoundRobin;

    macro_rules! run(
        ($quantum:expr, [$(($name:expr, $arrival:expr, $length:expr)),*]) => ({
            let mut jobs = vec![];
            $(
                let id = jobs.len();
                jobs.push(Job::new(id, $name, $arrival, $length));
            )*
            RoundRobin::new(&config::RoundRobin::new($quantum)).run(&jobs).unwrap()
        });
    );

    macro_rules! slices(
        ($run:expr) => ($run.trace.iter().map(|slice| (slice.name, slice.start, slice.end))
                                         .collect::<Vec<_>>());
    );

    #[test]
    fn circulate() {
        let run = run!(1, [('A', 0, 3), ('B', 1, 2), ('C', 2, 4)]);

        assert_eq!(run.policy, Policy::RoundRobin);
        assert_eq!(run.trace.order(), vec!['A', 'B', 'A', 'C', 'B', 'A', 'C', 'C', 'C']);
        assert_eq!(run.completion('A'), Some(6));
        assert_eq!(run.completion('B'), Some(5));
        assert_eq!(run.completion('C'), Some(9));

        let metrics = run.metrics();
        assert_eq!(metrics.iter().map(|metrics| metrics.turnaround).collect::<Vec<_>>(),
                   vec![6, 4, 7]);
        assert_eq!(metrics.iter().map(|metrics| metrics.waiting).collect::<Vec<_>>(),
                   vec![3, 2, 3]);
    }

    #[test]
    fn quantum() {
        let run = run!(2, [('A', 0, 3), ('B', 1, 2), ('C', 2, 4)]);
        assert_eq!(slices!(run), vec![
            ('A', 0, 2), ('B', 2, 4), ('C', 4, 6), ('A', 6, 7), ('C', 7, 9),
        ]);
    }

    #[test]
    fn first_come_first_served() {
        let run = run!(10, [('A', 0, 3), ('B', 1, 2), ('C', 1, 4), ('D', 0, 1)]);
        assert_eq!(run.trace.order(), vec!['A', 'D', 'B', 'C']);
        assert_eq!(run.trace.switches(), 3);
        for (slice, job) in run.trace.iter().zip(&['A', 'D', 'B', 'C']) {
            assert_eq!(slice.name, *job);
            assert_eq!(slice.duration(), match *job {
                'A' => 3, 'B' => 2, 'C' => 4, _ => 1,
            });
        }
    }

    #[test]
    fn idle() {
        let run = run!(2, [('A', 0, 1), ('B', 4, 3)]);
        assert_eq!(slices!(run), vec![('A', 0, 1), ('B', 4, 6), ('B', 6, 7)]);
        assert_eq!(run.history().idle, 3);
    }

    #[test]
    fn arrival_before_requeue() {
        let run = run!(2, [('A', 0, 4), ('B', 2, 1)]);
        assert_eq!(slices!(run), vec![('A', 0, 2), ('B', 2, 3), ('A', 3, 5)]);
    }

    #[test]
    fn default_quantum() {
        let jobs = [('A', 0, 3), ('B', 1, 2), ('C', 2, 4)];
        let jobs = jobs.iter().enumerate().map(|(id, &(name, arrival, length))| {
            Job::new(id, name, arrival, length)
        }).collect::<Vec<_>>();

        let one = RoundRobin::new(&config::RoundRobin::new(1)).run(&jobs).unwrap();
        for &quantum in &[0, -3] {
            let schedule = RoundRobin::new(&config::RoundRobin::new(quantum));
            assert_eq!(schedule.quantum(), 1);
            assert_eq!(schedule.run(&jobs).unwrap(), one);
        }
        let unset = RoundRobin::new(&config::RoundRobin::default()).run(&jobs).unwrap();
        assert_eq!(unset, one);
    }
}
