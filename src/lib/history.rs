use run::Metrics;
use trace::Trace;
use Ticks;

/// Statistics about a run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct History {
    /// The number of jobs.
    pub jobs: usize,
    /// The moment the last job completed.
    pub makespan: Ticks,
    /// The number of ticks the processor was busy.
    pub busy: Ticks,
    /// The number of ticks the processor was idle before the makespan.
    pub idle: Ticks,
    /// The number of slices.
    pub slices: usize,
    /// The number of times the processor passed from one job to another.
    pub switches: usize,
    /// The average turnaround time.
    pub turnaround: f64,
    /// The average waiting time.
    pub waiting: f64,
}

impl History {
    /// Summarize a trace and the corresponding metrics.
    pub fn new(trace: &Trace, metrics: &[Metrics]) -> History {
        let jobs = metrics.len();
        let makespan = metrics.iter().map(|metrics| metrics.completion).max().unwrap_or(0);
        let busy = trace.busy();
        let (turnaround, waiting) = if jobs == 0 {
            (0.0, 0.0)
        } else {
            let sum = metrics.iter().fold((0, 0), |(turnaround, waiting), metrics| {
                (turnaround + metrics.turnaround, waiting + metrics.waiting)
            });
            (sum.0 as f64 / jobs as f64, sum.1 as f64 / jobs as f64)
        };
        History {
            jobs: jobs,
            makespan: makespan,
            busy: busy,
            idle: makespan.saturating_sub(busy),
            slices: trace.len(),
            switches: trace.switches(),
            turnaround: turnaround,
            waiting: waiting,
        }
    }
}

#[cfg(test)]
mod tests {
    use history::History;
    use run::Metrics;
    use trace::{Slice, Trace};

    #[test]
    fn new() {
        let mut trace = Trace::new();
        trace.push(Slice { id: 0, name: 'A', start: 0, end: 2, level: None });
        trace.push(Slice { id: 1, name: 'B', start: 5, end: 6, level: None });
        let metrics = vec![
            Metrics { id: 0, name: 'A', arrival: 0, length: 2, completion: 2,
                      turnaround: 2, waiting: 0 },
            Metrics { id: 1, name: 'B', arrival: 4, length: 1, completion: 6,
                      turnaround: 2, waiting: 1 },
        ];

        let history = History::new(&trace, &metrics);
        assert_eq!(history.jobs, 2);
        assert_eq!(history.makespan, 6);
        assert_eq!(history.busy, 3);
        assert_eq!(history.idle, 3);
        assert_eq!(history.slices, 2);
        assert_eq!(history.switches, 1);
        ::assert::close(&[history.turnaround, history.waiting][..], &[2.0, 0.5][..], 1e-12);
    }

    #[test]
    fn new_empty() {
        let history = History::new(&Trace::new(), &[]);
        assert_eq!(history, History::default());
    }
}
