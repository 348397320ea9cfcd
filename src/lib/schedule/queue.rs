use job::Job;
use Ticks;

/// Jobs that have not been admitted yet, ordered by arrival time and then by
/// identifier.
pub struct Arrivals {
    pending: Vec<(Ticks, usize, usize)>,
    cursor: usize,
}

impl Arrivals {
    pub fn new(jobs: &[Job]) -> Arrivals {
        let mut pending = jobs.iter().enumerate()
                                     .map(|(index, job)| (job.arrival(), job.id(), index))
                                     .collect::<Vec<_>>();
        pending.sort();
        Arrivals { pending: pending, cursor: 0 }
    }

    /// Admit every job that has arrived by a given moment and return the
    /// positions of the admitted jobs in the job list, in admission order.
    /// Jobs with no service to receive are completed on the spot instead.
    pub fn admit(&mut self, jobs: &mut [Job], time: Ticks) -> Vec<usize> {
        let mut admitted = vec![];
        while let Some(&(arrival, _, index)) = self.pending.get(self.cursor) {
            if arrival > time {
                break;
            }
            self.cursor += 1;
            if jobs[index].remaining() == 0 {
                jobs[index].complete(arrival);
            } else {
                admitted.push(index);
            }
        }
        admitted
    }

    /// Return the moment the next job arrives.
    #[inline]
    pub fn next(&self) -> Option<Ticks> {
        self.pending.get(self.cursor).map(|&(arrival, _, _)| arrival)
    }
}
