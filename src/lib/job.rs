//! Jobs.

use std::fmt;

use run::Metrics;
use Ticks;

/// A unit of work.
///
/// The arrival time and the length are fixed at creation. The remaining time
/// and the completion time are advanced only by the policy running the job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    id: usize,
    name: char,
    arrival: Ticks,
    length: Ticks,
    remaining: Ticks,
    completion: Option<Ticks>,
}

impl Job {
    /// Create a job.
    pub fn new(id: usize, name: char, arrival: Ticks, length: Ticks) -> Job {
        Job {
            id: id,
            name: name,
            arrival: arrival,
            length: length,
            remaining: length,
            completion: None,
        }
    }

    getters! {
        /// Return the position of the job in the input.
        id: usize,
        /// Return the display name.
        name: char,
        /// Return the moment the job becomes ready.
        arrival: Ticks,
        /// Return the total service time.
        length: Ticks,
        /// Return the service time still to be received.
        remaining: Ticks,
        /// Return the completion time if the job has completed.
        completion: Option<Ticks>,
    }

    /// Check if the job has received its full service.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// Check if the job can take the processor at a given moment.
    #[inline]
    pub fn is_ready(&self, time: Ticks) -> bool {
        self.arrival <= time && self.remaining > 0
    }

    /// Check if the job has not been touched by any policy yet.
    #[inline]
    pub fn is_fresh(&self) -> bool {
        self.remaining == self.length && self.completion.is_none()
    }

    /// Return the final timing figures if the job has completed.
    pub fn metrics(&self) -> Option<Metrics> {
        self.completion.map(|completion| {
            let turnaround = completion - self.arrival;
            Metrics {
                id: self.id,
                name: self.name,
                arrival: self.arrival,
                length: self.length,
                completion: completion,
                turnaround: turnaround,
                waiting: turnaround - self.length,
            }
        })
    }

    /// Give the job up to `ticks` of service starting at `time` and return
    /// the amount actually consumed.
    pub(crate) fn serve(&mut self, time: Ticks, ticks: Ticks) -> Ticks {
        let used = ticks.min(self.remaining);
        self.remaining -= used;
        if self.remaining == 0 {
            self.complete(time + used);
        }
        used
    }

    /// Stamp the completion time unless it has been stamped already.
    pub(crate) fn complete(&mut self, time: Ticks) {
        debug_assert_eq!(self.remaining, 0);
        if self.completion.is_none() {
            self.completion = Some(time);
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "job {} (#{}, arrival {}, length {})",
               self.name, self.id, self.arrival, self.length)
    }
}
