//! Human-readable reports.

use std::fmt;

use run::Run;
use schedule::Policy;

/// A textual rendering of a run.
///
/// The rendering starts with a heading and the names of the jobs. Then every
/// tick gets a row in which the running job is marked in its column, with `X`
/// or, for the feedback policy, with the level of the slice. Idle ticks give
/// empty rows. A table of timing figures closes the report.
pub struct Report<'l> {
    run: &'l Run,
}

impl<'l> Report<'l> {
    #[inline]
    pub fn new(run: &'l Run) -> Report<'l> {
        Report { run: run }
    }

    fn timeline(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let jobs = &self.run.jobs;
        let names = jobs.iter().map(|job| job.name().to_string()).collect::<Vec<_>>();
        writeln!(formatter, "{}", names.join(" "))?;
        for time in 0..self.run.trace.end() {
            let mut row = String::new();
            if let Some(slice) = self.run.trace.at(time) {
                for job in jobs {
                    if job.id() == slice.id {
                        row.push(mark(slice.level));
                        break;
                    }
                    row.push_str("  ");
                }
            }
            writeln!(formatter, "{}", row)?;
        }
        Ok(())
    }

    fn table(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "{:<8}{:>10}{:>10}{:>12}{:>12}{:>10}",
                 "Job", "Arrival", "Length", "Completion", "Turnaround", "Waiting")?;
        for metrics in self.run.metrics() {
            writeln!(formatter, "{:<8}{:>10}{:>10}{:>12}{:>12}{:>10}",
                     metrics.name, metrics.arrival, metrics.length, metrics.completion,
                     metrics.turnaround, metrics.waiting)?;
        }
        let history = self.run.history();
        if history.jobs > 0 {
            writeln!(formatter, "{:<8}{:>44.2}{:>10.2}", "Average", history.turnaround,
                     history.waiting)?;
        }
        Ok(())
    }
}

impl<'l> fmt::Display for Report<'l> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        writeln!(formatter, "{}:", heading(self.run.policy))?;
        self.timeline(formatter)?;
        writeln!(formatter)?;
        self.table(formatter)
    }
}

fn heading(policy: Policy) -> &'static str {
    match policy {
        Policy::RoundRobin => "ROUND ROBIN",
        Policy::ShortestRemainingTime => "SHORTEST REMAINING TIME",
        Policy::Feedback => "FEEDBACK",
    }
}

fn mark(level: Option<usize>) -> char {
    level.and_then(|level| ::std::char::from_digit(level as u32, 36)).unwrap_or('X')
}

#[cfg(test)]
mod tests {
    use config::{self, Config};
    use job::Job;
    use schedule::{self, Feedback, Policy, Schedule};
    use super::Report;

    #[test]
    fn round_robin() {
        let jobs = vec![Job::new(0, 'A', 0, 2), Job::new(1, 'B', 1, 1), Job::new(2, 'C', 5, 1)];
        let run = schedule::new(Policy::RoundRobin, &Config::default()).run(&jobs).unwrap();
        let report = format!("{}", Report::new(&run));
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(&lines[..8], &[
            "ROUND ROBIN:",
            "A B C",
            "X",
            "  X",
            "X",
            "",
            "",
            "    X",
        ]);
        assert_eq!(lines[8], "");
        assert!(lines[9].starts_with("Job"));
        assert_eq!(lines[10].split_whitespace().collect::<Vec<_>>(),
                   vec!["A", "0", "2", "3", "3", "1"]);
        assert_eq!(lines[13].split_whitespace().collect::<Vec<_>>(),
                   vec!["Average", "1.67", "0.33"]);
    }

    #[test]
    fn feedback() {
        let jobs = vec![Job::new(0, 'A', 0, 4)];
        let run = Feedback::new(&config::Feedback::new(3, 1)).run(&jobs).unwrap();
        let report = format!("{}", Report::new(&run));
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(&lines[..6], &["FEEDBACK:", "A", "0", "1", "1", "2"]);
    }

    #[test]
    fn empty() {
        let run = schedule::new(Policy::ShortestRemainingTime, &Config::default())
                      .run(&[]).unwrap();
        let report = format!("{}", Report::new(&run));
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(&lines[..3], &["SHORTEST REMAINING TIME:", "", ""]);
        assert!(lines[3].starts_with("Job"));
    }
}
