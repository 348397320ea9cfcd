//! Execution traces.

use std::fmt;
use std::slice::Iter;

use Ticks;

/// A contiguous interval during which a job holds the processor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slice {
    /// The identifier of the job.
    pub id: usize,
    /// The name of the job.
    pub name: char,
    /// The first tick of the interval.
    pub start: Ticks,
    /// The tick right after the interval.
    pub end: Ticks,
    /// The feedback level at which the interval ran.
    pub level: Option<usize>,
}

/// An ordered record of slices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    slices: Vec<Slice>,
}

impl Slice {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

impl Trace {
    #[inline]
    pub fn new() -> Trace {
        Trace::default()
    }

    /// Append a slice as is. Empty slices are ignored.
    pub fn push(&mut self, slice: Slice) {
        debug_assert!(slice.start <= slice.end);
        debug_assert!(self.end() <= slice.start);
        if slice.start < slice.end {
            self.slices.push(slice);
        }
    }

    /// Append a slice merging it into the last one when the same job simply
    /// keeps the processor.
    pub fn extend(&mut self, slice: Slice) {
        if let Some(last) = self.slices.last_mut() {
            if last.id == slice.id && last.end == slice.start && last.level == slice.level {
                last.end = slice.end;
                return;
            }
        }
        self.push(slice);
    }

    /// Return the total amount of service a job has received.
    pub fn service(&self, id: usize) -> Ticks {
        self.slices.iter().filter(|slice| slice.id == id).map(Slice::duration).sum()
    }

    /// Return the names of the jobs in the order they took the processor.
    pub fn order(&self) -> Vec<char> {
        self.slices.iter().map(|slice| slice.name).collect()
    }

    /// Return the moment the last slice ends.
    #[inline]
    pub fn end(&self) -> Ticks {
        self.slices.last().map(|slice| slice.end).unwrap_or(0)
    }

    /// Return the amount of time the processor was busy.
    pub fn busy(&self) -> Ticks {
        self.slices.iter().map(Slice::duration).sum()
    }

    /// Return the number of times the processor passed from one job to another.
    pub fn switches(&self) -> usize {
        self.slices.windows(2).filter(|pair| pair[0].id != pair[1].id).count()
    }

    /// Return the job holding the processor at a given tick.
    pub fn at(&self, time: Ticks) -> Option<&Slice> {
        let position = self.slices.binary_search_by(|slice| {
            use std::cmp::Ordering;
            if slice.end <= time {
                Ordering::Less
            } else if slice.start > time {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        position.ok().map(|i| &self.slices[i])
    }

    #[inline]
    pub fn iter(&self) -> Iter<Slice> {
        self.slices.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl<'l> IntoIterator for &'l Trace {
    type Item = &'l Slice;
    type IntoIter = Iter<'l, Slice>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{} [{}, {})", self.name, self.start, self.end)?;
        if let Some(level) = self.level {
            write!(formatter, " @ {}", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Slice, Trace};

    macro_rules! slice(
        ($id:expr, $name:expr, $start:expr, $end:expr) => (
            Slice { id: $id, name: $name, start: $start, end: $end, level: None }
        );
    );

    #[test]
    fn extend() {
        let mut trace = Trace::new();
        trace.extend(slice!(0, 'A', 0, 1));
        trace.extend(slice!(0, 'A', 1, 2));
        trace.extend(slice!(1, 'B', 2, 3));
        trace.extend(slice!(0, 'A', 4, 5));

        assert_eq!(trace.len(), 3);
        assert_eq!(trace.order(), vec!['A', 'B', 'A']);
        assert_eq!(trace.service(0), 3);
        assert_eq!(trace.service(1), 1);
        assert_eq!(trace.end(), 5);
        assert_eq!(trace.busy(), 4);
        assert_eq!(trace.switches(), 2);
    }

    #[test]
    fn push_empty() {
        let mut trace = Trace::new();
        trace.push(slice!(0, 'A', 3, 3));
        assert!(trace.is_empty());
        assert_eq!(trace.end(), 0);
    }

    #[test]
    fn at() {
        let mut trace = Trace::new();
        trace.push(slice!(0, 'A', 0, 2));
        trace.push(slice!(1, 'B', 4, 6));

        assert_eq!(trace.at(1).map(|slice| slice.name), Some('A'));
        assert_eq!(trace.at(2), None);
        assert_eq!(trace.at(3), None);
        assert_eq!(trace.at(4).map(|slice| slice.name), Some('B'));
        assert_eq!(trace.at(6), None);
    }
}
