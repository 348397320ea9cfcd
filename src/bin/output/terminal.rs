use std::io::{self, Write};
use timeslice::report::Report;
use timeslice::{Result, Run};

use output::Output;

/// Reports written to the standard output one after another.
pub struct Terminal {
    written: usize,
}

impl Terminal {
    #[inline]
    pub fn new() -> Terminal {
        Terminal { written: 0 }
    }
}

impl Output for Terminal {
    fn next(&mut self, run: &Run) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        if self.written > 0 {
            writeln!(stdout)?;
        }
        write!(stdout, "{}", Report::new(run))?;
        stdout.flush()?;
        self.written += 1;
        Ok(())
    }
}
