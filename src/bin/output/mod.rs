use timeslice::{Result, Run};

mod terminal;

use self::terminal::Terminal;

pub trait Output {
    fn next(&mut self, run: &Run) -> Result<()>;
}

pub fn new() -> Box<dyn Output> {
    Box::new(Terminal::new())
}
