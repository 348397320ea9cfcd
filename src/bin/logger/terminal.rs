use log::{Level, Log, Metadata, Record};
use std::io::Write;
use term;

pub struct Terminal(pub Level);

impl Log for Terminal {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.0
    }

    #[allow(unused_must_use)]
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match term::stderr() {
            Some(mut output) => {
                if record.level() < Level::Info {
                    output.fg(term::color::RED);
                } else {
                    output.fg(term::color::GREEN);
                }
                write!(output, "{:>12}", record.target());
                output.reset();
                write!(output, " {}\n", record.args());
            },
            _ => eprintln!("{:>12} {}", record.target(), record.args()),
        }
    }

    fn flush(&self) {
    }
}
