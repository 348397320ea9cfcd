#[macro_use]
extern crate log;

extern crate arguments;
extern crate term;
extern crate timeslice;

use arguments::Arguments;
use log::Level;
use timeslice::schedule::{self, Policy, Schedule};

pub use timeslice::{Config, Error, Result};

const USAGE: &'static str = "
Usage: timeslice [options] <jobs> <policy>

Arguments:
    <jobs>                   File with one job per line: name, arrival, length.
    <policy>                 RR, SRT, FB, or ALL.

Options:
    --config <path>          Configuration file.
    --quantum <ticks>        Quantum of round robin and feedback [default: 1].
    --levels <count>         Number of feedback levels [default: 3].

    --verbose                Display progress information.
    --help                   Display this message.
";

macro_rules! raise(
    ($($arg:tt)+) => (return Err(::timeslice::Error::new(::timeslice::ErrorKind::Input,
                                                         format!($($arg)+))));
);

mod logger;
mod output;

fn main() {
    start().unwrap_or_else(|error| fail(error));
}

fn start() -> Result<()> {
    let arguments = match arguments::parse(std::env::args()) {
        Ok(arguments) => arguments,
        Err(error) => raise!("{}", error),
    };

    if arguments.get::<bool>("help").unwrap_or(false) {
        help();
    }

    if arguments.get::<bool>("verbose").unwrap_or(false) {
        logger::setup(Level::Info);
    } else {
        logger::setup(Level::Warn);
    }

    let mut config = match arguments.get::<String>("config") {
        Some(path) => Config::open(path)?,
        _ => Config::default(),
    };
    if let Some(quantum) = integer(&arguments, "quantum")? {
        config.set_quantum(quantum);
    }
    if let Some(levels) = integer(&arguments, "levels")? {
        config.set_levels(levels);
    }

    if arguments.orphans.len() != 2 {
        raise!("a job file and a policy are required");
    }
    let policies = select(&arguments.orphans[1])?;
    let jobs = timeslice::workload::open(&arguments.orphans[0])?;

    let mut output = output::new();
    for policy in policies {
        let run = schedule::new(policy, &config).run(&jobs)?;
        let history = run.history();
        info!(target: "Timeslice", "{} ({}) completes at {} with {} switches.",
              policy, policy.abbreviation(), history.makespan, history.switches);
        output.next(&run)?;
    }

    Ok(())
}

fn select(name: &str) -> Result<Vec<Policy>> {
    if name.eq_ignore_ascii_case("ALL") {
        Ok(Policy::all())
    } else {
        Ok(vec![name.parse()?])
    }
}

fn integer(arguments: &Arguments, name: &str) -> Result<Option<i64>> {
    if let Some(value) = arguments.get::<i64>(name) {
        return Ok(Some(value));
    }
    if let Some(value) = arguments.get::<f64>(name) {
        if value.fract() == 0.0 {
            return Ok(Some(value as i64));
        }
        raise!("--{} should be an integer but got {}", name, value);
    }
    match arguments.get::<String>(name) {
        Some(value) => match value.parse::<i64>() {
            Ok(value) => Ok(Some(value)),
            _ => raise!("--{} should be an integer but got {:?}", name, value),
        },
        _ => Ok(None),
    }
}

fn help() -> ! {
    println!("{}", USAGE.trim());
    std::process::exit(0);
}

#[allow(unused_must_use)]
fn fail(error: Error) -> ! {
    use std::io::Write;
    match term::stderr() {
        Some(mut output) => {
            output.fg(term::color::RED);
            write!(output, "Error: {}.\n", error);
            output.reset();
        },
        _ => eprintln!("Error: {}.", error),
    }
    std::process::exit(1);
}
